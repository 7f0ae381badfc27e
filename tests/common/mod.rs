//! Shared utilities for integration tests.
//!
//! Provides a serialised handle to the global [`logtest::Logger`] so tests
//! asserting on log output do not observe each other's records.

// Items in this shared module may not be used by all test binaries that import it.
#![allow(
    dead_code,
    reason = "shared test utilities are not used by all test binaries"
)]

use std::sync::{Mutex, MutexGuard, OnceLock};

use log::Level;
use logtest::Logger;
use rstest::fixture;

/// Handle to the global logger with exclusive access.
pub struct LoggerHandle {
    guard: MutexGuard<'static, Logger>,
}

impl LoggerHandle {
    /// Acquire the global [`Logger`] instance.
    #[expect(
        clippy::expect_used,
        reason = "a poisoned logger means an earlier test already failed"
    )]
    pub fn new() -> Self {
        static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

        let logger = LOGGER.get_or_init(|| Mutex::new(Logger::start()));
        let guard = logger.lock().expect("logger poisoned");

        Self { guard }
    }

    /// Drop every captured record.
    pub fn clear(&mut self) { while self.guard.pop().is_some() {} }

    /// Find the first captured record whose message contains `needle`.
    pub fn find(&mut self, needle: &str) -> Option<(Level, String)> {
        while let Some(record) = self.guard.pop() {
            let message = record.args().to_string();
            if message.contains(needle) {
                return Some((record.level(), message));
            }
        }
        None
    }
}

#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn logger() -> LoggerHandle { LoggerHandle::new() }
