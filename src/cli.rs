//! Command line interface for the `byteutils` binary.
//!
//! Kept free of crate imports so `build.rs` can include it to render the man
//! page.

use clap::{Parser, Subcommand, ValueEnum};

/// Command line arguments for the `byteutils` binary.
#[derive(Debug, Parser)]
#[command(
    name = "byteutils",
    version,
    about = "Encode and decode shorts and ints in native-mirrored byte order"
)]
pub struct Cli {
    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `byteutils` binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the hex encoding of a value.
    Encode {
        /// Integer width.
        #[arg(short, long, value_enum, default_value_t = Width::Int)]
        width: Width,
        /// Value to encode.
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Decode a value from hex bytes.
    Decode {
        /// Integer width.
        #[arg(short, long, value_enum, default_value_t = Width::Int)]
        width: Width,
        /// Byte offset of the value.
        #[arg(short, long, default_value_t = 0)]
        index: usize,
        /// Buffer contents as hex.
        hex: String,
    },
    /// Decode a twelve-byte broadcast header from hex.
    Header {
        /// Header bytes as hex.
        hex: String,
    },
    /// Decode a message frame (sixteen-byte header, topic, data) from hex.
    Msg {
        /// Frame bytes as hex.
        hex: String,
    },
}

/// Integer width selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Width {
    /// 16-bit signed.
    Short,
    /// 32-bit signed.
    Int,
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Short => f.write_str("short"),
            Self::Int => f.write_str("int"),
        }
    }
}
