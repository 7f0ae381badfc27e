//! Byte order selection for the integer codec.
//!
//! The codec branches on the byte order the crate was compiled for. Tests and
//! callers that need to exercise the other branch can pass a [`ByteOrder`]
//! explicitly to the `*_for` codec functions.

/// Byte order of multi-byte integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl ByteOrder {
    /// Native byte order of the compilation target.
    ///
    /// # Examples
    ///
    /// ```
    /// use byteutils::ByteOrder;
    ///
    /// let order = ByteOrder::native();
    /// assert_eq!(order.is_little(), cfg!(target_endian = "little"));
    /// ```
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    /// Report whether this is little-endian.
    #[must_use]
    pub const fn is_little(self) -> bool { matches!(self, Self::Little) }

    /// Report whether this is big-endian.
    #[must_use]
    pub const fn is_big(self) -> bool { matches!(self, Self::Big) }

    /// The opposite byte order.
    ///
    /// The codec lays bytes out in `native().reversed()` order.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Big => Self::Little,
            Self::Little => Self::Big,
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self { Self::native() }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Big => f.write_str("big-endian"),
            Self::Little => f.write_str("little-endian"),
        }
    }
}
