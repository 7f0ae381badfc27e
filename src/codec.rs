//! Conversion between fixed-width integers and bytes in a caller buffer.
//!
//! The layout written into the buffer is always the reverse of the platform's
//! native layout. On a little-endian host a short `0x0102` is stored as
//! `[0x01, 0x02]`; on a big-endian host it is stored as `[0x02, 0x01]`. Peers
//! exchanging these bytes must therefore share the same native order.
//!
//! The plain functions panic when `index + width` runs past the end of the
//! buffer, exactly as slice indexing does. The `try_*` variants report the
//! same condition as a [`CodecError`] and leave the buffer untouched.
//!
//! Every operation also has a `*_for` form taking the native order
//! explicitly, which lets either branch be driven on any host.

use crate::byte_order::ByteOrder;

pub mod error;

pub use error::CodecError;

/// Bytes occupied by a short.
pub const SHORT_WIDTH: usize = 2;

/// Bytes occupied by an int.
pub const INT_WIDTH: usize = 4;

/// Fixed-width integer with a byte representation of `N` bytes.
trait Word<const N: usize>: Copy {
    fn into_be(self) -> [u8; N];
    fn into_le(self) -> [u8; N];
    fn from_be(bytes: [u8; N]) -> Self;
    fn from_le(bytes: [u8; N]) -> Self;
}

macro_rules! impl_word {
    ($ty:ty, $width:expr) => {
        impl Word<{ $width }> for $ty {
            fn into_be(self) -> [u8; $width] { self.to_be_bytes() }

            fn into_le(self) -> [u8; $width] { self.to_le_bytes() }

            fn from_be(bytes: [u8; $width]) -> Self { <$ty>::from_be_bytes(bytes) }

            fn from_le(bytes: [u8; $width]) -> Self { <$ty>::from_le_bytes(bytes) }
        }
    };
}

impl_word!(i16, SHORT_WIDTH);
impl_word!(i32, INT_WIDTH);

fn put_word<T: Word<N>, const N: usize>(
    native: ByteOrder,
    buffer: &mut [u8],
    index: usize,
    value: T,
) {
    let dst = &mut buffer[index..][..N];
    match native {
        // Most significant byte lands at `index`.
        ByteOrder::Little => dst.copy_from_slice(&value.into_be()),
        // Least significant byte lands at `index`.
        ByteOrder::Big => dst.copy_from_slice(&value.into_le()),
    }
}

fn get_word<T: Word<N>, const N: usize>(native: ByteOrder, buffer: &[u8], index: usize) -> T {
    // Octets are unsigned, so no byte can sign-extend into its neighbours.
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(&buffer[index..][..N]);
    match native {
        ByteOrder::Little => T::from_be(bytes),
        ByteOrder::Big => T::from_le(bytes),
    }
}

/// Write a short into `buffer[index..index + 2]`.
///
/// # Panics
///
/// Panics if `index + 2` exceeds `buffer.len()`.
///
/// # Examples
///
/// ```
/// use byteutils::codec::{get_short, put_short};
///
/// let mut buf = [0u8; 4];
/// put_short(&mut buf, 1, -2);
/// assert_eq!(get_short(&buf, 1), -2);
/// ```
pub fn put_short(buffer: &mut [u8], index: usize, value: i16) {
    put_short_for(ByteOrder::native(), buffer, index, value);
}

/// Read the short stored at `buffer[index..index + 2]`.
///
/// # Panics
///
/// Panics if `index + 2` exceeds `buffer.len()`.
#[must_use]
pub fn get_short(buffer: &[u8], index: usize) -> i16 {
    get_short_for(ByteOrder::native(), buffer, index)
}

/// Write an int into `buffer[index..index + 4]`.
///
/// # Panics
///
/// Panics if `index + 4` exceeds `buffer.len()`.
pub fn put_int(buffer: &mut [u8], index: usize, value: i32) {
    put_int_for(ByteOrder::native(), buffer, index, value);
}

/// Read the int stored at `buffer[index..index + 4]`.
///
/// # Panics
///
/// Panics if `index + 4` exceeds `buffer.len()`.
#[must_use]
pub fn get_int(buffer: &[u8], index: usize) -> i32 {
    get_int_for(ByteOrder::native(), buffer, index)
}

/// [`put_short`] as it behaves on a host whose native order is `native`.
///
/// # Panics
///
/// Panics if `index + 2` exceeds `buffer.len()`.
///
/// # Examples
///
/// ```
/// use byteutils::{ByteOrder, codec::put_short_for};
///
/// let mut buf = [0u8; 2];
/// put_short_for(ByteOrder::Little, &mut buf, 0, 0x0102);
/// assert_eq!(buf, [0x01, 0x02]);
/// put_short_for(ByteOrder::Big, &mut buf, 0, 0x0102);
/// assert_eq!(buf, [0x02, 0x01]);
/// ```
pub fn put_short_for(native: ByteOrder, buffer: &mut [u8], index: usize, value: i16) {
    put_word::<i16, SHORT_WIDTH>(native, buffer, index, value);
}

/// [`get_short`] as it behaves on a host whose native order is `native`.
///
/// # Panics
///
/// Panics if `index + 2` exceeds `buffer.len()`.
#[must_use]
pub fn get_short_for(native: ByteOrder, buffer: &[u8], index: usize) -> i16 {
    get_word::<i16, SHORT_WIDTH>(native, buffer, index)
}

/// [`put_int`] as it behaves on a host whose native order is `native`.
///
/// # Panics
///
/// Panics if `index + 4` exceeds `buffer.len()`.
pub fn put_int_for(native: ByteOrder, buffer: &mut [u8], index: usize, value: i32) {
    put_word::<i32, INT_WIDTH>(native, buffer, index, value);
}

/// [`get_int`] as it behaves on a host whose native order is `native`.
///
/// # Panics
///
/// Panics if `index + 4` exceeds `buffer.len()`.
#[must_use]
pub fn get_int_for(native: ByteOrder, buffer: &[u8], index: usize) -> i32 {
    get_word::<i32, INT_WIDTH>(native, buffer, index)
}

/// Check that `index..index + width` lies inside a buffer of `len` bytes.
fn check_range(len: usize, index: usize, width: usize) -> Result<(), CodecError> {
    match index.checked_add(width) {
        Some(end) if end <= len => Ok(()),
        _ => Err(CodecError::OutOfBounds { index, width, len }),
    }
}

/// Checked form of [`put_short`].
///
/// # Errors
///
/// Returns [`CodecError::OutOfBounds`] if the two bytes do not fit in
/// `buffer`. Nothing is written in that case.
pub fn try_put_short(buffer: &mut [u8], index: usize, value: i16) -> Result<(), CodecError> {
    check_range(buffer.len(), index, SHORT_WIDTH)?;
    put_short(buffer, index, value);
    Ok(())
}

/// Checked form of [`get_short`].
///
/// # Errors
///
/// Returns [`CodecError::OutOfBounds`] if the two bytes are not all inside
/// `buffer`.
pub fn try_get_short(buffer: &[u8], index: usize) -> Result<i16, CodecError> {
    check_range(buffer.len(), index, SHORT_WIDTH)?;
    Ok(get_short(buffer, index))
}

/// Checked form of [`put_int`].
///
/// # Errors
///
/// Returns [`CodecError::OutOfBounds`] if the four bytes do not fit in
/// `buffer`. Nothing is written in that case.
pub fn try_put_int(buffer: &mut [u8], index: usize, value: i32) -> Result<(), CodecError> {
    check_range(buffer.len(), index, INT_WIDTH)?;
    put_int(buffer, index, value);
    Ok(())
}

/// Checked form of [`get_int`].
///
/// # Errors
///
/// Returns [`CodecError::OutOfBounds`] if the four bytes are not all inside
/// `buffer`.
pub fn try_get_int(buffer: &[u8], index: usize) -> Result<i32, CodecError> {
    check_range(buffer.len(), index, INT_WIDTH)?;
    Ok(get_int(buffer, index))
}
