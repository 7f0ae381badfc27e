//! Method-call access to the codec on byte slices.

use crate::{codec, hex};

/// Read and write single bytes, shorts and ints at an index of a byte slice.
///
/// Implemented for `[u8]`, so it also applies to arrays, `Vec<u8>` and
/// `bytes::BytesMut` through deref. Shorts and ints use the layout described
/// in [`crate::codec`].
///
/// # Examples
///
/// ```
/// use byteutils::ByteSliceExt;
///
/// let mut buf = vec![0u8; 6];
/// buf.put_int(0, 0x0A0B_0C0D);
/// buf.put_short(4, -1);
/// assert_eq!(buf.get_int(0), 0x0A0B_0C0D);
/// assert_eq!(buf.get_short(4), -1);
/// assert_eq!(buf.get_byte(5), 0xFF);
/// ```
pub trait ByteSliceExt {
    /// Byte at `index`.
    fn get_byte(&self, index: usize) -> u8;

    /// Overwrite the byte at `index`.
    fn put_byte(&mut self, index: usize, value: u8);

    /// See [`codec::get_short`].
    fn get_short(&self, index: usize) -> i16;

    /// See [`codec::put_short`].
    fn put_short(&mut self, index: usize, value: i16);

    /// See [`codec::get_int`].
    fn get_int(&self, index: usize) -> i32;

    /// See [`codec::put_int`].
    fn put_int(&mut self, index: usize, value: i32);

    /// See [`hex::to_hex_string`].
    fn to_hex_string(&self, index: usize, len: usize) -> String;
}

impl ByteSliceExt for [u8] {
    fn get_byte(&self, index: usize) -> u8 { self[index] }

    fn put_byte(&mut self, index: usize, value: u8) { self[index] = value; }

    fn get_short(&self, index: usize) -> i16 { codec::get_short(self, index) }

    fn put_short(&mut self, index: usize, value: i16) { codec::put_short(self, index, value); }

    fn get_int(&self, index: usize) -> i32 { codec::get_int(self, index) }

    fn put_int(&mut self, index: usize, value: i32) { codec::put_int(self, index, value); }

    fn to_hex_string(&self, index: usize, len: usize) -> String {
        hex::to_hex_string(self, index, len)
    }
}
