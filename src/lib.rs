#![doc(html_root_url = "https://docs.rs/byteutils/latest")]
//! Public API for the `byteutils` library.
//!
//! This crate packs 16-bit and 32-bit signed integers into caller-owned byte
//! buffers. The byte layout mirrors the platform's native order: it is
//! big-endian in the buffer on little-endian hosts and little-endian on
//! big-endian hosts. See [`codec`] for the details.
//!
//! Besides the codec, the crate provides method-call access on byte slices
//! ([`ByteSliceExt`]), hex rendering ([`hex`]), the twelve-byte discovery
//! broadcast header ([`header`]) and stream message frames ([`msg`]), both
//! built on the codec.

pub mod byte_order;
pub mod codec;
pub mod ext;
pub mod header;
pub mod hex;
pub mod msg;

pub use byte_order::ByteOrder;
pub use codec::{
    CodecError,
    INT_WIDTH,
    SHORT_WIDTH,
    get_int,
    get_short,
    put_int,
    put_short,
    try_get_int,
    try_get_short,
    try_put_int,
    try_put_short,
};
pub use ext::ByteSliceExt;
pub use header::{BROADCAST_HEADER_LEN, BroadcastHeader, DEFAULT_BROADCAST_FLAG, HeaderError};
pub use hex::HexError;
pub use msg::{MSG_FLAG, MSG_HEADER_LEN, Method, Msg, MsgError, MsgHeader, MsgType};
