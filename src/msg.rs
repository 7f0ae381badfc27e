//! Framed messages exchanged over a connected stream.
//!
//! A frame is a sixteen-byte [`MsgHeader`] followed by `topic_len` bytes of
//! topic and `data_len` bytes of payload. Header fields go through
//! [`crate::codec`] and share its native-order-mirrored layout.
//!
//! | Offset | Width | Field       |
//! |--------|-------|-------------|
//! | 0      | 4     | flag        |
//! | 4      | 1     | type        |
//! | 5      | 1     | method      |
//! | 6      | 2     | topic_len   |
//! | 8      | 2     | data_len    |
//! | 10     | 4     | check_sum   |
//! | 14     | 2     | reserved    |

use std::fmt;

use bytes::{Buf, Bytes, BytesMut};
use thiserror::Error;

use crate::{
    codec::{INT_WIDTH, SHORT_WIDTH, get_int, get_short, put_int, put_short},
    ext::ByteSliceExt,
};

/// Encoded size of a [`MsgHeader`].
pub const MSG_HEADER_LEN: usize = 16;

/// Flag written at the front of every frame, `0xFFFE_B0D4` as a signed int.
#[expect(
    clippy::cast_possible_wrap,
    reason = "the flag is a bit pattern; the high bit is meant to land in the sign"
)]
pub const MSG_FLAG: i32 = 0xFFFE_B0D4_u32 as i32;

const FLAG_OFFSET: usize = 0;
const TYPE_OFFSET: usize = FLAG_OFFSET + INT_WIDTH;
const METHOD_OFFSET: usize = TYPE_OFFSET + 1;
const TOPIC_LEN_OFFSET: usize = METHOD_OFFSET + 1;
const DATA_LEN_OFFSET: usize = TOPIC_LEN_OFFSET + SHORT_WIDTH;
const CHECK_SUM_OFFSET: usize = DATA_LEN_OFFSET + SHORT_WIDTH;
const RESERVED_OFFSET: usize = CHECK_SUM_OFFSET + INT_WIDTH;

/// Errors raised while building, encoding or decoding frames.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MsgError {
    /// The buffer cannot hold a full header.
    #[error("buffer of {len} bytes is shorter than the {need}-byte message header")]
    TooShort {
        /// Bytes available.
        len: usize,
        /// Bytes required.
        need: usize,
    },
    /// The header announces more topic and data than the buffer holds.
    #[error("frame needs {need} bytes but only {len} are available")]
    Truncated {
        /// Bytes available.
        len: usize,
        /// Bytes the header announces, header included.
        need: usize,
    },
    /// The type byte names no [`MsgType`].
    #[error("unknown message type {0}")]
    UnknownType(u8),
    /// The method byte names no [`Method`].
    #[error("unknown message method {0}")]
    UnknownMethod(u8),
    /// A topic or payload does not fit its 16-bit length field.
    #[error("{field} of {len} bytes exceeds the 65535-byte limit")]
    TooLong {
        /// Either `"topic"` or `"data"`.
        field: &'static str,
        /// Length supplied.
        len: usize,
    },
}

/// Kind of frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MsgType {
    #[default]
    Publish = 0,
    Subscribe = 1,
    Unsubscribe = 2,
}

impl TryFrom<u8> for MsgType {
    type Error = MsgError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Publish),
            1 => Ok(Self::Subscribe),
            2 => Ok(Self::Unsubscribe),
            other => Err(MsgError::UnknownType(other)),
        }
    }
}

impl From<MsgType> for u8 {
    fn from(value: MsgType) -> Self { value as u8 }
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Publish => f.write_str("publish"),
            Self::Subscribe => f.write_str("subscribe"),
            Self::Unsubscribe => f.write_str("unsubscribe"),
        }
    }
}

/// Interaction a frame belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Method {
    /// Periodic or on-change value report.
    #[default]
    Report = 0,
    /// Read-only query, answered by [`Method::Reply`].
    Query = 1,
    Reply = 2,
    /// Request to act, answered by [`Method::Response`].
    Request = 3,
    Response = 4,
}

impl TryFrom<u8> for Method {
    type Error = MsgError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Report),
            1 => Ok(Self::Query),
            2 => Ok(Self::Reply),
            3 => Ok(Self::Request),
            4 => Ok(Self::Response),
            other => Err(MsgError::UnknownMethod(other)),
        }
    }
}

impl From<Method> for u8 {
    fn from(value: Method) -> Self { value as u8 }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Report => "report",
            Self::Query => "query",
            Self::Reply => "reply",
            Self::Request => "request",
            Self::Response => "response",
        };
        f.write_str(name)
    }
}

#[expect(
    clippy::cast_possible_wrap,
    reason = "unsigned fields travel as the bit pattern of the signed codec width"
)]
fn put_u16(dst: &mut [u8], index: usize, value: u16) { put_short(dst, index, value as i16); }

#[expect(
    clippy::cast_sign_loss,
    reason = "unsigned fields travel as the bit pattern of the signed codec width"
)]
fn get_u16(src: &[u8], index: usize) -> u16 { get_short(src, index) as u16 }

#[expect(
    clippy::cast_possible_wrap,
    reason = "unsigned fields travel as the bit pattern of the signed codec width"
)]
fn put_u32(dst: &mut [u8], index: usize, value: u32) { put_int(dst, index, value as i32); }

#[expect(
    clippy::cast_sign_loss,
    reason = "unsigned fields travel as the bit pattern of the signed codec width"
)]
fn get_u32(src: &[u8], index: usize) -> u32 { get_int(src, index) as u32 }

fn length_field(field: &'static str, len: usize) -> Result<u16, MsgError> {
    u16::try_from(len).map_err(|_| MsgError::TooLong { field, len })
}

/// Header at the front of every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MsgHeader {
    /// Flag as read from the wire. Encoding always writes [`MSG_FLAG`].
    pub flag: i32,
    pub msg_type: MsgType,
    pub method: Method,
    pub topic_len: u16,
    pub data_len: u16,
    pub check_sum: u32,
    /// Reserved as read from the wire. Encoding always writes zero.
    pub reserved: u16,
}

impl Default for MsgHeader {
    fn default() -> Self {
        Self {
            flag: MSG_FLAG,
            msg_type: MsgType::default(),
            method: Method::default(),
            topic_len: 0,
            data_len: 0,
            check_sum: 0,
            reserved: 0,
        }
    }
}

impl MsgHeader {
    /// Decode a header from the first sixteen bytes of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`MsgError::TooShort`] if fewer than [`MSG_HEADER_LEN`] bytes
    /// are supplied, and [`MsgError::UnknownType`] or
    /// [`MsgError::UnknownMethod`] if either selector byte is unassigned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MsgError> {
        if bytes.len() < MSG_HEADER_LEN {
            let err = MsgError::TooShort {
                len: bytes.len(),
                need: MSG_HEADER_LEN,
            };
            tracing::debug!(len = bytes.len(), "rejecting message header: {err}");
            return Err(err);
        }

        let (msg_type, method) = MsgType::try_from(bytes.get_byte(TYPE_OFFSET))
            .and_then(|msg_type| {
                Method::try_from(bytes.get_byte(METHOD_OFFSET)).map(|method| (msg_type, method))
            })
            .inspect_err(|err| tracing::debug!("rejecting message header: {err}"))?;

        Ok(Self {
            flag: get_int(bytes, FLAG_OFFSET),
            msg_type,
            method,
            topic_len: get_u16(bytes, TOPIC_LEN_OFFSET),
            data_len: get_u16(bytes, DATA_LEN_OFFSET),
            check_sum: get_u32(bytes, CHECK_SUM_OFFSET),
            reserved: get_u16(bytes, RESERVED_OFFSET),
        })
    }

    /// Encode into the first sixteen bytes of `dst`, leaving the rest
    /// untouched. The flag is always [`MSG_FLAG`] and reserved is zero.
    ///
    /// # Errors
    ///
    /// Returns [`MsgError::TooShort`] if `dst` holds fewer than
    /// [`MSG_HEADER_LEN`] bytes. Nothing is written in that case.
    pub fn write_to(&self, dst: &mut [u8]) -> Result<(), MsgError> {
        if dst.len() < MSG_HEADER_LEN {
            return Err(MsgError::TooShort {
                len: dst.len(),
                need: MSG_HEADER_LEN,
            });
        }
        self.encode(dst);
        Ok(())
    }

    /// Encode into a fresh array.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; MSG_HEADER_LEN] {
        let mut out = [0u8; MSG_HEADER_LEN];
        self.encode(&mut out);
        out
    }

    fn encode(&self, dst: &mut [u8]) {
        put_int(dst, FLAG_OFFSET, MSG_FLAG);
        dst.put_byte(TYPE_OFFSET, self.msg_type.into());
        dst.put_byte(METHOD_OFFSET, self.method.into());
        put_u16(dst, TOPIC_LEN_OFFSET, self.topic_len);
        put_u16(dst, DATA_LEN_OFFSET, self.data_len);
        put_u32(dst, CHECK_SUM_OFFSET, self.check_sum);
        put_u16(dst, RESERVED_OFFSET, 0);
    }

    /// Report whether the flag read from the wire is [`MSG_FLAG`].
    #[must_use]
    pub const fn has_msg_flag(&self) -> bool { self.flag == MSG_FLAG }

    /// Total frame length announced by this header.
    #[must_use]
    pub fn frame_len(&self) -> usize {
        MSG_HEADER_LEN + usize::from(self.topic_len) + usize::from(self.data_len)
    }
}

/// A header with its topic and payload.
///
/// # Examples
///
/// ```
/// use byteutils::msg::{Method, Msg, MsgType};
///
/// let msg = Msg::new(MsgType::Publish, Method::Report, "temp", &b"21.5"[..])
///     .expect("short topic and payload")
///     .sealed();
/// let decoded = Msg::from_bytes(&msg.to_bytes()).expect("complete frame");
/// assert_eq!(decoded, msg);
/// assert!(decoded.has_valid_check_sum());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Msg {
    pub header: MsgHeader,
    pub topic: Bytes,
    pub data: Bytes,
}

impl Msg {
    /// Build an unsealed frame. Length fields are filled in from `topic` and
    /// `data`; the checksum is left at zero until [`Msg::seal`].
    ///
    /// # Errors
    ///
    /// Returns [`MsgError::TooLong`] if the topic or payload exceeds
    /// `u16::MAX` bytes.
    pub fn new(
        msg_type: MsgType,
        method: Method,
        topic: &str,
        data: impl Into<Bytes>,
    ) -> Result<Self, MsgError> {
        let topic = Bytes::copy_from_slice(topic.as_bytes());
        let data = data.into();
        let header = MsgHeader {
            msg_type,
            method,
            topic_len: length_field("topic", topic.len())?,
            data_len: length_field("data", data.len())?,
            ..MsgHeader::default()
        };
        Ok(Self {
            header,
            topic,
            data,
        })
    }

    /// Encoded length of the frame.
    #[must_use]
    pub fn encoded_len(&self) -> usize { MSG_HEADER_LEN + self.topic.len() + self.data.len() }

    /// Topic as text, if it is valid UTF-8.
    #[must_use]
    pub fn topic_str(&self) -> Option<&str> { std::str::from_utf8(&self.topic).ok() }

    /// Sum of every unsigned byte of the encoded frame, taken with the
    /// checksum field zeroed. The sum wraps at 32 bits.
    #[must_use]
    pub fn calc_check_sum(&self) -> u32 {
        let header = MsgHeader {
            check_sum: 0,
            ..self.header
        }
        .to_bytes();
        header
            .iter()
            .chain(self.topic.iter())
            .chain(self.data.iter())
            .fold(0u32, |sum, &byte| sum.wrapping_add(u32::from(byte)))
    }

    /// Store [`Msg::calc_check_sum`] in the header.
    pub fn seal(&mut self) { self.header.check_sum = self.calc_check_sum(); }

    /// Consuming form of [`Msg::seal`].
    #[must_use]
    pub fn sealed(mut self) -> Self {
        self.seal();
        self
    }

    /// Report whether the stored checksum matches the frame contents.
    #[must_use]
    pub fn has_valid_check_sum(&self) -> bool { self.header.check_sum == self.calc_check_sum() }

    /// Append the encoded frame to `dst`.
    pub fn encode_into(&self, dst: &mut BytesMut) {
        dst.reserve(self.encoded_len());
        dst.extend_from_slice(&self.header.to_bytes());
        dst.extend_from_slice(&self.topic);
        dst.extend_from_slice(&self.data);
    }

    /// Encode into a fresh buffer.
    #[must_use]
    pub fn to_bytes(&self) -> BytesMut {
        let mut out = BytesMut::with_capacity(self.encoded_len());
        self.encode_into(&mut out);
        out
    }

    /// Decode one complete frame from the front of `bytes`. Trailing bytes
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns the header errors of [`MsgHeader::from_bytes`], or
    /// [`MsgError::Truncated`] if the topic and payload the header announces
    /// are not all present.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MsgError> {
        let header = MsgHeader::from_bytes(bytes)?;
        let need = header.frame_len();
        if bytes.len() < need {
            return Err(MsgError::Truncated {
                len: bytes.len(),
                need,
            });
        }
        let topic_end = MSG_HEADER_LEN + usize::from(header.topic_len);
        Ok(Self {
            header,
            topic: Bytes::copy_from_slice(&bytes[MSG_HEADER_LEN..topic_end]),
            data: Bytes::copy_from_slice(&bytes[topic_end..need]),
        })
    }

    /// Split the next frame off a stream buffer.
    ///
    /// Returns `Ok(None)` and leaves `src` untouched while the header or the
    /// body is still incomplete. On success the frame's bytes are consumed
    /// and anything after them stays in `src`.
    ///
    /// # Errors
    ///
    /// Returns the header errors of [`MsgHeader::from_bytes`] once a full
    /// header is buffered.
    pub fn decode(src: &mut BytesMut) -> Result<Option<Self>, MsgError> {
        if src.len() < MSG_HEADER_LEN {
            return Ok(None);
        }
        let header = MsgHeader::from_bytes(&src[..])?;
        if src.len() < header.frame_len() {
            return Ok(None);
        }

        let mut frame = src.split_to(header.frame_len());
        frame.advance(MSG_HEADER_LEN);
        let topic = frame.split_to(usize::from(header.topic_len)).freeze();
        Ok(Some(Self {
            header,
            topic,
            data: frame.freeze(),
        }))
    }
}
