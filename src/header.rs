//! Fixed header carried at the front of UDP discovery broadcasts.
//!
//! The header is twelve bytes: a magic flag, the announcing host's IPv4
//! address, its service port and the length of the payload that follows. Every
//! field goes through [`crate::codec`], so peers must share the native byte
//! order of the host that wrote the datagram.

use std::net::{Ipv4Addr, SocketAddrV4};

use bytes::BytesMut;
use thiserror::Error;

use crate::codec::{INT_WIDTH, SHORT_WIDTH, get_int, get_short, put_int, put_short};

/// Encoded size of a [`BroadcastHeader`].
pub const BROADCAST_HEADER_LEN: usize = 2 * INT_WIDTH + 2 * SHORT_WIDTH;

/// Flag identifying a discovery broadcast, `0xFFFE_C1E5` as a signed int.
#[expect(
    clippy::cast_possible_wrap,
    reason = "the flag is a bit pattern; the high bit is meant to land in the sign"
)]
pub const DEFAULT_BROADCAST_FLAG: i32 = 0xFFFE_C1E5_u32 as i32;

const FLAG_OFFSET: usize = 0;
const IP_OFFSET: usize = FLAG_OFFSET + INT_WIDTH;
const PORT_OFFSET: usize = IP_OFFSET + INT_WIDTH;
const DATA_LEN_OFFSET: usize = PORT_OFFSET + SHORT_WIDTH;

/// Errors raised while moving a header in or out of a buffer.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// The buffer cannot hold a full header.
    #[error("buffer of {len} bytes is shorter than the {need}-byte broadcast header")]
    TooShort {
        /// Bytes available.
        len: usize,
        /// Bytes required.
        need: usize,
    },
}

fn ensure_len(len: usize) -> Result<(), HeaderError> {
    if len < BROADCAST_HEADER_LEN {
        return Err(HeaderError::TooShort {
            len,
            need: BROADCAST_HEADER_LEN,
        });
    }
    Ok(())
}

/// Header of a discovery broadcast datagram.
///
/// # Examples
///
/// ```
/// use std::net::{Ipv4Addr, SocketAddrV4};
///
/// use byteutils::header::BroadcastHeader;
///
/// let addr = SocketAddrV4::new(Ipv4Addr::new(192, 168, 1, 20), 8080);
/// let header = BroadcastHeader::announce(addr, 5);
/// let decoded = BroadcastHeader::from_bytes(&header.to_bytes()).expect("full header");
/// assert_eq!(decoded, header);
/// assert_eq!(decoded.socket_addr(), addr);
/// assert!(decoded.has_default_flag());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BroadcastHeader {
    /// Magic flag, [`DEFAULT_BROADCAST_FLAG`] for well-formed broadcasts.
    pub flag: i32,
    /// IPv4 address of the announcing host, packed with [`ipv4_to_int`].
    pub ip: i32,
    /// Service port as carried on the wire.
    pub port: i16,
    /// Length of the payload following the header.
    pub data_len: i16,
}

impl Default for BroadcastHeader {
    fn default() -> Self {
        Self {
            flag: DEFAULT_BROADCAST_FLAG,
            ip: 0,
            port: 0,
            data_len: 0,
        }
    }
}

impl BroadcastHeader {
    /// Header announcing `addr` with a payload of `data_len` bytes.
    #[must_use]
    #[expect(
        clippy::cast_possible_wrap,
        reason = "ports above i16::MAX are carried as their two's complement bit pattern"
    )]
    pub fn announce(addr: SocketAddrV4, data_len: i16) -> Self {
        Self {
            ip: ipv4_to_int(*addr.ip()),
            port: addr.port() as i16,
            data_len,
            ..Self::default()
        }
    }

    /// Decode a header from the first twelve bytes of `bytes`.
    ///
    /// Trailing bytes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::TooShort`] if `bytes` holds fewer than
    /// [`BROADCAST_HEADER_LEN`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HeaderError> {
        if let Err(err) = ensure_len(bytes.len()) {
            tracing::debug!(len = bytes.len(), "rejecting broadcast header: {err}");
            return Err(err);
        }

        Ok(Self {
            flag: get_int(bytes, FLAG_OFFSET),
            ip: get_int(bytes, IP_OFFSET),
            port: get_short(bytes, PORT_OFFSET),
            data_len: get_short(bytes, DATA_LEN_OFFSET),
        })
    }

    /// Encode into the first twelve bytes of `dst`, leaving the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::TooShort`] if `dst` holds fewer than
    /// [`BROADCAST_HEADER_LEN`] bytes. Nothing is written in that case.
    pub fn write_to(&self, dst: &mut [u8]) -> Result<(), HeaderError> {
        ensure_len(dst.len())?;
        put_int(dst, FLAG_OFFSET, self.flag);
        put_int(dst, IP_OFFSET, self.ip);
        put_short(dst, PORT_OFFSET, self.port);
        put_short(dst, DATA_LEN_OFFSET, self.data_len);
        Ok(())
    }

    /// Encode into a fresh array.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; BROADCAST_HEADER_LEN] {
        let mut out = [0u8; BROADCAST_HEADER_LEN];
        put_int(&mut out, FLAG_OFFSET, self.flag);
        put_int(&mut out, IP_OFFSET, self.ip);
        put_short(&mut out, PORT_OFFSET, self.port);
        put_short(&mut out, DATA_LEN_OFFSET, self.data_len);
        out
    }

    /// Append the encoded header to `dst`.
    pub fn encode_into(&self, dst: &mut BytesMut) { dst.extend_from_slice(&self.to_bytes()); }

    /// Report whether the flag marks a discovery broadcast.
    #[must_use]
    pub const fn has_default_flag(&self) -> bool { self.flag == DEFAULT_BROADCAST_FLAG }

    /// Announced IPv4 address.
    #[must_use]
    pub fn ip_addr(&self) -> Ipv4Addr { int_to_ipv4(self.ip) }

    /// Announced port, reinterpreting the wire value as unsigned.
    #[must_use]
    #[expect(
        clippy::cast_sign_loss,
        reason = "the wire carries the port's bit pattern in a signed short"
    )]
    pub const fn port(&self) -> u16 { self.port as u16 }

    /// Announced socket address.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddrV4 { SocketAddrV4::new(self.ip_addr(), self.port()) }
}

/// Pack an IPv4 address into an int the way the header stores it.
///
/// The octets are read back through [`get_int`], so writing the result with
/// [`put_int`] reproduces them in address order.
#[must_use]
pub fn ipv4_to_int(addr: Ipv4Addr) -> i32 { get_int(&addr.octets(), 0) }

/// Inverse of [`ipv4_to_int`].
#[must_use]
pub fn int_to_ipv4(value: i32) -> Ipv4Addr {
    let mut octets = [0u8; 4];
    put_int(&mut octets, 0, value);
    Ipv4Addr::from(octets)
}
