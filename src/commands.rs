//! Execution of parsed `byteutils` subcommands.

use byteutils::{
    codec::{self, CodecError},
    header::{BroadcastHeader, HeaderError},
    hex::{self, HexError},
    msg::{Msg, MsgError},
};
use thiserror::Error;

use crate::cli::{Command, Width};

/// Failures reported by the binary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// The value cannot be represented at the requested width.
    #[error("{value} does not fit in a {width}")]
    ValueOutOfRange {
        /// Value given on the command line.
        value: i64,
        /// Requested width.
        width: Width,
    },
    #[error(transparent)]
    Hex(#[from] HexError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Header(#[from] HeaderError),
    #[error(transparent)]
    Msg(#[from] MsgError),
}

/// Run `command` and return the text to print.
pub fn run(command: &Command) -> Result<String, CliError> {
    match command {
        Command::Encode { width, value } => encode(*width, *value),
        Command::Decode { width, index, hex } => decode(*width, *index, hex),
        Command::Header { hex } => describe_header(hex),
        Command::Msg { hex } => describe_msg(hex),
    }
}

fn encode(width: Width, value: i64) -> Result<String, CliError> {
    let out_of_range = |_| CliError::ValueOutOfRange { value, width };
    let bytes = match width {
        Width::Short => {
            let mut buf = [0u8; codec::SHORT_WIDTH];
            codec::put_short(&mut buf, 0, i16::try_from(value).map_err(out_of_range)?);
            buf.to_vec()
        }
        Width::Int => {
            let mut buf = [0u8; codec::INT_WIDTH];
            codec::put_int(&mut buf, 0, i32::try_from(value).map_err(out_of_range)?);
            buf.to_vec()
        }
    };
    Ok(hex::to_hex(&bytes))
}

fn decode(width: Width, index: usize, text: &str) -> Result<String, CliError> {
    let bytes = hex::from_hex(text)?;
    let value = match width {
        Width::Short => i64::from(codec::try_get_short(&bytes, index)?),
        Width::Int => i64::from(codec::try_get_int(&bytes, index)?),
    };
    Ok(value.to_string())
}

fn describe_header(text: &str) -> Result<String, CliError> {
    let bytes = hex::from_hex(text)?;
    let header = BroadcastHeader::from_bytes(&bytes)?;
    tracing::debug!(?header, "decoded broadcast header");
    Ok(format!(
        "flag={:#010X}{} addr={} data_len={}",
        header.flag,
        if header.has_default_flag() { "" } else { " (unexpected)" },
        header.socket_addr(),
        header.data_len
    ))
}

fn describe_msg(text: &str) -> Result<String, CliError> {
    let bytes = hex::from_hex(text)?;
    let msg = Msg::from_bytes(&bytes)?;
    tracing::debug!(header = ?msg.header, "decoded message frame");
    let topic = msg
        .topic_str()
        .map_or_else(|| hex::to_hex(&msg.topic), str::to_owned);
    Ok(format!(
        "type={} method={} topic={topic} data={} check_sum={}",
        msg.header.msg_type,
        msg.header.method,
        hex::to_hex(&msg.data),
        if msg.has_valid_check_sum() { "ok" } else { "bad" }
    ))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use byteutils::msg::{Method, Msg, MsgError, MsgType};

    use super::{CliError, run};
    use crate::cli::{Command, Width};

    fn native_hex(little: &str, big: &str) -> String {
        if cfg!(target_endian = "little") {
            little.to_owned()
        } else {
            big.to_owned()
        }
    }

    #[rstest]
    #[case(Width::Short, 0x0102, "0102", "0201")]
    #[case(Width::Short, -1, "FFFF", "FFFF")]
    #[case(Width::Int, 0x0A0B_0C0D, "0A0B0C0D", "0D0C0B0A")]
    fn encode_prints_hex(
        #[case] width: Width,
        #[case] value: i64,
        #[case] little: &str,
        #[case] big: &str,
    ) {
        let out = run(&Command::Encode { width, value }).expect("value fits");
        assert_eq!(out, native_hex(little, big));
    }

    #[rstest]
    #[case(Width::Short, 40_000)]
    #[case(Width::Short, -40_000)]
    #[case(Width::Int, i64::from(i32::MAX) + 1)]
    fn encode_rejects_overflow(#[case] width: Width, #[case] value: i64) {
        assert_eq!(
            run(&Command::Encode { width, value }),
            Err(CliError::ValueOutOfRange { value, width })
        );
    }

    #[test]
    fn decode_reads_at_index() {
        let hex = format!("00{}", native_hex("FFFE", "FEFF"));
        let out = run(&Command::Decode {
            width: Width::Short,
            index: 1,
            hex,
        })
        .expect("short fits");
        assert_eq!(out, "-2");
    }

    #[test]
    fn decode_reports_out_of_bounds() {
        let err = run(&Command::Decode {
            width: Width::Int,
            index: 1,
            hex: "01020304".to_owned(),
        })
        .expect_err("int at index 1 overruns four bytes");
        assert!(matches!(err, CliError::Codec(_)));
    }

    #[test]
    fn header_reports_short_input() {
        let err = run(&Command::Header {
            hex: "0011".to_owned(),
        })
        .expect_err("two bytes cannot hold a header");
        assert!(matches!(err, CliError::Header(_)));
    }

    #[test]
    fn header_describes_default_broadcast() {
        let hex = byteutils::hex::to_hex(&byteutils::header::BroadcastHeader::default().to_bytes());
        let out = run(&Command::Header { hex }).expect("full header");
        assert_eq!(out, "flag=0xFFFEC1E5 addr=0.0.0.0:0 data_len=0");
    }

    #[rstest]
    #[case(true, "ok")]
    #[case(false, "bad")]
    fn msg_describes_frame(#[case] seal: bool, #[case] verdict: &str) {
        let mut msg = Msg::new(MsgType::Publish, Method::Report, "temp", &b"\x15"[..])
            .expect("small frame");
        if seal {
            msg.seal();
        }
        let hex = byteutils::hex::to_hex(&msg.to_bytes());
        let out = run(&Command::Msg { hex }).expect("complete frame");
        assert_eq!(
            out,
            format!("type=publish method=report topic=temp data=15 check_sum={verdict}")
        );
    }

    #[test]
    fn msg_reports_unknown_type() {
        let mut bytes = Msg::default().to_bytes();
        bytes[4] = 7;
        let hex = byteutils::hex::to_hex(&bytes);
        assert_eq!(
            run(&Command::Msg { hex }),
            Err(CliError::Msg(MsgError::UnknownType(7)))
        );
    }
}
