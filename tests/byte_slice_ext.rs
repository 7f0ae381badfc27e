//! Integration coverage for slice-method access to the codec.

use bytes::BytesMut;
use byteutils::{ByteOrder, ByteSliceExt, CodecError, codec, try_get_int, try_put_short};
use rstest::rstest;

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
fn methods_match_free_functions(#[case] index: usize) {
    let mut via_method = vec![0u8; 8];
    let mut via_function = vec![0u8; 8];

    via_method.put_int(index, -559_038_737);
    codec::put_int(&mut via_function, index, -559_038_737);
    assert_eq!(via_method, via_function);
    assert_eq!(via_method.get_int(index), codec::get_int(&via_function, index));
    assert_eq!(via_method.get_short(index), codec::get_short(&via_function, index));
}

#[test]
fn single_bytes_are_raw() {
    let mut buf = [0u8; 3];
    buf.put_byte(1, 0xFE);
    assert_eq!(buf.get_byte(1), 0xFE);
    assert_eq!(buf, [0x00, 0xFE, 0x00]);
}

#[test]
fn short_layout_on_this_host() {
    let mut buf = [0u8; 4];
    buf.put_short(0, 0x0102);
    let expected = match ByteOrder::native() {
        ByteOrder::Little => [0x01, 0x02, 0x00, 0x00],
        ByteOrder::Big => [0x02, 0x01, 0x00, 0x00],
    };
    assert_eq!(buf, expected);
}

#[test]
fn works_through_bytes_mut() {
    let mut buf = BytesMut::zeroed(6);
    buf.put_short(0, i16::MIN);
    buf.put_int(2, i32::MAX);
    assert_eq!(buf.get_short(0), i16::MIN);
    assert_eq!(buf.get_int(2), i32::MAX);
}

#[test]
fn hex_rendering_covers_requested_range() {
    let mut buf = [0u8; 6];
    buf.put_int(2, -1);
    assert_eq!(buf.to_hex_string(0, 6), "0000FFFFFFFF");
    assert_eq!(buf.to_hex_string(1, 2), "00FF");
}

#[test]
#[should_panic(expected = "out of range")]
fn method_past_end_panics() {
    let buf = vec![0u8; 5];
    let _ = buf.get_int(2);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn byte_past_end_panics() {
    let mut buf = [0u8; 2];
    buf.put_byte(2, 1);
}

#[test]
fn checked_functions_leave_short_buffers_alone() {
    let mut buf = [0x77u8; 1];
    assert_eq!(
        try_put_short(&mut buf, 0, 1),
        Err(CodecError::OutOfBounds {
            index: 0,
            width: 2,
            len: 1,
        })
    );
    assert_eq!(buf, [0x77]);
    assert!(try_get_int(&buf, 0).is_err());
}
