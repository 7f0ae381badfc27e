//! Generated round-trip checks for the integer codec.

use proptest::{
    prelude::{Just, Strategy, any, prop_oneof},
    prop_assert,
    prop_assert_eq,
    test_runner::{Config as ProptestConfig, RngAlgorithm, TestRng, TestRunner},
};
use rstest::rstest;

use crate::{
    byte_order::ByteOrder,
    codec::{INT_WIDTH, SHORT_WIDTH, get_int_for, get_short_for, put_int_for, put_short_for},
};

fn deterministic_runner(cases: u32) -> TestRunner {
    let config = ProptestConfig {
        cases,
        ..ProptestConfig::default()
    };
    let rng = TestRng::deterministic_rng(RngAlgorithm::ChaCha);
    TestRunner::new_with_rng(config, rng)
}

fn order_strategy() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::Little), Just(ByteOrder::Big)]
}

/// Buffer length plus an index that leaves room for `width` bytes.
fn placement_strategy(width: usize) -> impl Strategy<Value = (usize, usize)> {
    (width..64usize).prop_flat_map(move |len| (Just(len), 0..=len - width))
}

#[rstest]
#[case(256)]
#[case(1024)]
fn generated_shorts_round_trip(#[case] cases: u32) {
    let mut runner = deterministic_runner(cases);
    let strategy = (
        order_strategy(),
        any::<i16>(),
        placement_strategy(SHORT_WIDTH),
        any::<u8>(),
    );

    runner
        .run(&strategy, |(native, value, (len, index), fill)| {
            let mut buf = vec![fill; len];
            put_short_for(native, &mut buf, index, value);
            prop_assert_eq!(get_short_for(native, &buf, index), value);

            let untouched = buf
                .iter()
                .enumerate()
                .filter(|(i, _)| !(index..index + SHORT_WIDTH).contains(i))
                .all(|(_, &b)| b == fill);
            prop_assert!(untouched);
            Ok(())
        })
        .expect("generated shorts should round-trip");
}

#[rstest]
#[case(256)]
#[case(1024)]
fn generated_ints_round_trip(#[case] cases: u32) {
    let mut runner = deterministic_runner(cases);
    let strategy = (
        order_strategy(),
        any::<i32>(),
        placement_strategy(INT_WIDTH),
        any::<u8>(),
    );

    runner
        .run(&strategy, |(native, value, (len, index), fill)| {
            let mut buf = vec![fill; len];
            put_int_for(native, &mut buf, index, value);
            prop_assert_eq!(get_int_for(native, &buf, index), value);

            let untouched = buf
                .iter()
                .enumerate()
                .filter(|(i, _)| !(index..index + INT_WIDTH).contains(i))
                .all(|(_, &b)| b == fill);
            prop_assert!(untouched);
            Ok(())
        })
        .expect("generated ints should round-trip");
}

#[test]
fn generated_branches_mirror_each_other() {
    let mut runner = deterministic_runner(512);

    runner
        .run(&any::<i32>(), |value| {
            let mut little = [0u8; INT_WIDTH];
            let mut big = [0u8; INT_WIDTH];
            put_int_for(ByteOrder::Little, &mut little, 0, value);
            put_int_for(ByteOrder::Big, &mut big, 0, value);
            big.reverse();
            prop_assert_eq!(little, big);
            Ok(())
        })
        .expect("both branches should produce mirrored layouts");
}
