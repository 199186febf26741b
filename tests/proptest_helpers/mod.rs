#![allow(dead_code)]

use fuzztest::trigger::TRIGGER_LITERAL;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Arbitrary inputs whose first eight bytes are not the trigger literal.
pub fn arb_non_trigger_input(max_len: usize) -> BoxedStrategy<Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
        .prop_filter("must not start with the trigger literal", |data| {
            !data.starts_with(&TRIGGER_LITERAL)
        })
        .boxed()
}

/// The trigger literal followed by an arbitrary tail.
pub fn arb_trigger_input(max_tail: usize) -> BoxedStrategy<Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_tail)
        .prop_map(|tail| {
            let mut data = TRIGGER_LITERAL.to_vec();
            data.extend(tail);
            data
        })
        .boxed()
}

/// Strict prefixes of the trigger literal, from empty up to seven bytes.
pub fn arb_trigger_prefix() -> BoxedStrategy<Vec<u8>> {
    (0..TRIGGER_LITERAL.len())
        .prop_map(|n| TRIGGER_LITERAL[..n].to_vec())
        .boxed()
}
