#![no_main]

use libfuzzer_sys::fuzz_target;

use seqcalc_core::ackermann::ackermann;
use seqcalc_core::{CalcError, Options};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Small m keeps each run bounded; n is free to grow
    let m = u64::from(data[0] % 8);
    let n = u64::from(data[1]);

    // Must either succeed or fail with a typed limit error, never overflow the stack
    match ackermann(m, n, &Options::default()) {
        Ok(_) | Err(CalcError::RecursionLimitExceeded { .. } | CalcError::MagnitudeExceeded { .. }) => {}
        Err(other) => panic!("unexpected error for A({m}, {n}): {other}"),
    }
});
