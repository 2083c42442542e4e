#![no_main]

use libfuzzer_sys::fuzz_target;

use seqcalc_core::validation::{parse_pair, parse_single};
use seqcalc_core::CalcError;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Should not panic, and an accepted value must validate again from its own rendering
    match parse_single(Some(text), "n") {
        Ok(n) => assert_eq!(parse_single(Some(&n.to_string()), "n"), Ok(n)),
        Err(
            CalcError::InvalidArgument(_)
            | CalcError::NegativeArgument(_)
            | CalcError::ResourceExceeded { .. },
        ) => {}
        Err(other) => panic!("unexpected validation error: {other}"),
    }

    let (a, b) = text.split_once('&').unwrap_or((text, ""));
    match parse_pair((Some(a), Some(b)), ("m", "n")) {
        Ok((m, n)) => {
            let (m_text, n_text) = (m.to_string(), n.to_string());
            assert_eq!(
                parse_pair((Some(m_text.as_str()), Some(n_text.as_str())), ("m", "n")),
                Ok((m, n))
            );
        }
        Err(
            CalcError::InvalidArgument(_)
            | CalcError::NegativeArgument(_)
            | CalcError::ResourceExceeded { .. },
        ) => {}
        Err(other) => panic!("unexpected validation error: {other}"),
    }
});
