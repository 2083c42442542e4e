//! Parsing and range checks for textual arguments.
//!
//! Values are parsed as arbitrary-precision integers first so that a huge
//! number is reported as too big and a huge negative number as negative,
//! rather than both collapsing into "invalid".

use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

use crate::error::{CalcError, Params};

/// Parse a base-10 integer, ignoring surrounding whitespace.
fn parse_integer(raw: Option<&str>) -> Option<BigInt> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<BigInt>().ok()
}

fn to_native(value: &BigInt, param: &'static str) -> Result<u64, CalcError> {
    value.to_u64().ok_or_else(|| CalcError::ResourceExceeded {
        param,
        value: value.to_string(),
    })
}

/// Validate a single argument named `param`.
pub fn parse_single(raw: Option<&str>, param: &'static str) -> Result<u64, CalcError> {
    let params = Params::Single(param);
    let value = parse_integer(raw).ok_or(CalcError::invalid(params))?;
    if value.sign() == Sign::Minus {
        return Err(CalcError::negative(params));
    }
    to_native(&value, param)
}

/// Validate a pair of arguments.
///
/// Both values are parsed before either sign is checked, so an unparsable
/// value always wins over a negative one.
pub fn parse_pair(
    raw: (Option<&str>, Option<&str>),
    names: (&'static str, &'static str),
) -> Result<(u64, u64), CalcError> {
    let params = Params::Pair(names.0, names.1);
    let (Some(first), Some(second)) = (parse_integer(raw.0), parse_integer(raw.1)) else {
        return Err(CalcError::invalid(params));
    };
    if first.sign() == Sign::Minus || second.sign() == Sign::Minus {
        return Err(CalcError::negative(params));
    }
    Ok((to_native(&first, names.0)?, to_native(&second, names.1)?))
}
