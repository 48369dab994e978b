//! Integer argument parsing.

use winnow::ascii::{digit1, multispace0};
use winnow::combinator::{alt, opt, preceded};
use winnow::token::literal;
use winnow::{Parser, Result};

/// Parse the longest leading signed decimal integer, defaulting to 0.
///
/// Leading whitespace is skipped and a single `+` or `-` is accepted.
/// Parsing stops at the first non-digit; values past the `i64` range
/// saturate.
pub fn parse_lenient(input: &str) -> i64 {
    let mut rest = input;
    preceded(multispace0, saturating_integer)
        .parse_next(&mut rest)
        .unwrap_or(0)
}

/// Parse a whole argument as a signed decimal integer.
///
/// Returns `None` unless the trimmed argument is an optional sign followed
/// only by digits and fits in `i64`.
pub fn parse_strict(input: &str) -> Option<i64> {
    exact_integer.parse(input.trim()).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Plus,
    Minus,
}

fn parse_sign<'s>(input: &mut &'s str) -> Result<Sign> {
    alt((
        literal("+").value(Sign::Plus),
        literal("-").value(Sign::Minus),
    ))
    .parse_next(input)
}

/// Optional sign and at least one digit, clamped to the `i64` range.
fn saturating_integer<'s>(input: &mut &'s str) -> Result<i64> {
    (opt(parse_sign), digit1)
        .map(|(sign, digits)| accumulate(sign.unwrap_or(Sign::Plus), digits))
        .parse_next(input)
}

/// Optional sign and at least one digit, failing on overflow.
fn exact_integer<'s>(input: &mut &'s str) -> Result<i64> {
    (opt(parse_sign), digit1)
        .take()
        .try_map(str::parse::<i64>)
        .parse_next(input)
}

fn accumulate(sign: Sign, digits: &str) -> i64 {
    digits.bytes().fold(0i64, |value, b| {
        let d = i64::from(b - b'0');
        match sign {
            Sign::Plus => value.saturating_mul(10).saturating_add(d),
            Sign::Minus => value.saturating_mul(10).saturating_sub(d),
        }
    })
}
