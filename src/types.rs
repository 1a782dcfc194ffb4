use crate::consts::{MAX_OFFSET, MIN_OFFSET};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A year offset guaranteed to be in the range `MIN_OFFSET..=MAX_OFFSET` (0..=100).
/// Out-of-range input is clamped rather than rejected.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, Into, Serialize, Deserialize,
)]
#[serde(from = "i64", into = "u8")]
pub struct Offset(u8);

impl Offset {
    /// Clamps an arbitrary integer into `MIN_OFFSET..=MAX_OFFSET`
    pub fn clamped(raw: i64) -> Self {
        let bounded = raw.clamp(i64::from(MIN_OFFSET), i64::from(MAX_OFFSET));
        // bounded fits in u8 after the clamp above
        Self(u8::try_from(bounded).unwrap_or(MIN_OFFSET))
    }

    /// Reads an offset stored as text by the host.
    ///
    /// Takes the leading number (optional sign, digits, fraction, exponent)
    /// so `"12 years"` reads as 12 and `"1e2"` as 100. Empty or non-numeric
    /// text reads as 0.
    pub fn parse_lenient(raw: &str) -> Self {
        Self::clamped(leading_integer(raw))
    }

    /// Returns the offset value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<i64> for Offset {
    fn from(raw: i64) -> Self {
        Self::clamped(raw)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable dropdown entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{text}")]
pub struct Choice {
    pub text: String,
    pub value: String,
}

impl Choice {
    /// Creates a choice with separate label and submitted value
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }

    /// Choice whose text and value are both the given year
    pub fn year(year: i32) -> Self {
        let label = year.to_string();
        Self {
            text: label.clone(),
            value: label,
        }
    }
}

// Helper functions

/// Integer value of the numeric prefix of `raw`, saturating on overflow.
///
/// The prefix may carry a fraction and an exponent (`"1.5e2"` is 150); the
/// result truncates toward zero. 0 when there are no leading digits.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn leading_integer(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let int_end = digit_run_end(rest, 0);
    if int_end == 0 {
        return 0;
    }

    let mut end = int_end;
    if rest[end..].starts_with('.') {
        end = digit_run_end(rest, end + 1);
    }
    if rest[end..].starts_with(['e', 'E']) {
        let exponent = end + 1;
        let sign = usize::from(rest[exponent..].starts_with(['-', '+']));
        let exponent_end = digit_run_end(rest, exponent + sign);
        if exponent_end > exponent + sign {
            end = exponent_end;
        }
    }

    let magnitude = if end == int_end {
        rest[..int_end].parse::<i64>().unwrap_or(i64::MAX)
    } else {
        // float-to-int casts saturate
        rest[..end].parse::<f64>().map_or(0, |n| n.trunc() as i64)
    };
    if negative { -magnitude } else { magnitude }
}

/// Byte index where the run of ASCII digits starting at `start` ends
fn digit_run_end(s: &str, start: usize) -> usize {
    s[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |offset| start + offset)
}
