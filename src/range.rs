use std::iter::Rev;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{Choice, FieldConfig, Offset, prelude::*};

/// Inclusive span of selectable years, derived from today's year and two offsets.
///
/// `min_year > max_year` is representable: it only arises from a host that
/// bypasses the offset bounds, and is treated as an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{min_year}..={max_year}")]
pub struct YearRange {
    min_year: i32,
    max_year: i32,
}

impl YearRange {
    /// Creates a range from explicit bounds without reordering them
    pub const fn new(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }

    /// Computes the range for a field configuration
    pub fn from_config(config: &FieldConfig, current_year: i32) -> Self {
        compute_range(config.min_year_offset, config.max_year_offset, current_year)
    }

    /// Earliest selectable year
    pub const fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Latest selectable year
    pub const fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Returns true when no year is selectable
    pub const fn is_empty(&self) -> bool {
        self.max_year < self.min_year
    }

    /// Number of years in the range, 0 when degenerate
    pub fn len(&self) -> usize {
        let span = i64::from(self.max_year) - i64::from(self.min_year) + 1;
        usize::try_from(span).unwrap_or(0)
    }

    /// Checks if `year` lies within the range
    pub const fn contains(&self, year: i32) -> bool {
        self.min_year <= year && year <= self.max_year
    }

    /// Years from `max_year` down to `min_year`
    pub fn years(&self) -> Rev<RangeInclusive<i32>> {
        (self.min_year..=self.max_year).rev()
    }
}

/// Computes the selectable range around `current_year`.
///
/// Both offsets are clamped to `0..=100` independently; nothing here errors.
pub fn compute_range(min_offset: i64, max_offset: i64, current_year: i32) -> YearRange {
    let before = Offset::clamped(min_offset);
    let after = Offset::clamped(max_offset);

    YearRange {
        min_year: current_year.saturating_sub(i32::from(before.get())),
        max_year: current_year.saturating_add(i32::from(after.get())),
    }
}

/// One choice per year, most recent first. Empty for a degenerate range.
pub fn generate_choices(range: &YearRange) -> Vec<Choice> {
    range.years().map(Choice::year).collect()
}
