use chrono::{Datelike, Local};

/// Supplies the current year so range logic never reads the wall clock itself.
pub trait YearSource {
    fn current_year(&self) -> i32;
}

/// Year from the local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemYear;

impl YearSource for SystemYear {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// A pinned year, for tests and replaying past submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedYear(pub i32);

impl YearSource for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}
