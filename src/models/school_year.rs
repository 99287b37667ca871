use std::fmt;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A Hawaii school year, identified by the calendar year it ends in.
///
/// School years run July through June, so `SchoolYear::new(2024)` is the
/// 2023-24 school year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchoolYear(i32);

impl SchoolYear {
    /// Create a school year from its ending calendar year.
    pub fn new(end_year: i32) -> Self {
        Self(end_year)
    }

    /// The school year in progress right now.
    pub fn current() -> Self {
        let today = Utc::now().date_naive();
        Self::containing(today.year(), today.month())
    }

    /// School year containing the given calendar month.
    fn containing(year: i32, month: u32) -> Self {
        if month >= 7 {
            Self(year + 1)
        } else {
            Self(year)
        }
    }

    /// Calendar year the school year ends in.
    pub fn end_year(&self) -> i32 {
        self.0
    }

    /// Calendar year the school year starts in.
    pub fn start_year(&self) -> i32 {
        self.0 - 1
    }

    /// Parse a school year written as "2024", "2023-24", or "2023-2024".
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.split_once('-') {
            Some((start, end)) => {
                if start.len() != 4 || !(end.len() == 2 || end.len() == 4) {
                    return None;
                }
                let start: i32 = start.parse().ok()?;
                let end: i32 = end.parse().ok()?;
                let end = if end < 100 {
                    // Two-digit form; handle the century rollover ("1999-00")
                    let mut full = start - start % 100 + end;
                    if full <= start {
                        full += 100;
                    }
                    full
                } else {
                    end
                };
                (end == start + 1).then_some(Self(end))
            }
            None => {
                if s.len() != 4 {
                    return None;
                }
                let year: i32 = s.parse().ok()?;
                Some(Self(year))
            }
        }
    }

    /// Label in the form the DOE uses in its reports, e.g. "2023-24".
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.start_year(), self.end_year() % 100)
    }
}

impl fmt::Display for SchoolYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
