//! Reporting periods used to scope installment and summary views.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Selects a reporting window: a calendar year, optionally narrowed to a
/// single month (1-12). A `None` month matches the whole year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month: Option<u32>,
}

impl Period {
    pub fn month_of(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
        }
    }

    pub fn full_year(year: i32) -> Self {
        Self { year, month: None }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && self.month.map_or(true, |month| date.month() == month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month {
            Some(month) => write!(f, "{}-{:02}", self.year, month),
            None => write!(f, "{}", self.year),
        }
    }
}
