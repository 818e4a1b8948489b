//! Shared traits, calendar helpers, and enums for finance primitives.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for stored entities.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates the supported payment means for a purchase.
pub enum PaymentMethod {
    Cash,
    Debit,
    Credit,
    Transfer,
    Other,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Debit => "Debit",
            PaymentMethod::Credit => "Credit",
            PaymentMethod::Transfer => "Transfer",
            PaymentMethod::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Adds `months` calendar months to `date`, clamping the day-of-month to the
/// length of the target month.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let index = date.year() * 12 + date.month() as i32 - 1 + months;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Replaces the day-of-month, clamping into the valid range for that month.
pub fn set_day_clamped(date: NaiveDate, day: u32) -> NaiveDate {
    let clamped = day.clamp(1, days_in_month(date.year(), date.month()));
    date.with_day(clamped).unwrap()
}

/// Returns the number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}
