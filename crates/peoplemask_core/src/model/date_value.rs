//! Partially specified calendar dates.
//!
//! # Responsibility
//! - Represent dates where any of year, month and day may be unknown
//!   (birthdays without a year, contract ends without a day).
//! - Translate between the typed value and the `{year, month, day}` wire form.
//!
//! # Invariants
//! - A present year is `> 0`, a present month is in `1..=12`, a present day is
//!   in `1..=31`. There is no cross-field check, so `2023-02-31` is accepted.
//! - The wire form encodes an absent component as `0`. This is lossless only
//!   because `0` is never a valid present component.
//! - Values built through public constructors always carry at least one
//!   component.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire key of the year component.
pub const WIRE_YEAR: &str = "year";
/// Wire key of the month component.
pub const WIRE_MONTH: &str = "month";
/// Wire key of the day component.
pub const WIRE_DAY: &str = "day";

/// Date component validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValueError {
    InvalidYear(i64),
    InvalidMonth(i64),
    InvalidDay(i64),
    /// Wire date with every component absent.
    EmptyDate,
}

impl Display for DateValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYear(value) => write!(f, "year must be greater than 0, got {value}"),
            Self::InvalidMonth(value) => {
                write!(f, "month must be between 1 and 12, got {value}")
            }
            Self::InvalidDay(value) => write!(f, "day must be between 1 and 31, got {value}"),
            Self::EmptyDate => write!(f, "date has neither year, month nor day"),
        }
    }
}

impl Error for DateValueError {}

/// Callbacks for the four supported completeness patterns of a [`DateValue`].
pub trait DateValueVisitor {
    type Output;

    fn visit_full_date(&mut self, year: i32, month: u32, day: u32) -> Self::Output;
    fn visit_without_year(&mut self, month: u32, day: u32) -> Self::Output;
    fn visit_year_only(&mut self, year: i32) -> Self::Output;
    fn visit_without_day(&mut self, year: i32, month: u32) -> Self::Output;
}

/// Immutable date with independently optional components.
///
/// Equality, hashing and ordering compare the `(year, month, day)` triple of
/// options, so an absent component never equals a present one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateValue {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
}

impl DateValue {
    fn new(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Result<Self, DateValueError> {
        if let Some(value) = year {
            if value <= 0 {
                return Err(DateValueError::InvalidYear(i64::from(value)));
            }
        }
        if let Some(value) = month {
            if !(1..=12).contains(&value) {
                return Err(DateValueError::InvalidMonth(i64::from(value)));
            }
        }
        if let Some(value) = day {
            if !(1..=31).contains(&value) {
                return Err(DateValueError::InvalidDay(i64::from(value)));
            }
        }
        Ok(Self { year, month, day })
    }

    pub fn from_full_date(year: i32, month: u32, day: u32) -> Result<Self, DateValueError> {
        Self::new(Some(year), Some(month), Some(day))
    }

    pub fn from_year_month(year: i32, month: u32) -> Result<Self, DateValueError> {
        Self::new(Some(year), Some(month), None)
    }

    pub fn from_month_day(month: u32, day: u32) -> Result<Self, DateValueError> {
        Self::new(None, Some(month), Some(day))
    }

    pub fn from_year_only(year: i32) -> Result<Self, DateValueError> {
        Self::new(Some(year), None, None)
    }

    /// Full date from a calendar date. Fails for years before 1 CE.
    pub fn from_date(date: NaiveDate) -> Result<Self, DateValueError> {
        Self::from_full_date(date.year(), date.month(), date.day())
    }

    /// Full date from the date part of a timestamp; the time is dropped.
    pub fn from_datetime(datetime: NaiveDateTime) -> Result<Self, DateValueError> {
        Self::from_date(datetime.date())
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// Collision-free ordering key.
    pub fn sort_key(&self) -> (Option<i32>, Option<u32>, Option<u32>) {
        (self.year, self.month, self.day)
    }

    /// Calendar date for full dates that exist on the calendar.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => NaiveDate::from_ymd_opt(year, month, day),
            _ => None,
        }
    }

    /// Dispatches to the visitor callback matching this value's pattern.
    ///
    /// Patterns are checked as full date, year+month, month+day, then
    /// year-only; a year+day value without month counts as year-only.
    /// Values with only a month or only a day invoke no callback and yield
    /// `None`.
    pub fn visit<V: DateValueVisitor>(&self, visitor: &mut V) -> Option<V::Output> {
        match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => {
                Some(visitor.visit_full_date(year, month, day))
            }
            (Some(year), Some(month), None) => Some(visitor.visit_without_day(year, month)),
            (None, Some(month), Some(day)) => Some(visitor.visit_without_year(month, day)),
            (Some(year), None, _) => Some(visitor.visit_year_only(year)),
            _ => None,
        }
    }

    /// Wire form with `0` standing in for absent components.
    pub fn to_wire(&self) -> WireDate {
        WireDate {
            year: self.year.map(i64::from).unwrap_or(0),
            month: self.month.map(i64::from).unwrap_or(0),
            day: self.day.map(i64::from).unwrap_or(0),
        }
    }

    /// Reads the wire form. Non-positive components count as absent.
    pub fn from_wire(wire: &WireDate) -> Result<Self, DateValueError> {
        let year = present(wire.year)
            .map(|value| i32::try_from(value).map_err(|_| DateValueError::InvalidYear(value)))
            .transpose()?;
        let month = present(wire.month)
            .map(|value| u32::try_from(value).map_err(|_| DateValueError::InvalidMonth(value)))
            .transpose()?;
        let day = present(wire.day)
            .map(|value| u32::try_from(value).map_err(|_| DateValueError::InvalidDay(value)))
            .transpose()?;
        if year.is_none() && month.is_none() && day.is_none() {
            return Err(DateValueError::EmptyDate);
        }
        Self::new(year, month, day)
    }
}

fn present(value: i64) -> Option<i64> {
    if value > 0 {
        Some(value)
    } else {
        None
    }
}

impl Display for DateValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => write!(f, "{year:04}-{month:02}-{day:02}"),
            (Some(year), Some(month), None) => write!(f, "{year:04}-{month:02}"),
            (Some(year), None, Some(day)) => write!(f, "{year:04}-??-{day:02}"),
            (Some(year), None, None) => write!(f, "{year:04}"),
            (None, Some(month), Some(day)) => write!(f, "--{month:02}-{day:02}"),
            (None, Some(month), None) => write!(f, "--{month:02}"),
            (None, None, Some(day)) => write!(f, "---{day:02}"),
            (None, None, None) => write!(f, "----"),
        }
    }
}

/// `{year, month, day}` date sub-document as exchanged with the remote source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDate {
    #[serde(default)]
    pub year: i64,
    #[serde(default)]
    pub month: i64,
    #[serde(default)]
    pub day: i64,
}

impl WireDate {
    /// Reads a date sub-document; `None` when it is not a date-shaped object.
    pub fn from_json(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    pub fn to_json(self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
