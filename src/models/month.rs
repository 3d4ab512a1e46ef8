//! Calendar month labels
//!
//! One-time expenses are tagged with a calendar month and the projection
//! window is a rolling sequence of twelve months, so the month is modelled as
//! a closed enum with wraparound arithmetic instead of a free-form string.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, January through December
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Zero-based index (Jan = 0)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Month for a zero-based index, wrapping modulo 12
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// The month `offset` months after this one, wrapping past December
    pub const fn plus(self, offset: usize) -> Self {
        Self::from_index(self.index() + offset)
    }

    /// The month before this one
    pub const fn prev(self) -> Self {
        Self::from_index(self.index() + 11)
    }

    /// The month after this one
    pub const fn next(self) -> Self {
        self.plus(1)
    }

    /// Short label ("Jan")
    pub const fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Full English name ("January")
    pub const fn full_name(self) -> &'static str {
        match self {
            Month::Jan => "January",
            Month::Feb => "February",
            Month::Mar => "March",
            Month::Apr => "April",
            Month::May => "May",
            Month::Jun => "June",
            Month::Jul => "July",
            Month::Aug => "August",
            Month::Sep => "September",
            Month::Oct => "October",
            Month::Nov => "November",
            Month::Dec => "December",
        }
    }

    /// The current calendar month in local time
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::from_index(today.month0() as usize)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParseError(pub String);

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month: '{}' (expected Jan..Dec or 1..12)", self.0)
    }
}

impl std::error::Error for MonthParseError {}

impl FromStr for Month {
    type Err = MonthParseError;

    /// Accepts short labels, full names (case-insensitive) and 1-based numbers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MonthParseError(s.to_string()));
        }

        if let Ok(number) = trimmed.parse::<usize>() {
            return if (1..=12).contains(&number) {
                Ok(Self::from_index(number - 1))
            } else {
                Err(MonthParseError(s.to_string()))
            };
        }

        let lower = trimmed.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| {
                m.label().to_lowercase() == lower || m.full_name().to_lowercase() == lower
            })
            .ok_or_else(|| MonthParseError(s.to_string()))
    }
}
