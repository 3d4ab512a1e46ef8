//! Tax rate percentage
//!
//! Stored in basis points (hundredths of a percent) so net income can be
//! derived with integer arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Basis points in 100%
const FULL_RATE_BP: u32 = 10_000;

/// A tax rate between 0% and 100%
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Create a rate from basis points, rejecting anything above 100%
    pub fn from_basis_points(bp: u32) -> Result<Self, TaxRateError> {
        if bp > FULL_RATE_BP {
            return Err(TaxRateError::OutOfRange(format_bp(bp)));
        }
        Ok(Self(bp))
    }

    /// Create a rate from a whole percentage
    pub fn from_percent(percent: u32) -> Result<Self, TaxRateError> {
        Self::from_basis_points(percent.saturating_mul(100))
    }

    /// A 0% rate
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Rate in basis points
    pub const fn basis_points(&self) -> u32 {
        self.0
    }

    /// Basis points kept after tax (10000 - rate)
    pub const fn retained_basis_points(&self) -> u32 {
        FULL_RATE_BP - self.0
    }

    /// Parse a percentage such as "20", "22.5", "7.25%"
    pub fn parse(s: &str) -> Result<Self, TaxRateError> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        if trimmed.is_empty() {
            return Err(TaxRateError::Empty);
        }
        if trimmed.starts_with('-') {
            return Err(TaxRateError::OutOfRange(trimmed.to_string()));
        }

        let invalid = || TaxRateError::InvalidFormat(trimmed.to_string());

        let (whole, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
            || (whole.is_empty() && frac.is_empty())
        {
            return Err(invalid());
        }

        let whole: u32 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac_bp: u32 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u32>().map_err(|_| invalid())? * 10,
            _ => frac[..2].parse().map_err(|_| invalid())?,
        };

        let bp = whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac_bp))
            .ok_or_else(|| TaxRateError::OutOfRange(trimmed.to_string()))?;

        Self::from_basis_points(bp)
    }
}

fn format_bp(bp: u32) -> String {
    if bp % 100 == 0 {
        format!("{}%", bp / 100)
    } else if bp % 10 == 0 {
        format!("{}.{}%", bp / 100, (bp % 100) / 10)
    } else {
        format!("{}.{:02}%", bp / 100, bp % 100)
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_bp(self.0))
    }
}

/// Error type for tax rate parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxRateError {
    Empty,
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for TaxRateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Tax rate is required"),
            Self::InvalidFormat(s) => write!(f, "Invalid tax rate: {}", s),
            Self::OutOfRange(s) => write!(f, "Tax rate must be between 0% and 100%, got {}", s),
        }
    }
}

impl std::error::Error for TaxRateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!(TaxRate::parse("20").unwrap().basis_points(), 2000);
        assert_eq!(TaxRate::parse("22.5").unwrap().basis_points(), 2250);
        assert_eq!(TaxRate::parse("7.25%").unwrap().basis_points(), 725);
        assert_eq!(TaxRate::parse("0").unwrap(), TaxRate::zero());
        assert_eq!(TaxRate::parse("100").unwrap().basis_points(), 10_000);
        assert_eq!(TaxRate::parse(".5").unwrap().basis_points(), 50);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            TaxRate::parse("100.01"),
            Err(TaxRateError::OutOfRange(_))
        ));
        assert!(matches!(
            TaxRate::parse("-5"),
            Err(TaxRateError::OutOfRange(_))
        ));
        assert!(matches!(TaxRate::parse(""), Err(TaxRateError::Empty)));
        assert!(matches!(
            TaxRate::parse("abc"),
            Err(TaxRateError::InvalidFormat(_))
        ));
        assert!(matches!(
            TaxRate::parse("."),
            Err(TaxRateError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_retained() {
        let rate = TaxRate::from_percent(20).unwrap();
        assert_eq!(rate.retained_basis_points(), 8000);
    }

    #[test]
    fn test_display() {
        assert_eq!(TaxRate::from_percent(20).unwrap().to_string(), "20%");
        assert_eq!(TaxRate::parse("22.5").unwrap().to_string(), "22.5%");
        assert_eq!(TaxRate::parse("7.25").unwrap().to_string(), "7.25%");
    }
}
