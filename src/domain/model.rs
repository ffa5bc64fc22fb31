use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Adult body size, controls the aging rate after the second year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown size category '{0}' (expected small, medium or large)")]
pub struct UnknownSizeCategory(pub String);

impl FromStr for SizeCategory {
    type Err = UnknownSizeCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(UnknownSizeCategory(s.to_string())),
        }
    }
}

/// Human-years added per pet-year once the animal is past two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRates {
    pub estimate: f64,
    pub min: f64,
    pub max: f64,
}

pub const DEFAULT_RATE_ESTIMATE: f64 = 4.5;
pub const DEFAULT_RATE_MIN: f64 = 4.0;
pub const DEFAULT_RATE_MAX: f64 = 5.0;

impl ConversionRates {
    pub const fn new(estimate: f64, min: f64, max: f64) -> Self {
        Self { estimate, min, max }
    }

    /// Each omitted rate falls back to its own default.
    pub fn with(estimate: Option<f64>, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            estimate: estimate.unwrap_or(DEFAULT_RATE_ESTIMATE),
            min: min.unwrap_or(DEFAULT_RATE_MIN),
            max: max.unwrap_or(DEFAULT_RATE_MAX),
        }
    }

    /// `min <= estimate <= max`, all positive.
    pub fn is_ordered(&self) -> bool {
        self.min > 0.0 && self.min <= self.estimate && self.estimate <= self.max
    }
}

impl Default for ConversionRates {
    fn default() -> Self {
        Self::with(None, None, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeProfile {
    pub category: SizeCategory,
    pub rates: ConversionRates,
    pub label: &'static str,
}

/// Fractional years between two instants, measured in average Gregorian years.
///
/// Never negative: a birth after the reference instant is reported by the
/// calculator as an error instead.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct ElapsedYears(f64);

impl ElapsedYears {
    pub const ZERO: ElapsedYears = ElapsedYears(0.0);

    /// Returns `None` for negative or non-finite values.
    pub fn new(years: f64) -> Option<Self> {
        (years.is_finite() && years >= 0.0).then_some(Self(years))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeRange {
    pub low: f64,
    pub high: f64,
}

impl AgeRange {
    pub fn point(value: f64) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Bounds closer than `tolerance` count as a single point.
    pub fn is_point(&self, tolerance: f64) -> bool {
        self.width().abs() <= tolerance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HumanAgeEstimate {
    pub estimate: f64,
    pub range: AgeRange,
}

/// One completed calculation, handed to the presenter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeReport {
    pub input: String,
    pub birth: NaiveDate,
    pub as_of: NaiveDateTime,
    pub size: SizeCategory,
    pub elapsed: ElapsedYears,
    pub human: HumanAgeEstimate,
    /// Whether the raw input reached the persistence slot.
    pub saved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_category_from_str() {
        assert_eq!("small".parse::<SizeCategory>().unwrap(), SizeCategory::Small);
        assert_eq!(" Large ".parse::<SizeCategory>().unwrap(), SizeCategory::Large);
        assert!("giant".parse::<SizeCategory>().is_err());
        assert_eq!(SizeCategory::default(), SizeCategory::Medium);
    }

    #[test]
    fn test_elapsed_years_rejects_negative() {
        assert!(ElapsedYears::new(-0.1).is_none());
        assert!(ElapsedYears::new(f64::NAN).is_none());
        assert_eq!(ElapsedYears::new(0.0), Some(ElapsedYears::ZERO));
    }

    #[test]
    fn test_age_range_point_tolerance() {
        assert!(AgeRange::point(15.0).is_point(0.0));
        let near = AgeRange {
            low: 24.0,
            high: 24.0005,
        };
        assert!(near.is_point(0.001));
        assert!(!near.is_point(0.0));
    }

    #[test]
    fn test_default_rates_are_ordered() {
        assert!(ConversionRates::default().is_ordered());
        assert!(!ConversionRates::new(3.0, 4.0, 5.0).is_ordered());
    }

    #[test]
    fn test_rates_default_per_field() {
        assert_eq!(
            ConversionRates::with(Some(5.5), None, Some(6.0)),
            ConversionRates::new(5.5, 4.0, 6.0)
        );
        assert_eq!(
            ConversionRates::with(None, Some(3.5), None),
            ConversionRates::new(4.5, 3.5, 5.0)
        );
        assert_eq!(ConversionRates::with(None, None, None), ConversionRates::default());
    }
}
