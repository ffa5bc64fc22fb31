//! Elapsed time between a birth date and a reference instant, in average
//! Gregorian years (365.2425 days).

use crate::domain::model::ElapsedYears;
use chrono::NaiveDateTime;
use thiserror::Error;

pub const MS_PER_DAY: f64 = 86_400_000.0;
pub const DAYS_PER_YEAR: f64 = 365.2425;
pub const MS_PER_YEAR: f64 = DAYS_PER_YEAR * MS_PER_DAY;

/// The birth instant lies after the reference instant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("birth {birth} is after {as_of}")]
pub struct InvalidPeriod {
    pub birth: NaiveDateTime,
    pub as_of: NaiveDateTime,
}

pub fn compute_elapsed_years(
    birth: NaiveDateTime,
    as_of: NaiveDateTime,
) -> Result<ElapsedYears, InvalidPeriod> {
    let ms = (as_of - birth).num_milliseconds();
    if ms < 0 {
        return Err(InvalidPeriod { birth, as_of });
    }

    // ms >= 0 且有限，不會是 None
    Ok(ElapsedYears::new(ms as f64 / MS_PER_YEAR).unwrap_or(ElapsedYears::ZERO))
}
