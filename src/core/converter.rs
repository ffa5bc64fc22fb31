use crate::domain::model::{AgeRange, ConversionRates, ElapsedYears, HumanAgeEstimate};

/// Human-years reached at the end of the first pet-year.
pub const FIRST_YEAR_HUMAN_YEARS: f64 = 15.0;
/// Human-years added during the second pet-year.
pub const SECOND_YEAR_HUMAN_YEARS: f64 = 9.0;
/// Human-years reached at the end of the second pet-year.
pub const MATURITY_HUMAN_YEARS: f64 = FIRST_YEAR_HUMAN_YEARS + SECOND_YEAR_HUMAN_YEARS;

/// Maps pet-years to a human-equivalent age.
///
/// The first two years are fixed and carry no uncertainty, so the range
/// collapses to the estimate exactly. After that, each year adds the
/// size-dependent rate, and `rates.min`/`rates.max` give the range.
pub fn convert(elapsed: ElapsedYears, rates: &ConversionRates) -> HumanAgeEstimate {
    let years = elapsed.get();

    if years <= 0.0 {
        return point(0.0);
    }
    if years < 1.0 {
        return point(years * FIRST_YEAR_HUMAN_YEARS);
    }
    if years < 2.0 {
        return point(FIRST_YEAR_HUMAN_YEARS + (years - 1.0) * SECOND_YEAR_HUMAN_YEARS);
    }

    let extra = years - 2.0;
    HumanAgeEstimate {
        estimate: MATURITY_HUMAN_YEARS + extra * rates.estimate,
        range: AgeRange {
            low: MATURITY_HUMAN_YEARS + extra * rates.min,
            high: MATURITY_HUMAN_YEARS + extra * rates.max,
        },
    }
}

fn point(value: f64) -> HumanAgeEstimate {
    HumanAgeEstimate {
        estimate: value,
        range: AgeRange::point(value),
    }
}
