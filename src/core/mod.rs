pub mod calculator;
pub mod converter;
pub mod date;
pub mod engine;
pub mod profiles;

pub use crate::domain::model::{
    AgeRange, AgeReport, ConversionRates, ElapsedYears, HumanAgeEstimate, SizeCategory,
    SizeProfile,
};
pub use crate::domain::ports::{BirthDateStore, DisplaySettings};
pub use crate::utils::error::Result;
