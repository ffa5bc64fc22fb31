pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LocalStorage;
pub use app::presenter::{render_failure, render_report, DisplayOptions, RenderedReport};
pub use config::{toml_config::TomlConfig, Settings};
pub use crate::core::calculator::{compute_elapsed_years, InvalidPeriod};
pub use crate::core::converter::convert;
pub use crate::core::date::{parse_input_date, ParseFailure};
pub use crate::core::engine::AgeEngine;
pub use domain::model::{
    AgeRange, AgeReport, ConversionRates, ElapsedYears, HumanAgeEstimate, SizeCategory,
    SizeProfile,
};
pub use utils::error::{DogAgeError, Result};
