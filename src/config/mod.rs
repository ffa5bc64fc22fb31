#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::storage::{DEFAULT_STORAGE_KEY, DEFAULT_STORAGE_PATH};
use crate::app::presenter::DisplayOptions;
use crate::core::{DisplaySettings, SizeCategory};
use crate::domain::model::UnknownSizeCategory;
use crate::utils::error::{DogAgeError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use toml_config::TomlConfig;

pub const MAX_DISPLAY_DIGITS: usize = 6;

/// Fully resolved settings: built-in defaults, then the TOML file, then CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub size: SizeCategory,
    pub storage_path: String,
    pub storage_key: String,
    pub display: DisplayOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: SizeCategory::default(),
            storage_path: DEFAULT_STORAGE_PATH.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            display: DisplayOptions::default(),
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(size) = config.default_size() {
            settings.size = size
                .parse()
                .map_err(|e: UnknownSizeCategory| {
                    DogAgeError::InvalidConfigValueError {
                        field: "defaults.size".to_string(),
                        value: size.to_string(),
                        reason: e.to_string(),
                    }
                })?;
        }
        if let Some(path) = config.storage_path() {
            settings.storage_path = path.to_string();
        }
        if let Some(key) = config.storage_key() {
            settings.storage_key = key.to_string();
        }
        if let Some(display) = &config.display {
            let d = &mut settings.display;
            d.age_digits = display.age_digits.unwrap_or(d.age_digits);
            d.human_digits = display.human_digits.unwrap_or(d.human_digits);
            d.range_digits = display.range_digits.unwrap_or(d.range_digits);
            d.range_tolerance = display.range_tolerance.unwrap_or(d.range_tolerance);
        }

        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("storage.path", &self.storage_path)?;
        validate_non_empty_string("storage.key", &self.storage_key)?;
        validate_range("display.age_digits", self.display.age_digits, 0, MAX_DISPLAY_DIGITS)?;
        validate_range(
            "display.human_digits",
            self.display.human_digits,
            0,
            MAX_DISPLAY_DIGITS,
        )?;
        validate_range(
            "display.range_digits",
            self.display.range_digits,
            0,
            MAX_DISPLAY_DIGITS,
        )?;
        validate_range("display.range_tolerance", self.display.range_tolerance, 0.0, 1.0)?;
        Ok(())
    }
}

impl DisplaySettings for Settings {
    fn age_digits(&self) -> usize {
        self.display.age_digits
    }

    fn human_digits(&self) -> usize {
        self.display.human_digits
    }

    fn range_digits(&self) -> usize {
        self.display.range_digits
    }

    fn range_tolerance(&self) -> f64 {
        self.display.range_tolerance
    }
}
