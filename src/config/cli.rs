use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::core::date::parse_input_date;
use crate::core::SizeCategory;
use crate::utils::error::{DogAgeError, Result};
use chrono::{Local, NaiveDateTime, NaiveTime};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "dog-age")]
#[command(about = "Convert a dog's birth date into dog years and a human-equivalent age")]
pub struct CliConfig {
    /// Birth date (YYYY-MM-DD); falls back to the last saved date
    #[arg(long)]
    pub birth: Option<String>,

    /// Adult size category [default: medium]
    #[arg(long, value_enum)]
    pub size: Option<SizeCategory>,

    /// Reference date (YYYY-MM-DD); defaults to now
    #[arg(long)]
    pub as_of: Option<String>,

    #[arg(long, help = "File that keeps the last entered birth date")]
    pub storage_path: Option<String>,

    #[arg(long, help = "Key the birth date is stored under")]
    pub storage_key: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 依序套用：內建預設、TOML 檔、命令列參數
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                Settings::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => Settings::default(),
        };

        if let Some(size) = self.size {
            settings.size = size;
        }
        if let Some(path) = &self.storage_path {
            settings.storage_path = path.clone();
        }
        if let Some(key) = &self.storage_key {
            settings.storage_key = key.clone();
        }

        Ok(settings)
    }

    /// 計算基準時間，未指定時使用現在的本地時間
    pub fn as_of(&self) -> Result<NaiveDateTime> {
        match &self.as_of {
            Some(value) => parse_input_date(value)
                .map(|date| date.and_time(NaiveTime::MIN))
                .map_err(|e| DogAgeError::InvalidConfigValueError {
                    field: "as_of".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                }),
            None => Ok(Local::now().naive_local()),
        }
    }
}
