use crate::core::calculator::InvalidPeriod;
use crate::core::date::ParseFailure;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DogAgeError {
    #[error("Date parse failure: {0}")]
    Parse(#[from] ParseFailure),

    #[error("Invalid period: {0}")]
    InvalidPeriod(#[from] InvalidPeriod),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserInput,
    Configuration,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl DogAgeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse(_) | Self::InvalidPeriod(_) => ErrorCategory::UserInput,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Storage,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 使用者輸入錯誤只需提示重新輸入，不視為失敗
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::UserInput => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn is_user_input(&self) -> bool {
        self.category() == ErrorCategory::UserInput
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Parse(_) => "請輸入正確的生日".to_string(),
            Self::InvalidPeriod(_) => "尚未出生或日期錯誤".to_string(),
            Self::IoError(e) => format!("無法存取生日紀錄檔：{}", e),
            Self::SerializationError(e) => format!("生日紀錄檔格式錯誤：{}", e),
            Self::ConfigError { message } => format!("設定錯誤：{}", message),
            Self::ConfigValidationError { field, message } => {
                format!("設定 {} 錯誤：{}", field, message)
            }
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("設定 {} 的值 '{}' 無效：{}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Parse(_) => "請以 YYYY-MM-DD 格式輸入生日，例如 2022-01-01",
            Self::InvalidPeriod(_) => "生日不可晚於計算日期，請確認輸入",
            Self::IoError(_) => "請確認 --storage-path 所在目錄存在且可寫入",
            Self::SerializationError(_) => "請刪除或修正生日紀錄檔後重試",
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => "請檢查命令列參數與 TOML 設定檔",
        }
    }

    /// 依嚴重程度決定程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DogAgeError>;
