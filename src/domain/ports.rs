use crate::utils::error::Result;

/// Single-slot persistence for the last birth date the user entered.
///
/// The value is the raw input string, stored as-is.
pub trait BirthDateStore: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn save(&self, value: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait DisplaySettings: Send + Sync {
    fn age_digits(&self) -> usize;
    fn human_digits(&self) -> usize;
    fn range_digits(&self) -> usize;
    fn range_tolerance(&self) -> f64;
}
