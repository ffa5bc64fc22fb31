use crate::core::calculator::compute_elapsed_years;
use crate::core::converter::convert;
use crate::core::date::parse_input_date;
use crate::core::{AgeReport, BirthDateStore, SizeCategory};
use crate::utils::error::Result;
use chrono::{NaiveDateTime, NaiveTime};

pub struct AgeEngine<S: BirthDateStore> {
    store: S,
}

impl<S: BirthDateStore> AgeEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 讀回上次輸入的生日（啟動時呼叫一次）
    pub async fn restore(&self) -> Result<Option<String>> {
        let saved = self.store.load().await?;
        match &saved {
            Some(value) => tracing::debug!("Restored saved birth date: {}", value),
            None => tracing::debug!("No saved birth date"),
        }
        Ok(saved)
    }

    /// Like [`restore`](Self::restore), but an unreadable slot counts as
    /// empty so the user is prompted to enter a date again.
    pub async fn restore_or_empty(&self) -> String {
        match self.restore().await {
            Ok(saved) => saved.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("⚠️ Ignoring unreadable saved birth date: {}", e);
                String::new()
            }
        }
    }

    /// Parses `input`, converts it for `size` as of `as_of`, and saves the raw
    /// input once the whole calculation has succeeded.
    ///
    /// Saving is best-effort: a storage failure is logged and reported through
    /// `AgeReport::saved`, never in place of the result.
    pub async fn calculate(
        &self,
        input: &str,
        size: SizeCategory,
        as_of: NaiveDateTime,
    ) -> Result<AgeReport> {
        let birth = parse_input_date(input)?;
        tracing::debug!("Parsed birth date {} from '{}'", birth, input);

        let elapsed = compute_elapsed_years(birth.and_time(NaiveTime::MIN), as_of)?;
        tracing::debug!("Elapsed {:.5} years as of {}", elapsed.get(), as_of);

        let profile = size.profile();
        let human = convert(elapsed, &profile.rates);
        tracing::debug!(
            "Human estimate {:.3} ({:.3}–{:.3}) for {}",
            human.estimate,
            human.range.low,
            human.range.high,
            size
        );

        let saved = match self.store.save(input).await {
            Ok(()) => {
                tracing::info!("💾 Saved birth date {}", input);
                true
            }
            Err(e) => {
                tracing::warn!(
                    "⚠️ Could not save birth date: {} ({})",
                    e,
                    e.recovery_suggestion()
                );
                false
            }
        };

        Ok(AgeReport {
            input: input.to_string(),
            birth,
            as_of,
            size,
            elapsed,
            human,
            saved,
        })
    }
}
