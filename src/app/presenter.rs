//! Turns an [`AgeReport`] (or a user-input failure) into the display copy.
//!
//! Rounding and range suppression live here, not in the converter: the
//! converter reports exact bounds and this layer decides when two bounds are
//! close enough to hide the range.

use crate::core::{AgeReport, DisplaySettings, SizeProfile};
use crate::utils::error::DogAgeError;
use serde::Serialize;

pub const PLACEHOLDER: &str = "—";
pub const DEFAULT_RANGE_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayOptions {
    pub age_digits: usize,
    pub human_digits: usize,
    pub range_digits: usize,
    pub range_tolerance: f64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            age_digits: 2,
            human_digits: 1,
            range_digits: 1,
            range_tolerance: DEFAULT_RANGE_TOLERANCE,
        }
    }
}

impl DisplaySettings for DisplayOptions {
    fn age_digits(&self) -> usize {
        self.age_digits
    }

    fn human_digits(&self) -> usize {
        self.human_digits
    }

    fn range_digits(&self) -> usize {
        self.range_digits
    }

    fn range_tolerance(&self) -> f64 {
        self.range_tolerance
    }
}

/// Explanatory copy that depends on the selected size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeNotes {
    pub info_note: String,
    pub pill: String,
    pub formula_hint: String,
    pub result_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedReport {
    pub dog_age: String,
    pub human_age: String,
    pub notes: Option<SizeNotes>,
}

impl RenderedReport {
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("狗狗年齡：{}", self.dog_age),
            format!("人類年齡：{}", self.human_age),
        ];
        if let Some(notes) = &self.notes {
            lines.push(notes.pill.clone());
            lines.push(notes.result_note.clone());
            lines.push(notes.formula_hint.clone());
            lines.push(notes.info_note.clone());
        }
        lines.join("\n")
    }
}

pub fn format_number(num: f64, digits: usize) -> String {
    if num.is_finite() {
        format!("{:.*}", digits, num)
    } else {
        PLACEHOLDER.to_string()
    }
}

pub fn render_report(report: &AgeReport, settings: &impl DisplaySettings) -> RenderedReport {
    let human = &report.human;

    let mut human_age = format!("{} 歲", format_number(human.estimate, settings.human_digits()));
    if !human.range.is_point(settings.range_tolerance()) {
        human_age.push_str(&format!(
            " （約 {}–{}）",
            format_number(human.range.low, settings.range_digits()),
            format_number(human.range.high, settings.range_digits())
        ));
    }

    RenderedReport {
        dog_age: format!(
            "{} 歲",
            format_number(report.elapsed.get(), settings.age_digits())
        ),
        human_age,
        notes: Some(size_notes(report.size.profile())),
    }
}

/// 輸入錯誤時的提示；其他錯誤不在這裡處理
pub fn render_failure(err: &DogAgeError) -> Option<RenderedReport> {
    err.is_user_input().then(|| RenderedReport {
        dog_age: err.user_friendly_message(),
        human_age: PLACEHOLDER.to_string(),
        notes: None,
    })
}

pub fn size_notes(profile: &SizeProfile) -> SizeNotes {
    let rates = &profile.rates;
    SizeNotes {
        info_note: format!(
            "本工具依照常用換算指引計算：第一年約 15 歲、第二年快速成熟約達 24 歲，2 歲後依犬隻體型換算（{}），每年約增加 {:.1}–{:.1} 人類歲。結果為估算值，請以獸醫或實際健康狀況為準。",
            profile.label, rates.min, rates.max
        ),
        pill: format!("體型：{}", profile.label),
        formula_hint: format!(
            "計算公式提示：1st year = 15；2nd year + 約 9；後續每年約 {:.1}（平均）",
            rates.estimate
        ),
        result_note: format!("（換算採用{}標準；顯示估算值與範圍）", profile.label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::InvalidPeriod;
    use crate::core::date::ParseFailure;
    use crate::core::{AgeRange, ElapsedYears, HumanAgeEstimate, SizeCategory};
    use chrono::NaiveDate;

    fn report(elapsed: f64, human: HumanAgeEstimate, size: SizeCategory) -> AgeReport {
        let birth = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        AgeReport {
            input: "2022-01-01".to_string(),
            birth,
            as_of: birth.and_hms_opt(0, 0, 0).unwrap(),
            size,
            elapsed: ElapsedYears::new(elapsed).unwrap(),
            human,
            saved: true,
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.41484, 2), "2.41");
        assert_eq!(format_number(25.0, 1), "25.0");
        assert_eq!(format_number(f64::NAN, 2), PLACEHOLDER);
        assert_eq!(format_number(f64::INFINITY, 1), PLACEHOLDER);
    }

    #[test]
    fn test_point_range_is_hidden() {
        let human = HumanAgeEstimate {
            estimate: 19.5,
            range: AgeRange::point(19.5),
        };
        let rendered = render_report(
            &report(1.5, human, SizeCategory::Small),
            &DisplayOptions::default(),
        );
        assert_eq!(rendered.dog_age, "1.50 歲");
        assert_eq!(rendered.human_age, "19.5 歲");
    }

    #[test]
    fn test_near_equal_bounds_are_hidden() {
        let human = HumanAgeEstimate {
            estimate: 24.0002,
            range: AgeRange {
                low: 24.0001,
                high: 24.0003,
            },
        };
        let rendered = render_report(
            &report(2.0, human, SizeCategory::Medium),
            &DisplayOptions::default(),
        );
        assert_eq!(rendered.human_age, "24.0 歲");
    }

    #[test]
    fn test_adult_range_is_shown() {
        let human = HumanAgeEstimate {
            estimate: 25.867,
            range: AgeRange {
                low: 25.659,
                high: 26.074,
            },
        };
        let rendered = render_report(
            &report(2.41, human, SizeCategory::Medium),
            &DisplayOptions::default(),
        );
        assert_eq!(rendered.human_age, "25.9 歲 （約 25.7–26.1）");

        let notes = rendered.notes.unwrap();
        assert_eq!(notes.pill, "體型：中型犬（4.5–6）");
        assert!(notes.formula_hint.contains("後續每年約 4.5（平均）"));
        assert!(notes.info_note.contains("每年約增加 4.0–5.0 人類歲"));
        assert_eq!(notes.result_note, "（換算採用中型犬（4.5–6）標準；顯示估算值與範圍）");
    }

    #[test]
    fn test_custom_tolerance_controls_suppression() {
        let human = HumanAgeEstimate {
            estimate: 24.1,
            range: AgeRange {
                low: 24.05,
                high: 24.15,
            },
        };
        let loose = DisplayOptions {
            range_tolerance: 0.5,
            ..DisplayOptions::default()
        };
        let rendered = render_report(&report(2.02, human, SizeCategory::Large), &loose);
        assert_eq!(rendered.human_age, "24.1 歲");
    }

    #[test]
    fn test_render_user_input_failures() {
        let parse = render_failure(&ParseFailure::Empty.into()).unwrap();
        assert_eq!(parse.dog_age, "請輸入正確的生日");
        assert_eq!(parse.human_age, PLACEHOLDER);
        assert!(parse.notes.is_none());

        let at = NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let invalid = render_failure(
            &InvalidPeriod {
                birth: at,
                as_of: at - chrono::Duration::days(1),
            }
            .into(),
        )
        .unwrap();
        assert_eq!(invalid.dog_age, "尚未出生或日期錯誤");

        let config = DogAgeError::ConfigError {
            message: "bad".to_string(),
        };
        assert!(render_failure(&config).is_none());
    }

    #[test]
    fn test_to_text_lists_notes() {
        let human = HumanAgeEstimate {
            estimate: 7.5,
            range: AgeRange::point(7.5),
        };
        let text = render_report(
            &report(0.5, human, SizeCategory::Small),
            &DisplayOptions::default(),
        )
        .to_text();
        assert!(text.starts_with("狗狗年齡：0.50 歲\n人類年齡：7.5 歲\n體型：小型犬（4–5）"));
    }
}
