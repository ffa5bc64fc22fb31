use chrono::NaiveDate;
use thiserror::Error;

pub const DATE_SEPARATOR: char = '-';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("empty date string")]
    Empty,
    #[error("'{0}' is not shaped like YYYY-MM-DD")]
    Shape(String),
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    NotACalendarDate { year: i32, month: u32, day: u32 },
}

/// 解析 `YYYY-MM-DD` 形式的生日
pub fn parse_input_date(input: &str) -> Result<NaiveDate, ParseFailure> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(ParseFailure::Shape(trimmed.to_string()));
    };

    let shape = || ParseFailure::Shape(trimmed.to_string());
    let year: i32 = parse_segment(year).ok_or_else(shape)?;
    let month: u32 = parse_segment(month).ok_or_else(shape)?;
    let day: u32 = parse_segment(day).ok_or_else(shape)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ParseFailure::NotACalendarDate { year, month, day })
}

// 只接受純數字，不允許正負號
fn parse_segment<T: std::str::FromStr>(segment: &str) -> Option<T> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(
            parse_input_date("2022-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
        );
        assert_eq!(
            parse_input_date(" 2024-2-9 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 9).unwrap()
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input_date(""), Err(ParseFailure::Empty));
        assert_eq!(parse_input_date("   "), Err(ParseFailure::Empty));
    }

    #[test]
    fn test_parse_wrong_segment_count() {
        assert!(matches!(parse_input_date("2022-01"), Err(ParseFailure::Shape(_))));
        assert!(matches!(
            parse_input_date("2022-01-01-05"),
            Err(ParseFailure::Shape(_))
        ));
        assert!(matches!(parse_input_date("2022/01/01"), Err(ParseFailure::Shape(_))));
    }

    #[test]
    fn test_parse_non_numeric_segment() {
        assert!(matches!(parse_input_date("2022-ab-01"), Err(ParseFailure::Shape(_))));
        assert!(matches!(parse_input_date("2022--01"), Err(ParseFailure::Shape(_))));
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert_eq!(
            parse_input_date("2023-02-29"),
            Err(ParseFailure::NotACalendarDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(parse_input_date("2024-02-29").is_ok());
        assert!(parse_input_date("2024-13-01").is_err());
    }
}
