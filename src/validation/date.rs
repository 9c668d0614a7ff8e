/// Date and time validation
///
/// Normalizes SQL-style date and time text (`2019-01-23`,
/// `12:00:00.250000`, `2019-01-23 12:00:00`) into chrono values. Parsing
/// and calendar validity are chrono's; an impossible date such as
/// `2019-02-30` is rejected the same way as garbage text.
///
/// # Example
///
/// ```
/// use author_store::validation::date::{validate_date, validate_datetime};
///
/// let date = validate_date("2019-01-23").unwrap();
/// assert_eq!(date.to_string(), "2019-01-23");
///
/// assert!(validate_date("2019-02-30").is_err());
/// assert!(validate_datetime("2019-01-23 12:00:00").is_ok());
/// ```

use crate::error::AuthorError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A value that can be validated into a `NaiveDate`
#[derive(Debug, Clone)]
pub enum DateInput {
    /// A native date, already well-formed
    Date(NaiveDate),

    /// Textual form, `%Y-%m-%d`
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

/// A value that can be validated into a `NaiveDateTime`
#[derive(Debug, Clone)]
pub enum DateTimeInput {
    /// A native datetime, already well-formed
    DateTime(NaiveDateTime),

    /// Textual form, `%Y-%m-%d %H:%M:%S` with optional fractional seconds
    Text(String),
}

impl From<NaiveDateTime> for DateTimeInput {
    fn from(datetime: NaiveDateTime) -> Self {
        DateTimeInput::DateTime(datetime)
    }
}

impl From<&str> for DateTimeInput {
    fn from(text: &str) -> Self {
        DateTimeInput::Text(text.to_string())
    }
}

impl From<String> for DateTimeInput {
    fn from(text: String) -> Self {
        DateTimeInput::Text(text)
    }
}

/// Validates a calendar date
///
/// # Errors
///
/// Returns `InvalidArgument` if the text does not parse as a real
/// `%Y-%m-%d` date.
pub fn validate_date(input: impl Into<DateInput>) -> Result<NaiveDate, AuthorError> {
    match input.into() {
        DateInput::Date(date) => Ok(date),
        DateInput::Text(text) => {
            let trimmed = text.trim();
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
                AuthorError::InvalidArgument(format!("`{}` is not a valid calendar date", trimmed))
            })
        }
    }
}

/// Validates a wall-clock time, with optional fractional seconds
///
/// # Errors
///
/// Returns `InvalidArgument` if the text does not parse as a real
/// `%H:%M:%S[.f]` time.
pub fn validate_time(text: &str) -> Result<NaiveTime, AuthorError> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f").map_err(|_| {
        AuthorError::InvalidArgument(format!("`{}` is not a valid wall clock time", trimmed))
    })
}

/// Validates a combined date and time
///
/// # Errors
///
/// Returns `InvalidArgument` if the text does not parse as a real
/// `%Y-%m-%d %H:%M:%S[.f]` datetime.
pub fn validate_datetime(input: impl Into<DateTimeInput>) -> Result<NaiveDateTime, AuthorError> {
    match input.into() {
        DateTimeInput::DateTime(datetime) => Ok(datetime),
        DateTimeInput::Text(text) => {
            let trimmed = text.trim();
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f").map_err(|_| {
                AuthorError::InvalidArgument(format!("`{}` is not a valid datetime", trimmed))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date() {
        let date = validate_date("2019-01-23").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2019, 1, 23).unwrap());
    }

    #[test]
    fn test_leap_day_is_valid() {
        assert!(validate_date("2020-02-29").is_ok());
    }

    #[test]
    fn test_impossible_calendar_date_is_rejected() {
        assert!(validate_date("2019-02-30").is_err());
        assert!(validate_date("2019-02-29").is_err());
    }

    #[test]
    fn test_wrong_separator_is_rejected() {
        assert!(validate_date("2019/01/23").is_err());
    }

    #[test]
    fn test_native_date_passes_through() {
        let date = NaiveDate::from_ymd_opt(2019, 1, 23).unwrap();
        assert_eq!(validate_date(date).unwrap(), date);
    }

    #[test]
    fn test_valid_time_with_and_without_fraction() {
        assert!(validate_time("12:00:00").is_ok());
        let time = validate_time("12:00:00.250000").unwrap();
        assert_eq!(time, NaiveTime::from_hms_micro_opt(12, 0, 0, 250_000).unwrap());
    }

    #[test]
    fn test_out_of_range_time_is_rejected() {
        assert!(validate_time("24:00:01").is_err());
        assert!(validate_time("12:60:00").is_err());
    }

    #[test]
    fn test_valid_datetime() {
        let datetime = validate_datetime("2019-01-23 12:00:00").unwrap();
        assert_eq!(datetime.to_string(), "2019-01-23 12:00:00");
    }

    #[test]
    fn test_datetime_missing_time_is_rejected() {
        assert!(validate_datetime("2019-01-23").is_err());
    }
}
