//! Due date parsing.
//!
//! Dates are entered and shown as `yyyy-MM-dd`. A due date is accepted when it
//! matches that pattern exactly, names a real calendar day, and is not before
//! `today`. The caller supplies `today`, so a date accepted yesterday may be
//! rejected now.

use chrono::{Local, NaiveDate};

use crate::error::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The local calendar date at the moment of the call.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// chrono accepts unpadded fields and signed years, so the shape is checked first.
fn has_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn parse(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if !has_date_shape(input) {
        return Err(ValidationError::InvalidDate(input.to_string()));
    }
    let date = NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))?;
    if date < today {
        return Err(ValidationError::PastDate { date, today });
    }
    Ok(date)
}

pub fn format(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_today_and_later() {
        let today = day(2026, 10, 18);
        assert_eq!(parse("2026-10-18", today), Ok(today));
        assert_eq!(parse("2099-01-01", today), Ok(day(2099, 1, 1)));
    }

    #[test]
    fn rejects_yesterday() {
        let today = day(2026, 10, 18);
        assert_eq!(
            parse("2026-10-17", today),
            Err(ValidationError::PastDate {
                date: day(2026, 10, 17),
                today
            })
        );
    }

    #[test]
    fn rejects_loose_shapes() {
        let today = day(2026, 10, 18);
        for input in [
            "2099-1-01",
            "2099-01-1",
            "99-01-01",
            "+2099-01-01",
            "2099/01/01",
            "2099-01-01 ",
            "tomorrow",
            "",
        ] {
            assert_eq!(
                parse(input, today),
                Err(ValidationError::InvalidDate(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_impossible_days() {
        let today = day(2026, 10, 18);
        assert!(matches!(
            parse("2099-02-30", today),
            Err(ValidationError::InvalidDate(_))
        ));
        assert!(matches!(
            parse("2099-13-01", today),
            Err(ValidationError::InvalidDate(_))
        ));
        assert!(matches!(
            parse("2099-04-31", today),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn accepts_leap_day() {
        let today = day(2026, 10, 18);
        assert_eq!(parse("2028-02-29", today), Ok(day(2028, 2, 29)));
        assert!(parse("2027-02-29", today).is_err());
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format(day(2099, 2, 1)), "2099-02-01");
    }
}
