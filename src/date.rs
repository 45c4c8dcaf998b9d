// 📅 Date Compressor - due date → fixed-width numeric token
//
// Every month is treated as 31 days and every year as 372, counted from
// January 1st of the base year. The result is not a day count; it only needs
// to be unique and ordered within the bank's window.

use chrono::{Datelike, NaiveDate};

use crate::constants::{
    BASE_YEAR, COMPRESSED_DATE_WIDTH, DAYS_PER_MONTH, DAYS_PER_YEAR, PERIOD_AGO_DIC,
    PERIOD_FEB_JUL,
};
use crate::error::{ReferenceError, ReferenceResult};

/// Compress a date against the standard base year (2014).
pub fn compress_date(date: NaiveDate) -> ReferenceResult<String> {
    compress_date_from(date, BASE_YEAR)
}

/// Compress a date against an explicit base year.
///
/// Dates before January 1st of `base_year` are rejected. Far-future dates
/// produce tokens wider than four digits, which is accepted.
pub fn compress_date_from(date: NaiveDate, base_year: i32) -> ReferenceResult<String> {
    if date.year() < base_year {
        return Err(ReferenceError::InvalidDate(format!(
            "{} is before the base year {}",
            date, base_year
        )));
    }

    let value = (date.year() - base_year) as i64 * DAYS_PER_YEAR
        + (date.month0() as i64) * DAYS_PER_MONTH
        + date.day0() as i64;

    Ok(format!("{:0width$}", value, width = COMPRESSED_DATE_WIDTH))
}

/// Derive the academic period label for a date.
///
/// February through July is `FEBJULyy`, every other month is `AGODICyy`,
/// where `yy` is the last two digits of the date's own year.
pub fn infer_period_token(date: NaiveDate) -> String {
    let label = match date.month() {
        2..=7 => PERIOD_FEB_JUL,
        _ => PERIOD_AGO_DIC,
    };
    format!("{}{:02}", label, date.year().rem_euclid(100))
}

/// Parse a due date written as `DD/MM/YYYY` or ISO `YYYY-MM-DD`.
pub fn parse_due_date(raw: &str) -> ReferenceResult<NaiveDate> {
    let trimmed = raw.trim();

    NaiveDate::parse_from_str(trimmed, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map_err(|_| {
            ReferenceError::InvalidDate(format!(
                "'{}' is not DD/MM/YYYY or YYYY-MM-DD",
                trimmed
            ))
        })
}
