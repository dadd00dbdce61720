//! Calendar helpers on UTC timestamps in epoch seconds
//!
//! Weeks start on Sunday. Period ends are the last second of the period.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc};

use crate::error::WindowError;

const SECONDS_PER_DAY: i64 = 86_400;

fn to_datetime(ts: i64) -> Result<DateTime<Utc>, WindowError> {
    DateTime::from_timestamp(ts, 0).ok_or(WindowError::TimestampOutOfRange(ts))
}

fn to_date(ts: i64) -> Result<NaiveDate, WindowError> {
    Ok(to_datetime(ts)?.date_naive())
}

fn first_second(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

fn last_second(date: NaiveDate) -> i64 {
    first_second(date) + SECONDS_PER_DAY - 1
}

pub fn start_of_day(ts: i64) -> Result<i64, WindowError> {
    Ok(first_second(to_date(ts)?))
}

pub fn end_of_day(ts: i64) -> Result<i64, WindowError> {
    Ok(last_second(to_date(ts)?))
}

fn week_first_day(ts: i64) -> Result<NaiveDate, WindowError> {
    let date = to_date(ts)?;
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back))
        .ok_or(WindowError::TimestampOutOfRange(ts))
}

pub fn start_of_week(ts: i64) -> Result<i64, WindowError> {
    Ok(first_second(week_first_day(ts)?))
}

pub fn end_of_week(ts: i64) -> Result<i64, WindowError> {
    let last = week_first_day(ts)?
        .checked_add_days(Days::new(6))
        .ok_or(WindowError::TimestampOutOfRange(ts))?;
    Ok(last_second(last))
}

fn quarter_first_day(ts: i64) -> Result<NaiveDate, WindowError> {
    let date = to_date(ts)?;
    let first_month = date.month0() / 3 * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), first_month, 1).ok_or(WindowError::TimestampOutOfRange(ts))
}

pub fn start_of_quarter(ts: i64) -> Result<i64, WindowError> {
    Ok(first_second(quarter_first_day(ts)?))
}

pub fn end_of_quarter(ts: i64) -> Result<i64, WindowError> {
    let last = quarter_first_day(ts)?
        .checked_add_months(Months::new(3))
        .and_then(|next| next.pred_opt())
        .ok_or(WindowError::TimestampOutOfRange(ts))?;
    Ok(last_second(last))
}

pub fn start_of_year(ts: i64) -> Result<i64, WindowError> {
    let date = to_date(ts)?;
    let first = NaiveDate::from_ymd_opt(date.year(), 1, 1).ok_or(WindowError::TimestampOutOfRange(ts))?;
    Ok(first_second(first))
}

pub fn end_of_year(ts: i64) -> Result<i64, WindowError> {
    let date = to_date(ts)?;
    let last = NaiveDate::from_ymd_opt(date.year(), 12, 31).ok_or(WindowError::TimestampOutOfRange(ts))?;
    Ok(last_second(last))
}

/// Shift by whole weeks; negative `weeks` moves backwards
pub fn add_weeks(ts: i64, weeks: i64) -> Result<i64, WindowError> {
    let shifted = weeks
        .checked_mul(7 * SECONDS_PER_DAY)
        .and_then(|delta| ts.checked_add(delta))
        .ok_or(WindowError::TimestampOutOfRange(ts))?;
    to_datetime(shifted).map(|dt| dt.timestamp())
}

/// Shift by calendar months, clamping the day to the target month's length
pub fn add_months(ts: i64, months: i32) -> Result<i64, WindowError> {
    let dt = to_datetime(ts)?;
    let step = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        dt.checked_add_months(step)
    } else {
        dt.checked_sub_months(step)
    };
    shifted
        .map(|dt| dt.timestamp())
        .ok_or(WindowError::TimestampOutOfRange(ts))
}

pub fn add_quarters(ts: i64, quarters: i32) -> Result<i64, WindowError> {
    let months = quarters.checked_mul(3).ok_or(WindowError::TimestampOutOfRange(ts))?;
    add_months(ts, months)
}

pub fn add_years(ts: i64, years: i32) -> Result<i64, WindowError> {
    let months = years.checked_mul(12).ok_or(WindowError::TimestampOutOfRange(ts))?;
    add_months(ts, months)
}
