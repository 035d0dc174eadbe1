
use crate::entry::DateTime;
use chrono::{NaiveTime, Timelike};
use std::fmt;

#[derive(Debug, Clone)]
pub struct LineError {
    pub error_message: String,
}

impl LineError {
    pub fn new(error_message: impl Into<String>) -> LineError {
        LineError {
            error_message: error_message.into(),
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.error_message)
    }
}

impl std::error::Error for LineError {}

/// Builds a `DateTime` from a day number and a clock time such as `08:30`.
/// The day is not checked against any calendar.
pub fn parse_date_time(day: &str, time: &str) -> Result<DateTime, LineError> {
    let day: u32 = day
        .trim()
        .parse()
        .map_err(|_| LineError::new(format!("cannot parse day '{}'", day.trim())))?;
    let time = parse_clock(time.trim())?;

    Ok(DateTime::new(day, time.hour(), time.minute()))
}

fn parse_clock(time: &str) -> Result<NaiveTime, LineError> {
    if let Ok(clock) = NaiveTime::parse_from_str(time, "%H:%M") {
        return Ok(clock);
    }

    // seconds are accepted but dropped
    if let Ok(clock) = NaiveTime::parse_from_str(time, "%H:%M:%S") {
        return Ok(clock);
    }

    Err(LineError::new(format!("cannot parse time '{}'", time)))
}
