//! Render timestamps the way they are said aloud.
//!
//! Only calendar fields are read, so the timestamp must already be in the
//! listener's timezone. Any `chrono` type implementing [`Datelike`] and
//! [`Timelike`] works: `DateTime<Tz>`, `NaiveDateTime`, `NaiveTime` for the
//! clock alone.

use chrono::{Datelike, Timelike, Weekday};

use crate::ordinal::to_ordinal_word;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Format a date as `"<Weekday>, <Month> <ordinal day>, <year>"`.
///
/// ```
/// use chrono::NaiveDate;
/// use speech::format_date_speech_friendly;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// assert_eq!(format_date_speech_friendly(&date), "Saturday, March first, 2025");
/// ```
pub fn format_date_speech_friendly<T: Datelike>(ts: &T) -> String {
    format!(
        "{}, {} {}, {}",
        weekday_name(ts.weekday()),
        MONTHS[ts.month0() as usize],
        to_ordinal_word(ts.day()),
        ts.year()
    )
}

/// Format a clock time on a 12-hour dial.
///
/// 12:00 is `"noon"` and 00:00 is `"midnight"`. Minutes are dropped on the
/// hour (`"3 PM"`) and zero-padded otherwise (`"3:05 PM"`).
pub fn format_time_speech_friendly<T: Timelike>(ts: &T) -> String {
    let (hour, minute) = (ts.hour(), ts.minute());
    match (hour, minute) {
        (12, 0) => return "noon".to_string(),
        (0, 0) => return "midnight".to_string(),
        _ => {}
    }

    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    let period = if hour < 12 { "AM" } else { "PM" };

    if minute == 0 {
        format!("{hour12} {period}")
    } else {
        format!("{hour12}:{minute:02} {period}")
    }
}

/// Sentence announcing the current date and time, for prompt context.
///
/// `timezone_display` is appended to the time verbatim, e.g.
/// `"US Eastern Time"`.
pub fn speech_date_context<T: Datelike + Timelike>(ts: &T, timezone_display: &str) -> String {
    format!(
        "Today is {}. The current time is {} {}.",
        format_date_speech_friendly(ts),
        format_time_speech_friendly(ts),
        timezone_display
    )
}
