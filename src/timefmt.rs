// War timestamp handling. The CoC API serves UTC timestamps in the compact
// `YYYYMMDDThhmmss.ffffffZ` form; the sheet displays them shifted to IST.
// The shift is a fixed +5:30 applied to the parsed instant, no tz database.

use chrono::{Duration, NaiveDateTime, Utc};

/// Fixed UTC offset for display (IST, +5:30).
pub const UTC_OFFSET_MINUTES: i64 = 5 * 60 + 30;

const API_TIME_FORMAT: &str = "%Y%m%dT%H%M%S%.fZ";
const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse an API timestamp and shift it to local display time.
pub fn parse_war_time(ts: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let utc = NaiveDateTime::parse_from_str(ts, API_TIME_FORMAT)?;
    Ok(utc + Duration::minutes(UTC_OFFSET_MINUTES))
}

/// Format an API timestamp as `YYYY-MM-DD hh:mm` local display time.
pub fn format_war_time(ts: &str) -> Result<String, chrono::ParseError> {
    Ok(format_local(parse_war_time(ts)?))
}

/// Format an already-shifted local instant for display.
pub fn format_local(dt: NaiveDateTime) -> String {
    dt.format(DISPLAY_TIME_FORMAT).to_string()
}

/// Format a local instant for the "last updated" marker row (with seconds).
pub fn format_stamp(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Current local display time (UTC now + fixed offset).
pub fn now_local() -> NaiveDateTime {
    Utc::now().naive_utc() + Duration::minutes(UTC_OFFSET_MINUTES)
}

/// Render a duration as `H:MM:SS`, hours unbounded, fractional seconds
/// truncated. Callers must not pass a negative duration.
pub fn format_duration(d: Duration) -> String {
    let secs = d.num_seconds();
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
