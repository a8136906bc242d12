use chrono::{DateTime, SecondsFormat, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Return time now in seconds or 0
pub(crate) fn time_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::new(0, 0))
        .as_secs()
}

/// Convert `UnixEpoch` to ISO8601 format
pub(crate) fn unixepoch_to_iso(timestamp: i64) -> String {
    let iso_opt = DateTime::from_timestamp(timestamp, 0);
    match iso_opt {
        Some(result) => datetime_to_iso(&result),
        None => String::from("1970-01-01T00:00:00.000Z"),
    }
}

/// Render a UTC timestamp as RFC3339 with millisecond precision
pub fn datetime_to_iso(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/**
 * Convert a Windows FILETIME (100 nanosecond ticks since 1601-01-01) to UTC.
 * Zero means the program never ran. Values with the high bit set are rejected
 * by the Windows conversion APIs, so they are treated as out of range too
 */
pub fn filetime_to_datetime(filetime: u64) -> Option<DateTime<Utc>> {
    if filetime == 0 || filetime > i64::MAX as u64 {
        return None;
    }

    let windows_nano = 10000000;
    let seconds_to_unix: i64 = 11644473600;
    let nano_tick = 100;

    // Cannot overflow, the tick count fits in an i64
    let seconds = (filetime / windows_nano) as i64 - seconds_to_unix;
    let nanos = ((filetime % windows_nano) * nano_tick) as u32;
    DateTime::from_timestamp(seconds, nanos)
}

/**
 * Break a millisecond duration into hours/minutes/seconds.
 * Ex: 3725000 -> "1h 02m 05s", 125000 -> "2m 05s", 0 -> "0s"
 */
pub fn format_duration(milliseconds: u32) -> String {
    let seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    let seconds = seconds % 60;
    let minutes = minutes % 60;

    if hours > 0 {
        return format!("{hours}h {minutes:02}m {seconds:02}s");
    }
    if minutes > 0 {
        return format!("{minutes}m {seconds:02}s");
    }
    format!("{seconds}s")
}
