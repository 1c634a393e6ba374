//! Canonical timestamp rendering for debug payloads.
//!
//! One fixed format, always UTC: `YYYY-MM-DD HH:MM:SS.ffffff +00:00`
//! (zero-padded fields, exactly six fractional-second digits). This is
//! a pure formatter with no companion parser.

use time::{OffsetDateTime, UtcOffset};

/// Render a timestamp in the canonical format.
///
/// The input is converted to UTC first, so the same instant always
/// renders identically regardless of the offset it was carried in.
pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
    let utc = timestamp.to_offset(UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06} +00:00",
        utc.year(),
        utc.month() as u8,
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second(),
        utc.microsecond()
    )
}

/// The current instant in the canonical format.
pub fn now_string() -> String {
    format_timestamp(OffsetDateTime::now_utc())
}
