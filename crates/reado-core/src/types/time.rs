//! Epoch-millisecond timestamps and conversions.

use chrono::{DateTime, Local, TimeZone};

/// Milliseconds since the Unix epoch, the unit every persisted timestamp uses.
pub type EpochMillis = i64;

/// One minute in milliseconds.
pub const MINUTE_MILLIS: i64 = 60 * 1000;

/// One hour in milliseconds.
pub const HOUR_MILLIS: i64 = 60 * MINUTE_MILLIS;

/// Convert whole minutes to milliseconds.
pub fn minutes(n: u32) -> i64 {
    n as i64 * MINUTE_MILLIS
}

/// Interpret an epoch-millisecond timestamp in the local time zone.
pub fn to_local(millis: EpochMillis) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(millis).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes() {
        assert_eq!(minutes(90), 90 * 60_000);
        assert_eq!(minutes(60), HOUR_MILLIS);
    }

    #[test]
    fn test_to_local_round_trips_millis() {
        let local = to_local(1_700_000_000_123).unwrap();
        assert_eq!(local.timestamp_millis(), 1_700_000_000_123);
    }
}
