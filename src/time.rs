//! Wall-clock time source
//!
//! Provides wall-clock time in milliseconds since the Unix epoch

use chrono::Utc;

/// Get current wall-clock time in milliseconds since Unix epoch
#[inline]
pub fn unix_time_ms() -> i64 {
    Utc::now().timestamp_millis()
}
