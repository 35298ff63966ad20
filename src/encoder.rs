//! Snowflake encoder
//!
//! Packs `time - epoch`, worker, process ID and the wrapped increment into a
//! single `u64`. Every field except the increment is range-checked; nothing is
//! silently truncated.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::config::{SnowflakeConfig, SnowflakeOptions};
use crate::error::SnowflakeError;
use crate::layout::{pack, wrap_increment, MAX_TIMESTAMP};
use crate::snowflake::Snowflake;
use crate::time::unix_time_ms;

/// Encode a snowflake for `time` (milliseconds) using a resolved configuration
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn encode(time: i64, config: &SnowflakeConfig) -> Result<Snowflake, SnowflakeError> {
    config.validate().map_err(rejected)?;
    let delta = timestamp_delta(time, config.epoch()).map_err(rejected)?;
    let increment = wrap_increment(config.increment());
    Ok(Snowflake::from_raw(pack(
        delta,
        config.worker(),
        config.pid(),
        increment,
    )))
}

/// Generate a decimal snowflake
///
/// `time` defaults to the current wall-clock time in milliseconds; every
/// absent option falls back to its own default.
///
/// ```
/// use snowpack::{generate, SnowflakeOptions};
///
/// assert_eq!(generate(Some(0), SnowflakeOptions::default()).unwrap(), "0");
/// assert_eq!(generate(Some(1), SnowflakeOptions::default()).unwrap(), "4194304");
/// ```
pub fn generate(time: Option<i64>, options: SnowflakeOptions) -> Result<String, SnowflakeError> {
    let time = time.unwrap_or_else(unix_time_ms);
    generate_at(time, options)
}

/// Generate a decimal snowflake for an explicit time
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn generate_at(time: i64, options: SnowflakeOptions) -> Result<String, SnowflakeError> {
    encode(time, &options.resolve()).map(|id| id.to_string())
}

/// `time - epoch`, checked against the 42-bit timestamp field
pub(crate) fn timestamp_delta(time: i64, epoch: i64) -> Result<u64, SnowflakeError> {
    // Widen so that extreme inputs cannot overflow the subtraction itself
    let delta = time as i128 - epoch as i128;
    if delta < 0 {
        return Err(SnowflakeError::TimestampBeforeEpoch { time, epoch });
    }
    if delta > MAX_TIMESTAMP as i128 {
        return Err(SnowflakeError::TimestampOverflow {
            delta: u64::try_from(delta).unwrap_or(u64::MAX),
            max: MAX_TIMESTAMP,
        });
    }
    Ok(delta as u64)
}

#[inline]
fn rejected(err: SnowflakeError) -> SnowflakeError {
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %err, "rejecting snowflake input");
    err
}
