//! ID generation logic

use std::sync::atomic::Ordering;

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::SnowflakeGenerator;
use crate::encoder::timestamp_delta;
use crate::error::SnowflakeError;
use crate::layout::{pack, wrap_increment};
use crate::snowflake::Snowflake;
use crate::time::unix_time_ms;

impl SnowflakeGenerator {
    /// Generate a snowflake for the current time
    #[inline]
    pub fn next_id(&self) -> Result<Snowflake, SnowflakeError> {
        self.next_id_at(unix_time_ms())
    }

    /// Generate a snowflake for an explicit time
    ///
    /// The counter only advances when the time is in range.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id_at(&self, time: i64) -> Result<Snowflake, SnowflakeError> {
        let delta = timestamp_delta(time, self.config.epoch())?;
        let increment = self.counter.fetch_add(1, Ordering::AcqRel);
        Ok(Snowflake::from_raw(pack(
            delta,
            self.config.worker(),
            self.config.pid(),
            wrap_increment(increment),
        )))
    }

    /// Generate a decimal snowflake for the current time
    pub fn generate(&self) -> Result<String, SnowflakeError> {
        self.next_id().map(|id| id.to_string())
    }

    /// Generate a decimal snowflake for an explicit time
    pub fn generate_at(&self, time: i64) -> Result<String, SnowflakeError> {
        self.next_id_at(time).map(|id| id.to_string())
    }
}
