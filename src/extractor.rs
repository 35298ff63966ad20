use chrono::{DateTime, Utc};

use crate::config::{validate_pid, validate_worker};
use crate::error::SnowflakeError;
use crate::layout::{
    pack, wrap_increment, INCREMENT_MASK, MAX_TIMESTAMP, PID_MASK, PID_SHIFT, TIMESTAMP_MASK, TIMESTAMP_SHIFT,
    WORKER_MASK, WORKER_SHIFT,
};
use crate::snowflake::Snowflake;

/// The four fields of a snowflake, as stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnowflakeParts {
    /// Milliseconds since the epoch the snowflake was encoded against
    pub timestamp: u64,
    pub worker: u8,
    pub pid: u8,
    pub increment: u16,
}

impl SnowflakeParts {
    /// Rebuild a snowflake from its parts
    ///
    /// The increment wraps modulo 4096 exactly as it does in the encoder.
    pub fn pack(&self) -> Result<Snowflake, SnowflakeError> {
        if self.timestamp > MAX_TIMESTAMP {
            return Err(SnowflakeError::TimestampOverflow {
                delta: self.timestamp,
                max: MAX_TIMESTAMP,
            });
        }
        validate_worker(self.worker)?;
        validate_pid(self.pid)?;
        Ok(Snowflake::from_raw(pack(
            self.timestamp,
            self.worker,
            self.pid,
            wrap_increment(self.increment as u64),
        )))
    }
}

impl Snowflake {
    /// Extract timestamp component (milliseconds since the encoding epoch)
    #[inline(always)]
    pub const fn timestamp(self) -> u64 {
        (self.to_raw() >> TIMESTAMP_SHIFT) & TIMESTAMP_MASK
    }

    /// Extract worker component
    #[inline(always)]
    pub const fn worker(self) -> u8 {
        ((self.to_raw() >> WORKER_SHIFT) & WORKER_MASK) as u8
    }

    /// Extract process ID component
    #[inline(always)]
    pub const fn pid(self) -> u8 {
        ((self.to_raw() >> PID_SHIFT) & PID_MASK) as u8
    }

    /// Extract increment component
    #[inline(always)]
    pub const fn increment(self) -> u16 {
        (self.to_raw() & INCREMENT_MASK) as u16
    }

    /// Decompose into timestamp, worker, process ID and increment
    #[inline]
    pub const fn decompose(self) -> SnowflakeParts {
        SnowflakeParts {
            timestamp: self.timestamp(),
            worker: self.worker(),
            pid: self.pid(),
            increment: self.increment(),
        }
    }

    /// Generation time in milliseconds since the Unix epoch
    ///
    /// `epoch` must be the epoch the snowflake was encoded against.
    #[inline]
    pub const fn unix_millis(self, epoch: i64) -> i64 {
        // 42 bits always fit in i64
        epoch.saturating_add(self.timestamp() as i64)
    }

    /// Generation time as a UTC datetime, if representable
    pub fn datetime(self, epoch: i64) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.unix_millis(epoch))
    }
}
