//! Configuration for snowflake encoding
//!
//! [`SnowflakeOptions`] carries what the caller supplied, field by field.
//! [`SnowflakeOptions::resolve`] fills every absent field with its default
//! and yields a [`SnowflakeConfig`] the encoder can work with directly.

mod builder;

pub use builder::SnowflakeConfigBuilder;
use builder::{DEFAULT_EPOCH, DEFAULT_INCREMENT, DEFAULT_PID, DEFAULT_WORKER};

use crate::error::SnowflakeError;
use crate::layout::{MAX_PROCESS_ID, MAX_WORKER_ID};

/// Partial caller options; every field falls back to its default on its own
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnowflakeOptions {
    pub epoch: Option<i64>,
    pub worker: Option<u8>,
    pub pid: Option<u8>,
    pub increment: Option<u64>,
}

impl SnowflakeOptions {
    /// Options with every field absent
    pub const fn new() -> Self {
        Self {
            epoch: None,
            worker: None,
            pid: None,
            increment: None,
        }
    }

    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = Some(epoch);
        self
    }

    pub const fn worker(mut self, worker: u8) -> Self {
        self.worker = Some(worker);
        self
    }

    pub const fn pid(mut self, pid: u8) -> Self {
        self.pid = Some(pid);
        self
    }

    pub const fn increment(mut self, increment: u64) -> Self {
        self.increment = Some(increment);
        self
    }

    /// Apply defaults to every absent field
    ///
    /// Values are not range-checked here; see [`SnowflakeConfig::validate`].
    pub const fn resolve(self) -> SnowflakeConfig {
        SnowflakeConfig {
            epoch: match self.epoch {
                Some(epoch) => epoch,
                None => DEFAULT_EPOCH,
            },
            worker: match self.worker {
                Some(worker) => worker,
                None => DEFAULT_WORKER,
            },
            pid: match self.pid {
                Some(pid) => pid,
                None => DEFAULT_PID,
            },
            increment: match self.increment {
                Some(increment) => increment,
                None => DEFAULT_INCREMENT,
            },
        }
    }
}

impl From<SnowflakeConfig> for SnowflakeOptions {
    fn from(config: SnowflakeConfig) -> Self {
        Self {
            epoch: Some(config.epoch),
            worker: Some(config.worker),
            pid: Some(config.pid),
            increment: Some(config.increment),
        }
    }
}

/// Fully-specified encoding configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeConfig {
    epoch: i64,
    worker: u8,
    pid: u8,
    increment: u64,
}

impl SnowflakeConfig {
    /// Create a configuration, checking worker and process IDs
    pub fn new(epoch: i64, worker: u8, pid: u8, increment: u64) -> Result<Self, SnowflakeError> {
        let config = Self {
            epoch,
            worker,
            pid,
            increment,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new()
    }

    /// Check that worker and process IDs fit their 5-bit fields
    pub fn validate(&self) -> Result<(), SnowflakeError> {
        validate_worker(self.worker)?;
        validate_pid(self.pid)
    }

    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn worker(&self) -> u8 {
        self.worker
    }

    #[inline(always)]
    pub const fn pid(&self) -> u8 {
        self.pid
    }

    /// Raw increment as supplied, before wrapping
    #[inline(always)]
    pub const fn increment(&self) -> u64 {
        self.increment
    }

    /// Copy of this configuration with a different increment
    #[inline]
    pub const fn with_increment(mut self, increment: u64) -> Self {
        self.increment = increment;
        self
    }
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        SnowflakeOptions::new().resolve()
    }
}

pub(crate) fn validate_worker(worker: u8) -> Result<(), SnowflakeError> {
    if worker > MAX_WORKER_ID {
        return Err(SnowflakeError::InvalidWorkerId {
            worker,
            max: MAX_WORKER_ID,
        });
    }
    Ok(())
}

pub(crate) fn validate_pid(pid: u8) -> Result<(), SnowflakeError> {
    if pid > MAX_PROCESS_ID {
        return Err(SnowflakeError::InvalidProcessId {
            pid,
            max: MAX_PROCESS_ID,
        });
    }
    Ok(())
}
