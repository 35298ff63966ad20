//! SnowflakeConfig builder for constructing configuration

use super::{validate_pid, validate_worker, SnowflakeConfig};
use crate::error::SnowflakeError;

/// Default configuration values
pub(super) const DEFAULT_EPOCH: i64 = 0;
pub(super) const DEFAULT_WORKER: u8 = 0;
pub(super) const DEFAULT_PID: u8 = 0;
pub(super) const DEFAULT_INCREMENT: u64 = 0;

/// Builder for SnowflakeConfig
#[derive(Debug)]
pub struct SnowflakeConfigBuilder {
    epoch: i64,
    worker: u8,
    pid: u8,
    increment: u64,
}

impl SnowflakeConfigBuilder {
    /// Create a new SnowflakeConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            worker: DEFAULT_WORKER,
            pid: DEFAULT_PID,
            increment: DEFAULT_INCREMENT,
        }
    }

    /// Set the epoch in milliseconds since the Unix epoch
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set the worker ID (0-31)
    pub fn worker(mut self, worker: u8) -> Result<Self, SnowflakeError> {
        validate_worker(worker)?;
        self.worker = worker;
        Ok(self)
    }

    /// Set the process ID (0-31)
    pub fn pid(mut self, pid: u8) -> Result<Self, SnowflakeError> {
        validate_pid(pid)?;
        self.pid = pid;
        Ok(self)
    }

    /// Set the starting increment; any value is accepted and wrapped on encode
    pub const fn increment(mut self, increment: u64) -> Self {
        self.increment = increment;
        self
    }

    /// Build the final SnowflakeConfig
    pub fn build(self) -> SnowflakeConfig {
        SnowflakeConfig {
            epoch: self.epoch,
            worker: self.worker,
            pid: self.pid,
            increment: self.increment,
        }
    }
}

impl Default for SnowflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
