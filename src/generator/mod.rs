//! Reusable snowflake generator
//!
//! Holds a validated configuration and advances the increment on every ID so
//! callers do not have to thread the counter through by hand.
//!
//! - `generate` - ID generation for current or explicit time

mod generate;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::{SnowflakeConfig, SnowflakeOptions};
use crate::error::SnowflakeError;

/// Snowflake generator bound to one worker and process
///
/// The counter is atomic, so a single generator can be shared between threads
/// by reference. It wraps at 4096 without waiting for the clock: producing
/// more than 4096 IDs in one millisecond repeats IDs.
#[derive(Debug)]
#[repr(align(64))]
pub struct SnowflakeGenerator {
    /// Raw counter; wrapped into the 12-bit field on encode
    pub(crate) counter: AtomicU64,

    config: SnowflakeConfig,
}

impl SnowflakeGenerator {
    /// Create from partial options, applying defaults to absent fields
    pub fn new(options: SnowflakeOptions) -> Result<Self, SnowflakeError> {
        Self::with_config(options.resolve())
    }

    /// Create with a resolved configuration
    ///
    /// The configured increment becomes the first value the counter hands out.
    pub fn with_config(config: SnowflakeConfig) -> Result<Self, SnowflakeError> {
        config.validate()?;
        Ok(Self {
            counter: AtomicU64::new(config.increment()),
            config,
        })
    }

    /// Configuration this generator was built with
    #[inline(always)]
    pub fn config(&self) -> &SnowflakeConfig {
        &self.config
    }

    #[inline(always)]
    pub fn epoch(&self) -> i64 {
        self.config.epoch()
    }

    #[inline(always)]
    pub fn worker(&self) -> u8 {
        self.config.worker()
    }

    #[inline(always)]
    pub fn pid(&self) -> u8 {
        self.config.pid()
    }

    /// Raw counter value the next ID will use, before wrapping
    #[inline]
    pub fn increment(&self) -> u64 {
        self.counter.load(Ordering::Acquire)
    }

    /// Reset the counter
    #[inline]
    pub fn set_increment(&self, increment: u64) {
        self.counter.store(increment, Ordering::Release);
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self {
            counter: AtomicU64::new(0),
            config: SnowflakeConfig::default(),
        }
    }
}
