//! # snowpack
//!
//! Pack a millisecond timestamp, a worker ID, a process ID and an increment
//! counter into one sortable 64-bit snowflake, rendered as a decimal string.
//!
//! | Field           | Bits | Range        |
//! |-----------------|------|--------------|
//! | timestamp delta | 42   | 0 .. 2^42-1  |
//! | worker          | 5    | 0 .. 31      |
//! | process ID      | 5    | 0 .. 31      |
//! | increment       | 12   | 0 .. 4095    |
//!
//! - 📈 Time-sorted for a fixed producer
//! - 🧮 Pure integer arithmetic, no floating point
//! - 🔒 Stateless encoder, lock-free generator
//! - 🚫 Out-of-range fields are errors, never silently truncated
//!
//! ```
//! use snowpack::{generate, SnowflakeOptions};
//!
//! let id = generate(Some(1), SnowflakeOptions::new().worker(1)).unwrap();
//! assert_eq!(id, ((1u64 << 22) | (1 << 17)).to_string());
//! ```

#![forbid(unsafe_code)]

mod config;
mod encoder;
mod error;
mod extractor;
mod generator;
pub mod layout;
#[cfg(feature = "serde")]
pub mod serde;
mod snowflake;
mod time;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{SnowflakeConfig, SnowflakeConfigBuilder, SnowflakeOptions};
pub use encoder::{encode, generate, generate_at};
pub use error::{ParseSnowflakeError, SnowflakeError};
pub use extractor::SnowflakeParts;
pub use generator::SnowflakeGenerator;
pub use snowflake::Snowflake;
pub use time::unix_time_ms;
