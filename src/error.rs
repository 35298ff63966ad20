use thiserror::Error;

/// Represents errors that can occur while building or decoding a snowflake
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// The supplied time lies before the configured epoch
    #[error("Time {time} is before epoch {epoch}. Timestamp delta must be at least 0")]
    TimestampBeforeEpoch { time: i64, epoch: i64 },
    /// The timestamp delta does not fit in the 42-bit timestamp field
    #[error("Timestamp delta {delta} is invalid. Maximum allowed value is {max}")]
    TimestampOverflow { delta: u64, max: u64 },
    /// Error when worker ID exceeds the maximum allowed value
    #[error("Worker ID {worker} is invalid. Maximum allowed value is {max}")]
    InvalidWorkerId { worker: u8, max: u8 },
    /// Error when process ID exceeds the maximum allowed value
    #[error("Process ID {pid} is invalid. Maximum allowed value is {max}")]
    InvalidProcessId { pid: u8, max: u8 },
    /// A decimal snowflake string could not be decoded
    #[error(transparent)]
    Parse(#[from] ParseSnowflakeError),
}

/// Errors produced when decoding a decimal snowflake string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSnowflakeError {
    #[error("Snowflake string is empty")]
    Empty,
    #[error("Invalid character {ch:?} at position {index}. Only ASCII digits are allowed")]
    InvalidDigit { ch: char, index: usize },
    #[error("Snowflake value does not fit in 64 bits")]
    Overflow,
}
