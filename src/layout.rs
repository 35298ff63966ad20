//! Fixed bit layout of a snowflake
//!
//! ```text
//!  63                                  22 21   17 16   12 11          0
//! +--------------------------------------+-------+-------+-------------+
//! |        timestamp delta (42)          | wrk 5 | pid 5 | increment 12|
//! +--------------------------------------+-------+-------+-------------+
//! ```

pub const TIMESTAMP_BITS: u8 = 42;
pub const WORKER_BITS: u8 = 5;
pub const PID_BITS: u8 = 5;
pub const INCREMENT_BITS: u8 = 12;

pub const PID_SHIFT: u8 = INCREMENT_BITS;
pub const WORKER_SHIFT: u8 = PID_SHIFT + PID_BITS;
pub const TIMESTAMP_SHIFT: u8 = WORKER_SHIFT + WORKER_BITS;

pub const TIMESTAMP_MASK: u64 = mask(TIMESTAMP_BITS);
pub const WORKER_MASK: u64 = mask(WORKER_BITS);
pub const PID_MASK: u64 = mask(PID_BITS);
pub const INCREMENT_MASK: u64 = mask(INCREMENT_BITS);

pub const MAX_TIMESTAMP: u64 = TIMESTAMP_MASK;
pub const MAX_WORKER_ID: u8 = WORKER_MASK as u8;
pub const MAX_PROCESS_ID: u8 = PID_MASK as u8;
pub const MAX_INCREMENT: u16 = INCREMENT_MASK as u16;

/// Number of distinct increment values; the counter wraps at this modulus
pub const INCREMENT_MODULUS: u64 = 1 << INCREMENT_BITS;

/// Calculate mask for given number of bits
#[inline(always)]
pub(crate) const fn mask(bits: u8) -> u64 {
    (1u64 << bits) - 1
}

/// Wrap a raw counter into the increment field
#[inline(always)]
pub(crate) const fn wrap_increment(increment: u64) -> u16 {
    (increment % INCREMENT_MODULUS) as u16
}

/// Place already range-checked fields into their bit ranges
#[inline(always)]
pub(crate) const fn pack(timestamp: u64, worker: u8, pid: u8, increment: u16) -> u64 {
    (timestamp << TIMESTAMP_SHIFT)
        | ((worker as u64) << WORKER_SHIFT)
        | ((pid as u64) << PID_SHIFT)
        | (increment as u64)
}
