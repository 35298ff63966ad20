//! In-crate test suites

pub mod test_utils;

mod boundary_tests;
