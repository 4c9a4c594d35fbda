//! Cache module for the monkey list
//!
//! This module provides a fetch-once cache that keeps the monkey list in memory
//! for the lifetime of the process. Nothing is written to disk.

mod monkeys;

pub use monkeys::{MonkeyCache, MonkeyError};
