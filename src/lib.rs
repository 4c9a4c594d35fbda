//! MonkeyFinder Library
//!
//! This module exposes the monkey cache, rating store, and CLI modules for use
//! in integration tests.

pub mod app;
pub mod cache;
pub mod cli;
pub mod data;
pub mod ratings;
pub mod ui;
