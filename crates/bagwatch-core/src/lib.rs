//! Core domain + application logic for the bag watcher.
//!
//! This crate is intentionally transport-agnostic. The TGTG API and Telegram
//! live behind ports (traits) implemented in adapter crates.

pub mod app;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod gate;
pub mod logging;
pub mod ports;

pub use errors::{Error, Result};
