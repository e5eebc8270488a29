//! Core domain + application logic for the Thread Name Prefix plugin.
//!
//! This crate is intentionally host-agnostic. The bot's guild/channel surface
//! and its thread-lifecycle dispatch live behind ports (traits) implemented by
//! the host adapter; the plugin crate wires the two together.

pub mod domain;
pub mod errors;
pub mod logging;
pub mod ports;
pub mod prefix;
pub mod settings;

pub use errors::{Error, Result};
