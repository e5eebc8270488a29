//! Thread Name Prefix plugin.
//!
//! Prefixes newly created support-thread channel names with a configurable
//! string, and optionally swaps that prefix for a different one while a
//! thread's scheduled closure is pending. The host loader constructs the
//! plugin via [`ThreadNamePrefix::engage`] and, when it gets an instance
//! back, registers it behind the `ThreadLifecycleHooks` port.

pub mod plugin;

pub use plugin::ThreadNamePrefix;
