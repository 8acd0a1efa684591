//! Command implementations for the `vibrance` binary.
//!
//! Split out as a library so the batch behavior is testable without
//! spawning the binary.

pub mod commands;
