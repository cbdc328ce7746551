//! Logging utilities.
//!
//! The engine logs through the `log` facade only; this module wires up
//! `env_logger` for binaries that do not bring their own backend.

mod init;

pub use init::{LoggingConfig, init_logging};
