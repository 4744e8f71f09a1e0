//! Logger bootstrap for programs built on easel.

mod init;

pub use init::{LoggingConfig, init_logging};
