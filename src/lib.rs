//! Structured model, parser and formatter for OpenSSH client configuration
//! files.
//!
//! ```rust
//! use sshconf::{Config, EntryArgs};
//!
//! let mut config: Config = "User root\nHost foo\n    Port 22\n".parse().unwrap();
//! assert_eq!(config.get_option(Some("foo"), "Port"), Some("22"));
//!
//! config.set(Some("bar"), EntryArgs::pair("Port", "2222")).unwrap();
//! assert_eq!(
//!     config.to_string(),
//!     "User root\nHost foo\n    Port 22\nHost bar\n    Port 2222"
//! );
//! ```

pub mod cli;
pub mod error;
pub mod ssh_config;
pub mod utils;

pub use cli::{Cli, Commands};
pub use error::{Result, SshConfigError};
pub use ssh_config::{
    Config, Destination, DiagnosticSink, Diagnostics, Entry, EntryArgs, MemorySink, NullSink,
    ScopeKey, Source, TracingSink,
};
