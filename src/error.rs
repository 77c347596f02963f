// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for SSH configuration modelling, parsing and persistence

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, mutating, loading or saving an
/// SSH configuration
#[derive(Debug, Error)]
pub enum SshConfigError {
    /// A call received arguments that do not match any supported shape
    /// (e.g. a name without a value, or an option name that cannot be
    /// written back as an `ssh_config` line)
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Strict deletion of a host or option that does not exist
    #[error("{what} not found")]
    NotFound { what: String },

    /// A load/save target that is neither a readable/writable file path nor
    /// an open stream
    #[error("unsupported source or destination: {source_desc}")]
    UnsupportedSource { source_desc: String },

    /// I/O failure on a supported source or destination
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SshConfigError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn host_not_found(host: &str) -> Self {
        Self::NotFound {
            what: format!("host '{host}'"),
        }
    }

    pub(crate) fn default_scope_not_found() -> Self {
        Self::NotFound {
            what: "default scope".to_string(),
        }
    }

    pub(crate) fn option_not_found(option: &str) -> Self {
        Self::NotFound {
            what: format!("option '{option}'"),
        }
    }

    pub(crate) fn unsupported(source_desc: impl Into<String>) -> Self {
        Self::UnsupportedSource {
            source_desc: source_desc.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, SshConfigError>;
