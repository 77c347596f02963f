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

//! Diagnostic reporting for parse and mutation steps
//!
//! The model never requires a sink: [`NullSink`] is the default and the
//! behavior of every operation is identical whichever sink is attached.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Receiver of debug-level messages describing parse/mutate steps
pub trait DiagnosticSink: Send + Sync {
    fn debug(&self, message: &str);
}

/// Discards every message
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn debug(&self, _message: &str) {}
}

/// Forwards messages to `tracing` at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "sshconf", "{}", message);
    }
}

/// Keeps messages in memory, mainly for inspecting what a load did
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the messages recorded so far
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn debug(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

/// Shared handle to a sink, cheap to clone alongside a `Config`
#[derive(Clone)]
pub struct Diagnostics(Arc<dyn DiagnosticSink>);

impl Diagnostics {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self(sink)
    }

    pub(crate) fn debug(&self, message: impl FnOnce() -> String) {
        self.0.debug(&message());
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self(Arc::new(NullSink))
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Diagnostics")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_messages() {
        let sink = Arc::new(MemorySink::new());
        let diagnostics = Diagnostics::new(sink.clone());
        diagnostics.debug(|| "first".to_string());
        diagnostics.debug(|| format!("second {}", 2));
        assert_eq!(sink.messages(), vec!["first", "second 2"]);
    }

    #[test]
    fn test_null_sink_is_default() {
        let diagnostics = Diagnostics::default();
        diagnostics.debug(|| "ignored".to_string());
    }
}
