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

//! SSH configuration model, parsing and persistence
//!
//! A [`Config`] maps scopes (the default scope or a `Host` pattern) to an
//! [`Entry`] of options. Text is read with [`parser::parse`] and written
//! with [`parser::format`]; both round-trip the host/option data but not
//! comments or whitespace.

use anyhow::Context;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Result, SshConfigError};

mod args;
mod diagnostics;
mod entry;
mod io;
pub mod parser;
mod types;


use args::validate_host_pattern;
pub use args::EntryArgs;
pub use diagnostics::{DiagnosticSink, Diagnostics, MemorySink, NullSink, TracingSink};
pub use entry::Entry;
pub use io::{Destination, Source};
pub use types::ScopeKey;

/// Scoped SSH client configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    entries: BTreeMap<ScopeKey, Entry>,
    diagnostics: Diagnostics,
}

impl Config {
    /// Create a new empty SSH configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pre-seeded with a default entry and named
    /// host entries. Entries without options are not stored.
    pub fn with_entries<I, S>(default: Option<Entry>, hosts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Entry)>,
        S: AsRef<str>,
    {
        let mut config = Self::new();
        if let Some(entry) = default {
            config.set(None, entry)?;
        }
        for (host, entry) in hosts {
            config.set(Some(host.as_ref()), entry)?;
        }
        Ok(config)
    }

    /// Build a configuration from several sources. Options from earlier
    /// sources take precedence over the same options in later ones.
    pub fn open<'a>(sources: Vec<Source<'a>>) -> Result<Self> {
        let mut config = Self::new();
        for source in sources.into_iter().rev() {
            config.load(source, false)?;
        }
        Ok(config)
    }

    /// Attach a diagnostic sink receiving debug messages for each step
    pub fn with_sink(self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.with_diagnostics(Diagnostics::new(sink))
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Entry for `host`, or for the default scope when `host` is `None`
    pub fn get(&self, host: Option<&str>) -> Option<&Entry> {
        self.entries.get(&ScopeKey::from_host(host))
    }

    /// Value of `option` in the entry for `host`
    pub fn get_option(&self, host: Option<&str>, option: &str) -> Option<&str> {
        self.get(host).and_then(|entry| entry.get(option))
    }

    /// Every option in effect for `host`: the default entry's options,
    /// overridden or extended by the host's own.
    ///
    /// `None` when `host` has no entry. The result carries the host entry's
    /// priority. For `host == None` this is a copy of the default entry.
    pub fn get_full(&self, host: Option<&str>) -> Option<Entry> {
        let entry = self.get(host)?;
        let mut merged = match (host, self.default_entry()) {
            (Some(_), Some(default)) => default.clone(),
            _ => Entry::new(entry.priority()),
        };
        merged.overlay(entry);
        Some(merged)
    }

    /// The default-scope entry, if any
    pub fn default_entry(&self) -> Option<&Entry> {
        self.get(None)
    }

    /// Set options for `host` (`None` is the default scope).
    ///
    /// Arguments that cannot store anything are a no-op. Host patterns,
    /// option names and values that would not read back unchanged fail
    /// with [`SshConfigError::InvalidArgument`]. The incoming data
    /// becomes an entry with priority equal to the current number of
    /// entries, or one past the highest stored priority if that is larger
    /// (an [`EntryArgs::Entry`] brings its own priority instead). An
    /// existing entry for the scope is merged with it and takes over that
    /// priority, moving the scope behind the ones set before it.
    pub fn set(&mut self, host: Option<&str>, args: impl Into<EntryArgs>) -> Result<()> {
        let args = args.into();
        let key = ScopeKey::from_host(host);
        if let Some(pattern) = host {
            validate_host_pattern(pattern)?;
        }

        if args.is_noop() {
            self.diagnostics
                .debug(|| format!("set {key}: nothing to set"));
            return Ok(());
        }

        let incoming = Entry::from_args(self.next_priority(), args)?;
        if incoming.is_empty() {
            self.diagnostics
                .debug(|| format!("set {key}: no options after filtering"));
            return Ok(());
        }

        self.diagnostics
            .debug(|| format!("set {key}: {incoming:?}"));
        match self.entries.get_mut(&key) {
            Some(existing) => existing.set(incoming)?,
            None => {
                self.entries.insert(key, incoming);
            }
        }
        Ok(())
    }

    /// Update options for `host` without changing its priority.
    ///
    /// Given options overwrite existing ones and new options are added.
    /// Without an existing entry this behaves like [`Config::set`].
    pub fn update(&mut self, host: Option<&str>, args: impl Into<EntryArgs>) -> Result<()> {
        let args = args.into();
        let key = ScopeKey::from_host(host);

        let Some(existing) = self.entries.get_mut(&key) else {
            return self.set(host, args);
        };

        if args.is_noop() {
            self.diagnostics
                .debug(|| format!("update {key}: nothing to update"));
            return Ok(());
        }

        self.diagnostics.debug(|| format!("update {key}: {args:?}"));
        let priority = existing.priority();
        let result = existing.set(args);
        existing.set_priority(Some(priority));
        result
    }

    /// Whether a named host has an entry.
    ///
    /// The default scope is never reported as contained: `contains(None)` is
    /// `false` even when a default entry exists.
    pub fn contains(&self, host: Option<&str>) -> bool {
        match host {
            Some(host) => self.entries.contains_key(&ScopeKey::from(host)),
            None => false,
        }
    }

    /// Remove a scope, or some of its options.
    ///
    /// Without `options` the whole scope goes away; a missing named host is
    /// an error, a missing default entry is not. With `options` the scope
    /// must exist and missing options are ignored.
    pub fn remove<S: AsRef<str>>(&mut self, host: Option<&str>, options: &[S]) -> Result<()> {
        let key = ScopeKey::from_host(host);

        if options.is_empty() {
            self.diagnostics.debug(|| format!("remove {key}"));
            return match (self.entries.remove(&key), host) {
                (None, Some(host)) => Err(SshConfigError::host_not_found(host)),
                _ => Ok(()),
            };
        }

        let entry = self
            .entries
            .get_mut(&key)
            .ok_or_else(|| match host {
                Some(host) => SshConfigError::host_not_found(host),
                None => SshConfigError::default_scope_not_found(),
            })?;
        self.diagnostics.debug(|| {
            let names: Vec<&str> = options.iter().map(|o| o.as_ref()).collect();
            format!("remove {key}: {}", names.join(", "))
        });
        entry.remove(options);
        Ok(())
    }

    /// Named host patterns, in pattern order
    pub fn hosts(&self) -> Vec<&str> {
        self.entries.keys().filter_map(ScopeKey::host).collect()
    }

    /// Number of stored entries, the default entry included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they are written out: the default entry first,
    /// then named entries by ascending priority (ties by pattern)
    pub fn entries(&self) -> Vec<(&ScopeKey, &Entry)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by_key(|(key, entry)| (!key.is_default(), entry.priority()));
        entries
    }

    /// Write the configuration text, replacing any previous content
    pub fn save<'a>(&self, destination: impl Into<Destination<'a>>) -> Result<()> {
        let text = self.to_string();
        self.diagnostics
            .debug(|| format!("saving {} entries", self.entries.len()));
        destination.into().write_all(&text)
    }

    /// Parse `source` and apply every scope to this configuration, the
    /// default scope first.
    ///
    /// With `update == false` each scope goes through [`Config::set`] (the
    /// loaded priority wins), otherwise through [`Config::update`] (existing
    /// priorities are kept).
    pub fn load<'a>(&mut self, source: impl Into<Source<'a>>, update: bool) -> Result<()> {
        let content = source.into().read_to_string()?;
        let loaded = parser::parse_with_diagnostics(&content, self.diagnostics.clone())?;
        self.load_config(&loaded, update)
    }

    /// Apply every scope of another configuration, like [`Config::load`]
    pub fn load_config(&mut self, other: &Config, update: bool) -> Result<()> {
        for (key, entry) in &other.entries {
            if update {
                self.update(key.host(), entry.clone())?;
            } else {
                self.set(key.host(), entry.clone())?;
            }
        }
        Ok(())
    }

    /// Load SSH configuration from a file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        io::check_readable(path)?;
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read SSH config file: {}", path.display()))?;

        parser::parse_with_diagnostics(&content, Diagnostics::new(Arc::new(TracingSink)))
            .with_context(|| format!("Failed to parse SSH config file: {}", path.display()))
    }

    /// Save SSH configuration to a file, creating parent directories
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        io::check_writable(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        tokio::fs::write(path, self.to_string())
            .await
            .with_context(|| format!("Failed to write SSH config file: {}", path.display()))
    }

    /// Priority for newly set data: the entry count, raised past the highest
    /// stored priority when parsing or removals left gaps
    fn next_priority(&self) -> i64 {
        let count = self.entries.len() as i64;
        self.entries
            .values()
            .map(|entry| entry.priority().saturating_add(1))
            .fold(count, i64::max)
    }
}

impl PartialEq for Config {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&parser::format(self))
    }
}

impl FromStr for Config {
    type Err = SshConfigError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse(s)
    }
}
