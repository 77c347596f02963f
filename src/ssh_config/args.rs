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

//! Argument shapes accepted by `set` and `update`

use super::entry::Entry;
use super::parser::HOST_KEYWORD;
use crate::error::{Result, SshConfigError};

/// The data handed to [`Entry::set`], [`Config::set`](super::Config::set)
/// and [`Config::update`](super::Config::update)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EntryArgs {
    /// Nothing to apply
    #[default]
    Empty,
    /// Merge every option of another entry and take over its priority
    Entry(Entry),
    /// Merge name/value pairs; absent or empty values are skipped
    Options(Vec<(String, Option<String>)>),
    /// A single option, stored unless either side is absent
    Pair(Option<String>, Option<String>),
}

impl EntryArgs {
    /// A single `name value` option
    pub fn pair(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Pair(Some(name.into()), Some(value.into()))
    }

    /// A set of options that all carry a value
    pub fn options<I, K, V>(options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Options(
            options
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }

    /// Interpret positional arguments as received from a command line.
    ///
    /// `[]` is empty, `["Name=Value"]` and `["Name", "Value", ...]` are a
    /// pair (value tokens joined by single spaces). A lone name without a
    /// value is rejected.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        match tokens {
            [] => Ok(Self::Empty),
            [single] => {
                let single = single.as_ref();
                match single.split_once('=') {
                    Some((name, value)) => Ok(Self::pair(name.trim(), value.trim())),
                    None => Err(SshConfigError::invalid_argument(format!(
                        "option '{single}' has no value (expected 'Name Value' or 'Name=Value')"
                    ))),
                }
            }
            [name, values @ ..] => {
                let value = values
                    .iter()
                    .map(|v| v.as_ref())
                    .collect::<Vec<_>>()
                    .join(" ");
                Ok(Self::pair(name.as_ref(), value))
            }
        }
    }

    /// Whether applying these arguments can never store an option
    pub fn is_noop(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Entry(entry) => entry.is_empty(),
            Self::Options(options) => options
                .iter()
                .all(|(_, value)| value.as_deref().map_or(true, str::is_empty)),
            Self::Pair(name, value) => name.is_none() || value.is_none(),
        }
    }
}

impl From<Entry> for EntryArgs {
    fn from(entry: Entry) -> Self {
        Self::Entry(entry)
    }
}

impl From<(&str, &str)> for EntryArgs {
    fn from((name, value): (&str, &str)) -> Self {
        Self::pair(name, value)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EntryArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::options(iter)
    }
}

/// Reject option names that could not be written back as a config line
pub(crate) fn validate_option_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SshConfigError::invalid_argument("option name is empty"));
    }
    if name.chars().any(|c| c.is_whitespace() || c == '#') {
        return Err(SshConfigError::invalid_argument(format!(
            "option name '{name}' contains whitespace or '#'"
        )));
    }
    if name == HOST_KEYWORD {
        return Err(SshConfigError::invalid_argument(
            "'Host' opens a host scope and cannot be stored as an option",
        ));
    }
    Ok(())
}

/// Reject option values that would read back differently
pub(crate) fn validate_option_value(name: &str, value: &str) -> Result<()> {
    check_line_text(value)
        .map_err(|problem| SshConfigError::invalid_argument(format!("value of '{name}' {problem}")))
}

/// Reject host patterns that would read back differently
pub(crate) fn validate_host_pattern(pattern: &str) -> Result<()> {
    check_line_text(pattern)
        .map_err(|problem| SshConfigError::invalid_argument(format!("host pattern {problem}")))
}

/// Text following a keyword survives a write/read cycle only without line
/// breaks or comment markers, with single spaces between words.
fn check_line_text(text: &str) -> std::result::Result<(), String> {
    if text.contains(|c: char| c == '\n' || c == '\r') {
        return Err(format!("{text:?} contains a line break"));
    }
    if text.contains('#') {
        return Err(format!("{text:?} contains '#'"));
    }
    if text.split_whitespace().collect::<Vec<_>>().join(" ") != text {
        return Err(format!(
            "{text:?} has leading, trailing or repeated whitespace"
        ));
    }
    Ok(())
}
