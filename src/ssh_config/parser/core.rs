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

//! Core SSH configuration parsing
//!
//! The parser is a single line-oriented pass. Every `Host` line closes the
//! scope collected so far and hands it to [`Config::set`], so the same
//! empty-entry and priority rules apply to parsed and programmatic data.

use super::formatter::HOST_KEYWORD;
use crate::error::Result;
use crate::ssh_config::diagnostics::Diagnostics;
use crate::ssh_config::{Config, Entry, EntryArgs};

/// Parse SSH configuration content
pub fn parse(content: &str) -> Result<Config> {
    parse_with_diagnostics(content, Diagnostics::default())
}

/// Parse SSH configuration content, reporting each step to `diagnostics`.
/// The returned config keeps the diagnostics handle.
pub fn parse_with_diagnostics(content: &str, diagnostics: Diagnostics) -> Result<Config> {
    let mut config = Config::new().with_diagnostics(diagnostics.clone());
    let mut current_host: Option<String> = None;
    let mut priority: i64 = 0;
    let mut current_entry = Entry::new(priority);

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;

        let Some((option, value)) = split_line(line) else {
            continue;
        };

        if option == HOST_KEYWORD {
            flush(&mut config, current_host.take(), current_entry, &diagnostics)?;
            priority += 1;
            diagnostics.debug(|| {
                format!("line {line_number}: Host '{value}' opens scope with priority {priority}")
            });
            current_host = Some(value);
            current_entry = Entry::new(priority);
        } else {
            diagnostics.debug(|| format!("line {line_number}: {option} = '{value}'"));
            current_entry.set(EntryArgs::Pair(Some(option), Some(value)))?;
        }
    }

    flush(&mut config, current_host, current_entry, &diagnostics)?;
    Ok(config)
}

/// Split a raw line into its option name and value.
///
/// Whitespace is trimmed, everything from the first `#` is dropped and
/// runs of whitespace inside the value collapse to a single space.
/// Returns `None` for blank and comment-only lines.
pub fn split_line(line: &str) -> Option<(String, String)> {
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut parts = line.split_whitespace();
    let option = parts.next()?;
    let value = parts.collect::<Vec<_>>().join(" ");

    Some((option.to_string(), value))
}

fn flush(
    config: &mut Config,
    host: Option<String>,
    entry: Entry,
    diagnostics: &Diagnostics,
) -> Result<()> {
    if entry.is_empty() {
        diagnostics.debug(|| match &host {
            Some(host) => format!("dropping Host '{host}' without options"),
            None => "no default options".to_string(),
        });
        return Ok(());
    }
    config.set(host.as_deref(), entry)
}
