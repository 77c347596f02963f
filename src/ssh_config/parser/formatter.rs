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

//! SSH configuration text output

use crate::ssh_config::Config;

/// Keyword opening a host scope
pub const HOST_KEYWORD: &str = "Host";

/// Indentation of option lines inside a `Host` block
pub const INDENT: &str = "    ";

/// Render `config` as `ssh_config` text.
///
/// Default options come first as bare lines, since anything written after a
/// `Host` line belongs to that host. Named scopes follow in ascending
/// priority. Entries left without options are skipped. Lines are
/// newline-joined without a trailing newline.
pub fn format(config: &Config) -> String {
    let mut blocks = Vec::new();

    for (key, entry) in config.entries() {
        if entry.is_empty() {
            continue;
        }
        match key.host() {
            None => blocks.push(entry.to_string()),
            Some(pattern) => {
                let mut block = format!("{HOST_KEYWORD} {pattern}");
                for (name, value) in entry.iter() {
                    block.push('\n');
                    block.push_str(INDENT);
                    block.push_str(name);
                    block.push(' ');
                    block.push_str(value);
                }
                blocks.push(block);
            }
        }
    }

    blocks.join("\n")
}
