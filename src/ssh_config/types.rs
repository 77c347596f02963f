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

//! Core data structures for SSH configuration scopes

use std::fmt;

/// Key under which an [`Entry`](super::Entry) is stored in a
/// [`Config`](super::Config)
///
/// Options that appear before the first `Host` line belong to the
/// `Default` scope. Every `Host` line opens a `Named` scope keyed by the raw
/// pattern text, so a host literally called `default` is
/// `Named("default")` and never shadows the default scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScopeKey {
    /// Options applying to hosts no `Host` block matched
    Default,
    /// Options under a `Host <pattern>` line
    Named(String),
}

impl ScopeKey {
    /// Build a key from an optional host pattern (`None` is the default scope)
    pub fn from_host(host: Option<&str>) -> Self {
        match host {
            Some(pattern) => Self::Named(pattern.to_string()),
            None => Self::Default,
        }
    }

    /// The host pattern, or `None` for the default scope
    pub fn host(&self) -> Option<&str> {
        match self {
            Self::Default => None,
            Self::Named(pattern) => Some(pattern),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl From<Option<&str>> for ScopeKey {
    fn from(host: Option<&str>) -> Self {
        Self::from_host(host)
    }
}

impl From<&str> for ScopeKey {
    fn from(host: &str) -> Self {
        Self::Named(host.to_string())
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "<default>"),
            Self::Named(pattern) => write!(f, "Host {pattern}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_never_collides_with_named_default() {
        let default = ScopeKey::from_host(None);
        let named = ScopeKey::from_host(Some("default"));
        assert_ne!(default, named);
        assert!(default.is_default());
        assert!(!named.is_default());
        assert_eq!(named.host(), Some("default"));
        assert_eq!(default.host(), None);
    }

    #[test]
    fn test_default_sorts_first() {
        let mut keys = vec![
            ScopeKey::from("web"),
            ScopeKey::Default,
            ScopeKey::from("db"),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![ScopeKey::Default, ScopeKey::from("db"), ScopeKey::from("web")]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ScopeKey::Default.to_string(), "<default>");
        assert_eq!(ScopeKey::from("*.example.com").to_string(), "Host *.example.com");
    }
}
