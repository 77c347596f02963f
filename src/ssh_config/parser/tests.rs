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

//! Tests for SSH configuration parser and formatter

use super::core::*;
use super::formatter::*;
use crate::ssh_config::{Config, EntryArgs, MemorySink};
use std::sync::Arc;

#[test]
fn test_split_line() {
    assert_eq!(
        split_line("  User   root  "),
        Some(("User".to_string(), "root".to_string()))
    );
    assert_eq!(
        split_line("\tProxyCommand  ssh   -W %h:%p   bastion"),
        Some(("ProxyCommand".to_string(), "ssh -W %h:%p bastion".to_string()))
    );
    assert_eq!(
        split_line("Port 22 # default port"),
        Some(("Port".to_string(), "22".to_string()))
    );
    assert_eq!(
        split_line("ForwardAgent"),
        Some(("ForwardAgent".to_string(), String::new()))
    );
    assert_eq!(split_line(""), None);
    assert_eq!(split_line("   "), None);
    assert_eq!(split_line("# a comment"), None);
    assert_eq!(split_line("    # indented comment"), None);
}

#[test]
fn test_parse_scenario() {
    let content = r#"User root
Host foo
    Port 22
Host bar
    Port 2222
"#;
    let config = parse(content).unwrap();

    let default = config.default_entry().unwrap();
    assert_eq!(default.get("User"), Some("root"));
    assert_eq!(default.priority(), 0);

    let foo = config.get(Some("foo")).unwrap();
    assert_eq!(foo.get("Port"), Some("22"));
    assert_eq!(foo.priority(), 1);

    let bar = config.get(Some("bar")).unwrap();
    assert_eq!(bar.get("Port"), Some("2222"));
    assert_eq!(bar.priority(), 2);

    let mut hosts = config.hosts();
    hosts.sort();
    assert_eq!(hosts, vec!["bar", "foo"]);
    assert_eq!(config.get_option(Some("foo"), "Port"), Some("22"));
}

#[test]
fn test_parse_without_host_lines() {
    let config = parse("User root\nPort 2222\n").unwrap();
    assert_eq!(config.len(), 1);
    assert!(config.hosts().is_empty());
    assert_eq!(config.get_option(None, "Port"), Some("2222"));
}

#[test]
fn test_parse_empty_content() {
    let config = parse("").unwrap();
    assert!(config.is_empty());
    assert_eq!(config.to_string(), "");

    let config = parse("# only comments\n\n   \n").unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_parse_drops_host_without_options() {
    let content = r#"
Host first
Host second
    User admin
"#;
    let config = parse(content).unwrap();
    assert!(!config.contains(Some("first")));
    assert!(config.contains(Some("second")));
    assert_eq!(config.get(Some("second")).unwrap().priority(), 2);
}

#[test]
fn test_parse_comments_and_whitespace() {
    let content = r#"
# Global settings
   User    deploy   # trailing comment

Host   web*.example.com   *.test.com
    # Another comment
    IdentityFile    ~/.ssh/id_web

    Port 2222
"#;
    let config = parse(content).unwrap();
    assert_eq!(config.get_option(None, "User"), Some("deploy"));

    // The host pattern is kept as one opaque string
    let entry = config.get(Some("web*.example.com *.test.com")).unwrap();
    assert_eq!(entry.get("IdentityFile"), Some("~/.ssh/id_web"));
    assert_eq!(entry.get("Port"), Some("2222"));
}

#[test]
fn test_parse_host_keyword_is_case_sensitive() {
    // Only the exact keyword opens a scope
    let config = parse("host foo\nPort 22\n").unwrap();
    assert!(config.hosts().is_empty());
    assert_eq!(config.get_option(None, "host"), Some("foo"));
    assert_eq!(config.get_option(None, "Port"), Some("22"));
}

#[test]
fn test_parse_repeated_host_merges_and_moves_scope() {
    let content = r#"
Host a
    User one
Host b
    User two
Host a
    Port 2200
"#;
    let config = parse(content).unwrap();
    let a = config.get(Some("a")).unwrap();
    assert_eq!(a.get("User"), Some("one"));
    assert_eq!(a.get("Port"), Some("2200"));
    assert_eq!(a.priority(), 3);
    assert_eq!(
        config.to_string(),
        "Host b\n    User two\nHost a\n    User one\n    Port 2200"
    );
}

#[test]
fn test_parse_value_is_never_converted() {
    let config = parse("Host x\n    Port 0022\n    Compression YES\n").unwrap();
    assert_eq!(config.get_option(Some("x"), "Port"), Some("0022"));
    assert_eq!(config.get_option(Some("x"), "Compression"), Some("YES"));
}

#[test]
fn test_parse_reports_diagnostics() {
    let sink = Arc::new(MemorySink::new());
    let diagnostics = crate::ssh_config::Diagnostics::new(sink.clone());
    parse_with_diagnostics("User root\nHost foo\n    Port 22\n", diagnostics).unwrap();

    let messages = sink.messages();
    assert!(messages.iter().any(|m| m.contains("User = 'root'")));
    assert!(messages.iter().any(|m| m.contains("Host 'foo'")));
}

#[test]
fn test_format_scenario() {
    let mut config = Config::new();
    config
        .set(None, EntryArgs::options([("User", "root")]))
        .unwrap();
    config
        .set(Some("foo"), EntryArgs::options([("Port", "22")]))
        .unwrap();
    assert_eq!(format(&config), "User root\nHost foo\n    Port 22");
}

#[test]
fn test_format_default_first_whatever_its_priority() {
    let mut config = Config::new();
    config.set(Some("foo"), ("Port", "22")).unwrap();
    config.set(None, ("User", "root")).unwrap();
    assert_eq!(config.default_entry().unwrap().priority(), 1);
    assert_eq!(format(&config), "User root\nHost foo\n    Port 22");
}

#[test]
fn test_format_skips_entries_emptied_by_removal() {
    let mut config = Config::new();
    config.set(Some("foo"), ("Port", "22")).unwrap();
    config.set(Some("bar"), ("Port", "23")).unwrap();
    config.remove(Some("foo"), &["Port"]).unwrap();
    assert!(config.contains(Some("foo")));
    assert_eq!(format(&config), "Host bar\n    Port 23");
}

#[test]
fn test_format_parse_format_is_stable() {
    let content = r#"
Compression yes
Host *.internal
    ProxyJump bastion
    User ops
Host db1 db2
    HostName 10.0.0.%h
    Port 5432
Host bastion
    HostName bastion.example.com
"#;
    let first = format(&parse(content).unwrap());
    let second = format(&parse(&first).unwrap());
    assert_eq!(first, second);
    assert_eq!(parse(&first).unwrap(), parse(&second).unwrap());
}

#[test]
fn test_format_uses_constants() {
    assert_eq!(HOST_KEYWORD, "Host");
    assert_eq!(INDENT.len(), 4);
}
