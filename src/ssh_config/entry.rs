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

//! Option collection for a single configuration scope

use std::collections::BTreeMap;
use std::fmt;

use super::args::{validate_option_name, validate_option_value, EntryArgs};
use crate::error::{Result, SshConfigError};

/// The options of one scope (a `Host` block or the default scope), in the
/// order they were first set, tagged with the priority that decides where
/// the scope is written in the file
#[derive(Clone, Default)]
pub struct Entry {
    priority: i64,
    options: Vec<(String, String)>,
}

impl Entry {
    /// Create an empty entry with the given priority
    pub fn new(priority: i64) -> Self {
        Self {
            priority,
            options: Vec::new(),
        }
    }

    /// Create an entry and populate it from `args`
    ///
    /// With [`EntryArgs::Entry`] the resulting priority is the source's.
    pub fn from_args(priority: i64, args: impl Into<EntryArgs>) -> Result<Self> {
        let mut entry = Self::new(priority);
        entry.set(args)?;
        Ok(entry)
    }

    /// Value of `option`, if set
    pub fn get(&self, option: &str) -> Option<&str> {
        self.position(option)
            .map(|index| self.options[index].1.as_str())
    }

    /// Merge `args` into this entry.
    ///
    /// Absent values are never stored. Options applied before an invalid
    /// one are kept.
    pub fn set(&mut self, args: impl Into<EntryArgs>) -> Result<()> {
        match args.into() {
            EntryArgs::Empty => {}
            EntryArgs::Entry(other) => {
                for (name, value) in other.options {
                    self.insert(name, value)?;
                }
                self.priority = other.priority;
            }
            EntryArgs::Options(options) => {
                for (name, value) in options {
                    match value {
                        Some(value) if !value.is_empty() => self.insert(name, value)?,
                        _ => {}
                    }
                }
            }
            EntryArgs::Pair(Some(name), Some(value)) => self.insert(name, value)?,
            EntryArgs::Pair(_, _) => {}
        }
        Ok(())
    }

    /// Remove each named option; options that are not set are ignored
    pub fn remove<S: AsRef<str>>(&mut self, options: &[S]) {
        for option in options {
            if let Some(index) = self.position(option.as_ref()) {
                self.options.remove(index);
            }
        }
    }

    /// Remove a single option, failing if it is not set
    pub fn delete(&mut self, option: &str) -> Result<String> {
        match self.position(option) {
            Some(index) => Ok(self.options.remove(index).1),
            None => Err(SshConfigError::option_not_found(option)),
        }
    }

    pub fn contains(&self, option: &str) -> bool {
        self.position(option).is_some()
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Overwrite the priority; `None` leaves it unchanged
    pub fn set_priority(&mut self, priority: Option<i64>) {
        if let Some(priority) = priority {
            self.priority = priority;
        }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Options in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Snapshot of all options
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.options.iter().cloned().collect()
    }

    fn position(&self, option: &str) -> Option<usize> {
        self.options.iter().position(|(name, _)| name == option)
    }

    /// Copy every option of `other` over this entry and take its priority.
    /// Both sides already hold validated options.
    pub(crate) fn overlay(&mut self, other: &Entry) {
        for (name, value) in &other.options {
            match self.position(name) {
                Some(index) => self.options[index].1.clone_from(value),
                None => self.options.push((name.clone(), value.clone())),
            }
        }
        self.priority = other.priority;
    }

    fn insert(&mut self, name: String, value: String) -> Result<()> {
        validate_option_name(&name)?;
        validate_option_value(&name, &value)?;
        match self.position(&name) {
            Some(index) => self.options[index].1 = value,
            None => self.options.push((name, value)),
        }
        Ok(())
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.to_map() == other.to_map()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.options.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{name} {value}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry({}", self.priority)?;
        for (name, value) in &self.options {
            write!(f, ", {name} = {value:?}")?;
        }
        write!(f, ")")
    }
}
