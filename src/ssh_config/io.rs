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

//! Reading configuration text from, and writing it to, files and streams

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SshConfigError};

/// Where configuration text is read from
pub enum Source<'a> {
    /// A file on disk
    Path(PathBuf),
    /// An already open stream, read to the end
    Reader(&'a mut dyn Read),
}

/// Where configuration text is written to
pub enum Destination<'a> {
    /// A file on disk, created or truncated
    Path(PathBuf),
    /// An already open stream
    Writer(&'a mut dyn Write),
}

impl Source<'_> {
    /// Read the whole source as UTF-8 text
    pub fn read_to_string(self) -> Result<String> {
        match self {
            Source::Path(path) => {
                check_readable(&path)?;
                fs::read_to_string(&path).map_err(|e| SshConfigError::io(path, e))
            }
            Source::Reader(reader) => {
                let mut content = String::new();
                reader
                    .read_to_string(&mut content)
                    .map_err(|e| SshConfigError::io("<stream>", e))?;
                Ok(content)
            }
        }
    }
}

impl Destination<'_> {
    /// Write `content`, replacing anything previously stored at the destination
    pub fn write_all(self, content: &str) -> Result<()> {
        match self {
            Destination::Path(path) => {
                check_writable(&path)?;
                fs::write(&path, content).map_err(|e| SshConfigError::io(path, e))
            }
            Destination::Writer(writer) => {
                writer
                    .write_all(content.as_bytes())
                    .and_then(|()| writer.flush())
                    .map_err(|e| SshConfigError::io("<stream>", e))
            }
        }
    }
}

pub(crate) fn check_readable(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(SshConfigError::unsupported("empty path"));
    }
    match fs::metadata(path) {
        Ok(meta) if !meta.is_file() => Err(SshConfigError::unsupported(format!(
            "'{}' is not a regular file",
            path.display()
        ))),
        // Missing files surface as I/O errors on read
        _ => Ok(()),
    }
}

pub(crate) fn check_writable(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(SshConfigError::unsupported("empty path"));
    }
    if path.is_dir() {
        return Err(SshConfigError::unsupported(format!(
            "'{}' is a directory",
            path.display()
        )));
    }
    Ok(())
}

impl From<&str> for Source<'_> {
    fn from(path: &str) -> Self {
        Source::Path(PathBuf::from(path))
    }
}

impl From<&Path> for Source<'_> {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for Source<'_> {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

impl From<&PathBuf> for Source<'_> {
    fn from(path: &PathBuf) -> Self {
        Source::Path(path.clone())
    }
}

impl<'a> From<&'a mut dyn Read> for Source<'a> {
    fn from(reader: &'a mut dyn Read) -> Self {
        Source::Reader(reader)
    }
}

impl From<&str> for Destination<'_> {
    fn from(path: &str) -> Self {
        Destination::Path(PathBuf::from(path))
    }
}

impl From<&Path> for Destination<'_> {
    fn from(path: &Path) -> Self {
        Destination::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for Destination<'_> {
    fn from(path: PathBuf) -> Self {
        Destination::Path(path)
    }
}

impl From<&PathBuf> for Destination<'_> {
    fn from(path: &PathBuf) -> Self {
        Destination::Path(path.clone())
    }
}

impl<'a> From<&'a mut dyn Write> for Destination<'a> {
    fn from(writer: &'a mut dyn Write) -> Self {
        Destination::Writer(writer)
    }
}
