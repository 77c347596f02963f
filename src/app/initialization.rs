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

use anyhow::{Context, Result};
use sshconf::{
    cli::Cli,
    utils::{default_user_config, expand_tilde},
    Config, Source, TracingSink,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct AppContext {
    /// File that edits are written back to
    pub path: PathBuf,
    pub config: Config,
}

impl AppContext {
    pub async fn initialize(cli: &Cli) -> Result<Self> {
        let path = resolve_config_path(cli)?;

        let config = if cli.system && !cli.command.is_mutation() {
            load_layered(&path, &expand_tilde(&cli.system_file))?
        } else {
            load_user_config(&path).await?
        };

        Ok(Self {
            path,
            config: config.with_sink(Arc::new(TracingSink)),
        })
    }
}

fn resolve_config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.file {
        Some(file) => Ok(expand_tilde(file)),
        None => default_user_config().context("Unable to determine home directory"),
    }
}

/// The user file, or an empty config when it does not exist yet.
/// Any other failure to check the path is an error, so a later save never
/// replaces a file that could not be read.
async fn load_user_config(path: &Path) -> Result<Config> {
    let exists = tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to check SSH config file {}", path.display()))?;

    if exists {
        Config::load_from_file(path).await
    } else {
        tracing::debug!(
            "SSH config file not found at {}, starting empty",
            path.display()
        );
        Ok(Config::new())
    }
}

/// User options on top of the system-wide ones; missing files are skipped
fn load_layered(user: &Path, system: &Path) -> Result<Config> {
    let sources: Vec<Source> = [user, system]
        .into_iter()
        .filter(|path| path.is_file())
        .map(Source::from)
        .collect();

    tracing::debug!("Loading {} configuration file(s)", sources.len());
    Config::open(sources).with_context(|| {
        format!(
            "Failed to load SSH config from {} and {}",
            user.display(),
            system.display()
        )
    })
}
