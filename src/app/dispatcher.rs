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
    cli::{Cli, Commands},
    Config, EntryArgs,
};

use super::initialization::AppContext;

pub async fn dispatch_command(cli: &Cli, mut ctx: AppContext) -> Result<()> {
    match &cli.command {
        Commands::Show => {
            let text = ctx.config.to_string();
            if !text.is_empty() {
                println!("{text}");
            }
            Ok(())
        }
        Commands::Hosts => {
            for host in ctx.config.hosts() {
                println!("{host}");
            }
            Ok(())
        }
        Commands::Get { host, option, full } => {
            let text = lookup(&ctx.config, host.as_deref(), option.as_deref(), *full)?;
            println!("{text}");
            Ok(())
        }
        Commands::Set { host, args } => {
            let args = EntryArgs::from_tokens(args)?;
            if args == EntryArgs::Empty {
                tracing::info!("Nothing to set, leaving {} untouched", ctx.path.display());
                return Ok(());
            }
            ctx.config.set(host.as_deref(), args)?;
            save(&ctx).await
        }
        Commands::Update { host, args } => {
            let args = EntryArgs::from_tokens(args)?;
            if args == EntryArgs::Empty {
                tracing::info!("Nothing to update, leaving {} untouched", ctx.path.display());
                return Ok(());
            }
            ctx.config.update(host.as_deref(), args)?;
            save(&ctx).await
        }
        Commands::Remove { host, options } => {
            ctx.config
                .remove(host.as_deref(), options)
                .with_context(|| format!("Cannot remove from {}", scope_label(host.as_deref())))?;
            save(&ctx).await
        }
        Commands::Merge { other, update } => {
            ctx.config
                .load(other.as_path(), *update)
                .with_context(|| format!("Failed to merge {}", other.display()))?;
            save(&ctx).await
        }
    }
}

/// Text printed by `get`: one option value, or every option of the scope.
/// With `full`, default-scope options fill in what the host does not set.
fn lookup(
    config: &Config,
    host: Option<&str>,
    option: Option<&str>,
    full: bool,
) -> Result<String> {
    let entry = if full {
        config.get_full(host)
    } else {
        config.get(host).cloned()
    }
    .with_context(|| format!("No entry for {}", scope_label(host)))?;

    match option {
        Some(option) => entry
            .get(option)
            .map(str::to_string)
            .with_context(|| format!("{option} is not set for {}", scope_label(host))),
        None => Ok(entry.to_string()),
    }
}

fn scope_label(host: Option<&str>) -> String {
    match host {
        Some(host) => format!("Host {host}"),
        None => "the default scope".to_string(),
    }
}

async fn save(ctx: &AppContext) -> Result<()> {
    ctx.config.save_to_file(&ctx.path).await?;
    tracing::info!("Saved {} entries to {}", ctx.config.len(), ctx.path.display());
    Ok(())
}
