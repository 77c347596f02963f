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

//! Command-line interface definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "sshconf",
    version,
    about = "Inspect and edit OpenSSH client configuration files",
    long_about = "sshconf reads an ssh_config file into host-scoped option sets,\n\
        applies edits and writes the file back.\n\n\
        Comments and spacing are not preserved when a file is rewritten.",
    after_help = "EXAMPLES:\n  \
        sshconf show                          # Print ~/.ssh/config normalized\n  \
        sshconf hosts                         # List Host patterns\n  \
        sshconf get -H web1 Port              # Print one option of a host\n  \
        sshconf get -H web1 --full            # Print a host with default options\n  \
        sshconf set -H web1 Port 2222         # Set an option and save\n  \
        sshconf set User=deploy               # Set a default-scope option\n  \
        sshconf remove -H web1                # Drop a whole Host block\n  \
        sshconf merge ./team_config --update  # Merge another file in place"
)]
pub struct Cli {
    /// SSH configuration file to operate on
    ///
    /// Defaults to ~/.ssh/config.
    #[arg(short = 'F', long = "file", value_name = "CONFIG")]
    pub file: Option<PathBuf>,

    /// Also read the system-wide configuration underneath the user file
    ///
    /// Options from the user file take precedence. Only affects read
    /// commands; edits are always written to the user file alone.
    #[arg(long)]
    pub system: bool,

    /// Location of the system-wide configuration
    #[arg(long, value_name = "PATH", default_value = "/etc/ssh/ssh_config")]
    pub system_file: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the whole configuration in normalized form
    Show,

    /// List Host patterns
    Hosts,

    /// Print the options of a scope, or a single option
    Get {
        /// Host pattern (default scope when omitted)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Option to print
        option: Option<String>,

        /// Fall back to default-scope options the host does not set
        #[arg(long)]
        full: bool,
    },

    /// Set options, moving the scope to the end of the file
    Set {
        /// Host pattern (default scope when omitted)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// `Name Value...` or `Name=Value`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Set options, keeping the scope where it is
    Update {
        /// Host pattern (default scope when omitted)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// `Name Value...` or `Name=Value`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Remove options from a scope, or the whole scope when none are given
    Remove {
        /// Host pattern (default scope when omitted)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Options to remove
        options: Vec<String>,
    },

    /// Merge another configuration file into this one
    Merge {
        /// File to merge in
        other: PathBuf,

        /// Keep the position of hosts that already exist
        #[arg(long)]
        update: bool,
    },
}

impl Commands {
    /// Whether the command writes the configuration back
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::Set { .. } | Self::Update { .. } | Self::Remove { .. } | Self::Merge { .. }
        )
    }
}
