// Copyright 2026 Muvon Un Limited
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

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "octofolio")]
#[command(version, author = "Muvon Un Limited <opensource@muvon.io>")]
#[command(about = "Portfolio content ETL pipeline generating derived data and HTML snippets", long_about = None)]
pub struct Cli {
    /// Path to an octofolio.toml configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: extract, enrich, aggregate and write outputs
    Run {
        /// Directory containing projects.json (overrides config)
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Directory to write processed data and HTML snippets (overrides config)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Compute analytics in memory and print a summary without writing files
    Stats {
        /// Directory containing projects.json (overrides config)
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}
