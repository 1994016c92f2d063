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

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use std::path::PathBuf;
use tracing::error;

use crate::cli::Commands;
use crate::config::Config;
use crate::formatting;
use crate::pipeline;

pub fn execute(config: &Config, command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            data_dir,
            output_dir,
        } => run_pipeline(config, data_dir, output_dir),
        Commands::Stats { data_dir, format } => show_stats(config, data_dir, &format),
    }
}

/// Run the full pipeline and report the outcome on stdout
fn run_pipeline(
    config: &Config,
    data_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let config = with_overrides(config, data_dir, output_dir);

    match pipeline::run(&config) {
        Ok(report) => {
            println!(
                "{} Processed {} projects.",
                "✅ Pipeline completed successfully!".green().bold(),
                report.projects_processed
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "ETL pipeline failed");
            println!("{} {}", "❌ Pipeline failed:".red().bold(), e);
            Err(e.into())
        }
    }
}

/// Compute analytics in memory and print them without touching outputs
fn show_stats(config: &Config, data_dir: Option<PathBuf>, format: &str) -> Result<()> {
    let config = with_overrides(config, data_dir, None);

    let raw_records = pipeline::extract::read_records(&config.raw_data_path())?;
    let (_, analytics) = pipeline::transform(&raw_records, Utc::now())
        .map_err(|e| anyhow::anyhow!("failed to transform records: {}", e))?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&analytics)?),
        _ => println!("{}", formatting::format_analytics(&analytics)),
    }

    Ok(())
}

fn with_overrides(
    config: &Config,
    data_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Config {
    let mut config = config.clone();
    if let Some(dir) = data_dir {
        config.paths.data_dir = dir;
    }
    if let Some(dir) = output_dir {
        config.paths.output_dir = dir;
    }
    config
}
