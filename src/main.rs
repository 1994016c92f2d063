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
use clap::Parser;

mod cli;
mod commands;
mod config;
mod constants;
mod error;
mod formatting;
mod logging;
mod pipeline;

use cli::Cli;
use config::Config;

fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // Initialize logging with a file sink next to the pipeline outputs.
    // The guard must stay alive for the whole run so buffered lines are
    // flushed when the process exits.
    let _guard = logging::init(&config)?;

    // Execute the command
    if let Err(e) = commands::execute(&config, cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
