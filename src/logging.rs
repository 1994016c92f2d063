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
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt::Layer, prelude::*, registry::Registry, EnvFilter};

use crate::config::Config;

/// Initialize logging for the pipeline with console output and a daily
/// rotating file sink under <output_dir>/logs
///
/// The returned guard owns the background log writer; it must be held
/// until process exit so pending lines are flushed.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    let log_dir = config.paths.output_dir.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "pipeline.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // Set up environment filter with sensible defaults
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("octofolio=info"));

    // File layer with JSON formatting for structured logs
    let file_layer = Layer::new()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .json();

    // Console layer mirrors the file sink in human-readable form
    let console_layer = Layer::new()
        .with_writer(std::io::stderr)
        .with_target(false);

    Registry::default()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(guard)
}
