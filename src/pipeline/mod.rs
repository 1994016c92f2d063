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

pub mod analytics;
pub mod enrich;
pub mod extract;
pub mod fields;
pub mod insights;
pub mod load;
pub mod render;
pub mod types;

mod pipeline_tests;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::error::PipelineError;
use analytics::Analytics;
use types::EnrichedProject;

/// Outcome of a successful pipeline run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub projects_processed: usize,
    pub timestamp: DateTime<Utc>,
}

/// Run the complete pipeline: extract, transform, load
///
/// Extraction and load failures abort the run and propagate to the
/// caller; outputs already written stay on disk.
pub fn run(config: &Config) -> Result<PipelineReport, PipelineError> {
    info!("Starting ETL pipeline");

    let source_path = config.raw_data_path();
    let raw_records = extract::read_records(&source_path)?;

    let (projects, analytics) =
        transform(&raw_records, Utc::now()).map_err(|source| PipelineError::Parse {
            path: source_path,
            source,
        })?;

    load::write_outputs(&config.paths.output_dir, &projects, &analytics)?;

    info!(
        count = projects.len(),
        "ETL pipeline completed successfully"
    );
    Ok(PipelineReport {
        projects_processed: projects.len(),
        timestamp: Utc::now(),
    })
}

/// Transform stage: enrich every record in source order and fold the
/// results into a sealed aggregate
///
/// Shared by the full run and the in-memory stats command. Source order
/// is preserved so the recent and featured subsets stay deterministic.
pub fn transform(
    raw_records: &[Value],
    run_start: DateTime<Utc>,
) -> Result<(Vec<EnrichedProject>, Analytics), serde_json::Error> {
    info!(count = raw_records.len(), "Transforming project records");

    let mut analytics = Analytics::new(run_start);
    let mut projects = Vec::with_capacity(raw_records.len());
    for raw in raw_records {
        let project = enrich::enrich_project(raw)?;
        analytics.record(&project);
        projects.push(project);
    }
    let analytics = analytics.seal();

    info!(count = projects.len(), "Transformed project records");
    Ok((projects, analytics))
}
