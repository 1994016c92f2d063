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

use serde_json::Value;
use std::path::Path;
use tracing::info;

use crate::error::PipelineError;

/// Read the raw project records from a JSON array file
///
/// Records are kept as raw values here; typing happens in enrichment so
/// the content hash can cover the record exactly as stored.
pub fn read_records(path: &Path) -> Result<Vec<Value>, PipelineError> {
    info!(path = %path.display(), "Extracting project records");

    if !path.exists() {
        return Err(PipelineError::MissingSource(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let records: Vec<Value> =
        serde_json::from_str(&content).map_err(|source| PipelineError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(count = records.len(), "Extracted project records");
    Ok(records)
}
