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

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a pipeline run
///
/// Per-record problems (unparseable dates, missing optional fields) are
/// not errors; they degrade to defaults inside enrichment. Only source
/// extraction and output loading can fail the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The raw data file does not exist
    #[error("data file not found: {0}")]
    MissingSource(PathBuf),

    /// The source file is not a valid JSON array of records
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading the source or writing an output file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
