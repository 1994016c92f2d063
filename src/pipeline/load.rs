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

use std::path::Path;
use tracing::info;

use crate::error::PipelineError;
use crate::pipeline::analytics::Analytics;
use crate::pipeline::render;
use crate::pipeline::types::EnrichedProject;

/// Persist all pipeline outputs under the output directory
///
/// Writes the enriched project array and the analytics object as
/// indented JSON (non-ASCII characters stay literal), then the two HTML
/// snippet files. Directories are created on demand. Outputs written
/// before a failure are left in place; there is no rollback.
pub fn write_outputs(
    output_dir: &Path,
    projects: &[EnrichedProject],
    analytics: &Analytics,
) -> Result<(), PipelineError> {
    info!(output_dir = %output_dir.display(), "Loading processed data");
    std::fs::create_dir_all(output_dir)?;

    let processed = serde_json::to_string_pretty(projects).map_err(std::io::Error::other)?;
    std::fs::write(output_dir.join("processed_projects.json"), processed)?;

    let analytics_json = serde_json::to_string_pretty(analytics).map_err(std::io::Error::other)?;
    std::fs::write(output_dir.join("project_analytics.json"), analytics_json)?;

    write_html_snippets(output_dir, projects)?;

    info!(count = projects.len(), "Processed data loaded");
    Ok(())
}

/// Write the HTML fragments used for dynamic content insertion
fn write_html_snippets(
    output_dir: &Path,
    projects: &[EnrichedProject],
) -> Result<(), PipelineError> {
    let snippets_dir = output_dir.join("snippets");
    std::fs::create_dir_all(&snippets_dir)?;

    let cards = render::render_project_cards(projects);
    std::fs::write(snippets_dir.join("project_cards.html"), cards)?;

    let featured = render::render_featured_section(projects);
    std::fs::write(snippets_dir.join("featured_projects.html"), featured)?;

    info!(snippets_dir = %snippets_dir.display(), "Generated HTML snippets");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::enrich::enrich_project;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_writes_all_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("out");

        let raw = json!({"id": 1, "title": "Solo", "featured": true});
        let project = enrich_project(&raw).unwrap();
        let mut analytics = Analytics::new(Utc::now());
        analytics.record(&project);
        let analytics = analytics.seal();

        write_outputs(&output_dir, &[project], &analytics).unwrap();

        assert!(output_dir.join("processed_projects.json").exists());
        assert!(output_dir.join("project_analytics.json").exists());
        assert!(output_dir.join("snippets/project_cards.html").exists());
        assert!(output_dir.join("snippets/featured_projects.html").exists());
    }

    #[test]
    fn test_json_output_is_indented_and_literal() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().to_path_buf();

        let raw = json!({"id": 1, "title": "Café ☕"});
        let project = enrich_project(&raw).unwrap();
        let analytics = Analytics::new(Utc::now()).seal();

        write_outputs(&output_dir, &[project], &analytics).unwrap();

        let written =
            std::fs::read_to_string(output_dir.join("processed_projects.json")).unwrap();
        // Stable two-space indentation, non-ASCII kept literal
        assert!(written.contains("\n  {"));
        assert!(written.contains("Café ☕"));
        assert!(!written.contains("\\u"));
    }
}
