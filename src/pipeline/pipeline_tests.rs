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

#[cfg(test)]
mod tests {
    use crate::config::{Config, PathsConfig};
    use crate::pipeline;
    use chrono::Utc;
    use serde_json::{json, Value};

    fn write_source(dir: &std::path::Path, records: &Value) {
        std::fs::create_dir_all(dir).unwrap();
        std::fs::write(
            dir.join("projects.json"),
            serde_json::to_string(records).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn test_full_run_writes_outputs_and_reports_count() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        let output_dir = dir.path().join("out");
        write_source(
            &data_dir,
            &json!([
                {"id": 1, "title": "My Cool App!", "shortDescription": "It works. It scales. It ships."},
                {"id": 2, "title": "Second", "featured": true, "technologies": ["Rust"]}
            ]),
        );

        let config = Config {
            paths: PathsConfig {
                data_dir,
                output_dir: output_dir.clone(),
            },
        };

        let report = pipeline::run(&config).unwrap();
        assert_eq!(report.projects_processed, 2);

        let processed: Value = serde_json::from_str(
            &std::fs::read_to_string(output_dir.join("processed_projects.json")).unwrap(),
        )
        .unwrap();
        let first = &processed.as_array().unwrap()[0];
        assert_eq!(first["slug"], "my-cool-app");
        assert_eq!(first["data_quality_score"], 25.0);
        assert_eq!(
            first["formatted_description"],
            "It works. It scales.\n\nIt ships."
        );

        let analytics: Value = serde_json::from_str(
            &std::fs::read_to_string(output_dir.join("project_analytics.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(analytics["total_projects"], 2);
        assert_eq!(analytics["insights"]["completion_rate"], 0.0);
        assert_eq!(analytics["featured_projects"].as_array().unwrap().len(), 1);

        let cards =
            std::fs::read_to_string(output_dir.join("snippets/project_cards.html")).unwrap();
        assert!(cards.contains("My Cool App!"));
        let featured =
            std::fs::read_to_string(output_dir.join("snippets/featured_projects.html")).unwrap();
        assert!(featured.contains("Second"));
    }

    #[test]
    fn test_run_fails_without_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            paths: PathsConfig {
                data_dir: dir.path().join("missing"),
                output_dir: dir.path().join("out"),
            },
        };

        let result = pipeline::run(&config);
        assert!(result.is_err());
        // Nothing was written
        assert!(!dir.path().join("out/processed_projects.json").exists());
    }

    #[test]
    fn test_transform_empty_input() {
        let (projects, analytics) = pipeline::transform(&[], Utc::now()).unwrap();

        assert!(projects.is_empty());
        assert_eq!(analytics.total_projects, 0);
        assert!(analytics.categories.is_empty());
        assert!(analytics.technologies.is_empty());
        assert!(analytics.status_distribution.is_empty());

        let insights = analytics.insights.as_ref().unwrap();
        assert_eq!(insights.completion_rate, 0.0);
        assert!(insights.most_used_technology.is_none());
        assert!(insights.most_common_category.is_none());
        assert!(insights.average_project_duration_days.is_none());
    }

    #[test]
    fn test_transform_rejects_record_without_title() {
        let records = vec![json!({"id": 1})];
        assert!(pipeline::transform(&records, Utc::now()).is_err());
    }

    #[test]
    fn test_content_hash_stable_across_runs() {
        let records = vec![json!({"id": 1, "title": "Stable"})];

        let (first_run, _) = pipeline::transform(&records, Utc::now()).unwrap();
        let (second_run, _) = pipeline::transform(&records, Utc::now()).unwrap();
        assert_eq!(first_run[0].content_hash, second_run[0].content_hash);
    }

    #[test]
    fn test_enriched_output_carries_original_fields() {
        let records = vec![json!({
            "id": 1,
            "title": "Keeps everything",
            "images": ["one.jpg"],
            "customMetadata": {"stars": 12}
        })];

        let (projects, _) = pipeline::transform(&records, Utc::now()).unwrap();
        let serialized = serde_json::to_value(&projects[0]).unwrap();

        assert_eq!(serialized["images"][0], "one.jpg");
        assert_eq!(serialized["customMetadata"]["stars"], 12);
        assert!(serialized["content_hash"].is_string());
        assert!(serialized["seo_metadata"]["reading_time"].is_u64());
    }
}
