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

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable project identifier, numeric or textual in the source data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectId::Number(n) => write!(f, "{}", n),
            ProjectId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Long-form content sections of a project record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    /// Content keys this pipeline does not interpret, carried through
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One raw portfolio project as stored in projects.json
///
/// Only `id` and `title` are required. Every other field is optional in
/// the source data and absent fields stay absent on re-serialization,
/// so enriched output reproduces the original record byte for byte
/// modulo the derived additions. Fields this pipeline does not model
/// (e.g. `images`) pass through `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ProjectContent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectRecord {
    pub fn short_description(&self) -> &str {
        self.short_description.as_deref().unwrap_or("")
    }

    pub fn technologies(&self) -> &[String] {
        self.technologies.as_deref().unwrap_or(&[])
    }

    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

/// SEO fields derived from a record for page metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoMetadata {
    /// First 160 characters of the short description, hard truncated
    pub meta_description: String,
    /// Up to five technologies joined by ", "
    pub keywords: String,
    /// Estimated reading time of the overview in minutes, within [1, 10]
    pub reading_time: u32,
}

/// A project record plus all derived fields, created once per run
///
/// Never mutated after creation. The embedded record is a copy of the
/// input; the original raw value is left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedProject {
    #[serde(flatten)]
    pub record: ProjectRecord,
    /// Whole days between start and end, present iff both dates are in
    /// the record; 0 when either fails to parse, negative when reversed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i64>,
    /// Hex fingerprint of the pre-enrichment record, stable across runs
    pub content_hash: String,
    pub seo_metadata: SeoMetadata,
    pub data_quality_score: f64,
    pub formatted_description: String,
}

impl EnrichedProject {
    /// URL-safe slug, always present after enrichment (empty only when
    /// the record's title is empty)
    #[allow(dead_code)] // exercised by tests; kept as the public accessor
    pub fn slug(&self) -> &str {
        self.record.slug.as_deref().unwrap_or("")
    }
}

/// Lightweight entry in the recent-projects subset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentProject {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
}

/// Lightweight entry in the featured-projects subset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedProject {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    /// Truncated to the first three technologies
    pub technologies: Vec<String>,
}
