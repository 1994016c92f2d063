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

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

use crate::constants::{
    META_DESCRIPTION_MAX_CHARS, READING_CHARS_PER_MINUTE, READING_TIME_MAX, READING_TIME_MIN,
    SEO_KEYWORD_LIMIT,
};
use crate::pipeline::fields;
use crate::pipeline::types::{EnrichedProject, ProjectRecord, SeoMetadata};

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid slug pattern"));
static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("valid separator pattern"));

/// Fields contributing to the data quality score, as dot paths into the
/// raw record, with their weights. Weights sum to exactly 100.
const QUALITY_CHECKS: [(&str, f64); 9] = [
    ("title", 10.0),
    ("shortDescription", 15.0),
    ("technologies", 10.0),
    ("content.overview", 20.0),
    ("content.challenge", 10.0),
    ("content.solution", 15.0),
    ("startDate", 5.0),
    ("endDate", 5.0),
    ("images", 10.0),
];

/// Enrich one raw project record with all derived fields
///
/// The raw value is read, never mutated. Fails only when the record does
/// not have the required shape (missing id or title); per-field problems
/// such as unparseable dates degrade to defaults instead.
pub fn enrich_project(raw: &Value) -> Result<EnrichedProject, serde_json::Error> {
    let mut record: ProjectRecord = serde_json::from_value(raw.clone())?;

    if record.slug.is_none() {
        record.slug = Some(slugify(&record.title));
    }

    let duration_days = match (record.start_date.as_deref(), record.end_date.as_deref()) {
        (Some(start), Some(end)) => Some(duration_days(start, end)),
        _ => None,
    };

    let content_hash = content_hash(raw);
    let seo_metadata = seo_metadata(&record, raw);
    let data_quality_score = data_quality_score(raw);
    let formatted_description = format_description(record.short_description());

    Ok(EnrichedProject {
        record,
        duration_days,
        content_hash,
        seo_metadata,
        data_quality_score,
        formatted_description,
    })
}

/// Derive a URL-friendly slug from a title
///
/// Lowercases, strips everything that is not a word character,
/// whitespace or hyphen, collapses separator runs into single hyphens
/// and trims leading/trailing hyphens. Idempotent over valid slugs;
/// an empty title yields an empty slug.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(lowered.trim(), "");
    let collapsed = SEPARATOR_RUNS.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// Parse an ISO-8601 instant, accepting a trailing Z as UTC offset
///
/// Bare dates and naive date-times are read as UTC, matching how the
/// source data has historically been written.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(parsed.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Whole days between two instants, truncated toward zero
///
/// Negative when the range is reversed; a reversed range is kept as-is
/// so bad data stays visible downstream. Any parse failure degrades
/// to 0 instead of propagating.
fn duration_days(start: &str, end: &str) -> i64 {
    match (parse_instant(start), parse_instant(end)) {
        (Some(start), Some(end)) => (end - start).num_days(),
        _ => 0,
    }
}

/// Fingerprint of the original record for change detection
///
/// serde_json's default object representation keeps keys sorted, so the
/// compact serialization is canonical: identical field values hash the
/// same regardless of key order in the source file.
pub fn content_hash(raw: &Value) -> String {
    let canonical = raw.to_string();
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

fn seo_metadata(record: &ProjectRecord, raw: &Value) -> SeoMetadata {
    let meta_description =
        truncate_chars(record.short_description(), META_DESCRIPTION_MAX_CHARS);

    let keywords = record
        .technologies()
        .iter()
        .take(SEO_KEYWORD_LIMIT)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    let overview_chars = fields::lookup(raw, "content.overview")
        .and_then(Value::as_str)
        .map(|s| s.chars().count())
        .unwrap_or(0);
    let reading_time =
        ((overview_chars / READING_CHARS_PER_MINUTE) as u32).clamp(READING_TIME_MIN, READING_TIME_MAX);

    SeoMetadata {
        meta_description,
        keywords,
        reading_time,
    }
}

/// Score completeness of a record in [0, 100]
///
/// Each tracked field adds its weight when it resolves to a truthy
/// value in the raw record. The cap is a safety bound; the weights
/// already sum to 100.
fn data_quality_score(raw: &Value) -> f64 {
    let mut score = 0.0;
    for (path, weight) in QUALITY_CHECKS {
        if fields::lookup(raw, path).is_some_and(fields::is_truthy) {
            score += weight;
        }
    }
    score.min(100.0)
}

/// Insert a paragraph break before the final sentence
///
/// Splits on the literal ". " separator. With two or more sentences the
/// head is rejoined and the last sentence moves to its own paragraph,
/// ending in exactly one period. Shorter input is returned unchanged.
fn format_description(description: &str) -> String {
    if description.is_empty() {
        return String::new();
    }

    let sentences: Vec<&str> = description.split(". ").collect();
    let Some((last, head)) = sentences.split_last() else {
        return description.to_string();
    };
    if head.is_empty() {
        return description.to_string();
    }

    let mut formatted = head.join(". ");
    formatted.push_str(".\n\n");
    formatted.push_str(last);
    if !formatted.ends_with('.') {
        formatted.push('.');
    }
    formatted
}

fn truncate_chars(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect()
}
