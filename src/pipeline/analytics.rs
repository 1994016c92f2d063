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

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{DEFAULT_CATEGORY, DEFAULT_STATUS, RECENT_WINDOW_DAYS, STATUS_COMPLETED, TECH_BADGE_LIMIT};
use crate::pipeline::enrich::parse_instant;
use crate::pipeline::insights::Insights;
use crate::pipeline::types::{EnrichedProject, FeaturedProject, RecentProject};

/// Aggregate view over one pipeline run
///
/// Built by folding enriched projects in source order, then sealed.
/// Fold order never changes the distribution counts but does define the
/// order of the recent and featured subsets. Distribution maps iterate
/// and serialize in lexicographic label order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analytics {
    pub total_projects: u64,
    pub categories: BTreeMap<String, u64>,
    pub technologies: BTreeMap<String, u64>,
    pub status_distribution: BTreeMap<String, u64>,
    pub recent_projects: Vec<RecentProject>,
    pub featured_projects: Vec<FeaturedProject>,
    pub processing_timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Insights>,
    // Running sums backing the average-duration insight; not part of
    // the serialized analytics object
    #[serde(skip)]
    completed_duration_sum: i64,
    #[serde(skip)]
    completed_duration_count: u64,
}

impl Analytics {
    /// Empty accumulator anchored at the run-start instant, which also
    /// serves as the reference point for the recency window
    pub fn new(run_start: DateTime<Utc>) -> Self {
        Self {
            total_projects: 0,
            categories: BTreeMap::new(),
            technologies: BTreeMap::new(),
            status_distribution: BTreeMap::new(),
            recent_projects: Vec::new(),
            featured_projects: Vec::new(),
            processing_timestamp: run_start,
            insights: None,
            completed_duration_sum: 0,
            completed_duration_count: 0,
        }
    }

    /// Fold one enriched project into the aggregate
    pub fn record(&mut self, project: &EnrichedProject) {
        self.total_projects += 1;

        let category = non_empty_or(project.record.category.as_deref(), DEFAULT_CATEGORY);
        *self.categories.entry(category.to_string()).or_insert(0) += 1;

        for tech in project.record.technologies() {
            *self.technologies.entry(tech.clone()).or_insert(0) += 1;
        }

        let status = non_empty_or(project.record.status.as_deref(), DEFAULT_STATUS);
        *self.status_distribution.entry(status.to_string()).or_insert(0) += 1;

        if self.is_recent(project) {
            self.recent_projects.push(RecentProject {
                id: project.record.id.clone(),
                title: project.record.title.clone(),
                category: project.record.category.clone().unwrap_or_default(),
                start_date: project.record.start_date.clone().unwrap_or_default(),
            });
        }

        if project.record.is_featured() {
            self.featured_projects.push(FeaturedProject {
                id: project.record.id.clone(),
                title: project.record.title.clone(),
                category: project.record.category.clone().unwrap_or_default(),
                technologies: project
                    .record
                    .technologies()
                    .iter()
                    .take(TECH_BADGE_LIMIT)
                    .cloned()
                    .collect(),
            });
        }

        if project.record.status.as_deref() == Some(STATUS_COMPLETED) {
            if let Some(duration) = project.duration_days {
                self.completed_duration_sum += duration;
                self.completed_duration_count += 1;
            }
        }
    }

    /// Finish the fold pass: derive insights and freeze the aggregate
    pub fn seal(mut self) -> Self {
        self.insights = Some(Insights::derive(&self));
        self
    }

    /// Mean duration over completed projects carrying a duration,
    /// rounded to one decimal place
    pub fn average_completed_duration(&self) -> Option<f64> {
        if self.completed_duration_count == 0 {
            return None;
        }
        let mean = self.completed_duration_sum as f64 / self.completed_duration_count as f64;
        Some((mean * 10.0).round() / 10.0)
    }

    /// A project is recent when its effective date (end date, else start
    /// date) parses and falls strictly inside the trailing window from
    /// run start. Projects without dates are not recent.
    fn is_recent(&self, project: &EnrichedProject) -> bool {
        let effective = project
            .record
            .end_date
            .as_deref()
            .or(project.record.start_date.as_deref());
        match effective.and_then(parse_instant) {
            Some(date) => date > self.processing_timestamp - Duration::days(RECENT_WINDOW_DAYS),
            None => false,
        }
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}
