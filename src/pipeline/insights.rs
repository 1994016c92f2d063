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
use std::collections::BTreeMap;

use crate::constants::STATUS_COMPLETED;
use crate::pipeline::analytics::Analytics;

/// A distribution label with its observed count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelCount {
    pub name: String,
    pub count: u64,
}

/// Summary statistics computed once over the sealed aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_used_technology: Option<LabelCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_common_category: Option<LabelCount>,
    /// Share of completed projects in percent, 0 for an empty run
    pub completion_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_project_duration_days: Option<f64>,
}

impl Insights {
    /// Derive all insights from the aggregate; safe on empty input
    pub fn derive(analytics: &Analytics) -> Self {
        let completed = analytics
            .status_distribution
            .get(STATUS_COMPLETED)
            .copied()
            .unwrap_or(0);
        let completion_rate = if analytics.total_projects > 0 {
            completed as f64 / analytics.total_projects as f64 * 100.0
        } else {
            0.0
        };

        Self {
            most_used_technology: max_entry(&analytics.technologies),
            most_common_category: max_entry(&analytics.categories),
            completion_rate,
            average_project_duration_days: analytics.average_completed_duration(),
        }
    }
}

/// Entry with the maximum count, None for an empty mapping
///
/// The map iterates in lexicographic label order and only a strictly
/// greater count displaces the current best, so ties resolve to the
/// lexicographically smallest label.
fn max_entry(counts: &BTreeMap<String, u64>) -> Option<LabelCount> {
    let mut best: Option<(&String, u64)> = None;
    for (name, &count) in counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((name, count));
        }
    }
    best.map(|(name, count)| LabelCount {
        name: name.clone(),
        count,
    })
}
