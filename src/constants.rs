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

/// Window for a project to count as recent, measured back from run start
pub const RECENT_WINDOW_DAYS: i64 = 180;

/// Hard truncation limit for SEO meta descriptions, in characters
pub const META_DESCRIPTION_MAX_CHARS: usize = 160;

/// Number of technologies joined into the SEO keyword list
pub const SEO_KEYWORD_LIMIT: usize = 5;

/// Characters of overview text read per minute
pub const READING_CHARS_PER_MINUTE: usize = 200;

/// Reading time bounds in minutes
pub const READING_TIME_MIN: u32 = 1;
pub const READING_TIME_MAX: u32 = 10;

/// Technologies shown per project card and carried in featured summaries
pub const TECH_BADGE_LIMIT: usize = 3;

/// Featured projects rendered in the featured section
pub const FEATURED_RENDER_LIMIT: usize = 3;

/// Fallback thumbnail asset for project cards
pub const DEFAULT_THUMBNAIL: &str = "assets/images/projects/default.jpg";

/// Category label applied when a record carries none
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// Status label applied when a record carries none
pub const DEFAULT_STATUS: &str = "unknown";

/// Status label counted toward the completion rate
pub const STATUS_COMPLETED: &str = "completed";
