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

use crate::constants::{DEFAULT_THUMBNAIL, FEATURED_RENDER_LIMIT, TECH_BADGE_LIMIT};
use crate::pipeline::types::{EnrichedProject, ProjectRecord};

// Icon path data carried over from the site's original card markup
const GITHUB_MARK_PATH: &str = "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z";
const EXTERNAL_LINK_PATH: &str = "M21 13v10h-21v-19h12v2h-10v15h17v-8h2zm3-12h-10.988l4.035 4-6.977 7.07 2.828 2.828 6.977-7.07 4.125 4.172v-11z";

/// Tags emitted without a closing counterpart
const VOID_TAGS: [&str; 2] = ["img", "br"];

enum Node {
    Element(Element),
    Text(String),
}

/// Minimal composable HTML fragment builder
///
/// Interpolated text is emitted verbatim: no escaping is applied, to
/// keep byte parity with the site's historical templates. All field
/// interpolation funnels through this type, so an escaping policy has
/// a single place to land if the fragments ever leave trusted data.
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append unescaped text content
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.children.push(Node::Text(content.into()));
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out, 0);
        if out.ends_with('\n') {
            out.pop();
        }
        out
    }

    fn write_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, value));
        }

        if self.children.is_empty() {
            if self.tag == "path" {
                out.push_str("/>\n");
            } else if VOID_TAGS.contains(&self.tag.as_str()) {
                out.push_str(">\n");
            } else {
                out.push_str(&format!("></{}>\n", self.tag));
            }
            return;
        }

        // A lone text child stays on one line
        if let [Node::Text(content)] = self.children.as_slice() {
            out.push_str(&format!(">{}</{}>\n", content, self.tag));
            return;
        }

        out.push_str(">\n");
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_into(out, depth + 1),
                Node::Text(content) => {
                    out.push_str(&"  ".repeat(depth + 1));
                    out.push_str(content);
                    out.push('\n');
                }
            }
        }
        out.push_str(&indent);
        out.push_str(&format!("</{}>\n", self.tag));
    }
}

/// Card fragment covering every project, in input order
pub fn render_project_cards(projects: &[EnrichedProject]) -> String {
    projects
        .iter()
        .map(|project| project_card(project).render())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Featured section built from the first three featured projects,
/// empty string when none are featured
pub fn render_featured_section(projects: &[EnrichedProject]) -> String {
    let featured: Vec<&EnrichedProject> = projects
        .iter()
        .filter(|p| p.record.is_featured())
        .take(FEATURED_RENDER_LIMIT)
        .collect();
    if featured.is_empty() {
        return String::new();
    }

    let mut grid = Element::new("div").attr("class", "featured-grid");
    for project in featured {
        grid = grid.child(featured_card(project));
    }

    Element::new("div")
        .attr("class", "featured-projects")
        .child(Element::new("h2").text("Featured Projects"))
        .child(grid)
        .render()
}

fn project_card(project: &EnrichedProject) -> Element {
    let record = &project.record;
    let thumbnail = record.thumbnail.as_deref().unwrap_or(DEFAULT_THUMBNAIL);
    let repo_url = record.github_url.as_deref().unwrap_or("#");
    let detail_href = format!("project-detail.html?id={}", record.id);

    let image = Element::new("div")
        .attr("class", "project-image")
        .child(
            Element::new("img")
                .attr("src", thumbnail)
                .attr("alt", record.title.as_str())
                .attr("loading", "lazy"),
        )
        .child(
            Element::new("div").attr("class", "project-overlay").child(
                Element::new("div")
                    .attr("class", "project-links")
                    .child(icon_link(&detail_href, None, GITHUB_MARK_PATH))
                    .child(icon_link(repo_url, Some("_blank"), EXTERNAL_LINK_PATH)),
            ),
        );

    let content = Element::new("div")
        .attr("class", "project-content")
        .child(
            Element::new("h3")
                .attr("class", "project-title")
                .text(record.title.as_str()),
        )
        .child(
            Element::new("p")
                .attr("class", "project-description")
                .text(record.short_description()),
        )
        .child(tech_badges(record, "project-tech"));

    Element::new("div")
        .attr("class", "project-card")
        .attr("data-category", record.category.as_deref().unwrap_or(""))
        .child(image)
        .child(content)
}

fn featured_card(project: &EnrichedProject) -> Element {
    let record = &project.record;
    let detail_href = format!("project-detail.html?id={}", record.id);

    Element::new("div")
        .attr("class", "featured-project-card")
        .child(
            Element::new("div").attr("class", "featured-project-image").child(
                Element::new("img")
                    .attr("src", record.thumbnail.as_deref().unwrap_or(""))
                    .attr("alt", record.title.as_str())
                    .attr("loading", "lazy"),
            ),
        )
        .child(
            Element::new("div")
                .attr("class", "featured-project-content")
                .child(Element::new("h3").text(record.title.as_str()))
                .child(Element::new("p").text(record.short_description()))
                .child(tech_badges(record, "featured-project-tech"))
                .child(
                    Element::new("a")
                        .attr("href", detail_href)
                        .attr("class", "btn btn-primary")
                        .text("Learn More"),
                ),
        )
}

fn tech_badges(record: &ProjectRecord, class: &str) -> Element {
    let mut container = Element::new("div").attr("class", class);
    for tech in record.technologies().iter().take(TECH_BADGE_LIMIT) {
        container = container.child(
            Element::new("span")
                .attr("class", "tech-badge")
                .text(tech.as_str()),
        );
    }
    container
}

fn icon_link(href: &str, target: Option<&str>, path_data: &str) -> Element {
    let mut link = Element::new("a")
        .attr("href", href)
        .attr("class", "project-link");
    if let Some(target) = target {
        link = link.attr("target", target);
    }
    link.child(
        Element::new("svg")
            .attr("viewBox", "0 0 24 24")
            .attr("fill", "currentColor")
            .child(Element::new("path").attr("d", path_data)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::enrich::enrich_project;
    use serde_json::json;

    fn enriched(raw: serde_json::Value) -> EnrichedProject {
        enrich_project(&raw).unwrap()
    }

    #[test]
    fn test_element_nesting_and_inline_text() {
        let html = Element::new("div")
            .attr("class", "outer")
            .child(Element::new("h3").text("Title"))
            .render();
        assert_eq!(html, "<div class=\"outer\">\n  <h3>Title</h3>\n</div>");
    }

    #[test]
    fn test_element_void_and_empty_tags() {
        let img = Element::new("img").attr("src", "a.jpg").render();
        assert_eq!(img, "<img src=\"a.jpg\">");

        let empty = Element::new("div").attr("class", "project-tech").render();
        assert_eq!(empty, "<div class=\"project-tech\"></div>");
    }

    #[test]
    fn test_card_fallbacks() {
        let html = render_project_cards(&[enriched(json!({"id": 9, "title": "Bare"}))]);

        assert!(html.contains("assets/images/projects/default.jpg"));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("project-detail.html?id=9"));
        assert!(html.contains("data-category=\"\""));
        assert!(html.contains("<h3 class=\"project-title\">Bare</h3>"));
    }

    #[test]
    fn test_card_uses_record_values() {
        let html = render_project_cards(&[enriched(json!({
            "id": "app-1",
            "title": "My App",
            "category": "web",
            "thumbnail": "img/app.png",
            "githubUrl": "https://github.com/muvon/app",
            "shortDescription": "Does things."
        }))]);

        assert!(html.contains("data-category=\"web\""));
        assert!(html.contains("src=\"img/app.png\""));
        assert!(html.contains("href=\"https://github.com/muvon/app\""));
        assert!(html.contains("Does things."));
    }

    #[test]
    fn test_cards_limit_tech_badges() {
        let html = render_project_cards(&[enriched(json!({
            "id": 1, "title": "T",
            "technologies": ["A", "B", "C", "D", "E"]
        }))]);
        assert_eq!(html.matches("tech-badge").count(), 3);
        assert!(!html.contains(">D<"));
    }

    #[test]
    fn test_featured_section_empty_without_featured() {
        let html = render_featured_section(&[enriched(json!({"id": 1, "title": "T"}))]);
        assert_eq!(html, "");
    }

    #[test]
    fn test_featured_section_caps_at_three() {
        let projects: Vec<EnrichedProject> = (1..=5)
            .map(|id| {
                enriched(json!({
                    "id": id,
                    "title": format!("Project {}", id),
                    "featured": true
                }))
            })
            .collect();
        let html = render_featured_section(&projects);

        assert_eq!(html.matches("featured-project-card").count(), 3);
        assert!(html.contains("<h2>Featured Projects</h2>"));
        assert!(html.contains("Learn More"));
        assert!(!html.contains("Project 4"));
    }

    #[test]
    fn test_interpolation_is_unescaped() {
        // Output parity with the historical templates: markup in fields
        // passes through verbatim (see DESIGN.md)
        let html = render_project_cards(&[enriched(json!({
            "id": 1,
            "title": "<b>Bold</b>"
        }))]);
        assert!(html.contains("<b>Bold</b>"));
    }
}
