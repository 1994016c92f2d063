use colored::Colorize;

use crate::pipeline::analytics::Analytics;

pub fn format_analytics(analytics: &Analytics) -> String {
    let mut output = String::new();

    output.push_str(&"Portfolio Analytics".bold().to_string());
    output.push('\n');
    output.push_str(&format!("Total Projects: {}", analytics.total_projects));
    output.push('\n');
    output.push_str(&format!(
        "Processed At: {}",
        analytics.processing_timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push('\n');

    if !analytics.categories.is_empty() {
        output.push('\n');
        output.push_str(&"Categories".bold().to_string());
        output.push('\n');
        for (label, count) in &analytics.categories {
            output.push_str(&format!("{:<32} {}\n", truncate_chars(label, 30), count));
        }
    }

    if !analytics.status_distribution.is_empty() {
        output.push('\n');
        output.push_str(&"Status".bold().to_string());
        output.push('\n');
        for (label, count) in &analytics.status_distribution {
            output.push_str(&format!("{:<32} {}\n", truncate_chars(label, 30), count));
        }
    }

    if !analytics.technologies.is_empty() {
        output.push('\n');
        output.push_str(&"Top Technologies".bold().to_string());
        output.push('\n');
        let mut ranked: Vec<(&String, &u64)> = analytics.technologies.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (label, count) in ranked.into_iter().take(10) {
            output.push_str(&format!("{:<32} {}\n", truncate_chars(label, 30), count));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "Recent Projects: {}",
        analytics.recent_projects.len()
    ));
    output.push('\n');
    output.push_str(&format!(
        "Featured Projects: {}",
        analytics.featured_projects.len()
    ));
    output.push('\n');

    if let Some(insights) = &analytics.insights {
        output.push('\n');
        output.push_str(&"Insights".bold().to_string());
        output.push('\n');
        output.push_str(
            &format!("Completion Rate: {:.1}%", insights.completion_rate)
                .green()
                .to_string(),
        );
        output.push('\n');
        if let Some(tech) = &insights.most_used_technology {
            output.push_str(&format!(
                "Most Used Technology: {} ({} projects)\n",
                tech.name, tech.count
            ));
        }
        if let Some(category) = &insights.most_common_category {
            output.push_str(&format!(
                "Most Common Category: {} ({} projects)\n",
                category.name, category.count
            ));
        }
        if let Some(avg) = insights.average_project_duration_days {
            output.push_str(&format!("Average Completed Duration: {} days\n", avg));
        }
    }

    output
}

fn truncate_chars(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect()
}
