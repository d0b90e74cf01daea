use crate::report::stats::Dashboard;
use chrono::{DateTime, Local};

/// Format percentage with 1 decimal place
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Render a markdown session summary for the given snapshot
pub fn render_report(dashboard: &Dashboard, generated_at: DateTime<Local>) -> String {
    let mut report = String::new();

    // Header
    report.push_str(&format!(
        "# Task Dashboard - {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M")
    ));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!(
        "- **Completion Rate:** {}/{} tasks done ({})\n",
        dashboard.completed_tasks(),
        dashboard.total_tasks(),
        format_percent(dashboard.score)
    ));
    report.push_str(&format!(
        "- **Status:** {} ({})\n\n",
        dashboard.band.label,
        dashboard.band.color.name()
    ));

    // Per-bucket Section
    report.push_str(&format!(
        "## Completion by {}\n\n",
        dashboard.grouping.name()
    ));
    report.push_str("| Bucket | Done | Total | Rate |\n");
    report.push_str("|---|---|---|---|\n");
    for point in &dashboard.points {
        report.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            point.label,
            point.completed_count,
            point.total_count,
            format_percent(point.completion_pct)
        ));
    }
    report.push('\n');

    // Priority Section
    report.push_str("## Priorities\n\n");
    for column in &dashboard.columns {
        report.push_str(&format!(
            "### {} Priority ({}/{})\n\n",
            column.priority.name(),
            column.completed_count,
            column.tasks.len()
        ));
        if column.tasks.is_empty() {
            report.push_str("_No tasks_\n\n");
            continue;
        }
        for task in &column.tasks {
            let mark = if task.is_completed() { "x" } else { " " };
            report.push_str(&format!(
                "- [{}] {} ({})\n",
                mark,
                task.title,
                task.bucket.label()
            ));
        }
        report.push('\n');
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::TimeSlot;
    use crate::domain::{Bucket, Grouping, Priority, TaskStore};

    #[test]
    fn test_render_report() {
        let mut store = TaskStore::new();
        let morning = Bucket::Slot(TimeSlot::Morning);
        let done = store.add("Ship release", Priority::High, morning).unwrap();
        store.add("Write notes", Priority::High, morning).unwrap();
        store.toggle(done.id);

        let dashboard = Dashboard::build(&store, Grouping::Day);
        let report = render_report(&dashboard, Local::now());

        assert!(report.starts_with("# Task Dashboard - "));
        assert!(report.contains("- **Completion Rate:** 1/2 tasks done (50.0%)"));
        assert!(report.contains("- **Status:** Good (green)"));
        assert!(report.contains("## Completion by day"));
        assert!(report.contains("| Morning | 1 | 2 | 50.0% |"));
        assert!(report.contains("| Evening | 0 | 0 | 0.0% |"));
        assert!(report.contains("- [x] Ship release (Morning)"));
        assert!(report.contains("- [ ] Write notes (Morning)"));
        assert!(report.contains("### Medium Priority (0/0)\n\n_No tasks_"));
    }

    #[test]
    fn test_render_report_empty() {
        let dashboard = Dashboard::build(&TaskStore::new(), Grouping::Week);
        let report = render_report(&dashboard, Local::now());

        assert!(report.contains("0/0 tasks done (0.0%)"));
        assert!(report.contains("- **Status:** Needs improvement"));
        assert!(report.contains("| Sun | 0 | 0 | 0.0% |"));
    }
}
