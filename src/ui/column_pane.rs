use crate::app::AppState;
use crate::domain::{Priority, Task};
use crate::report::stats::PriorityColumn;
use crate::ui::styles::{
    border_style, default_style, done_style, focused_border_style, pending_style,
    priority_color, selected_style, tag_style, title_style,
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Status glyph for a task
pub fn status_glyph(task: &Task, use_emoji: bool) -> &'static str {
    match (task.is_completed(), use_emoji) {
        (true, true) => "✅",
        (false, true) => "🕒",
        (true, false) => "[x]",
        (false, false) => "[ ]",
    }
}

/// Create a single line for a task
/// Format: ▎🕒 Review Q1 Report  [Mon]
fn create_task_line(task: &Task, use_emoji: bool) -> Line<'static> {
    let marker_style = if task.is_completed() {
        done_style()
    } else {
        pending_style()
    };

    Line::from(vec![
        Span::styled("▎", Style::default().fg(priority_color(task.priority))),
        Span::styled(format!("{} ", status_glyph(task, use_emoji)), marker_style),
        Span::raw(task.title.clone()),
        Span::raw("  "),
        Span::styled(format!("[{}]", task.bucket.label()), tag_style()),
    ])
}

/// Column title, e.g. " High Priority (1/3) "
fn column_title(column: &PriorityColumn) -> String {
    format!(
        " {} Priority ({}/{}) ",
        column.priority.name(),
        column.completed_count,
        column.tasks.len()
    )
}

/// Render one priority column
pub fn render_column_pane(f: &mut Frame, app: &AppState, priority: Priority, area: Rect) {
    let column = app.dashboard.column(priority);
    let focused = app.focused_priority == priority;

    let items: Vec<ListItem> = if column.tasks.is_empty() {
        vec![ListItem::new(Line::styled("  No tasks yet. Press 'a' to add one.", pending_style()))]
    } else {
        column
            .tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| {
                let style = if focused && idx == app.selected_index {
                    selected_style()
                } else {
                    default_style()
                };
                ListItem::new(create_task_line(task, app.use_emoji)).style(style)
            })
            .collect()
    };

    let border = if focused {
        focused_border_style(priority)
    } else {
        border_style()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(column_title(column), title_style())),
    );

    f.render_widget(list, area);
}
