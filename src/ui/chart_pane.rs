use crate::app::AppState;
use crate::domain::Grouping;
use crate::report::AggregatedPoint;
use crate::ui::styles::{
    bar_selected_style, bar_style, border_style, default_style, hint_style, selected_style,
    title_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

const BAR_GAP: u16 = 1;

/// Width of each bar so `count` bars fill `width` columns
fn bar_width(width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let per_bar = width / count as u16;
    per_bar.saturating_sub(BAR_GAP).clamp(1, 12)
}

/// Detail text for the highlighted point, e.g. "Morning: 1/2 completed (50%)"
pub fn point_detail(point: &AggregatedPoint) -> String {
    format!(
        "{}: {}/{} completed ({:.0}%)",
        point.label, point.completed_count, point.total_count, point.completion_pct
    )
}

/// Chart title with the grouping selector, active grouping in brackets
fn selector_spans(active: Grouping) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(" Completion Rate ", title_style())];
    for grouping in Grouping::all() {
        if *grouping == active {
            spans.push(Span::styled(format!("[{}]", grouping.short_label()), selected_style()));
        } else {
            spans.push(Span::styled(format!(" {} ", grouping.short_label()), default_style()));
        }
    }
    spans.push(Span::raw(" "));
    spans
}

/// Render the completion-rate chart pane
pub fn render_chart_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Line::from(selector_spans(app.grouping)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let points = &app.dashboard.points;
    let bars: Vec<Bar> = points
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            let style = if idx == app.chart_cursor {
                bar_selected_style()
            } else {
                bar_style()
            };
            Bar::default()
                .value(point.completion_pct.round() as u64)
                .text_value(format!("{:.0}%", point.completion_pct))
                .label(Line::from(point.label.clone()))
                .style(style)
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(chunks[0].width, points.len()))
        .bar_gap(BAR_GAP)
        .max(100);
    f.render_widget(chart, chunks[0]);

    let detail = match app.selected_point() {
        Some(point) => point_detail(point),
        None => String::new(),
    };
    f.render_widget(Paragraph::new(detail).style(hint_style()), chunks[1]);
}
