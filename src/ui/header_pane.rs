use crate::app::AppState;
use crate::ui::styles::{band_style, border_style, hint_style, title_style};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header line contents: overall score and its band
pub fn score_line(app: &AppState) -> Line<'static> {
    let dashboard = &app.dashboard;
    Line::from(vec![
        Span::styled("Track your productivity and tasks", hint_style()),
        Span::raw("   "),
        Span::styled("Score: ", title_style()),
        Span::raw(format!(
            "{:.0}% ({}/{}) ",
            dashboard.score,
            dashboard.completed_tasks(),
            dashboard.total_tasks()
        )),
        Span::styled(dashboard.band.label, band_style(dashboard.band.color)),
    ])
}

/// Render the dashboard header
pub fn render_header_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let date = Local::now().format("%a %b %d");
    let title = format!(" Task Dashboard ({}) ", date);

    let paragraph = Paragraph::new(score_line(app)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}
