use crate::app::{AppState, FormField};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, priority_color},
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Label for a form field, marked while it has focus
fn field_label(name: &str, field: FormField, active: FormField) -> String {
    if field == active {
        format!("{}: (editing)", name)
    } else {
        format!("{}:", name)
    }
}

/// Render the input form for adding tasks
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        // Title field
        lines.push(Line::raw(""));
        lines.push(Line::raw(field_label("Title", FormField::Title, form.editing_field)));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(form.title.as_str(), modal_title_style()),
            if form.editing_field == FormField::Title {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]));
        lines.push(Line::raw(""));

        // Priority field
        lines.push(Line::raw(field_label("Priority", FormField::Priority, form.editing_field)));
        lines.push(Line::from(vec![
            Span::raw("< "),
            Span::styled(
                form.priority.name(),
                Style::default().fg(priority_color(form.priority)),
            ),
            Span::raw(" >"),
        ]));
        lines.push(Line::raw(""));

        // Bucket field
        lines.push(Line::raw(field_label("When", FormField::Bucket, form.editing_field)));
        lines.push(Line::from(vec![
            Span::raw("< "),
            Span::styled(form.bucket.label(), modal_title_style()),
            Span::raw(" >"),
        ]));
        lines.push(Line::raw(""));

        // Instructions
        lines.push(Line::raw("Tab to switch fields  ·  Enter to submit  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
