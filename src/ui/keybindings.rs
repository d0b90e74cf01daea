use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = match app.ui_mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" ←/→ column   "),
            Span::raw("↑/↓ select   "),
            Span::raw("Enter toggle   "),
            Span::raw("x delete   "),
            Span::raw("a add   "),
            Span::raw("d/w/m/y grouping   "),
            Span::raw("[ / ] chart   "),
            Span::raw("q quit"),
        ]),
        UiMode::AddingTask => Line::from(vec![
            Span::raw(" Tab next field   "),
            Span::raw("←/→ change   "),
            Span::raw("Enter save   "),
            Span::raw("Esc cancel"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
