use crate::app::AppState;
use crate::ui::styles::{hint_style, toast_style};
use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};

/// Shown when there is no toast. The Notion integration is not implemented.
const IDLE_HINT: &str = " Connect with Notion to sync your tasks (coming soon)";

/// Render the toast line
pub fn render_toast_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = match app.toasts.current() {
        Some(toast) => Paragraph::new(Span::styled(format!(" {} ", toast.message), toast_style())),
        None => Paragraph::new(Span::styled(IDLE_HINT, hint_style())),
    };
    f.render_widget(paragraph, area);
}
