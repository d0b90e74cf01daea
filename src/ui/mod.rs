pub mod chart_pane;
pub mod column_pane;
pub mod header_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod styles;
pub mod toast_pane;

use crate::app::AppState;
use crate::domain::Priority;
use chart_pane::render_chart_pane;
use column_pane::render_column_pane;
use header_pane::render_header_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;
use toast_pane::render_toast_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app, layout.keybindings_area);
    render_header_pane(f, app, layout.header_area);
    render_chart_pane(f, app, layout.chart_area);

    for priority in Priority::all() {
        render_column_pane(f, app, *priority, layout.column_areas[priority.index()]);
    }

    render_toast_pane(f, app, layout.toast_area);

    // Render input form if active
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
