use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub chart_area: Rect,
    pub column_areas: [Rect; 3],
    pub toast_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Header: title and overall score (3 rows)
/// - Chart: completion rate per bucket
/// - Columns: High | Medium | Low
/// - Bottom bar: toasts (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Keybindings bar
            Constraint::Length(3),      // Header
            Constraint::Percentage(45), // Chart
            Constraint::Min(0),         // Priority columns
            Constraint::Length(1),      // Toasts
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[3]);

    MainLayout {
        keybindings_area: rows[0],
        header_area: rows[1],
        chart_area: rows[2],
        column_areas: [columns[0], columns[1], columns[2]],
        toast_area: rows[4],
    }
}

/// Create centered modal area (for the add-task form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(14),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
