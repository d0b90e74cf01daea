use crate::domain::{ColorToken, Priority};
use ratatui::style::{Color, Modifier, Style};

/// Accent used for the chart bars
const CHART_GREEN: Color = Color::Rgb(0, 255, 157);

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Border of the focused column
pub fn focused_border_style(priority: Priority) -> Style {
    Style::default()
        .fg(priority_color(priority))
        .add_modifier(Modifier::BOLD)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Done/completed task style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Pending task marker style
pub fn pending_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Bucket badge style
pub fn tag_style() -> Style {
    Style::default().fg(Color::Blue)
}

/// Chart bar style
pub fn bar_style() -> Style {
    Style::default().fg(CHART_GREEN)
}

/// Highlighted chart bar
pub fn bar_selected_style() -> Style {
    Style::default()
        .fg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Toast line style
pub fn toast_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(CHART_GREEN)
        .add_modifier(Modifier::BOLD)
}

/// Terminal color for a score band token
pub fn band_color(token: ColorToken) -> Color {
    match token {
        ColorToken::Violet => Color::Rgb(155, 135, 245),
        ColorToken::Green => Color::Green,
        ColorToken::Orange => Color::Rgb(249, 115, 22),
        ColorToken::Red => Color::Red,
    }
}

/// Score band label style
pub fn band_style(token: ColorToken) -> Style {
    Style::default()
        .fg(band_color(token))
        .add_modifier(Modifier::BOLD)
}

/// Accent per priority, brightest for high
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Rgb(0, 255, 157),
        Priority::Medium => Color::Rgb(0, 153, 77),
        Priority::Low => Color::Rgb(0, 77, 38),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_colors_are_distinct() {
        let colors = [
            band_color(ColorToken::Violet),
            band_color(ColorToken::Green),
            band_color(ColorToken::Orange),
            band_color(ColorToken::Red),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
