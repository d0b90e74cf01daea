use crate::app::AppState;
use crate::domain::{Grouping, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns `true` when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_input_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Ctrl+C always quits
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Ok(true),

        // Column and row navigation
        KeyCode::Left | KeyCode::Char('h') => {
            app.focus_prev_column();
            Ok(false)
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.focus_next_column();
            Ok(false)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle pending/completed
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected();
            Ok(false)
        }

        // Delete task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.remove_selected();
            Ok(false)
        }

        // Add task to the focused column
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Grouping selector
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.set_grouping(Grouping::Day);
            Ok(false)
        }
        KeyCode::Char('w') | KeyCode::Char('W') => {
            app.set_grouping(Grouping::Week);
            Ok(false)
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.set_grouping(Grouping::Month);
            Ok(false)
        }
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.set_grouping(Grouping::Year);
            Ok(false)
        }
        KeyCode::Char('g') | KeyCode::Char('G') | KeyCode::Tab => {
            app.cycle_grouping();
            Ok(false)
        }

        // Chart cursor
        KeyCode::Char('[') => {
            app.chart_cursor_left();
            Ok(false)
        }
        KeyCode::Char(']') => {
            app.chart_cursor_right();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in input form mode
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_input_form();
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_input_form();
            Ok(false)
        }

        // Switch between title, priority and bucket
        KeyCode::Tab => {
            app.input_form_toggle_field();
            Ok(false)
        }

        // Step priority / bucket
        KeyCode::Left => {
            app.input_form_cycle(false);
            Ok(false)
        }
        KeyCode::Right => {
            app.input_form_cycle(true);
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.input_form_backspace();
            Ok(false)
        }

        // Add character
        KeyCode::Char(c) => {
            app.input_form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::enums::{TaskStatus, TimeSlot};
    use crate::domain::{Bucket, Priority, TaskStore};

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn create_test_app() -> AppState {
        let mut store = TaskStore::new();
        store
            .add("Existing", Priority::High, Bucket::Slot(TimeSlot::Morning))
            .unwrap();
        AppState::new(store, &Config::default())
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        )
        .unwrap());
        assert!(!press(&mut app, KeyCode::Char('c')));
    }

    #[test]
    fn test_toggle_and_delete_keys() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.tasks()[0].status, TaskStatus::Completed);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.store.tasks()[0].status, TaskStatus::Pending);

        press(&mut app, KeyCode::Char('x'));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_grouping_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.grouping, Grouping::Day);
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.grouping, Grouping::Year);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.grouping, Grouping::Day);
        press(&mut app, KeyCode::Char('w'));
        assert_eq!(app.grouping, Grouping::Week);
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.grouping, Grouping::Month);
        assert_eq!(app.dashboard.points.len(), 31);
    }

    #[test]
    fn test_form_keys_do_not_trigger_shortcuts() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        // 'q', 'x' and 'd' are text while the form is open
        for c in "quixd".chars() {
            assert!(!press(&mut app, KeyCode::Char(c)));
        }
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.grouping, Grouping::Week);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.tasks()[1].title, "quixd");
    }

    #[test]
    fn test_form_escape_cancels() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.len(), 1);
    }
}
