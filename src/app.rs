use crate::config::Config;
use crate::domain::{Bucket, Grouping, Mutation, Priority, Task, TaskStore, UiMode};
use crate::notifications::{DesktopNotifier, Notifier, ToastQueue};
use crate::report::{AggregatedPoint, Dashboard};
use std::time::{Duration, Instant};

/// Which field of the add-task form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Priority,
    Bucket,
}

impl FormField {
    fn next(&self) -> Self {
        match self {
            FormField::Title => FormField::Priority,
            FormField::Priority => FormField::Bucket,
            FormField::Bucket => FormField::Title,
        }
    }
}

/// Input form state for adding tasks
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub title: String,
    pub priority: Priority,
    pub bucket: Bucket,
    pub editing_field: FormField,
}

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    pub grouping: Grouping,
    /// Derived view of `store`, rebuilt after every change
    pub dashboard: Dashboard,
    pub focused_priority: Priority,
    /// Selection within the focused column
    pub selected_index: usize,
    /// Highlighted bar in the chart
    pub chart_cursor: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub toasts: ToastQueue,
    /// Extra notification sinks (desktop, tests)
    pub notifiers: Vec<Box<dyn Notifier>>,
    pub use_emoji: bool,
}

impl AppState {
    pub fn new(store: TaskStore, config: &Config) -> Self {
        let dashboard = Dashboard::build(&store, config.grouping);
        let mut notifiers: Vec<Box<dyn Notifier>> = Vec::new();
        if config.desktop_notifications {
            notifiers.push(Box::new(DesktopNotifier));
        }

        Self {
            store,
            grouping: config.grouping,
            dashboard,
            focused_priority: Priority::High,
            selected_index: 0,
            chart_cursor: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            toasts: ToastQueue::new(Duration::from_millis(config.toast_ms)),
            notifiers,
            use_emoji: config.use_emoji,
        }
    }

    /// Recompute the dashboard and keep cursors in range
    pub fn refresh(&mut self) {
        self.dashboard = Dashboard::build(&self.store, self.grouping);

        let column_len = self.focused_column().len();
        if self.selected_index >= column_len {
            self.selected_index = column_len.saturating_sub(1);
        }

        let points = self.dashboard.points.len();
        if self.chart_cursor >= points {
            self.chart_cursor = points.saturating_sub(1);
        }
    }

    /// Forward a successful mutation to every notifier, then refresh
    fn dispatch(&mut self, mutation: Mutation) {
        tracing::info!(id = %mutation.task.id, kind = ?mutation.kind, "{}", mutation.description);
        self.toasts.notify(&mutation);
        for notifier in self.notifiers.iter_mut() {
            notifier.notify(&mutation);
        }
        self.refresh();
    }

    /// Tasks of the focused column
    pub fn focused_column(&self) -> &[Task] {
        &self.dashboard.column(self.focused_priority).tasks
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.focused_column().get(self.selected_index)
    }

    pub fn set_grouping(&mut self, grouping: Grouping) {
        if self.grouping != grouping {
            tracing::debug!(grouping = grouping.name(), "grouping changed");
            self.grouping = grouping;
            self.chart_cursor = 0;
            self.refresh();
        }
    }

    pub fn cycle_grouping(&mut self) {
        self.set_grouping(self.grouping.next());
    }

    /// Move focus to the next priority column
    pub fn focus_next_column(&mut self) {
        self.focused_priority = self.focused_priority.next();
        self.selected_index = 0;
    }

    /// Move focus to the previous priority column
    pub fn focus_prev_column(&mut self) {
        self.focused_priority = self.focused_priority.prev();
        self.selected_index = 0;
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.focused_column().len() {
            self.selected_index += 1;
        }
    }

    pub fn chart_cursor_left(&mut self) {
        if self.chart_cursor > 0 {
            self.chart_cursor -= 1;
        }
    }

    pub fn chart_cursor_right(&mut self) {
        if self.chart_cursor + 1 < self.dashboard.points.len() {
            self.chart_cursor += 1;
        }
    }

    /// Chart point under the cursor
    pub fn selected_point(&self) -> Option<&AggregatedPoint> {
        self.dashboard.points.get(self.chart_cursor)
    }

    /// Toggle the selected task between pending and completed
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task().map(|t| t.id) else {
            return;
        };
        if let Some(mutation) = self.store.toggle(id) {
            self.dispatch(mutation);
        }
    }

    /// Delete the selected task
    pub fn remove_selected(&mut self) {
        let Some(id) = self.selected_task().map(|t| t.id) else {
            return;
        };
        if let Some(mutation) = self.store.remove(id) {
            self.dispatch(mutation);
        }
    }

    /// Open the add form for the focused column
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState {
            title: String::new(),
            priority: self.focused_priority,
            bucket: self.grouping.current_bucket(),
            editing_field: FormField::Title,
        });
        self.ui_mode = UiMode::AddingTask;
    }

    /// Cycle through title, priority and bucket
    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = form.editing_field.next();
        }
    }

    /// Type a character into the title field
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            if form.editing_field == FormField::Title {
                form.title.push(c);
            }
        }
    }

    /// Delete the last character of the title
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            if form.editing_field == FormField::Title {
                form.title.pop();
            }
        }
    }

    /// Step the priority or bucket field
    pub fn input_form_cycle(&mut self, forward: bool) {
        let order = self.grouping.bucket_order();
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                FormField::Title => {}
                FormField::Priority => {
                    form.priority = if forward {
                        form.priority.next()
                    } else {
                        form.priority.prev()
                    };
                }
                FormField::Bucket => {
                    let len = order.len();
                    let idx = order.iter().position(|b| *b == form.bucket).unwrap_or(0);
                    let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
                    form.bucket = order[next];
                }
            }
        }
    }

    /// Submit the add form. An empty title leaves the form open and adds nothing.
    pub fn submit_input_form(&mut self) {
        let Some(form) = &self.input_form else {
            return;
        };

        match self.store.add(&form.title, form.priority, form.bucket) {
            Ok(task) => {
                tracing::info!(id = %task.id, "added task \"{}\"", task.title);
                self.focused_priority = task.priority;
                self.input_form = None;
                self.ui_mode = UiMode::Normal;
                self.refresh();
                self.selected_index = self.focused_column().len().saturating_sub(1);
            }
            Err(e) => {
                tracing::debug!(error = %e, "add ignored");
            }
        }
    }

    /// Cancel input form
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.toasts.expire(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::{TaskStatus, TimeSlot};
    use crate::domain::task::MutationKind;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Notifier that records every mutation it sees
    struct Recorder(Rc<RefCell<Vec<(MutationKind, String)>>>);

    impl Notifier for Recorder {
        fn notify(&mut self, mutation: &Mutation) {
            self.0
                .borrow_mut()
                .push((mutation.kind, mutation.description.clone()));
        }
    }

    fn create_test_app() -> (AppState, Rc<RefCell<Vec<(MutationKind, String)>>>) {
        let mut store = TaskStore::new();
        let morning = Bucket::Slot(TimeSlot::Morning);
        store.add("Task 1", Priority::High, morning).unwrap();
        store.add("Task 2", Priority::High, morning).unwrap();
        store.add("Task 3", Priority::Low, morning).unwrap();

        let config = Config {
            grouping: Grouping::Day,
            ..Config::default()
        };
        let mut app = AppState::new(store, &config);
        let log = Rc::new(RefCell::new(Vec::new()));
        app.notifiers.push(Box::new(Recorder(log.clone())));
        (app, log)
    }

    #[test]
    fn test_app_state_new() {
        let (app, _) = create_test_app();
        assert_eq!(app.store.len(), 3);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.focused_priority, Priority::High);
        assert_eq!(app.dashboard.points.len(), 4);
        assert_eq!(app.selected_task().unwrap().title, "Task 1");
    }

    #[test]
    fn test_move_selection() {
        let (mut app, _) = create_test_app();

        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        // Can't go past the end of the column
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        app.move_selection_up();
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_focus_columns() {
        let (mut app, _) = create_test_app();
        app.move_selection_down();

        app.focus_next_column();
        assert_eq!(app.focused_priority, Priority::Medium);
        assert_eq!(app.selected_index, 0);
        assert!(app.selected_task().is_none());

        app.focus_next_column();
        assert_eq!(app.selected_task().unwrap().title, "Task 3");

        app.focus_prev_column();
        app.focus_prev_column();
        assert_eq!(app.focused_priority, Priority::High);
    }

    #[test]
    fn test_toggle_notifies_and_refreshes() {
        let (mut app, log) = create_test_app();

        app.toggle_selected();
        assert_eq!(app.store.tasks()[0].status, TaskStatus::Completed);
        assert_eq!(app.dashboard.completed_tasks(), 1);
        assert_eq!(
            log.borrow().as_slice(),
            &[(
                MutationKind::Toggled,
                "Task \"Task 1\" marked as completed".to_string()
            )]
        );
        assert!(app.toasts.current().is_some());
    }

    #[test]
    fn test_toggle_on_empty_column_is_silent() {
        let (mut app, log) = create_test_app();
        app.focus_next_column();

        app.toggle_selected();
        app.remove_selected();
        assert!(log.borrow().is_empty());
        assert!(app.toasts.current().is_none());
    }

    #[test]
    fn test_remove_clamps_selection() {
        let (mut app, log) = create_test_app();
        app.move_selection_down();

        app.remove_selected();
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.selected_task().unwrap().title, "Task 1");
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].0, MutationKind::Removed);
    }

    #[test]
    fn test_add_task_via_form() {
        let (mut app, _) = create_test_app();
        app.focus_next_column();
        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert_eq!(app.input_form.as_ref().unwrap().priority, Priority::Medium);

        for c in "Plan sprint".chars() {
            app.input_form_add_char(c);
        }
        app.input_form_toggle_field();
        app.input_form_cycle(true);
        app.submit_input_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
        assert_eq!(app.store.len(), 4);

        let task = app.store.tasks().last().unwrap();
        assert_eq!(task.title, "Plan sprint");
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(app.focused_priority, Priority::Low);
        assert_eq!(app.selected_task().unwrap().title, "Plan sprint");
    }

    #[test]
    fn test_submit_empty_title_is_noop() {
        let (mut app, log) = create_test_app();
        app.start_add_task();
        app.input_form_add_char(' ');
        app.submit_input_form();

        assert_eq!(app.store.len(), 3);
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.input_form.is_some());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_form_bucket_cycles_within_grouping() {
        let (mut app, _) = create_test_app();
        app.start_add_task();
        app.input_form_toggle_field();
        app.input_form_toggle_field();

        let order = app.grouping.bucket_order();
        let start = app.input_form.as_ref().unwrap().bucket;
        for _ in 0..order.len() {
            app.input_form_cycle(true);
            assert!(order.contains(&app.input_form.as_ref().unwrap().bucket));
        }
        assert_eq!(app.input_form.as_ref().unwrap().bucket, start);

        app.input_form_cycle(false);
        app.input_form_cycle(true);
        assert_eq!(app.input_form.as_ref().unwrap().bucket, start);
    }

    #[test]
    fn test_typing_only_edits_title() {
        let (mut app, _) = create_test_app();
        app.start_add_task();
        app.input_form_add_char('a');
        app.input_form_toggle_field();
        app.input_form_add_char('b');
        app.input_form_backspace();

        assert_eq!(app.input_form.as_ref().unwrap().title, "a");
    }

    #[test]
    fn test_cancel_form() {
        let (mut app, _) = create_test_app();
        app.start_add_task();
        app.input_form_add_char('x');
        app.cancel_input_form();

        assert!(app.input_form.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.len(), 3);
    }

    #[test]
    fn test_grouping_changes_chart() {
        let (mut app, _) = create_test_app();
        app.chart_cursor_right();
        app.chart_cursor_right();
        assert_eq!(app.chart_cursor, 2);

        app.set_grouping(Grouping::Year);
        assert_eq!(app.chart_cursor, 0);
        assert_eq!(app.dashboard.points.len(), 12);

        app.cycle_grouping();
        assert_eq!(app.grouping, Grouping::Day);
        assert_eq!(app.selected_point().unwrap().label, "Morning");
        assert_eq!(app.selected_point().unwrap().total_count, 3);
    }

    #[test]
    fn test_chart_cursor_bounds() {
        let (mut app, _) = create_test_app();
        app.chart_cursor_left();
        assert_eq!(app.chart_cursor, 0);

        for _ in 0..10 {
            app.chart_cursor_right();
        }
        assert_eq!(app.chart_cursor, 3);
        assert_eq!(app.selected_point().unwrap().label, "Evening");
    }
}
