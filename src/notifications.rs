use crate::domain::Mutation;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[cfg(target_os = "macos")]
use std::process::Command;

/// Receives one call per successful toggle/remove
pub trait Notifier {
    fn notify(&mut self, mutation: &Mutation);
}

/// A message shown in the toast line until it expires
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

/// In-app toast queue; the oldest live toast is shown
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    lifetime: Duration,
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.push_at(message, Instant::now());
    }

    fn push_at(&mut self, message: impl Into<String>, now: Instant) {
        // Keep the line readable when the user toggles quickly
        if self.toasts.len() >= 3 {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            message: message.into(),
            expires_at: now + self.lifetime,
        });
    }

    /// Drop every toast that has expired by `now`
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    pub fn current(&self) -> Option<&Toast> {
        self.toasts.front()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, mutation: &Mutation) {
        self.push(mutation.description.clone());
    }
}

/// Escape text for use inside an AppleScript string literal
#[cfg(any(target_os = "macos", test))]
fn applescript_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Desktop notification for a mutation.
/// Currently only implements macOS notifications
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&mut self, mutation: &Mutation) {
        #[cfg(target_os = "macos")]
        {
            let script = format!(
                r#"display notification "{}" with title "Task Dashboard""#,
                applescript_escape(&mutation.description)
            );

            if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
                tracing::warn!(error = %e, "desktop notification failed");
            }
        }

        #[cfg(not(target_os = "macos"))]
        {
            // No-op on other platforms
            let _ = mutation;
        }
    }
}
