use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Fire-and-forget sink for user-visible messages.
pub trait Notifier: Send + Sync {
    fn show_success(&self, message: &str);
    fn show_error(&self, message: &str);
    fn show_warning(&self, _message: &str) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
    pub created_at: DateTime<Local>,
}

impl Toast {
    pub fn emoji(&self) -> &'static str {
        match self.level {
            ToastLevel::Success => "✅",
            ToastLevel::Error => "❌",
            ToastLevel::Warning => "⚠️",
        }
    }
}

/// Toast stack rendered by the GUI, newest last.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, level: ToastLevel, message: &str) -> Uuid {
        let toast = Toast { id: Uuid::new_v4(), level, message: message.to_string(), created_at: Local::now() };
        let id = toast.id;
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
        id
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts.lock().map(|t| t.clone()).unwrap_or_default()
    }

    pub fn dismiss(&self, id: Uuid) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.retain(|t| t.id != id);
        }
    }

    /// Drops every toast older than `ttl`; returns how many were removed.
    pub fn expire(&self, now: DateTime<Local>, ttl: Duration) -> usize {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::zero());
        let Ok(mut toasts) = self.toasts.lock() else { return 0 };
        let before = toasts.len();
        toasts.retain(|t| now - t.created_at < ttl);
        let removed = before - toasts.len();
        if removed > 0 {
            log::debug!("[TOAST] expired {} toast(s)", removed);
        }
        removed
    }
}

impl Notifier for ToastQueue {
    fn show_success(&self, message: &str) {
        self.push(ToastLevel::Success, message);
    }
    fn show_error(&self, message: &str) {
        self.push(ToastLevel::Error, message);
    }
    fn show_warning(&self, message: &str) {
        self.push(ToastLevel::Warning, message);
    }
}

/// Terminal sink used by the CLI.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show_success(&self, message: &str) {
        log::info!("{}", message);
        eprintln!("✅ {}", message);
    }
    fn show_error(&self, message: &str) {
        log::warn!("{}", message);
        eprintln!("❌ {}", message);
    }
    fn show_warning(&self, message: &str) {
        eprintln!("⚠️ {}", message);
    }
}
