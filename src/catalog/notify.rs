use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
  Info,
  Error,
}

/// Short user-facing message emitted by catalog operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
  pub level: NotificationLevel,
  pub title: String,
  pub description: String,
}

impl Notification {
  pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      level: NotificationLevel::Info,
      title: title.into(),
      description: description.into(),
    }
  }

  pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      level: NotificationLevel::Error,
      title: title.into(),
      description: description.into(),
    }
  }

  pub fn is_error(&self) -> bool {
    self.level == NotificationLevel::Error
  }
}

/// Where notifications go (toast, console, log...)
pub trait NotificationSink: Send + Sync {
  fn notify(&self, notification: Notification);
}

impl<F> NotificationSink for F
where
  F: Fn(Notification) + Send + Sync,
{
  fn notify(&self, notification: Notification) {
    self(notification)
  }
}

/// Routes notifications into the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
  fn notify(&self, notification: Notification) {
    match notification.level {
      NotificationLevel::Info => {
        tracing::info!("{}: {}", notification.title, notification.description)
      }
      NotificationLevel::Error => {
        tracing::error!("{}: {}", notification.title, notification.description)
      }
    }
  }
}

/// Buffers notifications until drained
#[derive(Debug, Default)]
pub struct CollectingSink {
  items: Mutex<Vec<Notification>>,
}

impl CollectingSink {
  pub fn new() -> Self {
    Self::default()
  }

  /// Remove and return everything collected so far
  pub fn take(&self) -> Vec<Notification> {
    std::mem::take(&mut *self.items.lock())
  }

  pub fn len(&self) -> usize {
    self.items.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.lock().is_empty()
  }
}

impl NotificationSink for CollectingSink {
  fn notify(&self, notification: Notification) {
    self.items.lock().push(notification);
  }
}
