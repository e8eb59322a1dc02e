//! Participant notifications.
//!
//! The session only asks for a participant to be told their number; how that
//! happens belongs to whoever owns delivery. [`Notifier`] is that seam.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::NotifyError;

/// Assignment notice for one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub email: String,
    pub number: u32,
    /// Collection name at draw time
    pub collection: String,
    pub sent_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(email: impl Into<String>, number: u32, collection: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            number,
            collection: collection.into(),
            sent_at: Utc::now(),
        }
    }

    /// Human-readable confirmation text.
    pub fn message(&self) -> String {
        format!("Email sent to {} with assignment #{}", self.email, self.number)
    }
}

/// Delivers notifications to participants.
///
/// Fire-and-forget: the manager logs failures and carries on.
pub trait Notifier {
    fn notify(&mut self, notification: &Notification) -> Result<(), NotifyError>;
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, notification: &Notification) -> Result<(), NotifyError> {
        (**self).notify(notification)
    }
}

/// Emits each notification as a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: &Notification) -> Result<(), NotifyError> {
        tracing::info!(
            email = %notification.email,
            number = notification.number,
            collection = %notification.collection,
            "{}",
            notification.message()
        );
        Ok(())
    }
}

/// Keeps notifications in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> &[Notification] {
        &self.sent
    }

    pub fn clear(&mut self) {
        self.sent.clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: &Notification) -> Result<(), NotifyError> {
        self.sent.push(notification.clone());
        Ok(())
    }
}

/// Drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&mut self, _notification: &Notification) -> Result<(), NotifyError> {
        Ok(())
    }
}
