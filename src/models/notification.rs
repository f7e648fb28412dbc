//! Notification model for attendance alerts.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Something needing attention, such as a late arrival.
    Alert,
    /// Informational notice.
    Info,
    /// Confirmation of a completed action.
    Success,
}

/// A notification addressed to one user.
///
/// Late-arrival alerts are derived on demand from the day's records rather
/// than stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier for the notification.
    pub id: Uuid,
    /// The user this notification is addressed to.
    pub user_id: String,
    /// Short headline.
    pub title: String,
    /// Full message text.
    pub message: String,
    /// When the notification was raised.
    pub date: NaiveDateTime,
    /// Whether the user has seen it.
    pub is_read: bool,
    /// The visual category.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}
