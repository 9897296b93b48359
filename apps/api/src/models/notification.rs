use serde::{Deserialize, Serialize};

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    /// Progress messages such as "Enhancing description...".
    Info,
}

/// The transient overlay message. Ids are unique for the lifetime of the store.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}
