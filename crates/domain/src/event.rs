//! Event — an immutable record of a notification sent to status listeners.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::status::AlarmStatus;

/// UTC instant used for event and capture times.
pub type Timestamp = DateTime<Utc>;

/// What the listeners were told.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SecurityEventKind {
    AlarmStatusChanged { status: AlarmStatus },
    CatDetected { present: bool },
}

/// A timestamped listener notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityEvent {
    pub id: EventId,
    pub kind: SecurityEventKind,
    pub timestamp: Timestamp,
}

impl SecurityEvent {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn new(kind: SecurityEventKind) -> Self {
        Self {
            id: EventId::new(),
            kind,
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn alarm_status_changed(status: AlarmStatus) -> Self {
        Self::new(SecurityEventKind::AlarmStatusChanged { status })
    }

    #[must_use]
    pub fn cat_detected(present: bool) -> Self {
        Self::new(SecurityEventKind::CatDetected { present })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_tag_kind_when_serialized() {
        let event = SecurityEvent::alarm_status_changed(AlarmStatus::PendingAlarm);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"]["type"], "alarm_status_changed");
        assert_eq!(json["kind"]["status"], "pending_alarm");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let event = SecurityEvent::cat_detected(true);
        let json = serde_json::to_string(&event).unwrap();
        let parsed: SecurityEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
