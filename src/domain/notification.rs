//! Inbound change notifications.

use chrono::{DateTime, Utc};

/// One notification received from the subscription channel.
///
/// The payload is treated as opaque text: the trigger side typically
/// serializes a flat `ROW(...)::TEXT` tuple, and the relay forwards it
/// without parsing. Immutable once constructed; consumed exactly once by
/// a delivery attempt and then discarded.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Channel the notification arrived on.
    pub channel: String,
    /// Opaque payload text as delivered by the source.
    pub payload: String,
    /// Arrival timestamp assigned by the relay.
    pub received_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a notification stamped with the current time.
    #[must_use]
    pub fn new(channel: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            payload: payload.into(),
            received_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stamps_arrival_time() {
        let before = Utc::now();
        let notification = Notification::new("data_changes", "(1,alice)");
        assert_eq!(notification.channel, "data_changes");
        assert_eq!(notification.payload, "(1,alice)");
        assert!(notification.received_at >= before);
    }
}
