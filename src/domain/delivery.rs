//! Delivery attempt records.
//!
//! A [`DeliveryAttempt`] exists only to be logged: it captures the outcome
//! of one sink call and is then dropped. It is the natural extension point
//! for a durable outbox, but this relay does not persist it.

use std::time::Duration;

use uuid::Uuid;

use super::Notification;
use crate::error::RelayError;

/// Outcome of one sink call.
#[derive(Debug, Clone)]
pub enum DeliveryOutcome {
    /// The sink accepted the payload with a 2xx status.
    Delivered {
        /// HTTP status returned by the sink.
        status: u16,
    },
    /// The call failed or the sink returned a non-2xx status.
    Failed {
        /// HTTP status, if a response was received at all.
        status: Option<u16>,
        /// Failure description.
        reason: String,
    },
}

/// Transient record of one delivery attempt against the sink.
#[derive(Debug, Clone)]
pub struct DeliveryAttempt {
    /// Unique id for correlating log lines.
    pub attempt_id: Uuid,
    /// Channel the notification arrived on.
    pub channel: String,
    /// Target endpoint the payload was sent to.
    pub endpoint: String,
    /// Payload that was (or was not) delivered. Retained on failure so
    /// the log line is sufficient for manual replay.
    pub payload: String,
    /// Success or failure of the call.
    pub outcome: DeliveryOutcome,
    /// Wall time spent on the call.
    pub elapsed: Duration,
}

impl DeliveryAttempt {
    /// Builds a successful attempt record.
    #[must_use]
    pub fn delivered(
        notification: &Notification,
        endpoint: &str,
        status: u16,
        elapsed: Duration,
    ) -> Self {
        Self {
            attempt_id: Uuid::new_v4(),
            channel: notification.channel.clone(),
            endpoint: endpoint.to_string(),
            payload: notification.payload.clone(),
            outcome: DeliveryOutcome::Delivered { status },
            elapsed,
        }
    }

    /// Builds a failed attempt record from the delivery error.
    #[must_use]
    pub fn failed(
        notification: &Notification,
        endpoint: &str,
        error: &RelayError,
        elapsed: Duration,
    ) -> Self {
        let status = match error {
            RelayError::Delivery { status, .. } => *status,
            _ => None,
        };
        Self {
            attempt_id: Uuid::new_v4(),
            channel: notification.channel.clone(),
            endpoint: endpoint.to_string(),
            payload: notification.payload.clone(),
            outcome: DeliveryOutcome::Failed {
                status,
                reason: error.to_string(),
            },
            elapsed,
        }
    }

    /// Returns `true` if the sink accepted the payload.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, DeliveryOutcome::Delivered { .. })
    }

    /// Emits the structured log line for this attempt.
    pub fn record(&self) {
        match &self.outcome {
            DeliveryOutcome::Delivered { status } => {
                tracing::info!(
                    attempt_id = %self.attempt_id,
                    channel = %self.channel,
                    endpoint = %self.endpoint,
                    status = *status,
                    elapsed_ms = self.elapsed.as_millis() as u64,
                    "delivery succeeded"
                );
            }
            DeliveryOutcome::Failed { status, reason } => {
                tracing::warn!(
                    attempt_id = %self.attempt_id,
                    channel = %self.channel,
                    endpoint = %self.endpoint,
                    status = status.map(i64::from).unwrap_or(-1),
                    reason = %reason,
                    payload = %self.payload,
                    elapsed_ms = self.elapsed.as_millis() as u64,
                    "delivery failed"
                );
            }
        }
    }
}
