//! Relay error types.
//!
//! [`RelayError`] is the central error type. The variants split along the
//! propagation policy: `Config` and `Connection` are fatal to the current
//! run and surface to the caller, `Delivery` is local to one notification
//! and is logged where it happens, never escalated.

/// Central error enum for the relay.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Missing or invalid configuration; detected at startup.
    #[error("configuration error: {0}")]
    Config(String),

    /// The subscription to the notification source could not be
    /// established or was lost and could not be re-established.
    #[error("connection error: {0}")]
    Connection(String),

    /// A sink call failed or returned a non-2xx status. Carries the HTTP
    /// status when a response was received at all.
    #[error("delivery failed: {reason}")]
    Delivery {
        /// HTTP status returned by the sink, if the call got that far.
        status: Option<u16>,
        /// Human-readable failure description.
        reason: String,
    },

    /// The relay task ended abnormally (panic or forced abort).
    #[error("internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// Builds a [`RelayError::Delivery`] for a non-2xx sink response.
    #[must_use]
    pub fn delivery_status(status: u16) -> Self {
        Self::Delivery {
            status: Some(status),
            reason: format!("sink returned status {status}"),
        }
    }

    /// Returns `true` for variants that end the current run.
    ///
    /// `Delivery` errors are recovered per notification and never
    /// terminate the subscription.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        match self {
            Self::Config(_) | Self::Connection(_) | Self::Internal(_) => true,
            Self::Delivery { .. } => false,
        }
    }
}
