//! Relay lifecycle state machine.

/// Lifecycle states of a relay run.
///
/// `Idle → Connecting → Listening → Draining → Closed`, with
/// `Connecting → Idle` on a failed connect and `Listening → Draining`
/// on either cancellation or connection loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    /// Not started, or a connect attempt failed.
    Idle,
    /// Establishing the subscription session.
    Connecting,
    /// Subscribed and dispatching notifications.
    Listening,
    /// No longer accepting notifications; waiting for in-flight
    /// deliveries up to the drain timeout.
    Draining,
    /// Connection released; terminal.
    Closed,
}

impl RelayState {
    /// Returns `true` once the relay can never leave this state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns `true` if `next` is a legal successor of `self`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Connecting)
                | (Self::Connecting, Self::Idle | Self::Listening)
                | (Self::Listening, Self::Draining)
                | (Self::Draining, Self::Closed)
        )
    }
}

impl std::fmt::Display for RelayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Connecting => "connecting",
            Self::Listening => "listening",
            Self::Draining => "draining",
            Self::Closed => "closed",
        };
        write!(f, "{name}")
    }
}
