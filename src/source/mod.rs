//! Notification source seam.
//!
//! The relay run loop only sees the [`NotificationSource`] trait; the
//! production implementation is [`postgres::PgSource`], and tests drive
//! the loop with channel-backed fakes.

pub mod postgres;

use async_trait::async_trait;

use crate::domain::Notification;
use crate::error::RelayError;

/// A connected subscription that yields notifications one at a time.
///
/// The session is owned exclusively by the relay; `close` must be called
/// on every exit path and must be idempotent.
#[async_trait]
pub trait NotificationSource: Send {
    /// Waits for the next notification.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Connection`] when the session is lost and
    /// cannot be re-established. That error is fatal to the run.
    async fn recv(&mut self) -> Result<Notification, RelayError>;

    /// Releases the subscription session. Calling it twice is a no-op.
    async fn close(&mut self);
}

pub use postgres::PgSource;
