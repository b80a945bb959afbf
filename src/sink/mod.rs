//! Delivery sink seam.
//!
//! The relay hands every notification to a [`Sink`]; the production
//! implementation is [`http::HttpSink`].

pub mod http;

use async_trait::async_trait;

use crate::domain::Notification;
use crate::error::RelayError;

/// Destination for relayed notifications.
#[async_trait]
pub trait Sink: Send + Sync {
    /// Delivers one notification, returning the 2xx status the sink
    /// answered with.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Delivery`] on transport failure or any
    /// non-2xx response. Delivery errors are local to the notification
    /// and never affect the subscription.
    async fn deliver(&self, notification: &Notification) -> Result<u16, RelayError>;

    /// Target description used in delivery logs.
    fn endpoint(&self) -> &str;
}

pub use http::HttpSink;
