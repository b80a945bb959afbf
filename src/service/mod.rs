//! Service layer: the relay run loop and its control handle.
//!
//! [`Relay`] bridges a [`crate::source::NotificationSource`] to a
//! [`crate::sink::Sink`] until cancelled, with a bounded drain on
//! shutdown.

pub mod relay;

pub use relay::{Relay, RelayHandle, RelayOptions};
