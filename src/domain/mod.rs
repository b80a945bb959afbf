//! Domain layer: notifications, delivery records and the relay state
//! machine.

pub mod delivery;
pub mod notification;
pub mod state;

pub use delivery::{DeliveryAttempt, DeliveryOutcome};
pub use notification::Notification;
pub use state::RelayState;
