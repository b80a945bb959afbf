//! # notify-relay
//!
//! Relays PostgreSQL `LISTEN`/`NOTIFY` change notifications to an external
//! HTTP endpoint. The service subscribes to one named channel and forwards
//! every payload it receives as a JSON `POST`, with at-least-once semantics:
//! each dequeued notification produces exactly one delivery attempt, and a
//! failed delivery is logged without disturbing the subscription.
//!
//! ## Architecture
//!
//! ```text
//! PostgreSQL (NOTIFY <channel>)
//!     │
//!     ├── PgSource (source/) ── NotificationSource trait
//!     │
//!     ├── Relay run loop (service/)
//!     │       per-notification delivery tasks, bounded drain on stop
//!     │
//!     └── HttpSink (sink/) ── Sink trait ──► POST {"data": <payload>}
//! ```
//!
//! The source and sink sit behind traits so the run loop can be driven by
//! fakes in tests; the state machine
//! `Idle → Connecting → Listening → Draining → Closed` is observable
//! through [`service::RelayHandle`].

pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod sink;
pub mod source;
