//! # VC Bus - Cross-View Notification Bus
//!
//! Decouples sibling views: a state change in one (vote cast, election
//! edited) triggers a refresh in another without a shared owner.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │ Voting view  │                    │  Dashboard   │
//! │              │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! ## Semantics
//!
//! - Fire-and-forget: no buffering for absent subscribers, no replay.
//!   A subscriber created after a publish never sees that event.
//! - Channels are independent: a filter on one topic never yields the
//!   other's events.
//! - Listener failure is isolated: every subscriber pulls from its own
//!   receiver, so one consumer cannot abort delivery to the rest.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{ClientEvent, EventFilter, EventTopic};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before older ones are dropped.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;
