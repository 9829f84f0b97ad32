//! # Client Events
//!
//! The enumerable "something changed" signals carried between views. Events
//! carry no payload beyond an optional filter selection; the receiving view
//! reloads its own data.

use serde::{Deserialize, Serialize};

/// All events that can be published to the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientEvent {
    /// Election data changed somewhere (vote cast, election created, edited
    /// or deleted). Dashboards should reload their election lists.
    ElectionsChanged,

    /// The admin chart filter selection changed. `election_id` of `None`
    /// means "all elections".
    ChartFilterChanged {
        /// The newly selected election, if any.
        election_id: Option<i64>,
    },
}

impl ClientEvent {
    /// The topic this event is delivered under.
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::ElectionsChanged => EventTopic::Elections,
            Self::ChartFilterChanged { .. } => EventTopic::ChartFilter,
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Election data changes.
    Elections,
    /// Chart filter selection changes.
    ChartFilter,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &ClientEvent) -> bool {
        self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic())
    }
}
