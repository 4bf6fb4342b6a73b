//! Commands for the Event Management context.

use chrono::{DateTime, Utc};
use eventhub_core::command::Command;
use uuid::Uuid;

use super::aggregates::EventCategory;
use super::value_objects::Location;

/// Command to schedule a new event. The event starts its life in `Draft`.
#[derive(Debug, Clone)]
pub struct ScheduleEvent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Event title (at least 5 characters after trimming).
    pub title: String,
    /// Event description (at least 10 characters after trimming).
    pub description: String,
    /// When the event starts. Must not be in the past.
    pub start_date: DateTime<Utc>,
    /// When the event ends. Must be strictly after `start_date`.
    pub end_date: DateTime<Utc>,
    /// Where the event takes place.
    pub location: Location,
    /// Event category.
    pub category: EventCategory,
    /// Ingestion origin (e.g., the scraper or organizer that produced it).
    pub source: String,
    /// Optional URL pointing back at the source.
    pub source_url: Option<String>,
}

impl Command for ScheduleEvent {
    fn command_type(&self) -> &'static str {
        "events.schedule"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to publish a draft event.
#[derive(Debug, Clone)]
pub struct ActivateEvent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event to activate.
    pub event_id: Uuid,
}

impl Command for ActivateEvent {
    fn command_type(&self) -> &'static str {
        "events.activate"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to cancel an active event.
#[derive(Debug, Clone)]
pub struct CancelEvent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event to cancel.
    pub event_id: Uuid,
}

impl Command for CancelEvent {
    fn command_type(&self) -> &'static str {
        "events.cancel"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to mark an active event as completed.
#[derive(Debug, Clone)]
pub struct CompleteEvent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event to complete.
    pub event_id: Uuid,
}

impl Command for CompleteEvent {
    fn command_type(&self) -> &'static str {
        "events.complete"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to move an event to new dates.
#[derive(Debug, Clone)]
pub struct RescheduleEvent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event to reschedule.
    pub event_id: Uuid,
    /// The new start. Must not be in the past.
    pub new_start_date: DateTime<Utc>,
    /// The new end. Must be strictly after `new_start_date`.
    pub new_end_date: DateTime<Utc>,
}

impl Command for RescheduleEvent {
    fn command_type(&self) -> &'static str {
        "events.reschedule"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to change an event's title.
#[derive(Debug, Clone)]
pub struct UpdateEventTitle {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event to update.
    pub event_id: Uuid,
    /// The new title (at least 5 characters after trimming).
    pub new_title: String,
}

impl Command for UpdateEventTitle {
    fn command_type(&self) -> &'static str {
        "events.update_title"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to change an event's description.
#[derive(Debug, Clone)]
pub struct UpdateEventDescription {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event to update.
    pub event_id: Uuid,
    /// The new description (at least 10 characters after trimming).
    pub new_description: String,
}

impl Command for UpdateEventDescription {
    fn command_type(&self) -> &'static str {
        "events.update_description"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
