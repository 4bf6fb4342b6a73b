//! Aggregate roots for the Event Management context.

use std::fmt;

use chrono::{DateTime, Utc};
use eventhub_core::clock::Clock;
use eventhub_core::error::DomainError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::commands::ScheduleEvent;
use super::value_objects::Location;

/// What kind of event this is. Purely descriptive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Category could not be determined at ingestion time.
    Unknown,
    Music,
    Technology,
    Sports,
    Arts,
    FoodAndDrink,
    Business,
    Education,
    Community,
    Entertainment,
    HealthAndWellness,
}

/// Lifecycle status of an event — the state machine variable.
///
/// `Draft` is the initial state; `Cancelled` and `Completed` are terminal.
/// `Postponed` exists in the vocabulary but no operation transitions into or
/// out of it; it is only ever observed on rehydrated data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    /// Newly scheduled, not yet published.
    Draft,
    /// Published and live.
    Active,
    /// Called off. Terminal.
    Cancelled,
    /// Took place and is over. Terminal.
    Completed,
    /// Declared but unreachable through the lifecycle operations.
    Postponed,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
            Self::Postponed => "Postponed",
        };
        f.write_str(name)
    }
}

/// Snapshot of a persisted event, consumed by [`Event::rehydrate`].
///
/// Persisted data already passed validation when it was written, so the
/// record carries every field verbatim, including identity, status, and the
/// audit timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Identity assigned by the persistence layer.
    pub id: Uuid,
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// When the event starts.
    pub start_date: DateTime<Utc>,
    /// When the event ends.
    pub end_date: DateTime<Utc>,
    /// Where the event takes place.
    pub location: Location,
    /// Event category.
    pub category: EventCategory,
    /// Lifecycle status.
    pub status: EventStatus,
    /// Ingestion origin.
    pub source: String,
    /// Optional URL pointing back at the source.
    pub source_url: Option<String>,
    /// Set once when the event was first constructed.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation.
    pub updated_at: DateTime<Utc>,
}

/// The aggregate root for an event.
///
/// Owns its [`Location`] and enforces every invariant at construction and at
/// each named mutation; there is no other way to change its fields. All
/// time-dependent checks and the derived temporal queries read the current
/// time through an injected [`Clock`].
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    /// `None` until the persistence layer assigns an identity.
    id: Option<Uuid>,
    title: String,
    description: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    location: Location,
    category: EventCategory,
    status: EventStatus,
    source: String,
    source_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn validated_title(title: &str) -> Result<String, DomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation("event title cannot be empty".into()));
    }
    if trimmed.chars().count() < 5 {
        return Err(DomainError::Validation(
            "event title must be at least 5 characters long".into(),
        ));
    }
    Ok(trimmed.to_owned())
}

fn validated_description(description: &str) -> Result<String, DomainError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(
            "event description cannot be empty".into(),
        ));
    }
    if trimmed.chars().count() < 10 {
        return Err(DomainError::Validation(
            "event description must be at least 10 characters long".into(),
        ));
    }
    Ok(trimmed.to_owned())
}

fn validate_schedule(
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), DomainError> {
    if start_date < now {
        return Err(DomainError::Validation(
            "event start date cannot be in the past".into(),
        ));
    }
    if end_date <= start_date {
        return Err(DomainError::Validation(
            "event end date must be after start date".into(),
        ));
    }
    Ok(())
}

impl Event {
    /// Schedules a new event in `Draft` status.
    ///
    /// Validates title, description, dates, and source in that order and
    /// fails on the first violation. Text fields are stored trimmed;
    /// `created_at` and `updated_at` are both set to the injected clock's
    /// current time. The location requirement is carried by the type system:
    /// the command owns an already-validated [`Location`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the title is shorter than 5
    /// characters, the description shorter than 10, the start date is in the
    /// past, the end date is not strictly after the start date, or the
    /// source is empty — all measured after trimming.
    pub fn new(command: &ScheduleEvent, clock: &dyn Clock) -> Result<Self, DomainError> {
        let now = clock.now();

        let title = validated_title(&command.title)?;
        let description = validated_description(&command.description)?;
        validate_schedule(command.start_date, command.end_date, now)?;

        let source = command.source.trim();
        if source.is_empty() {
            return Err(DomainError::Validation("event source cannot be empty".into()));
        }

        Ok(Self {
            id: None,
            title,
            description,
            start_date: command.start_date,
            end_date: command.end_date,
            location: command.location.clone(),
            category: command.category,
            status: EventStatus::Draft,
            source: source.to_owned(),
            source_url: command
                .source_url
                .as_deref()
                .map(|url| url.trim().to_owned()),
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuilds an event from persisted state, trusting it.
    ///
    /// Invariants were enforced when the record was written; this factory
    /// performs no validation and is the only way to observe statuses that
    /// the lifecycle operations cannot produce (e.g. `Postponed`).
    #[must_use]
    pub fn rehydrate(record: EventRecord) -> Self {
        Self {
            id: Some(record.id),
            title: record.title,
            description: record.description,
            start_date: record.start_date,
            end_date: record.end_date,
            location: record.location,
            category: record.category,
            status: record.status,
            source: record.source,
            source_url: record.source_url,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    /// Assigns the persistence-layer identity. One-shot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if an identity is already assigned.
    pub fn assign_id(&mut self, id: Uuid) -> Result<(), DomainError> {
        if self.id.is_some() {
            return Err(DomainError::Validation(
                "event identity is already assigned".into(),
            ));
        }
        self.id = Some(id);
        Ok(())
    }

    /// Publishes a draft event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` unless the event is in
    /// `Draft`.
    pub fn activate(&mut self, clock: &dyn Clock) -> Result<(), DomainError> {
        if self.status != EventStatus::Draft {
            return Err(DomainError::InvalidStateTransition {
                operation: "activate",
                status: self.status.to_string(),
            });
        }
        self.status = EventStatus::Active;
        self.updated_at = clock.now();
        Ok(())
    }

    /// Calls off an active event. `Cancelled` is terminal.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` unless the event is in
    /// `Active`.
    pub fn cancel(&mut self, clock: &dyn Clock) -> Result<(), DomainError> {
        if self.status != EventStatus::Active {
            return Err(DomainError::InvalidStateTransition {
                operation: "cancel",
                status: self.status.to_string(),
            });
        }
        self.status = EventStatus::Cancelled;
        self.updated_at = clock.now();
        Ok(())
    }

    /// Marks an active event as having taken place. `Completed` is terminal.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` unless the event is in
    /// `Active`.
    pub fn mark_completed(&mut self, clock: &dyn Clock) -> Result<(), DomainError> {
        if self.status != EventStatus::Active {
            return Err(DomainError::InvalidStateTransition {
                operation: "complete",
                status: self.status.to_string(),
            });
        }
        self.status = EventStatus::Completed;
        self.updated_at = clock.now();
        Ok(())
    }

    /// Changes the title. Allowed in any status.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the new title is empty or
    /// shorter than 5 characters after trimming.
    pub fn update_title(&mut self, new_title: &str, clock: &dyn Clock) -> Result<(), DomainError> {
        self.title = validated_title(new_title)?;
        self.updated_at = clock.now();
        Ok(())
    }

    /// Changes the description. Allowed in any status.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the new description is empty
    /// or shorter than 10 characters after trimming.
    pub fn update_description(
        &mut self,
        new_description: &str,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        self.description = validated_description(new_description)?;
        self.updated_at = clock.now();
        Ok(())
    }

    /// Moves the event to new dates. Both dates are validated before either
    /// is written, so a failed reschedule leaves the event untouched.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the new start is in the past
    /// at call time or the new end is not strictly after the new start.
    pub fn reschedule(
        &mut self,
        new_start_date: DateTime<Utc>,
        new_end_date: DateTime<Utc>,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        let now = clock.now();
        validate_schedule(new_start_date, new_end_date, now)?;

        self.start_date = new_start_date;
        self.end_date = new_end_date;
        self.updated_at = now;
        Ok(())
    }

    /// True iff the clock's current time falls within
    /// `[start_date, end_date]`, bounds inclusive.
    #[must_use]
    pub fn is_happening_now(&self, clock: &dyn Clock) -> bool {
        let now = clock.now();
        now >= self.start_date && now <= self.end_date
    }

    /// True iff the clock's current time is strictly before the start.
    #[must_use]
    pub fn is_upcoming(&self, clock: &dyn Clock) -> bool {
        clock.now() < self.start_date
    }

    /// True iff the clock's current time is strictly after the end.
    #[must_use]
    pub fn is_past(&self, clock: &dyn Clock) -> bool {
        clock.now() > self.end_date
    }

    /// Scheduled duration in fractional hours.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn duration_in_hours(&self) -> f64 {
        (self.end_date - self.start_date).num_milliseconds() as f64 / 3_600_000.0
    }

    /// Identity, if the persistence layer has assigned one.
    #[must_use]
    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    /// Event title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Event description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the event starts.
    #[must_use]
    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// When the event ends.
    #[must_use]
    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Where the event takes place.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Event category.
    #[must_use]
    pub fn category(&self) -> EventCategory {
        self.category
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> EventStatus {
        self.status
    }

    /// Ingestion origin.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Optional URL pointing back at the source.
    #[must_use]
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    /// Set once at construction.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Refreshed on every successful mutation.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.start_date.format("%Y-%m-%d");
        match self.id {
            Some(id) => write!(
                f,
                "Event #{id}: {} on {date} at {}",
                self.title,
                self.location.city()
            ),
            None => write!(
                f,
                "Event #new: {} on {date} at {}",
                self.title,
                self.location.city()
            ),
        }
    }
}
