//! Event repository abstraction.
//!
//! The persistence boundary the aggregate is stored through. The aggregate
//! never calls the repository itself; application-level code does. Any
//! `Event` crossing this boundary already satisfies its invariants, since
//! those are enforced at construction and mutation time.

use async_trait::async_trait;
use eventhub_core::error::DomainError;
use uuid::Uuid;

use super::aggregates::{Event, EventCategory, EventStatus};

/// Repository contract for storing and retrieving events.
///
/// Implementations provide atomic reads/writes per entity; no cross-entity
/// concurrency control is assumed here.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Fetch a single event by identity.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Event>, DomainError>;

    /// Fetch every stored event.
    async fn get_all(&self) -> Result<Vec<Event>, DomainError>;

    /// Fetch events in the given category.
    async fn get_by_category(&self, category: EventCategory) -> Result<Vec<Event>, DomainError>;

    /// Fetch events in the given lifecycle status.
    async fn get_by_status(&self, status: EventStatus) -> Result<Vec<Event>, DomainError>;

    /// Fetch events whose start lies strictly in the future, judged against
    /// the repository's own clock. Consistent with `Event::is_upcoming`.
    async fn get_upcoming_events(&self) -> Result<Vec<Event>, DomainError>;

    /// Fetch events taking place in the given city.
    async fn get_by_city(&self, city: &str) -> Result<Vec<Event>, DomainError>;

    /// Store a new event, assigning its identity. Returns the stored event.
    async fn add(&self, event: Event) -> Result<Event, DomainError>;

    /// Store a batch of new events.
    async fn add_range(&self, events: Vec<Event>) -> Result<(), DomainError>;

    /// Persist the current state of an already-stored event.
    async fn update(&self, event: &Event) -> Result<(), DomainError>;

    /// Remove a stored event.
    async fn delete(&self, event: &Event) -> Result<(), DomainError>;

    /// Whether an event with the given identity is stored.
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Number of stored events.
    async fn count(&self) -> Result<i64, DomainError>;
}
