//! Query handlers for the Event Management context.
//!
//! Read-only functions that fetch events through the repository contract and
//! map them to serializable view DTOs. Filtering itself belongs to the
//! repository implementation.

use chrono::{DateTime, Utc};
use eventhub_core::error::DomainError;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::{Event, EventCategory, EventStatus};
use crate::domain::repository::EventRepository;

/// Read-only view of an event aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct EventView {
    /// Identity, if the event has been stored.
    pub id: Option<Uuid>,
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// When the event starts.
    pub start_date: DateTime<Utc>,
    /// When the event ends.
    pub end_date: DateTime<Utc>,
    /// Street address.
    pub address: String,
    /// City name.
    pub city: String,
    /// Country name.
    pub country: String,
    /// Latitude in degrees, when known.
    pub latitude: Option<f64>,
    /// Longitude in degrees, when known.
    pub longitude: Option<f64>,
    /// Event category.
    pub category: EventCategory,
    /// Lifecycle status.
    pub status: EventStatus,
    /// Ingestion origin.
    pub source: String,
    /// Optional URL pointing back at the source.
    pub source_url: Option<String>,
    /// Set once at construction.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation.
    pub updated_at: DateTime<Utc>,
}

impl From<&Event> for EventView {
    fn from(event: &Event) -> Self {
        let location = event.location();
        Self {
            id: event.id(),
            title: event.title().to_owned(),
            description: event.description().to_owned(),
            start_date: event.start_date(),
            end_date: event.end_date(),
            address: location.address().to_owned(),
            city: location.city().to_owned(),
            country: location.country().to_owned(),
            latitude: location.latitude(),
            longitude: location.longitude(),
            category: event.category(),
            status: event.status(),
            source: event.source().to_owned(),
            source_url: event.source_url().map(ToOwned::to_owned),
            created_at: event.created_at(),
            updated_at: event.updated_at(),
        }
    }
}

fn views(events: &[Event]) -> Vec<EventView> {
    events.iter().map(EventView::from).collect()
}

/// Retrieves a single event by identity.
///
/// # Errors
///
/// Returns `DomainError::NotFound` when no event has that identity, or
/// whatever the repository surfaces.
pub async fn get_event_by_id(
    event_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<EventView, DomainError> {
    let event = repo
        .get_by_id(event_id)
        .await?
        .ok_or(DomainError::NotFound(event_id))?;
    Ok(EventView::from(&event))
}

/// Lists every stored event.
///
/// # Errors
///
/// Returns whatever the repository surfaces.
pub async fn list_all_events(repo: &dyn EventRepository) -> Result<Vec<EventView>, DomainError> {
    Ok(views(&repo.get_all().await?))
}

/// Lists events whose start lies strictly in the future of the repository's
/// clock.
///
/// # Errors
///
/// Returns whatever the repository surfaces.
pub async fn list_upcoming_events(
    repo: &dyn EventRepository,
) -> Result<Vec<EventView>, DomainError> {
    Ok(views(&repo.get_upcoming_events().await?))
}

/// Lists events in the given category.
///
/// # Errors
///
/// Returns whatever the repository surfaces.
pub async fn list_events_by_category(
    category: EventCategory,
    repo: &dyn EventRepository,
) -> Result<Vec<EventView>, DomainError> {
    Ok(views(&repo.get_by_category(category).await?))
}

/// Lists events in the given lifecycle status.
///
/// # Errors
///
/// Returns whatever the repository surfaces.
pub async fn list_events_by_status(
    status: EventStatus,
    repo: &dyn EventRepository,
) -> Result<Vec<EventView>, DomainError> {
    Ok(views(&repo.get_by_status(status).await?))
}

/// Lists events taking place in the given city.
///
/// # Errors
///
/// Returns whatever the repository surfaces.
pub async fn list_events_by_city(
    city: &str,
    repo: &dyn EventRepository,
) -> Result<Vec<EventView>, DomainError> {
    Ok(views(&repo.get_by_city(city).await?))
}
