//! Command handlers for the Event Management context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: load the aggregate, execute the operation,
//! persist the new state. The repository's load/save boundary is the
//! serialization point; nothing here guards concurrent writers.

use eventhub_core::clock::Clock;
use eventhub_core::command::Command;
use eventhub_core::error::DomainError;
use uuid::Uuid;

use crate::domain::aggregates::Event;
use crate::domain::commands::{
    ActivateEvent, CancelEvent, CompleteEvent, RescheduleEvent, ScheduleEvent,
    UpdateEventDescription, UpdateEventTitle,
};
use crate::domain::repository::EventRepository;

async fn load_event(repo: &dyn EventRepository, event_id: Uuid) -> Result<Event, DomainError> {
    repo.get_by_id(event_id)
        .await?
        .ok_or(DomainError::NotFound(event_id))
}

/// Handles `ScheduleEvent`: constructs the aggregate and stores it, letting
/// the repository assign its identity.
///
/// # Errors
///
/// Returns `DomainError::Validation` when construction fails, or whatever
/// the repository surfaces on `add`.
pub async fn handle_schedule_event(
    command: &ScheduleEvent,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<Event, DomainError> {
    let event = Event::new(command, clock)?;
    let event = repo.add(event).await?;

    tracing::info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        event_id = ?event.id(),
        "event scheduled"
    );
    Ok(event)
}

/// Handles `ActivateEvent`: loads the event, activates it, persists it.
///
/// # Errors
///
/// Returns `DomainError::NotFound` when the event does not exist,
/// `DomainError::InvalidStateTransition` when it is not in `Draft`, or
/// whatever the repository surfaces.
pub async fn handle_activate_event(
    command: &ActivateEvent,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<Event, DomainError> {
    let mut event = load_event(repo, command.event_id).await?;
    event.activate(clock)?;
    repo.update(&event).await?;

    tracing::info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        event_id = %command.event_id,
        "event activated"
    );
    Ok(event)
}

/// Handles `CancelEvent`: loads the event, cancels it, persists it.
///
/// # Errors
///
/// Returns `DomainError::NotFound` when the event does not exist,
/// `DomainError::InvalidStateTransition` when it is not in `Active`, or
/// whatever the repository surfaces.
pub async fn handle_cancel_event(
    command: &CancelEvent,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<Event, DomainError> {
    let mut event = load_event(repo, command.event_id).await?;
    event.cancel(clock)?;
    repo.update(&event).await?;

    tracing::info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        event_id = %command.event_id,
        "event cancelled"
    );
    Ok(event)
}

/// Handles `CompleteEvent`: loads the event, marks it completed, persists it.
///
/// # Errors
///
/// Returns `DomainError::NotFound` when the event does not exist,
/// `DomainError::InvalidStateTransition` when it is not in `Active`, or
/// whatever the repository surfaces.
pub async fn handle_complete_event(
    command: &CompleteEvent,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<Event, DomainError> {
    let mut event = load_event(repo, command.event_id).await?;
    event.mark_completed(clock)?;
    repo.update(&event).await?;

    tracing::info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        event_id = %command.event_id,
        "event completed"
    );
    Ok(event)
}

/// Handles `RescheduleEvent`: loads the event, moves its dates, persists it.
///
/// # Errors
///
/// Returns `DomainError::NotFound` when the event does not exist,
/// `DomainError::Validation` when the new dates are invalid, or whatever the
/// repository surfaces.
pub async fn handle_reschedule_event(
    command: &RescheduleEvent,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<Event, DomainError> {
    let mut event = load_event(repo, command.event_id).await?;
    event.reschedule(command.new_start_date, command.new_end_date, clock)?;
    repo.update(&event).await?;

    tracing::info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        event_id = %command.event_id,
        "event rescheduled"
    );
    Ok(event)
}

/// Handles `UpdateEventTitle`.
///
/// # Errors
///
/// Returns `DomainError::NotFound` when the event does not exist,
/// `DomainError::Validation` when the new title is invalid, or whatever the
/// repository surfaces.
pub async fn handle_update_event_title(
    command: &UpdateEventTitle,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<Event, DomainError> {
    let mut event = load_event(repo, command.event_id).await?;
    event.update_title(&command.new_title, clock)?;
    repo.update(&event).await?;

    tracing::info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        event_id = %command.event_id,
        "event title updated"
    );
    Ok(event)
}

/// Handles `UpdateEventDescription`.
///
/// # Errors
///
/// Returns `DomainError::NotFound` when the event does not exist,
/// `DomainError::Validation` when the new description is invalid, or
/// whatever the repository surfaces.
pub async fn handle_update_event_description(
    command: &UpdateEventDescription,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<Event, DomainError> {
    let mut event = load_event(repo, command.event_id).await?;
    event.update_description(&command.new_description, clock)?;
    repo.update(&event).await?;

    tracing::info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        event_id = %command.event_id,
        "event description updated"
    );
    Ok(event)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Duration, TimeZone, Utc};
    use eventhub_core::error::DomainError;
    use eventhub_events::application::command_handlers::{
        handle_activate_event, handle_cancel_event, handle_complete_event,
        handle_reschedule_event, handle_schedule_event, handle_update_event_description,
        handle_update_event_title,
    };
    use eventhub_events::domain::aggregates::{Event, EventCategory, EventStatus};
    use eventhub_events::domain::commands::{
        ActivateEvent, CancelEvent, CompleteEvent, RescheduleEvent, ScheduleEvent,
        UpdateEventDescription, UpdateEventTitle,
    };
    use eventhub_events::domain::repository::EventRepository;
    use eventhub_events::domain::value_objects::Location;
    use eventhub_test_support::{FailingEventRepository, FixedClock, InMemoryEventRepository};
    use uuid::Uuid;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
    }

    fn repository() -> InMemoryEventRepository {
        InMemoryEventRepository::new(Arc::new(FixedClock(fixed_now())))
    }

    fn schedule_command() -> ScheduleEvent {
        ScheduleEvent {
            correlation_id: Uuid::new_v4(),
            title: "Tech Meetup".into(),
            description: "Monthly gathering".into(),
            start_date: fixed_now() + Duration::days(1),
            end_date: fixed_now() + Duration::days(1) + Duration::hours(2),
            location: Location::new("1 Main St", "Lisbon", "Portugal", None, None).unwrap(),
            category: EventCategory::Technology,
            source: "organizer".into(),
            source_url: None,
        }
    }

    async fn scheduled(repo: &InMemoryEventRepository) -> Event {
        handle_schedule_event(&schedule_command(), &FixedClock(fixed_now()), repo)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_handle_schedule_event_stores_a_draft_with_identity() {
        // Arrange
        let repo = repository();

        // Act
        let event = scheduled(&repo).await;

        // Assert
        let id = event.id().expect("repository assigns an identity");
        assert_eq!(event.status(), EventStatus::Draft);

        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.title(), "Tech Meetup");
        assert_eq!(stored.status(), EventStatus::Draft);
    }

    #[tokio::test]
    async fn test_handle_schedule_event_rejects_invalid_input_without_storing() {
        // Arrange
        let repo = repository();
        let mut command = schedule_command();
        command.title = "Expo".into();

        // Act
        let result = handle_schedule_event(&command, &FixedClock(fixed_now()), &repo).await;

        // Assert
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_handle_activate_event_persists_the_transition() {
        // Arrange
        let repo = repository();
        let event = scheduled(&repo).await;
        let command = ActivateEvent {
            correlation_id: Uuid::new_v4(),
            event_id: event.id().unwrap(),
        };

        // Act
        let activated = handle_activate_event(&command, &FixedClock(fixed_now()), &repo)
            .await
            .unwrap();

        // Assert
        assert_eq!(activated.status(), EventStatus::Active);

        let stored = repo.get_by_id(command.event_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), EventStatus::Active);
    }

    #[tokio::test]
    async fn test_handle_activate_event_fails_for_unknown_event() {
        let repo = repository();
        let command = ActivateEvent {
            correlation_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
        };

        let result = handle_activate_event(&command, &FixedClock(fixed_now()), &repo).await;
        assert!(matches!(result, Err(DomainError::NotFound(id)) if id == command.event_id));
    }

    #[tokio::test]
    async fn test_handle_cancel_event_requires_an_active_event() {
        // Arrange — still a draft.
        let repo = repository();
        let event = scheduled(&repo).await;
        let command = CancelEvent {
            correlation_id: Uuid::new_v4(),
            event_id: event.id().unwrap(),
        };

        // Act
        let result = handle_cancel_event(&command, &FixedClock(fixed_now()), &repo).await;

        // Assert — rejected and the stored state untouched.
        assert!(matches!(
            result,
            Err(DomainError::InvalidStateTransition { .. })
        ));
        let stored = repo.get_by_id(command.event_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), EventStatus::Draft);
    }

    #[tokio::test]
    async fn test_handle_complete_event_persists_the_transition() {
        // Arrange
        let repo = repository();
        let event = scheduled(&repo).await;
        let event_id = event.id().unwrap();
        let correlation_id = Uuid::new_v4();

        handle_activate_event(
            &ActivateEvent {
                correlation_id,
                event_id,
            },
            &FixedClock(fixed_now()),
            &repo,
        )
        .await
        .unwrap();

        // Act
        let completed = handle_complete_event(
            &CompleteEvent {
                correlation_id,
                event_id,
            },
            &FixedClock(fixed_now()),
            &repo,
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(completed.status(), EventStatus::Completed);
        let stored = repo.get_by_id(event_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), EventStatus::Completed);
    }

    #[tokio::test]
    async fn test_handle_reschedule_event_persists_the_new_dates() {
        // Arrange
        let repo = repository();
        let event = scheduled(&repo).await;
        let new_start = fixed_now() + Duration::days(7);
        let command = RescheduleEvent {
            correlation_id: Uuid::new_v4(),
            event_id: event.id().unwrap(),
            new_start_date: new_start,
            new_end_date: new_start + Duration::hours(3),
        };

        // Act
        handle_reschedule_event(&command, &FixedClock(fixed_now()), &repo)
            .await
            .unwrap();

        // Assert
        let stored = repo.get_by_id(command.event_id).await.unwrap().unwrap();
        assert_eq!(stored.start_date(), new_start);
        assert_eq!(stored.end_date(), new_start + Duration::hours(3));
    }

    #[tokio::test]
    async fn test_handle_update_event_title_persists_the_new_title() {
        let repo = repository();
        let event = scheduled(&repo).await;
        let command = UpdateEventTitle {
            correlation_id: Uuid::new_v4(),
            event_id: event.id().unwrap(),
            new_title: "Rust Meetup".into(),
        };

        handle_update_event_title(&command, &FixedClock(fixed_now()), &repo)
            .await
            .unwrap();

        let stored = repo.get_by_id(command.event_id).await.unwrap().unwrap();
        assert_eq!(stored.title(), "Rust Meetup");
    }

    #[tokio::test]
    async fn test_handle_update_event_description_persists_the_new_description() {
        let repo = repository();
        let event = scheduled(&repo).await;
        let command = UpdateEventDescription {
            correlation_id: Uuid::new_v4(),
            event_id: event.id().unwrap(),
            new_description: "A quarterly gathering from now on".into(),
        };

        handle_update_event_description(&command, &FixedClock(fixed_now()), &repo)
            .await
            .unwrap();

        let stored = repo.get_by_id(command.event_id).await.unwrap().unwrap();
        assert_eq!(stored.description(), "A quarterly gathering from now on");
    }

    #[tokio::test]
    async fn test_handlers_surface_infrastructure_errors() {
        let result = handle_schedule_event(
            &schedule_command(),
            &FixedClock(fixed_now()),
            &FailingEventRepository,
        )
        .await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
