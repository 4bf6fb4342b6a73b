//! Test repositories — `EventRepository` implementations for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use eventhub_core::clock::Clock;
use eventhub_core::error::DomainError;
use eventhub_events::domain::aggregates::{Event, EventCategory, EventStatus};
use eventhub_events::domain::repository::EventRepository;
use uuid::Uuid;

/// An event repository backed by a `HashMap`. A test double, not a storage
/// engine: every method works on clones of the stored aggregates.
///
/// `get_upcoming_events` is judged against the injected clock so tests can
/// pin "now".
#[derive(Clone)]
pub struct InMemoryEventRepository {
    clock: Arc<dyn Clock>,
    events: Arc<Mutex<HashMap<Uuid, Event>>>,
}

impl InMemoryEventRepository {
    /// Create an empty repository that reads time from `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            events: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn stored_id(event: &Event) -> Result<Uuid, DomainError> {
        event.id().ok_or_else(|| {
            DomainError::Validation("event has no identity; store it with add first".into())
        })
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Event>, DomainError> {
        Ok(self.events.lock().unwrap().get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Event>, DomainError> {
        Ok(self.events.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_category(&self, category: EventCategory) -> Result<Vec<Event>, DomainError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .values()
            .filter(|event| event.category() == category)
            .cloned()
            .collect())
    }

    async fn get_by_status(&self, status: EventStatus) -> Result<Vec<Event>, DomainError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .values()
            .filter(|event| event.status() == status)
            .cloned()
            .collect())
    }

    async fn get_upcoming_events(&self) -> Result<Vec<Event>, DomainError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .values()
            .filter(|event| event.is_upcoming(self.clock.as_ref()))
            .cloned()
            .collect())
    }

    async fn get_by_city(&self, city: &str) -> Result<Vec<Event>, DomainError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .values()
            .filter(|event| event.location().city().eq_ignore_ascii_case(city))
            .cloned()
            .collect())
    }

    async fn add(&self, mut event: Event) -> Result<Event, DomainError> {
        let id = Uuid::new_v4();
        event.assign_id(id)?;
        self.events.lock().unwrap().insert(id, event.clone());
        Ok(event)
    }

    async fn add_range(&self, events: Vec<Event>) -> Result<(), DomainError> {
        for event in events {
            self.add(event).await?;
        }
        Ok(())
    }

    async fn update(&self, event: &Event) -> Result<(), DomainError> {
        let id = Self::stored_id(event)?;
        let mut events = self.events.lock().unwrap();
        if !events.contains_key(&id) {
            return Err(DomainError::NotFound(id));
        }
        events.insert(id, event.clone());
        Ok(())
    }

    async fn delete(&self, event: &Event) -> Result<(), DomainError> {
        let id = Self::stored_id(event)?;
        if self.events.lock().unwrap().remove(&id).is_none() {
            return Err(DomainError::NotFound(id));
        }
        Ok(())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.events.lock().unwrap().contains_key(&id))
    }

    async fn count(&self) -> Result<i64, DomainError> {
        #[allow(clippy::cast_possible_wrap)]
        Ok(self.events.lock().unwrap().len() as i64)
    }
}

/// An event repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug, Clone, Copy)]
pub struct FailingEventRepository;

impl FailingEventRepository {
    fn refused<T>() -> Result<T, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}

#[async_trait]
impl EventRepository for FailingEventRepository {
    async fn get_by_id(&self, _id: Uuid) -> Result<Option<Event>, DomainError> {
        Self::refused()
    }

    async fn get_all(&self) -> Result<Vec<Event>, DomainError> {
        Self::refused()
    }

    async fn get_by_category(&self, _category: EventCategory) -> Result<Vec<Event>, DomainError> {
        Self::refused()
    }

    async fn get_by_status(&self, _status: EventStatus) -> Result<Vec<Event>, DomainError> {
        Self::refused()
    }

    async fn get_upcoming_events(&self) -> Result<Vec<Event>, DomainError> {
        Self::refused()
    }

    async fn get_by_city(&self, _city: &str) -> Result<Vec<Event>, DomainError> {
        Self::refused()
    }

    async fn add(&self, _event: Event) -> Result<Event, DomainError> {
        Self::refused()
    }

    async fn add_range(&self, _events: Vec<Event>) -> Result<(), DomainError> {
        Self::refused()
    }

    async fn update(&self, _event: &Event) -> Result<(), DomainError> {
        Self::refused()
    }

    async fn delete(&self, _event: &Event) -> Result<(), DomainError> {
        Self::refused()
    }

    async fn exists(&self, _id: Uuid) -> Result<bool, DomainError> {
        Self::refused()
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Self::refused()
    }
}
