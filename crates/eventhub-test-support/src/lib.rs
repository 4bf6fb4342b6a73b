//! Shared test doubles and utilities for the EventHub backend.

mod clock;
mod repository;

pub use clock::FixedClock;
pub use repository::{FailingEventRepository, InMemoryEventRepository};
