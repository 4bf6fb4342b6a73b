//! EventHub — Event Management bounded context.
//!
//! Responsible for the Event aggregate: scheduling, lifecycle transitions,
//! rescheduling, and the derived temporal queries, together with the
//! repository contract the aggregate is stored through.

pub mod application;
pub mod domain;
