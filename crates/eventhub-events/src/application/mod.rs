//! Application layer for the Event Management context.

pub mod command_handlers;
pub mod query_handlers;
