//! Domain layer for the Event Management context.

pub mod aggregates;
pub mod commands;
pub mod repository;
pub mod value_objects;
