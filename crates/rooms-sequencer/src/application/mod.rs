//! Application layer for theme sequencing.

pub mod command_handlers;
pub mod query_handlers;
