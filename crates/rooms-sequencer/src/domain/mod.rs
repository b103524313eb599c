//! Domain layer for theme sequencing.

pub mod aggregates;
pub mod events;
pub mod themes;
