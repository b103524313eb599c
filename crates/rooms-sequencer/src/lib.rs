//! Rooms — theme sequencing.
//!
//! Responsible for the room cursor, the per-session offset, and the
//! deterministic mapping from room numbers to themes.

pub mod application;
pub mod domain;
