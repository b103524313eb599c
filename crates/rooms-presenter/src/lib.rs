//! Rooms — presentation.
//!
//! Responsible for keeping the scene in step with the sequencer: themed
//! content, room text, and the player's spawn position.

pub mod application;
pub mod domain;
