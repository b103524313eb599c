//! Rooms Core — shared domain abstractions.
//!
//! This crate defines the traits and types the sequencer, the presenter
//! and the host depend on. It contains no engine or filesystem code.

pub mod clock;
pub mod error;
pub mod event;
pub mod rng;
pub mod scene;
pub mod settings;
pub mod theme;
