//! Rooms — headless host.
//!
//! Wires the sequencer and presenter to console stand-ins for the engine
//! and drives them from line-oriented commands.

pub mod config;
pub mod console;
pub mod error;
pub mod repl;
