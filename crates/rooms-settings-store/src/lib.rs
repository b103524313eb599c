//! Durable settings storage for the Rooms sequencer.

pub mod json_settings_store;
