//! Shared test doubles and utilities for the Rooms sequencer.

mod clock;
mod rng;
mod scene;
mod settings;

pub use clock::FixedClock;
pub use rng::SequenceRng;
pub use scene::{PlayerCall, RecordingContentProvider, RecordingDisplaySurface, RecordingPlayer};
pub use settings::{FailingSettingsStore, InMemorySettingsStore};
