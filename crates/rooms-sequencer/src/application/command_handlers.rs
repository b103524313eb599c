//! Command handlers for theme sequencing.
//!
//! Session initialization is the only operation that touches the outside
//! world: it reads the previous session's offset, draws a new one, and
//! writes it back before handing out a sequencer.

use rooms_core::clock::Clock;
use rooms_core::error::DomainError;
use rooms_core::rng::DeterministicRng;
use rooms_core::settings::SettingsStore;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::aggregates::ThemeSequencer;
use crate::domain::themes::ThemeTable;

/// Settings key holding the offset used by the most recent session.
pub const ROOM_OFFSET_KEY: &str = "RoomOffset";

/// Draws an offset uniformly from `[1, N - 1]`, re-drawing until it differs
/// from `previous_offset`.
pub fn draw_room_offset(
    table: &ThemeTable,
    previous_offset: i64,
    rng: &mut dyn DeterministicRng,
) -> u32 {
    loop {
        let candidate = rng.next_u32_range(1, table.max_offset());
        if i64::from(candidate) != previous_offset {
            return candidate;
        }
        debug!(candidate, "drew the previous session's offset; drawing again");
    }
}

/// Handles session start: draws a fresh offset, persists it, and returns a
/// sequencer positioned at room 1.
///
/// A missing setting reads as 0, which is never a valid offset, so the
/// first session ever accepts its first draw.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the settings store cannot be
/// read, written or flushed.
#[instrument(skip_all, fields(themes = table.theme_count()))]
pub fn handle_initialize_session(
    table: ThemeTable,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
    settings: &mut dyn SettingsStore,
) -> Result<ThemeSequencer, DomainError> {
    let previous_offset = settings.get_or(ROOM_OFFSET_KEY, 0)?;
    let room_offset = draw_room_offset(&table, previous_offset, rng);

    settings.set(ROOM_OFFSET_KEY, i64::from(room_offset))?;
    settings.flush()?;

    let sequencer = ThemeSequencer::start(
        Uuid::new_v4(),
        table,
        i64::from(room_offset),
        Some(previous_offset),
        clock,
    )?;

    info!(
        session_id = %sequencer.session_id(),
        room_offset,
        previous_offset,
        "room session initialized"
    );
    Ok(sequencer)
}
