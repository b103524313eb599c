//! Query handlers for theme sequencing.
//!
//! Read-only views of a sequencer for display and diagnostics.

use rooms_core::theme::RoomTheme;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::ThemeSequencer;

/// Read-only view of a sequencer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomView {
    /// The session identifier.
    pub session_id: Uuid,
    /// The room the player is in.
    pub room_number: u64,
    /// The session's offset.
    pub room_offset: u32,
    /// Theme of the room behind the player.
    pub previous_theme: RoomTheme,
    /// Theme of the room the player is in.
    pub current_theme: RoomTheme,
    /// Theme of the room ahead of the player.
    pub next_theme: RoomTheme,
}

/// Builds a [`RoomView`] of the sequencer's current state.
#[must_use]
pub fn get_room_view(sequencer: &ThemeSequencer) -> RoomView {
    let triple = sequencer.triple();
    RoomView {
        session_id: sequencer.session_id(),
        room_number: sequencer.current_room(),
        room_offset: sequencer.room_offset(),
        previous_theme: triple.previous,
        current_theme: triple.current,
        next_theme: triple.next,
    }
}

#[cfg(test)]
mod tests {
    use rooms_test_support::FixedClock;

    use crate::application::query_handlers::get_room_view;
    use crate::domain::aggregates::ThemeSequencer;
    use crate::domain::themes::ThemeTable;

    #[test]
    fn test_get_room_view_reflects_cursor_after_jump() {
        // Arrange
        let clock = FixedClock::default();
        let mut sequencer = ThemeSequencer::with_offset(ThemeTable::default(), 2, &clock).unwrap();
        sequencer.jump_to(25, &clock).unwrap();

        // Act
        let view = get_room_view(&sequencer);

        // Assert
        assert_eq!(view.session_id, sequencer.session_id());
        assert_eq!(view.room_number, 25);
        assert_eq!(view.room_offset, 2);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["previous_theme"], "Cave");
        assert_eq!(json["current_theme"], "Backwaters");
        assert_eq!(json["next_theme"], "Desert");
    }
}
