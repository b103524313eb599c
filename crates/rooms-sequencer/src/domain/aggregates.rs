//! Aggregate root for theme sequencing.

use rooms_core::clock::Clock;
use rooms_core::error::DomainError;
use rooms_core::event::EventMetadata;
use rooms_core::theme::RoomTheme;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::events::{CursorMoved, SequencerEvent, SequencerEventKind, SessionStarted};
use super::themes::{ThemeTable, ThemeTriple};

/// The room cursor of one session.
///
/// The state is the cursor plus the fixed offset; the theme triple is a
/// projection of both and is never set independently.
#[derive(Debug)]
pub struct ThemeSequencer {
    /// Session identifier.
    pub id: Uuid,
    /// Number of events recorded so far.
    pub(crate) version: i64,
    table: ThemeTable,
    room_offset: u32,
    current_room: u64,
    triple: ThemeTriple,
    /// Recorded events not yet taken by a consumer.
    uncommitted_events: Vec<SequencerEvent>,
}

impl ThemeSequencer {
    /// Starts a session at room 1 with a known offset.
    ///
    /// Room 1 has no predecessor, so the previous slot starts out equal to
    /// the current theme.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `room_offset` is outside
    /// `[1, N - 1]` for `table`.
    pub fn start(
        session_id: Uuid,
        table: ThemeTable,
        room_offset: i64,
        previous_offset: Option<i64>,
        clock: &dyn Clock,
    ) -> Result<Self, DomainError> {
        let room_offset = table.validate_offset(room_offset)?;
        let current = table.theme(1, room_offset);
        let mut sequencer = Self {
            id: session_id,
            version: 0,
            triple: ThemeTriple {
                previous: current,
                current,
                next: table.theme(2, room_offset),
            },
            table,
            room_offset,
            current_room: 1,
            uncommitted_events: Vec::new(),
        };

        sequencer.record(
            SequencerEventKind::SessionStarted(SessionStarted {
                session_id,
                room_offset,
                previous_offset,
            }),
            clock,
        );
        Ok(sequencer)
    }

    /// Starts a fresh session with a known offset and no prior history.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `room_offset` is outside
    /// `[1, N - 1]` for `table`.
    pub fn with_offset(
        table: ThemeTable,
        room_offset: i64,
        clock: &dyn Clock,
    ) -> Result<Self, DomainError> {
        Self::start(Uuid::new_v4(), table, room_offset, None, clock)
    }

    /// Session identifier.
    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.id
    }

    /// Number of events recorded so far, taken or not.
    #[must_use]
    pub fn version(&self) -> i64 {
        self.version
    }

    /// The theme table in use.
    #[must_use]
    pub fn table(&self) -> &ThemeTable {
        &self.table
    }

    /// The session's offset.
    #[must_use]
    pub fn room_offset(&self) -> u32 {
        self.room_offset
    }

    /// The room the player is in.
    #[must_use]
    pub fn current_room(&self) -> u64 {
        self.current_room
    }

    /// The themes around the cursor.
    #[must_use]
    pub fn triple(&self) -> ThemeTriple {
        self.triple
    }

    /// Theme of an arbitrary room under this session's offset.
    #[must_use]
    pub fn theme_of(&self, room_no: u64) -> RoomTheme {
        self.table.theme(room_no, self.room_offset)
    }

    /// Advances to the next room. Rooms are unbounded, so this always
    /// succeeds.
    pub fn next(&mut self, clock: &dyn Clock) -> ThemeTriple {
        let from_room = self.current_room;
        self.current_room += 1;
        self.triple = ThemeTriple {
            previous: self.triple.current,
            current: self.theme_of(self.current_room),
            next: self.theme_of(self.current_room + 1),
        };

        debug!(
            from_room,
            to_room = self.current_room,
            theme = %self.triple.current,
            "moved forward"
        );
        self.record_move(from_room, clock, SequencerEventKind::MovedForward);
        self.triple
    }

    /// Goes back one room. At room 1 this is a no-op that returns the
    /// unchanged triple and records nothing.
    pub fn previous(&mut self, clock: &dyn Clock) -> ThemeTriple {
        if self.current_room == 1 {
            debug!("already in the first room");
            return self.triple;
        }

        let from_room = self.current_room;
        self.current_room -= 1;
        self.triple = ThemeTriple {
            previous: self.previous_slot(self.current_room),
            current: self.theme_of(self.current_room),
            next: self.triple.current,
        };

        debug!(
            from_room,
            to_room = self.current_room,
            theme = %self.triple.current,
            "moved backward"
        );
        self.record_move(from_room, clock, SequencerEventKind::MovedBackward);
        self.triple
    }

    /// Relocates the cursor to `room_no`, recomputing all three slots.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `room_no` is below 1. The
    /// cursor is left untouched in that case.
    pub fn jump_to(&mut self, room_no: i64, clock: &dyn Clock) -> Result<ThemeTriple, DomainError> {
        let Some(target) = u64::try_from(room_no).ok().filter(|room| *room >= 1) else {
            warn!(room_no, "rejected jump target");
            return Err(DomainError::InvalidArgument(format!(
                "jump target must be at least 1, got {room_no}"
            )));
        };

        let from_room = self.current_room;
        self.current_room = target;
        self.triple = ThemeTriple {
            previous: self.previous_slot(target),
            current: self.theme_of(target),
            next: self.theme_of(target + 1),
        };

        info!(from_room, to_room = target, theme = %self.triple.current, "jumped");
        self.record_move(from_room, clock, SequencerEventKind::Jumped);
        Ok(self.triple)
    }

    /// Events recorded since the last [`take_uncommitted_events`](Self::take_uncommitted_events).
    #[must_use]
    pub fn uncommitted_events(&self) -> &[SequencerEvent] {
        &self.uncommitted_events
    }

    /// Drains the recorded events.
    pub fn take_uncommitted_events(&mut self) -> Vec<SequencerEvent> {
        std::mem::take(&mut self.uncommitted_events)
    }

    /// Previous-slot theme for `room_no`. Room 1 has no predecessor and
    /// mirrors its own theme.
    ///
    /// This deliberately departs from a plain `theme(room_no - 1)`, which
    /// would show ordinal 0 after `previous()` or `jump_to(1)`. Mirroring
    /// keeps the slot identical to the session-start triple, so stepping
    /// forward then back always restores the triple exactly.
    fn previous_slot(&self, room_no: u64) -> RoomTheme {
        if room_no <= 1 {
            self.theme_of(1)
        } else {
            self.theme_of(room_no - 1)
        }
    }

    fn record_move(
        &mut self,
        from_room: u64,
        clock: &dyn Clock,
        variant: fn(CursorMoved) -> SequencerEventKind,
    ) {
        let moved = CursorMoved {
            session_id: self.id,
            from_room,
            to_room: self.current_room,
            theme: self.triple.current,
        };
        self.record(variant(moved), clock);
    }

    fn record(&mut self, kind: SequencerEventKind, clock: &dyn Clock) {
        self.version += 1;
        let event = SequencerEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                session_id: self.id,
                sequence_number: self.version,
                occurred_at: clock.now(),
            },
            kind,
        };
        self.uncommitted_events.push(event);
    }
}
