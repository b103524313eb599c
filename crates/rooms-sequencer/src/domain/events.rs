//! Domain events for theme sequencing.

use rooms_core::event::{DomainEvent, EventMetadata};
use rooms_core::theme::RoomTheme;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Emitted when a session draws its offset and enters room 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStarted {
    /// The session identifier.
    pub session_id: Uuid,
    /// The offset drawn for this session.
    pub room_offset: u32,
    /// The offset persisted by the previous session, if one was consulted.
    pub previous_offset: Option<i64>,
}

/// Emitted when the cursor moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorMoved {
    /// The session identifier.
    pub session_id: Uuid,
    /// Room number before the move.
    pub from_room: u64,
    /// Room number after the move.
    pub to_room: u64,
    /// Theme of the room entered.
    pub theme: RoomTheme,
}

/// Event type identifier for [`SessionStarted`].
pub const SESSION_STARTED_EVENT_TYPE: &str = "sequencer.session_started";

/// Event type identifier for a forward [`CursorMoved`].
pub const MOVED_FORWARD_EVENT_TYPE: &str = "sequencer.moved_forward";

/// Event type identifier for a backward [`CursorMoved`].
pub const MOVED_BACKWARD_EVENT_TYPE: &str = "sequencer.moved_backward";

/// Event type identifier for a jumping [`CursorMoved`].
pub const JUMPED_EVENT_TYPE: &str = "sequencer.jumped";

/// Event payload variants for theme sequencing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequencerEventKind {
    /// A session has started.
    SessionStarted(SessionStarted),
    /// The cursor advanced one room.
    MovedForward(CursorMoved),
    /// The cursor went back one room.
    MovedBackward(CursorMoved),
    /// The cursor was relocated to an arbitrary room.
    Jumped(CursorMoved),
}

impl SequencerEventKind {
    /// Event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            SequencerEventKind::SessionStarted(_) => SESSION_STARTED_EVENT_TYPE,
            SequencerEventKind::MovedForward(_) => MOVED_FORWARD_EVENT_TYPE,
            SequencerEventKind::MovedBackward(_) => MOVED_BACKWARD_EVENT_TYPE,
            SequencerEventKind::Jumped(_) => JUMPED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for theme sequencing.
#[derive(Debug, Clone)]
pub struct SequencerEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: SequencerEventKind,
}

impl DomainEvent for SequencerEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("SequencerEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rooms_core::clock::Clock;
    use rooms_test_support::FixedClock;

    #[test]
    fn test_to_payload_tags_variant_and_carries_fields() {
        // Arrange
        let session_id = Uuid::new_v4();
        let event = SequencerEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: JUMPED_EVENT_TYPE.to_owned(),
                session_id,
                sequence_number: 2,
                occurred_at: FixedClock::default().now(),
            },
            kind: SequencerEventKind::Jumped(CursorMoved {
                session_id,
                from_room: 3,
                to_room: 25,
                theme: RoomTheme::Backwaters,
            }),
        };

        // Act
        let payload = event.to_payload();

        // Assert
        assert_eq!(event.event_type(), "sequencer.jumped");
        assert_eq!(payload["Jumped"]["from_room"], 3);
        assert_eq!(payload["Jumped"]["to_room"], 25);
        assert_eq!(payload["Jumped"]["theme"], "Backwaters");
    }

    #[test]
    fn test_payload_deserializes_back_to_kind() {
        let kind = SequencerEventKind::SessionStarted(SessionStarted {
            session_id: Uuid::new_v4(),
            room_offset: 4,
            previous_offset: Some(2),
        });

        let value = serde_json::to_value(&kind).unwrap();
        let restored: SequencerEventKind = serde_json::from_value(value).unwrap();

        assert_eq!(restored, kind);
    }
}
