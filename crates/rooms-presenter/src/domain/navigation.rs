//! Navigation triggers.

use serde::{Deserialize, Serialize};

/// A request to move the player through the room sequence.
///
/// `Forward` and `Backward` come from the zones at either end of a room;
/// `Jump` comes from portals and debug bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationEvent {
    /// The player entered the next-room zone.
    Forward,
    /// The player entered the previous-room zone.
    Backward,
    /// The player is sent straight to a room number.
    Jump(i64),
}
