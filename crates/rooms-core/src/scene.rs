//! Engine-facing collaborator ports.
//!
//! Rendering, object lifetime, text output and player physics live in the
//! host engine. The presenter only talks to them through these traits.

use crate::error::DomainError;
use crate::theme::RoomTheme;

/// Handle of the fixed scene node themed content is attached under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorId(pub u64);

/// Handle of one instantiated piece of themed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHandle(pub u64);

/// Text shown to the player for the current room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomText {
    /// Theme name of the room behind the player.
    pub previous: String,
    /// Theme name of the room the player is in.
    pub current: String,
    /// Theme name of the room ahead of the player.
    pub next: String,
    /// Current room number.
    pub room_number: String,
}

/// Creates and destroys themed room content.
pub trait ContentProvider: Send {
    /// Instantiates the content for `theme` under `anchor`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the engine cannot create the
    /// content.
    fn instantiate(
        &mut self,
        theme: RoomTheme,
        anchor: AnchorId,
    ) -> Result<ContentHandle, DomainError>;

    /// Destroys previously instantiated content.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if `handle` is unknown or the
    /// engine cannot destroy it.
    fn remove(&mut self, handle: ContentHandle) -> Result<(), DomainError>;
}

/// Sink for room text.
pub trait DisplaySurface: Send {
    /// Renders `text`.
    fn show(&mut self, text: &RoomText);
}

/// The player's body in the scene.
pub trait PlayerController: Send {
    /// Enables or disables collision response.
    fn set_collision_enabled(&mut self, enabled: bool);

    /// Teleports the player to the session-start spawn point.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the engine rejects the move.
    fn reset_position(&mut self) -> Result<(), DomainError>;
}
