//! Test scene collaborators — recording implementations of the engine ports.

use rooms_core::error::DomainError;
use rooms_core::scene::{
    AnchorId, ContentHandle, ContentProvider, DisplaySurface, PlayerController, RoomText,
};
use rooms_core::theme::RoomTheme;

/// A content provider that tracks which instances are alive. Removing an
/// unknown or already removed handle fails, so double frees show up in tests.
/// Optionally fails every removal.
#[derive(Debug, Default)]
pub struct RecordingContentProvider {
    next_handle: u64,
    live: Vec<(ContentHandle, RoomTheme, AnchorId)>,
    instantiated: Vec<RoomTheme>,
    removed: Vec<ContentHandle>,
    fail_remove: bool,
}

impl RecordingContentProvider {
    /// Create a provider whose removals always fail.
    #[must_use]
    pub fn failing_removals() -> Self {
        Self {
            fail_remove: true,
            ..Self::default()
        }
    }

    /// Instances that have been created and not yet removed.
    #[must_use]
    pub fn live_instances(&self) -> &[(ContentHandle, RoomTheme, AnchorId)] {
        &self.live
    }

    /// Every theme instantiated, in call order.
    #[must_use]
    pub fn instantiated_themes(&self) -> &[RoomTheme] {
        &self.instantiated
    }

    /// Every handle removed, in call order.
    #[must_use]
    pub fn removed_handles(&self) -> &[ContentHandle] {
        &self.removed
    }
}

impl ContentProvider for RecordingContentProvider {
    fn instantiate(
        &mut self,
        theme: RoomTheme,
        anchor: AnchorId,
    ) -> Result<ContentHandle, DomainError> {
        self.next_handle += 1;
        let handle = ContentHandle(self.next_handle);
        self.live.push((handle, theme, anchor));
        self.instantiated.push(theme);
        Ok(handle)
    }

    fn remove(&mut self, handle: ContentHandle) -> Result<(), DomainError> {
        if self.fail_remove {
            return Err(DomainError::Infrastructure("content removal rejected".into()));
        }
        let Some(position) = self.live.iter().position(|(h, _, _)| *h == handle) else {
            return Err(DomainError::Infrastructure(format!(
                "unknown content handle {}",
                handle.0
            )));
        };
        self.live.remove(position);
        self.removed.push(handle);
        Ok(())
    }
}

/// A display surface that keeps every text it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingDisplaySurface {
    shown: Vec<RoomText>,
}

impl RecordingDisplaySurface {
    /// Every text shown, in call order.
    #[must_use]
    pub fn shown(&self) -> &[RoomText] {
        &self.shown
    }

    /// The most recently shown text.
    #[must_use]
    pub fn last(&self) -> Option<&RoomText> {
        self.shown.last()
    }
}

impl DisplaySurface for RecordingDisplaySurface {
    fn show(&mut self, text: &RoomText) {
        self.shown.push(text.clone());
    }
}

/// A call received by [`RecordingPlayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCall {
    /// `set_collision_enabled(bool)`.
    SetCollision(bool),
    /// `reset_position()`.
    ResetPosition,
}

/// A player controller that records its calls. Optionally fails every
/// `reset_position`.
#[derive(Debug)]
pub struct RecordingPlayer {
    calls: Vec<PlayerCall>,
    collision_enabled: bool,
    fail_reset: bool,
}

impl RecordingPlayer {
    /// Create a player with collision enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            collision_enabled: true,
            fail_reset: false,
        }
    }

    /// Create a player whose teleports always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_reset: true,
            ..Self::new()
        }
    }

    /// Every call received, in order.
    #[must_use]
    pub fn calls(&self) -> &[PlayerCall] {
        &self.calls
    }

    /// Whether collision response is currently enabled.
    #[must_use]
    pub fn collision_enabled(&self) -> bool {
        self.collision_enabled
    }

    /// Number of teleports requested.
    #[must_use]
    pub fn reset_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == PlayerCall::ResetPosition)
            .count()
    }
}

impl Default for RecordingPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerController for RecordingPlayer {
    fn set_collision_enabled(&mut self, enabled: bool) {
        self.collision_enabled = enabled;
        self.calls.push(PlayerCall::SetCollision(enabled));
    }

    fn reset_position(&mut self) -> Result<(), DomainError> {
        self.calls.push(PlayerCall::ResetPosition);
        if self.fail_reset {
            return Err(DomainError::Infrastructure("teleport rejected".into()));
        }
        Ok(())
    }
}
