//! Room presenter.
//!
//! Owns the session's sequencer and drives the engine collaborators after
//! every navigation: room text, then themed content, then the player.

use rooms_core::clock::Clock;
use rooms_core::error::DomainError;
use rooms_core::event::DomainEvent;
use rooms_core::scene::{
    AnchorId, ContentHandle, ContentProvider, DisplaySurface, PlayerController, RoomText,
};
use rooms_core::theme::RoomTheme;
use rooms_sequencer::application::query_handlers::{RoomView, get_room_view};
use rooms_sequencer::domain::aggregates::ThemeSequencer;
use tracing::{debug, instrument};

use crate::domain::navigation::NavigationEvent;

/// Engine collaborators injected into a presenter.
pub struct Scene<'a> {
    /// Creates and destroys themed content.
    pub content: &'a mut dyn ContentProvider,
    /// Renders room text.
    pub display: &'a mut dyn DisplaySurface,
    /// The player's body.
    pub player: &'a mut dyn PlayerController,
    /// Scene node themed content is attached under.
    pub anchor: AnchorId,
}

/// Keeps the scene in step with a [`ThemeSequencer`].
///
/// At most one themed-content instance exists at a time: the presenter
/// holds its handle and removes it before instantiating the next one.
pub struct RoomPresenter<'a> {
    sequencer: ThemeSequencer,
    clock: &'a dyn Clock,
    scene: Scene<'a>,
    displayed: Option<ContentHandle>,
}

impl<'a> RoomPresenter<'a> {
    /// Creates a presenter for an initialized sequencer. Nothing is shown
    /// until [`start`](Self::start) is called.
    #[must_use]
    pub fn new(sequencer: ThemeSequencer, clock: &'a dyn Clock, scene: Scene<'a>) -> Self {
        Self {
            sequencer,
            clock,
            scene,
            displayed: None,
        }
    }

    /// The session's sequencer.
    #[must_use]
    pub fn sequencer(&self) -> &ThemeSequencer {
        &self.sequencer
    }

    /// Handle of the content currently on screen.
    #[must_use]
    pub fn displayed_content(&self) -> Option<ContentHandle> {
        self.displayed
    }

    /// Read model of the current room.
    #[must_use]
    pub fn room_view(&self) -> RoomView {
        get_room_view(&self.sequencer)
    }

    /// Presents the first room. The player is already at spawn, so there is
    /// no teleport.
    ///
    /// # Errors
    ///
    /// Propagates content provider failures.
    pub fn start(&mut self) -> Result<(), DomainError> {
        self.update_display();
        self.on_theme_changed(self.sequencer.triple().current)?;
        self.drain_events();
        Ok(())
    }

    /// Handles a navigation trigger: moves the cursor, refreshes the scene,
    /// and sends the player back to spawn.
    ///
    /// A backward trigger in room 1 leaves the scene untouched.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` for a jump below room 1, or
    /// propagates collaborator failures.
    #[instrument(skip(self), fields(room = self.sequencer.current_room()))]
    pub fn on_navigation_trigger(&mut self, event: NavigationEvent) -> Result<(), DomainError> {
        let from_room = self.sequencer.current_room();
        match event {
            NavigationEvent::Forward => {
                self.sequencer.next(self.clock);
            }
            NavigationEvent::Backward => {
                self.sequencer.previous(self.clock);
                if self.sequencer.current_room() == from_room {
                    return Ok(());
                }
            }
            NavigationEvent::Jump(room_no) => {
                self.sequencer.jump_to(room_no, self.clock)?;
            }
        }
        self.drain_events();

        self.update_display();
        self.on_theme_changed(self.sequencer.triple().current)?;
        self.reset_player_position()
    }

    /// Swaps the displayed content for `theme`'s content.
    ///
    /// # Errors
    ///
    /// Propagates content provider failures. If removing the old content
    /// fails, its handle is kept and nothing new is instantiated.
    pub fn on_theme_changed(&mut self, theme: RoomTheme) -> Result<(), DomainError> {
        if let Some(handle) = self.displayed {
            self.scene.content.remove(handle)?;
            self.displayed = None;
        }

        let handle = self.scene.content.instantiate(theme, self.scene.anchor)?;
        debug!(%theme, handle = handle.0, "room content swapped");
        self.displayed = Some(handle);
        Ok(())
    }

    /// Teleports the player to spawn with collision response suspended, so
    /// the arrival point cannot re-trigger a navigation zone. Collision is
    /// re-enabled even when the teleport fails.
    ///
    /// # Errors
    ///
    /// Propagates player controller failures.
    pub fn reset_player_position(&mut self) -> Result<(), DomainError> {
        self.scene.player.set_collision_enabled(false);
        let result = self.scene.player.reset_position();
        self.scene.player.set_collision_enabled(true);
        result
    }

    fn update_display(&mut self) {
        let triple = self.sequencer.triple();
        let text = RoomText {
            previous: triple.previous.to_string(),
            current: triple.current.to_string(),
            next: triple.next.to_string(),
            room_number: self.sequencer.current_room().to_string(),
        };
        self.scene.display.show(&text);
    }

    fn drain_events(&mut self) {
        for event in self.sequencer.take_uncommitted_events() {
            debug!(
                event_type = event.event_type(),
                sequence_number = event.metadata().sequence_number,
                payload = %event.to_payload(),
                "sequencer event"
            );
        }
    }
}
