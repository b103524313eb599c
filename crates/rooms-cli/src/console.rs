//! Console stand-ins for the engine collaborators.
//!
//! A headless host has no scene graph: content lifetime and teleports are
//! tracked in memory and logged, and room text is written as plain lines.

use std::io::Write;

use rooms_core::error::DomainError;
use rooms_core::scene::{
    AnchorId, ContentHandle, ContentProvider, DisplaySurface, PlayerController, RoomText,
};
use rooms_core::theme::RoomTheme;
use tracing::{debug, info, warn};

/// Writes room text as one line per refresh.
#[derive(Debug)]
pub struct ConsoleDisplay<W> {
    out: W,
}

impl<W: Write + Send> ConsoleDisplay<W> {
    /// Creates a display writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the display, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> DisplaySurface for ConsoleDisplay<W> {
    fn show(&mut self, text: &RoomText) {
        let written = writeln!(
            self.out,
            "Room {} | previous: {} | current: {} | next: {}",
            text.room_number, text.previous, text.current, text.next
        )
        .and_then(|()| self.out.flush());
        if let Err(e) = written {
            warn!(error = %e, "failed to write room text");
        }
    }
}

/// Tracks the single live piece of themed content.
#[derive(Debug, Default)]
pub struct ConsoleContent {
    next_handle: u64,
    live: Vec<(ContentHandle, RoomTheme)>,
}

impl ConsoleContent {
    /// Content currently alive.
    #[must_use]
    pub fn live(&self) -> &[(ContentHandle, RoomTheme)] {
        &self.live
    }
}

impl ContentProvider for ConsoleContent {
    fn instantiate(
        &mut self,
        theme: RoomTheme,
        anchor: AnchorId,
    ) -> Result<ContentHandle, DomainError> {
        self.next_handle += 1;
        let handle = ContentHandle(self.next_handle);
        self.live.push((handle, theme));
        info!(%theme, handle = handle.0, anchor = anchor.0, "room content instantiated");
        Ok(handle)
    }

    fn remove(&mut self, handle: ContentHandle) -> Result<(), DomainError> {
        let before = self.live.len();
        self.live.retain(|(live, _)| *live != handle);
        if self.live.len() == before {
            return Err(DomainError::Infrastructure(format!(
                "no live content with handle {}",
                handle.0
            )));
        }
        debug!(handle = handle.0, "room content removed");
        Ok(())
    }
}

/// Logs teleports and collision toggles.
#[derive(Debug)]
pub struct ConsolePlayer {
    collision_enabled: bool,
}

impl Default for ConsolePlayer {
    fn default() -> Self {
        Self {
            collision_enabled: true,
        }
    }
}

impl PlayerController for ConsolePlayer {
    fn set_collision_enabled(&mut self, enabled: bool) {
        self.collision_enabled = enabled;
        debug!(enabled, "player collision toggled");
    }

    fn reset_position(&mut self) -> Result<(), DomainError> {
        debug!(collision_enabled = self.collision_enabled, "player returned to spawn");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_display_writes_one_line_per_refresh() {
        let mut display = ConsoleDisplay::new(Vec::new());

        display.show(&RoomText {
            previous: "Cave".to_owned(),
            current: "Backwaters".to_owned(),
            next: "Desert".to_owned(),
            room_number: "25".to_owned(),
        });

        let written = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(
            written,
            "Room 25 | previous: Cave | current: Backwaters | next: Desert\n"
        );
    }

    #[test]
    fn test_console_content_rejects_stale_handle() {
        let mut content = ConsoleContent::default();
        let first = content.instantiate(RoomTheme::Forest, AnchorId(0)).unwrap();
        content.remove(first).unwrap();

        let result = content.remove(first);

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
        assert!(content.live().is_empty());
    }
}
