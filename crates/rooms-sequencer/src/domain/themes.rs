//! Theme assignment.
//!
//! A room's theme is a linear congruential projection of its number:
//!
//! ```text
//! theme(room, offset) = table[ |(N + offset * room) % N| ]
//! ```
//!
//! `%` is Rust's truncating remainder, so a negative dividend yields a
//! negative remainder; the absolute value folds it back into `[0, N)`. For
//! `room >= 1` and `offset` in `[1, N - 1]` the dividend is positive and the
//! fold never changes the index.

use std::collections::HashSet;

use rooms_core::error::DomainError;
use rooms_core::theme::RoomTheme;
use serde::{Deserialize, Serialize};

/// Smallest table for which an offset different from the previous session's
/// always exists.
pub const MIN_THEMES: usize = 3;

/// Fixed lookup table from ordinal to theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTable {
    themes: Vec<RoomTheme>,
}

impl Default for ThemeTable {
    /// The reference seven-theme table, in [`RoomTheme::ALL`] order.
    fn default() -> Self {
        Self {
            themes: RoomTheme::ALL.to_vec(),
        }
    }
}

impl ThemeTable {
    /// Builds a table whose ordinal `i` maps to `themes[i]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if fewer than [`MIN_THEMES`]
    /// themes are given or a theme appears twice.
    pub fn new(themes: Vec<RoomTheme>) -> Result<Self, DomainError> {
        if themes.len() < MIN_THEMES {
            return Err(DomainError::InvalidArgument(format!(
                "theme table needs at least {MIN_THEMES} themes, got {}",
                themes.len()
            )));
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = themes.iter().find(|theme| !seen.insert(**theme)) {
            return Err(DomainError::InvalidArgument(format!(
                "theme {duplicate} appears more than once"
            )));
        }

        Ok(Self { themes })
    }

    /// Themes in ordinal order.
    #[must_use]
    pub fn themes(&self) -> &[RoomTheme] {
        &self.themes
    }

    /// Number of themes, `N`.
    #[must_use]
    pub fn theme_count(&self) -> usize {
        self.themes.len()
    }

    /// Largest valid offset, `N - 1`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn max_offset(&self) -> u32 {
        // A table holds distinct themes, so it never outgrows RoomTheme::ALL.
        (self.themes.len() - 1) as u32
    }

    /// Checks that `offset` lies in `[1, N - 1]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` for any other value.
    pub fn validate_offset(&self, offset: i64) -> Result<u32, DomainError> {
        u32::try_from(offset)
            .ok()
            .filter(|candidate| (1..=self.max_offset()).contains(candidate))
            .ok_or_else(|| {
                DomainError::InvalidArgument(format!(
                    "room offset must be in [1, {}], got {offset}",
                    self.max_offset()
                ))
            })
    }

    /// Theme of `room_no` under `offset`.
    #[must_use]
    pub fn theme(&self, room_no: u64, offset: u32) -> RoomTheme {
        theme_at(&self.themes, room_no, offset)
    }
}

/// Theme of `room_no` under `offset` in the reference table.
#[must_use]
pub fn theme(room_no: u64, offset: u32) -> RoomTheme {
    theme_at(&RoomTheme::ALL, room_no, offset)
}

#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn theme_at(themes: &[RoomTheme], room_no: u64, offset: u32) -> RoomTheme {
    let n = themes.len() as i128;
    // i128 holds offset * room_no for every u64 room without overflow.
    let index = ((n + i128::from(offset) * i128::from(room_no)) % n).abs();
    themes[index as usize]
}

/// The themes around the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTriple {
    /// Theme of the room behind the player.
    pub previous: RoomTheme,
    /// Theme of the room the player is in.
    pub current: RoomTheme,
    /// Theme of the room ahead of the player.
    pub next: RoomTheme,
}
