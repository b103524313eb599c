//! Room themes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A visual motif a room can display.
///
/// The declaration order is the reference ordinal order used by the default
/// theme table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomTheme {
    /// Ordinal 0.
    Mountains,
    /// Ordinal 1.
    Backwaters,
    /// Ordinal 2.
    Forest,
    /// Ordinal 3.
    Desert,
    /// Ordinal 4.
    Countryside,
    /// Ordinal 5.
    Seaside,
    /// Ordinal 6.
    Cave,
}

impl RoomTheme {
    /// Every theme, in ordinal order.
    pub const ALL: [RoomTheme; 7] = [
        RoomTheme::Mountains,
        RoomTheme::Backwaters,
        RoomTheme::Forest,
        RoomTheme::Desert,
        RoomTheme::Countryside,
        RoomTheme::Seaside,
        RoomTheme::Cave,
    ];

    /// Human-readable theme name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RoomTheme::Mountains => "Mountains",
            RoomTheme::Backwaters => "Backwaters",
            RoomTheme::Forest => "Forest",
            RoomTheme::Desert => "Desert",
            RoomTheme::Countryside => "Countryside",
            RoomTheme::Seaside => "Seaside",
            RoomTheme::Cave => "Cave",
        }
    }
}

impl fmt::Display for RoomTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
