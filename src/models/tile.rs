//! The four tile colours a shared puzzle grid is drawn with.

use std::fmt::{Display, Formatter};

/// One coloured square of a shared puzzle grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileSymbol {
    /// Hardest category.
    Purple,
    /// Second hardest category.
    Blue,
    /// Second easiest category.
    Yellow,
    /// Easiest category.
    Green,
}

impl TileSymbol {
    /// Every tile colour, hardest first.
    pub const ALL: [Self; 4] = [Self::Purple, Self::Blue, Self::Yellow, Self::Green];

    /// Literal emoji character for this colour.
    #[must_use]
    pub const fn pictograph(self) -> char {
        match self {
            Self::Purple => '\u{1F7EA}',
            Self::Blue => '\u{1F7E6}',
            Self::Yellow => '\u{1F7E8}',
            Self::Green => '\u{1F7E9}',
        }
    }

    /// Slack markup token that renders as this colour.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Purple => ":large_purple_square:",
            Self::Blue => ":large_blue_square:",
            Self::Yellow => ":large_yellow_square:",
            Self::Green => ":large_green_square:",
        }
    }

    /// Map an emoji character back to its colour.
    #[must_use]
    pub fn from_pictograph(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|tile| tile.pictograph() == ch)
    }
}

impl Display for TileSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pictograph())
    }
}
