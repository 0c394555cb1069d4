use serde::{Deserialize, Serialize};

/// One board position. A shown cell is never marked, and `click_count` only
/// moves when a mine is clicked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub mines_around: u8,
    pub is_shown: bool,
    pub is_mine: bool,
    pub is_marked: bool,
    pub click_count: u8,
}

impl Cell {
    /// Neither shown nor marked.
    pub const fn is_covered(self) -> bool {
        !self.is_shown && !self.is_marked
    }

    /// Shown or marked, the per-cell half of the win condition.
    pub const fn is_settled(self) -> bool {
        self.is_shown || self.is_marked
    }

    pub const fn glyph(self) -> CellGlyph {
        match (self.is_shown, self.is_mine, self.is_marked) {
            (true, true, _) => CellGlyph::Mine,
            (true, false, _) => CellGlyph::Count(self.mines_around),
            (false, _, true) => CellGlyph::Flag,
            (false, _, false) => CellGlyph::Blank,
        }
    }
}

/// What the presentation layer draws for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellGlyph {
    Blank,
    Count(u8),
    Flag,
    Mine,
}

impl CellGlyph {
    pub const fn as_char(self) -> char {
        match self {
            Self::Blank => '.',
            // counts never exceed 8
            Self::Count(n) => (b'0' + n) as char,
            Self::Flag => 'F',
            Self::Mine => '*',
        }
    }
}
