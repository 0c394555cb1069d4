use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub glyphs: Array2<CellGlyph>,
    pub lives: u8,
    pub safe_clicks: u8,
    pub state: RoundState,
}

impl SessionView {
    pub fn from_session(session: &GameSession) -> Self {
        let board = session.board();
        let side = usize::from(board.size());
        let glyphs = Array2::from_shape_fn((side, side), |(row, col)| {
            // side fits a Coord, so do row and col
            board[(row as Coord, col as Coord)].glyph()
        });
        Self {
            glyphs,
            lives: session.lives(),
            safe_clicks: session.safe_clicks(),
            state: session.state(),
        }
    }

    pub fn size(&self) -> Coord {
        self.glyphs.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn glyph_at(&self, coords: Coord2) -> CellGlyph {
        self.glyphs[coords.to_nd_index()]
    }
}

impl fmt::Display for SessionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.glyphs.rows() {
            for glyph in row {
                write!(f, "{}", glyph.as_char())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Lives: {}", self.lives)?;
        write!(f, "Safe clicks: {}", self.safe_clicks)?;
        match self.state {
            RoundState::Active => Ok(()),
            RoundState::Won => write!(f, "\nYou won!"),
            RoundState::Lost => write!(f, "\nGame over"),
        }
    }
}

/// Presentation adapter: turns a frame into whatever the host displays.
pub trait Renderer {
    fn render(&mut self, view: &SessionView);
}

/// Keeps every rendered frame as text.
#[derive(Clone, Debug, Default)]
pub struct TextRenderer {
    frames: Vec<String>,
}

impl TextRenderer {
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, view: &SessionView) {
        self.frames.push(view.to_string());
    }
}
