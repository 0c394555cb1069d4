use serde::{Deserialize, Serialize};

use crate::*;

/// Parameters of a round: board side, mine count, life and assist budgets and
/// the delay used for every deferred action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
    pub lives: u8,
    pub safe_clicks: u8,
    pub delay_ms: u32,
}

impl GameConfig {
    /// 4×4 board, 2 mines, 3 lives, 3 safe clicks, 2 second timers.
    pub const CLASSIC: Self = Self {
        size: 4,
        mines: 2,
        lives: 3,
        safe_clicks: 3,
        delay_ms: 2000,
    };

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        let size = size.max(1);
        if mines >= square(size) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self {
            size,
            mines,
            ..Self::CLASSIC
        })
    }

    pub const fn with_lives(self, lives: u8) -> Self {
        let lives = if lives == 0 { 1 } else { lives };
        Self { lives, ..self }
    }

    pub const fn with_safe_clicks(self, safe_clicks: u8) -> Self {
        Self {
            safe_clicks,
            ..self
        }
    }

    pub const fn with_delay_ms(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}
