use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of cells indexed by `(row, col)`.
///
/// Cloning yields an independent value copy, which is what history snapshots
/// rely on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Blank `size`×`size` grid: no mines, nothing shown or marked.
    pub fn build(size: Coord) -> Self {
        let side = usize::from(size);
        Self {
            cells: Array2::default((side, side)),
        }
    }

    /// Fresh board for a round: built, seeded with mines, counts computed.
    pub fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let mut board = Self::build(config.size);
        board.place_mines(config.mines, rng);
        board.compute_adjacency();
        board
    }

    /// Board with mines at exactly the given coordinates and counts computed.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::build(size);
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board.cells[coords.to_nd_index()].is_mine = true;
        }
        if board.mine_count() >= board.total_cells() {
            return Err(GameError::TooManyMines);
        }
        board.compute_adjacency();
        Ok(board)
    }

    /// Adds mines on random cells, retrying on collision, until exactly
    /// `count` distinct mine cells exist. Mines already on the board count.
    ///
    /// # Panics
    ///
    /// If `count` would fill the board; the retry loop could never finish.
    pub fn place_mines<R: Rng + ?Sized>(&mut self, count: CellCount, rng: &mut R) {
        let total = self.total_cells();
        assert!(
            count < total,
            "cannot place {count} mines on {total} cells"
        );

        let size = self.size();
        let mut mines = self.mine_count();
        while mines < count {
            let coords = (rng.random_range(0..size), rng.random_range(0..size));
            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.is_mine {
                log::trace!("mine collision at {coords:?}, retrying");
                continue;
            }
            cell.is_mine = true;
            mines += 1;
        }
        log::debug!("board holds {mines} mines");
    }

    /// Recomputes `mines_around` for every non-mine cell.
    pub fn compute_adjacency(&mut self) {
        for coords in self.coords() {
            if self[coords].is_mine {
                continue;
            }
            let count = self.count_adjacent_mines(coords);
            self.cells[coords.to_nd_index()].mines_around = count;
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size())
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_mine)
    }

    pub fn shown_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_shown)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        let count = self
            .iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count();
        // at most 8 neighbors
        count as u8
    }

    /// Shows a non-mine cell and floods outward through zero-count cells.
    ///
    /// Returns how many cells became shown; zero when the target is a mine,
    /// marked, or already shown.
    pub fn reveal(&mut self, coords: Coord2) -> CellCount {
        let cell = self[coords];
        if cell.is_mine || !cell.is_covered() {
            return 0;
        }

        let mut shown = 0;
        let mut visited = BTreeSet::from([coords]);
        let mut to_visit = VecDeque::from([coords]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            cell.is_shown = true;
            shown += 1;
            log::trace!(
                "showed {visit_coords:?}, mines around: {}",
                cell.mines_around
            );

            if cell.mines_around != 0 {
                continue;
            }

            for pos in self.iter_neighbors(visit_coords) {
                let neighbor = self[pos];
                if neighbor.is_mine || !neighbor.is_covered() {
                    continue;
                }
                if visited.insert(pos) {
                    to_visit.push_back(pos);
                }
            }
        }

        shown
    }

    /// Flips the mark on a cell that is not shown.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_shown {
            return MarkOutcome::NoChange;
        }
        cell.is_marked = !cell.is_marked;
        MarkOutcome::Changed
    }

    pub fn set_marked(&mut self, coords: Coord2, marked: bool) -> MarkOutcome {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_shown || cell.is_marked == marked {
            return MarkOutcome::NoChange;
        }
        cell.is_marked = marked;
        MarkOutcome::Changed
    }

    /// Bumps the click counter of a mine, returning the new count.
    pub fn record_mine_click(&mut self, coords: Coord2) -> u8 {
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.click_count = cell.click_count.saturating_add(1);
        cell.click_count
    }

    /// Forces a single cell shown, dropping any mark it carried.
    pub fn force_show(&mut self, coords: Coord2) {
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.is_shown = true;
        cell.is_marked = false;
    }

    pub fn reveal_all_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine) {
            cell.is_shown = true;
            cell.is_marked = false;
        }
    }

    /// Every cell is shown or marked.
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_settled())
    }

    /// Cells that are neither shown nor marked, row-major.
    pub fn covered_cells(&self) -> Vec<Coord2> {
        self.coords().filter(|&pos| self[pos].is_covered()).collect()
    }

    fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        let count = self.cells.iter().filter(|cell| pred(cell)).count();
        count.try_into().unwrap_or(CellCount::MAX)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell.glyph().as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
