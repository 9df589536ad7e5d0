//! Per-player board state: typed cell grid, fleet, and observation grids.
//!
//! The board owns one fleet (one ship per class) and two views of the game:
//! its own N×N occupancy grid, and the record of shots this player has fired
//! at the opponent, kept allocation-free in two packed bit grids.

use log::{info, warn};
use rand::Rng;

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, ShotOutcome};
use crate::config::{BOARD_SIZE, CLASSES, NUM_SHIPS};
use crate::ship::{Orientation, Ship, ShipClass};

type Shots<const N: usize> = BitGrid<u128, N>;

/// One grid cell: live-segment flag plus the owning ship class.
///
/// `occupied` is cleared the instant the cell is struck, so a hit cell is
/// indistinguishable from water in the occupancy projection. `owner` is
/// cleared when the hit is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub occupied: bool,
    pub owner: Option<ShipClass>,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        occupied: false,
        owner: None,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}

/// A single player's side of the match.
pub struct Board<const N: usize = BOARD_SIZE> {
    grid: [[Cell; N]; N],
    fleet: [Ship; NUM_SHIPS],
    ships_remaining: usize,
    shot_hits: Shots<N>,
    shot_misses: Shots<N>,
}

impl<const N: usize> Board<N> {
    // the shot grids pack N*N cells into a u128
    const SHOT_GRID_FITS: () = assert!(N * N <= 128, "board size exceeds u128 shot grid capacity");

    /// An empty board with a full fleet of unplaced ships. Boards larger
    /// than 11×11 are rejected at compile time.
    pub fn new() -> Self {
        let () = Self::SHOT_GRID_FITS;
        Board {
            grid: [[Cell::EMPTY; N]; N],
            fleet: core::array::from_fn(|i| Ship::new(CLASSES[i])),
            ships_remaining: 0,
            shot_hits: Shots::new(),
            shot_misses: Shots::new(),
        }
    }

    /// Immutable view of the fleet, in class index order.
    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    /// The fleet member of `class`.
    pub fn ship(&self, class: ShipClass) -> &Ship {
        &self.fleet[class.index()]
    }

    /// Ships placed with at least one segment and not yet fully sunk.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    /// The cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= N || col >= N {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.grid[row][col])
    }

    /// Record placement intent for `class` and flag it placed, independent of
    /// and prior to the physical write. Re-placement is gated by the match.
    pub fn mark_placed(&mut self, class: ShipClass, origin: (usize, usize), orientation: Orientation) {
        self.fleet[class.index()].assign(origin, orientation);
    }

    /// Write the ship of `class` onto the grid from its recorded origin.
    ///
    /// Segments that fall outside the grid or on an occupied cell are
    /// silently skipped; the cursor still advances, so a ship overlapping the
    /// edge only loses its tail. Health counts written segments only. A ship
    /// with at least one written segment counts toward `ships_remaining`.
    pub fn place_ship(&mut self, class: ShipClass) {
        let (row0, col0) = self.fleet[class.index()].origin();
        let orientation = self.fleet[class.index()].orientation();
        let mut written = 0;
        for i in 0..class.segments() {
            // saturating: an origin near usize::MAX must stay out of bounds
            let (row, col) = match orientation {
                Orientation::Vertical => (row0.saturating_add(i), col0),
                Orientation::Horizontal => (row0, col0.saturating_add(i)),
            };
            if row >= N || col >= N || self.grid[row][col].occupied {
                warn!("{} ship lost a segment at ({}, {})", class, row, col);
                continue;
            }
            self.grid[row][col] = Cell {
                occupied: true,
                owner: Some(class),
            };
            written += 1;
        }
        if written > 0 {
            self.fleet[class.index()].add_segments(written);
            self.ships_remaining += 1;
        }
        info!(
            "placed {} ship: {} of {} segments on the board",
            class,
            written,
            class.segments()
        );
    }

    /// Resolve an incoming shot at (row, col).
    ///
    /// Clears the cell's live flag unconditionally, so a second shot at the
    /// same cell is a harmless miss. A consumed hit clears the owner and
    /// decrements that ship; sinking the ship also decrements
    /// `ships_remaining`.
    pub fn resolve_shot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        if row >= N || col >= N {
            return Err(BoardError::OutOfBounds { row, col });
        }
        let cell = &mut self.grid[row][col];
        cell.occupied = false;
        let Some(class) = cell.owner.take() else {
            info!("water!");
            return Ok(ShotOutcome::Miss);
        };
        info!("hit!");
        if self.fleet[class.index()].record_hit() {
            self.ships_remaining = self.ships_remaining.saturating_sub(1);
            info!("{} ship sunk!", class);
            return Ok(ShotOutcome::Sunk(class));
        }
        Ok(ShotOutcome::Hit)
    }

    /// True once every fleet member has a recorded placement.
    pub fn all_ships_placed(&self) -> bool {
        self.fleet.iter().all(|ship| ship.is_placed())
    }

    /// Record the outcome of a shot this player fired at the opponent.
    /// Last write wins: re-firing at a struck cell downgrades it to a miss.
    pub fn record_shot(&mut self, row: usize, col: usize, hit: bool) -> Result<(), BoardError> {
        if hit {
            self.shot_hits.set(row, col)?;
            self.shot_misses.clear(row, col)?;
        } else {
            self.shot_misses.set(row, col)?;
            self.shot_hits.clear(row, col)?;
        }
        Ok(())
    }

    /// Occupancy projection: 1 where a live segment sits, 0 elsewhere.
    pub fn occupancy(&self) -> [[u8; N]; N] {
        core::array::from_fn(|r| core::array::from_fn(|c| self.grid[r][c].occupied as u8))
    }

    /// Observation projection of this player's own shots:
    /// 0 = not fired, 1 = miss, 2 = hit.
    pub fn observations(&self) -> [[u8; N]; N] {
        core::array::from_fn(|r| {
            core::array::from_fn(|c| {
                if self.shot_hits.get(r, c).unwrap_or(false) {
                    2
                } else if self.shot_misses.get(r, c).unwrap_or(false) {
                    1
                } else {
                    0
                }
            })
        })
    }

    /// Returns a random in-bounds, non-overlapping (row, col, orientation)
    /// for `class`. Never produces a placement the lenient writer would
    /// truncate.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        class: ShipClass,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        let len = class.segments();
        let mut attempts = 0;
        while attempts < 100 {
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let max_r = if orientation == Orientation::Vertical {
                N - len
            } else {
                N - 1
            };
            let max_c = if orientation == Orientation::Horizontal {
                N - len
            } else {
                N - 1
            };
            let row = rng.random_range(0..=max_r);
            let col = rng.random_range(0..=max_c);
            if self.fits(row, col, orientation, len) {
                return Ok((row, col, orientation));
            }
        }
        Err(BoardError::UnableToPlace(class))
    }

    fn fits(&self, row: usize, col: usize, orientation: Orientation, len: usize) -> bool {
        (0..len).all(|i| {
            let (r, c) = match orientation {
                Orientation::Vertical => (row + i, col),
                Orientation::Horizontal => (row, col + i),
            };
            r < N && c < N && !self.grid[r][c].occupied
        })
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}
