//! The match state machine: phase gating, turn order, and win detection.

use core::fmt;

use log::info;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, ShipClass};

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::P1 => 0,
            PlayerId::P2 => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::P1 => f.write_str("p1"),
            PlayerId::P2 => f.write_str("p2"),
        }
    }
}

/// Lifecycle phase of a match. Placement happens in `Initialized`; there is
/// no separate placing phase, an incomplete fleet is simply observable
/// through [`Game::play`]'s rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Uninitialized,
    Initialized,
    Active,
    Ended,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Uninitialized => "uninitialized",
            Phase::Initialized => "initialized",
            Phase::Active => "active",
            Phase::Ended => "ended",
        };
        f.write_str(name)
    }
}

/// Rejected-operation reasons. Every rejection leaves the match untouched;
/// there is no fatal error class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Operation is not allowed in the current phase.
    Phase { op: &'static str, phase: Phase },
    /// That player already placed their ship of this class.
    ShipAlreadyPlaced { player: PlayerId, class: ShipClass },
    /// `play()` called while at least one fleet is incomplete.
    FleetIncomplete { p1_ready: bool, p2_ready: bool },
    /// Shot coordinate outside the grid on either axis; turn does not advance.
    ShotOutOfRange { row: usize, col: usize },
    /// Board-level failure.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Phase { op, phase } => {
                write!(f, "cannot {} while the game is {}", op, phase)
            }
            GameError::ShipAlreadyPlaced { player, class } => {
                write!(f, "{} ship of {} is already placed", class, player)
            }
            GameError::FleetIncomplete { p1_ready, p2_ready } => {
                // never constructed with both sides ready
                let sides = match (*p1_ready, *p2_ready) {
                    (false, false) => "p1 and p2 incomplete",
                    (false, true) => "p1 incomplete",
                    _ => "p2 incomplete",
                };
                write!(f, "not all ships are placed ({})", sides)
            }
            GameError::ShotOutOfRange { row, col } => {
                write!(f, "coordinates ({}, {}) exceed board limits, try again", row, col)
            }
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// A complete two-player match. Owns both boards for its lifetime and is the
/// sole mutator of either; execution is fully synchronous.
pub struct Game<const N: usize = BOARD_SIZE> {
    boards: [Board<N>; 2],
    phase: Phase,
    turn: PlayerId,
    winner: Option<PlayerId>,
}

impl<const N: usize> Game<N> {
    /// A fresh uninitialized match.
    pub fn new() -> Self {
        Game {
            boards: [Board::new(), Board::new()],
            phase: Phase::Uninitialized,
            turn: PlayerId::P1,
            winner: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player to act next; meaningful only while the match is active.
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Winner, set only once the match has ended.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Read access to one side's board.
    pub fn board(&self, player: PlayerId) -> &Board<N> {
        &self.boards[player.index()]
    }

    /// Move the match into the placement phase.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Uninitialized {
            return Err(GameError::Phase {
                op: "start",
                phase: self.phase,
            });
        }
        self.phase = Phase::Initialized;
        info!("game started, place ships");
        Ok(())
    }

    /// Place one ship for `player`: record intent, then write it to the
    /// board under the lenient segment policy.
    pub fn place_boat(
        &mut self,
        player: PlayerId,
        class: ShipClass,
        origin: (usize, usize),
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.phase != Phase::Initialized {
            return Err(GameError::Phase {
                op: "place a ship",
                phase: self.phase,
            });
        }
        let board = &mut self.boards[player.index()];
        if board.ship(class).is_placed() {
            return Err(GameError::ShipAlreadyPlaced { player, class });
        }
        board.mark_placed(class, origin, orientation);
        board.place_ship(class);
        Ok(())
    }

    /// Attempt to begin play. Succeeds only when both fleets are fully
    /// placed; otherwise reports which side is incomplete and stays put.
    pub fn play(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Initialized {
            return Err(GameError::Phase {
                op: "play",
                phase: self.phase,
            });
        }
        let p1_ready = self.boards[0].all_ships_placed();
        let p2_ready = self.boards[1].all_ships_placed();
        if !(p1_ready && p2_ready) {
            return Err(GameError::FleetIncomplete { p1_ready, p2_ready });
        }
        self.phase = Phase::Active;
        self.turn = PlayerId::P1;
        info!("all ready, {} starts", self.turn);
        Ok(())
    }

    /// Fire at (row, col) on the defender's board for the player whose turn
    /// it is. A miss passes the turn; a hit grants another shot. Ends the
    /// match as soon as either fleet has no ships remaining.
    pub fn shot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GameError> {
        if self.phase != Phase::Active {
            return Err(GameError::Phase {
                op: "shoot",
                phase: self.phase,
            });
        }
        if row >= N || col >= N {
            return Err(GameError::ShotOutOfRange { row, col });
        }
        let attacker = self.turn;
        let defender = attacker.opponent();
        info!("{} shot at ({}, {})", attacker, row, col);
        let outcome = self.boards[defender.index()].resolve_shot(row, col)?;
        self.boards[attacker.index()].record_shot(row, col, outcome.is_hit())?;
        if !outcome.is_hit() {
            self.turn = defender;
        }
        self.check_game_ended();
        Ok(outcome)
    }

    fn check_game_ended(&mut self) {
        let winner = if self.boards[0].ships_remaining() == 0 {
            PlayerId::P2
        } else if self.boards[1].ships_remaining() == 0 {
            PlayerId::P1
        } else {
            return;
        };
        self.phase = Phase::Ended;
        self.winner = Some(winner);
        info!("{} won, sunk all enemy ships!", winner);
    }

    /// Read-only projection of `player`'s occupancy grid (0/1 per cell).
    pub fn show_board(&self, player: PlayerId) -> Result<[[u8; N]; N], GameError> {
        if self.phase == Phase::Uninitialized {
            return Err(GameError::Phase {
                op: "show a board",
                phase: self.phase,
            });
        }
        Ok(self.boards[player.index()].occupancy())
    }

    /// Read-only projection of `player`'s own shots (0 unknown, 1 miss,
    /// 2 hit per cell).
    pub fn show_guide_board(&self, player: PlayerId) -> Result<[[u8; N]; N], GameError> {
        if self.phase == Phase::Uninitialized {
            return Err(GameError::Phase {
                op: "show a guide board",
                phase: self.phase,
            });
        }
        Ok(self.boards[player.index()].observations())
    }
}

impl<const N: usize> Default for Game<N> {
    fn default() -> Self {
        Self::new()
    }
}
