//! Ship classes and per-ship placement state.

use core::fmt;

/// Class of a ship. Each class has a fixed segment count and a fleet
/// contains exactly one ship of each class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipClass {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl ShipClass {
    /// Number of grid cells the class occupies when fully placed.
    pub const fn segments(self) -> usize {
        match self {
            ShipClass::Small => 2,
            ShipClass::Medium => 3,
            ShipClass::Large => 4,
            ShipClass::ExtraLarge => 5,
        }
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipClass::Small => "small",
            ShipClass::Medium => "medium",
            ShipClass::Large => "large",
            ShipClass::ExtraLarge => "extra-large",
        }
    }

    /// Stable fleet index of the class.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orientation of a ship on the board. Successive segments advance the row
/// (vertical) or the column (horizontal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// A single ship of a fleet: placement intent plus remaining health.
///
/// Ships carry no validation logic. The board decides which segments
/// actually land on cells; `remaining_segments` only counts those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    origin: (usize, usize),
    orientation: Orientation,
    remaining_segments: usize,
    placed: bool,
}

impl Ship {
    /// A new unplaced ship of `class` with no live segments.
    pub fn new(class: ShipClass) -> Self {
        Ship {
            class,
            origin: (0, 0),
            orientation: Orientation::Vertical,
            remaining_segments: 0,
            placed: false,
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Recorded origin (row, col); meaningful once placed.
    pub fn origin(&self) -> (usize, usize) {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments still afloat. Never exceeds `class().segments()`.
    pub fn remaining_segments(&self) -> usize {
        self.remaining_segments
    }

    /// True once an origin and orientation have been assigned.
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// True when every segment that made it onto the board has been hit.
    pub fn is_sunk(&self) -> bool {
        self.placed && self.remaining_segments == 0
    }

    /// Record placement intent. Duplicate placement is gated by the match
    /// layer, not here.
    pub(crate) fn assign(&mut self, origin: (usize, usize), orientation: Orientation) {
        self.origin = origin;
        self.orientation = orientation;
        self.placed = true;
    }

    /// Credit segments that were actually written to the board.
    pub(crate) fn add_segments(&mut self, count: usize) {
        self.remaining_segments += count;
    }

    /// Register one confirmed hit. Returns `true` when this hit sank the ship.
    pub(crate) fn record_hit(&mut self) -> bool {
        self.remaining_segments = self.remaining_segments.saturating_sub(1);
        self.remaining_segments == 0
    }
}
