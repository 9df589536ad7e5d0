use crate::ship::ShipClass;

/// Default board edge length.
pub const BOARD_SIZE: usize = 10;

/// Number of ships in a fleet, one per class.
pub const NUM_SHIPS: usize = 4;

/// Fleet composition in index order.
pub const CLASSES: [ShipClass; NUM_SHIPS] = [
    ShipClass::Small,
    ShipClass::Medium,
    ShipClass::Large,
    ShipClass::ExtraLarge,
];

/// Total number of ship segments in a fully placed fleet.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 4 + 5;
