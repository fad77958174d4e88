//! Core types shared across the engine
//! This module contains pure data types and tuning constants with no logic
//! beyond string conversions.

use serde::{Deserialize, Serialize};

/// Board dimensions (the board is square and fixed for the whole system)
pub const BOARD_SIZE: usize = 8;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of pieces offered to the player at once
pub const HAND_SIZE: usize = 3;

/// Piece kinds: the seven tetromino-like core shapes plus the extended
/// catalog used by the weighted generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
    Dot,
    Line2,
    Line3,
    Line5,
    Corner,
    BigCorner,
    Square2,
    Square3,
    Rect2x3,
}

/// Every kind, in catalog order (also the shape-table index order).
pub const ALL_KINDS: [PieceKind; 16] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
    PieceKind::Dot,
    PieceKind::Line2,
    PieceKind::Line3,
    PieceKind::Line5,
    PieceKind::Corner,
    PieceKind::BigCorner,
    PieceKind::Square2,
    PieceKind::Square3,
    PieceKind::Rect2x3,
];

/// The seven kinds that make up every classic bag.
pub const CORE_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
];

/// Extended kinds, each added to a classic bag with 50% probability.
pub const EXTENDED_KINDS: [PieceKind; 9] = [
    PieceKind::Dot,
    PieceKind::Line2,
    PieceKind::Line3,
    PieceKind::Line5,
    PieceKind::Corner,
    PieceKind::BigCorner,
    PieceKind::Square2,
    PieceKind::Square3,
    PieceKind::Rect2x3,
];

impl PieceKind {
    /// Index into the shape table (catalog order).
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
            PieceKind::Dot => 7,
            PieceKind::Line2 => 8,
            PieceKind::Line3 => 9,
            PieceKind::Line5 => 10,
            PieceKind::Corner => 11,
            PieceKind::BigCorner => 12,
            PieceKind::Square2 => 13,
            PieceKind::Square3 => 14,
            PieceKind::Rect2x3 => 15,
        }
    }

    /// Parse piece kind from its snake_case snapshot name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "dot" => Some(PieceKind::Dot),
            "line2" => Some(PieceKind::Line2),
            "line3" => Some(PieceKind::Line3),
            "line5" => Some(PieceKind::Line5),
            "corner" => Some(PieceKind::Corner),
            "big_corner" => Some(PieceKind::BigCorner),
            "square2" => Some(PieceKind::Square2),
            "square3" => Some(PieceKind::Square3),
            "rect2x3" => Some(PieceKind::Rect2x3),
            _ => None,
        }
    }

    /// Convert to the stable snake_case name used in snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::Dot => "dot",
            PieceKind::Line2 => "line2",
            PieceKind::Line3 => "line3",
            PieceKind::Line5 => "line5",
            PieceKind::Corner => "corner",
            PieceKind::BigCorner => "big_corner",
            PieceKind::Square2 => "square2",
            PieceKind::Square3 => "square3",
            PieceKind::Rect2x3 => "rect2x3",
        }
    }

    /// Whether this kind belongs to the extended catalog
    pub fn is_extended(self) -> bool {
        self.index() >= CORE_KINDS.len()
    }

    /// Display color for cells occupied by this kind
    pub fn color(self) -> PieceColor {
        match self {
            PieceKind::I => PieceColor::Cyan,
            PieceKind::O => PieceColor::Yellow,
            PieceKind::T => PieceColor::Purple,
            PieceKind::S => PieceColor::Green,
            PieceKind::Z => PieceColor::Red,
            PieceKind::J => PieceColor::Blue,
            PieceKind::L => PieceColor::Orange,
            PieceKind::Dot => PieceColor::Pink,
            PieceKind::Line2 => PieceColor::Teal,
            PieceKind::Line3 => PieceColor::Teal,
            PieceKind::Line5 => PieceColor::Indigo,
            PieceKind::Corner => PieceColor::Lime,
            PieceKind::BigCorner => PieceColor::Lime,
            PieceKind::Square2 => PieceColor::Amber,
            PieceKind::Square3 => PieceColor::Amber,
            PieceKind::Rect2x3 => PieceColor::Indigo,
        }
    }
}

/// Cell colors. Serialized by name in the persistence grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
    Pink,
    Teal,
    Lime,
    Amber,
    Indigo,
}

impl PieceColor {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cyan" => Some(PieceColor::Cyan),
            "yellow" => Some(PieceColor::Yellow),
            "purple" => Some(PieceColor::Purple),
            "green" => Some(PieceColor::Green),
            "red" => Some(PieceColor::Red),
            "blue" => Some(PieceColor::Blue),
            "orange" => Some(PieceColor::Orange),
            "pink" => Some(PieceColor::Pink),
            "teal" => Some(PieceColor::Teal),
            "lime" => Some(PieceColor::Lime),
            "amber" => Some(PieceColor::Amber),
            "indigo" => Some(PieceColor::Indigo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::Cyan => "cyan",
            PieceColor::Yellow => "yellow",
            PieceColor::Purple => "purple",
            PieceColor::Green => "green",
            PieceColor::Red => "red",
            PieceColor::Blue => "blue",
            PieceColor::Orange => "orange",
            PieceColor::Pink => "pink",
            PieceColor::Teal => "teal",
            PieceColor::Lime => "lime",
            PieceColor::Amber => "amber",
            PieceColor::Indigo => "indigo",
        }
    }
}

/// Rotation states, quarter turns clockwise from the catalog orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

pub const ALL_ROTATIONS: [Rotation; 4] = [
    Rotation::R0,
    Rotation::R90,
    Rotation::R180,
    Rotation::R270,
];

impl Rotation {
    /// Rotate clockwise by a quarter turn
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    pub fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Rotation::R0),
            1 => Some(Rotation::R90),
            2 => Some(Rotation::R180),
            3 => Some(Rotation::R270),
            _ => None,
        }
    }
}

/// Cell on the board (None = empty, Some = filled with a piece color)
pub type Cell = Option<PieceColor>;

/// Line clear points grow with the triangular number of the simultaneous
/// clear count: 10, 30, 60, 100, ...
pub const POINTS_PER_LINE_STEP: u32 = 10;

/// Combo bonus awarded per (combo index x lines cleared)
pub const COMBO_BASE: u32 = 10;
