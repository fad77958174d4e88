//! Pieces module - shape catalog for every piece kind and rotation
//!
//! Shapes are normalized cell offsets from the piece's top-left corner,
//! looked up in one const table keyed by (kind, rotation). Rotations that
//! produce identical footprints (O, Dot, the squares) share entries.

use crate::types::{PieceColor, PieceKind, Rotation};

/// Offset of a single cell relative to the piece's top-left corner,
/// as (row, col). Offsets are normalized: every shape touches row 0 and
/// col 0 and contains no negative offsets.
pub type CellOffset = (u8, u8);

/// Shape of a piece for one rotation
pub type PieceShape = &'static [CellOffset];

// I
const I_H: PieceShape = &[(0, 0), (0, 1), (0, 2), (0, 3)];
const I_V: PieceShape = &[(0, 0), (1, 0), (2, 0), (3, 0)];

// O (identical in every rotation)
const O_ALL: PieceShape = &[(0, 0), (0, 1), (1, 0), (1, 1)];

// T
const T_R0: PieceShape = &[(0, 1), (1, 0), (1, 1), (1, 2)];
const T_R90: PieceShape = &[(0, 0), (1, 0), (1, 1), (2, 0)];
const T_R180: PieceShape = &[(0, 0), (0, 1), (0, 2), (1, 1)];
const T_R270: PieceShape = &[(0, 1), (1, 0), (1, 1), (2, 1)];

// S (half-turn symmetric)
const S_H: PieceShape = &[(0, 1), (0, 2), (1, 0), (1, 1)];
const S_V: PieceShape = &[(0, 0), (1, 0), (1, 1), (2, 1)];

// Z (half-turn symmetric)
const Z_H: PieceShape = &[(0, 0), (0, 1), (1, 1), (1, 2)];
const Z_V: PieceShape = &[(0, 1), (1, 0), (1, 1), (2, 0)];

// J
const J_R0: PieceShape = &[(0, 0), (1, 0), (1, 1), (1, 2)];
const J_R90: PieceShape = &[(0, 0), (0, 1), (1, 0), (2, 0)];
const J_R180: PieceShape = &[(0, 0), (0, 1), (0, 2), (1, 2)];
const J_R270: PieceShape = &[(0, 1), (1, 1), (2, 0), (2, 1)];

// L
const L_R0: PieceShape = &[(0, 2), (1, 0), (1, 1), (1, 2)];
const L_R90: PieceShape = &[(0, 0), (1, 0), (2, 0), (2, 1)];
const L_R180: PieceShape = &[(0, 0), (0, 1), (0, 2), (1, 0)];
const L_R270: PieceShape = &[(0, 0), (0, 1), (1, 1), (2, 1)];

// Extended catalog
const DOT_ALL: PieceShape = &[(0, 0)];

const LINE2_H: PieceShape = &[(0, 0), (0, 1)];
const LINE2_V: PieceShape = &[(0, 0), (1, 0)];

const LINE3_H: PieceShape = &[(0, 0), (0, 1), (0, 2)];
const LINE3_V: PieceShape = &[(0, 0), (1, 0), (2, 0)];

const LINE5_H: PieceShape = &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)];
const LINE5_V: PieceShape = &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)];

const CORNER_R0: PieceShape = &[(0, 0), (1, 0), (1, 1)];
const CORNER_R90: PieceShape = &[(0, 0), (0, 1), (1, 0)];
const CORNER_R180: PieceShape = &[(0, 0), (0, 1), (1, 1)];
const CORNER_R270: PieceShape = &[(0, 1), (1, 0), (1, 1)];

const BIG_CORNER_R0: PieceShape = &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)];
const BIG_CORNER_R90: PieceShape = &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)];
const BIG_CORNER_R180: PieceShape = &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)];
const BIG_CORNER_R270: PieceShape = &[(0, 2), (1, 2), (2, 0), (2, 1), (2, 2)];

const SQUARE3_ALL: PieceShape = &[
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];

const RECT2X3_H: PieceShape = &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)];
const RECT2X3_V: PieceShape = &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)];

/// Shape lookup table, indexed by [kind.index()][rotation.index()].
/// Built entirely at compile time.
const SHAPE_TABLE: [[PieceShape; 4]; 16] = [
    [I_H, I_V, I_H, I_V],
    [O_ALL, O_ALL, O_ALL, O_ALL],
    [T_R0, T_R90, T_R180, T_R270],
    [S_H, S_V, S_H, S_V],
    [Z_H, Z_V, Z_H, Z_V],
    [J_R0, J_R90, J_R180, J_R270],
    [L_R0, L_R90, L_R180, L_R270],
    [DOT_ALL, DOT_ALL, DOT_ALL, DOT_ALL],
    [LINE2_H, LINE2_V, LINE2_H, LINE2_V],
    [LINE3_H, LINE3_V, LINE3_H, LINE3_V],
    [LINE5_H, LINE5_V, LINE5_H, LINE5_V],
    [CORNER_R0, CORNER_R90, CORNER_R180, CORNER_R270],
    [BIG_CORNER_R0, BIG_CORNER_R90, BIG_CORNER_R180, BIG_CORNER_R270],
    [O_ALL, O_ALL, O_ALL, O_ALL],
    [SQUARE3_ALL, SQUARE3_ALL, SQUARE3_ALL, SQUARE3_ALL],
    [RECT2X3_H, RECT2X3_V, RECT2X3_H, RECT2X3_V],
];

/// Get the shape (cell offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPE_TABLE[kind.index()][rotation.index() as usize]
}

impl PieceKind {
    /// Number of cells this kind occupies (rotation independent)
    pub fn cell_count(self) -> usize {
        SHAPE_TABLE[self.index()][0].len()
    }
}

/// An immutable piece value: a kind at a fixed rotation.
/// Identity is (kind, rotation); everything else is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: Rotation,
}

impl Piece {
    pub fn new(kind: PieceKind, rotation: Rotation) -> Self {
        Self { kind, rotation }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Cell offsets for this piece's rotation
    pub fn cells(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    pub fn cell_count(&self) -> usize {
        self.cells().len()
    }

    pub fn color(&self) -> PieceColor {
        self.kind.color()
    }

    /// Bounding height in rows
    pub fn height(&self) -> usize {
        self.cells().iter().map(|&(r, _)| r as usize).max().unwrap_or(0) + 1
    }

    /// Bounding width in columns
    pub fn width(&self) -> usize {
        self.cells().iter().map(|&(_, c)| c as usize).max().unwrap_or(0) + 1
    }

    /// The same kind rotated a quarter turn clockwise
    pub fn rotated_cw(&self) -> Self {
        Self::new(self.kind, self.rotation.rotate_cw())
    }
}
