//! Hex coordinates and facings.
//!
//! Boards use offset coordinates: `x` is the column, `y` the row, and odd
//! columns sit half a hex lower than even ones.

use serde::{Deserialize, Serialize};

use crate::schema::Symbolic;

/// A hex position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub const fn new(x: i32, y: i32) -> Self {
        Coords { x, y }
    }

    /// Converts to cube coordinates (q, r, s) with q + r + s == 0.
    fn cube(self) -> (i32, i32, i32) {
        let q = self.x;
        let r = self.y - (self.x - (self.x & 1)) / 2;
        (q, r, -q - r)
    }

    /// Number of hex steps between two positions.
    pub fn distance(self, other: Coords) -> i32 {
        let (q1, r1, s1) = self.cube();
        let (q2, r2, s2) = other.cube();
        (q1 - q2).abs().max((r1 - r2).abs()).max((s1 - s2).abs())
    }

    /// Renders as `x,y`, the form used inside list cells.
    pub fn token(self) -> String {
        format!("{},{}", self.x, self.y)
    }
}

/// One of the six hex-side directions, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Facing {
    N,
    Ne,
    Se,
    S,
    Sw,
    Nw,
}

impl Facing {
    /// Numeric facing, 0 (north) through 5 (north-west).
    pub const fn code(self) -> i32 {
        match self {
            Facing::N => 0,
            Facing::Ne => 1,
            Facing::Se => 2,
            Facing::S => 3,
            Facing::Sw => 4,
            Facing::Nw => 5,
        }
    }

    pub fn from_code(code: i32) -> Option<Facing> {
        Facing::ALL.iter().copied().find(|f| f.code() == code)
    }
}

impl Symbolic for Facing {
    const ALL: &'static [Self] = &[
        Facing::N,
        Facing::Ne,
        Facing::Se,
        Facing::S,
        Facing::Sw,
        Facing::Nw,
    ];

    fn name(self) -> &'static str {
        match self {
            Facing::N => "N",
            Facing::Ne => "NE",
            Facing::Se => "SE",
            Facing::S => "S",
            Facing::Sw => "SW",
            Facing::Nw => "NW",
        }
    }
}
