//! Hex map board.
//!
//! The board owns the textual form of its hexes; exporters treat each
//! hex token as opaque.

use serde::{Deserialize, Serialize};

use super::coords::Coords;

/// One terrain feature present on a hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terrain {
    pub kind: String,
    #[serde(default)]
    pub level: i32,
}

/// A single hex: base elevation plus its terrain features.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hex {
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub terrains: Vec<Terrain>,
}

impl Hex {
    /// Compact text form: elevation, then `kind:level` per terrain,
    /// separated by semicolons (e.g. `2;woods:1;water:1`).
    pub fn token(&self) -> String {
        let mut out = self.level.to_string();
        for t in &self.terrains {
            out.push(';');
            out.push_str(&t.kind);
            out.push(':');
            out.push_str(&t.level.to_string());
        }
        out
    }
}

/// A rectangular board of hexes stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub name: Option<String>,
    pub width: i32,
    pub height: i32,
    /// Row-major hexes; missing or short entries mean the hex is unknown.
    #[serde(default)]
    pub hexes: Vec<Option<Hex>>,
}

impl Board {
    /// Creates a board of plain level-0 hexes.
    pub fn flat(width: i32, height: i32) -> Self {
        let count = (width.max(0) as usize).saturating_mul(height.max(0) as usize);
        Board {
            name: None,
            width,
            height,
            hexes: vec![Some(Hex::default()); count],
        }
    }

    pub fn contains(&self, c: Coords) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height
    }

    /// Row-major index of an on-board position.
    fn index(&self, c: Coords) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        (c.y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(c.x as usize)
    }

    /// Returns the hex at a position, if on the board and known.
    pub fn hex(&self, c: Coords) -> Option<&Hex> {
        let idx = self.index(c)?;
        self.hexes.get(idx).and_then(|h| h.as_ref())
    }

    /// Replaces the hex at a position. Returns false if off the board.
    pub fn set_hex(&mut self, c: Coords, hex: Hex) -> bool {
        let Some(idx) = self.index(c) else {
            return false;
        };
        if self.hexes.len() <= idx {
            self.hexes.resize(idx + 1, None);
        }
        self.hexes[idx] = Some(hex);
        true
    }
}
