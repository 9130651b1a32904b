//! Read-only snapshots of live game state.
//!
//! These are the inputs the exporters consume: a game with its units,
//! board and conditions, plus the movement paths and attacks recorded for
//! one round. Anything the rules engine could not supply is `None`.

pub mod attack;
pub mod board;
pub mod conditions;
pub mod coords;
pub mod entity;
pub mod game;
pub mod path;

use serde::{Deserialize, Serialize};

pub use attack::{AttackKind, AttackSnapshot, TargetKind};
pub use board::{Board, Hex, Terrain};
pub use conditions::{Atmosphere, Fog, Light, MapLayout, PlanetaryConditions, Weather, Wind};
pub use coords::{Coords, Facing};
pub use entity::{EntitySnapshot, FiringArc, UnitRole, WeaponMount, WeaponStats};
pub use game::{GamePhase, GameSnapshot, Minefield};
pub use path::{odds_above, MovePathSnapshot, MoveStep};

/// Everything recorded for one round: the game state after the round's
/// actions, the movement paths taken, and the attacks declared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundSnapshot {
    pub game: GameSnapshot,
    pub moves: Vec<MovePathSnapshot>,
    pub attacks: Vec<AttackSnapshot>,
}
