//! Concrete record schemas.
//!
//! Each schema pairs a field enumeration with a versioned line marker and a
//! factory that fills a record from snapshot data. Missing snapshot data is
//! replaced with sentinels rather than reported:
//!   -1         missing coordinate, id, or count
//!   "UNKNOWN"  missing type or name text
//!   "NONE"     missing role (written by the codec for an absent role)

pub mod board;
pub mod enrichment;
pub mod game;
pub mod map_settings;
pub mod planetary;
pub mod unit_action;
pub mod unit_attack;
pub mod unit_state;
pub mod weapons;

use crate::schema::format::marker_of;

pub use board::{board_lines, board_record, BoardField};
pub use enrichment::{enrichment_record, UnitEnrichmentField};
pub use game::{game_record, GameField};
pub use map_settings::{map_settings_record, MapSettingsField};
pub use planetary::{planetary_record, PlanetaryField};
pub use unit_action::{UnitAction, UnitActionField};
pub use unit_attack::{attack_record, UnitAttackField};
pub use unit_state::{UnitState, UnitStateField};
pub use weapons::{decode_weapons, encode_weapon, encode_weapons, WEAPON_STRIDE};

/// Sentinel for missing coordinates, ids, and counts.
pub const MISSING: i32 = -1;

/// Sentinel for missing type or name text.
pub const UNKNOWN: &str = "UNKNOWN";

/// Sentinel for a unit without an assigned role.
pub const NO_ROLE: &str = "NONE";

/// Identifies which schema produced a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Board,
    Game,
    UnitState,
    UnitAction,
    UnitAttack,
    UnitEnrichment,
    MapSettings,
    PlanetaryConditions,
}

pub const ALL_SCHEMA_KINDS: [SchemaKind; 8] = [
    SchemaKind::Board,
    SchemaKind::Game,
    SchemaKind::UnitState,
    SchemaKind::UnitAction,
    SchemaKind::UnitAttack,
    SchemaKind::UnitEnrichment,
    SchemaKind::MapSettings,
    SchemaKind::PlanetaryConditions,
];

impl SchemaKind {
    /// The versioned line marker written by this schema.
    pub const fn marker(self) -> &'static str {
        match self {
            SchemaKind::Board => board::MARKER,
            SchemaKind::Game => game::MARKER,
            SchemaKind::UnitState => unit_state::MARKER,
            SchemaKind::UnitAction => unit_action::MARKER,
            SchemaKind::UnitAttack => unit_attack::MARKER,
            SchemaKind::UnitEnrichment => enrichment::MARKER,
            SchemaKind::MapSettings => map_settings::MARKER,
            SchemaKind::PlanetaryConditions => planetary::MARKER,
        }
    }

    /// Identifies a marker token.
    pub fn from_marker(marker: &str) -> Option<SchemaKind> {
        ALL_SCHEMA_KINDS.iter().copied().find(|k| k.marker() == marker)
    }

    /// Identifies the schema of a whole line by its leading marker.
    pub fn of_line(line: &str) -> Option<SchemaKind> {
        Self::from_marker(marker_of(line))
    }
}
