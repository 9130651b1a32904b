//! Unit (entity) snapshots.
//!
//! Every attribute the rules engine might fail to supply is optional;
//! exporters substitute sentinels for the gaps.

use serde::{Deserialize, Serialize};

use super::coords::{Coords, Facing};
use crate::schema::Symbolic;

/// Tactical role assigned to a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitRole {
    Ambusher,
    Brawler,
    Juggernaut,
    MissileBoat,
    Scout,
    Skirmisher,
    Sniper,
    Striker,
    Undetermined,
}

impl Symbolic for UnitRole {
    const ALL: &'static [Self] = &[
        UnitRole::Ambusher,
        UnitRole::Brawler,
        UnitRole::Juggernaut,
        UnitRole::MissileBoat,
        UnitRole::Scout,
        UnitRole::Skirmisher,
        UnitRole::Sniper,
        UnitRole::Striker,
        UnitRole::Undetermined,
    ];

    fn name(self) -> &'static str {
        match self {
            UnitRole::Ambusher => "AMBUSHER",
            UnitRole::Brawler => "BRAWLER",
            UnitRole::Juggernaut => "JUGGERNAUT",
            UnitRole::MissileBoat => "MISSILE_BOAT",
            UnitRole::Scout => "SCOUT",
            UnitRole::Skirmisher => "SKIRMISHER",
            UnitRole::Sniper => "SNIPER",
            UnitRole::Striker => "STRIKER",
            UnitRole::Undetermined => "UNDETERMINED",
        }
    }
}

/// Mounting arc of a weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FiringArc {
    Front,
    Left,
    Right,
    Rear,
    LeftSide,
    RightSide,
    Turret,
    All,
}

impl FiringArc {
    /// Integer code written into weapon data.
    pub const fn code(self) -> i64 {
        match self {
            FiringArc::Front => 0,
            FiringArc::Left => 1,
            FiringArc::Right => 2,
            FiringArc::Rear => 3,
            FiringArc::LeftSide => 4,
            FiringArc::RightSide => 5,
            FiringArc::Turret => 6,
            FiringArc::All => 7,
        }
    }
}

/// Resolved equipment statistics of a weapon type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub damage: i32,
    pub short_range: i32,
    pub medium_range: i32,
    pub long_range: i32,
}

/// A weapon mounted on a unit. `equipment` is `None` when the mount
/// refers to an equipment entry that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponMount {
    #[serde(default)]
    pub name: Option<String>,
    pub arc: FiringArc,
    #[serde(default)]
    pub equipment: Option<WeaponStats>,
}

impl WeaponMount {
    pub fn new(name: &str, arc: FiringArc, stats: WeaponStats) -> Self {
        WeaponMount {
            name: Some(name.to_string()),
            arc,
            equipment: Some(stats),
        }
    }
}

/// State of one unit as reported by the game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitySnapshot {
    pub id: i32,
    pub owner_id: Option<i32>,
    pub team_id: Option<i32>,
    pub chassis: Option<String>,
    pub model: Option<String>,
    pub unit_type: Option<String>,
    pub role: Option<UnitRole>,
    pub position: Option<Coords>,
    pub facing: Option<Facing>,
    /// Remaining armor as a fraction of starting armor, 0.0..=1.0.
    pub armor_remaining: Option<f64>,
    /// Remaining internal structure as a fraction, 0.0..=1.0.
    pub internal_remaining: Option<f64>,
    pub heat: Option<i32>,
    pub heat_capacity: Option<i32>,
    pub walk_mp: Option<i32>,
    pub run_mp: Option<i32>,
    pub jump_mp: Option<i32>,
    pub battle_value: Option<i32>,
    pub tonnage: Option<f64>,
    pub prone: bool,
    pub airborne: bool,
    pub off_board: bool,
    pub crippled: bool,
    pub destroyed: bool,
    pub done: bool,
    pub bot_controlled: bool,
    pub weapons: Vec<WeaponMount>,
}

impl EntitySnapshot {
    pub fn new(id: i32) -> Self {
        EntitySnapshot { id, ..Default::default() }
    }

    /// Longest long-range band over weapons with resolvable equipment.
    pub fn max_weapon_range(&self) -> i32 {
        self.weapons
            .iter()
            .filter_map(|w| w.equipment.map(|e| e.long_range))
            .max()
            .unwrap_or(0)
    }

    /// Sum of per-shot damage over weapons with resolvable equipment,
    /// saturating at the `i32` bounds.
    pub fn total_weapon_damage(&self) -> i32 {
        self.weapons
            .iter()
            .filter_map(|w| w.equipment.map(|e| e.damage))
            .fold(0i32, i32::saturating_add)
    }

    /// Largest movement allowance available this turn.
    pub fn max_mp(&self) -> Option<i32> {
        [self.walk_mp, self.run_mp, self.jump_mp].into_iter().flatten().max()
    }
}
