//! Declared attacks.

use serde::{Deserialize, Serialize};

use crate::schema::Symbolic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttackKind {
    Weapon,
    Punch,
    Kick,
    Push,
    Club,
    Charge,
    Dfa,
}

impl Symbolic for AttackKind {
    const ALL: &'static [Self] = &[
        AttackKind::Weapon,
        AttackKind::Punch,
        AttackKind::Kick,
        AttackKind::Push,
        AttackKind::Club,
        AttackKind::Charge,
        AttackKind::Dfa,
    ];

    fn name(self) -> &'static str {
        match self {
            AttackKind::Weapon => "WEAPON",
            AttackKind::Punch => "PUNCH",
            AttackKind::Kick => "KICK",
            AttackKind::Push => "PUSH",
            AttackKind::Club => "CLUB",
            AttackKind::Charge => "CHARGE",
            AttackKind::Dfa => "DFA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetKind {
    Entity,
    Hex,
    Building,
    Minefield,
}

impl Symbolic for TargetKind {
    const ALL: &'static [Self] = &[
        TargetKind::Entity,
        TargetKind::Hex,
        TargetKind::Building,
        TargetKind::Minefield,
    ];

    fn name(self) -> &'static str {
        match self {
            TargetKind::Entity => "ENTITY",
            TargetKind::Hex => "HEX",
            TargetKind::Building => "BUILDING",
            TargetKind::Minefield => "MINEFIELD",
        }
    }
}

/// One attack declared by a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackSnapshot {
    pub attacker_id: i32,
    pub kind: AttackKind,
    #[serde(default)]
    pub target_id: Option<i32>,
    #[serde(default)]
    pub target_kind: Option<TargetKind>,
    #[serde(default)]
    pub weapon_id: Option<i32>,
    #[serde(default)]
    pub weapon_name: Option<String>,
    /// Modified 2d6 target number; `None` when the attack cannot hit.
    #[serde(default)]
    pub to_hit: Option<i32>,
    #[serde(default)]
    pub aimed_location: Option<String>,
}

impl AttackSnapshot {
    pub fn new(attacker_id: i32, kind: AttackKind) -> Self {
        AttackSnapshot {
            attacker_id,
            kind,
            target_id: None,
            target_kind: None,
            weapon_id: None,
            weapon_name: None,
            to_hit: None,
            aimed_location: None,
        }
    }
}
