//! Game-level snapshot: round, phase, turn order, units, and minefields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::conditions::{MapLayout, PlanetaryConditions};
use super::coords::Coords;
use super::entity::EntitySnapshot;
use crate::schema::Symbolic;

/// The phase within a game round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Deployment,
    Initiative,
    Movement,
    Firing,
    PhysicalAttack,
    End,
    Victory,
}

impl Symbolic for GamePhase {
    const ALL: &'static [Self] = &[
        GamePhase::Deployment,
        GamePhase::Initiative,
        GamePhase::Movement,
        GamePhase::Firing,
        GamePhase::PhysicalAttack,
        GamePhase::End,
        GamePhase::Victory,
    ];

    fn name(self) -> &'static str {
        match self {
            GamePhase::Deployment => "DEPLOYMENT",
            GamePhase::Initiative => "INITIATIVE",
            GamePhase::Movement => "MOVEMENT",
            GamePhase::Firing => "FIRING",
            GamePhase::PhysicalAttack => "PHYSICAL_ATTACK",
            GamePhase::End => "END",
            GamePhase::Victory => "VICTORY",
        }
    }
}

/// A minefield occupying one hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minefield {
    pub coords: Coords,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub density: i32,
    #[serde(default)]
    pub owner_id: Option<i32>,
}

/// Game state as seen at one point of one round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSnapshot {
    pub round: Option<i32>,
    pub phase: Option<GamePhase>,
    pub turn_index: Option<i32>,
    /// Player whose turn it is.
    pub turn_owner: Option<i32>,
    pub entities: Vec<EntitySnapshot>,
    pub minefields: Vec<Minefield>,
    pub board: Option<Board>,
    pub planetary: Option<PlanetaryConditions>,
    pub map: Option<MapLayout>,
}

impl GameSnapshot {
    /// Looks up an in-play entity by id.
    pub fn entity(&self, id: i32) -> Option<&EntitySnapshot> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Minefields grouped by hex, in coordinate order.
    pub fn minefields_by_coords(&self) -> BTreeMap<Coords, Vec<&Minefield>> {
        let mut by_coords: BTreeMap<Coords, Vec<&Minefield>> = BTreeMap::new();
        for mf in &self.minefields {
            by_coords.entry(mf.coords).or_default().push(mf);
        }
        by_coords
    }

    /// Number of distinct teams among the entities with a known team.
    pub fn team_count(&self) -> usize {
        let mut teams: Vec<i32> = self.entities.iter().filter_map(|e| e.team_id).collect();
        teams.sort_unstable();
        teams.dedup();
        teams.len()
    }
}
