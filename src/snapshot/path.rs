//! Planned or executed movement paths.

use serde::{Deserialize, Serialize};

use super::coords::{Coords, Facing};
use crate::schema::Symbolic;

/// One step of a movement path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveStep {
    Forwards,
    Backwards,
    TurnLeft,
    TurnRight,
    LateralLeft,
    LateralRight,
    GetUp,
    GoProne,
    StartJump,
    Charge,
    Dfa,
    Unjam,
}

impl Symbolic for MoveStep {
    const ALL: &'static [Self] = &[
        MoveStep::Forwards,
        MoveStep::Backwards,
        MoveStep::TurnLeft,
        MoveStep::TurnRight,
        MoveStep::LateralLeft,
        MoveStep::LateralRight,
        MoveStep::GetUp,
        MoveStep::GoProne,
        MoveStep::StartJump,
        MoveStep::Charge,
        MoveStep::Dfa,
        MoveStep::Unjam,
    ];

    fn name(self) -> &'static str {
        match self {
            MoveStep::Forwards => "FORWARDS",
            MoveStep::Backwards => "BACKWARDS",
            MoveStep::TurnLeft => "TURN_LEFT",
            MoveStep::TurnRight => "TURN_RIGHT",
            MoveStep::LateralLeft => "LATERAL_LEFT",
            MoveStep::LateralRight => "LATERAL_RIGHT",
            MoveStep::GetUp => "GET_UP",
            MoveStep::GoProne => "GO_PRONE",
            MoveStep::StartJump => "START_JUMP",
            MoveStep::Charge => "CHARGE",
            MoveStep::Dfa => "DFA",
            MoveStep::Unjam => "UNJAM",
        }
    }
}

/// Probability that a 2d6 roll meets or beats `target`.
pub fn odds_above(target: i32) -> f64 {
    if target <= 2 {
        return 1.0;
    }
    if target > 12 {
        return 0.0;
    }
    let hits = (1..=6)
        .flat_map(|a| (1..=6).map(move |b| a + b))
        .filter(|&sum| sum >= target)
        .count();
    hits as f64 / 36.0
}

/// A unit's movement for one turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovePathSnapshot {
    pub entity_id: i32,
    pub start: Option<Coords>,
    pub end: Option<Coords>,
    pub final_facing: Option<Facing>,
    pub steps: Vec<MoveStep>,
    pub legal: bool,
    pub mp_used: Option<i32>,
    pub hexes_moved: Option<i32>,
    pub jumping: bool,
    /// Target numbers of every pilot skill roll the path requires.
    pub psr_targets: Vec<i32>,
}

impl MovePathSnapshot {
    /// Chance that at least one required pilot skill roll fails.
    pub fn failure_probability(&self) -> f64 {
        let success: f64 = self.psr_targets.iter().map(|&t| odds_above(t)).product();
        1.0 - success
    }

    /// Straight-line hex distance between start and end.
    pub fn distance(&self) -> Option<i32> {
        match (self.start, self.end) {
            (Some(a), Some(b)) => Some(a.distance(b)),
            _ => None,
        }
    }
}
