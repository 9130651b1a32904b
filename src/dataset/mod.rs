//! Training-pair assembly from recorded actions and board states.

pub mod action_state;
pub mod loader;
pub mod training;

pub use action_state::ActionAndState;
pub use loader::{parse_action_states, read_action_states, LoadError};
pub use training::{sample_indices, TrainingDataset, BOARD_MARGIN, MAX_BOARD_COORD};

#[cfg(test)]
pub(crate) mod fixtures {
    use super::ActionAndState;
    use crate::schemas::{UnitAction, UnitState};
    use crate::snapshot::{Coords, EntitySnapshot, GameSnapshot, MovePathSnapshot};

    pub fn state_at(id: i32, x: i32, y: i32) -> UnitState {
        let mut e = EntitySnapshot::new(id);
        e.position = Some(Coords::new(x, y));
        UnitState::from_entity(&GameSnapshot::default(), &e)
    }

    pub fn action(entity_id: i32, round: i32) -> UnitAction {
        let game = GameSnapshot { round: Some(round), ..Default::default() };
        let path = MovePathSnapshot { entity_id, legal: true, ..Default::default() };
        UnitAction::from_path(&game, &path)
    }

    /// An item whose board holds only the acting unit.
    pub fn item(entity_id: i32, round: i32) -> ActionAndState {
        item_at(entity_id, round, vec![state_at(entity_id, round, 0)])
    }

    pub fn item_at(entity_id: i32, round: i32, units: Vec<UnitState>) -> ActionAndState {
        ActionAndState::new(round, action(entity_id, round), units)
    }
}
