use crate::schemas::{UnitAction, UnitState};

/// One recorded unit action paired with every unit's state on the board in
/// that round. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionAndState {
    round: i32,
    action: UnitAction,
    board_units: Vec<UnitState>,
}

impl ActionAndState {
    pub fn new(round: i32, action: UnitAction, board_units: Vec<UnitState>) -> Self {
        ActionAndState { round, action, board_units }
    }

    pub fn round(&self) -> i32 {
        self.round
    }

    pub fn action(&self) -> &UnitAction {
        &self.action
    }

    pub fn board_units(&self) -> &[UnitState] {
        &self.board_units
    }

    /// Id of the unit that acted.
    pub fn entity_id(&self) -> i32 {
        self.action.entity_id
    }

    /// The acting unit's own entry in the board-state list, if recorded.
    pub fn acting_unit_state(&self) -> Option<&UnitState> {
        self.board_units.iter().find(|u| u.entity_id == self.entity_id())
    }
}
