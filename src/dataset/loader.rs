//! Reads a multi-schema game log back into `ActionAndState` items.
//!
//! Only action and state lines are used; every other schema is skipped.
//! A header line for either schema replaces the column order used for the
//! lines that follow it. Each action is joined with all state lines of its
//! round within the same game, wherever they appear in that game's lines.
//!
//! A log may hold several games back to back. A game line whose round is
//! lower than the previous game line's round starts a new game.

use std::collections::BTreeMap;
use std::io::BufRead;

use log::{debug, warn};

use super::action_state::ActionAndState;
use crate::schema::{FieldCodec, SchemaError};
use crate::schemas::{
    game, unit_action, unit_state, GameField, SchemaKind, UnitAction, UnitActionField, UnitState,
    UnitStateField,
};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Line { line: usize, source: SchemaError },
}

/// Reads every line of `reader` and joins actions with their round's states.
pub fn read_action_states<R: BufRead>(reader: R) -> Result<Vec<ActionAndState>, LoadError> {
    let mut action_codec: FieldCodec<UnitActionField> = unit_action::codec();
    let mut state_codec: FieldCodec<UnitStateField> = unit_state::codec();
    let mut game_codec: FieldCodec<GameField> = game::codec();
    let mut actions: Vec<(usize, UnitAction)> = Vec::new();
    let mut states: BTreeMap<(usize, i32), Vec<UnitState>> = BTreeMap::new();
    let mut game_index = 0usize;
    let mut last_round: Option<i32> = None;
    let mut skipped = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let at = |source| LoadError::Line { line: line_no, source };
        if line.trim().is_empty() {
            continue;
        }

        match SchemaKind::of_line(&line) {
            Some(SchemaKind::Game) => {
                if game_codec.is_header_line(&line) {
                    game_codec = FieldCodec::from_header(game::MARKER, &line).map_err(at)?;
                } else {
                    let record = game_codec.decode(&line).map_err(at)?;
                    if let Some(round) = record.get_as::<i32>(GameField::Round) {
                        if last_round.is_some_and(|last| round < last) {
                            game_index += 1;
                        }
                        last_round = Some(round);
                    }
                }
            }
            Some(SchemaKind::UnitAction) => {
                if action_codec.is_header_line(&line) {
                    action_codec = FieldCodec::from_header(unit_action::MARKER, &line).map_err(at)?;
                } else {
                    let record = action_codec.decode(&line).map_err(at)?;
                    actions.push((game_index, UnitAction::from_record(&record)));
                }
            }
            Some(SchemaKind::UnitState) => {
                if state_codec.is_header_line(&line) {
                    state_codec = FieldCodec::from_header(unit_state::MARKER, &line).map_err(at)?;
                } else {
                    let record = state_codec.decode(&line).map_err(at)?;
                    let state = UnitState::from_record(&record);
                    states.entry((game_index, state.round)).or_default().push(state);
                }
            }
            Some(_) => skipped += 1,
            None => {
                warn!("line {}: unrecognised marker, skipping", line_no);
                skipped += 1;
            }
        }
    }

    debug!(
        "log: {} games, {} actions, {} rounds of state, {} other lines",
        game_index + 1,
        actions.len(),
        states.len(),
        skipped
    );

    Ok(actions
        .into_iter()
        .map(|(game, action)| {
            let round = action.round;
            let board_units = states.get(&(game, round)).cloned().unwrap_or_default();
            ActionAndState::new(round, action, board_units)
        })
        .collect())
}

/// Parses a log held in memory.
pub fn parse_action_states(text: &str) -> Result<Vec<ActionAndState>, LoadError> {
    read_action_states(text.as_bytes())
}
