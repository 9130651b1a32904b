//! Game-level summary line.

use super::{MISSING, UNKNOWN};
use crate::schema::{Field, FieldCodec, FieldInfo, SchemaRecord, Value, ValueKind};
use crate::snapshot::GameSnapshot;

pub const MARKER: &str = "GAME_V1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GameField {
    Round = 0,
    Phase = 1,
    TurnIndex = 2,
    TurnOwner = 3,
    EntityCount = 4,
    TeamCount = 5,
    MinefieldCount = 6,
    MinefieldHexes = 7,
}

const FIELD_INFO: [FieldInfo; 8] = [
    FieldInfo::new("ROUND", ValueKind::Int),
    FieldInfo::new("PHASE", ValueKind::EnumName),
    FieldInfo::new("TURN_INDEX", ValueKind::Int),
    FieldInfo::new("TURN_OWNER", ValueKind::Int),
    FieldInfo::new("ENTITY_COUNT", ValueKind::Int),
    FieldInfo::new("TEAM_COUNT", ValueKind::Int),
    FieldInfo::new("MINEFIELD_COUNT", ValueKind::Int),
    FieldInfo::new("MINEFIELD_HEXES", ValueKind::TextList),
];

impl Field for GameField {
    const ALL: &'static [Self] = &[
        GameField::Round,
        GameField::Phase,
        GameField::TurnIndex,
        GameField::TurnOwner,
        GameField::EntityCount,
        GameField::TeamCount,
        GameField::MinefieldCount,
        GameField::MinefieldHexes,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        FIELD_INFO[self as usize].name
    }

    fn kind(self) -> ValueKind {
        FIELD_INFO[self as usize].kind
    }

    fn absent_cell(self) -> &'static str {
        match self {
            GameField::Phase => UNKNOWN,
            _ => "",
        }
    }
}

pub fn codec() -> FieldCodec<GameField> {
    FieldCodec::new(MARKER)
}

/// Summarises the game. Minefield hexes are listed once each, in
/// coordinate order, however many minefields share a hex.
pub fn game_record(game: &GameSnapshot) -> SchemaRecord<GameField> {
    use GameField as F;
    let hexes: Vec<String> = game.minefields_by_coords().keys().map(|c| c.token()).collect();

    let mut r = SchemaRecord::new();
    r.put(F::Round, game.round.unwrap_or(MISSING))
        .put_opt(F::Phase, game.phase.map(Value::enum_name))
        .put(F::TurnIndex, game.turn_index.unwrap_or(MISSING))
        .put(F::TurnOwner, game.turn_owner.unwrap_or(MISSING))
        .put(F::EntityCount, game.entities.len())
        .put(F::TeamCount, game.team_count())
        .put(F::MinefieldCount, game.minefields.len())
        .put(F::MinefieldHexes, hexes);
    r
}
