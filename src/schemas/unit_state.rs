//! Per-unit state at the end of a round.

use super::{MISSING, UNKNOWN};
use crate::schema::{Field, FieldCodec, FieldInfo, SchemaError, SchemaRecord, Value, ValueKind};
use crate::snapshot::{EntitySnapshot, GamePhase, GameSnapshot, UnitRole};

pub const MARKER: &str = "UNIT_STATE_V1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnitStateField {
    Round = 0,
    Phase = 1,
    PlayerId = 2,
    TeamId = 3,
    EntityId = 4,
    Chassis = 5,
    Model = 6,
    Type = 7,
    Role = 8,
    X = 9,
    Y = 10,
    Facing = 11,
    Mp = 12,
    Heat = 13,
    Prone = 14,
    Airborne = 15,
    OffBoard = 16,
    Crippled = 17,
    Destroyed = 18,
    ArmorP = 19,
    InternalP = 20,
    Done = 21,
    MaxRange = 22,
    TotalDamage = 23,
}

const FIELD_INFO: [FieldInfo; 24] = [
    FieldInfo::new("ROUND", ValueKind::Int),
    FieldInfo::new("PHASE", ValueKind::EnumName),
    FieldInfo::new("PLAYER_ID", ValueKind::Int),
    FieldInfo::new("TEAM_ID", ValueKind::Int),
    FieldInfo::new("ENTITY_ID", ValueKind::Int),
    FieldInfo::new("CHASSIS", ValueKind::Text),
    FieldInfo::new("MODEL", ValueKind::Text),
    FieldInfo::new("TYPE", ValueKind::Text),
    FieldInfo::new("ROLE", ValueKind::EnumName),
    FieldInfo::new("X", ValueKind::Int),
    FieldInfo::new("Y", ValueKind::Int),
    FieldInfo::new("FACING", ValueKind::Int),
    FieldInfo::new("MP", ValueKind::Int),
    FieldInfo::new("HEAT", ValueKind::Int),
    FieldInfo::new("PRONE", ValueKind::Bool),
    FieldInfo::new("AIRBORNE", ValueKind::Bool),
    FieldInfo::new("OFF_BOARD", ValueKind::Bool),
    FieldInfo::new("CRIPPLED", ValueKind::Bool),
    FieldInfo::new("DESTROYED", ValueKind::Bool),
    FieldInfo::new("ARMOR_P", ValueKind::Float),
    FieldInfo::new("INTERNAL_P", ValueKind::Float),
    FieldInfo::new("DONE", ValueKind::Bool),
    FieldInfo::new("MAX_RANGE", ValueKind::Int),
    FieldInfo::new("TOTAL_DAMAGE", ValueKind::Int),
];

impl Field for UnitStateField {
    const ALL: &'static [Self] = &[
        UnitStateField::Round,
        UnitStateField::Phase,
        UnitStateField::PlayerId,
        UnitStateField::TeamId,
        UnitStateField::EntityId,
        UnitStateField::Chassis,
        UnitStateField::Model,
        UnitStateField::Type,
        UnitStateField::Role,
        UnitStateField::X,
        UnitStateField::Y,
        UnitStateField::Facing,
        UnitStateField::Mp,
        UnitStateField::Heat,
        UnitStateField::Prone,
        UnitStateField::Airborne,
        UnitStateField::OffBoard,
        UnitStateField::Crippled,
        UnitStateField::Destroyed,
        UnitStateField::ArmorP,
        UnitStateField::InternalP,
        UnitStateField::Done,
        UnitStateField::MaxRange,
        UnitStateField::TotalDamage,
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
            UnitStateField::Role => super::NO_ROLE,
            UnitStateField::Phase => UNKNOWN,
            _ => "",
        }
    }
}

/// Codec with the declaration column order.
pub fn codec() -> FieldCodec<UnitStateField> {
    FieldCodec::new(MARKER)
}

/// One unit's state, with sentinels already substituted for missing data.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitState {
    pub round: i32,
    pub phase: Option<GamePhase>,
    pub player_id: i32,
    pub team_id: i32,
    pub entity_id: i32,
    pub chassis: String,
    pub model: String,
    pub unit_type: String,
    pub role: Option<UnitRole>,
    pub x: i32,
    pub y: i32,
    pub facing: i32,
    pub mp: i32,
    pub heat: i32,
    pub prone: bool,
    pub airborne: bool,
    pub off_board: bool,
    pub crippled: bool,
    pub destroyed: bool,
    pub armor_p: f64,
    pub internal_p: f64,
    pub done: bool,
    pub max_range: i32,
    pub total_damage: i32,
}

impl UnitState {
    pub fn from_entity(game: &GameSnapshot, entity: &EntitySnapshot) -> Self {
        let text = |s: &Option<String>| s.clone().unwrap_or_else(|| UNKNOWN.to_string());
        UnitState {
            round: game.round.unwrap_or(MISSING),
            phase: game.phase,
            player_id: entity.owner_id.unwrap_or(MISSING),
            team_id: entity.team_id.unwrap_or(MISSING),
            entity_id: entity.id,
            chassis: text(&entity.chassis),
            model: text(&entity.model),
            unit_type: text(&entity.unit_type),
            role: entity.role,
            x: entity.position.map_or(MISSING, |c| c.x),
            y: entity.position.map_or(MISSING, |c| c.y),
            facing: entity.facing.map_or(MISSING, |f| f.code()),
            mp: entity.max_mp().unwrap_or(MISSING),
            heat: entity.heat.unwrap_or(MISSING),
            prone: entity.prone,
            airborne: entity.airborne,
            off_board: entity.off_board,
            crippled: entity.crippled,
            destroyed: entity.destroyed,
            armor_p: entity.armor_remaining.unwrap_or(0.0),
            internal_p: entity.internal_remaining.unwrap_or(0.0),
            done: entity.done,
            max_range: entity.max_weapon_range(),
            total_damage: entity.total_weapon_damage(),
        }
    }

    pub fn to_record(&self) -> SchemaRecord<UnitStateField> {
        use UnitStateField as F;
        let mut r = SchemaRecord::new();
        r.put(F::Round, self.round)
            .put_opt(F::Phase, self.phase.map(Value::enum_name))
            .put(F::PlayerId, self.player_id)
            .put(F::TeamId, self.team_id)
            .put(F::EntityId, self.entity_id)
            .put(F::Chassis, self.chassis.as_str())
            .put(F::Model, self.model.as_str())
            .put(F::Type, self.unit_type.as_str())
            .put_opt(F::Role, self.role.map(Value::enum_name))
            .put(F::X, self.x)
            .put(F::Y, self.y)
            .put(F::Facing, self.facing)
            .put(F::Mp, self.mp)
            .put(F::Heat, self.heat)
            .put(F::Prone, self.prone)
            .put(F::Airborne, self.airborne)
            .put(F::OffBoard, self.off_board)
            .put(F::Crippled, self.crippled)
            .put(F::Destroyed, self.destroyed)
            .put(F::ArmorP, self.armor_p)
            .put(F::InternalP, self.internal_p)
            .put(F::Done, self.done)
            .put(F::MaxRange, self.max_range)
            .put(F::TotalDamage, self.total_damage);
        r
    }

    /// Rebuilds a state from a decoded record, filling absent fields with
    /// the same sentinels the factory uses.
    pub fn from_record(r: &SchemaRecord<UnitStateField>) -> Self {
        use UnitStateField as F;
        let int = |f| r.get_as::<i32>(f).unwrap_or(MISSING);
        let text = |f| r.get_as::<String>(f).unwrap_or_else(|| UNKNOWN.to_string());
        let flag = |f| r.get_as::<bool>(f).unwrap_or(false);
        let ratio = |f| r.get_as::<f64>(f).unwrap_or(0.0);
        UnitState {
            round: int(F::Round),
            phase: r.get_enum(F::Phase),
            player_id: int(F::PlayerId),
            team_id: int(F::TeamId),
            entity_id: int(F::EntityId),
            chassis: text(F::Chassis),
            model: text(F::Model),
            unit_type: text(F::Type),
            role: r.get_enum(F::Role),
            x: int(F::X),
            y: int(F::Y),
            facing: int(F::Facing),
            mp: int(F::Mp),
            heat: int(F::Heat),
            prone: flag(F::Prone),
            airborne: flag(F::Airborne),
            off_board: flag(F::OffBoard),
            crippled: flag(F::Crippled),
            destroyed: flag(F::Destroyed),
            armor_p: ratio(F::ArmorP),
            internal_p: ratio(F::InternalP),
            done: flag(F::Done),
            max_range: r.get_as::<i32>(F::MaxRange).unwrap_or(0),
            total_damage: r.get_as::<i32>(F::TotalDamage).unwrap_or(0),
        }
    }

    /// Encodes with the default codec.
    pub fn encode(&self) -> String {
        codec().encode(&self.to_record())
    }

    /// Decodes a line written by the default codec.
    pub fn decode(line: &str) -> Result<Self, SchemaError> {
        codec().decode(line).map(|r| Self::from_record(&r))
    }
}
