//! One unit's movement action for a round.

use super::{MISSING, UNKNOWN};
use crate::schema::{Field, FieldCodec, FieldInfo, SchemaError, SchemaRecord, Value, ValueKind};
use crate::snapshot::{GameSnapshot, MovePathSnapshot, MoveStep};

pub const MARKER: &str = "UNIT_ACTION_V1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnitActionField {
    Round = 0,
    EntityId = 1,
    PlayerId = 2,
    TeamId = 3,
    Chassis = 4,
    Model = 5,
    Facing = 6,
    FromX = 7,
    FromY = 8,
    ToX = 9,
    ToY = 10,
    HexesMoved = 11,
    Distance = 12,
    MpUsed = 13,
    MaxMp = 14,
    MpP = 15,
    HeatP = 16,
    ArmorP = 17,
    InternalP = 18,
    Jumping = 19,
    Prone = 20,
    Legal = 21,
    ChanceOfFailure = 22,
    IsBot = 23,
    Steps = 24,
}

const FIELD_INFO: [FieldInfo; 25] = [
    FieldInfo::new("ROUND", ValueKind::Int),
    FieldInfo::new("ENTITY_ID", ValueKind::Int),
    FieldInfo::new("PLAYER_ID", ValueKind::Int),
    FieldInfo::new("TEAM_ID", ValueKind::Int),
    FieldInfo::new("CHASSIS", ValueKind::Text),
    FieldInfo::new("MODEL", ValueKind::Text),
    FieldInfo::new("FACING", ValueKind::Int),
    FieldInfo::new("FROM_X", ValueKind::Int),
    FieldInfo::new("FROM_Y", ValueKind::Int),
    FieldInfo::new("TO_X", ValueKind::Int),
    FieldInfo::new("TO_Y", ValueKind::Int),
    FieldInfo::new("HEXES_MOVED", ValueKind::Int),
    FieldInfo::new("DISTANCE", ValueKind::Int),
    FieldInfo::new("MP_USED", ValueKind::Int),
    FieldInfo::new("MAX_MP", ValueKind::Int),
    FieldInfo::new("MP_P", ValueKind::Float),
    FieldInfo::new("HEAT_P", ValueKind::Float),
    FieldInfo::new("ARMOR_P", ValueKind::Float),
    FieldInfo::new("INTERNAL_P", ValueKind::Float),
    FieldInfo::new("JUMPING", ValueKind::Bool),
    FieldInfo::new("PRONE", ValueKind::Bool),
    FieldInfo::new("LEGAL", ValueKind::Bool),
    FieldInfo::new("CHANCE_OF_FAILURE", ValueKind::Float),
    FieldInfo::new("IS_BOT", ValueKind::Bool),
    FieldInfo::new("STEPS", ValueKind::EnumNameList),
];

impl Field for UnitActionField {
    const ALL: &'static [Self] = &[
        UnitActionField::Round,
        UnitActionField::EntityId,
        UnitActionField::PlayerId,
        UnitActionField::TeamId,
        UnitActionField::Chassis,
        UnitActionField::Model,
        UnitActionField::Facing,
        UnitActionField::FromX,
        UnitActionField::FromY,
        UnitActionField::ToX,
        UnitActionField::ToY,
        UnitActionField::HexesMoved,
        UnitActionField::Distance,
        UnitActionField::MpUsed,
        UnitActionField::MaxMp,
        UnitActionField::MpP,
        UnitActionField::HeatP,
        UnitActionField::ArmorP,
        UnitActionField::InternalP,
        UnitActionField::Jumping,
        UnitActionField::Prone,
        UnitActionField::Legal,
        UnitActionField::ChanceOfFailure,
        UnitActionField::IsBot,
        UnitActionField::Steps,
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
}

pub fn codec() -> FieldCodec<UnitActionField> {
    FieldCodec::new(MARKER)
}

/// `part / whole`, or 0 when either side is unknown or the whole is not
/// positive.
fn ratio(part: Option<i32>, whole: Option<i32>) -> f64 {
    match (part, whole) {
        (Some(p), Some(w)) if w > 0 => f64::from(p) / f64::from(w),
        _ => 0.0,
    }
}

/// A unit's movement for one round, with sentinels substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitAction {
    pub round: i32,
    pub entity_id: i32,
    pub player_id: i32,
    pub team_id: i32,
    pub chassis: String,
    pub model: String,
    pub facing: i32,
    pub from_x: i32,
    pub from_y: i32,
    pub to_x: i32,
    pub to_y: i32,
    pub hexes_moved: i32,
    pub distance: i32,
    pub mp_used: i32,
    pub max_mp: i32,
    pub mp_p: f64,
    pub heat_p: f64,
    pub armor_p: f64,
    pub internal_p: f64,
    pub jumping: bool,
    pub prone: bool,
    pub legal: bool,
    pub chance_of_failure: f64,
    pub is_bot: bool,
    pub steps: Vec<MoveStep>,
}

impl UnitAction {
    /// Builds the action for `path`. The moving unit is looked up in the
    /// game; if it is not there its attributes become sentinels.
    pub fn from_path(game: &GameSnapshot, path: &MovePathSnapshot) -> Self {
        let entity = game.entity(path.entity_id);
        let text = |value: Option<&Option<String>>| {
            value.cloned().flatten().unwrap_or_else(|| UNKNOWN.to_string())
        };
        let max_mp = entity.and_then(|e| e.max_mp());

        UnitAction {
            round: game.round.unwrap_or(MISSING),
            entity_id: path.entity_id,
            player_id: entity.and_then(|e| e.owner_id).unwrap_or(MISSING),
            team_id: entity.and_then(|e| e.team_id).unwrap_or(MISSING),
            chassis: text(entity.map(|e| &e.chassis)),
            model: text(entity.map(|e| &e.model)),
            facing: path
                .final_facing
                .or_else(|| entity.and_then(|e| e.facing))
                .map_or(MISSING, |f| f.code()),
            from_x: path.start.map_or(MISSING, |c| c.x),
            from_y: path.start.map_or(MISSING, |c| c.y),
            to_x: path.end.map_or(MISSING, |c| c.x),
            to_y: path.end.map_or(MISSING, |c| c.y),
            hexes_moved: path.hexes_moved.unwrap_or(MISSING),
            distance: path.distance().unwrap_or(MISSING),
            mp_used: path.mp_used.unwrap_or(MISSING),
            max_mp: max_mp.unwrap_or(MISSING),
            mp_p: ratio(path.mp_used, max_mp),
            heat_p: ratio(entity.and_then(|e| e.heat), entity.and_then(|e| e.heat_capacity)),
            armor_p: entity.and_then(|e| e.armor_remaining).unwrap_or(0.0),
            internal_p: entity.and_then(|e| e.internal_remaining).unwrap_or(0.0),
            jumping: path.jumping,
            prone: entity.is_some_and(|e| e.prone),
            legal: path.legal,
            chance_of_failure: path.failure_probability(),
            is_bot: entity.is_some_and(|e| e.bot_controlled),
            steps: path.steps.clone(),
        }
    }

    pub fn to_record(&self) -> SchemaRecord<UnitActionField> {
        use UnitActionField as F;
        let mut r = SchemaRecord::new();
        r.put(F::Round, self.round)
            .put(F::EntityId, self.entity_id)
            .put(F::PlayerId, self.player_id)
            .put(F::TeamId, self.team_id)
            .put(F::Chassis, self.chassis.as_str())
            .put(F::Model, self.model.as_str())
            .put(F::Facing, self.facing)
            .put(F::FromX, self.from_x)
            .put(F::FromY, self.from_y)
            .put(F::ToX, self.to_x)
            .put(F::ToY, self.to_y)
            .put(F::HexesMoved, self.hexes_moved)
            .put(F::Distance, self.distance)
            .put(F::MpUsed, self.mp_used)
            .put(F::MaxMp, self.max_mp)
            .put(F::MpP, self.mp_p)
            .put(F::HeatP, self.heat_p)
            .put(F::ArmorP, self.armor_p)
            .put(F::InternalP, self.internal_p)
            .put(F::Jumping, self.jumping)
            .put(F::Prone, self.prone)
            .put(F::Legal, self.legal)
            .put(F::ChanceOfFailure, self.chance_of_failure)
            .put(F::IsBot, self.is_bot)
            .put(F::Steps, Value::enum_names(&self.steps));
        r
    }

    pub fn from_record(r: &SchemaRecord<UnitActionField>) -> Self {
        use UnitActionField as F;
        let int = |f| r.get_as::<i32>(f).unwrap_or(MISSING);
        let text = |f| r.get_as::<String>(f).unwrap_or_else(|| UNKNOWN.to_string());
        let flag = |f| r.get_as::<bool>(f).unwrap_or(false);
        let ratio = |f| r.get_as::<f64>(f).unwrap_or(0.0);
        UnitAction {
            round: int(F::Round),
            entity_id: int(F::EntityId),
            player_id: int(F::PlayerId),
            team_id: int(F::TeamId),
            chassis: text(F::Chassis),
            model: text(F::Model),
            facing: int(F::Facing),
            from_x: int(F::FromX),
            from_y: int(F::FromY),
            to_x: int(F::ToX),
            to_y: int(F::ToY),
            hexes_moved: int(F::HexesMoved),
            distance: int(F::Distance),
            mp_used: int(F::MpUsed),
            max_mp: int(F::MaxMp),
            mp_p: ratio(F::MpP),
            heat_p: ratio(F::HeatP),
            armor_p: ratio(F::ArmorP),
            internal_p: ratio(F::InternalP),
            jumping: flag(F::Jumping),
            prone: flag(F::Prone),
            legal: flag(F::Legal),
            chance_of_failure: ratio(F::ChanceOfFailure),
            is_bot: flag(F::IsBot),
            steps: r.get_enum_list(F::Steps).unwrap_or_default(),
        }
    }

    pub fn encode(&self) -> String {
        codec().encode(&self.to_record())
    }

    pub fn decode(line: &str) -> Result<Self, SchemaError> {
        codec().decode(line).map(|r| Self::from_record(&r))
    }
}
