//! Static unit attributes, written once per unit.

use super::weapons::encode_weapons;
use super::{MISSING, UNKNOWN};
use crate::schema::{Field, FieldCodec, FieldInfo, SchemaRecord, Value, ValueKind};
use crate::snapshot::EntitySnapshot;

pub const MARKER: &str = "UNIT_ENRICHMENT_V1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnitEnrichmentField {
    EntityId = 0,
    Chassis = 1,
    Model = 2,
    Type = 3,
    Role = 4,
    Bv = 5,
    Tonnage = 6,
    WalkMp = 7,
    RunMp = 8,
    JumpMp = 9,
    HeatCapacity = 10,
    WeaponCount = 11,
    MaxRange = 12,
    TotalDamage = 13,
    WeaponData = 14,
}

const FIELD_INFO: [FieldInfo; 15] = [
    FieldInfo::new("ENTITY_ID", ValueKind::Int),
    FieldInfo::new("CHASSIS", ValueKind::Text),
    FieldInfo::new("MODEL", ValueKind::Text),
    FieldInfo::new("TYPE", ValueKind::Text),
    FieldInfo::new("ROLE", ValueKind::EnumName),
    FieldInfo::new("BV", ValueKind::Int),
    FieldInfo::new("TONNAGE", ValueKind::Float),
    FieldInfo::new("WALK_MP", ValueKind::Int),
    FieldInfo::new("RUN_MP", ValueKind::Int),
    FieldInfo::new("JUMP_MP", ValueKind::Int),
    FieldInfo::new("HEAT_CAPACITY", ValueKind::Int),
    FieldInfo::new("WEAPON_COUNT", ValueKind::Int),
    FieldInfo::new("MAX_RANGE", ValueKind::Int),
    FieldInfo::new("TOTAL_DAMAGE", ValueKind::Int),
    FieldInfo::new("WEAPON_DATA", ValueKind::IntList),
];

impl Field for UnitEnrichmentField {
    const ALL: &'static [Self] = &[
        UnitEnrichmentField::EntityId,
        UnitEnrichmentField::Chassis,
        UnitEnrichmentField::Model,
        UnitEnrichmentField::Type,
        UnitEnrichmentField::Role,
        UnitEnrichmentField::Bv,
        UnitEnrichmentField::Tonnage,
        UnitEnrichmentField::WalkMp,
        UnitEnrichmentField::RunMp,
        UnitEnrichmentField::JumpMp,
        UnitEnrichmentField::HeatCapacity,
        UnitEnrichmentField::WeaponCount,
        UnitEnrichmentField::MaxRange,
        UnitEnrichmentField::TotalDamage,
        UnitEnrichmentField::WeaponData,
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
            UnitEnrichmentField::Role => super::NO_ROLE,
            _ => "",
        }
    }
}

pub fn codec() -> FieldCodec<UnitEnrichmentField> {
    FieldCodec::new(MARKER)
}

pub fn enrichment_record(entity: &EntitySnapshot) -> SchemaRecord<UnitEnrichmentField> {
    use UnitEnrichmentField as F;
    let text = |s: &Option<String>| s.clone().unwrap_or_else(|| UNKNOWN.to_string());

    let mut r = SchemaRecord::new();
    r.put(F::EntityId, entity.id)
        .put(F::Chassis, text(&entity.chassis))
        .put(F::Model, text(&entity.model))
        .put(F::Type, text(&entity.unit_type))
        .put_opt(F::Role, entity.role.map(Value::enum_name))
        .put(F::Bv, entity.battle_value.unwrap_or(MISSING))
        .put(F::Tonnage, entity.tonnage.unwrap_or(f64::from(MISSING)))
        .put(F::WalkMp, entity.walk_mp.unwrap_or(MISSING))
        .put(F::RunMp, entity.run_mp.unwrap_or(MISSING))
        .put(F::JumpMp, entity.jump_mp.unwrap_or(MISSING))
        .put(F::HeatCapacity, entity.heat_capacity.unwrap_or(MISSING))
        .put(F::WeaponCount, entity.weapons.len())
        .put(F::MaxRange, entity.max_weapon_range())
        .put(F::TotalDamage, entity.total_weapon_damage())
        .put(F::WeaponData, encode_weapons(entity));
    r
}
