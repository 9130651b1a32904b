//! Attacks declared by units.

use super::{MISSING, UNKNOWN};
use crate::schema::{Field, FieldCodec, FieldInfo, SchemaRecord, Value, ValueKind};
use crate::snapshot::{odds_above, AttackSnapshot, GameSnapshot, TargetKind};

pub const MARKER: &str = "UNIT_ATTACK_V1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnitAttackField {
    Round = 0,
    EntityId = 1,
    PlayerId = 2,
    TargetId = 3,
    TargetType = 4,
    AttackType = 5,
    WeaponId = 6,
    WeaponName = 7,
    FromX = 8,
    FromY = 9,
    ToX = 10,
    ToY = 11,
    Distance = 12,
    ToHit = 13,
    HitChance = 14,
    AimedLocation = 15,
}

const FIELD_INFO: [FieldInfo; 16] = [
    FieldInfo::new("ROUND", ValueKind::Int),
    FieldInfo::new("ENTITY_ID", ValueKind::Int),
    FieldInfo::new("PLAYER_ID", ValueKind::Int),
    FieldInfo::new("TARGET_ID", ValueKind::Int),
    FieldInfo::new("TARGET_TYPE", ValueKind::EnumName),
    FieldInfo::new("ATTACK_TYPE", ValueKind::EnumName),
    FieldInfo::new("WEAPON_ID", ValueKind::Int),
    FieldInfo::new("WEAPON_NAME", ValueKind::Text),
    FieldInfo::new("FROM_X", ValueKind::Int),
    FieldInfo::new("FROM_Y", ValueKind::Int),
    FieldInfo::new("TO_X", ValueKind::Int),
    FieldInfo::new("TO_Y", ValueKind::Int),
    FieldInfo::new("DISTANCE", ValueKind::Int),
    FieldInfo::new("TO_HIT", ValueKind::Int),
    FieldInfo::new("HIT_CHANCE", ValueKind::Float),
    FieldInfo::new("AIMED_LOCATION", ValueKind::Text),
];

impl Field for UnitAttackField {
    const ALL: &'static [Self] = &[
        UnitAttackField::Round,
        UnitAttackField::EntityId,
        UnitAttackField::PlayerId,
        UnitAttackField::TargetId,
        UnitAttackField::TargetType,
        UnitAttackField::AttackType,
        UnitAttackField::WeaponId,
        UnitAttackField::WeaponName,
        UnitAttackField::FromX,
        UnitAttackField::FromY,
        UnitAttackField::ToX,
        UnitAttackField::ToY,
        UnitAttackField::Distance,
        UnitAttackField::ToHit,
        UnitAttackField::HitChance,
        UnitAttackField::AimedLocation,
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
            UnitAttackField::TargetType => UNKNOWN,
            _ => "",
        }
    }
}

pub fn codec() -> FieldCodec<UnitAttackField> {
    FieldCodec::new(MARKER)
}

/// Builds the record for one declared attack.
///
/// The target position is only known for entity targets that are still in
/// play; an attack that cannot hit has a to-hit of -1 and a hit chance of 0.
pub fn attack_record(game: &GameSnapshot, attack: &AttackSnapshot) -> SchemaRecord<UnitAttackField> {
    use UnitAttackField as F;

    let attacker = game.entity(attack.attacker_id);
    let from = attacker.and_then(|e| e.position);
    let to = match attack.target_kind {
        Some(TargetKind::Entity) | None => attack
            .target_id
            .and_then(|id| game.entity(id))
            .and_then(|e| e.position),
        _ => None,
    };
    let distance = match (from, to) {
        (Some(a), Some(b)) => a.distance(b),
        _ => MISSING,
    };

    let mut r = SchemaRecord::new();
    r.put(F::Round, game.round.unwrap_or(MISSING))
        .put(F::EntityId, attack.attacker_id)
        .put(F::PlayerId, attacker.and_then(|e| e.owner_id).unwrap_or(MISSING))
        .put(F::TargetId, attack.target_id.unwrap_or(MISSING))
        .put_opt(F::TargetType, attack.target_kind.map(Value::enum_name))
        .put(F::AttackType, Value::enum_name(attack.kind))
        .put(F::WeaponId, attack.weapon_id.unwrap_or(MISSING))
        .put(F::WeaponName, attack.weapon_name.as_deref().unwrap_or(UNKNOWN))
        .put(F::FromX, from.map_or(MISSING, |c| c.x))
        .put(F::FromY, from.map_or(MISSING, |c| c.y))
        .put(F::ToX, to.map_or(MISSING, |c| c.x))
        .put(F::ToY, to.map_or(MISSING, |c| c.y))
        .put(F::Distance, distance)
        .put(F::ToHit, attack.to_hit.unwrap_or(MISSING))
        .put(F::HitChance, attack.to_hit.map_or(0.0, odds_above))
        .put_opt(F::AimedLocation, attack.aimed_location.as_deref());
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{AttackKind, Coords, EntitySnapshot};

    fn game() -> GameSnapshot {
        let mut a = EntitySnapshot::new(1);
        a.owner_id = Some(0);
        a.position = Some(Coords::new(3, 3));
        let mut b = EntitySnapshot::new(2);
        b.position = Some(Coords::new(3, 8));
        GameSnapshot { round: Some(5), entities: vec![a, b], ..Default::default() }
    }

    #[test]
    fn weapon_attack_on_unit() {
        let mut attack = AttackSnapshot::new(1, AttackKind::Weapon);
        attack.target_id = Some(2);
        attack.target_kind = Some(TargetKind::Entity);
        attack.weapon_id = Some(17);
        attack.weapon_name = Some("Large Laser".into());
        attack.to_hit = Some(7);
        let line = codec().encode(&attack_record(&game(), &attack));
        assert_eq!(
            line,
            "UNIT_ATTACK_V1\t5\t1\t0\t2\tENTITY\tWEAPON\t17\tLarge Laser\t3\t3\t3\t8\t5\t7\t0.58\t"
        );
    }

    #[test]
    fn impossible_attack_and_unknown_target() {
        let mut attack = AttackSnapshot::new(9, AttackKind::Kick);
        attack.target_kind = Some(TargetKind::Building);
        let r = attack_record(&game(), &attack);
        assert_eq!(r.get_as::<i64>(UnitAttackField::ToHit), Some(-1));
        assert_eq!(r.get_as::<f64>(UnitAttackField::HitChance), Some(0.0));
        assert_eq!(r.get_as::<i64>(UnitAttackField::ToX), Some(-1));
        assert_eq!(r.get_as::<i64>(UnitAttackField::PlayerId), Some(-1));
        assert_eq!(r.get_as::<String>(UnitAttackField::WeaponName).as_deref(), Some("UNKNOWN"));
    }

    #[test]
    fn missing_target_type_writes_unknown() {
        let attack = AttackSnapshot::new(1, AttackKind::Punch);
        let line = codec().encode(&attack_record(&game(), &attack));
        let cells: Vec<&str> = line.split('\t').collect();
        assert_eq!(cells[5], "UNKNOWN");
        assert_eq!(cells[6], "PUNCH");
    }
}
