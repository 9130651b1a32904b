//! Planetary (environmental) conditions.

use super::{MISSING, UNKNOWN};
use crate::schema::{Field, FieldCodec, FieldInfo, SchemaRecord, Value, ValueKind};
use crate::snapshot::PlanetaryConditions;

pub const MARKER: &str = "PLANETARY_CONDITIONS_V1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PlanetaryField {
    Light = 0,
    Weather = 1,
    Wind = 2,
    WindDirection = 3,
    Atmosphere = 4,
    Fog = 5,
    Temperature = 6,
    Gravity = 7,
    Emi = 8,
}

const FIELD_INFO: [FieldInfo; 9] = [
    FieldInfo::new("LIGHT", ValueKind::EnumName),
    FieldInfo::new("WEATHER", ValueKind::EnumName),
    FieldInfo::new("WIND", ValueKind::EnumName),
    FieldInfo::new("WIND_DIRECTION", ValueKind::Int),
    FieldInfo::new("ATMOSPHERE", ValueKind::EnumName),
    FieldInfo::new("FOG", ValueKind::EnumName),
    FieldInfo::new("TEMPERATURE", ValueKind::Int),
    FieldInfo::new("GRAVITY", ValueKind::Float),
    FieldInfo::new("EMI", ValueKind::Bool),
];

impl Field for PlanetaryField {
    const ALL: &'static [Self] = &[
        PlanetaryField::Light,
        PlanetaryField::Weather,
        PlanetaryField::Wind,
        PlanetaryField::WindDirection,
        PlanetaryField::Atmosphere,
        PlanetaryField::Fog,
        PlanetaryField::Temperature,
        PlanetaryField::Gravity,
        PlanetaryField::Emi,
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
        match self.kind() {
            ValueKind::EnumName => UNKNOWN,
            _ => "",
        }
    }
}

pub fn codec() -> FieldCodec<PlanetaryField> {
    FieldCodec::new(MARKER)
}

/// Temperature has no natural sentinel, so an unknown temperature is
/// left absent rather than written as -1.
pub fn planetary_record(conditions: Option<&PlanetaryConditions>) -> SchemaRecord<PlanetaryField> {
    use PlanetaryField as F;
    let mut r = SchemaRecord::new();
    let Some(pc) = conditions else {
        r.put(F::WindDirection, MISSING);
        return r;
    };
    r.put_opt(F::Light, pc.light.map(Value::enum_name))
        .put_opt(F::Weather, pc.weather.map(Value::enum_name))
        .put_opt(F::Wind, pc.wind.map(Value::enum_name))
        .put(F::WindDirection, pc.wind_direction.unwrap_or(MISSING))
        .put_opt(F::Atmosphere, pc.atmosphere.map(Value::enum_name))
        .put_opt(F::Fog, pc.fog.map(Value::enum_name))
        .put_opt(F::Temperature, pc.temperature)
        .put_opt(F::Gravity, pc.gravity)
        .put(F::Emi, pc.emi);
    r
}
