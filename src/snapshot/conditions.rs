//! Planetary conditions and map layout.

use serde::{Deserialize, Serialize};

use crate::schema::Symbolic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Light {
    Day,
    Dusk,
    FullMoon,
    Glare,
    Moonless,
    SolarFlare,
    PitchBlack,
}

impl Symbolic for Light {
    const ALL: &'static [Self] = &[
        Light::Day,
        Light::Dusk,
        Light::FullMoon,
        Light::Glare,
        Light::Moonless,
        Light::SolarFlare,
        Light::PitchBlack,
    ];

    fn name(self) -> &'static str {
        match self {
            Light::Day => "DAY",
            Light::Dusk => "DUSK",
            Light::FullMoon => "FULL_MOON",
            Light::Glare => "GLARE",
            Light::Moonless => "MOONLESS",
            Light::SolarFlare => "SOLAR_FLARE",
            Light::PitchBlack => "PITCH_BLACK",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Weather {
    Clear,
    LightRain,
    HeavyRain,
    Downpour,
    LightSnow,
    HeavySnow,
    Sleet,
    IceStorm,
}

impl Symbolic for Weather {
    const ALL: &'static [Self] = &[
        Weather::Clear,
        Weather::LightRain,
        Weather::HeavyRain,
        Weather::Downpour,
        Weather::LightSnow,
        Weather::HeavySnow,
        Weather::Sleet,
        Weather::IceStorm,
    ];

    fn name(self) -> &'static str {
        match self {
            Weather::Clear => "CLEAR",
            Weather::LightRain => "LIGHT_RAIN",
            Weather::HeavyRain => "HEAVY_RAIN",
            Weather::Downpour => "DOWNPOUR",
            Weather::LightSnow => "LIGHT_SNOW",
            Weather::HeavySnow => "HEAVY_SNOW",
            Weather::Sleet => "SLEET",
            Weather::IceStorm => "ICE_STORM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Wind {
    Calm,
    LightGale,
    ModerateGale,
    StrongGale,
    Storm,
    Tornado,
}

impl Symbolic for Wind {
    const ALL: &'static [Self] = &[
        Wind::Calm,
        Wind::LightGale,
        Wind::ModerateGale,
        Wind::StrongGale,
        Wind::Storm,
        Wind::Tornado,
    ];

    fn name(self) -> &'static str {
        match self {
            Wind::Calm => "CALM",
            Wind::LightGale => "LIGHT_GALE",
            Wind::ModerateGale => "MODERATE_GALE",
            Wind::StrongGale => "STRONG_GALE",
            Wind::Storm => "STORM",
            Wind::Tornado => "TORNADO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Atmosphere {
    Vacuum,
    Trace,
    Thin,
    Standard,
    High,
    VeryHigh,
}

impl Symbolic for Atmosphere {
    const ALL: &'static [Self] = &[
        Atmosphere::Vacuum,
        Atmosphere::Trace,
        Atmosphere::Thin,
        Atmosphere::Standard,
        Atmosphere::High,
        Atmosphere::VeryHigh,
    ];

    fn name(self) -> &'static str {
        match self {
            Atmosphere::Vacuum => "VACUUM",
            Atmosphere::Trace => "TRACE",
            Atmosphere::Thin => "THIN",
            Atmosphere::Standard => "STANDARD",
            Atmosphere::High => "HIGH",
            Atmosphere::VeryHigh => "VERY_HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Fog {
    None,
    Light,
    Heavy,
}

impl Symbolic for Fog {
    const ALL: &'static [Self] = &[Fog::None, Fog::Light, Fog::Heavy];

    fn name(self) -> &'static str {
        match self {
            Fog::None => "NONE",
            Fog::Light => "LIGHT",
            Fog::Heavy => "HEAVY",
        }
    }
}

/// Environmental conditions for the battle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetaryConditions {
    pub light: Option<Light>,
    pub weather: Option<Weather>,
    pub wind: Option<Wind>,
    /// Wind direction as a facing code, 0..=5.
    pub wind_direction: Option<i32>,
    pub atmosphere: Option<Atmosphere>,
    pub fog: Option<Fog>,
    /// Temperature in degrees Celsius.
    pub temperature: Option<i32>,
    /// Gravity in multiples of standard.
    pub gravity: Option<f64>,
    pub emi: bool,
}

/// How the playing area is assembled from individual boards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapLayout {
    /// Size of each board in hexes.
    pub board_width: Option<i32>,
    pub board_height: Option<i32>,
    /// Number of boards across and down.
    pub map_width: Option<i32>,
    pub map_height: Option<i32>,
    pub medium: Option<String>,
    pub boards: Vec<String>,
}
