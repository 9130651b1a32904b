//! Fixed-stride integer encoding of a unit's weapon loadout.
//!
//! Each weapon contributes exactly `WEAPON_STRIDE` integers, in mount order:
//!   [0] damage
//!   [1] firing arc code
//!   [2] short range
//!   [3] medium range
//!   [4] long range
//!
//! A weapon that cannot be encoded is replaced by a block of `-1`, never
//! dropped, so the output length is always a multiple of the stride.

use log::warn;

use crate::snapshot::entity::{EntitySnapshot, WeaponMount};

/// Integers per encoded weapon.
pub const WEAPON_STRIDE: usize = 5;

/// Value filling a block whose weapon could not be encoded.
pub const WEAPON_SENTINEL: i64 = -1;

/// Reasons a single weapon cannot be encoded.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WeaponEncodeError {
    #[error("weapon '{0}' references equipment that could not be resolved")]
    DanglingEquipment(String),

    #[error("weapon '{name}' has inconsistent range bands {short}/{medium}/{long}")]
    InvalidRanges {
        name: String,
        short: i32,
        medium: i32,
        long: i32,
    },
}

/// Errors that can occur when splitting encoded weapon data.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WeaponDecodeError {
    #[error("weapon data length {0} is not a multiple of 5")]
    BadLength(usize),
}

/// One decoded weapon block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedWeapon {
    pub damage: i64,
    pub arc: i64,
    pub short_range: i64,
    pub medium_range: i64,
    pub long_range: i64,
}

/// Encodes one weapon into its five integers.
pub fn encode_weapon(mount: &WeaponMount) -> Result<[i64; WEAPON_STRIDE], WeaponEncodeError> {
    let name = || mount.name.clone().unwrap_or_else(|| "UNKNOWN".to_string());
    let stats = mount
        .equipment
        .ok_or_else(|| WeaponEncodeError::DanglingEquipment(name()))?;

    if stats.short_range < 0
        || stats.short_range > stats.medium_range
        || stats.medium_range > stats.long_range
    {
        return Err(WeaponEncodeError::InvalidRanges {
            name: name(),
            short: stats.short_range,
            medium: stats.medium_range,
            long: stats.long_range,
        });
    }

    Ok([
        i64::from(stats.damage),
        mount.arc.code(),
        i64::from(stats.short_range),
        i64::from(stats.medium_range),
        i64::from(stats.long_range),
    ])
}

/// Encodes every weapon of a unit, substituting a sentinel block for any
/// weapon that fails.
pub fn encode_weapons(entity: &EntitySnapshot) -> Vec<i64> {
    let mut data = Vec::with_capacity(entity.weapons.len() * WEAPON_STRIDE);
    for (slot, mount) in entity.weapons.iter().enumerate() {
        match encode_weapon(mount) {
            Ok(block) => data.extend_from_slice(&block),
            Err(e) => {
                warn!("entity {} weapon slot {}: {}", entity.id, slot, e);
                data.extend_from_slice(&[WEAPON_SENTINEL; WEAPON_STRIDE]);
            }
        }
    }
    data
}

/// Splits encoded data back into weapon blocks. Sentinel blocks come back
/// as `None`.
pub fn decode_weapons(data: &[i64]) -> Result<Vec<Option<EncodedWeapon>>, WeaponDecodeError> {
    if data.len() % WEAPON_STRIDE != 0 {
        return Err(WeaponDecodeError::BadLength(data.len()));
    }
    Ok(data
        .chunks_exact(WEAPON_STRIDE)
        .map(|c| {
            if c.iter().all(|&v| v == WEAPON_SENTINEL) {
                None
            } else {
                Some(EncodedWeapon {
                    damage: c[0],
                    arc: c[1],
                    short_range: c[2],
                    medium_range: c[3],
                    long_range: c[4],
                })
            }
        })
        .collect())
}
