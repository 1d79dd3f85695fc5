//! Host base rates
//!
//! The world applies its own health/damage/spell-damage rates per creature
//! rank. Outdoor scaling divides those out before multiplying, so the two
//! compose instead of one replacing the other.

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Creature rank, which selects the host's rate bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureRank {
    Normal,
    Elite,
    RareElite,
    WorldBoss,
    Rare,
}

impl CreatureRank {
    /// Map the host's numeric rank. Unknown ranks use the Elite bucket.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => CreatureRank::Normal,
            1 => CreatureRank::Elite,
            2 => CreatureRank::RareElite,
            3 => CreatureRank::WorldBoss,
            4 => CreatureRank::Rare,
            _ => CreatureRank::Elite,
        }
    }
}

/// Global rates for one rank
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseRates {
    pub health: f32,
    pub damage: f32,
    pub spell_damage: f32,
}

impl Default for BaseRates {
    fn default() -> Self {
        Self {
            health: 1.0,
            damage: 1.0,
            spell_damage: 1.0,
        }
    }
}

impl BaseRates {
    pub fn new(health: f32, damage: f32, spell_damage: f32) -> Self {
        Self {
            health,
            damage,
            spell_damage,
        }
    }

    /// Copy with every degenerate rate replaced by 1.0
    pub fn sanitized(self) -> Self {
        Self {
            health: sanitize_rate(self.health),
            damage: sanitize_rate(self.damage),
            spell_damage: sanitize_rate(self.spell_damage),
        }
    }
}

/// Zero, negative and non-finite rates are treated as 1.0
pub fn sanitize_rate(rate: f32) -> f32 {
    if rate.is_finite() && rate > 0.0 {
        rate
    } else {
        1.0
    }
}

/// Supplies the host's base rates for a creature rank
pub trait RateSource {
    fn rates_for(&self, rank: CreatureRank) -> BaseRates;
}

/// Rate table loaded from the `[rates.*]` tables of the config file
///
/// ```toml
/// [rates.normal]
/// health = 2.0
/// damage = 1.5
/// spell_damage = 1.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldRates {
    pub normal: BaseRates,
    pub elite: BaseRates,
    pub rare_elite: BaseRates,
    pub world_boss: BaseRates,
    pub rare: BaseRates,
}

impl WorldRates {
    /// Same rates for every rank
    pub fn uniform(rates: BaseRates) -> Self {
        Self {
            normal: rates,
            elite: rates,
            rare_elite: rates,
            world_boss: rates,
            rare: rates,
        }
    }

    /// Parse rates from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let root: toml::Value = content.parse()?;
        Self::from_toml_value(&root)
    }

    /// Read the `rates` table of a parsed document; absent means all 1.0
    pub fn from_toml_value(root: &toml::Value) -> Result<Self> {
        match root.get("rates") {
            Some(table) => Ok(table.clone().try_into()?),
            None => Ok(Self::default()),
        }
    }
}

impl RateSource for WorldRates {
    fn rates_for(&self, rank: CreatureRank) -> BaseRates {
        match rank {
            CreatureRank::Normal => self.normal,
            CreatureRank::Elite => self.elite,
            CreatureRank::RareElite => self.rare_elite,
            CreatureRank::WorldBoss => self.world_boss,
            CreatureRank::Rare => self.rare,
        }
    }
}
