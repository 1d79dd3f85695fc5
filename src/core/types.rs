//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Zone (sub-area) identifier within a map
pub type ZoneId = u32;

/// Creature template identifier ("entry")
pub type CreatureEntry = u32;

/// Map identifier
pub type MapId = u32;

/// Unique identifier for a spawned creature instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureGuid(pub u64);

/// Content era of a map, used to index continent defaults
///
/// Only three tiers are configurable. Anything newer is treated as the
/// newest supported tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExpansionTier(u8);

impl ExpansionTier {
    /// Highest configurable tier
    pub const MAX: u8 = 2;

    /// Number of configurable tiers
    pub const COUNT: usize = Self::MAX as usize + 1;

    /// Build a tier from a raw map expansion, clamping to `MAX`
    pub fn clamped(raw: u8) -> Self {
        Self(raw.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Index into per-tier tables
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ExpansionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A (health, damage) multiplier pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    pub health: f32,
    pub damage: f32,
}

impl Multipliers {
    pub const IDENTITY: Multipliers = Multipliers {
        health: 1.0,
        damage: 1.0,
    };

    pub fn new(health: f32, damage: f32) -> Self {
        Self { health, damage }
    }

    /// Same multiplier for health and damage
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value)
    }
}

impl Default for Multipliers {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::fmt::Display for Multipliers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HP x{:.2}, Damage x{:.2}", self.health, self.damage)
    }
}

/// Where an entity currently stands, as reported by the host engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementFacts {
    pub map_id: MapId,
    pub map_name: String,
    /// Map is a top-level continent
    pub is_continent: bool,
    /// Map is instanced (dungeon, raid, battleground)
    pub is_instanced: bool,
    /// Raw expansion of the map, unclamped
    pub expansion: u8,
    pub zone_id: ZoneId,
}

impl PlacementFacts {
    /// Placement on an open-world continent
    pub fn continent(map_id: MapId, map_name: impl Into<String>, expansion: u8, zone_id: ZoneId) -> Self {
        Self {
            map_id,
            map_name: map_name.into(),
            is_continent: true,
            is_instanced: false,
            expansion,
            zone_id,
        }
    }

    /// Placement inside an instanced map
    pub fn instance(map_id: MapId, map_name: impl Into<String>, expansion: u8, zone_id: ZoneId) -> Self {
        Self {
            map_id,
            map_name: map_name.into(),
            is_continent: false,
            is_instanced: true,
            expansion,
            zone_id,
        }
    }

    /// Non-instanced continent map, the only place outdoor scaling applies
    pub fn is_outdoor_continent(&self) -> bool {
        self.is_continent && !self.is_instanced
    }

    pub fn expansion_tier(&self) -> ExpansionTier {
        ExpansionTier::clamped(self.expansion)
    }
}
