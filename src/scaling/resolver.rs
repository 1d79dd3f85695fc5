//! Scaling resolution
//!
//! Decision order, first match wins:
//! 1. module disabled
//! 2. instanced or non-continent map
//! 3. pet or guardian
//! 4. creature override
//! 5. zone override
//! 6. continent default for the map's expansion tier
//!
//! `resolve` is pure. It reads a config snapshot and the query and nothing else.

use serde::{Deserialize, Serialize};

use crate::core::config::ScalingConfig;
use crate::core::types::{CreatureEntry, ExpansionTier, Multipliers, PlacementFacts, ZoneId};
use crate::entity::CreatureView;

/// Why a given multiplier applies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalingSource {
    #[default]
    None,
    Continent,
    ZoneOverride,
    CreatureOverride,
    Disabled,
    NotOutdoor,
    PetOrGuardian,
}

impl ScalingSource {
    /// Sources whose multipliers are applied to stats
    pub fn is_scaled(self) -> bool {
        matches!(
            self,
            ScalingSource::Continent | ScalingSource::ZoneOverride | ScalingSource::CreatureOverride
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            ScalingSource::Continent => "Continent default",
            ScalingSource::ZoneOverride => "Zone override",
            ScalingSource::CreatureOverride => "Creature override",
            ScalingSource::Disabled => "Module disabled",
            ScalingSource::NotOutdoor => "Not outdoor continent",
            ScalingSource::PetOrGuardian => "Pet/guardian excluded",
            ScalingSource::None => "Not scaled",
        }
    }
}

impl std::fmt::Display for ScalingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingResult {
    pub health_mult: f32,
    pub damage_mult: f32,
    pub source: ScalingSource,
    pub zone_id: ZoneId,
    /// Clamped tier of the map, recorded for every source
    pub expansion: ExpansionTier,
}

impl Default for ScalingResult {
    fn default() -> Self {
        Self {
            health_mult: 1.0,
            damage_mult: 1.0,
            source: ScalingSource::None,
            zone_id: 0,
            expansion: ExpansionTier::default(),
        }
    }
}

impl ScalingResult {
    fn unscaled(source: ScalingSource, zone_id: ZoneId, expansion: ExpansionTier) -> Self {
        Self {
            source,
            zone_id,
            expansion,
            ..Self::default()
        }
    }

    fn scaled(
        multipliers: Multipliers,
        source: ScalingSource,
        zone_id: ZoneId,
        expansion: ExpansionTier,
    ) -> Self {
        Self {
            health_mult: multipliers.health,
            damage_mult: multipliers.damage,
            source,
            zone_id,
            expansion,
        }
    }

    pub fn multipliers(&self) -> Multipliers {
        Multipliers::new(self.health_mult, self.damage_mult)
    }
}

/// Facts the resolver needs about one creature or location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalingQuery {
    pub is_continent: bool,
    pub is_instanced: bool,
    /// Raw map expansion; clamped during resolution
    pub expansion: u8,
    pub zone_id: ZoneId,
    pub creature_entry: CreatureEntry,
    pub is_pet_or_guardian: bool,
}

impl ScalingQuery {
    /// Creature-independent query for a location
    pub fn for_location(placement: &PlacementFacts) -> Self {
        Self {
            is_continent: placement.is_continent,
            is_instanced: placement.is_instanced,
            expansion: placement.expansion,
            zone_id: placement.zone_id,
            creature_entry: 0,
            is_pet_or_guardian: false,
        }
    }

    pub fn for_creature<C: CreatureView + ?Sized>(creature: &C) -> Self {
        Self {
            creature_entry: creature.entry(),
            is_pet_or_guardian: creature.is_pet_or_guardian(),
            ..Self::for_location(creature.placement())
        }
    }
}

/// Resolve which multipliers apply to a query
pub fn resolve(config: &ScalingConfig, query: &ScalingQuery) -> ScalingResult {
    let zone_id = query.zone_id;
    let expansion = ExpansionTier::clamped(query.expansion);

    if !config.enabled {
        return ScalingResult::unscaled(ScalingSource::Disabled, zone_id, expansion);
    }

    if query.is_instanced || !query.is_continent {
        return ScalingResult::unscaled(ScalingSource::NotOutdoor, zone_id, expansion);
    }

    if query.is_pet_or_guardian {
        return ScalingResult::unscaled(ScalingSource::PetOrGuardian, zone_id, expansion);
    }

    if let Some(multipliers) = config.creature_override(query.creature_entry) {
        return ScalingResult::scaled(multipliers, ScalingSource::CreatureOverride, zone_id, expansion);
    }

    if let Some(multipliers) = config.zone_override(zone_id) {
        return ScalingResult::scaled(multipliers, ScalingSource::ZoneOverride, zone_id, expansion);
    }

    ScalingResult::scaled(config.continent(expansion), ScalingSource::Continent, zone_id, expansion)
}
