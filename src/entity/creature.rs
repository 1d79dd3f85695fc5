//! Creature traits and the in-memory creature

use crate::core::types::{CreatureEntry, CreatureGuid, PlacementFacts};
use crate::entity::stats::{CreatureStats, DamageBound, WeaponAttack};
use crate::scaling::rates::CreatureRank;

/// Read-only facts about a creature
pub trait CreatureView {
    fn guid(&self) -> CreatureGuid;
    fn entry(&self) -> CreatureEntry;
    fn name(&self) -> &str;
    fn placement(&self) -> &PlacementFacts;
    fn rank(&self) -> CreatureRank;
    fn is_pet_or_guardian(&self) -> bool;
}

/// A creature whose health and weapon damage can be rewritten
pub trait ScalableCreature: CreatureView {
    fn max_health(&self) -> u32;
    fn set_create_health(&mut self, value: u32);
    fn set_max_health(&mut self, value: u32);
    fn set_health(&mut self, value: u32);
    fn set_health_base_modifier(&mut self, value: f32);
    fn weapon_damage(&self, attack: WeaponAttack, bound: DamageBound) -> f32;
    fn set_base_weapon_damage(&mut self, attack: WeaponAttack, bound: DamageBound, value: f32);
}

/// A spawned creature held entirely in memory
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub guid: CreatureGuid,
    pub entry: CreatureEntry,
    pub name: String,
    pub placement: PlacementFacts,
    pub rank: CreatureRank,
    pub pet_or_guardian: bool,
    pub stats: CreatureStats,
}

impl Creature {
    pub fn new(
        guid: CreatureGuid,
        entry: CreatureEntry,
        name: impl Into<String>,
        placement: PlacementFacts,
        stats: CreatureStats,
    ) -> Self {
        Self {
            guid,
            entry,
            name: name.into(),
            placement,
            rank: CreatureRank::Normal,
            pet_or_guardian: false,
            stats,
        }
    }

    pub fn with_rank(mut self, rank: CreatureRank) -> Self {
        self.rank = rank;
        self
    }

    /// Mark as a pet or guardian
    pub fn as_pet(mut self) -> Self {
        self.pet_or_guardian = true;
        self
    }
}

impl CreatureView for Creature {
    fn guid(&self) -> CreatureGuid {
        self.guid
    }

    fn entry(&self) -> CreatureEntry {
        self.entry
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn placement(&self) -> &PlacementFacts {
        &self.placement
    }

    fn rank(&self) -> CreatureRank {
        self.rank
    }

    fn is_pet_or_guardian(&self) -> bool {
        self.pet_or_guardian
    }
}

impl ScalableCreature for Creature {
    fn max_health(&self) -> u32 {
        self.stats.max_health
    }

    fn set_create_health(&mut self, value: u32) {
        self.stats.create_health = value;
    }

    fn set_max_health(&mut self, value: u32) {
        self.stats.max_health = value;
        self.stats.health = self.stats.health.min(value);
    }

    fn set_health(&mut self, value: u32) {
        self.stats.health = value.min(self.stats.max_health);
    }

    fn set_health_base_modifier(&mut self, value: f32) {
        self.stats.health_base_modifier = value;
    }

    fn weapon_damage(&self, attack: WeaponAttack, bound: DamageBound) -> f32 {
        self.stats.weapon_damage(attack, bound)
    }

    fn set_base_weapon_damage(&mut self, attack: WeaponAttack, bound: DamageBound, value: f32) {
        self.stats.set_weapon_damage(attack, bound, value);
    }
}
