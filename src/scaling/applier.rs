//! Stat application
//!
//! Every value is first divided by the host's base rate for the creature's
//! rank and then multiplied by the outdoor multiplier. When the host later
//! re-applies its own rate, the result is `base * outdoor * world`.

use serde::{Deserialize, Serialize};

use crate::entity::{DamageBound, ScalableCreature, WeaponAttack};
use crate::scaling::rates::{sanitize_rate, BaseRates};
use crate::scaling::resolver::ScalingResult;

/// Multipliers within `f32::EPSILON` of 1.0 leave stats untouched
fn is_identity(mult: f32) -> bool {
    (mult - 1.0).abs() < f32::EPSILON
}

/// New max health: undo the world rate, apply the multiplier, round down,
/// never below 1
pub fn scaled_max_health(current_max: u32, world_health_rate: f32, health_mult: f32) -> u32 {
    let base_health = current_max as f32 / sanitize_rate(world_health_rate);
    let scaled = (base_health * health_mult) as u32;
    scaled.max(1)
}

/// New weapon damage bound. Continuous, so no rounding.
pub fn scaled_weapon_damage(current: f32, world_damage_rate: f32, damage_mult: f32) -> f32 {
    current / sanitize_rate(world_damage_rate) * damage_mult
}

/// Adjust one incoming spell damage amount
///
/// A positive multiplier never turns a nonzero hit into zero.
pub fn scaled_spell_damage(damage: i32, world_spell_damage_rate: f32, damage_mult: f32) -> i32 {
    if is_identity(damage_mult) {
        return damage;
    }

    let normalized = damage as f32 / sanitize_rate(world_spell_damage_rate);
    let scaled = (normalized * damage_mult) as i32;
    if scaled == 0 && damage_mult > 0.0 {
        1
    } else {
        scaled
    }
}

/// What `apply_creature_scaling` changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedScaling {
    /// New max health, when health was rewritten
    pub health: Option<u32>,
    /// Weapon damage ranges were rewritten
    pub damage: bool,
}

impl AppliedScaling {
    pub fn changed_anything(&self) -> bool {
        self.health.is_some() || self.damage
    }
}

/// Rewrite every health pool of a creature. Returns the new max health.
pub fn apply_health<C: ScalableCreature + ?Sized>(
    creature: &mut C,
    scaling: &ScalingResult,
    rates: &BaseRates,
) -> Option<u32> {
    if !scaling.source.is_scaled() || is_identity(scaling.health_mult) {
        return None;
    }

    let new_max = scaled_max_health(creature.max_health(), rates.health, scaling.health_mult);

    creature.set_create_health(new_max);
    creature.set_max_health(new_max);
    creature.set_health(new_max);
    creature.set_health_base_modifier(new_max as f32);

    Some(new_max)
}

/// Rewrite the six weapon damage bounds of a creature
pub fn apply_damage<C: ScalableCreature + ?Sized>(
    creature: &mut C,
    scaling: &ScalingResult,
    rates: &BaseRates,
) -> bool {
    if !scaling.source.is_scaled() || is_identity(scaling.damage_mult) {
        return false;
    }

    for attack in WeaponAttack::ALL {
        for bound in DamageBound::ALL {
            let current = creature.weapon_damage(attack, bound);
            let scaled = scaled_weapon_damage(current, rates.damage, scaling.damage_mult);
            creature.set_base_weapon_damage(attack, bound, scaled);
        }
    }

    true
}

/// Apply health and damage scaling for a creature's stat initialization
pub fn apply_creature_scaling<C: ScalableCreature + ?Sized>(
    creature: &mut C,
    scaling: &ScalingResult,
    rates: &BaseRates,
) -> AppliedScaling {
    AppliedScaling {
        health: apply_health(creature, scaling, rates),
        damage: apply_damage(creature, scaling, rates),
    }
}

/// Adjust in-flight spell damage dealt by a creature. Returns true if the
/// amount was rewritten.
pub fn adjust_spell_damage(damage: &mut i32, scaling: &ScalingResult, rates: &BaseRates) -> bool {
    if !scaling.source.is_scaled() || is_identity(scaling.damage_mult) {
        return false;
    }

    *damage = scaled_spell_damage(*damage, rates.spell_damage, scaling.damage_mult);
    true
}
