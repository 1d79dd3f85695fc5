//! Outdoor scaling engine
//!
//! Resolution (`resolver`) is pure. Application (`applier`) mutates creature
//! stats through the `ScalableCreature` trait and normalizes against the
//! host's base rates (`rates`).

pub mod applier;
pub mod overrides;
pub mod rates;
pub mod resolver;

pub use applier::{
    adjust_spell_damage, apply_creature_scaling, apply_damage, apply_health, scaled_max_health,
    scaled_spell_damage, scaled_weapon_damage, AppliedScaling,
};
pub use overrides::{parse_overrides, OverrideTable};
pub use rates::{sanitize_rate, BaseRates, CreatureRank, RateSource, WorldRates};
pub use resolver::{resolve, ScalingQuery, ScalingResult, ScalingSource};
