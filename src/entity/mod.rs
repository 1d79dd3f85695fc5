//! Host-facing creature model
//!
//! The engine owns creatures. The scaling code only sees them through
//! `CreatureView` (read) and `ScalableCreature` (stat mutation). `Creature`
//! is a plain in-memory implementation used by the CLI and tests.

pub mod creature;
pub mod stats;

pub use creature::{Creature, CreatureView, ScalableCreature};
pub use stats::{CreatureStats, DamageBound, WeaponAttack};
