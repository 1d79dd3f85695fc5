//! Outdoor Scaling - per-continent, per-zone and per-creature health/damage
//! multipliers for open-world creatures

pub mod command;
pub mod core;
pub mod entity;
pub mod hooks;
pub mod scaling;

pub use hooks::OutdoorScaling;
