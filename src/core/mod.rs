pub mod config;
pub mod error;
pub mod types;

pub use config::{ConfigStore, ScalingConfig};
pub use error::{Result, ScalingError};
pub use types::{CreatureEntry, CreatureGuid, ExpansionTier, MapId, Multipliers, PlacementFacts, ZoneId};
