use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScalingError {
    #[error("Failed to read config {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config store lock poisoned")]
    LockPoisoned,

    #[error("Please select a creature.")]
    NoCreatureSelected,

    #[error("Outdoor scaling not active inside instances.")]
    InsideInstance,

    #[error("Unknown outdoor scaling command '{0}'. Usage: .os mapstat | .os creaturestat")]
    UnknownCommand(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScalingError>;
