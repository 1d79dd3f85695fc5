//! Outdoor scaling configuration
//!
//! `ScalingConfig` is immutable once built. Reloads build a fresh value and
//! swap it into a `ConfigStore`, so readers always see a complete table.
//!
//! Keys live under the `[OutdoorScaling]` table of the config file:
//!
//! ```toml
//! [OutdoorScaling]
//! Enable = true
//! Continent.0.Health = 1.0
//! Continent.0.Damage = 1.0
//! ZoneOverrides = "12 1.2 1.1, 40 1.5"
//! CreatureOverrides = ""
//! ```

use std::path::Path;
use std::sync::{Arc, RwLock};

use ahash::AHashMap;

use crate::core::error::{Result, ScalingError};
use crate::core::types::{CreatureEntry, ExpansionTier, Multipliers, ZoneId};
use crate::scaling::overrides::{is_valid_multiplier, parse_overrides, OverrideTable};

/// Name of the config table holding the outdoor scaling keys
pub const CONFIG_SECTION: &str = "OutdoorScaling";

/// Parsed outdoor scaling configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingConfig {
    /// Master switch for the whole system
    pub enabled: bool,
    /// Per-tier health multipliers
    pub continent_health: [f32; ExpansionTier::COUNT],
    /// Per-tier damage multipliers
    pub continent_damage: [f32; ExpansionTier::COUNT],
    pub zone_overrides: AHashMap<ZoneId, Multipliers>,
    pub creature_overrides: AHashMap<CreatureEntry, Multipliers>,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            continent_health: [1.0; ExpansionTier::COUNT],
            continent_damage: [1.0; ExpansionTier::COUNT],
            zone_overrides: OverrideTable::new(),
            creature_overrides: OverrideTable::new(),
        }
    }
}

impl ScalingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continent defaults for a tier
    pub fn continent(&self, tier: ExpansionTier) -> Multipliers {
        Multipliers::new(
            self.continent_health[tier.index()],
            self.continent_damage[tier.index()],
        )
    }

    pub fn zone_override(&self, zone_id: ZoneId) -> Option<Multipliers> {
        self.zone_overrides.get(&zone_id).copied()
    }

    pub fn creature_override(&self, entry: CreatureEntry) -> Option<Multipliers> {
        self.creature_overrides.get(&entry).copied()
    }

    /// Builder: set continent defaults for a tier
    pub fn with_continent(mut self, tier: u8, multipliers: Multipliers) -> Self {
        let tier = ExpansionTier::clamped(tier);
        self.continent_health[tier.index()] = multipliers.health;
        self.continent_damage[tier.index()] = multipliers.damage;
        self
    }

    /// Builder: parse and install a zone override string
    pub fn with_zone_overrides(mut self, spec: &str) -> Self {
        self.zone_overrides = parse_overrides(spec);
        self
    }

    /// Builder: parse and install a creature override string
    pub fn with_creature_overrides(mut self, spec: &str) -> Self {
        self.creature_overrides = parse_overrides(spec);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScalingError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    ///
    /// Only a TOML syntax error fails. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let root: toml::Value = content.parse()?;
        Ok(Self::from_toml_value(&root))
    }

    /// Build configuration from an already parsed TOML document
    pub fn from_toml_value(root: &toml::Value) -> Self {
        let mut config = Self::default();

        let Some(section) = root.get(CONFIG_SECTION) else {
            tracing::debug!("No [{}] section, using defaults", CONFIG_SECTION);
            return config;
        };

        config.enabled = section
            .get("Enable")
            .and_then(|v| v.as_bool())
            .unwrap_or(true);

        for tier in 0..ExpansionTier::COUNT {
            let tier_table = section
                .get("Continent")
                .and_then(|c| c.get(tier.to_string().as_str()));
            config.continent_health[tier] = continent_value(tier_table, tier, "Health");
            config.continent_damage[tier] = continent_value(tier_table, tier, "Damage");
        }

        let zone_spec = section.get("ZoneOverrides").and_then(|v| v.as_str()).unwrap_or("");
        let creature_spec = section
            .get("CreatureOverrides")
            .and_then(|v| v.as_str())
            .unwrap_or("");
        config.zone_overrides = parse_overrides(zone_spec);
        config.creature_overrides = parse_overrides(creature_spec);

        tracing::info!(
            "Outdoor scaling config loaded: enabled={}, {} zone overrides, {} creature overrides",
            config.enabled,
            config.zone_overrides.len(),
            config.creature_overrides.len()
        );

        config
    }
}

/// Read one `Continent.<tier>.<key>` value, falling back to 1.0
fn continent_value(tier_table: Option<&toml::Value>, tier: usize, key: &str) -> f32 {
    let Some(raw) = tier_table.and_then(|t| t.get(key)) else {
        return 1.0;
    };

    match as_f32(raw) {
        Some(value) if is_valid_multiplier(value) => value,
        _ => {
            tracing::warn!(
                "{}.Continent.{}.{} = {} is not a positive number, using 1.0",
                CONFIG_SECTION,
                tier,
                key,
                raw
            );
            1.0
        }
    }
}

/// TOML numbers may be written as integers (`Health = 2`)
fn as_f32(value: &toml::Value) -> Option<f32> {
    value
        .as_float()
        .map(|f| f as f32)
        .or_else(|| value.as_integer().map(|i| i as f32))
}

/// Holds the live configuration and swaps it wholesale on reload
///
/// Readers take an `Arc` snapshot and never hold the lock while resolving.
#[derive(Debug)]
pub struct ConfigStore {
    current: RwLock<Arc<ScalingConfig>>,
}

impl ConfigStore {
    pub fn new(config: ScalingConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// Consistent snapshot of the current configuration
    pub fn snapshot(&self) -> Arc<ScalingConfig> {
        // The slot only ever holds a complete Arc, even after a poisoning panic.
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Install a new configuration, returning the one it replaced
    pub fn replace(&self, config: ScalingConfig) -> Result<Arc<ScalingConfig>> {
        let mut guard = self
            .current
            .write()
            .map_err(|_| ScalingError::LockPoisoned)?;
        Ok(std::mem::replace(&mut *guard, Arc::new(config)))
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(ScalingConfig::default())
    }
}
