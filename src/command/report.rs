//! Diagnostic text for resolved scaling
//!
//! The reporter also owns the per-creature side table of the last computed
//! result. The table exists for inspection only and is never read back by
//! resolution.

use ahash::AHashMap;

use crate::core::config::ScalingConfig;
use crate::core::types::{CreatureGuid, PlacementFacts};
use crate::entity::CreatureView;
use crate::scaling::resolver::{ScalingResult, ScalingSource};

const SEPARATOR: &str = "---";

/// Renders scaling reports and remembers the last result per creature
#[derive(Debug, Default)]
pub struct InspectionReporter {
    last_results: AHashMap<CreatureGuid, ScalingResult>,
}

impl InspectionReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the latest result computed for a creature
    pub fn record(&mut self, guid: CreatureGuid, result: ScalingResult) {
        self.last_results.insert(guid, result);
    }

    pub fn last_result(&self, guid: CreatureGuid) -> Option<&ScalingResult> {
        self.last_results.get(&guid)
    }

    /// Drop a despawned creature's entry
    pub fn forget(&mut self, guid: CreatureGuid) -> Option<ScalingResult> {
        self.last_results.remove(&guid)
    }

    pub fn tracked_creatures(&self) -> usize {
        self.last_results.len()
    }

    /// Report for a location, independent of any creature
    pub fn map_report(
        &self,
        config: &ScalingConfig,
        placement: &PlacementFacts,
        scaling: &ScalingResult,
    ) -> Vec<String> {
        let mut lines = vec![
            SEPARATOR.to_string(),
            format!(
                "{} (Map {}), Zone {}",
                placement.map_name, placement.map_id, placement.zone_id
            ),
        ];

        match scaling.source {
            ScalingSource::Disabled => {
                lines.push("Outdoor scaling is disabled.".to_string());
                return lines;
            }
            ScalingSource::NotOutdoor => {
                lines.push("Outdoor scaling not active on this map.".to_string());
                return lines;
            }
            _ => {}
        }

        lines.push(continent_line(config, scaling));
        lines.push(zone_line(config, scaling));
        lines.push(active_line(scaling));
        lines
    }

    /// Report for one creature; refreshes its side-table entry
    pub fn creature_report<C: CreatureView + ?Sized>(
        &mut self,
        config: &ScalingConfig,
        creature: &C,
        scaling: &ScalingResult,
    ) -> Vec<String> {
        self.record(creature.guid(), *scaling);

        let placement = creature.placement();
        let creature_override = match config.creature_override(creature.entry()) {
            Some(multipliers) => format!("Creature override: {}", multipliers),
            None => "Creature override: none".to_string(),
        };

        vec![
            SEPARATOR.to_string(),
            format!(
                "{} (Entry {}), Zone {}, Map {}",
                creature.name(),
                creature.entry(),
                placement.zone_id,
                placement.map_id
            ),
            continent_line(config, scaling),
            zone_line(config, scaling),
            creature_override,
            active_line(scaling),
        ]
    }
}

fn continent_line(config: &ScalingConfig, scaling: &ScalingResult) -> String {
    format!(
        "Continent base (exp {}): {}",
        scaling.expansion,
        config.continent(scaling.expansion)
    )
}

fn zone_line(config: &ScalingConfig, scaling: &ScalingResult) -> String {
    match config.zone_override(scaling.zone_id) {
        Some(multipliers) => format!("Zone override: {}", multipliers),
        None => "Zone override: none".to_string(),
    }
}

fn active_line(scaling: &ScalingResult) -> String {
    format!(
        "Active outdoor scaling: {} ({})",
        scaling.multipliers(),
        scaling.source
    )
}
