//! Engine-facing entry points
//!
//! The host calls these from its own event dispatch:
//! - config (re)load -> `on_config_load`
//! - creature stat initialization -> `on_creature_select_level`
//! - spell damage taken -> `on_spell_damage_taken`
//! - creature despawn -> `on_creature_removed`
//! - chat command -> `execute_command`

use std::sync::Arc;

use crate::command::{CommandContext, CommandExecutor, CommandReply, InspectionReporter};
use crate::core::config::{ConfigStore, ScalingConfig};
use crate::core::error::Result;
use crate::entity::{CreatureView, ScalableCreature};
use crate::scaling::applier::{adjust_spell_damage, apply_creature_scaling, AppliedScaling};
use crate::scaling::rates::{RateSource, WorldRates};
use crate::scaling::resolver::{resolve, ScalingQuery, ScalingResult};

/// Outdoor scaling module as seen by the host engine
pub struct OutdoorScaling<R: RateSource = WorldRates> {
    store: Arc<ConfigStore>,
    rates: R,
    reporter: InspectionReporter,
}

impl<R: RateSource> OutdoorScaling<R> {
    pub fn new(config: ScalingConfig, rates: R) -> Self {
        Self::with_store(Arc::new(ConfigStore::new(config)), rates)
    }

    /// Share a store with whoever triggers reloads
    pub fn with_store(store: Arc<ConfigStore>, rates: R) -> Self {
        Self {
            store,
            rates,
            reporter: InspectionReporter::new(),
        }
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    /// Current configuration snapshot
    pub fn config(&self) -> Arc<ScalingConfig> {
        self.store.snapshot()
    }

    pub fn rates(&self) -> &R {
        &self.rates
    }

    pub fn reporter(&self) -> &InspectionReporter {
        &self.reporter
    }

    /// Rebuild the configuration from a parsed config document and swap it in
    pub fn on_config_load(&self, root: &toml::Value, reload: bool) -> Result<()> {
        let config = ScalingConfig::from_toml_value(root);
        self.store.replace(config)?;
        if reload {
            tracing::info!("Outdoor scaling config reloaded");
        }
        Ok(())
    }

    /// Reload from config text. On a syntax error the previous config stays.
    pub fn reload_from_str(&self, content: &str) -> Result<()> {
        let root: toml::Value = match content.parse() {
            Ok(root) => root,
            Err(e) => {
                tracing::warn!("Outdoor scaling reload rejected, keeping previous config: {}", e);
                return Err(e.into());
            }
        };
        self.on_config_load(&root, true)
    }

    /// Resolve a creature and refresh its side-table entry
    pub fn refresh<C: CreatureView + ?Sized>(&mut self, creature: &C) -> ScalingResult {
        let config = self.store.snapshot();
        let scaling = resolve(&config, &ScalingQuery::for_creature(creature));
        self.reporter.record(creature.guid(), scaling);
        scaling
    }

    /// Creature stat initialization: resolve and rewrite health and damage
    pub fn on_creature_select_level<C: ScalableCreature + ?Sized>(
        &mut self,
        creature: &mut C,
    ) -> AppliedScaling {
        let scaling = self.refresh(&*creature);
        if !scaling.source.is_scaled() {
            return AppliedScaling::default();
        }

        let rates = self.rates.rates_for(creature.rank()).sanitized();
        let applied = apply_creature_scaling(creature, &scaling, &rates);

        if applied.changed_anything() {
            tracing::debug!(
                "Scaled {} (entry {}) by HP x{:.2} Damage x{:.2} ({})",
                creature.name(),
                creature.entry(),
                scaling.health_mult,
                scaling.damage_mult,
                scaling.source
            );
        }

        applied
    }

    /// Spell damage taken: rescale damage dealt by an outdoor creature
    ///
    /// `attacker` is `None` when there is no attacker or it is not a creature.
    pub fn on_spell_damage_taken<C: CreatureView + ?Sized>(
        &mut self,
        attacker: Option<&C>,
        damage: &mut i32,
    ) {
        let Some(attacker) = attacker else {
            return;
        };
        if *damage == 0 {
            return;
        }

        let scaling = self.refresh(attacker);
        let rates = self.rates.rates_for(attacker.rank()).sanitized();
        adjust_spell_damage(damage, &scaling, &rates);
    }

    /// Creature despawned: drop its diagnostic entry
    pub fn on_creature_removed<C: CreatureView + ?Sized>(&mut self, creature: &C) {
        self.reporter.forget(creature.guid());
    }

    /// Run an `.os` chat command
    pub fn execute_command(&mut self, input: &str, ctx: &dyn CommandContext) -> CommandReply {
        let config = self.store.snapshot();
        CommandExecutor::execute(input, &config, &mut self.reporter, ctx)
    }
}
