//! Outdoor scaling integration tests
//!
//! Drive the engine hooks end to end with in-memory creatures and check that
//! outdoor multipliers compose with the world base rates.

use std::path::Path;
use std::sync::Arc;

use outdoor_scaling::core::types::{CreatureGuid, Multipliers, PlacementFacts};
use outdoor_scaling::core::{ConfigStore, ScalingConfig};
use outdoor_scaling::entity::{Creature, CreatureStats, DamageBound, WeaponAttack};
use outdoor_scaling::scaling::{BaseRates, CreatureRank, RateSource, ScalingSource, WorldRates};
use outdoor_scaling::OutdoorScaling;

const CONFIG: &str = r#"
[OutdoorScaling]
Enable = true
Continent.0.Health = 1.2
Continent.0.Damage = 1.1
Continent.1.Health = 1.5
Continent.1.Damage = 2.0
Continent.2.Health = 3.0
Continent.2.Damage = 2.5
ZoneOverrides = "3483 2.0 1.5, broken entry, 3519 -1"
CreatureOverrides = "18733 4.0 3.0"

[rates.normal]
health = 2.0
damage = 2.0
spell_damage = 2.0

[rates.elite]
health = 0.0
damage = 1.0
spell_damage = 1.0
"#;

fn module() -> OutdoorScaling {
    let root: toml::Value = CONFIG.parse().unwrap();
    let config = ScalingConfig::from_toml_value(&root);
    let rates = WorldRates::from_toml_value(&root).unwrap();
    OutdoorScaling::new(config, rates)
}

fn outland(zone_id: u32) -> PlacementFacts {
    PlacementFacts::continent(530, "Outland", 1, zone_id)
}

fn spawn(guid: u64, entry: u32, placement: PlacementFacts) -> Creature {
    Creature::new(
        CreatureGuid(guid),
        entry,
        "Test Creature",
        placement,
        CreatureStats::with_health(1000)
            .with_weapon(WeaponAttack::MainHand, 20.0, 40.0)
            .with_weapon(WeaponAttack::OffHand, 10.0, 12.0)
            .with_weapon(WeaponAttack::Ranged, 8.0, 16.0),
    )
}

/// World rate 2.0 doubled max health to 1000; continent tier 1 applies 1.5
/// to the 500 base.
#[test]
fn test_continent_scaling_composes_with_world_rate() {
    let mut module = module();
    let mut creature = spawn(1, 18000, outland(3518));

    let applied = module.on_creature_select_level(&mut creature);

    assert_eq!(applied.health, Some(750));
    assert!(applied.damage);
    assert_eq!(creature.stats.max_health, 750);
    assert_eq!(creature.stats.health, 750);
    assert_eq!(creature.stats.create_health, 750);
    assert_eq!(creature.stats.health_base_modifier, 750.0);

    // 20 / 2.0 * 2.0 and so on
    assert_eq!(creature.stats.weapon_damage(WeaponAttack::MainHand, DamageBound::Min), 20.0);
    assert_eq!(creature.stats.weapon_damage(WeaponAttack::MainHand, DamageBound::Max), 40.0);
    assert_eq!(creature.stats.weapon_damage(WeaponAttack::Ranged, DamageBound::Max), 16.0);
}

#[test]
fn test_zone_override_applies_in_its_zone() {
    let mut module = module();
    let mut creature = spawn(2, 18000, outland(3483));

    module.on_creature_select_level(&mut creature);

    let cached = module.reporter().last_result(CreatureGuid(2)).copied().unwrap();
    assert_eq!(cached.source, ScalingSource::ZoneOverride);
    assert_eq!(cached.multipliers(), Multipliers::new(2.0, 1.5));
    // 1000 / 2.0 * 2.0
    assert_eq!(creature.stats.max_health, 1000);
    // 10 / 2.0 * 1.5
    assert_eq!(creature.stats.weapon_damage(WeaponAttack::OffHand, DamageBound::Min), 7.5);
}

#[test]
fn test_invalid_zone_entry_falls_back_to_continent() {
    let mut module = module();
    let creature = spawn(3, 18000, outland(3519));
    let result = module.refresh(&creature);
    assert_eq!(result.source, ScalingSource::Continent);
}

#[test]
fn test_creature_override_beats_zone_override() {
    let mut module = module();
    let mut creature = spawn(4, 18733, outland(3483));

    module.on_creature_select_level(&mut creature);

    let cached = module.reporter().last_result(CreatureGuid(4)).copied().unwrap();
    assert_eq!(cached.source, ScalingSource::CreatureOverride);
    // 1000 / 2.0 * 4.0
    assert_eq!(creature.stats.max_health, 2000);
}

#[test]
fn test_degenerate_world_rate_treated_as_one() {
    let mut module = module();
    let mut creature = spawn(5, 18000, outland(3518)).with_rank(CreatureRank::Elite);

    module.on_creature_select_level(&mut creature);

    // Elite health rate is 0.0 in the config and is neutralized to 1.0
    assert_eq!(creature.stats.max_health, 1500);
}

#[test]
fn test_pets_and_instances_untouched() {
    let mut module = module();

    let mut pet = spawn(6, 18000, outland(3518)).as_pet();
    let applied = module.on_creature_select_level(&mut pet);
    assert!(!applied.changed_anything());
    assert_eq!(pet.stats.max_health, 1000);

    let mut boss = spawn(7, 18733, PlacementFacts::instance(540, "Shattered Halls", 1, 3714));
    let applied = module.on_creature_select_level(&mut boss);
    assert!(!applied.changed_anything());
    assert_eq!(
        module.reporter().last_result(CreatureGuid(7)).map(|r| r.source),
        Some(ScalingSource::NotOutdoor)
    );
}

#[test]
fn test_newer_expansions_use_tier_two() {
    let mut module = module();
    let northrend = PlacementFacts::continent(571, "Northrend", 2, 495);
    let future = PlacementFacts::continent(9999, "Future Continent", 7, 495);

    let a = module.refresh(&spawn(8, 1, northrend));
    let b = module.refresh(&spawn(9, 1, future));

    assert_eq!(a.multipliers(), b.multipliers());
    assert_eq!(b.expansion.value(), 2);
}

#[test]
fn test_spell_damage_scaling() {
    let mut module = module();
    let attacker = spawn(10, 18000, outland(3518));

    // 100 / 2.0 * 2.0
    let mut damage = 100;
    module.on_spell_damage_taken(Some(&attacker), &mut damage);
    assert_eq!(damage, 100);

    // 1 / 2.0 * 2.0 = 1.0
    let mut damage = 1;
    module.on_spell_damage_taken(Some(&attacker), &mut damage);
    assert_eq!(damage, 1);

    // Zone override 1.5: 1 / 2.0 * 1.5 = 0.75, lifted to 1
    let attacker = spawn(11, 18000, outland(3483));
    let mut damage = 1;
    module.on_spell_damage_taken(Some(&attacker), &mut damage);
    assert_eq!(damage, 1);

    // Pet attackers deal unmodified damage
    let pet = spawn(12, 18000, outland(3483)).as_pet();
    let mut damage = 77;
    module.on_spell_damage_taken(Some(&pet), &mut damage);
    assert_eq!(damage, 77);
}

#[test]
fn test_reload_is_visible_to_next_resolution_only() {
    let store = Arc::new(ConfigStore::new(ScalingConfig::default()));
    let mut module = OutdoorScaling::with_store(Arc::clone(&store), WorldRates::default());
    let creature = spawn(13, 18000, outland(3518));

    let held = module.config();
    assert_eq!(module.refresh(&creature).multipliers(), Multipliers::IDENTITY);

    store
        .replace(ScalingConfig::new().with_continent(1, Multipliers::uniform(2.0)))
        .unwrap();

    // A snapshot taken before the swap is unaffected
    assert_eq!(held.continent_health[1], 1.0);
    assert_eq!(module.refresh(&creature).multipliers(), Multipliers::uniform(2.0));
}

#[test]
fn test_sample_config_file_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/outdoor_scaling.toml");
    let content = std::fs::read_to_string(&path).expect("sample config should exist");
    let root: toml::Value = content.parse().expect("sample config should be valid TOML");

    let config = ScalingConfig::from_toml_value(&root);
    assert!(config.enabled);
    assert!(config.zone_overrides.is_empty());
    assert_eq!(config.continent_health, [1.0; 3]);

    let rates = WorldRates::from_toml_value(&root).unwrap();
    assert_eq!(rates.rates_for(CreatureRank::WorldBoss), BaseRates::default());
}
