//! Outdoor Scaling - operator CLI
//!
//! Loads a config file and answers the same questions as the in-game
//! `.os mapstat` / `.os creaturestat` commands, or previews what stat
//! initialization would do to a described creature.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use outdoor_scaling::command::{CommandContext, CommandReply};
use outdoor_scaling::core::error::Result;
use outdoor_scaling::core::types::{CreatureGuid, PlacementFacts};
use outdoor_scaling::core::{ScalingConfig, ScalingError};
use outdoor_scaling::entity::{Creature, CreatureStats, CreatureView, DamageBound, WeaponAttack};
use outdoor_scaling::scaling::{resolve, AppliedScaling, CreatureRank, ScalingQuery, ScalingResult, WorldRates};
use outdoor_scaling::OutdoorScaling;

/// Inspect outdoor scaling for a config file
#[derive(Parser, Debug)]
#[command(name = "outdoor-scaling")]
#[command(about = "Inspect outdoor creature scaling for a config file")]
struct Cli {
    /// Config file with [OutdoorScaling] and [rates.*] tables
    #[arg(long, short = 'c', default_value = "data/outdoor_scaling.toml")]
    config: PathBuf,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scaling active at a location
    Mapstat {
        #[command(flatten)]
        place: PlaceArgs,
    },
    /// Scaling active for a creature
    Creaturestat {
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        creature: CreatureArgs,
    },
    /// Preview stat initialization for a creature
    Apply {
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        creature: CreatureArgs,
        /// Max health as set by the engine (world rate already applied)
        #[arg(long, default_value_t = 1000)]
        max_health: u32,
        /// Main-hand minimum damage
        #[arg(long, default_value_t = 10.0)]
        min_damage: f32,
        /// Main-hand maximum damage
        #[arg(long, default_value_t = 20.0)]
        max_damage: f32,
        /// Also rescale one spell hit of this size
        #[arg(long)]
        spell_damage: Option<i32>,
    },
}

#[derive(Args, Debug)]
struct PlaceArgs {
    #[arg(long, default_value_t = 0)]
    map: u32,
    #[arg(long, default_value = "Eastern Kingdoms")]
    map_name: String,
    #[arg(long, default_value_t = 0)]
    zone: u32,
    /// Raw map expansion (values above 2 clamp to 2)
    #[arg(long, default_value_t = 0)]
    expansion: u8,
    /// Map is instanced (dungeon, raid, battleground)
    #[arg(long)]
    instanced: bool,
    /// Map is not a continent
    #[arg(long)]
    not_continent: bool,
}

impl PlaceArgs {
    fn placement(&self) -> PlacementFacts {
        PlacementFacts {
            map_id: self.map,
            map_name: self.map_name.clone(),
            is_continent: !self.not_continent,
            is_instanced: self.instanced,
            expansion: self.expansion,
            zone_id: self.zone,
        }
    }
}

#[derive(Args, Debug)]
struct CreatureArgs {
    /// Creature template entry
    #[arg(long)]
    entry: u32,
    #[arg(long, default_value = "Creature")]
    name: String,
    /// Host rank: 0 normal, 1 elite, 2 rare elite, 3 world boss, 4 rare
    #[arg(long, default_value_t = 0)]
    rank: u32,
    /// Creature is a pet or guardian
    #[arg(long)]
    pet: bool,
}

impl CreatureArgs {
    fn creature(&self, placement: PlacementFacts, stats: CreatureStats) -> Creature {
        let creature = Creature::new(CreatureGuid(1), self.entry, self.name.clone(), placement, stats)
            .with_rank(CreatureRank::from_raw(self.rank));
        if self.pet {
            creature.as_pet()
        } else {
            creature
        }
    }
}

/// Command context for a single CLI invocation
struct CliContext {
    placement: PlacementFacts,
    selected: Option<Creature>,
}

impl CommandContext for CliContext {
    fn player_placement(&self) -> &PlacementFacts {
        &self.placement
    }

    fn selected_creature(&self) -> Option<&dyn CreatureView> {
        self.selected.as_ref().map(|c| c as &dyn CreatureView)
    }
}

#[derive(Serialize)]
struct InspectOutput {
    lines: Vec<String>,
    error: bool,
    scaling: Option<ScalingResult>,
}

#[derive(Serialize)]
struct ApplyOutput {
    scaling: ScalingResult,
    applied: AppliedScaling,
    before: CreatureStats,
    after: CreatureStats,
    spell_damage: Option<(i32, i32)>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("outdoor_scaling=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.format.eq_ignore_ascii_case("json");

    let content = std::fs::read_to_string(&cli.config).map_err(|source| ScalingError::ConfigIo {
        path: cli.config.clone(),
        source,
    })?;
    let root: toml::Value = content.parse()?;
    let config = ScalingConfig::from_toml_value(&root);
    let rates = WorldRates::from_toml_value(&root)?;
    let mut module = OutdoorScaling::new(config, rates);

    tracing::debug!("Loaded {:?}", cli.config);

    match cli.command {
        Command::Mapstat { place } => {
            let ctx = CliContext {
                placement: place.placement(),
                selected: None,
            };
            let scaling = resolve(&module.config(), &ScalingQuery::for_location(&ctx.placement));
            let reply = module.execute_command("os mapstat", &ctx);
            print_reply(reply, Some(scaling), json)?;
        }
        Command::Creaturestat { place, creature } => {
            let selected = creature.creature(place.placement(), CreatureStats::default());
            let scaling = resolve(&module.config(), &ScalingQuery::for_creature(&selected));
            let ctx = CliContext {
                placement: place.placement(),
                selected: Some(selected),
            };
            let reply = module.execute_command("os creaturestat", &ctx);
            print_reply(reply, Some(scaling), json)?;
        }
        Command::Apply {
            place,
            creature,
            max_health,
            min_damage,
            max_damage,
            spell_damage,
        } => {
            let stats = CreatureStats::with_health(max_health).with_weapon(
                WeaponAttack::MainHand,
                min_damage,
                max_damage,
            );
            let mut target = creature.creature(place.placement(), stats);
            let before = target.stats.clone();

            let applied = module.on_creature_select_level(&mut target);
            let scaling = module
                .reporter()
                .last_result(target.guid())
                .copied()
                .unwrap_or_default();

            let spell_damage = spell_damage.map(|incoming| {
                let mut damage = incoming;
                module.on_spell_damage_taken(Some(&target), &mut damage);
                (incoming, damage)
            });

            let output = ApplyOutput {
                scaling,
                applied,
                before,
                after: target.stats.clone(),
                spell_damage,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_apply(&output);
            }
        }
    }

    Ok(())
}

fn print_reply(reply: CommandReply, scaling: Option<ScalingResult>, json: bool) -> Result<()> {
    let failed = reply.sent_error;

    if json {
        let output = InspectOutput {
            error: failed,
            scaling: if failed { None } else { scaling },
            lines: reply.lines,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for line in &reply.lines {
            println!("{}", line);
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn print_apply(output: &ApplyOutput) {
    println!(
        "Resolved: HP x{:.2}, Damage x{:.2} ({})",
        output.scaling.health_mult, output.scaling.damage_mult, output.scaling.source
    );

    match output.applied.health {
        Some(_) => println!(
            "Max health: {} -> {}",
            output.before.max_health, output.after.max_health
        ),
        None => println!("Max health: {} (unchanged)", output.before.max_health),
    }

    for attack in WeaponAttack::ALL {
        let before = (
            output.before.weapon_damage(attack, DamageBound::Min),
            output.before.weapon_damage(attack, DamageBound::Max),
        );
        let after = (
            output.after.weapon_damage(attack, DamageBound::Min),
            output.after.weapon_damage(attack, DamageBound::Max),
        );
        println!(
            "{:?} damage: {:.2}-{:.2} -> {:.2}-{:.2}",
            attack, before.0, before.1, after.0, after.1
        );
    }

    if let Some((incoming, adjusted)) = output.spell_damage {
        println!("Spell hit: {} -> {}", incoming, adjusted);
    }
}
