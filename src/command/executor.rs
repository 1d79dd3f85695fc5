//! Command execution - parses `.os` sub-commands and renders replies

use crate::command::report::InspectionReporter;
use crate::core::config::ScalingConfig;
use crate::core::error::{Result, ScalingError};
use crate::core::types::PlacementFacts;
use crate::entity::CreatureView;
use crate::scaling::resolver::{resolve, ScalingQuery};

/// Root names accepted for the command table
const COMMAND_ROOTS: [&str; 2] = ["os", "outdoorscaling"];

/// Diagnostic sub-commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsCommand {
    /// Scaling at the invoking player's location
    MapStat,
    /// Scaling of the selected creature
    CreatureStat,
}

impl OsCommand {
    /// Parse `os mapstat`, `.outdoorscaling creaturestat`, ...
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let mut words = trimmed.trim_start_matches('.').split_whitespace();

        let root = words.next().map(str::to_lowercase);
        let sub = words.next().map(str::to_lowercase);

        match (root.as_deref(), sub.as_deref()) {
            (Some(root), Some("mapstat")) if COMMAND_ROOTS.contains(&root) => Ok(OsCommand::MapStat),
            (Some(root), Some("creaturestat")) if COMMAND_ROOTS.contains(&root) => {
                Ok(OsCommand::CreatureStat)
            }
            _ => Err(ScalingError::UnknownCommand(trimmed.to_string())),
        }
    }
}

/// What the command handler can see about its invoker
pub trait CommandContext {
    /// Where the invoking player stands
    fn player_placement(&self) -> &PlacementFacts;
    /// The creature the player has targeted, if any
    fn selected_creature(&self) -> Option<&dyn CreatureView>;
}

/// Lines to send back, plus whether they report an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    pub lines: Vec<String>,
    pub sent_error: bool,
}

impl CommandReply {
    fn ok(lines: Vec<String>) -> Self {
        Self {
            lines,
            sent_error: false,
        }
    }

    fn error(error: &ScalingError) -> Self {
        Self {
            lines: vec![error.to_string()],
            sent_error: true,
        }
    }
}

/// Executes diagnostic commands against a config snapshot
pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute one command line. Failures come back as an error reply.
    pub fn execute(
        input: &str,
        config: &ScalingConfig,
        reporter: &mut InspectionReporter,
        ctx: &dyn CommandContext,
    ) -> CommandReply {
        match Self::run(input, config, reporter, ctx) {
            Ok(lines) => CommandReply::ok(lines),
            Err(error) => {
                tracing::debug!("Command '{}' failed: {}", input.trim(), error);
                CommandReply::error(&error)
            }
        }
    }

    fn run(
        input: &str,
        config: &ScalingConfig,
        reporter: &mut InspectionReporter,
        ctx: &dyn CommandContext,
    ) -> Result<Vec<String>> {
        match OsCommand::parse(input)? {
            OsCommand::MapStat => {
                let placement = ctx.player_placement();
                let scaling = resolve(config, &ScalingQuery::for_location(placement));
                Ok(reporter.map_report(config, placement, &scaling))
            }
            OsCommand::CreatureStat => {
                let creature = ctx
                    .selected_creature()
                    .ok_or(ScalingError::NoCreatureSelected)?;

                if creature.placement().is_instanced {
                    return Err(ScalingError::InsideInstance);
                }

                let scaling = resolve(config, &ScalingQuery::for_creature(creature));
                Ok(reporter.creature_report(config, creature, &scaling))
            }
        }
    }
}
