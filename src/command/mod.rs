//! Operator diagnostics
//!
//! `.os mapstat` / `.os creaturestat` text -> OsCommand -> resolve -> report lines

pub mod executor;
pub mod report;

pub use executor::{CommandContext, CommandExecutor, CommandReply, OsCommand};
pub use report::InspectionReporter;
