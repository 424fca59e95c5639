//! Command-line interface definitions.
//!
//! Uses clap v4 with derive macros for argument parsing.

use crate::controllers::tour::TourStep;
use crate::core::content::SkillCategory;
use crate::core::navigation::PassiveScrollPolicy;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;

/// Portfolio page navigation, replayed headless.
#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Portfolio TOML file (default: bundled portfolio)
    #[arg(long, global = true, env = "PORTFOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay clicks, scrolls and waits on a virtual clock
    Tour(TourArgs),
    /// List sections in page order with their offsets
    Sections,
    /// List projects, optionally filtered
    Projects(ProjectsArgs),
    /// List skills, optionally filtered by category
    Skills(SkillsArgs),
}

#[derive(Args, Debug, Default)]
pub struct TourArgs {
    /// Step to replay: "click <id>", "scroll <y>", "wait <ms>" or
    /// "section <id>". Repeat for more steps; without any a default tour runs.
    #[arg(long = "step", short = 's', value_name = "STEP")]
    pub steps: Vec<TourStep>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Override how scrolling interacts with a running transition
    #[arg(long, value_enum)]
    pub passive_scroll: Option<PassiveScrollArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PassiveScrollArg {
    /// Ignore scroll-detected sections while a transition runs
    Lock,
    /// Let scroll detection overwrite the current section at any time
    LastWriteWins,
}

impl From<PassiveScrollArg> for PassiveScrollPolicy {
    fn from(value: PassiveScrollArg) -> Self {
        match value {
            PassiveScrollArg::Lock => Self::LockDuringTransition,
            PassiveScrollArg::LastWriteWins => Self::LastWriteWins,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ProjectsArgs {
    /// Case-insensitive search over title and description
    #[arg(long)]
    pub search: Option<String>,

    /// Only projects using any of these technologies
    #[arg(long = "tech", value_name = "TECH")]
    pub technologies: Vec<String>,

    /// List every technology instead of projects
    #[arg(long, conflicts_with_all = ["search", "technologies"])]
    pub technologies_only: bool,
}

#[derive(Args, Debug, Default)]
pub struct SkillsArgs {
    /// frontend, backend, database, devops or other
    #[arg(long)]
    pub category: Option<SkillCategory>,
}
