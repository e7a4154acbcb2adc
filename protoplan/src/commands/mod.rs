mod check;
mod paths;
mod plan;
mod reconcile;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
pub(crate) use paths::KindArg;
use paths::PathsCommand;
use plan::PlanCommand;
use reconcile::ReconcileCommand;

/// Extension trait for exiting on diagnostics with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for protoplan_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for protoplan_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "protoplan")]
#[command(version)]
#[command(about = "Plan derived artifacts and protoc generation actions")]
pub(crate) struct Cli {
    /// Log planning decisions (overridden by PROTOPLAN_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Plan(cmd) => cmd.run(),
            Commands::Paths(cmd) => cmd.run(),
            Commands::Reconcile(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate protoplan.toml and summarize the build unit
    Check(CheckCommand),

    /// Print the declared outputs and actions for every plugin
    Plan(PlanCommand),

    /// Print the planned path of one artifact kind
    Paths(PathsCommand),

    /// Copy generated files out of a scratch directory, filling gaps
    Reconcile(ReconcileCommand),
}
