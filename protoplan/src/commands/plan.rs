use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use protoplan_manifest::{MANIFEST_FILE, ManifestFile};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{PlanReport, Report, TerminalOutput},
};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct PlanCommand {
    /// Path to protoplan.toml (defaults to ./protoplan.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let plan = ops::plan(file.manifest()).unwrap_or_exit();

        match self.format {
            Format::Json => {
                let json = serde_json::to_string_pretty(&plan)
                    .wrap_err("Failed to serialize build plan")?;
                println!("{}", json);
            }
            Format::Text => {
                let report = PlanReport::new(file.manifest().identity().label(), &plan);
                report.render(&mut TerminalOutput::new());
            }
        }

        Ok(())
    }
}
