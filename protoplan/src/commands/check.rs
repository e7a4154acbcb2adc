use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use protoplan_manifest::{MANIFEST_FILE, ManifestFile};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to protoplan.toml (defaults to ./protoplan.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();

        let report = ops::check(file.manifest(), &self.config).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
