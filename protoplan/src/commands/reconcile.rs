use camino::Utf8PathBuf;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ReconcileCommand {
    /// Directory the generator wrote into
    #[arg(long)]
    pub scratch: Utf8PathBuf,

    /// Directory the declared outputs live under
    #[arg(long)]
    pub permanent: Utf8PathBuf,

    /// Declared output paths
    #[arg(required = true)]
    pub paths: Vec<Utf8PathBuf>,
}

impl ReconcileCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::reconcile(&self.scratch, &self.permanent, &self.paths).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
