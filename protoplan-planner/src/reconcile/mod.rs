//! Copy-or-fill reconciliation of scratch output.
//!
//! The generator only ever writes into a scratch directory, and it may skip
//! files it has nothing to put in. Reconciliation makes every declared
//! output exist: a file the generator wrote is copied into place, a file it
//! skipped is created empty. A missing scratch file is the normal case, not
//! an error.

mod local;
pub mod script;

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
pub use local::{ReconcileReport, reconcile_local};
use serde::Serialize;

/// The single reconciliation action for one plugin's outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyGenerated {
    /// Where the expanded copy script is written.
    pub script: Utf8PathBuf,
    pub scratch_dir: Utf8PathBuf,
    pub permanent_dir: Utf8PathBuf,
    /// Declared outputs, all under `permanent_dir`.
    pub outputs: Vec<Utf8PathBuf>,
    pub progress_message: String,
}

impl CopyGenerated {
    /// Substitutions for [`script::COPY_SCRIPT_TEMPLATE`].
    pub fn substitutions(&self) -> IndexMap<String, String> {
        script::substitutions(&self.scratch_dir, &self.permanent_dir, &self.outputs)
    }

    /// The copy script with every placeholder filled in.
    pub fn render_script(&self) -> String {
        script::expand(script::COPY_SCRIPT_TEMPLATE, &self.substitutions())
    }

    /// Perform the copy directly on the local filesystem.
    pub fn execute_local(&self) -> protoplan_core::Result<ReconcileReport> {
        reconcile_local(&self.scratch_dir, &self.permanent_dir, &self.outputs)
    }
}

/// Describe the reconciliation of `declared` from `scratch_dir`.
pub fn reconcile(
    scratch_dir: &Utf8Path,
    permanent_dir: &Utf8Path,
    script: &Utf8Path,
    declared: &[Utf8PathBuf],
) -> CopyGenerated {
    CopyGenerated {
        script: script.to_path_buf(),
        scratch_dir: scratch_dir.to_path_buf(),
        permanent_dir: permanent_dir.to_path_buf(),
        outputs: declared.to_vec(),
        progress_message: format!("Copying generated files into {}", permanent_dir),
    }
}
