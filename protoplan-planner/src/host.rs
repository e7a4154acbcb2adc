//! Host build system seams and plan registration.
//!
//! The planner never runs anything. A host adapts its own action API to
//! [`ActionRunner`] and its output declaration API to [`FileSystem`], then
//! hands a finished [`BuildPlan`] to [`register`].

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use protoplan_core::{DirHandle, FileHandle, Result};

use crate::{
    graph::{Action, BuildPlan, COPY_MNEMONIC},
    reconcile::script::COPY_SCRIPT_TEMPLATE,
};

/// Shell command behind [`Action::CreateDirectory`]; `$1` is the directory
/// and `$2` the placeholder inside it.
pub const CREATE_DIRECTORY_COMMAND: &str = r#"mkdir -p "$1" && touch "$2""#;

/// Action registration API of the host build system.
pub trait ActionRunner {
    fn run(
        &mut self,
        executable: &Utf8Path,
        args: &[String],
        inputs: &[Utf8PathBuf],
        outputs: &[Utf8PathBuf],
        mnemonic: &str,
        progress_message: &str,
    ) -> Result<()>;

    fn run_shell(&mut self, command: &str, args: &[String], outputs: &[Utf8PathBuf]) -> Result<()>;

    fn expand_template(
        &mut self,
        template: &str,
        substitutions: &IndexMap<String, String>,
        output: &Utf8Path,
        is_executable: bool,
    ) -> Result<()>;

    fn write(&mut self, path: &Utf8Path, content: &str) -> Result<()>;
}

/// Output declaration API of the host build system.
///
/// Paths are relative to the package output root.
pub trait FileSystem {
    fn declare_file(&mut self, path: &Utf8Path) -> Result<FileHandle>;

    fn declare_directory(&mut self, path: &Utf8Path) -> Result<DirHandle>;
}

/// Handles the host returned while registering a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registered {
    pub files: Vec<FileHandle>,
    pub directories: Vec<DirHandle>,
}

/// Declare every planned path and register every action, in plan order.
pub fn register(
    plan: &BuildPlan,
    fs: &mut dyn FileSystem,
    runner: &mut dyn ActionRunner,
) -> Result<Registered> {
    let mut registered = Registered::default();

    for output in plan.declared() {
        if output.directory {
            registered
                .directories
                .push(fs.declare_directory(&output.short_path)?);
        } else {
            registered.files.push(fs.declare_file(&output.short_path)?);
        }
    }

    for action in &plan.actions {
        tracing::trace!(mnemonic = action.mnemonic(), "registering action");
        match action {
            Action::CreateDirectory(create) => {
                let args = [create.directory.to_string(), create.placeholder.to_string()];
                runner.run_shell(
                    CREATE_DIRECTORY_COMMAND,
                    &args,
                    std::slice::from_ref(&create.placeholder),
                )?;
            }
            Action::WriteFile(write) => runner.write(&write.path, &write.content)?,
            Action::RunGenerator(run) => runner.run(
                &run.executable,
                &run.args,
                &run.inputs,
                &run.outputs,
                &run.mnemonic,
                &run.progress_message,
            )?,
            Action::CopyGenerated(copy) => {
                runner.expand_template(
                    COPY_SCRIPT_TEMPLATE,
                    &copy.substitutions(),
                    &copy.script,
                    true,
                )?;
                runner.run(
                    &copy.script,
                    &[],
                    std::slice::from_ref(&copy.scratch_dir),
                    &copy.outputs,
                    COPY_MNEMONIC,
                    &copy.progress_message,
                )?;
            }
        }
    }

    Ok(registered)
}
