//! Recording doubles for the host seams.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::{IndexMap, IndexSet};
use protoplan_core::{DirHandle, Error, FileHandle, Result};

use crate::host::{ActionRunner, FileSystem};

/// One call received by a [`RecordingRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Run {
        executable: Utf8PathBuf,
        args: Vec<String>,
        inputs: Vec<Utf8PathBuf>,
        outputs: Vec<Utf8PathBuf>,
        mnemonic: String,
        progress_message: String,
    },
    RunShell {
        command: String,
        args: Vec<String>,
        outputs: Vec<Utf8PathBuf>,
    },
    ExpandTemplate {
        template: String,
        substitutions: IndexMap<String, String>,
        output: Utf8PathBuf,
        is_executable: bool,
    },
    Write {
        path: Utf8PathBuf,
        content: String,
    },
}

impl RecordedCall {
    /// Short name of the call, e.g. `run` or `expand_template`.
    pub fn name(&self) -> &'static str {
        match self {
            RecordedCall::Run { .. } => "run",
            RecordedCall::RunShell { .. } => "run_shell",
            RecordedCall::ExpandTemplate { .. } => "expand_template",
            RecordedCall::Write { .. } => "write",
        }
    }
}

/// An [`ActionRunner`] that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub calls: Vec<RecordedCall>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.calls.iter().map(RecordedCall::name).collect()
    }
}

impl ActionRunner for RecordingRunner {
    fn run(
        &mut self,
        executable: &Utf8Path,
        args: &[String],
        inputs: &[Utf8PathBuf],
        outputs: &[Utf8PathBuf],
        mnemonic: &str,
        progress_message: &str,
    ) -> Result<()> {
        self.calls.push(RecordedCall::Run {
            executable: executable.to_path_buf(),
            args: args.to_vec(),
            inputs: inputs.to_vec(),
            outputs: outputs.to_vec(),
            mnemonic: mnemonic.to_string(),
            progress_message: progress_message.to_string(),
        });
        Ok(())
    }

    fn run_shell(&mut self, command: &str, args: &[String], outputs: &[Utf8PathBuf]) -> Result<()> {
        self.calls.push(RecordedCall::RunShell {
            command: command.to_string(),
            args: args.to_vec(),
            outputs: outputs.to_vec(),
        });
        Ok(())
    }

    fn expand_template(
        &mut self,
        template: &str,
        substitutions: &IndexMap<String, String>,
        output: &Utf8Path,
        is_executable: bool,
    ) -> Result<()> {
        self.calls.push(RecordedCall::ExpandTemplate {
            template: template.to_string(),
            substitutions: substitutions.clone(),
            output: output.to_path_buf(),
            is_executable,
        });
        Ok(())
    }

    fn write(&mut self, path: &Utf8Path, content: &str) -> Result<()> {
        self.calls.push(RecordedCall::Write {
            path: path.to_path_buf(),
            content: content.to_string(),
        });
        Ok(())
    }
}

/// A [`FileSystem`] that keeps declarations in memory.
///
/// Declaring the same path twice fails, as it does in real hosts.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    root: Utf8PathBuf,
    pub files: IndexSet<Utf8PathBuf>,
    pub directories: IndexSet<Utf8PathBuf>,
}

impl MemoryFileSystem {
    /// A filesystem whose handles are rooted at `root`.
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    fn claim(&mut self, path: &Utf8Path, directory: bool) -> Result<Utf8PathBuf> {
        let full = self.root.join(path);
        if self.files.contains(&full) || self.directories.contains(&full) {
            return Err(Error::configuration(format!("'{}' declared twice", full)));
        }
        if directory {
            self.directories.insert(full.clone());
        } else {
            self.files.insert(full.clone());
        }
        Ok(full)
    }
}

impl FileSystem for MemoryFileSystem {
    fn declare_file(&mut self, path: &Utf8Path) -> Result<FileHandle> {
        self.claim(path, false).map(FileHandle::new)
    }

    fn declare_directory(&mut self, path: &Utf8Path) -> Result<DirHandle> {
        self.claim(path, true).map(DirHandle::new)
    }
}
