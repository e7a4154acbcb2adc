//! Actions handed to the host build system.

use camino::Utf8PathBuf;
use serde::Serialize;

use crate::reconcile::CopyGenerated;

/// Mnemonic of the generator invocation.
pub const GENERATE_MNEMONIC: &str = "ProtocGenerate";
/// Mnemonic of the reconciliation copy.
pub const COPY_MNEMONIC: &str = "ProtocCopyGenerated";
/// Mnemonic of the empty-output short circuit.
pub const EMPTY_MNEMONIC: &str = "ProtocEmptyOutputs";

/// One unit of work for the host executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Create a directory and an empty placeholder inside it.
    CreateDirectory(CreateDirectory),
    /// Write a file with known content.
    WriteFile(WriteFile),
    /// Invoke the generator into its scratch directory.
    RunGenerator(RunGenerator),
    /// Copy scratch output into the declared locations, filling gaps.
    CopyGenerated(CopyGenerated),
}

impl Action {
    /// Every path this action produces.
    pub fn outputs(&self) -> Vec<&Utf8PathBuf> {
        match self {
            Action::CreateDirectory(a) => vec![&a.placeholder],
            Action::WriteFile(a) => vec![&a.path],
            Action::RunGenerator(a) => a.outputs.iter().collect(),
            Action::CopyGenerated(a) => a.outputs.iter().collect(),
        }
    }

    pub fn mnemonic(&self) -> &str {
        match self {
            Action::CreateDirectory(_) => EMPTY_MNEMONIC,
            Action::WriteFile(_) => "FileWrite",
            Action::RunGenerator(a) => &a.mnemonic,
            Action::CopyGenerated(_) => COPY_MNEMONIC,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDirectory {
    pub directory: Utf8PathBuf,
    pub placeholder: Utf8PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteFile {
    pub path: Utf8PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunGenerator {
    pub executable: Utf8PathBuf,
    pub args: Vec<String>,
    pub inputs: Vec<Utf8PathBuf>,
    pub outputs: Vec<Utf8PathBuf>,
    pub mnemonic: String,
    pub progress_message: String,
}

/// The ordered actions of a build plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActionSequence(Vec<Action>);

impl ActionSequence {
    pub fn push(&mut self, action: Action) {
        self.0.push(action);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.0
    }
}

impl IntoIterator for ActionSequence {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ActionSequence {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
