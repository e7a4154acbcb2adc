//! Declared outputs and the finished build plan.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use super::{Action, ActionSequence};
use crate::pipeline::Diagnostic;

/// A path the host build system is told to expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredOutput {
    /// Path relative to the package output root, as passed to the host's
    /// `declare_file`/`declare_directory`.
    pub short_path: Utf8PathBuf,
    /// Path the actions refer to (output root joined with the short path).
    pub path: Utf8PathBuf,
    pub directory: bool,
}

/// Every output a build unit promises to produce, fixed before the generator runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeclaredOutputSet(Vec<DeclaredOutput>);

impl DeclaredOutputSet {
    /// Add an output; returns `false` if its path was already declared.
    pub fn insert(&mut self, output: DeclaredOutput) -> bool {
        if self.contains(&output.path) {
            return false;
        }
        self.0.push(output);
        true
    }

    pub fn contains(&self, path: &Utf8Path) -> bool {
        self.0.iter().any(|o| o.path.as_path() == path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeclaredOutput> {
        self.0.iter()
    }

    /// The action-facing paths, in declaration order.
    pub fn paths(&self) -> Vec<Utf8PathBuf> {
        self.0.iter().map(|o| o.path.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a DeclaredOutputSet {
    type Item = &'a DeclaredOutput;
    type IntoIter = std::slice::Iter<'a, DeclaredOutput>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of building one unit's action graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildPlan {
    /// The generated sources (or the single placeholder).
    pub outputs: DeclaredOutputSet,
    /// Supporting files the actions create along the way.
    pub intermediates: DeclaredOutputSet,
    pub actions: ActionSequence,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildPlan {
    /// Fold another plan for the same unit into this one.
    ///
    /// Outputs and intermediates already declared are kept once. A
    /// [`Action::WriteFile`] for an already-declared intermediate is skipped,
    /// which is how several plugins share one module-mapping file.
    pub fn merge(&mut self, other: BuildPlan) {
        let mut shared = Vec::new();
        for output in other.intermediates.0 {
            let path = output.path.clone();
            if !self.intermediates.insert(output) {
                shared.push(path);
            }
        }
        for output in other.outputs.0 {
            self.outputs.insert(output);
        }
        for action in other.actions {
            if let Action::WriteFile(write) = &action
                && shared.contains(&write.path)
            {
                continue;
            }
            self.actions.push(action);
        }
        self.diagnostics.extend(other.diagnostics);
    }

    /// Every declared path, intermediates first.
    pub fn declared(&self) -> impl Iterator<Item = &DeclaredOutput> {
        self.intermediates.iter().chain(self.outputs.iter())
    }
}
