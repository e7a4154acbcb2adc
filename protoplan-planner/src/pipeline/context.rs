//! Planning context passed through pipeline phases.

use indexmap::IndexMap;
use protoplan_core::SourceDescriptor;

use super::diagnostic::{Diagnostic, Severity};
use crate::{BuildPlan, BuildUnit, PluginSpec, ResolvedOptionSet};

/// State of one plugin's plan as it moves through the phases.
///
/// Everything borrowed here is owned by the calling build unit; the
/// plugin spec is only ever read.
#[derive(Debug)]
pub struct PlanContext<'a> {
    pub unit: &'a BuildUnit,
    pub plugin: &'a PluginSpec,
    pub options: &'a ResolvedOptionSet,
    pub sources: &'a [SourceDescriptor],
    /// Every source keyed by import path, first occurrence wins (collect phase).
    pub unique: IndexMap<&'a str, &'a SourceDescriptor>,
    /// Sources the plugin generates for, in import-path order of first appearance.
    pub eligible: Vec<&'a SourceDescriptor>,
    /// Set by the declare phase when there is nothing to generate.
    pub short_circuited: bool,
    pub plan: BuildPlan,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> PlanContext<'a> {
    pub fn new(
        unit: &'a BuildUnit,
        plugin: &'a PluginSpec,
        options: &'a ResolvedOptionSet,
        sources: &'a [SourceDescriptor],
    ) -> Self {
        Self {
            unit,
            plugin,
            options,
            sources,
            unique: IndexMap::new(),
            eligible: Vec::new(),
            short_circuited: false,
            plan: BuildPlan::default(),
            diagnostics: Vec::new(),
        }
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn infos(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Info))
    }

    /// Finish planning, moving the diagnostics into the plan.
    pub fn into_plan(self) -> BuildPlan {
        let mut plan = self.plan;
        plan.diagnostics.extend(self.diagnostics);
        plan
    }
}
