//! The action graph builder.
//!
//! [`ActionGraphBuilder::build`] turns one plugin, its resolved options and
//! the unit's proto sources into a [`BuildPlan`]: the declared outputs plus
//! the actions that guarantee every one of them exists. The generator only
//! ever writes into a scratch directory; a reconciliation action then copies
//! what it produced and fills in what it skipped.
//!
//! # Example
//!
//! ```ignore
//! let unit = BuildUnit::new(TargetIdentity::new("api_proto", "services/api"), protoc);
//! let builder = ActionGraphBuilder::new(unit);
//!
//! let options = resolve(&plugin, &caller_options);
//! let plan = builder.build(&plugin, &options, &sources)?;
//! ```

mod action;
mod plan;

pub use action::{
    Action, ActionSequence, COPY_MNEMONIC, CreateDirectory, EMPTY_MNEMONIC, GENERATE_MNEMONIC,
    RunGenerator, WriteFile,
};
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
pub use plan::{BuildPlan, DeclaredOutput, DeclaredOutputSet};
use protoplan_core::{
    FileHandle, ModuleMapping, NamingPolicy, Result, SourceDescriptor, TargetIdentity,
};
use protoplan_manifest::Manifest;

use crate::{
    PathPlanner, PluginSpec, ResolvedOptionSet,
    options::resolve,
    pipeline::{Phase, PhaseHook, PlanContext, Pipeline, TracingHook},
};

/// Everything fixed for one invocation of the builder.
#[derive(Debug, Clone)]
pub struct BuildUnit {
    pub target: TargetIdentity,
    pub naming: NamingPolicy,
    /// Directory every planned path is relative to.
    pub output_root: Utf8PathBuf,
    pub protoc: FileHandle,
    /// Transitive descriptor sets handed to `--descriptor_set_in`.
    pub descriptor_sets: Vec<FileHandle>,
    pub module_mappings: Vec<ModuleMapping>,
}

impl BuildUnit {
    /// A unit rooted at the target's package with a plain naming policy.
    pub fn new(target: TargetIdentity, protoc: FileHandle) -> Self {
        let output_root = Utf8PathBuf::from(target.package());
        Self {
            target,
            naming: NamingPolicy::plain(),
            output_root,
            protoc,
            descriptor_sets: Vec::new(),
            module_mappings: Vec::new(),
        }
    }

    /// A unit configured from a manifest's `[target]` and `[generator]` tables.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self::new(
            manifest.identity(),
            FileHandle::new(manifest.generator.protoc.clone()),
        )
        .naming(manifest.target.naming.clone())
        .descriptor_sets(manifest.generator.descriptor_sets.iter().cloned())
        .module_mappings(manifest.module_mappings.iter().cloned())
    }

    pub fn naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    pub fn output_root(mut self, root: impl Into<Utf8PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    pub fn descriptor_sets<I, P>(mut self, sets: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        self.descriptor_sets
            .extend(sets.into_iter().map(FileHandle::new));
        self
    }

    pub fn module_mappings(mut self, mappings: impl IntoIterator<Item = ModuleMapping>) -> Self {
        self.module_mappings.extend(mappings);
        self
    }

    pub fn planner(&self) -> PathPlanner<'_> {
        PathPlanner::new(&self.target, &self.naming)
    }

    /// Join a planned path onto the output root.
    pub fn resolve(&self, short_path: &Utf8Path) -> Utf8PathBuf {
        self.output_root.join(short_path)
    }

    /// Describe a planned path as a declared output.
    pub fn declare(&self, short_path: impl Into<Utf8PathBuf>, directory: bool) -> DeclaredOutput {
        let short_path = short_path.into();
        DeclaredOutput {
            path: self.resolve(&short_path),
            short_path,
            directory,
        }
    }
}

/// Builds the declared outputs and actions for a build unit.
pub struct ActionGraphBuilder {
    unit: BuildUnit,
    pipeline: Pipeline,
}

impl ActionGraphBuilder {
    pub fn new(unit: BuildUnit) -> Self {
        Self {
            unit,
            pipeline: Pipeline::new().hook(TracingHook),
        }
    }

    /// Observe every phase boundary.
    pub fn hook(mut self, hook: impl PhaseHook + 'static) -> Self {
        self.pipeline = self.pipeline.hook(hook);
        self
    }

    /// Run an extra phase after the built-in ones.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.pipeline = self.pipeline.phase(phase);
        self
    }

    pub fn unit(&self) -> &BuildUnit {
        &self.unit
    }

    /// Plan generation for one plugin.
    ///
    /// # Errors
    ///
    /// - [`AmbiguousImportPath`](protoplan_core::Error::AmbiguousImportPath)
    ///   when two sources share an import path but not a file
    /// - [`InvalidConfiguration`](protoplan_core::Error::InvalidConfiguration)
    ///   for an unknown `FileNaming` value
    pub fn build(
        &self,
        plugin: &PluginSpec,
        options: &ResolvedOptionSet,
        sources: &[SourceDescriptor],
    ) -> Result<BuildPlan> {
        let mut ctx = PlanContext::new(&self.unit, plugin, options, sources);
        self.pipeline.run(&mut ctx)?;
        Ok(ctx.into_plan())
    }

    /// Plan generation for several plugins over the same sources.
    ///
    /// `caller_options` is resolved against each plugin separately. The
    /// module-mapping file is written once for the whole unit.
    pub fn build_all(
        &self,
        plugins: &[PluginSpec],
        caller_options: &IndexMap<String, String>,
        sources: &[SourceDescriptor],
    ) -> Result<BuildPlan> {
        let mut plan = BuildPlan::default();
        for plugin in plugins {
            let options = resolve(plugin, caller_options);
            plan.merge(self.build(plugin, &options, sources)?);
        }
        tracing::debug!(
            label = %self.unit.target,
            plugins = plugins.len(),
            outputs = plan.outputs.len(),
            actions = plan.actions.len(),
            "planned build unit"
        );
        Ok(plan)
    }
}
