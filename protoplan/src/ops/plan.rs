//! Plan operation - the full action graph for a manifest.

use protoplan_core::Result;
use protoplan_manifest::Manifest;
use protoplan_planner::{ActionGraphBuilder, BuildPlan, BuildUnit, PluginSpec};

/// Build the plan for every plugin declared in `manifest`.
pub fn plan(manifest: &Manifest) -> Result<BuildPlan> {
    let builder = ActionGraphBuilder::new(BuildUnit::from_manifest(manifest));
    builder.build_all(
        &PluginSpec::from_manifest(manifest),
        &manifest.options,
        &manifest.descriptors(),
    )
}
