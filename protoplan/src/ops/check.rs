//! Check operation - manifest validation and a dry planning run.

use std::path::Path;

use protoplan_core::Result;
use protoplan_manifest::Manifest;
use protoplan_planner::{
    ActionGraphBuilder, BuildUnit, PluginSpec, graph::EMPTY_MNEMONIC, pipeline::Severity, resolve,
};

use crate::reports::{CheckReport, PluginSummary};

/// Execute the check operation.
///
/// Plans each plugin in turn so fatal planning errors surface here rather
/// than in the host build.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let builder = ActionGraphBuilder::new(BuildUnit::from_manifest(manifest));
    let sources = manifest.descriptors();

    let mut plugins = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for spec in PluginSpec::from_manifest(manifest) {
        let options = resolve(&spec, &manifest.options);
        let plan = builder.build(&spec, &options, &sources)?;

        for diag in &plan.diagnostics {
            let msg = match &diag.location {
                Some(loc) => format!("{}\n  --> {}", diag.message, loc),
                None => diag.message.clone(),
            };
            match diag.severity {
                Severity::Warning => warnings.push(msg),
                Severity::Info => infos.push(msg),
            }
        }

        plugins.push(PluginSummary {
            name: spec.name().to_string(),
            suffixes: spec.suffixes().to_vec(),
            options: options.len(),
            outputs: plan.outputs.len(),
            placeholder: plan.actions.iter().any(|a| a.mnemonic() == EMPTY_MNEMONIC),
        });
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        label: manifest.identity().label(),
        module_name: manifest.target.module_name().to_string(),
        sources: sources.len(),
        plugins,
        warnings,
        infos,
    })
}
