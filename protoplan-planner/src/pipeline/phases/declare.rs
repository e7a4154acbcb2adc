//! Declare phase - fixes the output set before anything runs.

use protoplan_core::{Error, Result};

use crate::{
    graph::{Action, CreateDirectory},
    paths::ArtifactKind,
    pipeline::{Phase, PlanContext},
};

/// Phase that declares one output per eligible source and suffix.
///
/// Outputs land under the plugin's permanent directory, named by the
/// `FileNaming` option. With nothing to declare, a single placeholder is
/// declared instead and the plan is short-circuited.
pub struct DeclarePhase;

impl Phase for DeclarePhase {
    fn name(&self) -> &'static str {
        "declare"
    }

    fn run(&self, ctx: &mut PlanContext<'_>) -> Result<()> {
        let naming = ctx.options.file_naming()?;
        let plugin = ctx.plugin;
        let unit = ctx.unit;
        let planner = unit.planner();

        if plugin.suffixes().is_empty() && !ctx.eligible.is_empty() {
            ctx.add_warning(
                self.name(),
                format!("plugin '{}' declares no output suffixes", plugin.name()),
            );
        }

        let permanent = planner.path(ArtifactKind::GeneratedSourcesDirectory {
            plugin: plugin.name(),
        })?;

        for source in ctx.eligible.iter() {
            for suffix in plugin.suffixes() {
                let short = permanent.join(naming.file_name(source.import_stem(), suffix));
                let output = unit.declare(short, false);
                if !ctx.plan.outputs.insert(output) {
                    return Err(Error::configuration(format!(
                        "{} maps '{}' onto an output already declared for plugin '{}'",
                        naming,
                        source.import_path,
                        plugin.name()
                    )));
                }
            }
        }

        if !ctx.plan.outputs.is_empty() {
            return Ok(());
        }

        let suffix = plugin.suffixes().first().map(String::as_str).unwrap_or("");
        let placeholder = planner.path(ArtifactKind::Placeholder {
            plugin: plugin.name(),
            suffix,
        })?;
        let placeholder = unit.declare(placeholder, false);

        ctx.plan.actions.push(Action::CreateDirectory(CreateDirectory {
            directory: unit.resolve(&permanent),
            placeholder: placeholder.path.clone(),
        }));
        ctx.plan.outputs.insert(placeholder);
        ctx.short_circuited = true;

        tracing::debug!(plugin = plugin.name(), "no eligible sources, declaring placeholder");
        ctx.add_info(self.name(), format!("plugin '{}' has nothing to generate", plugin.name()));

        Ok(())
    }
}
