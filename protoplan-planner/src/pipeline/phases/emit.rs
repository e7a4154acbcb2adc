//! Emit phase - generate into scratch, then reconcile.

use protoplan_core::Result;

use crate::{
    graph::{Action, GENERATE_MNEMONIC, RunGenerator, WriteFile},
    mapping::render_module_mappings,
    options::MODULE_MAPPINGS_OPTION,
    paths::ArtifactKind,
    pipeline::{Phase, PlanContext},
    reconcile,
};

/// Phase that emits the three-action sequence for a non-empty plan.
///
/// 1. write the module-mapping side file
/// 2. run the generator into the scratch directory
/// 3. reconcile scratch output into the declared paths
///
/// Nothing is emitted when the declare phase short-circuited.
pub struct EmitPhase;

impl Phase for EmitPhase {
    fn name(&self) -> &'static str {
        "emit"
    }

    fn run(&self, ctx: &mut PlanContext<'_>) -> Result<()> {
        if ctx.short_circuited {
            return Ok(());
        }

        let unit = ctx.unit;
        let plugin = ctx.plugin;
        let planner = unit.planner();

        let mappings = unit.declare(planner.path(ArtifactKind::ModuleMappings)?, false);
        let scratch = unit.declare(
            planner.path(ArtifactKind::ScratchDirectory {
                plugin: plugin.name(),
            })?,
            true,
        );
        let script = unit.declare(
            planner.path(ArtifactKind::CopyScript {
                plugin: plugin.name(),
            })?,
            false,
        );
        let permanent = unit.resolve(&planner.path(ArtifactKind::GeneratedSourcesDirectory {
            plugin: plugin.name(),
        })?);

        let mut args = vec![plugin.registration_flag()];
        args.extend(ctx.options.to_flags(plugin));
        args.push(format!(
            "{}={}={}",
            plugin.option_flag(),
            MODULE_MAPPINGS_OPTION,
            mappings.path
        ));
        args.push(plugin.output_flag(scratch.path.as_str()));
        if !unit.descriptor_sets.is_empty() {
            let joined: Vec<&str> = unit
                .descriptor_sets
                .iter()
                .map(|set| set.path().as_str())
                .collect();
            args.push(format!("--descriptor_set_in={}", joined.join(":")));
        }
        args.extend(ctx.eligible.iter().map(|s| s.import_path.clone()));

        let mut inputs = vec![plugin.binary().path().to_path_buf(), mappings.path.clone()];
        inputs.extend(unit.descriptor_sets.iter().map(|set| set.path().to_path_buf()));
        inputs.extend(ctx.eligible.iter().map(|s| s.file.path().to_path_buf()));

        let generate = RunGenerator {
            executable: unit.protoc.path().to_path_buf(),
            args,
            inputs,
            outputs: vec![scratch.path.clone()],
            mnemonic: GENERATE_MNEMONIC.to_string(),
            progress_message: format!(
                "Generating {} sources for {}",
                plugin.name(),
                unit.target
            ),
        };

        let copy = reconcile::reconcile(
            &scratch.path,
            &permanent,
            &script.path,
            &ctx.plan.outputs.paths(),
        );

        ctx.plan.actions.push(Action::WriteFile(WriteFile {
            path: mappings.path.clone(),
            content: render_module_mappings(&unit.module_mappings),
        }));
        ctx.plan.actions.push(Action::RunGenerator(generate));
        ctx.plan.actions.push(Action::CopyGenerated(copy));

        ctx.plan.intermediates.insert(mappings);
        ctx.plan.intermediates.insert(scratch);
        ctx.plan.intermediates.insert(script);

        Ok(())
    }
}
