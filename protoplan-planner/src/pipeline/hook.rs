//! Phase hooks for observing the planning pipeline.

use protoplan_core::Result;

use super::PlanContext;

/// Observer called before and after each phase.
///
/// Returning an error from a hook aborts the pipeline.
pub trait PhaseHook: Send + Sync {
    /// The name of this hook (for debugging and logging).
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut PlanContext<'_>) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut PlanContext<'_>) -> Result<()> {
        Ok(())
    }
}

/// Emits a `tracing` event at every phase boundary.
pub struct TracingHook;

impl PhaseHook for TracingHook {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn on_before_phase(&self, phase: &str, ctx: &mut PlanContext<'_>) -> Result<()> {
        tracing::trace!(
            phase,
            label = %ctx.unit.target,
            plugin = ctx.plugin.name(),
            "starting phase"
        );
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut PlanContext<'_>) -> Result<()> {
        tracing::debug!(
            phase,
            label = %ctx.unit.target,
            plugin = ctx.plugin.name(),
            eligible = ctx.eligible.len(),
            outputs = ctx.plan.outputs.len(),
            actions = ctx.plan.actions.len(),
            "finished phase"
        );
        Ok(())
    }
}
