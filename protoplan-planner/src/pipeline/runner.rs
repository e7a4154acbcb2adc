//! Pipeline orchestrator.

use protoplan_core::Result;

use super::{
    Phase, PhaseHook, PlanContext,
    phases::{CollectPhase, DeclarePhase, EmitPhase},
};

/// The planning pipeline orchestrator.
///
/// Runs the built-in phases (collect, declare, emit) followed by any extra
/// phases, calling hooks before and after each one.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .hook(TracingHook)
///     .phase(AuditPhase);
///
/// pipeline.run(&mut ctx)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    hooks: Vec<Box<dyn PhaseHook>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            hooks: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a hook to receive phase lifecycle callbacks.
    pub fn hook(mut self, hook: impl PhaseHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Run every phase over `ctx`.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error from a phase or hook.
    pub fn run(&self, ctx: &mut PlanContext<'_>) -> Result<()> {
        let builtin: [&dyn Phase; 3] = [&CollectPhase, &DeclarePhase, &EmitPhase];

        for phase in builtin
            .into_iter()
            .chain(self.phases.iter().map(|p| p.as_ref()))
        {
            self.run_phase(phase, ctx)?;
        }

        Ok(())
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut PlanContext<'_>) -> Result<()> {
        let phase_name = phase.name();

        for hook in &self.hooks {
            hook.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for hook in &self.hooks {
            hook.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
