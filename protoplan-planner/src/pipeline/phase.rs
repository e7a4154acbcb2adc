//! Pipeline phase trait.

use protoplan_core::Result;

use super::PlanContext;

/// A phase in the planning pipeline.
///
/// Phases run in order over one [`PlanContext`]. A fatal error aborts the
/// current build unit only; non-fatal notes go into the diagnostics.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and hooks).
    fn name(&self) -> &'static str;

    /// Run this phase on the planning context.
    fn run(&self, ctx: &mut PlanContext<'_>) -> Result<()>;
}
