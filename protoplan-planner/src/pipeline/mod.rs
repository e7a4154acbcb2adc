//! Phases and hooks the action graph builder runs through.
//!
//! Building one plugin's plan is a fixed sequence of phases over a shared
//! [`PlanContext`]:
//!
//! - `collect` - de-duplicate sources by import path, drop bundled ones
//! - `declare` - compute every output path, or a placeholder when empty
//! - `emit` - write the module mappings, run the generator, reconcile
//!
//! [`PhaseHook`]s observe each phase boundary, and diagnostics collect
//! non-fatal notes along the way.
//!
//! # Example
//!
//! ```ignore
//! let pipeline = Pipeline::new().hook(TracingHook);
//! let mut ctx = PlanContext::new(&unit, &plugin, &options, &sources);
//! pipeline.run(&mut ctx)?;
//! let plan = ctx.into_plan();
//! ```

mod context;
mod diagnostic;
mod hook;
mod phase;
pub mod phases;
mod runner;

pub use context::PlanContext;
pub use diagnostic::{Diagnostic, Severity};
pub use hook::{PhaseHook, TracingHook};
pub use phase::Phase;
pub use runner::Pipeline;
