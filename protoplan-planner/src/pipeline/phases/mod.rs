//! Built-in pipeline phases.
//!
//! These run for every plugin, in order:
//!
//! - [`CollectPhase`] - de-duplicates sources and drops bundled ones
//! - [`DeclarePhase`] - declares every generated output, or a placeholder
//! - [`EmitPhase`] - emits the mapping write, generator run and reconciliation

mod collect;
mod declare;
mod emit;

pub use collect::CollectPhase;
pub use declare::DeclarePhase;
pub use emit::EmitPhase;
