//! Derived-artifact path planning and protoc action graph construction.
//!
//! Nothing in this crate executes a command. It computes paths, resolves
//! plugin options, and describes actions that a host build system runs
//! through the [`host::ActionRunner`] and [`host::FileSystem`] seams.
//!
//! # Module Organization
//!
//! - [`paths`] - Deterministic output paths for every artifact kind
//! - [`options`] - Plugin specs and option resolution against an allow-list
//! - [`naming`] - The `FileNaming` transform applied to generated file names
//! - [`graph`] - The action graph builder (declare, generate, reconcile)
//! - [`pipeline`] - Phases and hooks the builder runs through
//! - [`reconcile`] - Copy-or-fill reconciliation of scratch output
//! - [`mapping`] - Module-mapping side file rendering
//! - [`host`] - Host build system seams and plan registration
//! - [`testing`] - Recording test doubles (feature-gated)

pub mod graph;
pub mod host;
pub mod mapping;
pub mod naming;
pub mod options;
pub mod paths;
pub mod pipeline;
pub mod reconcile;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use graph::{
    Action, ActionGraphBuilder, ActionSequence, BuildPlan, BuildUnit, DeclaredOutput,
    DeclaredOutputSet,
};
pub use naming::FileNaming;
pub use options::{PluginSpec, ResolvedOptionSet, resolve};
pub use paths::{ArtifactKind, PathPlanner};
