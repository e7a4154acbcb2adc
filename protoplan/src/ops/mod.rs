//! Core operations.
//!
//! This module contains the business logic for protoplan commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod paths;
pub mod plan;
pub mod reconcile;

pub use check::check;
pub use paths::{PathRequest, paths};
pub use plan::plan;
pub use reconcile::reconcile;
