//! Core value types for the protoplan action planner.
//!
//! This crate provides the identity, source, and handle types that every
//! other protoplan crate passes around, plus the shared [`Error`] type.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod handle;
mod mapping;
mod source;
mod target;

pub use error::{Error, Result};
pub use handle::{DirHandle, FileHandle};
pub use mapping::ModuleMapping;
pub use source::{SPACE_SENTINEL, SourceDescriptor, SourceFile};
pub use target::{NamingPolicy, TargetIdentity};
