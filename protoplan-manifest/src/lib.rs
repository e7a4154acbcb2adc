//! `protoplan.toml` parsing and validation.
//!
//! The manifest describes one build unit: the target identity, the protoc
//! binary, every plugin to run, caller option overrides, and the proto
//! sources to generate from.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod parse;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::ManifestFile;
pub use manifest::{GeneratorConfig, Manifest, PluginConfig, SourceConfig, TargetConfig};
pub use parse::parse_manifest;
pub use validate::ParseContext;

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "protoplan.toml";
