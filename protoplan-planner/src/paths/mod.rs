//! Deterministic output paths for every artifact kind.
//!
//! All functions here are pure: they never touch the filesystem and return
//! the same path for the same inputs. Paths are relative to the owning
//! package's output root.
//!
//! # Example
//!
//! ```ignore
//! let target = TargetIdentity::new("api", "services/api");
//! let policy = NamingPolicy::plain();
//! let planner = PathPlanner::new(&target, &policy);
//!
//! let module = planner.path(ArtifactKind::Module { module_name: "Api" })?;
//! assert_eq!(module, "Api.swiftmodule");
//! ```

mod intermediate;
mod kind;

use camino::{Utf8Path, Utf8PathBuf};
pub use kind::ArtifactKind;
use protoplan_core::{Error, NamingPolicy, Result, TargetIdentity};

/// Extension a generated header must carry.
pub const HEADER_EXTENSION: &str = "h";

/// Compute the output path for `kind`.
///
/// Only [`ArtifactKind::GeneratedHeader`] can fail, with
/// [`Error::InvalidHeaderExtension`].
pub fn path(
    kind: ArtifactKind<'_>,
    target: &TargetIdentity,
    policy: &NamingPolicy,
) -> Result<Utf8PathBuf> {
    let t = target.name();

    let relative = match kind {
        ArtifactKind::Ast { source } => {
            return Ok(intermediate::path(target, policy, source, "ast"));
        }
        ArtifactKind::ObjectFile { source } => {
            return Ok(intermediate::path(target, policy, source, "o"));
        }
        ArtifactKind::BitcodeFile { source } => {
            return Ok(intermediate::path(target, policy, source, "bc"));
        }
        ArtifactKind::ConstValues { source } => {
            return Ok(intermediate::path(target, policy, source, "swiftconstvalues"));
        }
        ArtifactKind::DependencyFile { source } => {
            return Ok(intermediate::path(target, policy, source, "d"));
        }
        ArtifactKind::SwiftDeps { source } => {
            return Ok(intermediate::path(target, policy, source, "swiftdeps"));
        }

        ArtifactKind::Module { module_name } => format!("{}.swiftmodule", module_name),
        ArtifactKind::Doc { module_name } => format!("{}.swiftdoc", module_name),
        ArtifactKind::Interface { module_name } => format!("{}.swiftinterface", module_name),
        ArtifactKind::PrivateInterface { module_name } => {
            format!("{}.private.swiftinterface", module_name)
        }
        ArtifactKind::SourceInfo { module_name } => format!("{}.swiftsourceinfo", module_name),
        ArtifactKind::ModuleMap { module_name } => format!("{}.swift.modulemap", module_name),
        ArtifactKind::GeneratedHeader { name } => {
            validate_header_name(name)?;
            name.to_string()
        }

        ArtifactKind::StaticArchive {
            link_name,
            always_link,
        } => {
            let extension = if always_link { "lo" } else { "a" };
            format!("lib{}.{}", link_name.unwrap_or(t), extension)
        }
        ArtifactKind::WholeModuleObject => format!("{}.o", t),
        ArtifactKind::ModuleWrapObject => format!("{}.modulewrap.o", t),
        ArtifactKind::PrecompiledModule => format!("{}.swift.pcm", t),
        ArtifactKind::ReexportModuleMap => format!("{}.exports.modulemap", t),
        ArtifactKind::AutolinkFlags => format!("{}.autolink", t),
        ArtifactKind::OutputFileMap => format!("{}.output_file_map.json", t),
        ArtifactKind::DerivedOutputFileMap => format!("{}.derived_output_file_map.json", t),
        ArtifactKind::IndexStore => format!("{}.indexstore", t),
        ArtifactKind::SymbolGraphDirectory => format!("{}.symbolgraph", t),
        ArtifactKind::VfsOverlay => format!("{}.vfsoverlay.yaml", t),
        ArtifactKind::Executable => t.to_string(),
        ArtifactKind::TestRunnerScript => format!("{}.test_runner.sh", t),

        ArtifactKind::GeneratedSourcesDirectory { plugin } => generated_dir_name(t, plugin),
        ArtifactKind::ScratchDirectory { plugin } => {
            format!("{}.tmp", generated_dir_name(t, plugin))
        }
        ArtifactKind::ModuleMappings => format!("{}.protoc_gen_module_mappings.asciipb", t),
        ArtifactKind::CopyScript { plugin } => format!("{}.protoc_gen_{}_copy.sh", t, plugin),
        ArtifactKind::Placeholder { plugin, suffix } => {
            format!("{}/{}_empty{}", generated_dir_name(t, plugin), t, suffix)
        }
    };

    Ok(prefixed(target, policy, Utf8PathBuf::from(relative)))
}

fn generated_dir_name(target_name: &str, plugin: &str) -> String {
    format!("{}.protoc_gen_{}", target_name, plugin)
}

/// Prepend the naming-policy segment, if the policy asks for one.
fn prefixed(target: &TargetIdentity, policy: &NamingPolicy, path: Utf8PathBuf) -> Utf8PathBuf {
    match policy.segment(target) {
        Some(segment) => Utf8PathBuf::from(segment).join(path),
        None => path,
    }
}

/// Check that a generated header name ends in `.h`.
pub fn validate_header_name(name: &str) -> Result<()> {
    match Utf8Path::new(name).extension() {
        Some(HEADER_EXTENSION) => Ok(()),
        _ => Err(Error::invalid_header(name)),
    }
}

/// Computes paths for one target under one naming policy.
///
/// A thin wrapper over [`path`] for callers that plan many artifacts for the
/// same build unit.
#[derive(Debug, Clone, Copy)]
pub struct PathPlanner<'a> {
    target: &'a TargetIdentity,
    policy: &'a NamingPolicy,
}

impl<'a> PathPlanner<'a> {
    pub fn new(target: &'a TargetIdentity, policy: &'a NamingPolicy) -> Self {
        Self { target, policy }
    }

    /// Compute the path for `kind`.
    pub fn path(&self, kind: ArtifactKind<'_>) -> Result<Utf8PathBuf> {
        path(kind, self.target, self.policy)
    }
}
