//! Per-source intermediate artifacts under `{target}_objs/`.

use camino::Utf8PathBuf;
use protoplan_core::{NamingPolicy, SourceFile, TargetIdentity};

/// `{target}_objs/[{segment}/]{source_dir}/{source_basename}.{extension}`
///
/// The naming-policy segment goes right after the `_objs` directory, so a
/// policy change only ever inserts one component.
pub(super) fn path(
    target: &TargetIdentity,
    policy: &NamingPolicy,
    source: &SourceFile,
    extension: &str,
) -> Utf8PathBuf {
    let safe = Utf8PathBuf::from(source.safe_relative_path());
    let basename = safe.file_name().unwrap_or(safe.as_str());

    let mut path = Utf8PathBuf::from(format!("{}_objs", target.name()));
    if let Some(segment) = policy.segment(target) {
        path.push(segment);
    }
    if let Some(dir) = safe.parent().filter(|d| !d.as_str().is_empty()) {
        path.push(dir);
    }
    path.push(format!("{}.{}", basename, extension));
    path
}
