use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use protoplan_core::{Error, Result};
use serde::Serialize;

/// What a local reconciliation did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Outputs copied from the scratch directory.
    pub copied: Vec<Utf8PathBuf>,
    /// Outputs the generator skipped, created empty.
    pub filled: Vec<Utf8PathBuf>,
}

/// Copy every declared path out of `scratch_dir`, creating skipped ones empty.
///
/// Declared paths must live under `permanent_dir`; their position relative
/// to it is their position in the scratch directory. Running this twice
/// leaves the same files with the same contents.
pub fn reconcile_local(
    scratch_dir: &Utf8Path,
    permanent_dir: &Utf8Path,
    declared: &[Utf8PathBuf],
) -> Result<ReconcileReport> {
    let mut report = ReconcileReport::default();

    for path in declared {
        let relative = path.strip_prefix(permanent_dir).map_err(|_| {
            Error::configuration(format!(
                "declared output '{}' is not under '{}'",
                path, permanent_dir
            ))
        })?;
        let scratch_path = scratch_dir.join(relative);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        if path.exists() {
            fs::remove_file(path).map_err(|e| Error::io(path.clone(), e))?;
        }

        if scratch_path.is_file() {
            tracing::trace!(%path, "copying generated file");
            fs::copy(&scratch_path, path).map_err(|e| Error::io(path.clone(), e))?;
            report.copied.push(path.clone());
        } else {
            tracing::trace!(%path, "generator skipped file, creating it empty");
            fs::File::create(path).map_err(|e| Error::io(path.clone(), e))?;
            report.filled.push(path.clone());
        }
    }

    tracing::debug!(
        copied = report.copied.len(),
        filled = report.filled.len(),
        "reconciled generated outputs"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    struct Dirs {
        _temp: TempDir,
        scratch: Utf8PathBuf,
        permanent: Utf8PathBuf,
    }

    fn dirs() -> Dirs {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let scratch = root.join("gen.tmp");
        let permanent = root.join("gen");
        fs::create_dir_all(&scratch).unwrap();
        Dirs {
            _temp: temp,
            scratch,
            permanent,
        }
    }

    #[test]
    fn test_copies_present_and_fills_missing() {
        let d = dirs();
        fs::create_dir_all(d.scratch.join("a")).unwrap();
        fs::write(d.scratch.join("a/x.pb.swift"), "struct X {}").unwrap();

        let x = d.permanent.join("a/x.pb.swift");
        let y = d.permanent.join("y.pb.swift");
        let report = reconcile_local(&d.scratch, &d.permanent, &[x.clone(), y.clone()]).unwrap();

        assert_eq!(report.copied, vec![x.clone()]);
        assert_eq!(report.filled, vec![y.clone()]);
        assert_eq!(fs::read_to_string(&x).unwrap(), "struct X {}");
        assert_eq!(fs::read_to_string(&y).unwrap(), "");
    }

    #[test]
    fn test_idempotent() {
        let d = dirs();
        fs::write(d.scratch.join("x.pb.swift"), "struct X {}").unwrap();

        let declared = vec![d.permanent.join("x.pb.swift"), d.permanent.join("y.pb.swift")];
        let first = reconcile_local(&d.scratch, &d.permanent, &declared).unwrap();
        let second = reconcile_local(&d.scratch, &d.permanent, &declared).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            fs::read_to_string(d.permanent.join("x.pb.swift")).unwrap(),
            "struct X {}"
        );
        assert_eq!(
            fs::read_to_string(d.permanent.join("y.pb.swift")).unwrap(),
            ""
        );
    }

    #[test]
    fn test_stale_output_is_emptied() {
        let d = dirs();
        fs::create_dir_all(&d.permanent).unwrap();
        let y = d.permanent.join("y.pb.swift");
        fs::write(&y, "stale").unwrap();

        reconcile_local(&d.scratch, &d.permanent, std::slice::from_ref(&y)).unwrap();

        assert_eq!(fs::read_to_string(&y).unwrap(), "");
    }

    #[test]
    fn test_missing_scratch_dir_fills_everything() {
        let d = dirs();
        fs::remove_dir_all(&d.scratch).unwrap();

        let declared = vec![d.permanent.join("x.pb.swift")];
        let report = reconcile_local(&d.scratch, &d.permanent, &declared).unwrap();

        assert!(report.copied.is_empty());
        assert_eq!(report.filled.len(), 1);
    }

    #[test]
    fn test_rejects_paths_outside_permanent_dir() {
        let d = dirs();
        let err = reconcile_local(&d.scratch, &d.permanent, &[d.scratch.join("x")]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_unwritable_destination_is_io_error() {
        let d = dirs();
        // A regular file where the output directory should be
        fs::write(&d.permanent, "not a directory").unwrap();

        let err = reconcile_local(&d.scratch, &d.permanent, &[d.permanent.join("x.pb.swift")])
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
