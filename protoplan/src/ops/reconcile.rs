//! Reconcile operation - the copy-or-fill protocol on the local disk.

use camino::{Utf8Path, Utf8PathBuf};
use protoplan_core::Result;
use protoplan_planner::reconcile::{ReconcileReport, reconcile_local};

/// Make every path in `declared` exist under `permanent`.
pub fn reconcile(
    scratch: &Utf8Path,
    permanent: &Utf8Path,
    declared: &[Utf8PathBuf],
) -> Result<ReconcileReport> {
    reconcile_local(scratch, permanent, declared)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_reconcile_reports_copied_and_filled() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let scratch = root.join("gen.tmp");
        let permanent = root.join("gen");
        std::fs::create_dir_all(&scratch).unwrap();
        std::fs::write(scratch.join("a.pb.swift"), "a").unwrap();

        let report = reconcile(
            &scratch,
            &permanent,
            &[permanent.join("a.pb.swift"), permanent.join("b.pb.swift")],
        )
        .unwrap();

        assert_eq!(report.copied, vec![permanent.join("a.pb.swift")]);
        assert_eq!(report.filled, vec![permanent.join("b.pb.swift")]);
    }
}
