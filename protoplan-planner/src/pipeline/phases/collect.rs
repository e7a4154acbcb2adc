//! Collect phase - de-duplicates sources by import path.

use protoplan_core::{Error, Result};

use crate::pipeline::{Diagnostic, Phase, PlanContext};

/// Phase that settles which sources the plugin generates for.
///
/// Descriptors sharing an import path must point at the same file. Sources
/// on the plugin's bundled list are skipped; their code comes from an
/// already-imported module.
pub struct CollectPhase;

impl Phase for CollectPhase {
    fn name(&self) -> &'static str {
        "collect"
    }

    fn run(&self, ctx: &mut PlanContext<'_>) -> Result<()> {
        let sources = ctx.sources;

        for source in sources {
            match ctx.unique.get(source.import_path.as_str()) {
                Some(existing) if existing.file != source.file => {
                    return Err(Error::AmbiguousImportPath {
                        import_path: source.import_path.clone(),
                        first: existing.file.path().to_path_buf(),
                        second: source.file.path().to_path_buf(),
                    });
                }
                Some(_) => {}
                None => {
                    ctx.unique.insert(source.import_path.as_str(), source);
                }
            }
        }

        let plugin = ctx.plugin;
        let unique: Vec<_> = ctx.unique.values().copied().collect();
        for source in unique {
            if plugin.is_bundled(&source.import_path) {
                tracing::debug!(
                    plugin = plugin.name(),
                    import_path = %source.import_path,
                    "skipping bundled proto"
                );
                ctx.add_diagnostic(
                    Diagnostic::info(self.name(), "skipping bundled proto")
                        .at(source.import_path.clone()),
                );
            } else {
                ctx.eligible.push(source);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use protoplan_core::{FileHandle, SourceDescriptor, TargetIdentity};

    use super::*;
    use crate::{BuildUnit, PluginSpec, ResolvedOptionSet};

    fn unit() -> BuildUnit {
        BuildUnit::new(TargetIdentity::new("api", "svc"), FileHandle::new("protoc"))
    }

    #[test]
    fn test_duplicate_with_same_file_kept_once() {
        let unit = unit();
        let plugin = PluginSpec::new("swift", "protoc-gen-swift").suffix(".pb.swift");
        let options = ResolvedOptionSet::default();
        let sources = vec![
            SourceDescriptor::new("a/b.proto", "svc/a/b.proto", "//svc:a"),
            SourceDescriptor::new("a/b.proto", "svc/a/b.proto", "//svc:other"),
            SourceDescriptor::new("a/c.proto", "svc/a/c.proto", "//svc:a"),
        ];
        let mut ctx = PlanContext::new(&unit, &plugin, &options, &sources);

        CollectPhase.run(&mut ctx).expect("collect should succeed");

        let paths: Vec<_> = ctx.eligible.iter().map(|s| s.import_path.as_str()).collect();
        assert_eq!(paths, vec!["a/b.proto", "a/c.proto"]);
        // First occurrence wins
        assert_eq!(ctx.eligible[0].owner, "//svc:a");
    }

    #[test]
    fn test_conflicting_files_rejected() {
        let unit = unit();
        let plugin = PluginSpec::new("swift", "protoc-gen-swift").suffix(".pb.swift");
        let options = ResolvedOptionSet::default();
        let sources = vec![
            SourceDescriptor::new("a/b.proto", "svc/one/a/b.proto", "//svc:one"),
            SourceDescriptor::new("a/b.proto", "svc/two/a/b.proto", "//svc:two"),
        ];
        let mut ctx = PlanContext::new(&unit, &plugin, &options, &sources);

        let err = CollectPhase.run(&mut ctx).unwrap_err();
        match err {
            Error::AmbiguousImportPath {
                import_path,
                first,
                second,
            } => {
                assert_eq!(import_path, "a/b.proto");
                assert_eq!(first, "svc/one/a/b.proto");
                assert_eq!(second, "svc/two/a/b.proto");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bundled_sources_skipped_with_info() {
        let unit = unit();
        let plugin = PluginSpec::new("swift", "protoc-gen-swift")
            .suffix(".pb.swift")
            .bundled("google/protobuf/any.proto");
        let options = ResolvedOptionSet::default();
        let sources = vec![
            SourceDescriptor::new("google/protobuf/any.proto", "wkt/any.proto", "//wkt:any"),
            SourceDescriptor::new("a/b.proto", "svc/a/b.proto", "//svc:a"),
        ];
        let mut ctx = PlanContext::new(&unit, &plugin, &options, &sources);

        CollectPhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.unique.len(), 2);
        assert_eq!(ctx.eligible.len(), 1);
        let infos: Vec<_> = ctx.infos().collect();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].location.as_deref(), Some("google/protobuf/any.proto"));
    }
}
