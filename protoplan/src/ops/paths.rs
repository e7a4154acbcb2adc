//! Paths operation - one planned path for the configured target.

use camino::Utf8PathBuf;
use protoplan_core::{Error, Result, SourceFile};
use protoplan_manifest::Manifest;
use protoplan_planner::{ArtifactKind, PathPlanner};

use crate::commands::KindArg;

/// Everything a single path lookup may need.
#[derive(Debug, Clone)]
pub struct PathRequest {
    pub kind: KindArg,
    pub source: Option<Utf8PathBuf>,
    pub module: Option<String>,
    pub plugin: Option<String>,
    pub header: Option<String>,
    pub link_name: Option<String>,
    pub always_link: bool,
}

/// Compute the path `request` names, relative to the package output root.
pub fn paths(manifest: &Manifest, request: &PathRequest) -> Result<Utf8PathBuf> {
    let target = manifest.identity();
    let planner = PathPlanner::new(&target, &manifest.target.naming);

    let source = request
        .source
        .as_ref()
        .map(|path| SourceFile::new(path.clone(), target.package()));
    let module_name = request
        .module
        .as_deref()
        .unwrap_or_else(|| manifest.target.module_name());

    let plugin_name = match request.plugin.as_deref() {
        Some(name) => Some(name),
        None => manifest.plugins.keys().next().map(String::as_str),
    };
    let plugin = || {
        plugin_name.ok_or_else(|| Error::configuration("no plugin configured"))
    };

    let needs_source = || {
        source
            .as_ref()
            .ok_or_else(|| Error::configuration("--source is required for per-source kinds"))
    };

    let kind = match request.kind {
        KindArg::Ast => ArtifactKind::Ast { source: needs_source()? },
        KindArg::ObjectFile => ArtifactKind::ObjectFile { source: needs_source()? },
        KindArg::BitcodeFile => ArtifactKind::BitcodeFile { source: needs_source()? },
        KindArg::ConstValues => ArtifactKind::ConstValues { source: needs_source()? },
        KindArg::DependencyFile => ArtifactKind::DependencyFile { source: needs_source()? },
        KindArg::SwiftDeps => ArtifactKind::SwiftDeps { source: needs_source()? },
        KindArg::Module => ArtifactKind::Module { module_name },
        KindArg::Doc => ArtifactKind::Doc { module_name },
        KindArg::Interface => ArtifactKind::Interface { module_name },
        KindArg::PrivateInterface => ArtifactKind::PrivateInterface { module_name },
        KindArg::SourceInfo => ArtifactKind::SourceInfo { module_name },
        KindArg::ModuleMap => ArtifactKind::ModuleMap { module_name },
        KindArg::GeneratedHeader => {
            let name = request
                .header
                .as_deref()
                .ok_or_else(|| Error::configuration("--header is required for generated-header"))?;
            ArtifactKind::GeneratedHeader { name }
        }
        KindArg::StaticArchive => ArtifactKind::StaticArchive {
            link_name: request.link_name.as_deref(),
            always_link: request.always_link,
        },
        KindArg::WholeModuleObject => ArtifactKind::WholeModuleObject,
        KindArg::ModuleWrapObject => ArtifactKind::ModuleWrapObject,
        KindArg::PrecompiledModule => ArtifactKind::PrecompiledModule,
        KindArg::ReexportModuleMap => ArtifactKind::ReexportModuleMap,
        KindArg::AutolinkFlags => ArtifactKind::AutolinkFlags,
        KindArg::OutputFileMap => ArtifactKind::OutputFileMap,
        KindArg::DerivedOutputFileMap => ArtifactKind::DerivedOutputFileMap,
        KindArg::IndexStore => ArtifactKind::IndexStore,
        KindArg::SymbolGraphDirectory => ArtifactKind::SymbolGraphDirectory,
        KindArg::VfsOverlay => ArtifactKind::VfsOverlay,
        KindArg::Executable => ArtifactKind::Executable,
        KindArg::TestRunnerScript => ArtifactKind::TestRunnerScript,
        KindArg::GeneratedSourcesDirectory => {
            ArtifactKind::GeneratedSourcesDirectory { plugin: plugin()? }
        }
        KindArg::ScratchDirectory => ArtifactKind::ScratchDirectory { plugin: plugin()? },
        KindArg::ModuleMappings => ArtifactKind::ModuleMappings,
        KindArg::CopyScript => ArtifactKind::CopyScript { plugin: plugin()? },
        KindArg::Placeholder => {
            let name = plugin()?;
            let config = manifest.plugins.get(name).ok_or_else(|| {
                Error::configuration(format!("plugin '{}' is not configured", name))
            })?;
            let suffix = config.suffixes.first().map(String::as_str).unwrap_or("");
            ArtifactKind::Placeholder {
                plugin: name,
                suffix,
            }
        }
    };

    tracing::debug!(kind = kind.name(), "planning path");
    planner.path(kind)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn manifest() -> Manifest {
        Manifest::from_str(
            r#"
            [target]
            name = "api_proto"
            package = "services/api"
            module_name = "ApiProto"

            [plugins.swift]
            binary = "bin/protoc-gen-swift"
            suffixes = [".pb.swift"]
        "#,
        )
        .expect("Failed to parse test manifest")
    }

    fn request(kind: KindArg) -> PathRequest {
        PathRequest {
            kind,
            source: None,
            module: None,
            plugin: None,
            header: None,
            link_name: None,
            always_link: false,
        }
    }

    #[test]
    fn test_module_defaults_to_target_module() {
        let path = paths(&manifest(), &request(KindArg::Module)).unwrap();
        assert_eq!(path, "ApiProto.swiftmodule");
    }

    #[test]
    fn test_per_source_kind_requires_source() {
        let err = paths(&manifest(), &request(KindArg::ObjectFile)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));

        let mut req = request(KindArg::ObjectFile);
        req.source = Some("services/api/Sources/a.swift".into());
        let path = paths(&manifest(), &req).unwrap();
        assert_eq!(path, "api_proto_objs/Sources/a.swift.o");
    }

    #[test]
    fn test_plugin_defaults_to_first_configured() {
        let path = paths(&manifest(), &request(KindArg::Placeholder)).unwrap();
        assert_eq!(path, "api_proto.protoc_gen_swift/api_proto_empty.pb.swift");
    }

    #[test]
    fn test_bad_header_rejected() {
        let mut req = request(KindArg::GeneratedHeader);
        req.header = Some("Api.hpp".into());
        let err = paths(&manifest(), &req).unwrap_err();
        assert!(matches!(err, Error::InvalidHeaderExtension { .. }));
    }
}
