//! The closed set of artifact kinds the planner knows how to name.

use protoplan_core::SourceFile;

/// Every derived artifact the pipeline can produce.
///
/// Each variant maps to exactly one filename template in
/// [`path`](super::path). Adding a variant forces every match over the
/// enum to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind<'a> {
    // Per-source intermediates under `{target}_objs/`
    Ast { source: &'a SourceFile },
    ObjectFile { source: &'a SourceFile },
    BitcodeFile { source: &'a SourceFile },
    ConstValues { source: &'a SourceFile },
    DependencyFile { source: &'a SourceFile },
    SwiftDeps { source: &'a SourceFile },

    // Module-level outputs
    Module { module_name: &'a str },
    Doc { module_name: &'a str },
    Interface { module_name: &'a str },
    PrivateInterface { module_name: &'a str },
    SourceInfo { module_name: &'a str },
    ModuleMap { module_name: &'a str },
    /// A generated header with a caller-chosen name; must end in `.h`.
    GeneratedHeader { name: &'a str },

    // Target-level outputs
    /// `lib{link_name}.a`, or `.lo` for always-link archives.
    StaticArchive {
        link_name: Option<&'a str>,
        always_link: bool,
    },
    WholeModuleObject,
    ModuleWrapObject,
    PrecompiledModule,
    ReexportModuleMap,
    AutolinkFlags,
    OutputFileMap,
    DerivedOutputFileMap,
    IndexStore,
    SymbolGraphDirectory,
    VfsOverlay,
    Executable,
    TestRunnerScript,

    // Proto generation
    /// Permanent, build-system-visible root for one plugin's generated files.
    GeneratedSourcesDirectory { plugin: &'a str },
    /// Scratch directory the generator actually writes into.
    ScratchDirectory { plugin: &'a str },
    ModuleMappings,
    CopyScript { plugin: &'a str },
    /// Empty file declared when a plugin has nothing to generate.
    Placeholder { plugin: &'a str, suffix: &'a str },
}

impl ArtifactKind<'_> {
    /// Whether the host should declare this artifact as a directory.
    pub fn is_directory(&self) -> bool {
        matches!(
            self,
            ArtifactKind::IndexStore
                | ArtifactKind::SymbolGraphDirectory
                | ArtifactKind::GeneratedSourcesDirectory { .. }
                | ArtifactKind::ScratchDirectory { .. }
        )
    }

    /// Whether the artifact is derived from a single source file.
    pub fn is_per_source(&self) -> bool {
        self.source().is_some()
    }

    /// The source file a per-source artifact is derived from.
    pub fn source(&self) -> Option<&SourceFile> {
        match self {
            ArtifactKind::Ast { source }
            | ArtifactKind::ObjectFile { source }
            | ArtifactKind::BitcodeFile { source }
            | ArtifactKind::ConstValues { source }
            | ArtifactKind::DependencyFile { source }
            | ArtifactKind::SwiftDeps { source } => Some(*source),
            _ => None,
        }
    }

    /// A short, stable name for the kind (used in logs and the CLI).
    pub fn name(&self) -> &'static str {
        match self {
            ArtifactKind::Ast { .. } => "ast",
            ArtifactKind::ObjectFile { .. } => "object-file",
            ArtifactKind::BitcodeFile { .. } => "bitcode-file",
            ArtifactKind::ConstValues { .. } => "const-values",
            ArtifactKind::DependencyFile { .. } => "dependency-file",
            ArtifactKind::SwiftDeps { .. } => "swiftdeps",
            ArtifactKind::Module { .. } => "module",
            ArtifactKind::Doc { .. } => "doc",
            ArtifactKind::Interface { .. } => "interface",
            ArtifactKind::PrivateInterface { .. } => "private-interface",
            ArtifactKind::SourceInfo { .. } => "source-info",
            ArtifactKind::ModuleMap { .. } => "module-map",
            ArtifactKind::GeneratedHeader { .. } => "generated-header",
            ArtifactKind::StaticArchive { .. } => "static-archive",
            ArtifactKind::WholeModuleObject => "whole-module-object",
            ArtifactKind::ModuleWrapObject => "modulewrap-object",
            ArtifactKind::PrecompiledModule => "precompiled-module",
            ArtifactKind::ReexportModuleMap => "reexport-module-map",
            ArtifactKind::AutolinkFlags => "autolink-flags",
            ArtifactKind::OutputFileMap => "output-file-map",
            ArtifactKind::DerivedOutputFileMap => "derived-output-file-map",
            ArtifactKind::IndexStore => "index-store",
            ArtifactKind::SymbolGraphDirectory => "symbol-graph",
            ArtifactKind::VfsOverlay => "vfs-overlay",
            ArtifactKind::Executable => "executable",
            ArtifactKind::TestRunnerScript => "test-runner-script",
            ArtifactKind::GeneratedSourcesDirectory { .. } => "generated-sources",
            ArtifactKind::ScratchDirectory { .. } => "scratch-directory",
            ArtifactKind::ModuleMappings => "module-mappings",
            ArtifactKind::CopyScript { .. } => "copy-script",
            ArtifactKind::Placeholder { .. } => "placeholder",
        }
    }
}
