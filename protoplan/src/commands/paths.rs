use std::path::PathBuf;

use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use eyre::Result;
use protoplan_manifest::{MANIFEST_FILE, ManifestFile};

use super::UnwrapOrExit;
use crate::ops::{self, PathRequest};

/// Artifact kinds selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Ast,
    ObjectFile,
    BitcodeFile,
    ConstValues,
    DependencyFile,
    #[value(name = "swiftdeps")]
    SwiftDeps,
    Module,
    Doc,
    Interface,
    PrivateInterface,
    SourceInfo,
    ModuleMap,
    GeneratedHeader,
    StaticArchive,
    WholeModuleObject,
    #[value(name = "modulewrap-object")]
    ModuleWrapObject,
    PrecompiledModule,
    ReexportModuleMap,
    AutolinkFlags,
    OutputFileMap,
    DerivedOutputFileMap,
    IndexStore,
    #[value(name = "symbol-graph")]
    SymbolGraphDirectory,
    VfsOverlay,
    Executable,
    TestRunnerScript,
    #[value(name = "generated-sources")]
    GeneratedSourcesDirectory,
    ScratchDirectory,
    ModuleMappings,
    CopyScript,
    Placeholder,
}

#[derive(Args)]
pub struct PathsCommand {
    /// Artifact kind to plan
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Path to protoplan.toml (defaults to ./protoplan.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Source file for per-source kinds (workspace-relative)
    #[arg(long)]
    pub source: Option<Utf8PathBuf>,

    /// Module name for module-level kinds (defaults to the target's module)
    #[arg(long)]
    pub module: Option<String>,

    /// Plugin for proto generation kinds (defaults to the first plugin)
    #[arg(long)]
    pub plugin: Option<String>,

    /// Header name for generated-header
    #[arg(long)]
    pub header: Option<String>,

    /// Library name for static-archive (defaults to the target name)
    #[arg(long)]
    pub link_name: Option<String>,

    /// Plan the always-link variant of static-archive
    #[arg(long)]
    pub always_link: bool,
}

impl PathsCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();

        let request = PathRequest {
            kind: self.kind,
            source: self.source.clone(),
            module: self.module.clone(),
            plugin: self.plugin.clone(),
            header: self.header.clone(),
            link_name: self.link_name.clone(),
            always_link: self.always_link,
        };
        let path = ops::paths(file.manifest(), &request).unwrap_or_exit();
        println!("{}", path);

        Ok(())
    }
}
