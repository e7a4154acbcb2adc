//! Manifest types for protoplan.toml files.

use camino::Utf8PathBuf;
use indexmap::IndexMap;
use protoplan_core::{ModuleMapping, NamingPolicy, SourceDescriptor, TargetIdentity};
use serde::{Deserialize, Serialize};

/// Root manifest for protoplan.toml
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Manifest {
    /// The build unit's target
    pub target: TargetConfig,

    /// The protoc binary and its descriptor-set inputs
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Plugins keyed by name (the `swift` in `protoc-gen-swift`)
    #[serde(default)]
    pub plugins: IndexMap<String, PluginConfig>,

    /// Caller option overrides, shared by every plugin
    #[serde(default)]
    pub options: IndexMap<String, String>,

    /// Proto sources to generate from
    #[serde(default)]
    pub sources: Vec<SourceConfig>,

    /// Modules that already provide generated code for some import paths
    #[serde(default)]
    pub module_mappings: Vec<ModuleMapping>,
}

impl Manifest {
    /// The target identity for this build unit.
    pub fn identity(&self) -> TargetIdentity {
        self.target.identity()
    }

    /// The source descriptors, with unset owners defaulting to the target label.
    pub fn descriptors(&self) -> Vec<SourceDescriptor> {
        let default_owner = self.target.identity().label();
        self.sources
            .iter()
            .map(|s| s.descriptor(&default_owner))
            .collect()
    }
}

/// `[target]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetConfig {
    pub name: String,
    #[serde(default)]
    pub package: String,
    /// Module name for module-level artifacts (defaults to the target name)
    #[serde(default)]
    pub module_name: Option<String>,
    #[serde(default)]
    pub naming: NamingPolicy,
}

impl TargetConfig {
    pub fn identity(&self) -> TargetIdentity {
        TargetIdentity::new(&self.name, &self.package)
    }

    pub fn module_name(&self) -> &str {
        self.module_name.as_deref().unwrap_or(&self.name)
    }
}

/// `[generator]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_protoc")]
    pub protoc: Utf8PathBuf,
    /// Transitive descriptor sets passed via `--descriptor_set_in`
    #[serde(default)]
    pub descriptor_sets: Vec<Utf8PathBuf>,
}

fn default_protoc() -> Utf8PathBuf {
    Utf8PathBuf::from("protoc")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            protoc: default_protoc(),
            descriptor_sets: Vec::new(),
        }
    }
}

/// `[plugins.<name>]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PluginConfig {
    /// Path to the plugin binary
    pub binary: Utf8PathBuf,
    /// Output suffixes, one generated file per source per suffix
    #[serde(default)]
    pub suffixes: Vec<String>,
    /// Option keys the plugin understands
    #[serde(default)]
    pub allowed_options: Vec<String>,
    #[serde(default)]
    pub default_options: IndexMap<String, String>,
    /// Import paths whose generated code ships with a shared runtime module
    #[serde(default)]
    pub bundled_proto_paths: Vec<String>,
}

/// `[[sources]]` entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    pub import_path: String,
    pub file: Utf8PathBuf,
    #[serde(default)]
    pub owner: Option<String>,
}

impl SourceConfig {
    pub fn descriptor(&self, default_owner: &str) -> SourceDescriptor {
        SourceDescriptor::new(
            &self.import_path,
            self.file.clone(),
            self.owner.as_deref().unwrap_or(default_owner),
        )
    }
}
