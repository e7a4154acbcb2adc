//! Plugin specs and option resolution against an allow-list.

use camino::Utf8PathBuf;
use indexmap::{IndexMap, IndexSet};
use protoplan_core::{FileHandle, Result};
use protoplan_manifest::{Manifest, PluginConfig};
use serde::Serialize;

use crate::naming::{FILE_NAMING_OPTION, FileNaming};

/// Option key through which the module-mapping file reaches the plugin.
pub const MODULE_MAPPINGS_OPTION: &str = "ProtoPathModuleMappings";

/// An immutable description of one protoc plugin.
///
/// Built once and shared read-only by every build unit that uses the plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSpec {
    name: String,
    binary: FileHandle,
    allowed_options: IndexSet<String>,
    default_options: IndexMap<String, String>,
    suffixes: Vec<String>,
    bundled_proto_paths: IndexSet<String>,
}

impl PluginSpec {
    pub fn new(name: impl Into<String>, binary: impl Into<Utf8PathBuf>) -> Self {
        Self {
            name: name.into(),
            binary: FileHandle::new(binary),
            allowed_options: IndexSet::new(),
            default_options: IndexMap::new(),
            suffixes: Vec::new(),
            bundled_proto_paths: IndexSet::new(),
        }
    }

    /// Build a spec from a `[plugins.<name>]` manifest table.
    pub fn from_config(name: &str, config: &PluginConfig) -> Self {
        Self {
            name: name.to_string(),
            binary: FileHandle::new(config.binary.clone()),
            allowed_options: config.allowed_options.iter().cloned().collect(),
            default_options: config.default_options.clone(),
            suffixes: config.suffixes.clone(),
            bundled_proto_paths: config.bundled_proto_paths.iter().cloned().collect(),
        }
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffixes.push(suffix.into());
        self
    }

    pub fn allow_option(mut self, key: impl Into<String>) -> Self {
        self.allowed_options.insert(key.into());
        self
    }

    pub fn default_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_options.insert(key.into(), value.into());
        self
    }

    pub fn bundled(mut self, import_path: impl Into<String>) -> Self {
        self.bundled_proto_paths.insert(import_path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn binary(&self) -> &FileHandle {
        &self.binary
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn default_options(&self) -> &IndexMap<String, String> {
        &self.default_options
    }

    pub fn is_allowed(&self, key: &str) -> bool {
        self.allowed_options.contains(key)
    }

    pub fn is_bundled(&self, import_path: &str) -> bool {
        self.bundled_proto_paths.contains(import_path)
    }

    /// Every plugin declared in a manifest, in declaration order.
    pub fn from_manifest(manifest: &Manifest) -> Vec<Self> {
        manifest
            .plugins
            .iter()
            .map(|(name, config)| Self::from_config(name, config))
            .collect()
    }

    /// The `--plugin=protoc-gen-{name}={binary}` registration flag.
    pub fn registration_flag(&self) -> String {
        format!("--plugin=protoc-gen-{}={}", self.name, self.binary)
    }

    /// The flag prefix for plugin options, `--{name}_opt`.
    pub fn option_flag(&self) -> String {
        format!("--{}_opt", self.name)
    }

    /// The output directory flag, `--{name}_out={dir}`.
    pub fn output_flag(&self, dir: &str) -> String {
        format!("--{}_out={}", self.name, dir)
    }
}

/// Options passed to one generation action after filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedOptionSet(IndexMap<String, String>);

impl ResolvedOptionSet {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The file-naming transform selected by the options.
    ///
    /// Absent means [`FileNaming::FullPath`]; an unknown value is an
    /// [`InvalidConfiguration`](protoplan_core::Error::InvalidConfiguration) error.
    pub fn file_naming(&self) -> Result<FileNaming> {
        match self.get(FILE_NAMING_OPTION) {
            Some(value) => value.parse(),
            None => Ok(FileNaming::default()),
        }
    }

    /// Format every option as `--{plugin}_opt={key}={value}`.
    ///
    /// The module-mapping option is skipped; the graph builder adds its own.
    pub fn to_flags(&self, spec: &PluginSpec) -> Vec<String> {
        let prefix = spec.option_flag();
        self.iter()
            .filter(|(key, _)| *key != MODULE_MAPPINGS_OPTION)
            .map(|(key, value)| format!("{}={}={}", prefix, key, value))
            .collect()
    }
}

impl FromIterator<(String, String)> for ResolvedOptionSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Overlay `caller_options` onto the plugin defaults and keep allowed keys.
///
/// Caller values win. Keys outside the allow-list are dropped without an
/// error so one option set can be shared by plugins with different
/// capabilities.
pub fn resolve(spec: &PluginSpec, caller_options: &IndexMap<String, String>) -> ResolvedOptionSet {
    let mut resolved = IndexMap::new();

    let merged = spec.default_options.iter().chain(caller_options.iter());
    for (key, value) in merged {
        if spec.is_allowed(key) {
            resolved.insert(key.clone(), value.clone());
        } else {
            tracing::trace!(plugin = %spec.name, option = %key, "dropping option not in allow-list");
        }
    }

    ResolvedOptionSet(resolved)
}
