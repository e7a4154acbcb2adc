use serde::{Deserialize, Serialize};

/// Maps a set of proto import paths to the module that already provides
/// their generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMapping {
    pub module_name: String,
    #[serde(default)]
    pub proto_paths: Vec<String>,
}

impl ModuleMapping {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            proto_paths: Vec::new(),
        }
    }

    pub fn with_path(mut self, proto_path: impl Into<String>) -> Self {
        self.proto_paths.push(proto_path.into());
        self
    }
}
