//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Label of the configured target.
    pub label: String,
    pub module_name: String,
    /// Number of configured proto sources.
    pub sources: usize,
    pub plugins: Vec<PluginSummary>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

/// What one plugin would generate.
#[derive(Debug)]
pub struct PluginSummary {
    pub name: String,
    pub suffixes: Vec<String>,
    /// Options left after allow-list filtering.
    pub options: usize,
    pub outputs: usize,
    /// Whether the plugin has nothing to generate.
    pub placeholder: bool,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.key_value("target", &self.label);
        out.key_value("module", &self.module_name);
        out.key_value("sources", &self.sources.to_string());
        out.newline();

        out.section("plugins");
        for plugin in &self.plugins {
            let outputs = if plugin.placeholder {
                "placeholder only".to_string()
            } else {
                format!(
                    "{} output{}",
                    plugin.outputs,
                    if plugin.outputs == 1 { "" } else { "s" }
                )
            };
            out.list_item(&format!(
                "{} ({}) {}, {} option{}",
                plugin.name,
                plugin.suffixes.join(", "),
                outputs,
                plugin.options,
                if plugin.options == 1 { "" } else { "s" }
            ));
        }
    }
}
