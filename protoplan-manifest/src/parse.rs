//! Manifest parsing from files and strings.

use std::str::FromStr;

use crate::{Error, MANIFEST_FILE, Manifest, ParseContext, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a protoplan.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.push("target")
        .require_non_empty("name", &manifest.target.name)?;

    if manifest.plugins.is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("at least one [plugins.<name>] table is required", None));
    }

    for (name, plugin) in &manifest.plugins {
        ctx.validate_plugin_name(name)?;

        let plugin_ctx = ctx.push("plugins").push(name);
        plugin_ctx.require_non_empty("binary", plugin.binary.as_str())?;

        if plugin.suffixes.is_empty() {
            return Err(plugin_ctx.error_at(
                format!("plugin '{}' must declare at least one output suffix", name),
                "",
            ));
        }

        for suffix in &plugin.suffixes {
            if !suffix.starts_with('.') || suffix.len() < 2 {
                return Err(plugin_ctx.error_at(
                    format!(
                        "suffix '{}' of plugin '{}' must start with '.' (e.g. '.pb.swift')",
                        suffix, name
                    ),
                    suffix,
                ));
            }
        }
    }

    for source in &manifest.sources {
        if source.import_path.trim().is_empty() {
            return Err(ctx.error_at("source import_path must not be empty", "import_path"));
        }
        if source.file.as_str().is_empty() {
            return Err(ctx.error_at(
                format!("source '{}' has an empty file path", source.import_path),
                &source.import_path,
            ));
        }
    }

    Ok(())
}
