//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Wraps the manifest text, file name and the current table path so nested
/// validation can produce errors that point back into the document.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "protoplan.toml");
/// ctx.validate_plugin_name("swift")?;
///
/// let plugin = ctx.push("plugins").push("swift");
/// plugin.require_non_empty("binary", "")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// The current path as a dot-separated string (e.g. `plugins.swift`).
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Qualify a key with the current path for error messages.
    pub fn qualify(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path_string(), key)
        }
    }

    /// Find the span of the current table header, or of `needle` inside it.
    pub fn find_span(&self, needle: &str) -> Option<SourceSpan> {
        let src = self.src();
        let table_start = if self.path.is_empty() {
            0
        } else {
            let header = format!("[{}", self.path_string());
            src.find(&header)?
        };

        if needle.is_empty() {
            // Skip the opening bracket
            let start = table_start + 1;
            return Some(SourceSpan::from((start, self.path_string().len())));
        }

        src[table_start..]
            .find(needle)
            .map(|offset| SourceSpan::from((table_start + offset, needle.len())))
    }

    /// Create a validation error pointing at `needle` within the current table.
    pub fn error_at(&self, message: impl Into<String>, needle: &str) -> Box<crate::Error> {
        self.source
            .validation_error(message, self.find_span(needle))
    }

    /// Require a string value to be non-empty.
    pub fn require_non_empty(&self, key: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(self.error_at(format!("'{}' must not be empty", self.qualify(key)), key));
        }
        Ok(())
    }

    /// Validate that a plugin name can be embedded in protoc flag names.
    pub fn validate_plugin_name(&self, name: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            let span = find_name_span(self.src(), name);
            return Err(self
                .source
                .invalid_plugin_name_error(name, reason, span));
        }
        Ok(())
    }
}

/// Find the span of a table name in the TOML source.
///
/// Searches for patterns like `.name]`, `.name.`, or `.name =`.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    let patterns = [
        format!(".{}]", name),
        format!(".{}.", name),
        format!(".{} ", name),
        format!(".{}=", name),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    src.find(name).map(|pos| SourceSpan::from((pos, name.len())))
}

/// Validate that a name is a plain identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("swift").is_none());
        assert!(validate_identifier("grpc_swift").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("v2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2swift").is_some());
        assert!(validate_identifier("grpc-swift").is_some());
        assert!(validate_identifier("swift opt").is_some());
    }

    #[test]
    fn test_find_name_span() {
        let src = "[plugins.swift]\nbinary = \"x\"\n";
        let span = find_name_span(src, "swift").unwrap();
        assert_eq!(span.offset(), 9);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_find_span_within_table() {
        let src = "[target]\nname = \"a\"\n\n[plugins.swift]\nbinary = \"\"\n";
        let ctx = ParseContext::new(src, "protoplan.toml");
        let plugin = ctx.push("plugins").push("swift");

        let span = plugin.find_span("binary").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "binary");

        let header = plugin.find_span("").unwrap();
        assert_eq!(
            &src[header.offset()..header.offset() + header.len()],
            "plugins.swift"
        );
    }

    #[test]
    fn test_qualify() {
        let ctx = ParseContext::new("", "protoplan.toml");
        assert_eq!(ctx.qualify("name"), "name");
        assert_eq!(ctx.push("target").qualify("name"), "target.name");
    }
}
