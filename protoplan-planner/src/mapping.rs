//! Module-mapping side file rendering.
//!
//! The generator reads this file (through the `ProtoPathModuleMappings`
//! plugin option) to learn which module already provides the generated
//! code for an import path, so cross-unit references get the right import.

use std::fmt::Write;

use protoplan_core::ModuleMapping;

/// Render mappings in protobuf text format.
///
/// ```text
/// mapping {
///   module_name: "CommonProto"
///   proto_file_path: "common/types.proto"
/// }
/// ```
pub fn render_module_mappings(mappings: &[ModuleMapping]) -> String {
    let mut out = String::new();
    for mapping in mappings {
        out.push_str("mapping {\n");
        let _ = writeln!(out, "  module_name: \"{}\"", escape(&mapping.module_name));
        for path in &mapping.proto_paths {
            let _ = writeln!(out, "  proto_file_path: \"{}\"", escape(path));
        }
        out.push_str("}\n");
    }
    out
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mappings() {
        let mappings = vec![
            ModuleMapping::new("CommonProto")
                .with_path("common/types.proto")
                .with_path("common/ids.proto"),
            ModuleMapping::new("AuthProto").with_path("auth/token.proto"),
        ];

        insta::assert_snapshot!(render_module_mappings(&mappings), @r#"
        mapping {
          module_name: "CommonProto"
          proto_file_path: "common/types.proto"
          proto_file_path: "common/ids.proto"
        }
        mapping {
          module_name: "AuthProto"
          proto_file_path: "auth/token.proto"
        }
        "#);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_module_mappings(&[]), "");
    }

    #[test]
    fn test_escaping() {
        let mappings = vec![ModuleMapping::new(r#"Odd"Name\"#)];
        assert_eq!(
            render_module_mappings(&mappings),
            "mapping {\n  module_name: \"Odd\\\"Name\\\\\"\n}\n"
        );
    }
}
