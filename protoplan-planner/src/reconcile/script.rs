//! The copy script run as the reconciliation action.

use camino::Utf8Path;
use indexmap::IndexMap;

/// Placeholder for the scratch directory.
pub const TEMPORARY_DIR_PLACEHOLDER: &str = "{temporary_output_directory_path}";
/// Placeholder for the permanent output directory.
pub const PERMANENT_DIR_PLACEHOLDER: &str = "{permanent_output_directory_path}";
/// Placeholder for the space-separated, quoted declared paths.
pub const SOURCE_PATHS_PLACEHOLDER: &str = "{swift_source_file_paths}";

/// Copies each declared file from the scratch directory, or creates it empty.
///
/// Safe to run repeatedly: every declared path is removed first and then
/// either copied or recreated empty.
pub const COPY_SCRIPT_TEMPLATE: &str = r#"#!/bin/bash
set -euo pipefail

temporary_output_directory_path='{temporary_output_directory_path}'
permanent_output_directory_path='{permanent_output_directory_path}'

for swift_source_file_path in {swift_source_file_paths}; do
  relative_path="${swift_source_file_path#"$permanent_output_directory_path"/}"
  temporary_file_path="$temporary_output_directory_path/$relative_path"
  mkdir -p "$(dirname "$swift_source_file_path")"
  rm -f "$swift_source_file_path"
  if [[ -f "$temporary_file_path" ]]; then
    cp "$temporary_file_path" "$swift_source_file_path"
  else
    touch "$swift_source_file_path"
  fi
done
"#;

/// Build the template substitutions for one reconciliation.
pub fn substitutions(
    scratch_dir: &Utf8Path,
    permanent_dir: &Utf8Path,
    outputs: &[impl AsRef<Utf8Path>],
) -> IndexMap<String, String> {
    let paths = outputs
        .iter()
        .map(|p| shell_quote(p.as_ref().as_str()))
        .collect::<Vec<_>>()
        .join(" ");

    IndexMap::from([
        (
            TEMPORARY_DIR_PLACEHOLDER.to_string(),
            escape_single_quoted(scratch_dir.as_str()),
        ),
        (
            PERMANENT_DIR_PLACEHOLDER.to_string(),
            escape_single_quoted(permanent_dir.as_str()),
        ),
        (SOURCE_PATHS_PLACEHOLDER.to_string(), paths),
    ])
}

/// Expand a template by plain string replacement, the way the host does.
pub fn expand(template: &str, substitutions: &IndexMap<String, String>) -> String {
    substitutions
        .iter()
        .fold(template.to_string(), |text, (key, value)| {
            text.replace(key.as_str(), value)
        })
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", escape_single_quoted(value))
}

// Body of a single-quoted shell string.
fn escape_single_quoted(value: &str) -> String {
    value.replace('\'', r"'\''")
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;

    use super::*;

    #[test]
    fn test_expanded_script() {
        let outputs = vec![
            Utf8PathBuf::from("api.protoc_gen_swift/a/b.pb.swift"),
            Utf8PathBuf::from("api.protoc_gen_swift/c.pb.swift"),
        ];
        let subs = substitutions(
            Utf8Path::new("api.protoc_gen_swift.tmp"),
            Utf8Path::new("api.protoc_gen_swift"),
            &outputs,
        );

        insta::assert_snapshot!(expand(COPY_SCRIPT_TEMPLATE, &subs), @r#"
        #!/bin/bash
        set -euo pipefail

        temporary_output_directory_path='api.protoc_gen_swift.tmp'
        permanent_output_directory_path='api.protoc_gen_swift'

        for swift_source_file_path in 'api.protoc_gen_swift/a/b.pb.swift' 'api.protoc_gen_swift/c.pb.swift'; do
          relative_path="${swift_source_file_path#"$permanent_output_directory_path"/}"
          temporary_file_path="$temporary_output_directory_path/$relative_path"
          mkdir -p "$(dirname "$swift_source_file_path")"
          rm -f "$swift_source_file_path"
          if [[ -f "$temporary_file_path" ]]; then
            cp "$temporary_file_path" "$swift_source_file_path"
          else
            touch "$swift_source_file_path"
          fi
        done
        "#);
    }

    #[test]
    fn test_quotes_paths_with_spaces_and_quotes() {
        let outputs = vec![Utf8PathBuf::from("gen/it's here.pb.swift")];
        let subs = substitutions(Utf8Path::new("tmp"), Utf8Path::new("gen"), &outputs);
        assert_eq!(subs[SOURCE_PATHS_PLACEHOLDER], r"'gen/it'\''s here.pb.swift'");
    }

    #[test]
    fn test_template_has_every_placeholder() {
        for placeholder in [
            TEMPORARY_DIR_PLACEHOLDER,
            PERMANENT_DIR_PLACEHOLDER,
            SOURCE_PATHS_PLACEHOLDER,
        ] {
            assert!(COPY_SCRIPT_TEMPLATE.contains(placeholder));
        }
    }
}
