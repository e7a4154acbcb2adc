use std::path::{Path, PathBuf};

use crate::{Manifest, Result};

/// A protoplan.toml file with both raw content and parsed manifest.
pub struct ManifestFile {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a protoplan.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ManifestFile::open(temp.path().join("protoplan.toml"))
            .err()
            .expect("missing file should fail");
        assert!(matches!(*err, crate::Error::Io { .. }));
    }

    #[test]
    fn test_open_parses_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("protoplan.toml");
        std::fs::write(
            &path,
            r#"
            [target]
            name = "api"

            [plugins.swift]
            binary = "protoc-gen-swift"
            suffixes = [".pb.swift"]
            "#,
        )
        .unwrap();

        let file = ManifestFile::open(&path).unwrap();
        assert_eq!(file.manifest().target.name, "api");
        assert_eq!(file.path(), path.as_path());
        assert!(file.content().contains("[plugins.swift]"));
    }
}
