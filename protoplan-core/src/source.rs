//! Source files and proto source descriptors.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::FileHandle;

/// Token substituted for spaces in artifact names derived from source paths.
pub const SPACE_SENTINEL: &str = "__SPACE__";

/// A compiler input file owned by a package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceFile {
    /// Workspace-relative path.
    pub path: Utf8PathBuf,
    /// Package that owns the file.
    pub package: String,
}

impl SourceFile {
    pub fn new(path: impl Into<Utf8PathBuf>, package: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            package: package.into(),
        }
    }

    /// The path relative to the owning package.
    ///
    /// Files outside the package (generated or external) keep their full path.
    pub fn owner_relative_path(&self) -> &Utf8Path {
        if self.package.is_empty() {
            return &self.path;
        }
        self.path
            .strip_prefix(&self.package)
            .unwrap_or(self.path.as_path())
    }

    /// The owner-relative path with spaces replaced by [`SPACE_SENTINEL`].
    pub fn safe_relative_path(&self) -> String {
        self.owner_relative_path()
            .as_str()
            .replace(' ', SPACE_SENTINEL)
    }
}

/// A proto source as seen by the generator.
///
/// The import path is the de-duplication key: two descriptors may share it
/// only if they point at the same backing file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Path used in `import` statements, e.g. `api/v1/service.proto`.
    pub import_path: String,
    /// The backing file.
    pub file: FileHandle,
    /// Label of the unit that owns the proto.
    pub owner: String,
}

impl SourceDescriptor {
    pub fn new(
        import_path: impl Into<String>,
        file: impl Into<Utf8PathBuf>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            import_path: import_path.into(),
            file: FileHandle::new(file),
            owner: owner.into(),
        }
    }

    /// The import path with its `.proto` extension removed.
    pub fn import_stem(&self) -> &str {
        self.import_path
            .strip_suffix(".proto")
            .unwrap_or(&self.import_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_relative_path() {
        let src = SourceFile::new("app/sources/main.swift", "app");
        assert_eq!(src.owner_relative_path(), "sources/main.swift");
    }

    #[test]
    fn test_owner_relative_path_outside_package() {
        let src = SourceFile::new("bazel-out/gen/foo.swift", "app");
        assert_eq!(src.owner_relative_path(), "bazel-out/gen/foo.swift");
    }

    #[test]
    fn test_root_package() {
        let src = SourceFile::new("main.swift", "");
        assert_eq!(src.owner_relative_path(), "main.swift");
    }

    #[test]
    fn test_spaces_replaced() {
        let src = SourceFile::new("app/My Sources/a b.swift", "app");
        assert_eq!(
            src.safe_relative_path(),
            "My__SPACE__Sources/a__SPACE__b.swift"
        );
    }

    #[test]
    fn test_import_stem() {
        let desc = SourceDescriptor::new("a/b.proto", "pkg/a/b.proto", "//pkg:b");
        assert_eq!(desc.import_stem(), "a/b");
    }
}
