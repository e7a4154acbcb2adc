//! The `FileNaming` transform applied to generated file names.

use std::{fmt, str::FromStr};

use protoplan_core::Error;
use serde::Serialize;

/// Plugin option key selecting the [`FileNaming`] transform.
pub const FILE_NAMING_OPTION: &str = "FileNaming";

/// How a generator turns a proto import path into an output file name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FileNaming {
    /// Keep the import path as-is: `a/b/c.proto` -> `a/b/c{suffix}`
    #[default]
    FullPath,
    /// Flatten directories: `a/b/c.proto` -> `a_b_c{suffix}`
    PathToUnderscores,
    /// Keep the basename only: `a/b/c.proto` -> `c{suffix}`
    DropPath,
}

impl FileNaming {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileNaming::FullPath => "FullPath",
            FileNaming::PathToUnderscores => "PathToUnderscores",
            FileNaming::DropPath => "DropPath",
        }
    }

    /// Apply the transform to an import path stem (no `.proto` extension).
    pub fn apply(&self, stem: &str) -> String {
        match self {
            FileNaming::FullPath => stem.to_string(),
            FileNaming::PathToUnderscores => stem.replace('/', "_"),
            FileNaming::DropPath => stem.rsplit('/').next().unwrap_or(stem).to_string(),
        }
    }

    /// The generated file name for `stem` with `suffix`.
    pub fn file_name(&self, stem: &str, suffix: &str) -> String {
        format!("{}{}", self.apply(stem), suffix)
    }
}

impl fmt::Display for FileNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileNaming {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FullPath" => Ok(FileNaming::FullPath),
            "PathToUnderscores" => Ok(FileNaming::PathToUnderscores),
            "DropPath" => Ok(FileNaming::DropPath),
            _ => Err(Error::configuration(format!(
                "unknown {} value '{}', expected 'FullPath', 'PathToUnderscores' or 'DropPath'",
                FILE_NAMING_OPTION, s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_path() {
        assert_eq!(
            FileNaming::FullPath.file_name("a/b/c", ".pb.swift"),
            "a/b/c.pb.swift"
        );
    }

    #[test]
    fn test_path_to_underscores() {
        assert_eq!(
            FileNaming::PathToUnderscores.file_name("a/b/c", ".pb.swift"),
            "a_b_c.pb.swift"
        );
    }

    #[test]
    fn test_drop_path() {
        assert_eq!(
            FileNaming::DropPath.file_name("a/b/c", ".pb.swift"),
            "c.pb.swift"
        );
        assert_eq!(FileNaming::DropPath.apply("top"), "top");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            FileNaming::from_str("PathToUnderscores").unwrap(),
            FileNaming::PathToUnderscores
        );
        assert_eq!(FileNaming::from_str("DropPath").unwrap(), FileNaming::DropPath);
        assert_eq!(
            FileNaming::from_str("FullPath").unwrap().to_string(),
            "FullPath"
        );
    }

    #[test]
    fn test_unknown_value_is_configuration_error() {
        let err = FileNaming::from_str("fullpath").unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("'fullpath'"));
    }
}
