use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for planning operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions raised while constructing a build unit.
///
/// Every variant aborts the current build unit only. Nothing here is
/// retried by the planner.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("ambiguous import path '{import_path}'")]
    #[diagnostic(
        code(protoplan::ambiguous_import_path),
        help("'{first}' and '{second}' both claim this import path; rename or remove one of them")
    )]
    AmbiguousImportPath {
        import_path: String,
        first: Utf8PathBuf,
        second: Utf8PathBuf,
    },

    #[error("generated header '{name}' must have a .h extension")]
    #[diagnostic(
        code(protoplan::invalid_header_extension),
        help("rename the header, e.g. '{name}' -> '{suggestion}'")
    )]
    InvalidHeaderExtension { name: String, suggestion: String },

    #[error("invalid configuration: {message}")]
    #[diagnostic(code(protoplan::invalid_configuration))]
    InvalidConfiguration { message: String },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(protoplan::io))]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an invalid header extension error for the given header name.
    pub fn invalid_header(name: impl Into<String>) -> Self {
        let name = name.into();
        let stem = match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem.to_string(),
            _ => name.clone(),
        };
        Error::InvalidHeaderExtension {
            suggestion: format!("{}.h", stem),
            name,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an IO error bound to a path.
    pub fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
