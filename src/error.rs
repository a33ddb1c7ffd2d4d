/// Error types for the fallback translation crate
///
/// The engine itself never fails: every `translate` call returns a
/// displayable result (see `engine`). Errors exist only at the edges,
/// where the surrounding system hands us a language catalog or the CLI
/// resolves user-supplied language ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackError {
    /// A language id not present in the registry
    UnknownLanguage(String),
    /// Error loading or parsing a language catalog file
    CatalogError(String),
}

impl std::fmt::Display for FallbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackError::UnknownLanguage(id) => write!(f, "Unknown language id: {}", id),
            FallbackError::CatalogError(msg) => write!(f, "Catalog error: {}", msg),
        }
    }
}

impl std::error::Error for FallbackError {}

/// Result type for catalog and registry operations
pub type FallbackResult<T> = Result<T, FallbackError>;
