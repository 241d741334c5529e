use thiserror::Error;
use vrole_types::TypeError;

/// Errors from loading a role catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("role type '{role}' derives from undeclared role type '{base}'")]
    UnknownBase { role: String, base: String },

    #[error("role type '{0}' is declared more than once")]
    DuplicateRole(String),

    #[error("type definition error: {0}")]
    Type(#[from] TypeError),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
