use crate::value_type::TypeRef;
use thiserror::Error;

/// Errors raised by type-level definitions.
///
/// These represent mistakes in how role types, value types or schemas are
/// declared. They are returned at the call that violates them and are not
/// meant to be recovered from at runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A required argument resolved to an empty value
    #[error("argument '{argument}' is required: {reason}")]
    ArgumentRequired { argument: String, reason: String },

    /// The operation is not allowed in the current state
    #[error("invalid operation: {reason}")]
    OperationInvalid { reason: String },

    /// An argument violates a monotonicity or compatibility rule
    #[error("argument '{argument}' is invalid: {reason}")]
    ArgumentInvalid { argument: String, reason: String },

    #[error("unknown value type: {0}")]
    UnknownType(TypeRef),

    #[error("value type already defined: {0}")]
    DuplicateType(TypeRef),

    #[error("unknown role type: {0}")]
    UnknownRoleType(String),

    #[error("role type already defined: {0}")]
    DuplicateRoleType(String),

    #[error("unknown measurement level: {0}")]
    UnknownLevel(String),

    #[error("attribute already defined in dataset: {0}")]
    DuplicateAttribute(String),
}

impl TypeError {
    pub fn argument_required(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        TypeError::ArgumentRequired {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    pub fn operation_invalid(reason: impl Into<String>) -> Self {
        TypeError::OperationInvalid {
            reason: reason.into(),
        }
    }

    pub fn argument_invalid(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        TypeError::ArgumentInvalid {
            argument: argument.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for type-level operations
pub type TypeResult<T> = Result<T, TypeError>;
