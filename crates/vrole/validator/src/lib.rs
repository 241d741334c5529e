#![deny(unsafe_code)]
//! # vrole-validator
//!
//! Validation of visual role mappings against their role types and the data
//! of their owning visual model.
//!
//! ## Key Types
//!
//! - [`MappingValidator`] — Runs every check and collects the errors
//! - [`MappingError`] — A structured validation error
//! - [`DuplicateKey`] — Attribute identity under a measurement level
//!
//! ## Example
//!
//! ```ignore
//! let validator = MappingValidator::new(&catalog.role_types, &model);
//! if let Some(errors) = validator.validate(&mapping) {
//!     for error in errors {
//!         eprintln!("{}", error.render(&catalog.messages));
//!     }
//! }
//! ```

pub mod base;
pub mod duplicate;
pub mod error;
pub mod validator;

pub use base::validate_structure;
pub use duplicate::{repeated_attributes, DuplicateKey};
pub use error::MappingError;
pub use validator::{ErrorCollector, MappingValidator};
