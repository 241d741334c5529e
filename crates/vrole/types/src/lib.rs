#![deny(unsafe_code)]
//! # vrole-types
//!
//! Type foundations for visual role mappings.
//!
//! A visual role (color, size, rows, ...) is bound to attributes of a
//! dataset. Whether a binding makes sense depends on two things this crate
//! models:
//!
//! - the **level of measurement** of the data, drawn from the fixed lattice
//!
//!   ```text
//!   nominal < ordinal < quantitative
//!   \___ qualitative _/   \_ quantitative _/
//!   ```
//!
//! - the **value type** of the data, drawn from a single-rooted type
//!   hierarchy (`value` → `element` → `simple` → `number`, ...).
//!
//! ## Key Types
//!
//! - [`MeasurementLevel`] — A level of measurement
//! - [`LevelSet`] — An ascending, duplicate-free set of levels
//! - [`ValueTypeRegistry`] — Resolves [`TypeRef`]s and answers subtype queries
//! - [`DatasetSchema`] — The attributes of a dataset, by name
//! - [`MessageBundle`] — Renders structured errors to text
//! - [`TypeError`] — Fail-fast errors of type-level definitions

pub mod error;
pub mod level;
pub mod messages;
pub mod schema;
pub mod value_type;

pub use error::{TypeError, TypeResult};
pub use level::{LevelSet, MeasurementLevel};
pub use messages::{render_template, DefaultMessages, MessageBundle, MessageKey, MessageParams};
pub use schema::{DataAttribute, DatasetSchema};
pub use value_type::{builtin, TypeRef, ValueType, ValueTypeRegistry, ValueTypeSpec};
