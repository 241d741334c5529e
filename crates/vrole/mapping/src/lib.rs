#![deny(unsafe_code)]
//! # vrole-mapping
//!
//! Visual role mappings: the association between a visual role and the
//! attributes of a visualization's dataset.
//!
//! As a *type*, a mapping describes the capabilities of its visual role:
//! the measurement levels it supports and the data type it requires. Both
//! are monotonic and inherited along the role type tree.
//!
//! As an *instance*, a mapping holds an optional fixed measurement level and
//! an ordered list of mapped attributes.
//!
//! ## Key Types
//!
//! - [`RoleTypeRegistry`] — Role types, their levels and data types
//! - [`RoleMapping`] — A mapping instance
//! - [`MappingAttribute`] — A mapped dataset attribute
//! - [`OwnerLookup`] — Resolves a mapping to its visual model and role slot
//! - [`RoleContext`] — Level resolution (`level_auto`, `level_effective`)
//! - [`CatalogConfig`] — Declarative role catalogs

pub mod attribute;
pub mod config;
pub mod error;
pub mod inherited;
pub mod mapping;
pub mod model;
pub mod resolution;
pub mod role_type;

pub use attribute::{Aggregation, MappingAttribute};
pub use config::{Catalog, CatalogConfig};
pub use error::{CatalogError, CatalogResult};
pub use inherited::{InheritedAttribute, MonotonicLevels, NarrowingDataType};
pub use mapping::{MappingReference, RoleMapping};
pub use model::{ModelCatalog, ModelId, Owner, OwnerLookup, RoleProperty, VisualModel};
pub use resolution::{compatible_role_levels, highest_compatible_role_level, RoleContext};
pub use role_type::{RoleMappingType, RoleTypeId, RoleTypeRegistry, RoleTypeSpec};
