//! Role catalog configuration
//!
//! Role types are usually declared once, up front, from configuration:
//!
//! ```json
//! {
//!   "valueTypes": [{"id": "currency", "base": "number"}],
//!   "roles": [
//!     {"id": "measure", "isAbstract": true, "dataType": "number"},
//!     {"id": "size", "base": "measure", "levels": ["quantitative"]},
//!     {"id": "color", "levels": ["nominal", "quantitative"]}
//!   ],
//!   "messages": {"roleRequired": "'{role}' must be mapped"}
//! }
//! ```
//!
//! Roles are built in declaration order, so a base must be declared before
//! the roles deriving from it. Roles without a base derive from the root.

use crate::error::{CatalogError, CatalogResult};
use crate::role_type::{RoleTypeId, RoleTypeRegistry, RoleTypeSpec};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use tracing::info;
use vrole_types::{DefaultMessages, MessageKey, ValueTypeRegistry, ValueTypeSpec};

/// Declarative description of a role catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Custom value types, registered after the built-ins
    #[serde(default)]
    pub value_types: Vec<ValueTypeSpec>,
    #[serde(default)]
    pub roles: Vec<RoleTypeSpec>,
    /// Message template overrides
    #[serde(default)]
    pub messages: BTreeMap<MessageKey, String>,
}

impl CatalogConfig {
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Checks the structure of the declaration: unique role ids, and bases
    /// declared before use.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut declared: HashSet<&str> = HashSet::new();
        declared.insert(RoleTypeRegistry::ROOT_NAME);

        for role in &self.roles {
            if let Some(base) = &role.base {
                if !declared.contains(base.as_str()) {
                    return Err(CatalogError::UnknownBase {
                        role: role.id.clone(),
                        base: base.clone(),
                    });
                }
            }
            if !declared.insert(role.id.as_str()) {
                return Err(CatalogError::DuplicateRole(role.id.clone()));
            }
        }
        Ok(())
    }

    /// Builds the registries described by this configuration.
    pub fn build(&self) -> CatalogResult<Catalog> {
        self.validate()?;

        let mut value_types = ValueTypeRegistry::new();
        for spec in &self.value_types {
            value_types.register_spec(spec)?;
        }

        let mut role_types = RoleTypeRegistry::new(value_types);
        for spec in &self.roles {
            let ancestor = match &spec.base {
                None => role_types.root(),
                Some(base) => role_types.find(base).ok_or_else(|| CatalogError::UnknownBase {
                    role: spec.id.clone(),
                    base: base.clone(),
                })?,
            };
            role_types.extend(ancestor, spec)?;
        }

        let messages = DefaultMessages::english().with_overrides(self.messages.clone());

        info!(
            roles = self.roles.len(),
            value_types = self.value_types.len(),
            message_overrides = self.messages.len(),
            "loaded role catalog"
        );
        Ok(Catalog {
            role_types,
            messages,
        })
    }
}

/// Registries built from a [`CatalogConfig`].
#[derive(Clone, Debug)]
pub struct Catalog {
    pub role_types: RoleTypeRegistry,
    pub messages: DefaultMessages,
}

impl Catalog {
    pub fn role(&self, name: &str) -> Option<RoleTypeId> {
        self.role_types.find(name)
    }
}
