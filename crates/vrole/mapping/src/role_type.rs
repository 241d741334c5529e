//! Role mapping types
//!
//! Every kind of visual role has a [`RoleMappingType`] describing its
//! capabilities: the measurement levels it supports and the data type it
//! requires. Types form a single-rooted tree stored in a
//! [`RoleTypeRegistry`] and referenced by [`RoleTypeId`].
//!
//! `levels` and `data_type` are monotonic and inherited (see
//! [`crate::inherited`]). Both become immutable once a type has
//! descendants.

use crate::inherited::{InheritedAttribute, MonotonicLevels, NarrowingDataType};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use vrole_types::{
    LevelSet, MeasurementLevel, MessageKey, TypeError, TypeRef, TypeResult, ValueTypeRegistry,
};

/// Handle of a role type within its registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoleTypeId(usize);

impl RoleTypeId {
    /// The root type of every registry.
    pub const ROOT: RoleTypeId = RoleTypeId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RoleTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A visual role kind.
#[derive(Clone, Debug)]
pub struct RoleMappingType {
    id: RoleTypeId,
    name: String,
    ancestor: Option<RoleTypeId>,
    is_abstract: bool,
    is_root: bool,
    /// Local override; `None` inherits
    levels: Option<LevelSet>,
    /// Local override; `None` inherits
    data_type: Option<TypeRef>,
    descendants: usize,
}

impl RoleMappingType {
    pub fn id(&self) -> RoleTypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ancestor(&self) -> Option<RoleTypeId> {
        self.ancestor
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn has_descendants(&self) -> bool {
        self.descendants > 0
    }

    pub fn has_own_levels(&self) -> bool {
        self.levels.is_some()
    }

    pub fn has_own_data_type(&self) -> bool {
        self.data_type.is_some()
    }
}

/// Declaration of a role type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleTypeSpec {
    pub id: String,
    /// Name of the base role type; the root when absent
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub levels: Option<Vec<MeasurementLevel>>,
    #[serde(default)]
    pub data_type: Option<TypeRef>,
}

impl RoleTypeSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_levels(mut self, levels: impl Into<Vec<MeasurementLevel>>) -> Self {
        self.levels = Some(levels.into());
        self
    }

    pub fn with_data_type(mut self, data_type: impl Into<TypeRef>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }
}

/// Arena of role types, rooted at an abstract type with no levels and data
/// type `value`.
#[derive(Clone, Debug)]
pub struct RoleTypeRegistry {
    types: Vec<RoleMappingType>,
    value_types: ValueTypeRegistry,
}

impl RoleTypeRegistry {
    pub const ROOT_NAME: &'static str = "mapping";

    pub fn new(value_types: ValueTypeRegistry) -> Self {
        let root = RoleMappingType {
            id: RoleTypeId::ROOT,
            name: Self::ROOT_NAME.to_string(),
            ancestor: None,
            is_abstract: true,
            is_root: true,
            levels: Some(LevelSet::new()),
            data_type: Some(TypeRef::value()),
            descendants: 0,
        };
        Self {
            types: vec![root],
            value_types,
        }
    }

    pub fn value_types(&self) -> &ValueTypeRegistry {
        &self.value_types
    }

    /// Value types may be added at any time; role types only hold references.
    pub fn value_types_mut(&mut self) -> &mut ValueTypeRegistry {
        &mut self.value_types
    }

    pub fn root(&self) -> RoleTypeId {
        RoleTypeId::ROOT
    }

    pub fn get(&self, id: RoleTypeId) -> TypeResult<&RoleMappingType> {
        self.types
            .get(id.0)
            .ok_or_else(|| TypeError::UnknownRoleType(id.to_string()))
    }

    pub fn find(&self, name: &str) -> Option<RoleTypeId> {
        self.types.iter().find(|t| t.name == name).map(|t| t.id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleMappingType> {
        self.types.iter()
    }

    /// Whether `sub` is `sup` or one of its descendants.
    pub fn is_subtype_of(&self, sub: RoleTypeId, sup: RoleTypeId) -> bool {
        let mut current = self.types.get(sub.0);
        while let Some(ty) = current {
            if ty.id == sup {
                return true;
            }
            current = ty.ancestor.and_then(|a| self.types.get(a.0));
        }
        false
    }

    // =====================================================================
    // levels
    // =====================================================================

    /// Effective measurement levels, ascending.
    pub fn levels(&self, id: RoleTypeId) -> TypeResult<&LevelSet> {
        let ty = self.get(id)?;
        match (&ty.levels, ty.ancestor) {
            (Some(local), _) => Ok(local),
            (None, Some(ancestor)) => self.levels(ancestor),
            // Only the root lacks an ancestor, and it always has levels.
            (None, None) => Err(TypeError::UnknownRoleType(id.to_string())),
        }
    }

    /// Adds measurement levels to a role type.
    ///
    /// `None` is ignored, as is any change to the root. Levels already
    /// supported are kept in place; new ones are merged in ascending order.
    pub fn set_levels(
        &mut self,
        id: RoleTypeId,
        values: Option<&[MeasurementLevel]>,
    ) -> TypeResult<()> {
        let ty = self.get(id)?;
        if ty.has_descendants() {
            warn!(role_type = %ty.name, "rejected levels change on role type with descendants");
            return Err(TypeError::operation_invalid(
                MessageKey::LevelsLockedWhenTypeHasDescendants.default_template(),
            ));
        }
        let Some(values) = values else {
            return Ok(());
        };
        if ty.is_root {
            return Ok(());
        }

        let inherited = match ty.ancestor {
            Some(ancestor) => self.levels(ancestor)?,
            None => self.levels(id)?,
        };
        let data_type = self.data_type(id)?;
        let strategy = MonotonicLevels {
            data_type,
            value_types: &self.value_types,
        };
        let effective = strategy.resolve_effective(ty.levels.as_ref(), inherited);
        let merged = strategy.merge(effective, LevelSet::from(values))?;

        if let Some(merged) = merged {
            debug!(role_type = %ty.name, levels = %merged, "merged role type levels");
            self.types[id.0].levels = Some(merged);
        }
        Ok(())
    }

    pub fn any_levels_qualitative(&self, id: RoleTypeId) -> TypeResult<bool> {
        Ok(self.levels(id)?.any_qualitative())
    }

    pub fn any_levels_quantitative(&self, id: RoleTypeId) -> TypeResult<bool> {
        Ok(self.levels(id)?.any_quantitative())
    }

    // =====================================================================
    // data type
    // =====================================================================

    /// Effective data type required of mapped attributes.
    pub fn data_type(&self, id: RoleTypeId) -> TypeResult<&TypeRef> {
        let ty = self.get(id)?;
        match (&ty.data_type, ty.ancestor) {
            (Some(local), _) => Ok(local),
            (None, Some(ancestor)) => self.data_type(ancestor),
            (None, None) => Err(TypeError::UnknownRoleType(id.to_string())),
        }
    }

    /// Narrows the data type of a role type. `None` is ignored.
    pub fn set_data_type(&mut self, id: RoleTypeId, value: Option<&TypeRef>) -> TypeResult<()> {
        let ty = self.get(id)?;
        if ty.has_descendants() {
            warn!(role_type = %ty.name, "rejected data type change on role type with descendants");
            return Err(TypeError::operation_invalid(
                MessageKey::DataTypeLockedWhenTypeHasDescendants.default_template(),
            ));
        }
        let Some(value) = value else {
            return Ok(());
        };

        let strategy = NarrowingDataType {
            levels: self.levels(id)?,
            value_types: &self.value_types,
        };
        let narrowed = strategy.merge(self.data_type(id)?, value.clone())?;

        if let Some(narrowed) = narrowed {
            debug!(role_type = %ty.name, data_type = %narrowed, "narrowed role type data type");
            self.types[id.0].data_type = Some(narrowed);
        }
        Ok(())
    }

    // =====================================================================
    // subtyping
    // =====================================================================

    /// Creates a role type deriving from `ancestor`.
    ///
    /// A `spec.base`, when given, must name `ancestor`. The declared data
    /// type is applied before the levels. A failed extension leaves the
    /// registry unchanged; a successful one locks `ancestor`.
    pub fn extend(&mut self, ancestor: RoleTypeId, spec: &RoleTypeSpec) -> TypeResult<RoleTypeId> {
        let ancestor_name = self.get(ancestor)?.name();
        if let Some(base) = spec.base.as_deref() {
            if base != ancestor_name {
                return Err(TypeError::argument_invalid(
                    "base",
                    format!(
                        "role type '{}' declares base '{}' but extends '{}'",
                        spec.id, base, ancestor_name
                    ),
                ));
            }
        }
        if self.find(&spec.id).is_some() {
            return Err(TypeError::DuplicateRoleType(spec.id.clone()));
        }

        let id = RoleTypeId(self.types.len());
        self.types.push(RoleMappingType {
            id,
            name: spec.id.clone(),
            ancestor: Some(ancestor),
            is_abstract: spec.is_abstract,
            is_root: false,
            levels: None,
            data_type: None,
            descendants: 0,
        });

        if let Err(e) = self.configure(id, spec) {
            warn!(role_type = %spec.id, error = %e, "rejected role type definition");
            self.types.pop();
            return Err(e);
        }

        self.types[ancestor.0].descendants += 1;
        debug!(
            role_type = %spec.id,
            ancestor = %self.types[ancestor.0].name,
            "extended role type"
        );
        Ok(id)
    }

    fn configure(&mut self, id: RoleTypeId, spec: &RoleTypeSpec) -> TypeResult<()> {
        self.set_data_type(id, spec.data_type.as_ref())?;
        self.set_levels(id, spec.levels.as_deref())?;

        if !spec.is_abstract && self.levels(id)?.is_empty() {
            return Err(TypeError::argument_required(
                "levels",
                MessageKey::NoLevelsInNonAbstract.default_template(),
            ));
        }
        Ok(())
    }
}

impl Default for RoleTypeRegistry {
    fn default() -> Self {
        Self::new(ValueTypeRegistry::new())
    }
}
