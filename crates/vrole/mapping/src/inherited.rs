//! Monotonic inherited attributes
//!
//! A role type attribute is *inherited* when a type without a local value
//! takes the effective value of its ancestor, and *monotonic* when a local
//! value may only move in one direction relative to the inherited one.
//!
//! Each attribute is a strategy implementing [`InheritedAttribute`]:
//!
//! - [`MonotonicLevels`] — levels can be added, never removed
//! - [`NarrowingDataType`] — the data type can only become more specific

use vrole_types::{
    LevelSet, MeasurementLevel, MessageKey, TypeError, TypeRef, TypeResult, ValueTypeRegistry,
};

/// A monotonic, inherited attribute of a role type.
pub trait InheritedAttribute {
    type Value: Clone;

    /// Argument name reported in errors.
    fn name(&self) -> &'static str;

    /// The local value when there is one, otherwise the inherited one.
    fn resolve_effective<'v>(
        &self,
        local: Option<&'v Self::Value>,
        inherited: &'v Self::Value,
    ) -> &'v Self::Value {
        local.unwrap_or(inherited)
    }

    /// Applies `update` on top of the current effective value.
    ///
    /// Returns the new local value, or `None` when the update changes
    /// nothing. Fails when the update moves against the monotonic direction.
    fn merge(&self, effective: &Self::Value, update: Self::Value) -> TypeResult<Option<Self::Value>>;
}

/// Levels strategy: set union, existing entries are never removed or moved.
pub struct MonotonicLevels<'a> {
    /// Effective data type of the role type being changed
    pub data_type: &'a TypeRef,
    pub value_types: &'a ValueTypeRegistry,
}

impl InheritedAttribute for MonotonicLevels<'_> {
    type Value = LevelSet;

    fn name(&self) -> &'static str {
        "levels"
    }

    fn merge(&self, effective: &LevelSet, update: LevelSet) -> TypeResult<Option<LevelSet>> {
        let qualitative_only = !self.value_types.is_abstract(self.data_type)?
            && self.value_types.is_qualitative_only(self.data_type);

        if qualitative_only {
            let rejected = update
                .iter()
                .find(|level| !effective.has(*level) && level.is_quantitative());
            if let Some(level) = rejected {
                return Err(incompatible_level(self.name(), self.data_type, level));
            }
        }

        let mut merged = effective.clone();
        merged.merge(update.iter());
        Ok(Some(merged))
    }
}

/// Data type strategy: the new type must be a subtype of the current one.
pub struct NarrowingDataType<'a> {
    /// Effective levels of the role type being changed
    pub levels: &'a LevelSet,
    pub value_types: &'a ValueTypeRegistry,
}

impl InheritedAttribute for NarrowingDataType<'_> {
    type Value = TypeRef;

    fn name(&self) -> &'static str {
        "dataType"
    }

    fn merge(&self, effective: &TypeRef, update: TypeRef) -> TypeResult<Option<TypeRef>> {
        let resolved = self
            .value_types
            .resolve(&update)
            .map_err(|e| TypeError::argument_invalid(self.name(), e.to_string()))?;
        if &resolved.id == effective {
            return Ok(None);
        }

        if !self.value_types.is_subtype_of(&resolved.id, effective) {
            return Err(TypeError::argument_invalid(
                self.name(),
                vrole_types::render_template(
                    MessageKey::DataTypeNotSubtypeOfBaseType.default_template(),
                    &[
                        ("dataType", resolved.id.to_string()),
                        ("baseDataType", effective.to_string()),
                    ],
                ),
            ));
        }

        // A qualitative-only type outlaws any quantitative level already supported.
        if self.value_types.is_qualitative_only(&resolved.id) {
            if let Some(level) = self.levels.iter().find(|level| !level.is_qualitative()) {
                return Err(incompatible_level(self.name(), &resolved.id, level));
            }
        }

        Ok(Some(resolved.id.clone()))
    }
}

fn incompatible_level(argument: &str, data_type: &TypeRef, level: MeasurementLevel) -> TypeError {
    TypeError::argument_invalid(
        argument,
        vrole_types::render_template(
            MessageKey::DataTypeIncompatibleWithRoleLevel.default_template(),
            &[("dataType", data_type.to_string()), ("level", level.to_string())],
        ),
    )
}
