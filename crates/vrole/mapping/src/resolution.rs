//! Level resolution
//!
//! Determines the measurement level a visual role effectively operates in.
//!
//! ```text
//! Attributes:          product|nominal, sales|quantitative
//! Lowest attr level:   nominal
//! Role levels:         nominal, ordinal, quantitative
//! Auto level:          ordinal   (highest qualitative role level)
//!
//! Attributes:          quantity|quantitative, sales|quantitative
//! Lowest attr level:   quantitative
//! Role levels:         ordinal
//! Auto level:          ordinal   (quantitative data can be downgraded)
//! ```
//!
//! Quantitative data fits any role level; qualitative data only fits
//! qualitative role levels.

use crate::mapping::RoleMapping;
use crate::model::{Owner, OwnerLookup};
use crate::role_type::RoleTypeRegistry;
use vrole_types::{DataAttribute, LevelSet, MeasurementLevel, TypeRef};

/// The role levels compatible with data of level `attribute_level`,
/// ascending.
pub fn compatible_role_levels(
    attribute_level: MeasurementLevel,
    role_levels: &[MeasurementLevel],
) -> Vec<MeasurementLevel> {
    if attribute_level.is_quantitative() {
        role_levels.to_vec()
    } else {
        role_levels
            .iter()
            .copied()
            .filter(MeasurementLevel::is_qualitative)
            .collect()
    }
}

/// The highest role level compatible with data of level `attribute_level`.
pub fn highest_compatible_role_level(
    attribute_level: MeasurementLevel,
    role_levels: &[MeasurementLevel],
) -> Option<MeasurementLevel> {
    compatible_role_levels(attribute_level, role_levels)
        .last()
        .copied()
}

/// Read-only view over the role types and mapping owners needed to answer
/// level queries.
#[derive(Clone, Copy)]
pub struct RoleContext<'a> {
    role_types: &'a RoleTypeRegistry,
    owners: &'a dyn OwnerLookup,
}

impl<'a> RoleContext<'a> {
    pub fn new(role_types: &'a RoleTypeRegistry, owners: &'a dyn OwnerLookup) -> Self {
        Self { role_types, owners }
    }

    pub fn role_types(&self) -> &'a RoleTypeRegistry {
        self.role_types
    }

    pub fn owner(&self, mapping: &RoleMapping) -> Option<Owner<'a>> {
        self.owners.resolve_owner(mapping)
    }

    /// Effective levels of the mapping's role type; `None` for unknown types.
    pub fn role_levels(&self, mapping: &RoleMapping) -> Option<&'a LevelSet> {
        self.role_types.levels(mapping.role_type()).ok()
    }

    /// Effective data type of the mapping's role type.
    pub fn role_data_type(&self, mapping: &RoleMapping) -> Option<&'a TypeRef> {
        self.role_types.data_type(mapping.role_type()).ok()
    }

    pub fn is_mapped(&self, mapping: &RoleMapping) -> bool {
        mapping.is_mapped()
    }

    /// The fixed level when set, otherwise [`level_auto`](Self::level_auto).
    pub fn level_effective(&self, mapping: &RoleMapping) -> Option<MeasurementLevel> {
        mapping.level().or_else(|| self.level_auto(mapping))
    }

    /// The highest role level compatible with the lowest level among the
    /// mapped attributes.
    ///
    /// `None` when the mapping is empty, unowned, has no data, when any
    /// attribute is invalid, or when no role level is compatible.
    pub fn level_auto(&self, mapping: &RoleMapping) -> Option<MeasurementLevel> {
        let lowest = self.lowest_level_in_attributes(mapping)?;
        let role_levels = self.role_levels(mapping)?;
        highest_compatible_role_level(lowest, role_levels.as_slice())
    }

    /// Lowest level among the mapped attributes.
    ///
    /// A single attribute that is undefined in the data, has no level, or
    /// whose type does not fit the role's data type invalidates the result.
    pub fn lowest_level_in_attributes(&self, mapping: &RoleMapping) -> Option<MeasurementLevel> {
        if !mapping.is_mapped() {
            return None;
        }
        let data = self.owner(mapping)?.model.data()?;
        let role_data_type = self.role_data_type(mapping)?;

        let mut lowest: Option<MeasurementLevel> = None;
        for attribute in mapping.attributes() {
            let level = self.attribute_level(data.get(&attribute.name)?, role_data_type)?;
            lowest = Some(lowest.map_or(level, |l| l.min(level)));
        }
        lowest
    }

    /// Lowest level among the valid mapped attributes.
    ///
    /// Unlike [`lowest_level_in_attributes`](Self::lowest_level_in_attributes),
    /// invalid attributes are skipped rather than invalidating the result.
    pub fn lowest_valid_level_in_attributes(
        &self,
        mapping: &RoleMapping,
    ) -> Option<MeasurementLevel> {
        let data = self.owner(mapping)?.model.data()?;
        let role_data_type = self.role_data_type(mapping)?;

        mapping
            .attributes()
            .iter()
            .filter_map(|attribute| data.get(&attribute.name))
            .filter_map(|data_attr| self.attribute_level(data_attr, role_data_type))
            .min()
    }

    fn attribute_level(
        &self,
        data_attr: &DataAttribute,
        role_data_type: &TypeRef,
    ) -> Option<MeasurementLevel> {
        let level = data_attr.level?;
        self.role_types
            .value_types()
            .is_subtype_of(&data_attr.type_ref, role_data_type)
            .then_some(level)
    }
}
