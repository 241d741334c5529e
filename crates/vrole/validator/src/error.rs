use thiserror::Error;
use vrole_mapping::Aggregation;
use vrole_types::{LevelSet, MeasurementLevel, MessageBundle, MessageKey, MessageParams, TypeRef};

/// A problem found while validating a visual role mapping.
///
/// Errors are returned, never raised. `Display` renders the built-in English
/// text; [`render`](MappingError::render) uses a caller-supplied bundle.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MappingError {
    // ── Base structure ──────────────────────────────────────────────
    #[error("the visual role type '{role_type}' is not defined")]
    UnknownRoleType { role_type: String },

    #[error("the visual role type '{role_type}' is abstract and cannot be mapped")]
    AbstractRoleType { role_type: String },

    #[error("the visual role type '{role_type}' is not a subtype of '{property_type}', the type of visual role '{role}'")]
    RoleTypeNotSubtypeOfPropertyType {
        role: String,
        role_type: String,
        property_type: String,
    },

    #[error("mapping attribute #{index} has no name")]
    AttributeNameRequired { index: usize },

    #[error("the visual role '{role}' is required")]
    RoleRequired { role: String },

    #[error("the visual role '{role}' has {count} attributes, fewer than the minimum of {min}")]
    CountBelowMinimum {
        role: String,
        count: usize,
        min: usize,
    },

    #[error("the visual role '{role}' has {count} attributes, more than the maximum of {max}")]
    CountAboveMaximum {
        role: String,
        count: usize,
        max: usize,
    },

    // ── Mapping ─────────────────────────────────────────────────────
    #[error("the visual role mapping is not owned by a visual model")]
    NoOwnerVisualModel,

    #[error("the attribute '{name}' of visual role '{role}' is not defined in the visual model's data")]
    AttributeNotDefinedInData { role: String, name: String },

    #[error("the attribute '{name}' of visual role '{role}' has data type '{data_type}', which is not a subtype of the role's data type '{role_data_type}'")]
    AttributeDataTypeNotSubtypeOfRoleType {
        role: String,
        name: String,
        data_type: TypeRef,
        role_data_type: TypeRef,
    },

    #[error("the measurement level '{level}' of visual role '{role}' is not one of its supported levels: {role_levels}")]
    LevelNotOneOfRoleLevels {
        role: String,
        level: MeasurementLevel,
        role_levels: LevelSet,
    },

    #[error("the attributes of visual role '{role}' have measurement level '{data_level}', which is not compatible with the role's levels: {role_levels}")]
    AttributesLevelNotCompatibleWithRoleLevels {
        role: String,
        data_level: MeasurementLevel,
        role_levels: LevelSet,
    },

    #[error("the attribute '{name}' is mapped more than once to visual role '{role}'")]
    AttributeDuplicate {
        role: String,
        name: String,
        index: usize,
    },

    #[error("the attribute '{name}' with aggregation '{aggregation}' is mapped more than once to visual role '{role}'")]
    AttributeAndAggregationDuplicate {
        role: String,
        name: String,
        aggregation: Aggregation,
        index: usize,
    },
}

impl MappingError {
    pub fn message_key(&self) -> MessageKey {
        match self {
            MappingError::UnknownRoleType { .. } => MessageKey::RoleTypeNotDefined,
            MappingError::AbstractRoleType { .. } => MessageKey::RoleTypeAbstract,
            MappingError::RoleTypeNotSubtypeOfPropertyType { .. } => {
                MessageKey::RoleTypeNotSubtypeOfPropertyType
            }
            MappingError::AttributeNameRequired { .. } => MessageKey::AttributeNameRequired,
            MappingError::RoleRequired { .. } => MessageKey::RoleRequired,
            MappingError::CountBelowMinimum { .. } => MessageKey::CountBelowMinimum,
            MappingError::CountAboveMaximum { .. } => MessageKey::CountAboveMaximum,
            MappingError::NoOwnerVisualModel => MessageKey::NoOwnerVisualModel,
            MappingError::AttributeNotDefinedInData { .. } => MessageKey::AttributeNotDefinedInData,
            MappingError::AttributeDataTypeNotSubtypeOfRoleType { .. } => {
                MessageKey::AttributeDataTypeNotSubtypeOfRoleType
            }
            MappingError::LevelNotOneOfRoleLevels { .. } => MessageKey::LevelNotOneOfRoleLevels,
            MappingError::AttributesLevelNotCompatibleWithRoleLevels { .. } => {
                MessageKey::AttributesLevelNotCompatibleWithRoleLevels
            }
            MappingError::AttributeDuplicate { .. } => MessageKey::AttributeDuplicate,
            MappingError::AttributeAndAggregationDuplicate { .. } => {
                MessageKey::AttributeAndAggregationDuplicate
            }
        }
    }

    /// Template parameters, named as in the message templates.
    pub fn params(&self) -> MessageParams {
        match self {
            MappingError::UnknownRoleType { role_type } => vec![("roleType", role_type.clone())],
            MappingError::AbstractRoleType { role_type } => vec![("roleType", role_type.clone())],
            MappingError::RoleTypeNotSubtypeOfPropertyType {
                role,
                role_type,
                property_type,
            } => vec![
                ("role", role.clone()),
                ("roleType", role_type.clone()),
                ("propertyType", property_type.clone()),
            ],
            MappingError::AttributeNameRequired { index } => vec![("index", index.to_string())],
            MappingError::RoleRequired { role } => vec![("role", role.clone())],
            MappingError::CountBelowMinimum { role, count, min } => vec![
                ("role", role.clone()),
                ("count", count.to_string()),
                ("min", min.to_string()),
            ],
            MappingError::CountAboveMaximum { role, count, max } => vec![
                ("role", role.clone()),
                ("count", count.to_string()),
                ("max", max.to_string()),
            ],
            MappingError::NoOwnerVisualModel => Vec::new(),
            MappingError::AttributeNotDefinedInData { role, name } => {
                vec![("role", role.clone()), ("name", name.clone())]
            }
            MappingError::AttributeDataTypeNotSubtypeOfRoleType {
                role,
                name,
                data_type,
                role_data_type,
            } => vec![
                ("role", role.clone()),
                ("name", name.clone()),
                ("dataType", data_type.to_string()),
                ("roleDataType", role_data_type.to_string()),
            ],
            MappingError::LevelNotOneOfRoleLevels {
                role,
                level,
                role_levels,
            } => vec![
                ("role", role.clone()),
                ("level", level.to_string()),
                ("roleLevels", role_levels.to_string()),
            ],
            MappingError::AttributesLevelNotCompatibleWithRoleLevels {
                role,
                data_level,
                role_levels,
            } => vec![
                ("role", role.clone()),
                ("dataLevel", data_level.to_string()),
                ("roleLevels", role_levels.to_string()),
            ],
            MappingError::AttributeDuplicate { role, name, index } => vec![
                ("role", role.clone()),
                ("name", name.clone()),
                ("index", index.to_string()),
            ],
            MappingError::AttributeAndAggregationDuplicate {
                role,
                name,
                aggregation,
                index,
            } => vec![
                ("role", role.clone()),
                ("name", name.clone()),
                ("aggregation", aggregation.to_string()),
                ("index", index.to_string()),
            ],
        }
    }

    /// Renders the error with the templates of `bundle`.
    pub fn render(&self, bundle: &dyn MessageBundle) -> String {
        bundle.format(self.message_key(), &self.params())
    }

    /// Whether the error comes from the base structural checks.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            MappingError::UnknownRoleType { .. }
                | MappingError::AbstractRoleType { .. }
                | MappingError::RoleTypeNotSubtypeOfPropertyType { .. }
                | MappingError::AttributeNameRequired { .. }
                | MappingError::RoleRequired { .. }
                | MappingError::CountBelowMinimum { .. }
                | MappingError::CountAboveMaximum { .. }
        )
    }
}
