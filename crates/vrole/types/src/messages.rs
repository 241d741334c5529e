//! Message bundle
//!
//! Errors are produced as a [`MessageKey`] plus named parameters; turning
//! them into text is the job of a [`MessageBundle`]. [`DefaultMessages`]
//! provides English templates that can be overridden per key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Named parameters of a message.
pub type MessageParams = Vec<(&'static str, String)>;

/// Identifies a message template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    // ── Role type definition ────────────────────────────────────────
    NoLevelsInNonAbstract,
    LevelsLockedWhenTypeHasDescendants,
    DataTypeLockedWhenTypeHasDescendants,
    DataTypeNotSubtypeOfBaseType,
    DataTypeIncompatibleWithRoleLevel,

    // ── Base structure ──────────────────────────────────────────────
    RoleTypeNotDefined,
    RoleTypeAbstract,
    RoleTypeNotSubtypeOfPropertyType,
    AttributeNameRequired,
    RoleRequired,
    CountBelowMinimum,
    CountAboveMaximum,

    // ── Mapping ─────────────────────────────────────────────────────
    NoOwnerVisualModel,
    AttributeNotDefinedInData,
    AttributeDataTypeNotSubtypeOfRoleType,
    LevelNotOneOfRoleLevels,
    AttributesLevelNotCompatibleWithRoleLevels,
    AttributeDuplicate,
    AttributeAndAggregationDuplicate,
}

impl MessageKey {
    pub const ALL: [MessageKey; 19] = [
        MessageKey::NoLevelsInNonAbstract,
        MessageKey::LevelsLockedWhenTypeHasDescendants,
        MessageKey::DataTypeLockedWhenTypeHasDescendants,
        MessageKey::DataTypeNotSubtypeOfBaseType,
        MessageKey::DataTypeIncompatibleWithRoleLevel,
        MessageKey::RoleTypeNotDefined,
        MessageKey::RoleTypeAbstract,
        MessageKey::RoleTypeNotSubtypeOfPropertyType,
        MessageKey::AttributeNameRequired,
        MessageKey::RoleRequired,
        MessageKey::CountBelowMinimum,
        MessageKey::CountAboveMaximum,
        MessageKey::NoOwnerVisualModel,
        MessageKey::AttributeNotDefinedInData,
        MessageKey::AttributeDataTypeNotSubtypeOfRoleType,
        MessageKey::LevelNotOneOfRoleLevels,
        MessageKey::AttributesLevelNotCompatibleWithRoleLevels,
        MessageKey::AttributeDuplicate,
        MessageKey::AttributeAndAggregationDuplicate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::NoLevelsInNonAbstract => "noLevelsInNonAbstract",
            MessageKey::LevelsLockedWhenTypeHasDescendants => "levelsLockedWhenTypeHasDescendants",
            MessageKey::DataTypeLockedWhenTypeHasDescendants => {
                "dataTypeLockedWhenTypeHasDescendants"
            }
            MessageKey::DataTypeNotSubtypeOfBaseType => "dataTypeNotSubtypeOfBaseType",
            MessageKey::DataTypeIncompatibleWithRoleLevel => "dataTypeIncompatibleWithRoleLevel",
            MessageKey::RoleTypeNotDefined => "roleTypeNotDefined",
            MessageKey::RoleTypeAbstract => "roleTypeAbstract",
            MessageKey::RoleTypeNotSubtypeOfPropertyType => "roleTypeNotSubtypeOfPropertyType",
            MessageKey::AttributeNameRequired => "attributeNameRequired",
            MessageKey::RoleRequired => "roleRequired",
            MessageKey::CountBelowMinimum => "countBelowMinimum",
            MessageKey::CountAboveMaximum => "countAboveMaximum",
            MessageKey::NoOwnerVisualModel => "noOwnerVisualModel",
            MessageKey::AttributeNotDefinedInData => "attributeNotDefinedInData",
            MessageKey::AttributeDataTypeNotSubtypeOfRoleType => {
                "attributeDataTypeNotSubtypeOfRoleType"
            }
            MessageKey::LevelNotOneOfRoleLevels => "levelNotOneOfRoleLevels",
            MessageKey::AttributesLevelNotCompatibleWithRoleLevels => {
                "attributesLevelNotCompatibleWithRoleLevels"
            }
            MessageKey::AttributeDuplicate => "attributeDuplicate",
            MessageKey::AttributeAndAggregationDuplicate => "attributeAndAggregationDuplicate",
        }
    }

    /// The built-in English template.
    pub fn default_template(&self) -> &'static str {
        match self {
            MessageKey::NoLevelsInNonAbstract => {
                "a non-abstract visual role must support at least one measurement level"
            }
            MessageKey::LevelsLockedWhenTypeHasDescendants => {
                "cannot change the levels of a visual role type that has subtypes"
            }
            MessageKey::DataTypeLockedWhenTypeHasDescendants => {
                "cannot change the data type of a visual role type that has subtypes"
            }
            MessageKey::DataTypeNotSubtypeOfBaseType => {
                "the data type '{dataType}' is not a subtype of the inherited data type '{baseDataType}'"
            }
            MessageKey::DataTypeIncompatibleWithRoleLevel => {
                "the data type '{dataType}' is inherently qualitative and incompatible with the measurement level '{level}'"
            }
            MessageKey::RoleTypeNotDefined => "the visual role type '{roleType}' is not defined",
            MessageKey::RoleTypeAbstract => {
                "the visual role type '{roleType}' is abstract and cannot be mapped"
            }
            MessageKey::RoleTypeNotSubtypeOfPropertyType => {
                "the visual role type '{roleType}' is not a subtype of '{propertyType}', the type of visual role '{role}'"
            }
            MessageKey::AttributeNameRequired => "mapping attribute #{index} has no name",
            MessageKey::RoleRequired => "the visual role '{role}' is required",
            MessageKey::CountBelowMinimum => {
                "the visual role '{role}' has {count} attributes, fewer than the minimum of {min}"
            }
            MessageKey::CountAboveMaximum => {
                "the visual role '{role}' has {count} attributes, more than the maximum of {max}"
            }
            MessageKey::NoOwnerVisualModel => {
                "the visual role mapping is not owned by a visual model"
            }
            MessageKey::AttributeNotDefinedInData => {
                "the attribute '{name}' of visual role '{role}' is not defined in the visual model's data"
            }
            MessageKey::AttributeDataTypeNotSubtypeOfRoleType => {
                "the attribute '{name}' of visual role '{role}' has data type '{dataType}', which is not a subtype of the role's data type '{roleDataType}'"
            }
            MessageKey::LevelNotOneOfRoleLevels => {
                "the measurement level '{level}' of visual role '{role}' is not one of its supported levels: {roleLevels}"
            }
            MessageKey::AttributesLevelNotCompatibleWithRoleLevels => {
                "the attributes of visual role '{role}' have measurement level '{dataLevel}', which is not compatible with the role's levels: {roleLevels}"
            }
            MessageKey::AttributeDuplicate => {
                "the attribute '{name}' is mapped more than once to visual role '{role}'"
            }
            MessageKey::AttributeAndAggregationDuplicate => {
                "the attribute '{name}' with aggregation '{aggregation}' is mapped more than once to visual role '{role}'"
            }
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Replaces every `{name}` placeholder with the value of the matching
/// parameter. Placeholders without a parameter are left as-is.
///
/// The template is scanned once; substituted values are copied verbatim and
/// never scanned for placeholders themselves.
pub fn render_template(template: &str, params: &[(&str, String)]) -> String {
    let mut text = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let value = tail.find('}').and_then(|close| {
            let name = &tail[..close];
            params
                .iter()
                .find(|(param, _)| *param == name)
                .map(|(_, value)| (value, close))
        });
        match value {
            Some((value, close)) => {
                text.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                text.push('{');
                rest = tail;
            }
        }
    }
    text.push_str(rest);
    text
}

/// Source of message templates.
pub trait MessageBundle {
    fn template(&self, key: MessageKey) -> Option<&str>;

    /// Renders a message, falling back to the key itself when the bundle has
    /// no template for it.
    fn format(&self, key: MessageKey, params: &[(&str, String)]) -> String {
        match self.template(key) {
            Some(template) => render_template(template, params),
            None => key.as_str().to_string(),
        }
    }
}

/// English templates with optional per-key overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultMessages {
    templates: BTreeMap<MessageKey, String>,
}

impl DefaultMessages {
    pub fn english() -> Self {
        let templates = MessageKey::ALL
            .iter()
            .map(|key| (*key, key.default_template().to_string()))
            .collect();
        Self { templates }
    }

    pub fn with_overrides(mut self, overrides: BTreeMap<MessageKey, String>) -> Self {
        self.templates.extend(overrides);
        self
    }

    pub fn set(&mut self, key: MessageKey, template: impl Into<String>) {
        self.templates.insert(key, template.into());
    }
}

impl Default for DefaultMessages {
    fn default() -> Self {
        Self::english()
    }
}

impl MessageBundle for DefaultMessages {
    fn template(&self, key: MessageKey) -> Option<&str> {
        self.templates.get(&key).map(String::as_str)
    }
}
