//! Role mapping instances

use crate::attribute::MappingAttribute;
use crate::model::ModelId;
use crate::role_type::RoleTypeId;
use vrole_types::MeasurementLevel;

/// Back-reference from a mapping to the model slot holding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingReference {
    pub model: ModelId,
    /// Name of the role property within the model
    pub property: String,
}

/// The association between a visual role and dataset attributes.
///
/// Holds an optional fixed measurement level and an ordered list of
/// attributes. The mapping knows its owner only through `references`; the
/// first reference designates the owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleMapping {
    role_type: RoleTypeId,
    level: Option<MeasurementLevel>,
    attributes: Vec<MappingAttribute>,
    references: Vec<MappingReference>,
}

impl RoleMapping {
    pub fn new(role_type: RoleTypeId) -> Self {
        Self {
            role_type,
            level: None,
            attributes: Vec::new(),
            references: Vec::new(),
        }
    }

    pub fn with_level(mut self, level: MeasurementLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_attributes<I, A>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<MappingAttribute>,
    {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    pub fn role_type(&self) -> RoleTypeId {
        self.role_type
    }

    /// The fixed level; `None` means the level is determined automatically.
    pub fn level(&self) -> Option<MeasurementLevel> {
        self.level
    }

    pub fn set_level(&mut self, level: Option<MeasurementLevel>) {
        self.level = level;
    }

    pub fn attributes(&self) -> &[MappingAttribute] {
        &self.attributes
    }

    pub fn set_attributes(&mut self, attributes: Vec<MappingAttribute>) {
        self.attributes = attributes;
    }

    pub fn push_attribute(&mut self, attribute: impl Into<MappingAttribute>) {
        self.attributes.push(attribute.into());
    }

    /// Whether any attribute is mapped.
    pub fn is_mapped(&self) -> bool {
        !self.attributes.is_empty()
    }

    pub fn references(&self) -> &[MappingReference] {
        &self.references
    }

    /// Records that the model's `property` slot holds this mapping.
    pub fn attach(&mut self, model: impl Into<ModelId>, property: impl Into<String>) {
        self.references.push(MappingReference {
            model: model.into(),
            property: property.into(),
        });
    }

    pub fn detach(&mut self) {
        self.references.clear();
    }
}
