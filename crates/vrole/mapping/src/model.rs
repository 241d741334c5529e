//! Visual models and owner lookup
//!
//! A mapping does not own, nor point to, the visual model it belongs to. It
//! keeps [`MappingReference`](crate::mapping::MappingReference)s (model id
//! plus role property name) which an [`OwnerLookup`] resolves on demand.

use crate::mapping::RoleMapping;
use crate::role_type::RoleTypeId;
use std::collections::HashMap;
use std::fmt;
use vrole_types::DatasetSchema;

/// Identifier of a visual model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ModelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A visual role slot of a visual model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleProperty {
    pub name: String,
    pub role_type: RoleTypeId,
    pub is_required: bool,
    pub count_min: usize,
    pub count_max: Option<usize>,
}

impl RoleProperty {
    pub fn new(name: impl Into<String>, role_type: RoleTypeId) -> Self {
        Self {
            name: name.into(),
            role_type,
            is_required: false,
            count_min: 0,
            count_max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn with_count_range(mut self, min: usize, max: Option<usize>) -> Self {
        self.count_min = min;
        self.count_max = max;
        self
    }
}

impl fmt::Display for RoleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A visualization's model: its bound dataset and role slots.
#[derive(Clone, Debug)]
pub struct VisualModel {
    id: ModelId,
    data: Option<DatasetSchema>,
    properties: Vec<RoleProperty>,
}

impl VisualModel {
    pub fn new(id: impl Into<ModelId>) -> Self {
        Self {
            id: id.into(),
            data: None,
            properties: Vec::new(),
        }
    }

    pub fn with_data(mut self, data: DatasetSchema) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_property(mut self, property: RoleProperty) -> Self {
        self.add_property(property);
        self
    }

    pub fn id(&self) -> &ModelId {
        &self.id
    }

    pub fn data(&self) -> Option<&DatasetSchema> {
        self.data.as_ref()
    }

    pub fn set_data(&mut self, data: Option<DatasetSchema>) {
        self.data = data;
    }

    /// Adds a role slot, replacing one with the same name.
    pub fn add_property(&mut self, property: RoleProperty) {
        match self.properties.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
    }

    pub fn property(&self, name: &str) -> Option<&RoleProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn properties(&self) -> &[RoleProperty] {
        &self.properties
    }
}

/// The owner of a mapping, as resolved from its first reference.
#[derive(Clone, Copy, Debug)]
pub struct Owner<'a> {
    pub model: &'a VisualModel,
    /// `None` when the model has no slot with the referenced name
    pub property: Option<&'a RoleProperty>,
}

/// Resolves a mapping's back-references.
pub trait OwnerLookup {
    /// `None` when the mapping is detached or its model is unknown.
    fn resolve_owner(&self, mapping: &RoleMapping) -> Option<Owner<'_>>;
}

impl OwnerLookup for VisualModel {
    fn resolve_owner(&self, mapping: &RoleMapping) -> Option<Owner<'_>> {
        let reference = mapping.references().first()?;
        if reference.model != self.id {
            return None;
        }
        Some(Owner {
            model: self,
            property: self.property(&reference.property),
        })
    }
}

/// Visual models by id.
#[derive(Clone, Debug, Default)]
pub struct ModelCatalog {
    models: HashMap<ModelId, VisualModel>,
}

impl ModelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a model, returning the one previously stored under its id.
    pub fn insert(&mut self, model: VisualModel) -> Option<VisualModel> {
        self.models.insert(model.id.clone(), model)
    }

    pub fn get(&self, id: &ModelId) -> Option<&VisualModel> {
        self.models.get(id)
    }

    pub fn get_mut(&mut self, id: &ModelId) -> Option<&mut VisualModel> {
        self.models.get_mut(id)
    }

    pub fn remove(&mut self, id: &ModelId) -> Option<VisualModel> {
        self.models.remove(id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl OwnerLookup for ModelCatalog {
    fn resolve_owner(&self, mapping: &RoleMapping) -> Option<Owner<'_>> {
        let reference = mapping.references().first()?;
        let model = self.models.get(&reference.model)?;
        Some(Owner {
            model,
            property: model.property(&reference.property),
        })
    }
}
