//! Dataset schemas
//!
//! The attributes of the dataset bound to a visual model. Mappings reference
//! these attributes by name.

use crate::error::{TypeError, TypeResult};
use crate::level::MeasurementLevel;
use crate::value_type::TypeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An attribute of a dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataAttribute {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Value type of the attribute
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    /// Level of measurement, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<MeasurementLevel>,
}

impl DataAttribute {
    pub fn new(
        name: impl Into<String>,
        type_ref: impl Into<TypeRef>,
        level: Option<MeasurementLevel>,
    ) -> Self {
        Self {
            name: name.into(),
            label: None,
            type_ref: type_ref.into(),
            level,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The label, falling back to the name.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Wire form of a [`DatasetSchema`].
#[derive(Clone, Debug, Deserialize)]
pub struct DatasetSchemaSpec {
    pub attributes: Vec<DataAttribute>,
}

/// Ordered attributes of a dataset, indexed by name.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "DatasetSchemaSpec")]
pub struct DatasetSchema {
    attributes: Vec<DataAttribute>,
    #[serde(skip)]
    by_name: HashMap<String, usize>,
}

impl DatasetSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes<I>(attributes: I) -> TypeResult<Self>
    where
        I: IntoIterator<Item = DataAttribute>,
    {
        let mut schema = Self::new();
        for attribute in attributes {
            schema.add(attribute)?;
        }
        Ok(schema)
    }

    /// Parses a schema from its JSON form: `{"attributes": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn add(&mut self, attribute: DataAttribute) -> TypeResult<()> {
        if self.by_name.contains_key(&attribute.name) {
            return Err(TypeError::DuplicateAttribute(attribute.name));
        }
        self.by_name
            .insert(attribute.name.clone(), self.attributes.len());
        self.attributes.push(attribute);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&DataAttribute> {
        self.by_name.get(name).map(|&i| &self.attributes[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataAttribute> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl PartialEq for DatasetSchema {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes
    }
}

impl Eq for DatasetSchema {}

impl TryFrom<DatasetSchemaSpec> for DatasetSchema {
    type Error = TypeError;

    fn try_from(spec: DatasetSchemaSpec) -> Result<Self, Self::Error> {
        Self::with_attributes(spec.attributes)
    }
}
