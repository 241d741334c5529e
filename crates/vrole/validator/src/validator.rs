//! Mapping validator
//!
//! Validation order:
//!
//! 1. Structure (known and concrete role type fitting its slot, attribute
//!    names, cardinality). Failures here end validation.
//! 2. Ownership. A mapping without an owning model slot ends validation.
//! 3. Data properties: every attribute is defined in the data and its type
//!    fits the role's data type.
//! 4. Level: a fixed level is one of the role's levels, and the attributes'
//!    lowest level is compatible with the candidate role levels.
//! 5. Duplicates, only when steps 3 and 4 found nothing.
//!
//! Validation never mutates the mapping and never fails; it only reports.

use crate::base::validate_structure;
use crate::duplicate::repeated_attributes;
use crate::error::MappingError;
use tracing::trace;
use vrole_mapping::{
    compatible_role_levels, OwnerLookup, RoleContext, RoleMapping, RoleProperty, RoleTypeRegistry,
};
use vrole_types::{DatasetSchema, MeasurementLevel};

// =============================================================================
// ERROR COLLECTOR
// =============================================================================

/// Accumulates errors across validation steps.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<MappingError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: MappingError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[MappingError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<MappingError> {
        self.errors
    }

    /// `None` when nothing was collected.
    pub fn into_result(self) -> Option<Vec<MappingError>> {
        if self.errors.is_empty() {
            None
        } else {
            Some(self.errors)
        }
    }
}

// =============================================================================
// VALIDATOR
// =============================================================================

/// Validates role mappings against their role types and owning models.
#[derive(Clone, Copy)]
pub struct MappingValidator<'a> {
    context: RoleContext<'a>,
}

impl<'a> MappingValidator<'a> {
    pub fn new(role_types: &'a RoleTypeRegistry, owners: &'a dyn OwnerLookup) -> Self {
        Self {
            context: RoleContext::new(role_types, owners),
        }
    }

    pub fn from_context(context: RoleContext<'a>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &RoleContext<'a> {
        &self.context
    }

    /// Validates a mapping; `None` means valid.
    pub fn validate(&self, mapping: &RoleMapping) -> Option<Vec<MappingError>> {
        let mut errors = ErrorCollector::new();

        validate_structure(&self.context, mapping, &mut errors);
        if errors.is_empty() {
            validate_role(&self.context, mapping, &mut errors);
        }

        trace!(
            role_type = %mapping.role_type(),
            attributes = mapping.attributes().len(),
            errors = errors.len(),
            "validated role mapping"
        );
        errors.into_result()
    }

    pub fn is_valid(&self, mapping: &RoleMapping) -> bool {
        self.validate(mapping).is_none()
    }
}

fn validate_role(context: &RoleContext<'_>, mapping: &RoleMapping, errors: &mut ErrorCollector) {
    let Some((owner, property)) = context
        .owner(mapping)
        .and_then(|owner| owner.property.map(|property| (owner, property)))
    else {
        errors.push(MappingError::NoOwnerVisualModel);
        return;
    };

    validate_data_properties(context, mapping, property, owner.model.data(), errors);
    validate_level(context, mapping, property, errors);

    if errors.is_empty() {
        validate_duplicates(context, mapping, property, errors);
    }
}

/// Without data, every attribute is undefined.
fn validate_data_properties(
    context: &RoleContext<'_>,
    mapping: &RoleMapping,
    property: &RoleProperty,
    data: Option<&DatasetSchema>,
    errors: &mut ErrorCollector,
) {
    let Some(role_data_type) = context.role_data_type(mapping) else {
        return;
    };
    let value_types = context.role_types().value_types();

    for attribute in mapping.attributes() {
        match data.and_then(|data| data.get(&attribute.name)) {
            None => errors.push(MappingError::AttributeNotDefinedInData {
                role: property.name.clone(),
                name: attribute.name.clone(),
            }),
            Some(data_attr) if !value_types.is_subtype_of(&data_attr.type_ref, role_data_type) => {
                errors.push(MappingError::AttributeDataTypeNotSubtypeOfRoleType {
                    role: property.name.clone(),
                    name: attribute.name.clone(),
                    data_type: data_attr.type_ref.clone(),
                    role_data_type: role_data_type.clone(),
                })
            }
            Some(_) => {}
        }
    }
}

fn validate_level(
    context: &RoleContext<'_>,
    mapping: &RoleMapping,
    property: &RoleProperty,
    errors: &mut ErrorCollector,
) {
    let Some(role_levels) = context.role_levels(mapping) else {
        return;
    };

    let candidates: Vec<MeasurementLevel> = match mapping.level() {
        Some(level) if !role_levels.has(level) => {
            errors.push(MappingError::LevelNotOneOfRoleLevels {
                role: property.name.clone(),
                level,
                role_levels: role_levels.clone(),
            });
            return;
        }
        Some(level) => vec![level],
        None => role_levels.as_slice().to_vec(),
    };

    if let Some(data_level) = context.lowest_valid_level_in_attributes(mapping) {
        if compatible_role_levels(data_level, &candidates).is_empty() {
            errors.push(MappingError::AttributesLevelNotCompatibleWithRoleLevels {
                role: property.name.clone(),
                data_level,
                role_levels: role_levels.clone(),
            });
        }
    }
}

fn validate_duplicates(
    context: &RoleContext<'_>,
    mapping: &RoleMapping,
    property: &RoleProperty,
    errors: &mut ErrorCollector,
) {
    let attributes = mapping.attributes();
    if attributes.len() <= 1 {
        return;
    }
    let Some(level) = context.level_effective(mapping) else {
        return;
    };
    let is_quantitative = level.is_quantitative();

    for index in repeated_attributes(attributes, is_quantitative) {
        let attribute = &attributes[index];
        let error = if is_quantitative {
            MappingError::AttributeAndAggregationDuplicate {
                role: property.name.clone(),
                name: attribute.name.clone(),
                aggregation: attribute.aggregation,
                index,
            }
        } else {
            MappingError::AttributeDuplicate {
                role: property.name.clone(),
                name: attribute.name.clone(),
                index,
            }
        };
        errors.push(error);
    }
}
