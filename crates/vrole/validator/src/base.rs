//! Structural checks shared by every mapping
//!
//! These run before any role-specific check. A mapping failing any of them
//! is not examined further.

use crate::error::MappingError;
use crate::validator::ErrorCollector;
use vrole_mapping::{RoleContext, RoleMapping, RoleProperty};

/// Checks the role type is known and concrete, attributes are named, and,
/// when the owner slot is resolvable, that the role type fits the slot and
/// the attribute count fits its cardinality.
pub fn validate_structure(
    context: &RoleContext<'_>,
    mapping: &RoleMapping,
    errors: &mut ErrorCollector,
) {
    let role_types = context.role_types();
    let role_type = match role_types.get(mapping.role_type()) {
        Ok(role_type) => Some(role_type),
        Err(_) => {
            errors.push(MappingError::UnknownRoleType {
                role_type: mapping.role_type().to_string(),
            });
            None
        }
    };
    if let Some(role_type) = role_type.filter(|ty| ty.is_abstract()) {
        errors.push(MappingError::AbstractRoleType {
            role_type: role_type.name().to_string(),
        });
    }

    for (index, attribute) in mapping.attributes().iter().enumerate() {
        if attribute.name.is_empty() {
            errors.push(MappingError::AttributeNameRequired { index });
        }
    }

    if let Some(property) = context.owner(mapping).and_then(|owner| owner.property) {
        if let Some(role_type) = role_type {
            if !role_types.is_subtype_of(role_type.id(), property.role_type) {
                let property_type = role_types
                    .get(property.role_type)
                    .map(|ty| ty.name().to_string())
                    .unwrap_or_else(|_| property.role_type.to_string());
                errors.push(MappingError::RoleTypeNotSubtypeOfPropertyType {
                    role: property.name.clone(),
                    role_type: role_type.name().to_string(),
                    property_type,
                });
            }
        }
        validate_cardinality(property, mapping.attributes().len(), errors);
    }
}

fn validate_cardinality(property: &RoleProperty, count: usize, errors: &mut ErrorCollector) {
    if count == 0 && property.is_required {
        errors.push(MappingError::RoleRequired {
            role: property.name.clone(),
        });
    } else if count < property.count_min {
        errors.push(MappingError::CountBelowMinimum {
            role: property.name.clone(),
            count,
            min: property.count_min,
        });
    }

    if let Some(max) = property.count_max {
        if count > max {
            errors.push(MappingError::CountAboveMaximum {
                role: property.name.clone(),
                count,
                max,
            });
        }
    }
}
