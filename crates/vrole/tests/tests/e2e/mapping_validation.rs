//! End-to-end test: validating mappings of a chart bound to sales data.
//!
//! Verifies that:
//! - Well-formed mappings are valid
//! - Each failing check reports exactly its own error
//! - Errors render through the catalog's message bundle

use vrole_mapping::{Aggregation, MappingAttribute, RoleMapping, RoleProperty};
use vrole_tests::{
    chart_catalog, chart_mapping, chart_model, chart_models, init_tracing, CHART_MODEL,
};
use vrole_types::{MessageBundle, MessageKey, MeasurementLevel::*};
use vrole_validator::{MappingError, MappingValidator};

// ---------------------------------------------------------------------------
// Valid mappings
// ---------------------------------------------------------------------------

#[test]
fn typical_chart_mappings_are_valid() {
    init_tracing();
    let catalog = chart_catalog();
    let model = chart_model(&catalog);
    let validator = MappingValidator::new(&catalog.role_types, &model);

    assert!(validator.is_valid(&chart_mapping(&catalog, "rows", &["product", "category"])));
    assert!(validator.is_valid(&chart_mapping(&catalog, "color", &["sales"])));
    assert!(validator.is_valid(&chart_mapping(&catalog, "size", &["sales", "price"])));
    assert!(validator.is_valid(&chart_mapping(&catalog, "label", &["product"])));
    assert!(validator.is_valid(&chart_mapping(&catalog, "rows", &[])));
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

#[test]
fn detached_mapping_reports_only_missing_owner() {
    init_tracing();
    let catalog = chart_catalog();
    let models = chart_models(&catalog);
    let validator = MappingValidator::new(&catalog.role_types, &models);

    let size = catalog.role("size").unwrap();
    let detached = RoleMapping::new(size)
        .with_attributes(["product", "product"])
        .with_level(Nominal);
    assert_eq!(
        validator.validate(&detached),
        Some(vec![MappingError::NoOwnerVisualModel])
    );
}

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

#[test]
fn fixed_level_not_supported_by_role() {
    init_tracing();
    let catalog = chart_catalog();
    let model = chart_model(&catalog);
    let validator = MappingValidator::new(&catalog.role_types, &model);

    let mapping = chart_mapping(&catalog, "rows", &["product"]).with_level(Quantitative);
    let errors = validator.validate(&mapping).unwrap();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0],
        MappingError::LevelNotOneOfRoleLevels {
            level: Quantitative,
            ..
        }
    ));
}

#[test]
fn qualitative_attribute_in_quantitative_only_role() {
    init_tracing();
    let catalog = chart_catalog();
    let mut model = chart_model(&catalog);
    // a numeric attribute flagged ordinal by the data source
    let mut data = vrole_tests::sales_schema();
    data.add(vrole_types::DataAttribute::new("rank", "number", Some(Ordinal)))
        .unwrap();
    model.set_data(Some(data));
    let validator = MappingValidator::new(&catalog.role_types, &model);

    let mapping = chart_mapping(&catalog, "size", &["sales", "rank"]);
    assert_eq!(
        validator.validate(&mapping),
        Some(vec![MappingError::AttributesLevelNotCompatibleWithRoleLevels {
            role: "size".into(),
            data_level: Ordinal,
            role_levels: vec![Quantitative].into(),
        }])
    );
}

// ---------------------------------------------------------------------------
// Duplicates
// ---------------------------------------------------------------------------

#[test]
fn same_attribute_and_aggregation_is_a_duplicate() {
    init_tracing();
    let catalog = chart_catalog();
    let model = chart_model(&catalog);
    let validator = MappingValidator::new(&catalog.role_types, &model);

    let mut mapping = chart_mapping(&catalog, "color", &[]);
    mapping.push_attribute(MappingAttribute::new("sales").with_aggregation(Aggregation::Avg));
    mapping.push_attribute(MappingAttribute::new("sales").with_aggregation(Aggregation::Avg));

    let errors = validator.validate(&mapping).unwrap();
    assert_eq!(
        errors,
        vec![MappingError::AttributeAndAggregationDuplicate {
            role: "color".into(),
            name: "sales".into(),
            aggregation: Aggregation::Avg,
            index: 1,
        }]
    );

    mapping.set_attributes(vec![
        MappingAttribute::new("sales").with_aggregation(Aggregation::Avg),
        MappingAttribute::new("sales").with_aggregation(Aggregation::Max),
    ]);
    assert!(validator.is_valid(&mapping));
}

#[test]
fn qualitative_level_ignores_aggregation() {
    init_tracing();
    let catalog = chart_catalog();
    let model = chart_model(&catalog);
    let validator = MappingValidator::new(&catalog.role_types, &model);

    let mut mapping = chart_mapping(&catalog, "color", &[]).with_level(Ordinal);
    mapping.push_attribute(MappingAttribute::new("sales").with_aggregation(Aggregation::Avg));
    mapping.push_attribute(MappingAttribute::new("sales").with_aggregation(Aggregation::Max));

    let errors = validator.validate(&mapping).unwrap();
    assert!(matches!(
        errors.as_slice(),
        [MappingError::AttributeDuplicate { index: 1, .. }]
    ));
}

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

#[test]
fn cardinality_is_checked_before_role_rules() {
    init_tracing();
    let catalog = chart_catalog();
    let rows = catalog.role("rows").unwrap();
    let model = chart_model(&catalog)
        .with_property(RoleProperty::new("rows", rows).required().with_count_range(1, Some(2)));
    let validator = MappingValidator::new(&catalog.role_types, &model);

    assert_eq!(
        validator.validate(&chart_mapping(&catalog, "rows", &[])),
        Some(vec![MappingError::RoleRequired {
            role: "rows".into()
        }])
    );

    // undefined attributes are not reported while the count is wrong
    let errors = validator
        .validate(&chart_mapping(&catalog, "rows", &["a", "b", "c"]))
        .unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_structural());
}

#[test]
fn role_type_must_fit_its_slot() {
    init_tracing();
    let catalog = chart_catalog();
    let model = chart_model(&catalog);
    let validator = MappingValidator::new(&catalog.role_types, &model);

    // a quantitative numeric role placed in the qualitative-only rows slot
    let mut misplaced = RoleMapping::new(catalog.role("size").unwrap()).with_attributes(["sales"]);
    misplaced.attach(CHART_MODEL, "rows");
    assert_eq!(
        validator.validate(&misplaced),
        Some(vec![MappingError::RoleTypeNotSubtypeOfPropertyType {
            role: "rows".into(),
            role_type: "size".into(),
            property_type: "rows".into(),
        }])
    );
}

#[test]
fn abstract_role_types_are_not_mappable() {
    init_tracing();
    let catalog = chart_catalog();
    let measure = catalog.role("measure").unwrap();
    let model = chart_model(&catalog).with_property(RoleProperty::new("measure", measure));
    let validator = MappingValidator::new(&catalog.role_types, &model);

    let mut mapping = RoleMapping::new(measure).with_attributes(["sales"]);
    mapping.attach(CHART_MODEL, "measure");
    let errors = validator.validate(&mapping).unwrap();
    assert_eq!(
        errors,
        vec![MappingError::AbstractRoleType {
            role_type: "measure".into()
        }]
    );
    assert_eq!(
        errors[0].render(&catalog.messages),
        "the visual role type 'measure' is abstract and cannot be mapped"
    );

    // a concrete subtype fits the abstract slot
    let mut size = RoleMapping::new(catalog.role("size").unwrap()).with_attributes(["sales"]);
    size.attach(CHART_MODEL, "measure");
    assert!(validator.is_valid(&size));
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[test]
fn errors_render_through_catalog_messages() {
    init_tracing();
    let catalog = chart_catalog();
    let model = chart_model(&catalog);
    let validator = MappingValidator::new(&catalog.role_types, &model);

    let errors = validator
        .validate(&chart_mapping(&catalog, "rows", &["product", "product"]))
        .unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message_key(), MessageKey::AttributeDuplicate);
    assert_eq!(
        errors[0].render(&catalog.messages),
        "'product' appears twice in 'rows'"
    );
    assert_eq!(
        errors[0].to_string(),
        "the attribute 'product' is mapped more than once to visual role 'rows'"
    );

    let undefined = validator
        .validate(&chart_mapping(&catalog, "rows", &["region"]))
        .unwrap();
    assert_eq!(
        undefined[0].render(&catalog.messages),
        catalog
            .messages
            .format(MessageKey::AttributeNotDefinedInData, &undefined[0].params())
    );
}

#[test]
fn braced_attribute_names_render_verbatim() {
    init_tracing();
    let catalog = chart_catalog();
    let model = chart_model(&catalog);
    let validator = MappingValidator::new(&catalog.role_types, &model);

    let errors = validator
        .validate(&chart_mapping(&catalog, "rows", &["{role}"]))
        .unwrap();
    assert_eq!(
        errors[0].render(&catalog.messages),
        "the attribute '{role}' of visual role 'rows' is not defined in the visual model's data"
    );
    assert_eq!(errors[0].render(&catalog.messages), errors[0].to_string());
}
