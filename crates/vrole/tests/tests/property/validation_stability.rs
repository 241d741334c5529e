//! Property tests: validation is pure and its outcomes are consistent.

use proptest::prelude::*;
use vrole_mapping::{Aggregation, MappingAttribute, RoleContext};
use vrole_tests::{chart_catalog, chart_mapping, chart_model};
use vrole_types::MeasurementLevel;
use vrole_validator::{MappingError, MappingValidator};

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn arb_slot() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("rows"), Just("color"), Just("size"), Just("label")]
}

fn arb_attribute() -> impl Strategy<Value = MappingAttribute> {
    let names = prop_oneof![
        Just("product"),
        Just("category"),
        Just("sales"),
        Just("price"),
        Just("comment"),
        Just("missing"),
    ];
    let aggregations = prop_oneof![
        Just(Aggregation::Sum),
        Just(Aggregation::Avg),
        Just(Aggregation::Max),
    ];
    (names, aggregations)
        .prop_map(|(name, aggregation)| MappingAttribute::new(name).with_aggregation(aggregation))
}

fn arb_fixed_level() -> impl Strategy<Value = Option<MeasurementLevel>> {
    prop_oneof![
        Just(None),
        Just(Some(MeasurementLevel::Nominal)),
        Just(Some(MeasurementLevel::Ordinal)),
        Just(Some(MeasurementLevel::Quantitative)),
    ]
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn validate_is_idempotent_and_pure(
        slot in arb_slot(),
        attributes in prop::collection::vec(arb_attribute(), 0..5),
        level in arb_fixed_level(),
    ) {
        let catalog = chart_catalog();
        let model = chart_model(&catalog);
        let validator = MappingValidator::new(&catalog.role_types, &model);

        let mut mapping = chart_mapping(&catalog, slot, &[]);
        mapping.set_attributes(attributes);
        mapping.set_level(level);
        let snapshot = mapping.clone();

        let first = validator.validate(&mapping);
        let second = validator.validate(&mapping);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&mapping, &snapshot);
        prop_assert_eq!(first.is_none(), validator.is_valid(&mapping));
        if let Some(errors) = first {
            prop_assert!(!errors.is_empty());
        }
    }

    #[test]
    fn duplicates_only_reported_alone(
        slot in arb_slot(),
        attributes in prop::collection::vec(arb_attribute(), 0..5),
        level in arb_fixed_level(),
    ) {
        let catalog = chart_catalog();
        let model = chart_model(&catalog);
        let validator = MappingValidator::new(&catalog.role_types, &model);

        let mut mapping = chart_mapping(&catalog, slot, &[]);
        mapping.set_attributes(attributes);
        mapping.set_level(level);

        let errors = validator.validate(&mapping).unwrap_or_default();
        let is_duplicate = |e: &MappingError| matches!(
            e,
            MappingError::AttributeDuplicate { .. }
                | MappingError::AttributeAndAggregationDuplicate { .. }
        );
        if errors.iter().any(is_duplicate) {
            prop_assert!(errors.iter().all(is_duplicate));
        }
    }

    #[test]
    fn fixed_level_is_always_effective(
        slot in arb_slot(),
        attributes in prop::collection::vec(arb_attribute(), 0..5),
        level in arb_fixed_level(),
    ) {
        let catalog = chart_catalog();
        let model = chart_model(&catalog);
        let context = RoleContext::new(&catalog.role_types, &model);

        let mut mapping = chart_mapping(&catalog, slot, &[]);
        mapping.set_attributes(attributes);
        mapping.set_level(level);

        match level {
            Some(level) => {
                prop_assert_eq!(context.level_effective(&mapping), Some(level));
            }
            None => {
                prop_assert_eq!(context.level_effective(&mapping), context.level_auto(&mapping));
            }
        }
        if !context.is_mapped(&mapping) {
            prop_assert_eq!(context.level_auto(&mapping), None);
        }
    }
}
