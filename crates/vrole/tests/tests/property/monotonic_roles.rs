//! Property tests: role type levels only grow, and locked types never change.

use proptest::prelude::*;
use vrole_mapping::{RoleTypeRegistry, RoleTypeSpec};
use vrole_types::{MeasurementLevel, TypeRef};

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn arb_level() -> impl Strategy<Value = MeasurementLevel> {
    prop_oneof![
        Just(MeasurementLevel::Nominal),
        Just(MeasurementLevel::Ordinal),
        Just(MeasurementLevel::Quantitative),
    ]
}

fn arb_updates() -> impl Strategy<Value = Vec<Vec<MeasurementLevel>>> {
    prop::collection::vec(prop::collection::vec(arb_level(), 0..4), 1..8)
}

fn arb_data_type() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("value"), Just("string"), Just("number"), Just("date")]
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn levels_never_shrink(initial in arb_level(), updates in arb_updates()) {
        let mut registry = RoleTypeRegistry::default();
        let role = registry
            .extend(registry.root(), &RoleTypeSpec::new("color").with_levels([initial]))
            .unwrap();

        for update in updates {
            let before = registry.levels(role).unwrap().clone();
            registry.set_levels(role, Some(update.as_slice())).unwrap();
            let after = registry.levels(role).unwrap();
            prop_assert!(before.iter().all(|l| after.has(l)));
            prop_assert!(update.iter().all(|l| after.has(*l)));
        }
    }

    #[test]
    fn qualitative_only_types_keep_qualitative_levels(
        data_type in arb_data_type(),
        updates in arb_updates(),
    ) {
        let mut registry = RoleTypeRegistry::default();
        let role = registry
            .extend(
                registry.root(),
                &RoleTypeSpec::new("label")
                    .with_data_type(data_type)
                    .with_levels([MeasurementLevel::Nominal]),
            )
            .unwrap();
        let value_types = registry.value_types();
        let data_type = TypeRef::new(data_type);
        let qualitative_only = !value_types.is_abstract(&data_type).unwrap()
            && value_types.is_qualitative_only(&data_type);

        for update in updates {
            let before = registry.levels(role).unwrap().clone();
            let result = registry.set_levels(role, Some(update.as_slice()));
            let adds_quantitative = update
                .iter()
                .any(|l| l.is_quantitative() && !before.has(*l));

            prop_assert_eq!(result.is_err(), qualitative_only && adds_quantitative);
            if result.is_err() {
                prop_assert_eq!(registry.levels(role).unwrap(), &before);
            }
            if qualitative_only {
                prop_assert!(!registry.any_levels_quantitative(role).unwrap());
            }
        }
    }

    #[test]
    fn locked_types_reject_every_change(updates in arb_updates(), data_type in arb_data_type()) {
        let mut registry = RoleTypeRegistry::default();
        let base = registry
            .extend(
                registry.root(),
                &RoleTypeSpec::new("axis").abstract_type().with_levels([MeasurementLevel::Nominal]),
            )
            .unwrap();
        registry
            .extend(base, &RoleTypeSpec::new("rows"))
            .unwrap();

        let levels = registry.levels(base).unwrap().clone();
        let declared = registry.data_type(base).unwrap().clone();
        for update in updates {
            prop_assert!(registry.set_levels(base, Some(update.as_slice())).is_err());
        }
        prop_assert!(registry.set_data_type(base, Some(&TypeRef::new(data_type))).is_err());
        prop_assert_eq!(registry.levels(base).unwrap(), &levels);
        prop_assert_eq!(registry.data_type(base).unwrap(), &declared);
    }
}
