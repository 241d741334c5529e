//! Property tests: the measurement level lattice and role level compatibility.

use proptest::prelude::*;
use vrole_mapping::{compatible_role_levels, highest_compatible_role_level};
use vrole_types::{LevelSet, MeasurementLevel};

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

/// Ascending, duplicate-free role levels.
fn arb_role_levels() -> impl Strategy<Value = LevelSet> {
    prop::collection::vec(arb_level(), 0..6).prop_map(|levels| {
        let mut set = LevelSet::new();
        set.merge(levels);
        set
    })
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn compare_is_antisymmetric(a in arb_level(), b in arb_level()) {
        prop_assert_eq!(
            MeasurementLevel::compare(a, b),
            MeasurementLevel::compare(b, a).reverse()
        );
    }

    #[test]
    fn qualitative_and_quantitative_partition_the_domain(level in arb_level()) {
        prop_assert!(level.is_qualitative() != level.is_quantitative());
    }

    #[test]
    fn quantitative_data_fits_every_role_level(role_levels in arb_role_levels()) {
        prop_assert_eq!(
            compatible_role_levels(MeasurementLevel::Quantitative, role_levels.as_slice()),
            role_levels.as_slice().to_vec()
        );
    }

    #[test]
    fn qualitative_data_fits_only_qualitative_role_levels(
        level in arb_level().prop_filter("qualitative", MeasurementLevel::is_qualitative),
        role_levels in arb_role_levels(),
    ) {
        let compatible = compatible_role_levels(level, role_levels.as_slice());
        prop_assert!(compatible.iter().all(MeasurementLevel::is_qualitative));
        prop_assert_eq!(
            highest_compatible_role_level(level, role_levels.as_slice()),
            compatible.last().copied()
        );
    }

    #[test]
    fn merged_levels_stay_sorted_and_unique(
        initial in arb_role_levels(),
        update in prop::collection::vec(arb_level(), 0..6),
    ) {
        let mut set = initial.clone();
        set.merge(update.iter().copied());
        let levels = set.as_slice();
        prop_assert!(levels.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(initial.iter().all(|l| set.has(l)));
        prop_assert!(update.iter().all(|l| set.has(*l)));
    }
}
