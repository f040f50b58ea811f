//! Property tests over layout enumeration, selection, coordinates and
//! normalization.

use std::collections::BTreeSet;
use std::num::NonZeroU64;

use num_bigint::BigInt;
use num_traits::Signed;
use proptest::prelude::*;
use spangled::rational::{default_canton_factor, frac, normalize, normalize_tolerance};
use spangled::select::score;
use spangled::*;

proptest! {
    #[test]
    fn layouts_hold_exactly_n_stars(n in 1u32..500) {
        let layouts: Vec<Layout> = generate_star_layouts(n, KindSet::ALL).collect();
        prop_assert!(!layouts.is_empty());
        let unique: BTreeSet<_> = layouts.iter().collect();
        prop_assert_eq!(unique.len(), layouts.len());
        for layout in layouts {
            let (a, b, c, d) = layout.parts();
            prop_assert_eq!(layout.nstars(), u64::from(n));
            if layout.kind() != LayoutKind::Grid {
                prop_assert!(a.abs_diff(c) <= 1, "{}", layout);
            }
            prop_assert_eq!(LayoutKind::from_parts(a, b, c, d), Some(classify(layout)));
        }
    }

    #[test]
    fn kind_filter_is_a_subsequence(n in 1u32..300, kind in 0usize..6) {
        let kind = LayoutKind::ALL[kind];
        let all: Vec<Layout> = generate_star_layouts(n, KindSet::ALL)
            .filter(|l| l.kind() == kind)
            .collect();
        let filtered: Vec<Layout> = generate_star_layouts(n, KindSet::only(kind)).collect();
        prop_assert_eq!(all, filtered);
    }

    #[test]
    fn best_layout_minimizes_score(n in 1u32..300, numer in 1i64..40, denom in 1i64..40) {
        let factor = frac(numer, denom);
        let best = find_best_layout(n, &factor, KindSet::ALL).unwrap();
        let ranked = find_best_star_layouts(n, &factor, KindSet::ALL).unwrap();
        prop_assert!(ranked.iter().any(|s| s.layout == best));
        prop_assert_eq!(score(best, &factor), ranked[0].score.clone());
        prop_assert_eq!(best, ranked[0].layout);
    }

    #[test]
    fn coordinates_cover_every_star(n in 1u32..200) {
        let layout = find_best_layout(n, &default_canton_factor(), KindSet::ALL).unwrap();
        let stars: Vec<StarCoordinate> = coordinates_from_layout(layout, 13, true)
            .unwrap()
            .collect();
        prop_assert_eq!(stars.len(), n as usize);
        let unique: BTreeSet<_> = stars.iter().collect();
        prop_assert_eq!(unique.len(), stars.len());
        let (zero, one) = (frac(0, 1), frac(1, 1));
        for s in &stars {
            prop_assert!(s.x >= zero && s.x <= one && s.y >= zero && s.y <= one);
        }
    }

    #[test]
    fn measurements_are_idempotent(n in 1u32..150, nstripes in 2u32..30, proportional in any::<bool>()) {
        let layout = find_best_layout(n, &default_canton_factor(), KindSet::ALL).unwrap();
        let first = generate_measurements(layout, nstripes, proportional).unwrap();
        let second = generate_measurements(layout, nstripes, proportional).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.canton_height() < first.height());
        prop_assert!(first.canton_width() < first.width());
    }

    #[test]
    fn normalize_is_bounded_and_close(numer in -1_000_000_000i64..1_000_000_000, denom in 1i64..1_000_000_000, max in 1u64..10_000) {
        let max = NonZeroU64::new(max).unwrap();
        let value = frac(numer, denom);
        let n = normalize(&value, max);
        prop_assert!(*n.denom() <= BigInt::from(max.get()));
        prop_assert!((&value - &n).abs() <= normalize_tolerance(max));
        if *value.denom() <= BigInt::from(max.get()) {
            prop_assert_eq!(n, value);
        }
    }
}
