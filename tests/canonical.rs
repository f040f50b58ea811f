//! Regression anchors: exact layouts and measurements for known star counts.
//!
//! The 50-star values are the official construction and must never drift.
//! The others pin the selection rule so a scoring change shows up here
//! before it shows up in a rendered flag.

use spangled::rational::{default_canton_factor, frac};
use spangled::*;

fn best(nstars: u32) -> Layout {
    find_best_layout(nstars, &default_canton_factor(), KindSet::ALL).unwrap()
}

// ---- 50 stars ----

#[test]
fn fifty_stars_layout() {
    let layout = best(50);
    assert_eq!(layout, Layout::CANONICAL);
    assert_eq!(layout.parts(), (5, 6, 4, 5));
    assert_eq!(classify(layout), LayoutKind::ShortSandwich);
}

#[test]
fn fifty_stars_measurements() {
    let m = generate_measurements(best(50), 13, true).unwrap();
    assert_eq!(*m.width(), frac(19, 10));
    assert_eq!(*m.canton_height(), frac(7, 13));
    assert_eq!(*m.canton_width(), frac(19, 25));
    assert_eq!(*m.stripe_height(), frac(1, 13));
    assert_eq!(*m.vertical_star_spacing(), frac(7, 130));
    assert_eq!(*m.horizontal_star_spacing(), frac(19, 300));
    assert_eq!(*m.star_diameter(), frac(4, 65));

    let units = m.to_integer_units();
    assert_eq!(units.width.to_string(), "7410");
    assert_eq!(units.height.to_string(), "3900");
    assert_eq!(units.star_diameter.to_string(), "240");
}

#[test]
fn fifty_stars_coordinates() {
    let stars: Vec<StarCoordinate> = coordinates_from_layout(best(50), 13, true)
        .unwrap()
        .collect();
    assert_eq!(stars.len(), 50);
    // Five rows of six on the even lattice rows, four rows of five between.
    for row in 0..9i64 {
        let y = frac(row + 1, 10);
        let count = stars.iter().filter(|s| s.y == y).count();
        assert_eq!(count, if row % 2 == 0 { 6 } else { 5 }, "row {row}");
    }
}

#[test]
fn fifty_stars_plan() {
    let plan = FlagSpec::new(50).plan().unwrap();
    assert_eq!(plan.layout, Layout::CANONICAL);
    assert_eq!(plan.measurements, generate_measurements(Layout::CANONICAL, 13, false).unwrap());
}

// ---- other counts ----

#[test]
fn forty_eight_stars_is_grid() {
    let layout = best(48);
    assert_eq!(layout.parts(), (6, 8, 0, 0));
    assert_eq!(layout.kind(), LayoutKind::Grid);
}

#[test]
fn selected_layouts() {
    let cases = [
        (13, (3, 3, 2, 2), LayoutKind::ShortSandwich),
        (15, (3, 3, 2, 3), LayoutKind::SidePagoda),
        (20, (4, 5, 0, 0), LayoutKind::Grid),
        (24, (3, 4, 3, 4), LayoutKind::Cube),
        (49, (4, 6, 5, 5), LayoutKind::LongSandwich),
    ];
    for (nstars, parts, kind) in cases {
        let layout = best(nstars);
        assert_eq!(layout.parts(), parts, "{nstars} stars");
        assert_eq!(layout.kind(), kind, "{nstars} stars");
    }
}

#[test]
fn thirteen_stars_diameter() {
    // Lattice 5×5: the vertical spacing 7/78 is the tighter one.
    let m = generate_measurements(best(13), 13, true).unwrap();
    assert_eq!(*m.vertical_star_spacing(), frac(7, 78));
    assert_eq!(*m.star_diameter(), frac(4, 39));
}

#[test]
fn zero_stars() {
    assert_eq!(
        find_best_layout(0, &default_canton_factor(), KindSet::ALL),
        Err(FlagError::NoLayoutFound { nstars: 0 })
    );
    assert_eq!(generate_star_layouts(0, KindSet::ALL).count(), 0);
}
