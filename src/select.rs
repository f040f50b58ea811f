//! Scoring layouts against a target canton aspect ratio.

use alloc::vec::Vec;

use num_bigint::BigInt;
use num_traits::Signed;

use crate::enumerate::generate_star_layouts;
use crate::error::FlagError;
use crate::layout::{KindSet, Layout, LayoutKind};
use crate::rational::Fraction;

/// A candidate layout with its fit against the canton factor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScoredLayout {
    pub layout: Layout,
    pub kind: LayoutKind,
    /// Absolute deviation from the canton factor. Lower is better.
    pub score: Fraction,
}

/// Width-over-height ratio implied by a layout's own lattice:
/// `(b + d) / (a + c)` column positions over rows.
pub fn implied_ratio(layout: Layout) -> Fraction {
    Fraction::new(
        BigInt::from(layout.columns()),
        BigInt::from(layout.rows()),
    )
}

/// `|implied_ratio(layout) - canton_factor|`, exact.
pub fn score(layout: Layout, canton_factor: &Fraction) -> Fraction {
    (implied_ratio(layout) - canton_factor).abs()
}

pub(crate) fn check_canton_factor(canton_factor: &Fraction) -> Result<(), FlagError> {
    if canton_factor.is_positive() {
        Ok(())
    } else {
        Err(FlagError::InvalidCantonFactor(canton_factor.clone()))
    }
}

/// Every layout of `nstars` stars restricted to `kinds`, best fit first.
///
/// The sort is stable: layouts with identical scores keep enumeration
/// order, so the ranking is reproducible. An empty ranking is not an error
/// here; [`find_best_star_layout`] reports it.
pub fn find_best_star_layouts(
    nstars: u32,
    canton_factor: &Fraction,
    kinds: KindSet,
) -> Result<Vec<ScoredLayout>, FlagError> {
    check_canton_factor(canton_factor)?;

    let mut ranked: Vec<ScoredLayout> = generate_star_layouts(nstars, kinds)
        .map(|layout| ScoredLayout {
            layout,
            kind: layout.kind(),
            score: score(layout, canton_factor),
        })
        .collect();
    ranked.sort_by(|x, y| x.score.cmp(&y.score));
    Ok(ranked)
}

/// The layout of `nstars` stars that best fits `canton_factor`.
///
/// ```
/// use spangled::{find_best_layout, rational::default_canton_factor, KindSet, LayoutKind};
///
/// let best = find_best_layout(50, &default_canton_factor(), KindSet::ALL).unwrap();
/// assert_eq!(best.parts(), (5, 6, 4, 5));
/// assert_eq!(best.kind(), LayoutKind::ShortSandwich);
/// ```
pub fn find_best_star_layout(
    nstars: u32,
    canton_factor: &Fraction,
    kinds: KindSet,
) -> Result<Layout, FlagError> {
    check_canton_factor(canton_factor)?;

    let mut best: Option<ScoredLayout> = None;
    let mut candidates = 0usize;
    for layout in generate_star_layouts(nstars, kinds) {
        candidates += 1;
        let s = score(layout, canton_factor);
        // Strict comparison: the first of equal scores wins.
        if best.as_ref().is_none_or(|b| s < b.score) {
            best = Some(ScoredLayout {
                layout,
                kind: layout.kind(),
                score: s,
            });
        }
    }

    let best = best.ok_or(FlagError::NoLayoutFound { nstars })?;
    tracing::debug!(
        nstars,
        layout = %best.layout,
        kind = %best.kind,
        score = %best.score,
        candidates,
        "selected star layout"
    );
    Ok(best.layout)
}
