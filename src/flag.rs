//! One-call planning of a flag: select a layout, then measure it.
//!
//! ```
//! use spangled::{FlagSpec, LayoutKind};
//!
//! let plan = FlagSpec::new(50).plan().unwrap();
//! assert_eq!(plan.layout.parts(), (5, 6, 4, 5));
//! assert_eq!(plan.kind, LayoutKind::ShortSandwich);
//! assert_eq!(plan.star_coordinates().len(), 50);
//! ```

use core::num::NonZeroU64;

use crate::coordinates::{StarCoordinates, StarField};
use crate::error::FlagError;
use crate::geometry::{DEFAULT_NSTRIPES, MeasurementOptions, Measurements};
use crate::layout::{KindSet, Layout, LayoutKind};
use crate::rational::{DEFAULT_MAX_DENOMINATOR, Fraction, default_canton_factor};
use crate::select::find_best_star_layout;

/// Everything needed to plan a flag.
///
/// Defaults to the official construction: 13 stripes, a `247/175` canton
/// factor, proportional stars and any layout kind.
///
/// ```
/// use spangled::{FlagSpec, KindSet, LayoutKind, rational::frac};
///
/// let plan = FlagSpec::new(48)
///     .kinds(KindSet::only(LayoutKind::Cube))
///     .nstripes(15)
///     .canton_factor(frac(3, 2))
///     .plan()
///     .unwrap();
/// assert_eq!(plan.kind, LayoutKind::Cube);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagSpec {
    pub nstars: u32,
    pub canton_factor: Fraction,
    pub nstripes: u32,
    pub proportional_star_size: bool,
    pub kinds: KindSet,
    pub max_denominator: NonZeroU64,
    /// Use this layout instead of selecting one.
    pub layout: Option<Layout>,
}

impl FlagSpec {
    /// A flag of `nstars` stars with the official proportions.
    pub fn new(nstars: u32) -> Self {
        Self {
            nstars,
            canton_factor: default_canton_factor(),
            nstripes: DEFAULT_NSTRIPES,
            proportional_star_size: true,
            kinds: KindSet::ALL,
            max_denominator: DEFAULT_MAX_DENOMINATOR,
            layout: None,
        }
    }

    /// Set the canton width over height, used both to select and to measure.
    pub fn canton_factor(mut self, canton_factor: Fraction) -> Self {
        self.canton_factor = canton_factor;
        self
    }

    pub fn nstripes(mut self, nstripes: u32) -> Self {
        self.nstripes = nstripes;
        self
    }

    pub fn proportional_star_size(mut self, proportional: bool) -> Self {
        self.proportional_star_size = proportional;
        self
    }

    /// Restrict selection to these kinds. Ignored for a forced layout.
    pub fn kinds(mut self, kinds: KindSet) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn max_denominator(mut self, max_denominator: NonZeroU64) -> Self {
        self.max_denominator = max_denominator;
        self
    }

    /// Force a layout. It must hold exactly `nstars` stars.
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Options handed to [`Measurements::generate`].
    pub fn measurement_options(&self) -> MeasurementOptions {
        MeasurementOptions {
            nstripes: self.nstripes,
            proportional_star_size: self.proportional_star_size,
            canton_factor: self.canton_factor.clone(),
            max_denominator: self.max_denominator,
        }
    }

    /// Select (or check) the layout and measure the flag.
    pub fn plan(&self) -> Result<FlagPlan, FlagError> {
        let layout = match self.layout {
            Some(layout) => {
                if layout.nstars() != u64::from(self.nstars) {
                    return Err(FlagError::StarCountMismatch {
                        layout,
                        expected: self.nstars,
                        actual: layout.nstars(),
                    });
                }
                layout
            }
            None => find_best_star_layout(self.nstars, &self.canton_factor, self.kinds)?,
        };
        let measurements = Measurements::generate(layout, &self.measurement_options())?;
        Ok(FlagPlan {
            layout,
            kind: layout.kind(),
            measurements,
        })
    }
}

/// A selected layout with its measurements.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlagPlan {
    pub layout: Layout,
    pub kind: LayoutKind,
    pub measurements: Measurements,
}

impl FlagPlan {
    pub fn star_coordinates(&self) -> StarCoordinates {
        self.measurements.star_coordinates()
    }

    /// Every star at the measured diameter.
    pub fn star_field(&self) -> StarField {
        StarField::from(self.star_coordinates())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::frac;

    // ── selection ───────────────────────────────────────────────────────

    #[test]
    fn defaults_plan_canonical_flag() {
        let plan = FlagSpec::new(50).plan().unwrap();
        assert_eq!(plan.layout, Layout::CANONICAL);
        assert_eq!(plan.kind, LayoutKind::ShortSandwich);
        assert_eq!(*plan.measurements.star_diameter(), frac(4, 65));
        assert_eq!(plan.star_field().len(), 50);
    }

    #[test]
    fn forty_eight_plans_grid() {
        let plan = FlagSpec::new(48).plan().unwrap();
        assert_eq!(plan.layout.parts(), (6, 8, 0, 0));
        assert_eq!(plan.kind, LayoutKind::Grid);
    }

    #[test]
    fn options_reach_measurements() {
        let plan = FlagSpec::new(50)
            .nstripes(7)
            .proportional_star_size(false)
            .plan()
            .unwrap();
        assert_eq!(plan.measurements.nstripes(), 7);
        assert_eq!(*plan.measurements.canton_height(), frac(4, 7));
        assert_eq!(*plan.measurements.star_diameter(), frac(4, 35));
    }

    #[test]
    fn kind_filter_applies() {
        let plan = FlagSpec::new(50)
            .kinds(KindSet::only(LayoutKind::Grid))
            .plan()
            .unwrap();
        assert_eq!(plan.layout.parts(), (5, 10, 0, 0));
    }

    // ── forced layout ───────────────────────────────────────────────────

    #[test]
    fn forced_layout_is_used() {
        let cube = Layout::new(4, 6, 4, 6).unwrap();
        let plan = FlagSpec::new(48).layout(cube).plan().unwrap();
        assert_eq!(plan.layout, cube);
        assert_eq!(plan.kind, LayoutKind::Cube);
    }

    #[test]
    fn forced_layout_must_match_count() {
        assert_eq!(
            FlagSpec::new(49).layout(Layout::CANONICAL).plan(),
            Err(FlagError::StarCountMismatch {
                layout: Layout::CANONICAL,
                expected: 49,
                actual: 50,
            })
        );
    }

    // ── errors ──────────────────────────────────────────────────────────

    #[test]
    fn errors_propagate() {
        assert_eq!(
            FlagSpec::new(0).plan(),
            Err(FlagError::NoLayoutFound { nstars: 0 })
        );
        assert_eq!(
            FlagSpec::new(50).nstripes(0).plan(),
            Err(FlagError::InvalidStripeCount(0))
        );
        assert_eq!(
            FlagSpec::new(50).canton_factor(frac(-1, 1)).plan(),
            Err(FlagError::InvalidCantonFactor(frac(-1, 1)))
        );
    }
}
