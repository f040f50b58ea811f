//! Exact flag measurements derived from a star layout.
//!
//! All values are relative to a flag height of `1` and follow the official
//! construction: a `19/10` fly, seven of thirteen stripes for the canton,
//! and stars spaced evenly inside it with a one-spacing margin.
//!
//! # Example
//!
//! ```
//! use spangled::{Layout, MeasurementOptions, Measurements, rational::frac};
//!
//! let m = Measurements::generate(Layout::CANONICAL, &MeasurementOptions::default()).unwrap();
//! assert_eq!(*m.canton_height(), frac(7, 13));
//! assert_eq!(*m.canton_width(), frac(19, 25));
//! assert_eq!(*m.star_diameter(), frac(4, 65));
//! ```

use core::num::NonZeroU64;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

use crate::coordinates::StarCoordinates;
use crate::error::FlagError;
use crate::layout::Layout;
use crate::rational::{DEFAULT_MAX_DENOMINATOR, Fraction, bounded, default_canton_factor, frac};
use crate::select::check_canton_factor;

/// Official stripe count.
pub const DEFAULT_NSTRIPES: u32 = 13;

/// Proportional star diameter over the star pitch, `4/7`.
///
/// Fixed by the official flag: the legacy `4/5` of a `1/13` stripe over the
/// canonical layout's `7/65` pitch. Below `1/√2` of the pitch, so stars
/// clear their row, column and diagonal neighbours on any lattice.
pub fn proportional_star_ratio() -> Fraction {
    frac(4, 7)
}

/// Inputs to [`Measurements::generate`] besides the layout.
///
/// ```
/// use spangled::{MeasurementOptions, rational::frac};
///
/// let opts = MeasurementOptions::default()
///     .nstripes(7)
///     .proportional_star_size(false)
///     .canton_factor(frac(3, 2));
/// assert_eq!(opts.nstripes, 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MeasurementOptions {
    /// Total stripe count. The canton spans `ceil(nstripes / 2)` of them.
    pub nstripes: u32,
    /// Scale stars with the layout's spacing instead of the stripe height.
    pub proportional_star_size: bool,
    /// Canton width over canton height. Keep equal to the factor used to
    /// select the layout.
    pub canton_factor: Fraction,
    /// Denominator cap for derived values.
    pub max_denominator: NonZeroU64,
}

impl Default for MeasurementOptions {
    fn default() -> Self {
        Self {
            nstripes: DEFAULT_NSTRIPES,
            proportional_star_size: true,
            canton_factor: default_canton_factor(),
            max_denominator: DEFAULT_MAX_DENOMINATOR,
        }
    }
}

impl MeasurementOptions {
    /// Set the stripe count.
    pub fn nstripes(mut self, nstripes: u32) -> Self {
        self.nstripes = nstripes;
        self
    }

    /// Set the star sizing policy.
    pub fn proportional_star_size(mut self, proportional: bool) -> Self {
        self.proportional_star_size = proportional;
        self
    }

    /// Set the canton aspect ratio.
    pub fn canton_factor(mut self, canton_factor: Fraction) -> Self {
        self.canton_factor = canton_factor;
        self
    }

    /// Set the denominator cap.
    pub fn max_denominator(mut self, max_denominator: NonZeroU64) -> Self {
        self.max_denominator = max_denominator;
        self
    }
}

/// Geometry of a flag, relative to a height of `1`.
///
/// Built once by [`Measurements::generate`] and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Measurements {
    layout: Layout,
    nstripes: u32,
    height: Fraction,
    width: Fraction,
    canton_height: Fraction,
    canton_width: Fraction,
    vertical_stars_margin: Fraction,
    vertical_star_spacing: Fraction,
    horizontal_stars_margin: Fraction,
    horizontal_star_spacing: Fraction,
    star_diameter: Fraction,
    stripe_height: Fraction,
}

/// Distances between neighbouring lattice points.
struct Spacing {
    vertical: Fraction,
    horizontal: Fraction,
}

impl Spacing {
    fn of(layout: Layout, canton_height: &Fraction, canton_width: &Fraction) -> Self {
        Self {
            vertical: canton_height / Fraction::from_integer(BigInt::from(layout.rows() + 1)),
            horizontal: canton_width / Fraction::from_integer(BigInt::from(layout.columns() + 1)),
        }
    }

    /// Distance between neighbouring stars sharing a row or a column.
    /// Interleaved rows only use every other lattice point.
    fn pitch(&self, layout: Layout) -> Fraction {
        let tight = (&self.vertical).min(&self.horizontal).clone();
        if layout.is_interleaved() {
            tight * BigInt::from(2u8)
        } else {
            tight
        }
    }
}

impl Measurements {
    /// Derive the geometry of a flag carrying `layout`.
    ///
    /// Fails on a zero stripe count, a non-positive canton factor, or a
    /// canton that would not leave any of the flag around it. Every value is
    /// derived exactly and only then capped to `max_denominator`.
    pub fn generate(layout: Layout, options: &MeasurementOptions) -> Result<Self, FlagError> {
        if options.nstripes == 0 {
            return Err(FlagError::InvalidStripeCount(options.nstripes));
        }
        check_canton_factor(&options.canton_factor)?;
        let max = options.max_denominator;

        let height = Fraction::one();
        let width = frac(19, 10);
        let nstripes = BigInt::from(options.nstripes);
        let stripe_height = Fraction::new(BigInt::one(), nstripes.clone());
        // Whole stripes by construction: ceil(n / 2) of n.
        let canton_height = Fraction::new(BigInt::from(options.nstripes.div_ceil(2)), nstripes);
        let canton_width = &canton_height * &options.canton_factor;

        if canton_height >= height {
            return Err(FlagError::CantonTooLarge {
                axis: "height",
                canton: canton_height,
                flag: height,
            });
        }
        if canton_width >= width {
            return Err(FlagError::CantonTooLarge {
                axis: "width",
                canton: canton_width,
                flag: width,
            });
        }

        let spacing = Spacing::of(layout, &canton_height, &canton_width);
        let star_diameter = if options.proportional_star_size {
            spacing.pitch(layout) * proportional_star_ratio()
        } else {
            &stripe_height * frac(4, 5)
        };

        let vertical = bounded(spacing.vertical, max);
        let horizontal = bounded(spacing.horizontal, max);
        let measurements = Self {
            layout,
            nstripes: options.nstripes,
            height: bounded(height, max),
            width: bounded(width, max),
            canton_height: bounded(canton_height, max),
            canton_width: bounded(canton_width, max),
            vertical_stars_margin: vertical.clone(),
            vertical_star_spacing: vertical,
            horizontal_stars_margin: horizontal.clone(),
            horizontal_star_spacing: horizontal,
            star_diameter: bounded(star_diameter, max),
            stripe_height: bounded(stripe_height, max),
        };
        tracing::debug!(
            layout = %layout,
            nstripes = options.nstripes,
            proportional = options.proportional_star_size,
            star_diameter = %measurements.star_diameter,
            "generated flag measurements"
        );
        Ok(measurements)
    }

    /// Layout these measurements were derived for.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn nstripes(&self) -> u32 {
        self.nstripes
    }

    /// Flag height (the unit).
    pub fn height(&self) -> &Fraction {
        &self.height
    }

    /// Flag fly.
    pub fn width(&self) -> &Fraction {
        &self.width
    }

    pub fn canton_height(&self) -> &Fraction {
        &self.canton_height
    }

    pub fn canton_width(&self) -> &Fraction {
        &self.canton_width
    }

    /// Distance from the canton's top edge to the first row of stars.
    pub fn vertical_stars_margin(&self) -> &Fraction {
        &self.vertical_stars_margin
    }

    /// Distance between consecutive rows.
    pub fn vertical_star_spacing(&self) -> &Fraction {
        &self.vertical_star_spacing
    }

    /// Distance from the canton's left edge to the first lattice column.
    pub fn horizontal_stars_margin(&self) -> &Fraction {
        &self.horizontal_stars_margin
    }

    /// Distance between consecutive lattice columns. Stars of one
    /// interleaved row are two spacings apart.
    pub fn horizontal_star_spacing(&self) -> &Fraction {
        &self.horizontal_star_spacing
    }

    /// Diameter of the circle circumscribing a star.
    pub fn star_diameter(&self) -> &Fraction {
        &self.star_diameter
    }

    pub fn stripe_height(&self) -> &Fraction {
        &self.stripe_height
    }

    /// Relative position of every star in the canton.
    pub fn star_coordinates(&self) -> StarCoordinates {
        StarCoordinates::new(self)
    }

    fn values(&self) -> [&Fraction; 10] {
        [
            &self.height,
            &self.width,
            &self.canton_height,
            &self.canton_width,
            &self.vertical_stars_margin,
            &self.vertical_star_spacing,
            &self.horizontal_stars_margin,
            &self.horizontal_star_spacing,
            &self.star_diameter,
            &self.stripe_height,
        ]
    }

    /// Scale every value by the least common multiple of their denominators.
    ///
    /// The result holds the smallest integers keeping every ratio, so
    /// emitters can work without fractions or floating point.
    pub fn to_integer_units(&self) -> IntMeasurements {
        let unit = self
            .values()
            .iter()
            .fold(BigInt::one(), |acc, v| acc.lcm(v.denom()));
        let factor = Fraction::from_integer(unit.clone());
        let scale = |v: &Fraction| (v * &factor).to_integer();
        IntMeasurements {
            height: scale(&self.height),
            width: scale(&self.width),
            canton_height: scale(&self.canton_height),
            canton_width: scale(&self.canton_width),
            vertical_stars_margin: scale(&self.vertical_stars_margin),
            vertical_star_spacing: scale(&self.vertical_star_spacing),
            horizontal_stars_margin: scale(&self.horizontal_stars_margin),
            horizontal_star_spacing: scale(&self.horizontal_star_spacing),
            star_diameter: scale(&self.star_diameter),
            stripe_height: scale(&self.stripe_height),
            unit,
        }
    }
}

/// [`Measurements`] scaled to whole numbers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntMeasurements {
    /// Integer units per flag height.
    pub unit: BigInt,
    pub height: BigInt,
    pub width: BigInt,
    pub canton_height: BigInt,
    pub canton_width: BigInt,
    pub vertical_stars_margin: BigInt,
    pub vertical_star_spacing: BigInt,
    pub horizontal_stars_margin: BigInt,
    pub horizontal_star_spacing: BigInt,
    pub star_diameter: BigInt,
    pub stripe_height: BigInt,
}

/// Measurements for `layout` with the official canton factor.
pub fn generate_measurements(
    layout: Layout,
    nstripes: u32,
    proportional_star_size: bool,
) -> Result<Measurements, FlagError> {
    let options = MeasurementOptions::default()
        .nstripes(nstripes)
        .proportional_star_size(proportional_star_size);
    Measurements::generate(layout, &options)
}
