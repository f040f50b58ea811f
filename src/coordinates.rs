//! Relative star positions inside the canton.
//!
//! Stars sit on the layout's lattice of `a + c` rows and `b + d` columns.
//! A grid fills every point. Interleaved kinds fill a checkerboard: the
//! `a` rows use even columns and the `c` rows odd columns, which is the
//! half-spacing brick offset. Even rows belong to the leading group, which
//! is the `c` group for a long sandwich and the `a` group otherwise; this
//! is what cuts the bottom corners of a pagoda, the right corners of a side
//! pagoda and the top-right and bottom-left corners of a cube.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::iter::FusedIterator;

use num_bigint::BigInt;

use crate::error::FlagError;
use crate::geometry::{Measurements, generate_measurements};
use crate::layout::{Layout, LayoutKind};
use crate::rational::Fraction;

/// Position of a star center as a fraction of the canton's width (`x`,
/// from the left) and height (`y`, from the top). Both lie in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StarCoordinate {
    pub x: Fraction,
    pub y: Fraction,
}

/// Lazy sequence of every star position of a layout.
///
/// Yields exactly `nstars` distinct coordinates. The current order is
/// row-major, but the sequence is a set of positions and callers should not
/// rely on it.
#[derive(Clone, Debug)]
pub struct StarCoordinates {
    x_origin: Fraction,
    x_step: Fraction,
    y_origin: Fraction,
    y_step: Fraction,
    rows: u64,
    columns: u64,
    interleaved: bool,
    /// Whether even rows hold the `a` group.
    a_leads: bool,
    row: u64,
    column: u64,
    remaining: u64,
}

impl StarCoordinates {
    pub(crate) fn new(measurements: &Measurements) -> Self {
        let layout = measurements.layout();
        // Exact lattice steps; the measured margins may be capped.
        let x_step = Fraction::new(BigInt::from(1), BigInt::from(layout.columns() + 1));
        let y_step = Fraction::new(BigInt::from(1), BigInt::from(layout.rows() + 1));
        let interleaved = layout.is_interleaved();
        let a_leads = layout.kind() != LayoutKind::LongSandwich;

        let mut coordinates = Self {
            x_origin: x_step.clone(),
            x_step,
            y_origin: y_step.clone(),
            y_step,
            rows: layout.rows(),
            columns: layout.columns(),
            interleaved,
            a_leads,
            row: 0,
            column: 0,
            remaining: layout.nstars(),
        };
        coordinates.column = coordinates.first_column(0);
        coordinates
    }

    fn first_column(&self, row: u64) -> u64 {
        if !self.interleaved || (row % 2 == 0) == self.a_leads {
            0
        } else {
            1
        }
    }

    fn step(&self) -> u64 {
        if self.interleaved { 2 } else { 1 }
    }

    fn at(&self, row: u64, column: u64) -> StarCoordinate {
        let i = Fraction::from_integer(BigInt::from(row));
        let j = Fraction::from_integer(BigInt::from(column));
        StarCoordinate {
            x: &self.x_origin + &self.x_step * &j,
            y: &self.y_origin + &self.y_step * &i,
        }
    }
}

impl Iterator for StarCoordinates {
    type Item = StarCoordinate;

    fn next(&mut self) -> Option<StarCoordinate> {
        while self.row < self.rows {
            if self.column < self.columns {
                let coordinate = self.at(self.row, self.column);
                self.column += self.step();
                self.remaining -= 1;
                return Some(coordinate);
            }
            self.row += 1;
            self.column = self.first_column(self.row);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for StarCoordinates {}

impl FusedIterator for StarCoordinates {}

/// Star positions of `layout` with the official canton factor.
///
/// Use [`Measurements::star_coordinates`] for other options.
///
/// ```
/// use spangled::{coordinates_from_layout, Layout};
///
/// let stars = coordinates_from_layout(Layout::CANONICAL, 13, true).unwrap();
/// assert_eq!(stars.len(), 50);
/// ```
pub fn coordinates_from_layout(
    layout: Layout,
    nstripes: u32,
    proportional_star_size: bool,
) -> Result<StarCoordinates, FlagError> {
    generate_measurements(layout, nstripes, proportional_star_size).map(|m| m.star_coordinates())
}

/// Stars handed to an emitter: either all at the uniform diameter, or each
/// with its own diameter multiplier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StarField {
    /// Every star at the measured diameter.
    Uniform(Vec<StarCoordinate>),
    /// Star diameter multiplied by the mapped value.
    Scaled(BTreeMap<StarCoordinate, Fraction>),
}

impl StarField {
    pub fn len(&self) -> usize {
        match self {
            Self::Uniform(stars) => stars.len(),
            Self::Scaled(stars) => stars.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every star with its multiplier; `None` stands for `1`.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&StarCoordinate, Option<&Fraction>)> + '_> {
        match self {
            Self::Uniform(stars) => Box::new(stars.iter().map(|c| (c, None))),
            Self::Scaled(stars) => Box::new(stars.iter().map(|(c, m)| (c, Some(m)))),
        }
    }
}

impl From<StarCoordinates> for StarField {
    fn from(coordinates: StarCoordinates) -> Self {
        Self::Uniform(coordinates.collect())
    }
}

impl FromIterator<(StarCoordinate, Fraction)> for StarField {
    fn from_iter<I: IntoIterator<Item = (StarCoordinate, Fraction)>>(iter: I) -> Self {
        Self::Scaled(iter.into_iter().collect())
    }
}
