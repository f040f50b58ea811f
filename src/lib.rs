//! Star layouts and exact geometry for flags in the style of the United
//! States flag.
//!
//! Pure arithmetic on exact fractions: no floating point in the core, no
//! I/O, `no_std` compatible (requires `alloc`).
//!
//! # Modules
//!
//! - [`layout`]: The six layout kinds, `Layout` and classification
//! - [`enumerate`]: Every layout holding an exact number of stars
//! - [`select`]: Scoring layouts against a canton aspect ratio
//! - [`geometry`]: Exact flag measurements for a layout
//! - [`coordinates`]: Star positions inside the canton
//! - [`flag`]: One-call planning: select then measure
//! - [`rational`]: Fraction helpers and denominator normalization
//! - `svg`: SVG document output (feature `svg`)
//!
//! # Example
//!
//! ```
//! use spangled::{find_best_layout, generate_measurements, rational::{default_canton_factor, frac}, KindSet};
//!
//! let layout = find_best_layout(50, &default_canton_factor(), KindSet::ALL).unwrap();
//! let m = generate_measurements(layout, 13, true).unwrap();
//! assert_eq!(*m.star_diameter(), frac(4, 65));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod coordinates;
pub mod enumerate;
pub mod error;
pub mod flag;
pub mod geometry;
pub mod layout;
pub mod rational;
pub mod select;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types
pub use coordinates::{StarCoordinate, StarCoordinates, StarField, coordinates_from_layout};
pub use enumerate::{StarLayouts, generate_star_layouts};
pub use error::FlagError;
pub use flag::{FlagPlan, FlagSpec};
pub use geometry::{DEFAULT_NSTRIPES, IntMeasurements, MeasurementOptions, Measurements, generate_measurements};
pub use layout::{KindSet, Layout, LayoutKind, classify};
pub use rational::Fraction;
pub use select::{ScoredLayout, find_best_star_layout, find_best_star_layouts};

/// The layout of `nstars` stars that best fits `canton_factor`.
///
/// Alias of [`find_best_star_layout`].
pub use select::find_best_star_layout as find_best_layout;
