//! Star layouts and their classification into six visual kinds.
//!
//! A [`Layout`] is the 4-tuple `(a, b, c, d)`: `a` rows of `b` stars
//! interspersed with `c` rows of `d` stars. The two row groups sit on a
//! shared lattice of `a + c` rows and `b + d` columns; interleaved kinds fill
//! it like a checkerboard, a [`LayoutKind::Grid`] fills every point.
//!
//! ```text
//!     Grid (4,6,0,0)      ShortSandwich (3,4,2,3)   Pagoda (2,4,2,3)
//!     * * * * * *         *   *   *   *             *   *   *   *
//!     * * * * * *           *   *   *                 *   *   *
//!     * * * * * *         *   *   *   *             *   *   *   *
//!     * * * * * *           *   *   *                 *   *   *
//!                         *   *   *   *
//!
//!     LongSandwich (2,4,3,3)   SidePagoda (3,3,2,3)   Cube (2,3,2,3)
//!       *   *   *              *   *   *              *   *   *
//!     *   *   *   *              *   *   *              *   *   *
//!       *   *   *              *   *   *              *   *   *
//!     *   *   *   *              *   *   *              *   *   *
//!       *   *   *              *   *   *
//! ```

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::FlagError;

/// Visual pattern of a [`Layout`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LayoutKind {
    /// Every row has the same length, like the 48-star flag.
    Grid,
    /// Each shorter row sits between two longer rows, like the 50-star flag.
    /// Reads as two grids, one inside the other.
    ShortSandwich,
    /// Each longer row sits between two shorter rows: a rectangle with all
    /// four corners cut off.
    LongSandwich,
    /// Longer and shorter rows alternate, like the 45-star flag. The two
    /// corners of the bottom side are cut off.
    Pagoda,
    /// An odd number of rows, all of the same length, with longer and
    /// shorter columns alternating, like the 49-star flag. The two corners of
    /// the right side are cut off.
    SidePagoda,
    /// An even number of rows, all of the same length. The top-right and
    /// bottom-left corners are cut off.
    Cube,
}

impl LayoutKind {
    /// All six kinds, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Grid,
        Self::ShortSandwich,
        Self::LongSandwich,
        Self::Pagoda,
        Self::SidePagoda,
        Self::Cube,
    ];

    /// Stable snake_case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::ShortSandwich => "short_sandwich",
            Self::LongSandwich => "long_sandwich",
            Self::Pagoda => "pagoda",
            Self::SidePagoda => "side_pagoda",
            Self::Cube => "cube",
        }
    }

    /// Classify raw layout parts. `None` when the tuple is not a layout.
    pub fn from_parts(a: u32, b: u32, c: u32, d: u32) -> Option<Self> {
        let (a, b, c, d) = (a as u64, b as u64, c as u64, d as u64);
        if a == 0 || b == 0 {
            return None;
        }
        if c == 0 && d == 0 {
            return Some(Self::Grid);
        }
        if c == 0 || d == 0 {
            return None;
        }
        if d == b {
            if c + 1 == a {
                Some(Self::SidePagoda)
            } else if c == a {
                Some(Self::Cube)
            } else {
                None
            }
        } else if d + 1 == b {
            if c + 1 == a {
                Some(Self::ShortSandwich)
            } else if c == a + 1 {
                Some(Self::LongSandwich)
            } else if c == a {
                Some(Self::Pagoda)
            } else {
                None
            }
        } else {
            None
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutKind {
    type Err = FlagError;

    /// Case-insensitive match on [`LayoutKind::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FlagError::UnknownKind(s.to_string()))
    }
}

/// A set of [`LayoutKind`]s, used to restrict enumeration and selection.
///
/// ```
/// use spangled::{KindSet, LayoutKind};
///
/// let set: KindSet = [LayoutKind::Grid, LayoutKind::Cube].into_iter().collect();
/// assert!(set.contains(LayoutKind::Cube));
/// assert!(!set.contains(LayoutKind::Pagoda));
/// assert!(KindSet::ALL.contains(LayoutKind::Pagoda));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KindSet(u8);

impl KindSet {
    /// Every kind.
    pub const ALL: Self = Self(0b11_1111);
    /// No kind at all. Enumerating with it always yields nothing.
    pub const EMPTY: Self = Self(0);

    /// A set holding a single kind.
    pub const fn only(kind: LayoutKind) -> Self {
        Self(kind.bit())
    }

    /// This set plus `kind`.
    pub const fn with(self, kind: LayoutKind) -> Self {
        Self(self.0 | kind.bit())
    }

    /// This set minus `kind`.
    pub const fn without(self, kind: LayoutKind) -> Self {
        Self(self.0 & !kind.bit())
    }

    pub const fn contains(self, kind: LayoutKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Kinds in the set, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = LayoutKind> {
        LayoutKind::ALL.into_iter().filter(move |&k| self.contains(k))
    }
}

impl From<LayoutKind> for KindSet {
    fn from(kind: LayoutKind) -> Self {
        Self::only(kind)
    }
}

impl FromIterator<LayoutKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = LayoutKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// `a` rows of `b` stars interspersed with `c` rows of `d` stars.
///
/// Always classifiable: the only constructors are [`Layout::new`] (which
/// validates) and the enumerator. `b >= d`, so the `a` group holds the long
/// (or equal-length) rows.
///
/// ```
/// use spangled::{Layout, LayoutKind};
///
/// let fifty = Layout::new(5, 6, 4, 5).unwrap();
/// assert_eq!(fifty.nstars(), 50);
/// assert_eq!(fifty.kind(), LayoutKind::ShortSandwich);
/// assert!(Layout::new(5, 6, 1, 1).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(u32, u32, u32, u32)", into = "(u32, u32, u32, u32)")
)]
pub struct Layout {
    long_rows: u32,
    long_len: u32,
    short_rows: u32,
    short_len: u32,
}

impl Layout {
    /// Validate and build a layout from its four parts.
    pub fn new(a: u32, b: u32, c: u32, d: u32) -> Result<Self, FlagError> {
        Self::classified(a, b, c, d)
            .map(|(layout, _)| layout)
            .ok_or(FlagError::InvalidLayout(a, b, c, d))
    }

    /// Build and classify in one step.
    pub(crate) fn classified(a: u32, b: u32, c: u32, d: u32) -> Option<(Self, LayoutKind)> {
        let kind = LayoutKind::from_parts(a, b, c, d)?;
        let layout = Self {
            long_rows: a,
            long_len: b,
            short_rows: c,
            short_len: d,
        };
        Some((layout, kind))
    }

    /// The historical 50-star arrangement, `(5, 6, 4, 5)`.
    pub const CANONICAL: Self = Self {
        long_rows: 5,
        long_len: 6,
        short_rows: 4,
        short_len: 5,
    };

    /// Number of rows in the `a` group (`a`).
    pub const fn long_rows(self) -> u32 {
        self.long_rows
    }

    /// Stars per row in the `a` group (`b`).
    pub const fn long_len(self) -> u32 {
        self.long_len
    }

    /// Number of rows in the `c` group (`c`).
    pub const fn short_rows(self) -> u32 {
        self.short_rows
    }

    /// Stars per row in the `c` group (`d`).
    pub const fn short_len(self) -> u32 {
        self.short_len
    }

    /// `(a, b, c, d)`.
    pub const fn parts(self) -> (u32, u32, u32, u32) {
        (
            self.long_rows,
            self.long_len,
            self.short_rows,
            self.short_len,
        )
    }

    /// Total star count, `a*b + c*d`.
    pub const fn nstars(self) -> u64 {
        self.long_rows as u64 * self.long_len as u64
            + self.short_rows as u64 * self.short_len as u64
    }

    /// Lattice rows, `a + c`.
    pub const fn rows(self) -> u64 {
        self.long_rows as u64 + self.short_rows as u64
    }

    /// Lattice columns, `b + d`.
    pub const fn columns(self) -> u64 {
        self.long_len as u64 + self.short_len as u64
    }

    /// Visual kind of this layout.
    pub fn kind(self) -> LayoutKind {
        let (a, b, c, d) = self.parts();
        match LayoutKind::from_parts(a, b, c, d) {
            Some(kind) => kind,
            None => unreachable!("layout {self} bypassed classification"),
        }
    }

    /// Whether the two row groups interleave (every kind but [`LayoutKind::Grid`]).
    pub fn is_interleaved(self) -> bool {
        self.kind() != LayoutKind::Grid
    }
}

/// Classify a layout. Total: every [`Layout`] has exactly one kind.
pub fn classify(layout: Layout) -> LayoutKind {
    layout.kind()
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b, c, d) = self.parts();
        write!(f, "({a}, {b}, {c}, {d})")
    }
}

impl TryFrom<(u32, u32, u32, u32)> for Layout {
    type Error = FlagError;

    fn try_from((a, b, c, d): (u32, u32, u32, u32)) -> Result<Self, Self::Error> {
        Self::new(a, b, c, d)
    }
}

impl From<Layout> for (u32, u32, u32, u32) {
    fn from(layout: Layout) -> Self {
        layout.parts()
    }
}
