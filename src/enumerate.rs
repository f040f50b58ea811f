//! Enumeration of every layout holding an exact number of stars.

use core::iter::FusedIterator;

use crate::layout::{KindSet, Layout, LayoutKind};

/// Offsets `(c - a, d - b)` tried for each `(a, b)`, in yield order.
const INTERLEAVINGS: [(i8, i8); 5] = [(-1, -1), (-1, 0), (0, -1), (0, 0), (1, -1)];

/// Every layout of `nstars` stars whose kind is in `kinds`.
///
/// Lazy and finite. Each call starts a fresh sequence, and the order is
/// deterministic: by row count `a`, then row length `b`, then the
/// interleaving. An empty sequence (for `nstars == 0`, or kinds no layout
/// can satisfy) is a valid result.
///
/// ```
/// use spangled::{generate_star_layouts, KindSet, Layout};
///
/// let layouts: Vec<Layout> = generate_star_layouts(7, KindSet::ALL).collect();
/// assert_eq!(layouts.len(), 6);
/// assert!(layouts.iter().all(|l| l.nstars() == 7));
/// ```
pub fn generate_star_layouts(nstars: u32, kinds: KindSet) -> StarLayouts {
    StarLayouts {
        nstars: nstars as u64,
        kinds,
        a: 1,
        b: 1,
        slot: 0,
    }
}

/// Iterator returned by [`generate_star_layouts`].
#[derive(Clone, Debug)]
pub struct StarLayouts {
    nstars: u64,
    kinds: KindSet,
    /// Current `a` (rows of the long group).
    a: u64,
    /// Current `b` (length of the long rows).
    b: u64,
    /// Next index into [`INTERLEAVINGS`] for the current `(a, b)`.
    slot: usize,
}

impl StarLayouts {
    fn next_row_len(&mut self) {
        self.b += 1;
        self.slot = 0;
    }

    fn next_row_count(&mut self) {
        self.a += 1;
        self.b = 1;
        self.slot = 0;
    }

    /// Parts of a candidate, if they fit in `u32` and neither group is empty.
    fn candidate(&self, dc: i8, dd: i8) -> Option<(u32, u32, u32, u32)> {
        let c = self.a.checked_add_signed(dc as i64)?;
        let d = self.b.checked_add_signed(dd as i64)?;
        if c == 0 || d == 0 || self.a * self.b + c * d != self.nstars {
            return None;
        }
        Some((
            u32::try_from(self.a).ok()?,
            u32::try_from(self.b).ok()?,
            u32::try_from(c).ok()?,
            u32::try_from(d).ok()?,
        ))
    }
}

impl Iterator for StarLayouts {
    type Item = Layout;

    fn next(&mut self) -> Option<Layout> {
        let n = self.nstars;
        while self.a <= n {
            if self.b > n / self.a {
                self.next_row_count();
                continue;
            }

            if self.a * self.b == n {
                // A full grid; no interleaving can add stars to it.
                let (a, b) = (self.a as u32, self.b as u32);
                self.next_row_count();
                if self.kinds.contains(LayoutKind::Grid)
                    && let Some((layout, _)) = Layout::classified(a, b, 0, 0)
                {
                    return Some(layout);
                }
                continue;
            }

            while let Some(&(dc, dd)) = INTERLEAVINGS.get(self.slot) {
                self.slot += 1;
                let Some((a, b, c, d)) = self.candidate(dc, dd) else {
                    continue;
                };
                let Some((layout, kind)) = Layout::classified(a, b, c, d) else {
                    unreachable!("({a}, {b}, {c}, {d}) holds {n} stars but has no layout kind");
                };
                if self.kinds.contains(kind) {
                    return Some(layout);
                }
            }
            self.next_row_len();
        }
        None
    }
}

impl FusedIterator for StarLayouts {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn all(n: u32) -> Vec<(u32, u32, u32, u32)> {
        generate_star_layouts(n, KindSet::ALL)
            .map(Layout::parts)
            .collect()
    }

    // ── enumeration order and content ───────────────────────────────────

    #[test]
    fn fifty_stars() {
        assert_eq!(
            all(50),
            [
                (1, 25, 1, 25),
                (1, 50, 0, 0),
                (2, 13, 2, 12),
                (2, 17, 1, 16),
                (2, 25, 0, 0),
                (3, 10, 2, 10),
                (5, 5, 5, 5),
                (5, 6, 4, 5),
                (5, 10, 0, 0),
                (6, 5, 5, 4),
                (10, 3, 10, 2),
                (10, 5, 0, 0),
                (13, 2, 12, 2),
                (17, 2, 16, 1),
                (25, 1, 25, 1),
                (25, 2, 0, 0),
                (50, 1, 0, 0),
            ]
        );
    }

    #[test]
    fn seven_stars() {
        assert_eq!(
            all(7),
            [
                (1, 3, 2, 2),
                (1, 4, 1, 3),
                (1, 7, 0, 0),
                (2, 2, 3, 1),
                (4, 1, 3, 1),
                (7, 1, 0, 0),
            ]
        );
    }

    #[test]
    fn single_star() {
        assert_eq!(all(1), [(1, 1, 0, 0)]);
    }

    #[test]
    fn zero_stars_is_empty() {
        assert_eq!(generate_star_layouts(0, KindSet::ALL).count(), 0);
    }

    // ── kind filter ─────────────────────────────────────────────────────

    #[test]
    fn grid_only() {
        let grids: Vec<_> = generate_star_layouts(12, KindSet::only(LayoutKind::Grid))
            .map(Layout::parts)
            .collect();
        assert_eq!(
            grids,
            [
                (1, 12, 0, 0),
                (2, 6, 0, 0),
                (3, 4, 0, 0),
                (4, 3, 0, 0),
                (6, 2, 0, 0),
                (12, 1, 0, 0),
            ]
        );
    }

    #[test]
    fn filter_matches_kind() {
        for kind in LayoutKind::ALL {
            for layout in generate_star_layouts(60, KindSet::only(kind)) {
                assert_eq!(layout.kind(), kind, "{layout}");
            }
        }
    }

    #[test]
    fn empty_kind_set_yields_nothing() {
        assert_eq!(generate_star_layouts(50, KindSet::EMPTY).count(), 0);
    }

    #[test]
    fn prime_count_has_no_cube() {
        // 13 is odd and prime: no `a*b + a*b` split exists.
        assert_eq!(generate_star_layouts(13, KindSet::only(LayoutKind::Cube)).count(), 0);
    }

    // ── restartability ──────────────────────────────────────────────────

    #[test]
    fn fresh_sequence_per_call() {
        let first: Vec<_> = generate_star_layouts(48, KindSet::ALL).collect();
        let second: Vec<_> = generate_star_layouts(48, KindSet::ALL).collect();
        assert_eq!(first, second);

        let mut it = generate_star_layouts(48, KindSet::ALL);
        it.next();
        let resumed = it.clone();
        assert_eq!(it.collect::<Vec<_>>(), resumed.collect::<Vec<_>>());
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut it = generate_star_layouts(3, KindSet::ALL);
        while it.next().is_some() {}
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
