//! Exact fractions with a bounded-denominator reduction.
//!
//! Every measurement is a [`Fraction`]. Dividing canton dimensions by row and
//! column counts multiplies denominators together across chained operations;
//! [`normalize`] caps a denominator by replacing the fraction with its best
//! rational approximation, and [`bounded`] applies it only when the cap is
//! actually crossed.
//!
//! # Example
//!
//! ```
//! use core::num::NonZeroU64;
//! use spangled::rational::{frac, normalize};
//!
//! let pi = frac(3_141_592_653_589_793, 1_000_000_000_000_000);
//! let max = NonZeroU64::new(1000).unwrap();
//! assert_eq!(normalize(&pi, max), frac(355, 113));
//!
//! // Already within the bound: untouched.
//! assert_eq!(normalize(&frac(7, 130), max), frac(7, 130));
//! ```

use core::mem;
use core::num::NonZeroU64;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Exact, big-integer-backed fraction, always kept in lowest terms.
pub type Fraction = BigRational;

/// Denominator cap applied to derived measurements unless configured otherwise.
pub const DEFAULT_MAX_DENOMINATOR: NonZeroU64 = match NonZeroU64::new(1_000_000) {
    Some(n) => n,
    None => panic!("denominator bound must be non-zero"),
};

/// Build a fraction from machine integers, reduced to lowest terms.
///
/// # Panics
///
/// Panics if `denom` is zero.
pub fn frac(numer: i64, denom: i64) -> Fraction {
    Fraction::new(BigInt::from(numer), BigInt::from(denom))
}

/// Official canton width over canton height, `247/175`.
///
/// Equals `(19/10 × 2/5) / (7/13)`: two fifths of the fly over seven of
/// thirteen stripes.
pub fn default_canton_factor() -> Fraction {
    frac(247, 175)
}

/// Largest possible distance between a value and its [`normalize`]d form.
///
/// Fractions with denominator `max` are spaced `1/max` apart, so the closest
/// one is never further than half of that.
pub fn normalize_tolerance(max_denominator: NonZeroU64) -> Fraction {
    Fraction::new(
        BigInt::one(),
        BigInt::from(max_denominator.get()) * BigInt::from(2u8),
    )
}

/// Closest fraction to `value` whose denominator is at most `max_denominator`.
///
/// Values already within the bound are returned unchanged. Otherwise the
/// continued-fraction expansion of `value` is followed until the next
/// convergent would exceed the bound, and the closer of the last convergent
/// and the largest admissible semiconvergent wins. On an exact tie the
/// convergent is kept.
pub fn normalize(value: &Fraction, max_denominator: NonZeroU64) -> Fraction {
    let max = BigInt::from(max_denominator.get());
    if value.denom() <= &max {
        return value.clone();
    }

    // (p0/q0, p1/q1): the two most recent convergents.
    let (mut p0, mut q0) = (BigInt::zero(), BigInt::one());
    let (mut p1, mut q1) = (BigInt::one(), BigInt::zero());
    let mut n = value.numer().clone();
    let mut d = value.denom().clone();

    // The final convergent is `value` itself, whose denominator exceeds
    // `max`, so the loop always breaks before `d` reaches zero.
    loop {
        let a = n.div_floor(&d);
        let q2 = &q0 + &a * &q1;
        if q2 > max {
            break;
        }
        let p2 = &p0 + &a * &p1;
        p0 = mem::replace(&mut p1, p2);
        q0 = mem::replace(&mut q1, q2);
        let r = &n - &a * &d;
        n = mem::replace(&mut d, r);
    }

    let k = (&max - &q0).div_floor(&q1);
    let semiconvergent = Fraction::new(&p0 + &k * &p1, &q0 + &k * &q1);
    let convergent = Fraction::new(p1, q1);

    if (&convergent - value).abs() <= (&semiconvergent - value).abs() {
        convergent
    } else {
        semiconvergent
    }
}

/// Lazy form of [`normalize`]: takes ownership and only reduces when the
/// denominator has crossed the bound.
pub fn bounded(value: Fraction, max_denominator: NonZeroU64) -> Fraction {
    if *value.denom() <= BigInt::from(max_denominator.get()) {
        return value;
    }
    tracing::trace!(
        denominator = %value.denom(),
        max_denominator = max_denominator.get(),
        "normalizing fraction"
    );
    normalize(&value, max_denominator)
}
