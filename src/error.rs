//! Error type shared by selection, measurement and planning.

use alloc::string::String;

use crate::layout::Layout;
use crate::rational::Fraction;

/// Failure of a layout or geometry computation.
///
/// Every error is local to the call that produced it; nothing is retried or
/// partially applied.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlagError {
    /// No layout of the requested kinds holds exactly `nstars` stars.
    #[error("no star layout found for {nstars} stars with the requested kinds")]
    NoLayoutFound { nstars: u32 },

    /// Stripe count of zero.
    #[error("invalid stripe count {0}: a flag needs at least one stripe")]
    InvalidStripeCount(u32),

    /// Canton factor is zero or negative.
    #[error("invalid canton factor {0}: must be positive")]
    InvalidCantonFactor(Fraction),

    /// A forced layout does not hold the requested number of stars.
    #[error("layout {layout} holds {actual} stars, expected {expected}")]
    StarCountMismatch {
        layout: Layout,
        expected: u32,
        actual: u64,
    },

    /// A 4-tuple that does not describe any layout kind.
    #[error("({0}, {1}, {2}, {3}) is not a valid star layout")]
    InvalidLayout(u32, u32, u32, u32),

    /// The canton would cover the whole height or fly of the flag.
    #[error("canton {axis} {canton} does not fit in flag {axis} {flag}")]
    CantonTooLarge {
        axis: &'static str,
        canton: Fraction,
        flag: Fraction,
    },

    /// Unrecognized layout kind name.
    #[error("unknown layout kind {0:?}")]
    UnknownKind(String),
}
