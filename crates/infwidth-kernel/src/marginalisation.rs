//! Marginalisation levels for covariance bookkeeping

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How much cross-spatial-position covariance a kernel record retains.
///
/// Writing `k_ij(x, y)` for the covariance between spatial positions `i`
/// and `j` of inputs `x` and `y`, the levels describe which of these
/// entries an array tracks:
///
/// - [`OverAll`](Self::OverAll): no spatial dimensions at all. Variances
///   have shape `[n]`, cross covariances `[n1, n2]`.
/// - [`OverPixels`](Self::OverPixels): only the diagonal `k_ii`, one axis
///   per spatial dimension, e.g. `[n, h, w]`.
/// - [`OverPoints`](Self::OverPoints): full `k_ij` within one batch, two
///   axes per spatial dimension, e.g. `[n, h, h', w, w']`.
/// - [`No`](Self::No): no marginalisation, full `k_ij` across batches,
///   e.g. `[n1, n2, h, h', w, w']`.
///
/// The ordinals order the levels by information content: a higher level
/// tracks a strict superset of the covariances tracked by any lower one, so
/// `<` and `>` read as strict set inclusion and `==` as equality of the
/// tracked set.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Marginalisation {
    /// No spatial covariance structure tracked
    OverAll = 0,
    /// Diagonal within-batch entries alongside full pairs, an intermediate
    /// level used while lowering from one layout to another
    OverPixelsAndPoints = 1,
    /// Diagonal spatial entries only
    OverPixels = 2,
    /// Full spatial covariance within one batch
    OverPoints = 3,
    /// No marginalisation at all
    No = 4,
}

impl Marginalisation {
    /// Every level, in increasing information order.
    pub const ALL: [Marginalisation; 5] = [
        Marginalisation::OverAll,
        Marginalisation::OverPixelsAndPoints,
        Marginalisation::OverPixels,
        Marginalisation::OverPoints,
        Marginalisation::No,
    ];

    /// The plain ordinal stored inside kernel records.
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl From<Marginalisation> for u8 {
    fn from(level: Marginalisation) -> u8 {
        level as u8
    }
}

impl TryFrom<u8> for Marginalisation {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self, Error> {
        match ordinal {
            0 => Ok(Marginalisation::OverAll),
            1 => Ok(Marginalisation::OverPixelsAndPoints),
            2 => Ok(Marginalisation::OverPixels),
            3 => Ok(Marginalisation::OverPoints),
            4 => Ok(Marginalisation::No),
            _ => Err(Error::UnknownMarginalisation { ordinal }),
        }
    }
}

// Comparisons between stored ordinals and named levels.

impl PartialEq<u8> for Marginalisation {
    fn eq(&self, other: &u8) -> bool {
        self.ordinal() == *other
    }
}

impl PartialEq<Marginalisation> for u8 {
    fn eq(&self, other: &Marginalisation) -> bool {
        *self == other.ordinal()
    }
}

impl PartialOrd<u8> for Marginalisation {
    fn partial_cmp(&self, other: &u8) -> Option<Ordering> {
        self.ordinal().partial_cmp(other)
    }
}

impl PartialOrd<Marginalisation> for u8 {
    fn partial_cmp(&self, other: &Marginalisation) -> Option<Ordering> {
        self.partial_cmp(&other.ordinal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_matches_information_content() {
        for (i, a) in Marginalisation::ALL.iter().enumerate() {
            for (j, b) in Marginalisation::ALL.iter().enumerate() {
                if i < j {
                    assert!(a < b, "{a:?} should order below {b:?}");
                    assert_ne!(a, b);
                } else if i == j {
                    assert_eq!(a, b);
                } else {
                    assert!(a > b, "{a:?} should order above {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_ordinal_round_trip() {
        for level in Marginalisation::ALL {
            assert_eq!(Marginalisation::try_from(level.ordinal()).unwrap(), level);
            assert_eq!(u8::from(level), level.ordinal());
        }
    }

    #[test]
    fn test_unknown_ordinals_are_rejected() {
        for ordinal in [5u8, 17, 255] {
            let err = Marginalisation::try_from(ordinal).unwrap_err();
            assert!(matches!(
                err,
                Error::UnknownMarginalisation { ordinal: o } if o == ordinal
            ));
        }
    }

    #[test]
    fn test_comparisons_against_stored_ordinals() {
        assert!(Marginalisation::OverPoints == 3u8);
        assert!(3u8 == Marginalisation::OverPoints);
        assert!(Marginalisation::OverPixels < 3u8);
        assert!(4u8 >= Marginalisation::No);
        assert!(0u8 < Marginalisation::OverPixelsAndPoints);
    }
}
