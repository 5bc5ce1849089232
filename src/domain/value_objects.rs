// Domain value objects representing core business concepts

use std::fmt;
use std::ops::Add;

/// Number of fractional decimal digits an [`Amount`] keeps
pub const AMOUNT_SCALE: usize = 9;

const UNITS_PER_WHOLE: u64 = 1_000_000_000;

/// Exact non-negative decimal used for item weights and costs.
///
/// Stored as fixed-point units of `10^-9`, so sums and comparisons never drift
/// the way binary floats do. Fraction digits past [`AMOUNT_SCALE`] are
/// truncated; values too large to represent saturate at [`Amount::MAX`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    pub const MAX: Amount = Amount(u64::MAX);

    pub fn from_whole(whole: u64) -> Self {
        Self(whole.saturating_mul(UNITS_PER_WHOLE))
    }

    /// Build an amount from the digit runs on either side of the decimal point.
    ///
    /// Returns `None` if either run contains anything but ASCII digits.
    pub fn from_digits(whole: &str, fraction: &str) -> Option<Self> {
        let whole = saturating_digits(whole)?;
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let kept = &fraction[..fraction.len().min(AMOUNT_SCALE)];
        let mut units = saturating_digits(kept)?;
        for _ in kept.len()..AMOUNT_SCALE {
            units *= 10;
        }

        Some(Self::from_whole(whole).saturating_add(Self(units)))
    }

    pub fn saturating_add(self, other: Amount) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Whether the amount is strictly above `limit` whole units
    pub fn exceeds(self, limit: u64) -> bool {
        self > Self::from_whole(limit)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        self.saturating_add(rhs)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / UNITS_PER_WHOLE;
        let fraction = self.0 % UNITS_PER_WHOLE;
        if fraction == 0 {
            return write!(f, "{}", whole);
        }

        let digits = format!("{:0width$}", fraction, width = AMOUNT_SCALE);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

/// Parse a run of ASCII digits, saturating instead of overflowing.
///
/// An empty run is zero; any other character yields `None`.
pub(crate) fn saturating_digits(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |acc, b| {
        b.is_ascii_digit()
            .then(|| acc.saturating_mul(10).saturating_add(u64::from(b - b'0')))
    })
}
