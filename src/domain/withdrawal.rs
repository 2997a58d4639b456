//! Assets returned by a withdrawal.

use core::fmt;

use super::Amount;

/// Assets paid out when shares are redeemed.
///
/// # Examples
///
/// ```
/// use hooliswap::domain::{Amount, Withdrawal};
///
/// let w = Withdrawal::new(Amount::new(25), Amount::new(50));
/// assert_eq!(w.common_out(), Amount::new(25));
/// assert_eq!(w.paired_out(), Amount::new(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Withdrawal {
    common_out: Amount,
    paired_out: Amount,
}

impl Withdrawal {
    /// Creates a withdrawal receipt.
    pub const fn new(common_out: Amount, paired_out: Amount) -> Self {
        Self {
            common_out,
            paired_out,
        }
    }

    /// Common asset paid to the holder.
    pub const fn common_out(&self) -> Amount {
        self.common_out
    }

    /// Paired asset paid to the holder.
    pub const fn paired_out(&self) -> Amount {
        self.paired_out
    }

    /// Returns `(common_out, paired_out)`.
    #[must_use]
    pub const fn into_parts(self) -> (Amount, Amount) {
        (self.common_out, self.paired_out)
    }
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdrawal(common={}, paired={})",
            self.common_out, self.paired_out
        )
    }
}
