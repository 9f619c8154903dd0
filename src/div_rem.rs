use std::cmp::min;

use num_traits::PrimInt;

/// Division where the quotient saturates at `max_quotient` and whatever is left over stays in
/// the remainder. Used to let a leap day spill into the last period of a cycle.
pub(crate) trait ClampedDivRem<Q: Ord>: Sized {
    type Quotient;
    fn clamped_div_rem(self, divisor: Self, max_quotient: Q) -> (Q, Self);
}

impl<T, Q> ClampedDivRem<Q> for T
where
    T: PrimInt + TryInto<Q>,
    Q: Ord + Into<T> + Copy,
{
    type Quotient = Q;
    fn clamped_div_rem(self, divisor: T, max_quotient: Self::Quotient) -> (Self::Quotient, Self) {
        let quotient = min(self / divisor, max_quotient.into());
        let remainder = self - quotient * divisor;
        let quotient: Self::Quotient = match quotient.try_into() {
            Ok(x) => x,
            // The quotient is clamped to `max_quotient`, which always converts.
            Err(_) => panic!("quotient is too large"),
        };
        (quotient, remainder)
    }
}
