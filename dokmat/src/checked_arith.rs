//! Scalar arithmetic reporting overflow instead of panicking or wrapping

use num_traits::{CheckedAdd, CheckedMul, CheckedSub};

/// Arithmetic on matrix values, returning `None` when the result is not
/// representable.
///
/// Integers delegate to the checked operations of `num_traits`. Floats never
/// fail: an overflowing float operation yields an infinity.
pub trait CheckedArith: Sized {
    fn add_checked(self, rhs: Self) -> Option<Self>;
    fn sub_checked(self, rhs: Self) -> Option<Self>;
    fn mul_checked(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer_checked_arith_impl {
    ($prim: ty) => (
        impl CheckedArith for $prim {
            fn add_checked(self, rhs: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &rhs)
            }

            fn sub_checked(self, rhs: Self) -> Option<Self> {
                CheckedSub::checked_sub(&self, &rhs)
            }

            fn mul_checked(self, rhs: Self) -> Option<Self> {
                CheckedMul::checked_mul(&self, &rhs)
            }
        }
    )
}

integer_checked_arith_impl!(i8);
integer_checked_arith_impl!(u8);
integer_checked_arith_impl!(i16);
integer_checked_arith_impl!(u16);
integer_checked_arith_impl!(i32);
integer_checked_arith_impl!(u32);
integer_checked_arith_impl!(i64);
integer_checked_arith_impl!(u64);
integer_checked_arith_impl!(i128);
integer_checked_arith_impl!(u128);
integer_checked_arith_impl!(isize);
integer_checked_arith_impl!(usize);

macro_rules! float_checked_arith_impl {
    ($prim: ty) => (
        impl CheckedArith for $prim {
            fn add_checked(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            fn sub_checked(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }

            fn mul_checked(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }
        }
    )
}

float_checked_arith_impl!(f32);
float_checked_arith_impl!(f64);

#[cfg(test)]
mod tests {
    use super::CheckedArith;

    #[test]
    fn integers_report_overflow() {
        assert_eq!(i64::MAX.add_checked(1), None);
        assert_eq!(i64::MIN.sub_checked(1), None);
        assert_eq!((1_i64 << 32).mul_checked(1 << 32), None);
        assert_eq!(0_u8.sub_checked(1), None);
        assert_eq!(3_i64.add_checked(-5), Some(-2));
        assert_eq!(7_i32.mul_checked(-6), Some(-42));
    }

    #[test]
    fn floats_never_fail() {
        assert_eq!(f64::MAX.add_checked(f64::MAX), Some(f64::INFINITY));
        assert_eq!(0.5_f32.mul_checked(4.), Some(2.));
    }
}
