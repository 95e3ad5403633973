use {
    crate::{IsZero, MathError, MathResult, NumberConst},
    bnum::{cast::As, types::I256},
    std::fmt::{Debug, Display},
};

/// Describes the signed integer operations a [`Fraction`](crate::Fraction) is
/// built from.
///
/// Every fallible operation reports overflow as a [`MathError`] instead of
/// wrapping or panicking.
pub trait Number: Sized + Copy + Ord + Debug + Display + NumberConst + IsZero {
    fn checked_add(self, other: Self) -> MathResult<Self>;

    fn checked_sub(self, other: Self) -> MathResult<Self>;

    fn checked_mul(self, other: Self) -> MathResult<Self>;

    fn checked_div(self, other: Self) -> MathResult<Self>;

    fn checked_rem(self, other: Self) -> MathResult<Self>;

    fn checked_pow(self, exp: u32) -> MathResult<Self>;

    fn checked_neg(self) -> MathResult<Self>;

    fn checked_abs(self) -> MathResult<Self>;

    fn is_negative(self) -> bool;

    /// Lossy conversion, for display and estimation only.
    fn to_f64(self) -> f64;
}

macro_rules! impl_number_checked {
    () => {
        fn checked_add(self, other: Self) -> MathResult<Self> {
            self.checked_add(other)
                .ok_or_else(|| MathError::overflow_add(self, other))
        }

        fn checked_sub(self, other: Self) -> MathResult<Self> {
            self.checked_sub(other)
                .ok_or_else(|| MathError::overflow_sub(self, other))
        }

        fn checked_mul(self, other: Self) -> MathResult<Self> {
            self.checked_mul(other)
                .ok_or_else(|| MathError::overflow_mul(self, other))
        }

        fn checked_div(self, other: Self) -> MathResult<Self> {
            if other.is_zero() {
                return Err(MathError::division_by_zero(self));
            }

            // The only other failure is `MIN / -1`.
            self.checked_div(other)
                .ok_or_else(|| MathError::overflow_neg(self))
        }

        fn checked_rem(self, other: Self) -> MathResult<Self> {
            if other.is_zero() {
                return Err(MathError::division_by_zero(self));
            }

            self.checked_rem(other)
                .ok_or_else(|| MathError::overflow_neg(self))
        }

        fn checked_pow(self, exp: u32) -> MathResult<Self> {
            self.checked_pow(exp)
                .ok_or_else(|| MathError::overflow_pow(self, exp))
        }

        fn checked_neg(self) -> MathResult<Self> {
            self.checked_neg()
                .ok_or_else(|| MathError::overflow_neg(self))
        }

        fn checked_abs(self) -> MathResult<Self> {
            self.checked_abs()
                .ok_or_else(|| MathError::overflow_neg(self))
        }

        fn is_negative(self) -> bool {
            self.is_negative()
        }
    };
}

// ------------------------------ primitive types ------------------------------

macro_rules! impl_number_std {
    ($t:ty) => {
        impl Number for $t {
            impl_number_checked!();

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_number_std!($t);
        )+
    };
}

impl_number_std! {
    i8, i16, i32, i64, i128,
}

// ------------------------------------ bnum -----------------------------------

macro_rules! impl_number_bnum {
    ($t:ty) => {
        impl Number for $t {
            impl_number_checked!();

            fn to_f64(self) -> f64 {
                self.as_::<f64>()
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_number_bnum!($t);
        )+
    };
}

impl_number_bnum! {
    I256,
}

// ----------------------------------- tests -----------------------------------
