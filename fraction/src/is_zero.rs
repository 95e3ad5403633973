use {
    crate::{Fraction, NumberConst},
    bnum::types::I256,
};

pub trait IsZero {
    fn is_zero(&self) -> bool;
}

// ---------------------------------- fraction ---------------------------------

impl<I> IsZero for Fraction<I>
where
    I: IsZero + Copy,
{
    fn is_zero(&self) -> bool {
        self.numerator().is_zero()
    }
}

// ------------------------------ primitive types ------------------------------

macro_rules! impl_is_zero {
    ($t:ty) => {
        impl IsZero for $t {
            fn is_zero(&self) -> bool {
                *self == Self::ZERO
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_is_zero!($t);
        )+
    };
}

impl_is_zero! {
    i8, i16, i32, i64, i128, I256,
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use crate::{frac_test, test_utils::frac, Fraction, IsZero};

    frac_test!( is_zero
        method = |zero: Fraction<_>| {
            assert!(zero.is_zero());
            assert!(!frac(zero, 1, 2).is_zero());
            assert!(!frac(zero, -1, 2).is_zero());
            assert!(frac(zero, 0, -7).is_zero());
        }
    );
}
