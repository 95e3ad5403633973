use {
    crate::{Fraction, Number},
    std::fmt::{Debug, Display},
};

/// Macro for unit tests for `Fraction`.
///
/// Runs the same test body once for every backing integer width. The first
/// parameter of the callback is `Fraction::ZERO` of the width under test, so
/// the compiler can derive the type (see [`frac`] and [`int`]). Inputs, if
/// any, are passed to every width unchanged, so they should be written with
/// `i32` literals.
#[macro_export(local_inner_macros)]
macro_rules! frac_test {
    (
        $name:ident
        $(inputs = [$($input:expr),* $(,)?] $(,)?)?
        $(attrs = $(#[$meta:meta])* $(,)?)?
        method = $test_fn:expr
    ) => {
        paste::paste! {
            $($(#[$meta])*)?
            #[allow(clippy::just_underscores_and_digits)]
            #[test]
            fn [<$name _32>]() {
                ($test_fn)($crate::Fraction32::ZERO $($(, $input)*)?);
            }

            $($(#[$meta])*)?
            #[allow(clippy::just_underscores_and_digits)]
            #[test]
            fn [<$name _64>]() {
                ($test_fn)($crate::Fraction64::ZERO $($(, $input)*)?);
            }

            $($(#[$meta])*)?
            #[allow(clippy::just_underscores_and_digits)]
            #[test]
            fn [<$name _128>]() {
                ($test_fn)($crate::Fraction128::ZERO $($(, $input)*)?);
            }

            $($(#[$meta])*)?
            #[allow(clippy::just_underscores_and_digits)]
            #[test]
            fn [<$name _256>]() {
                ($test_fn)($crate::Fraction256::ZERO $($(, $input)*)?);
            }
        }
    };
}

/// Build a fraction of the same width as the first argument.
pub(crate) fn frac<I>(_: Fraction<I>, numerator: i32, denominator: i32) -> Fraction<I>
where
    I: Number + From<i32>,
{
    match Fraction::checked_new(I::from(numerator), I::from(denominator)) {
        Ok(frac) => frac,
        Err(err) => panic!("invalid fraction {numerator}/{denominator} in test helper: {err}"),
    }
}

/// Build an integer of the same width as the first argument.
pub(crate) fn int<I>(_: Fraction<I>, value: i32) -> I
where
    I: From<i32>,
{
    I::from(value)
}

// -------------------------------- result ext ---------------------------------

/// Addition methods for result types.
/// Useful for testing, improving code readability.
pub(crate) trait ResultExt: Sized {
    type Success;
    type Error;

    /// Ensure the result is ok; return the value.
    fn should_succeed(self) -> Self::Success;

    /// Ensure the result is ok, and matches the expect value.
    fn should_succeed_and_equal<U>(self, expect: U) -> Self::Success
    where
        Self::Success: Debug + PartialEq<U>,
        U: Debug,
    {
        let success = self.should_succeed();
        assert_eq!(
            success, expect,
            "success as expected, but with different value! expecting: {expect:?}, got: {success:?}"
        );
        success
    }

    /// Ensure the result is error; return the error.
    fn should_fail(self) -> Self::Error;

    /// Ensure the result is error, and the error satisfies the given predicate.
    fn should_fail_and<F>(self, predicate: F) -> Self::Error
    where
        Self::Error: Display,
        F: FnOnce(&Self::Error) -> bool,
    {
        let error = self.should_fail();
        assert!(
            predicate(&error),
            "fail as expected, but error does not satisfy predicate! error: {error}"
        );
        error
    }

    /// Ensure the result is error, and matches the specified error.
    ///
    /// We consider the errors match, if the error message contains the expect
    /// value as a substring.
    fn should_fail_with_error<U>(self, expect: U) -> Self::Error
    where
        Self::Error: Display,
        U: Display,
    {
        let error = self.should_fail();
        assert!(
            error.to_string().contains(&expect.to_string()),
            "fail as expected, but with wrong error! expecting: {expect}, got: {error}"
        );
        error
    }
}

impl<T, E> ResultExt for Result<T, E>
where
    T: Debug,
    E: Display,
{
    type Error = E;
    type Success = T;

    fn should_succeed(self) -> Self::Success {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => panic!("expecting ok, got error: {err}"),
        }
    }

    fn should_fail(self) -> Self::Error {
        match self {
            Self::Err(err) => err,
            Self::Ok(value) => panic!("expecting error, got ok: {value:?}"),
        }
    }
}
