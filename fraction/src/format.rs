use {
    crate::{Fraction, IsZero, MathError, MathResult, Number},
    std::{
        fmt::{self, Display, Write},
        str::FromStr,
    },
};

// --------------------------------- canonical ---------------------------------

/// Canonical form: `"{numerator}/{denominator}"`, with the sign carried by the
/// numerator, or `"0"` for zero.
///
/// Improper fractions stay improper here (`"11/2"`); use [`Fraction::as_mixed`]
/// for the mixed-number rendering (`"5 1/2"`).
impl<I> Display for Fraction<I>
where
    I: Number,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_char('0');
        }

        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}

// ----------------------------------- mixed -----------------------------------

/// Displays a [`Fraction`] as a mixed number.
///
/// An improper fraction is written as its whole part followed by the proper
/// remainder, with a single sign on the whole part: `-7/2` becomes
/// `"-3 1/2"`. Whole numbers are written without a fractional part, and proper
/// fractions the same way as in canonical form.
///
/// ```rust
/// use fraction_math::Fraction32;
///
/// let frac = Fraction32::checked_new(-7, 2).unwrap();
/// assert_eq!(frac.as_mixed().to_string(), "-3 1/2");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MixedNumber<'a, I>(&'a Fraction<I>);

impl<I> Fraction<I> {
    pub fn as_mixed(&self) -> MixedNumber<'_, I> {
        MixedNumber(self)
    }
}

impl<I> Display for MixedNumber<'_, I>
where
    I: Number,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numerator = self.0.numerator();
        let denominator = self.0.denominator();

        if numerator.is_zero() {
            return f.write_char('0');
        }

        // The denominator is positive, so none of these can fail.
        let lower = denominator.checked_neg().map_err(|_| fmt::Error)?;
        if numerator >= lower && numerator <= denominator {
            return write!(f, "{numerator}/{denominator}");
        }

        let whole = numerator.checked_div(denominator).map_err(|_| fmt::Error)?;
        let remainder = numerator
            .checked_rem(denominator)
            .and_then(Number::checked_abs)
            .map_err(|_| fmt::Error)?;

        if remainder.is_zero() {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole} {remainder}/{denominator}")
        }
    }
}

// ---------------------------------- parsing ----------------------------------

impl<I> FromStr for Fraction<I>
where
    I: Number + FromStr,
    <I as FromStr>::Err: Display,
{
    type Err = MathError;

    /// Parses either display form.
    ///
    /// Possible inputs: "3", "-3/4", "6/-8", "1 1/2", "-2 3/4".
    /// Disallowed: "", "1/0", "1/2/3", "-1 -1/2", "1 1/2 3".
    ///
    /// In a mixed number the leading sign applies to the whole value, and the
    /// fractional part must be unsigned.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split_whitespace();

        let Some(first) = parts.next() else {
            return Err(MathError::parse_number::<Self, _, _>(input, "empty string"));
        };

        match (parts.next(), parts.next()) {
            (None, _) => parse_simple(input, first),
            (Some(fractional), None) => parse_mixed(input, first, fractional),
            (Some(_), Some(_)) => Err(MathError::parse_number::<Self, _, _>(
                input,
                "unexpected number of parts",
            )),
        }
    }
}

fn parse_simple<I>(input: &str, part: &str) -> MathResult<Fraction<I>>
where
    I: Number + FromStr,
    <I as FromStr>::Err: Display,
{
    let (numerator, denominator) = match part.split_once('/') {
        Some((numerator, denominator)) => (
            parse_integer(input, numerator)?,
            parse_integer(input, denominator)?,
        ),
        None => (parse_integer(input, part)?, I::ONE),
    };

    Fraction::checked_new(numerator, denominator)
        .map_err(|err| MathError::parse_number::<Fraction<I>, _, _>(input, err))
}

fn parse_mixed<I>(input: &str, whole: &str, fractional: &str) -> MathResult<Fraction<I>>
where
    I: Number + FromStr,
    <I as FromStr>::Err: Display,
{
    let (negative, whole) = match whole.strip_prefix('-') {
        Some(whole) => (true, whole),
        None => (false, whole),
    };

    let Some((numerator, denominator)) = fractional.split_once('/') else {
        return Err(MathError::parse_number::<Fraction<I>, _, _>(
            input,
            "missing fractional part",
        ));
    };

    let whole: I = parse_unsigned(input, whole)?;
    let numerator: I = parse_unsigned(input, numerator)?;
    let denominator = parse_unsigned(input, denominator)?;

    // Negate the parts rather than the result, so that values down to
    // `I::MIN` parse.
    let frac = if negative {
        whole.checked_neg().and_then(|whole| {
            Fraction::checked_new_mixed(whole, numerator.checked_neg()?, denominator)
        })
    } else {
        Fraction::checked_new_mixed(whole, numerator, denominator)
    };

    frac.map_err(|err| MathError::parse_number::<Fraction<I>, _, _>(input, err))
}

fn parse_unsigned<I>(input: &str, part: &str) -> MathResult<I>
where
    I: Number + FromStr,
    <I as FromStr>::Err: Display,
{
    if part.starts_with(['-', '+']) {
        return Err(MathError::parse_number::<Fraction<I>, _, _>(
            input,
            "sign inside a mixed number",
        ));
    }

    parse_integer(input, part)
}

fn parse_integer<I>(input: &str, part: &str) -> MathResult<I>
where
    I: Number + FromStr,
    <I as FromStr>::Err: Display,
{
    part.parse()
        .map_err(|err| MathError::parse_number::<Fraction<I>, _, _>(input, err))
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::{
            frac_test,
            test_utils::{frac, ResultExt},
            Fraction, Fraction32, Fraction64, MathError, MathResult, Number,
        },
        std::{fmt::Display, str::FromStr},
        test_case::test_case,
    };

    #[test_case(1, 2, "1/2"; "proper")]
    #[test_case(3, 5, "3/5"; "another proper")]
    #[test_case(0, 1, "0"; "zero")]
    #[test_case(0, -9, "0"; "zero over negative")]
    #[test_case(-1, 9, "-1/9"; "negative numerator")]
    #[test_case(2, -11, "-2/11"; "negative denominator")]
    #[test_case(-1, -2, "1/2"; "both negative")]
    #[test_case(11, 2, "11/2"; "improper")]
    #[test_case(4, 2, "2/1"; "integer")]
    #[test_case(-5, 5, "-1/1"; "negative one")]
    fn displaying_canonical(n: i32, d: i32, expect: &str) {
        assert_eq!(Fraction32::checked_new(n, d).unwrap().to_string(), expect);
    }

    #[test_case(0, 1, "0"; "zero")]
    #[test_case(1, 3, "1/3"; "proper")]
    #[test_case(-1, 3, "-1/3"; "negative proper")]
    #[test_case(1, 1, "1/1"; "one")]
    #[test_case(-1, 1, "-1/1"; "negative one")]
    #[test_case(11, 2, "5 1/2"; "improper")]
    #[test_case(-7, 2, "-3 1/2"; "negative improper")]
    #[test_case(4, 3, "1 1/3"; "just above one")]
    #[test_case(-4, 3, "-1 1/3"; "just below negative one")]
    #[test_case(8, 2, "4"; "whole number")]
    #[test_case(-9, 3, "-3"; "negative whole number")]
    fn displaying_mixed(n: i32, d: i32, expect: &str) {
        let frac = Fraction32::checked_new(n, d).unwrap();
        assert_eq!(frac.as_mixed().to_string(), expect);
    }

    #[test]
    fn displaying_extremes() {
        let max = Fraction64::from(i64::MAX);
        assert_eq!(max.to_string(), format!("{}/1", i64::MAX));
        assert_eq!(max.as_mixed().to_string(), i64::MAX.to_string());

        let tiny = Fraction64::checked_new(-1, i64::MAX).unwrap();
        assert_eq!(tiny.as_mixed().to_string(), format!("-1/{}", i64::MAX));
    }

    #[test_case("3", Ok((3, 1)); "integer")]
    #[test_case("-3", Ok((-3, 1)); "negative integer")]
    #[test_case("6/8", Ok((3, 4)); "reduces")]
    #[test_case("6/-8", Ok((-3, 4)); "negative denominator")]
    #[test_case("-1/-2", Ok((1, 2)); "both negative")]
    #[test_case("0", Ok((0, 1)); "zero")]
    #[test_case("1 1/2", Ok((3, 2)); "mixed")]
    #[test_case("-2 3/4", Ok((-11, 4)); "negative mixed")]
    #[test_case("  5 2/4 ", Ok((11, 2)); "mixed with extra whitespace")]
    #[test_case("0 1/2", Ok((1, 2)); "mixed with zero whole")]
    #[test_case("-0 1/2", Ok((-1, 2)); "negative mixed with zero whole")]
    #[test_case("-715827882 2/3", Ok((i32::MIN, 3)); "mixed down to min")]
    #[test_case("-2147483648/1", Ok((i32::MIN, 1)); "min")]
    #[test_case("-2147483648/2", Ok((-(1 << 30), 1)); "min reduces")]
    #[test_case("2147483648/2", Err("too large"); "past max")]
    #[test_case("715827882 2/3", Err("addition overflow"); "mixed past max")]
    #[test_case("", Err("empty string"); "empty")]
    #[test_case("1/0", Err("denominator cannot be zero"); "zero denominator")]
    #[test_case("1 1/0", Err("denominator cannot be zero"); "mixed zero denominator")]
    #[test_case("1/2/3", Err("invalid digit"); "too many slashes")]
    #[test_case("-1 -1/2", Err("sign inside a mixed number"); "signed fractional part")]
    #[test_case("--1 1/2", Err("sign inside a mixed number"); "double sign")]
    #[test_case("1 2", Err("missing fractional part"); "two integers")]
    #[test_case("1 1/2 3", Err("unexpected number of parts"); "too many parts")]
    #[test_case("a/2", Err("invalid digit"); "not a number")]
    #[test_case("99999999999/2", Err("too large"); "out of range")]
    fn parsing(input: &str, expect: Result<(i32, i32), &str>) {
        let result = Fraction32::from_str(input);
        match expect {
            Ok((n, d)) => {
                result.should_succeed_and_equal(Fraction32::checked_new(n, d).unwrap());
            },
            Err(reason) => {
                let err = result.should_fail_with_error(reason);
                assert!(matches!(err, MathError::ParseNumber { .. }));
            },
        }
    }

    fn parse_like<I>(_: Fraction<I>, input: &str) -> MathResult<Fraction<I>>
    where
        I: Number + FromStr,
        <I as FromStr>::Err: Display,
    {
        Fraction::from_str(input)
    }

    frac_test!( display_forms_parse_back
        inputs = [[(0, 1), (1, 2), (-1, 2), (11, 2), (-7, 3), (5, 1), (-1, 1), (22, 7)]]
        method = |zero: Fraction<_>, cases: [(i32, i32); 8]| {
            for (n, d) in cases {
                let frac = frac(zero, n, d);
                parse_like(frac, &frac.to_string()).should_succeed_and_equal(frac);
                parse_like(frac, &frac.as_mixed().to_string()).should_succeed_and_equal(frac);
            }
        }
    );
}
