use {
    crate::{common_divisor, gcd, lcm, MathError, MathResult, Number, NumberConst},
    bnum::types::I256,
    borsh::BorshSerialize,
    std::{
        cmp::Ordering,
        iter::{Product, Sum},
        ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    },
};

// ------------------------------- generic type --------------------------------

/// An exact rational number, `numerator / denominator`, backed by the signed
/// integer `I`.
///
/// A `Fraction` is always in canonical form: numerator and denominator share
/// no common divisor greater than one, and the denominator is positive, so the
/// sign lives entirely in the numerator. Zero is `0/1`. Since the form is
/// unique, the derived equality and hash compare values.
///
/// ```rust
/// use fraction_math::Fraction32;
///
/// let half = Fraction32::checked_new(-2, -4).unwrap();
/// assert_eq!(half.numerator(), 1);
/// assert_eq!(half.denominator(), 2);
/// assert_eq!(half.to_string(), "1/2");
/// ```
#[derive(BorshSerialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction<I> {
    numerator: I,
    denominator: I,
}

impl<I> Fraction<I> {
    /// Create a fraction from parts that are already in canonical form.
    pub(crate) const fn new_raw(numerator: I, denominator: I) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl<I> Fraction<I>
where
    I: NumberConst,
{
    pub const ONE: Self = Self::new_raw(I::ONE, I::ONE);
    pub const ZERO: Self = Self::new_raw(I::ZERO, I::ONE);
}

impl<I> Fraction<I>
where
    I: Copy,
{
    pub fn numerator(&self) -> I {
        self.numerator
    }

    /// Always positive.
    pub fn denominator(&self) -> I {
        self.denominator
    }
}

impl<I> Fraction<I>
where
    I: Number,
{
    /// Create a fraction, reducing it to canonical form.
    ///
    /// Errors if the denominator is zero.
    pub fn checked_new(numerator: I, denominator: I) -> MathResult<Self> {
        if denominator.is_zero() {
            return Err(MathError::invalid_argument("denominator cannot be zero"));
        }

        if numerator.is_zero() {
            return Ok(Self::ZERO);
        }

        let divisor = common_divisor(numerator, denominator)?;
        let numerator = numerator.checked_div(divisor)?;
        let denominator = denominator.checked_div(divisor)?;

        // Fails only if the canonical form needs `-I::MIN` in either part.
        if denominator.is_negative() {
            return Ok(Self::new_raw(numerator.checked_neg()?, denominator.checked_neg()?));
        }

        Ok(Self::new_raw(numerator, denominator))
    }

    /// Create a fraction from a mixed number, `whole + numerator / denominator`.
    ///
    /// The whole part and the numerator must not have opposite signs, so
    /// `(3, -1, 4)` is rejected. Negative mixed numbers are written with both
    /// parts negative: `(-3, -1, 4)` is `-13/4`.
    pub fn checked_new_mixed(whole: I, numerator: I, denominator: I) -> MathResult<Self> {
        if denominator.is_zero() {
            return Err(MathError::invalid_argument("denominator cannot be zero"));
        }

        if (whole.is_negative() && numerator > I::ZERO)
            || (whole > I::ZERO && numerator.is_negative())
        {
            return Err(MathError::invalid_argument(format!(
                "whole number {whole} and numerator {numerator} have opposite signs"
            )));
        }

        let numerator = whole.checked_mul(denominator)?.checked_add(numerator)?;

        Self::checked_new(numerator, denominator)
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == I::ONE
    }

    /// Approximate the fraction as a float. Not suitable for comparing values.
    pub fn to_f64(&self) -> f64 {
        self.numerator.to_f64() / self.denominator.to_f64()
    }

    pub fn checked_neg(self) -> MathResult<Self> {
        Ok(Self::new_raw(self.numerator.checked_neg()?, self.denominator))
    }

    pub fn checked_abs(self) -> MathResult<Self> {
        Ok(Self::new_raw(self.numerator.checked_abs()?, self.denominator))
    }

    /// Swap numerator and denominator. Errors if the fraction is zero.
    pub fn checked_recip(self) -> MathResult<Self> {
        if self.numerator.is_zero() {
            return Err(MathError::division_by_zero(I::ONE));
        }

        Self::checked_new(self.denominator, self.numerator)
    }

    pub fn checked_add(self, other: Self) -> MathResult<Self> {
        let (lhs, rhs, denominator) = self.to_common_denominator(other)?;

        Self::checked_new(lhs.checked_add(rhs)?, denominator)
    }

    pub fn checked_sub(self, other: Self) -> MathResult<Self> {
        let (lhs, rhs, denominator) = self.to_common_denominator(other)?;

        Self::checked_new(lhs.checked_sub(rhs)?, denominator)
    }

    pub fn checked_mul(self, other: Self) -> MathResult<Self> {
        // Cross-reduce first. The canonical result is the same as multiplying
        // straight away, but the intermediate products are smaller.
        let lhs_gcd = gcd(self.numerator, other.denominator)?;
        let rhs_gcd = gcd(other.numerator, self.denominator)?;

        let numerator = self
            .numerator
            .checked_div(lhs_gcd)?
            .checked_mul(other.numerator.checked_div(rhs_gcd)?)?;
        let denominator = self
            .denominator
            .checked_div(rhs_gcd)?
            .checked_mul(other.denominator.checked_div(lhs_gcd)?)?;

        Self::checked_new(numerator, denominator)
    }

    /// Errors if `other` is zero.
    pub fn checked_div(self, other: Self) -> MathResult<Self> {
        if other.numerator.is_zero() {
            return Err(MathError::division_by_zero(self));
        }

        // Cross-reduce like `checked_mul`, without forming the reciprocal of
        // `other`, which may not fit (`1 / I::MIN`) even when the quotient does.
        let numerators = common_divisor(self.numerator, other.numerator)?;
        let denominators = gcd(self.denominator, other.denominator)?;

        let numerator = self
            .numerator
            .checked_div(numerators)?
            .checked_mul(other.denominator.checked_div(denominators)?)?;
        let denominator = self
            .denominator
            .checked_div(denominators)?
            .checked_mul(other.numerator.checked_div(numerators)?)?;

        Self::checked_new(numerator, denominator)
    }

    /// Raise to an integer power. A negative exponent raises the reciprocal.
    ///
    /// Any base to the power of zero is one, including zero itself.
    pub fn checked_pow(self, exponent: i32) -> MathResult<Self> {
        let exp = exponent.unsigned_abs();
        let numerator = self.numerator.checked_pow(exp)?;
        let denominator = self.denominator.checked_pow(exp)?;

        // Powers of coprime integers are coprime, and the denominator stays
        // positive, so the non-negative case is already canonical.
        if exponent >= 0 {
            return Ok(Self::new_raw(numerator, denominator));
        }

        if numerator.is_zero() {
            return Err(MathError::division_by_zero(denominator));
        }

        Self::checked_new(denominator, numerator)
    }

    /// Scale both numerators to the least common multiple of the denominators.
    fn to_common_denominator(self, other: Self) -> MathResult<(I, I, I)> {
        let denominator = lcm(self.denominator, other.denominator)?;
        let lhs = self
            .numerator
            .checked_mul(denominator.checked_div(self.denominator)?)?;
        let rhs = other
            .numerator
            .checked_mul(denominator.checked_div(other.denominator)?)?;

        Ok((lhs, rhs, denominator))
    }
}

impl<I> Default for Fraction<I>
where
    I: NumberConst,
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<I> From<I> for Fraction<I>
where
    I: NumberConst,
{
    fn from(value: I) -> Self {
        Self::new_raw(value, I::ONE)
    }
}

// --------------------------------- ordering ----------------------------------

impl<I> PartialOrd for Fraction<I>
where
    I: Number,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I> Ord for Fraction<I>
where
    I: Number,
{
    /// Exact comparison. Cross-multiplying could overflow, so compare the
    /// floored integer parts first, then the reciprocals of the remainders.
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_positive_denominators(
            self.numerator,
            self.denominator,
            other.numerator,
            other.denominator,
        )
    }
}

fn cmp_positive_denominators<I>(lhs_num: I, lhs_den: I, rhs_num: I, rhs_den: I) -> Ordering
where
    I: Number,
{
    if lhs_den == rhs_den {
        return lhs_num.cmp(&rhs_num);
    }

    let (lhs_int, lhs_rem) = floor_div_rem(lhs_num, lhs_den);
    let (rhs_int, rhs_rem) = floor_div_rem(rhs_num, rhs_den);

    match lhs_int.cmp(&rhs_int) {
        Ordering::Equal => match (lhs_rem.is_zero(), rhs_rem.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // Both remainders lie strictly between zero and their denominator,
            // so the reciprocals again have positive denominators.
            (false, false) => cmp_positive_denominators(lhs_den, lhs_rem, rhs_den, rhs_rem).reverse(),
        },
        ordering => ordering,
    }
}

/// Floored division by a positive denominator; the remainder is non-negative.
fn floor_div_rem<I>(numerator: I, denominator: I) -> (I, I)
where
    I: Number,
{
    // Safe because the denominator is positive, and a negative remainder means
    // the quotient is above `I::MIN` and the remainder above `-denominator`.
    let quotient = numerator.checked_div(denominator).unwrap();
    let remainder = numerator.checked_rem(denominator).unwrap();

    if remainder.is_negative() {
        (
            quotient.checked_sub(I::ONE).unwrap(),
            remainder.checked_add(denominator).unwrap(),
        )
    } else {
        (quotient, remainder)
    }
}

// --------------------------------- operators ---------------------------------

impl<I> Neg for Fraction<I>
where
    I: Number,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.checked_neg().unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<I> Add for Fraction<I>
where
    I: Number,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<I> Sub for Fraction<I>
where
    I: Number,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<I> Mul for Fraction<I>
where
    I: Number,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<I> Div for Fraction<I>
where
    I: Number,
{
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<I> AddAssign for Fraction<I>
where
    I: Number,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<I> SubAssign for Fraction<I>
where
    I: Number,
{
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<I> MulAssign for Fraction<I>
where
    I: Number,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<I> DivAssign for Fraction<I>
where
    I: Number,
{
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<I> Sum for Fraction<I>
where
    I: Number,
{
    fn sum<T>(iter: T) -> Self
    where
        T: Iterator<Item = Self>,
    {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<I> Product for Fraction<I>
where
    I: Number,
{
    fn product<T>(iter: T) -> Self
    where
        T: Iterator<Item = Self>,
    {
        iter.fold(Self::ONE, Mul::mul)
    }
}

// ------------------------------ concrete types -------------------------------

/// Fraction of two 32-bit signed integers.
pub type Fraction32 = Fraction<i32>;

/// Fraction of two 64-bit signed integers.
pub type Fraction64 = Fraction<i64>;

/// Fraction of two 128-bit signed integers.
pub type Fraction128 = Fraction<i128>;

/// Fraction of two 256-bit signed integers.
pub type Fraction256 = Fraction<I256>;

// ----------------------------------- tests -----------------------------------
