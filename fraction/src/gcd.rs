use crate::{MathResult, Number};

/// Greatest common divisor of two integers, by the Euclidean algorithm. The
/// inputs may have any sign; the result is non-negative.
///
/// `gcd(0, b) == |b|`, so `gcd(0, 0) == 0`. Errors only if the result is
/// `|I::MIN|`, which happens when both inputs are `I::MIN`, or one is `I::MIN`
/// and the other zero.
pub fn gcd<I>(a: I, b: I) -> MathResult<I>
where
    I: Number,
{
    euclid(a, b)?.checked_abs()
}

/// Least common multiple of two non-negative integers.
///
/// Divides before multiplying, so this only overflows if the result itself
/// does not fit in `I`.
pub fn lcm<I>(a: I, b: I) -> MathResult<I>
where
    I: Number,
{
    if a.is_zero() || b.is_zero() {
        return Ok(I::ZERO);
    }

    a.checked_div(gcd(a, b)?)?.checked_mul(b)
}

/// A divisor of both `a` and `b` with the magnitude of their gcd, by which
/// each can be divided without overflow.
///
/// Positive, except when the gcd is `|I::MIN|`: then it is `I::MIN` itself,
/// and both inputs are `I::MIN` or zero.
pub(crate) fn common_divisor<I>(a: I, b: I) -> MathResult<I>
where
    I: Number,
{
    let divisor = euclid(a, b)?;

    if divisor.is_negative() && divisor != I::MIN {
        return divisor.checked_neg();
    }

    Ok(divisor)
}

/// Euclid on the signed values. The result is the gcd up to sign.
fn euclid<I>(mut a: I, mut b: I) -> MathResult<I>
where
    I: Number,
{
    let minus_one = I::ONE.checked_neg()?;

    while !b.is_zero() {
        // `I::MIN % -1` overflows, though every integer divides by -1.
        let rem = if b == minus_one {
            I::ZERO
        } else {
            a.checked_rem(b)?
        };
        a = b;
        b = rem;
    }

    Ok(a)
}

// ----------------------------------- tests -----------------------------------
