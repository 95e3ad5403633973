use {
    crate::{Fraction, Number},
    borsh::BorshDeserialize,
    serde::{de, ser},
    std::{
        fmt::{self, Display},
        io,
        marker::PhantomData,
        str::FromStr,
    },
};

// ----------------------------------- serde -----------------------------------

impl<I> ser::Serialize for Fraction<I>
where
    Self: Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, I> de::Deserialize<'de> for Fraction<I>
where
    Fraction<I>: FromStr,
    <Fraction<I> as FromStr>::Err: Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(FractionVisitor::new())
    }
}

struct FractionVisitor<I> {
    _marker: PhantomData<I>,
}

impl<I> FractionVisitor<I> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<I> de::Visitor<'_> for FractionVisitor<I>
where
    Fraction<I>: FromStr,
    <Fraction<I> as FromStr>::Err: Display,
{
    type Value = Fraction<I>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string-encoded fraction")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Fraction::from_str(v).map_err(E::custom)
    }
}

// ----------------------------------- borsh -----------------------------------

// Serialization is derived: numerator, then denominator. Decoding accepts only
// the canonical pair, so every value has exactly one encoding.
impl<I> BorshDeserialize for Fraction<I>
where
    I: Number + BorshDeserialize,
{
    fn deserialize_reader<R>(reader: &mut R) -> io::Result<Self>
    where
        R: io::Read,
    {
        let numerator = I::deserialize_reader(reader)?;
        let denominator = I::deserialize_reader(reader)?;

        let frac = Fraction::checked_new(numerator, denominator).map_err(io::Error::other)?;

        if frac.numerator() != numerator || frac.denominator() != denominator {
            return Err(io::Error::other(format!(
                "fraction {numerator}/{denominator} is not in canonical form"
            )));
        }

        Ok(frac)
    }
}

// ----------------------------------- tests -----------------------------------
