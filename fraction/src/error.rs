use {std::any::type_name, thiserror::Error};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("division by zero: {a} / 0")]
    DivisionByZero { a: String },

    #[error("addition overflow: {a} + {b} > {ty}::MAX")]
    OverflowAdd {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("subtraction overflow: {a} - {b} < {ty}::MIN")]
    OverflowSub {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("multiplication overflow: {a} * {b} > {ty}::MAX")]
    OverflowMul {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("power overflow: {a} ^ {b} > {ty}::MAX")]
    OverflowPow {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("negation overflow: -({a}) > {ty}::MAX")]
    OverflowNeg { ty: &'static str, a: String },

    #[error("failed to parse string `{input}` into {ty}: {reason}")]
    ParseNumber {
        ty: &'static str,
        input: String,
        reason: String,
    },
}

impl MathError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn division_by_zero(a: impl ToString) -> Self {
        Self::DivisionByZero { a: a.to_string() }
    }

    pub fn overflow_add<T: ToString>(a: T, b: T) -> Self {
        Self::OverflowAdd {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_sub<T: ToString>(a: T, b: T) -> Self {
        Self::OverflowSub {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_mul<T: ToString>(a: T, b: T) -> Self {
        Self::OverflowMul {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_pow<T: ToString>(a: T, b: u32) -> Self {
        Self::OverflowPow {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_neg<T: ToString>(a: T) -> Self {
        Self::OverflowNeg {
            ty: type_name::<T>(),
            a: a.to_string(),
        }
    }

    pub fn parse_number<T, V, R>(input: V, reason: R) -> Self
    where
        V: ToString,
        R: ToString,
    {
        Self::ParseNumber {
            ty: type_name::<T>(),
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type MathResult<T> = Result<T, MathError>;
