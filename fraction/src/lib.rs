mod encoding;
mod error;
mod format;
mod fraction;
mod gcd;
mod is_zero;
mod number;
mod number_const;

pub use {error::*, format::*, fraction::*, gcd::*, is_zero::*, number::*, number_const::*};

// ---------------------------------- testing ----------------------------------

#[cfg(test)]
mod test_utils;

// -------------------------------- re-exports ---------------------------------

pub use bnum::types::I256;
