use std::{
    fmt,
    ops::{Add, Sub},
};

use rust_decimal::{prelude::FromPrimitive, Decimal, RoundingStrategy};

use crate::error::Error;

/// Number of fractional digits every amount is kept at.
pub const SCALE: u32 = 2;

/// An exact monetary value with two fractional digits.
///
/// Amounts are plain values: arithmetic never rounds (both sides already sit at
/// the same scale) and intermediate results are allowed to go negative, which is
/// how an overdraft gets detected before anything is committed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Builds an amount out of a float literal, e.g. `Amount::of(157.83)`.
    /// Fails for NaN, infinities and magnitudes `Decimal` can't hold.
    pub fn of(value: f64) -> Result<Self, Error> {
        Decimal::from_f64(value)
            .map(Amount::from)
            .ok_or_else(|| Error::InvalidAmount(value.to_string()))
    }

    pub fn add(self, other: Amount) -> Amount {
        Amount(self.0 + other.0)
    }

    pub fn subtract(self, other: Amount) -> Amount {
        Amount(self.0 - other.0)
    }

    /// Like [`Amount::add`], but fails instead of overflowing.
    pub fn checked_add(self, other: Amount) -> Result<Amount, Error> {
        self.0
            .checked_add(other.0)
            .map(Amount)
            .ok_or_else(|| Error::InvalidAmount(format!("{} + {}", self.0, other.0)))
    }

    /// Like [`Amount::subtract`], but fails instead of overflowing.
    pub fn checked_subtract(self, other: Amount) -> Result<Amount, Error> {
        self.0
            .checked_sub(other.0)
            .map(Amount)
            .ok_or_else(|| Error::InvalidAmount(format!("{} - {}", self.0, other.0)))
    }

    /// `rate` percent of this amount, e.g. `10` yields a tenth.
    pub fn percent(self, rate: Decimal) -> Result<Amount, Error> {
        self.0
            .checked_mul(rate)
            .and_then(|product| product.checked_div(Decimal::new(100, 0)))
            .map(Amount::from)
            .ok_or_else(|| Error::InvalidAmount(format!("{}% of {}", rate, self.0)))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// The value padded to exactly two fractional digits.
    pub fn as_decimal(&self) -> Decimal {
        let mut value = self.0;
        value.rescale(SCALE);
        value
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero))
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount::add(self, other)
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, other: Amount) -> Amount {
        self.subtract(other)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Amount::add)
    }
}

/// Renders the way a French statement does: `157,83€`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}€", self.as_decimal().to_string().replace('.', ","))
    }
}
