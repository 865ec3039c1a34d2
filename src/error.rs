use rust_decimal::Decimal;
use thiserror::Error;

use crate::amount::Amount;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("amount {requested} is under the minimum allowed, it must be greater than {}", Amount::ZERO)]
    MinimumAmount { requested: Amount },
    #[error("operation of {requested} would overdraw the account, available: {available}")]
    Overdraft { available: Amount, requested: Amount },
    #[error("`{0}` is not a representable amount")]
    InvalidAmount(String),
    #[error("interest rate `{0}` must not be negative")]
    InvalidRate(Decimal),
    #[error("account `{0}` already exists")]
    AccountExists(String),
    #[error("failed to parse input, reason: `{0}`")]
    ParsingFailure(String),
}
