use rust_decimal::Decimal;

use crate::{account::Account, amount::Amount};

/// A requested state transition, handed to [`Account::apply`].
///
/// Each variant brings what its own validation and effect need; nothing is
/// mutated until the account has checked every rule the variant carries.
#[derive(Debug, Clone, Copy)]
pub enum Operation<'a> {
    Deposit { amount: Amount },
    Withdraw { amount: Amount },
    Transfer { target: &'a Account, amount: Amount },
    /// `rate` is a percentage: `10` adds a tenth of the balance.
    Interest { rate: Decimal },
}

impl<'a> Operation<'a> {
    pub fn deposit(amount: Amount) -> Self {
        Operation::Deposit { amount }
    }

    pub fn withdraw(amount: Amount) -> Self {
        Operation::Withdraw { amount }
    }

    pub fn transfer(target: &'a Account, amount: Amount) -> Self {
        Operation::Transfer { target, amount }
    }

    pub fn interest(rate: Decimal) -> Self {
        Operation::Interest { rate }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Deposit { .. } => "deposit",
            Operation::Withdraw { .. } => "withdraw",
            Operation::Transfer { .. } => "transfer",
            Operation::Interest { .. } => "interest",
        }
    }
}
