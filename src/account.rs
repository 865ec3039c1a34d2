use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, MutexGuard};
use rust_decimal::Decimal;

use crate::{
    amount::Amount,
    error::Error,
    operation::Operation,
    transaction::{Transaction, TransactionLog},
};

static NEXT_ACCOUNT_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique account identity. Locks on two accounts are always taken in
/// increasing id order.
pub type AccountId = u64;

#[derive(Debug)]
struct Book {
    balance: Amount,
    transactions: TransactionLog,
}

/// What a committed operation did to the account it was applied on.
struct Applied {
    amount: Amount,
    balance: Amount,
}

impl Book {
    fn ensure_positive(amount: Amount) -> Result<(), Error> {
        if !amount.is_positive() {
            return Err(Error::MinimumAmount { requested: amount });
        }
        Ok(())
    }

    /// Balance left once `amount` is taken out, if that doesn't overdraw.
    fn balance_after_debit(&self, amount: Amount) -> Result<Amount, Error> {
        let remaining = self.balance.checked_subtract(amount)?;
        if remaining.is_negative() {
            return Err(Error::Overdraft {
                available: self.balance,
                requested: amount,
            });
        }
        Ok(remaining)
    }

    fn balance_after_credit(&self, amount: Amount) -> Result<Amount, Error> {
        self.balance.checked_add(amount)
    }

    fn commit(&mut self, balance: Amount, transaction: Transaction) -> Applied {
        self.balance = balance;
        self.transactions.record(transaction);
        Applied {
            amount: transaction.amount(),
            balance,
        }
    }

    fn try_deposit(&mut self, amount: Amount) -> Result<Applied, Error> {
        Self::ensure_positive(amount)?;
        let balance = self.balance_after_credit(amount)?;
        Ok(self.commit(balance, Transaction::deposit(amount)))
    }

    /// Only overdraft is checked: a negative withdrawal goes through and raises
    /// the balance.
    fn try_withdraw(&mut self, amount: Amount) -> Result<Applied, Error> {
        let balance = self.balance_after_debit(amount)?;
        Ok(self.commit(balance, Transaction::withdraw(amount)))
    }

    fn try_interest(&mut self, rate: Decimal) -> Result<Applied, Error> {
        if rate < Decimal::ZERO {
            return Err(Error::InvalidRate(rate));
        }
        let interest = self.balance.percent(rate)?;
        let balance = self.balance_after_credit(interest)?;
        Ok(self.commit(balance, Transaction::deposit(interest)))
    }

    /// Both legs are validated before either book is touched.
    fn try_transfer(source: &mut Book, target: &mut Book, amount: Amount) -> Result<Applied, Error> {
        Self::ensure_positive(amount)?;
        let source_balance = source.balance_after_debit(amount)?;
        let target_balance = target.balance_after_credit(amount)?;
        target.commit(target_balance, Transaction::deposit(amount));
        Ok(source.commit(source_balance, Transaction::withdraw(amount)))
    }

    fn try_self_transfer(&mut self, amount: Amount) -> Result<Applied, Error> {
        Self::ensure_positive(amount)?;
        let (before, remaining) = (self.balance, self.balance_after_debit(amount)?);
        self.commit(remaining, Transaction::withdraw(amount));
        Ok(self.commit(before, Transaction::deposit(amount)))
    }
}

/// A single account: a balance plus the history that produced it.
///
/// The only way to change either is [`Account::apply`]. All state sits behind
/// one mutex, so an account can be shared between threads (e.g. in an `Arc`)
/// and concurrent operations on it serialize.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    book: Mutex<Book>,
}

impl Default for Account {
    fn default() -> Self {
        Self::empty()
    }
}

impl Account {
    pub fn empty() -> Self {
        Self::with_balance(Amount::ZERO)
    }

    /// Opens an account already holding `balance`, recorded as its first
    /// deposit unless it is zero.
    pub fn with_balance(balance: Amount) -> Self {
        let mut transactions = TransactionLog::new();
        if balance != Amount::ZERO {
            transactions.record(Transaction::deposit(balance));
        }
        Self {
            id: NEXT_ACCOUNT_ID.fetch_add(1, Ordering::Relaxed),
            book: Mutex::new(Book {
                balance,
                transactions,
            }),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn balance(&self) -> Amount {
        self.book.lock().balance
    }

    /// Snapshot of the history. Recording into it doesn't affect the account.
    pub fn transactions(&self) -> TransactionLog {
        self.book.lock().transactions.clone()
    }

    /// Validates `operation` and, only if every rule holds, commits it.
    /// On error neither this account nor a transfer target is modified.
    pub fn apply(&self, operation: Operation<'_>) -> Result<(), Error> {
        let result = match operation {
            Operation::Deposit { amount } => self.book.lock().try_deposit(amount),
            Operation::Withdraw { amount } => self.book.lock().try_withdraw(amount),
            Operation::Interest { rate } => self.book.lock().try_interest(rate),
            Operation::Transfer { target, amount } if target.id == self.id => {
                self.book.lock().try_self_transfer(amount)
            }
            Operation::Transfer { target, amount } => {
                let (mut source, mut target) = self.lock_pair(target);
                Book::try_transfer(&mut source, &mut target, amount)
            }
        };

        match result {
            Ok(applied) => {
                tracing::debug!(
                    account = self.id,
                    operation = operation.name(),
                    amount = %applied.amount,
                    balance = %applied.balance,
                    "operation applied"
                );
                Ok(())
            }
            Err(error) => {
                tracing::debug!(
                    account = self.id,
                    operation = operation.name(),
                    %error,
                    "operation rejected"
                );
                Err(error)
            }
        }
    }

    /// Locks `self` and `other`, lower id first, returned as (self, other).
    fn lock_pair<'a>(&'a self, other: &'a Account) -> (MutexGuard<'a, Book>, MutexGuard<'a, Book>) {
        if self.id < other.id {
            let mine = self.book.lock();
            let theirs = other.book.lock();
            (mine, theirs)
        } else {
            let theirs = other.book.lock();
            let mine = self.book.lock();
            (mine, theirs)
        }
    }
}
