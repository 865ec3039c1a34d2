use crate::amount::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

/// A committed effect on an account's balance.
///
/// Transfers and interest don't have kinds of their own, they are recorded as
/// the deposits and withdrawals they boil down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Amount,
}

impl Transaction {
    pub fn deposit(amount: Amount) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            amount,
        }
    }

    pub fn withdraw(amount: Amount) -> Self {
        Self {
            kind: TransactionKind::Withdraw,
            amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Effect on the balance: positive for deposits, negative for withdrawals.
    pub fn signed_amount(&self) -> Amount {
        match self.kind {
            TransactionKind::Deposit => self.amount,
            TransactionKind::Withdraw => Amount::ZERO.subtract(self.amount),
        }
    }
}

/// Append-only history of transactions, in the order they were committed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransactionLog {
    transactions: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn size(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// Sum of all deposits minus sum of all withdrawals.
    pub fn net(&self) -> Amount {
        self.iter().map(Transaction::signed_amount).sum()
    }
}

impl FromIterator<Transaction> for TransactionLog {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self {
            transactions: iter.into_iter().collect(),
        }
    }
}
