use itertools::Itertools;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{hash_map::Entry, HashMap};

use crate::{account::Account, amount::Amount, error::Error, operation::Operation};

pub type AccountName = String;

#[derive(Debug, PartialEq)]
pub enum InstructionKind {
    Open { balance: Amount },
    Deposit { amount: Amount },
    Withdraw { amount: Amount },
    Transfer { target: AccountName, amount: Amount },
    Interest { rate: Decimal },
}

/// One line of input: what to do, and on which account.
#[derive(Debug, PartialEq)]
pub struct Instruction {
    pub account: AccountName,
    pub kind: InstructionKind,
}

#[derive(Serialize)]
struct BalanceRow<'a> {
    account: &'a str,
    balance: Decimal,
}

/// Named accounts, opened explicitly or created empty on first reference.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<AccountName, Account>,
}

impl Ledger {
    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.get(name)
    }

    fn open(&mut self, name: AccountName, balance: Amount) -> Result<(), Error> {
        match self.accounts.entry(name) {
            Entry::Occupied(entry) => Err(Error::AccountExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                tracing::debug!(account = %entry.key(), %balance, "account opened");
                entry.insert(Account::with_balance(balance));
                Ok(())
            }
        }
    }

    fn get_or_create(&mut self, name: &str) -> &Account {
        self.accounts
            .entry(name.to_string())
            .or_insert_with(Account::empty)
    }

    /// Apply an instruction
    pub fn apply(&mut self, instruction: Instruction) -> Result<(), Error> {
        let Instruction { account, kind } = instruction;
        let operation = match kind {
            InstructionKind::Open { balance } => return self.open(account, balance),
            InstructionKind::Deposit { amount } => Operation::deposit(amount),
            InstructionKind::Withdraw { amount } => Operation::withdraw(amount),
            InstructionKind::Interest { rate } => Operation::interest(rate),
            InstructionKind::Transfer { target, amount } => {
                self.get_or_create(&target);
                self.get_or_create(&account);
                let source = &self.accounts[&account];
                return source.apply(Operation::transfer(&self.accounts[&target], amount));
            }
        };
        self.get_or_create(&account).apply(operation)
    }

    /// Serialize every account's balance to CSV, sorted by account name.
    pub fn serialize(&self, output: impl std::io::Write) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = csv::Writer::from_writer(output);
        for (name, account) in self.accounts.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
            writer.serialize(BalanceRow {
                account: name,
                balance: account.balance().as_decimal(),
            })?
        }
        writer.flush()?;
        Ok(())
    }
}
