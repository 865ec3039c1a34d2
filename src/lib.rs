pub mod account;
pub mod amount;
pub mod error;
pub mod ledger;
pub mod operation;
pub mod parser;
pub mod transaction;

pub use account::{Account, AccountId};
pub use amount::Amount;
pub use error::Error;
pub use operation::Operation;
pub use transaction::{Transaction, TransactionKind, TransactionLog};
