use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    amount::Amount,
    error::Error,
    ledger::{Instruction, InstructionKind},
};

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
enum ParsedInstructionKind {
    Open,
    Deposit,
    Withdraw,
    Transfer,
    Interest,
}

#[derive(Deserialize, Debug, PartialEq)]
struct ParsedInstruction {
    #[serde(rename = "type")]
    kind: ParsedInstructionKind,
    account: String,
    amount: Option<Decimal>,
    target: Option<String>,
}

fn required<T>(value: Option<T>, message: &str) -> Result<T, Error> {
    value.ok_or_else(|| Error::ParsingFailure(message.to_string()))
}

/// Reads `type, account, amount, target` records.
/// For `interest` the amount column holds the rate, in percent.
pub fn parse<R>(rdr: csv::Reader<R>) -> impl Iterator<Item = Result<Instruction, Error>>
where
    R: std::io::Read,
{
    rdr.into_deserialize::<ParsedInstruction>().map(|parsed| {
        let parsed = parsed.map_err(|e| Error::ParsingFailure(e.to_string()))?;

        // `csv` can't deserialize internally tagged enums, so the required
        // columns of each kind are checked here.
        let kind = match parsed.kind {
            ParsedInstructionKind::Open => {
                let balance = required(parsed.amount, "open instruction must have amount")?;
                if balance < Decimal::ZERO {
                    return Err(Error::ParsingFailure(
                        "opening balance must not be negative".to_string(),
                    ));
                }
                InstructionKind::Open {
                    balance: Amount::from(balance),
                }
            }
            ParsedInstructionKind::Deposit => InstructionKind::Deposit {
                amount: Amount::from(required(
                    parsed.amount,
                    "deposit instruction must have amount",
                )?),
            },
            ParsedInstructionKind::Withdraw => InstructionKind::Withdraw {
                amount: Amount::from(required(
                    parsed.amount,
                    "withdraw instruction must have amount",
                )?),
            },
            ParsedInstructionKind::Transfer => InstructionKind::Transfer {
                target: required(parsed.target, "transfer instruction must have target")?,
                amount: Amount::from(required(
                    parsed.amount,
                    "transfer instruction must have amount",
                )?),
            },
            ParsedInstructionKind::Interest => InstructionKind::Interest {
                rate: required(parsed.amount, "interest instruction must have a rate")?,
            },
        };
        Ok(Instruction {
            account: parsed.account,
            kind,
        })
    })
}
