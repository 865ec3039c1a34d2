use ledger::{ledger::Ledger, parser::parse};

fn process_and_dump(input: &str) -> String {
    let mut ledger = Ledger::default();

    let rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    for instruction in parse(rdr) {
        let _ = ledger.apply(instruction.unwrap()); // ignore errors
    }

    let mut output = Vec::<u8>::new();
    ledger.serialize(&mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn empty() {
    assert_eq!(process_and_dump("type,account,amount,target"), "");
}

#[test]
fn one_deposit() {
    assert_eq!(
        process_and_dump(
            r#"type,account,amount,target
            deposit, alice, 1.0,"#
        ),
        ["account,balance", "alice,1.00", ""].join("\n")
    );
}

#[test]
fn rejected_deposit_still_creates_account() {
    assert_eq!(
        process_and_dump(
            r#"type,account,amount,target
            deposit, alice, 0,"#
        ),
        ["account,balance", "alice,0.00", ""].join("\n")
    );
}

#[test]
fn overdraft_is_ignored() {
    assert_eq!(
        process_and_dump(
            r#"type,account,amount,target
            open, alice, 5,
            withdraw, alice, 10,
            transfer, alice, 6, bob"#
        ),
        r#"account,balance
        alice, 5.00
        bob, 0.00
        "#
        .replace(' ', "")
    );
}

#[test]
fn reopening_keeps_history() {
    assert_eq!(
        process_and_dump(
            r#"type,account,amount,target
            open, alice, 10,
            deposit, alice, 5,
            open, alice, 100,"#
        ),
        ["account,balance", "alice,15.00", ""].join("\n")
    );
}

#[test]
fn sophisticated() {
    assert_eq!(
        process_and_dump(
            r#"type,account,amount,target
            open, alice, 157.83,
            open, bob, 20,
            deposit, carol, 10,
            transfer, bob, 20, carol
            interest, carol, 10.00,
            withdraw, alice, 57.83,
            interest, alice, 2.5,
            transfer, carol, 33, alice
            transfer, carol, 0, alice"#
        ),
        r#"account,balance
        alice, 135.50
        bob, 0.00
        carol, 0.00
        "#
        .replace(' ', "")
    );
}
