use std::io::Write;

use assert_cmd::Command;
use predicates as pred;
use tempfile::NamedTempFile;

fn script(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{}", contents).unwrap();
    file
}

fn neo_ledger() -> Command {
    let exe = env!("CARGO_BIN_EXE_neo-ledger");
    let mut cmd = Command::new(exe);
    cmd.env_remove("NEO_CURRENCY")
        .env_remove("NEO_LOCALE")
        .args(["--transfer-delay-ms", "0", "--bill-delay-ms", "0"]);
    cmd
}

#[test]
fn end_to_end_replays_operations_and_prints_balances() {
    // Prime Savings: 125000 - 500 (transfer) - 1850 (electricity) = 122650
    // the second electricity payment is a conflict and changes nothing
    let file = script(
        "op,from,to,amount,bill,text\n\
         transfer,Prime Savings,External,500,,rent\n\
         ask,,,,,What is my balance?\n\
         pay_bill,,,,1,\n\
         pay_bill,,,,1,\n\
         transfer,Prime Savings,External,9999999,,\n\
         bogus,,,,,\n\
         ask,,,,,show recent transactions\n\
         ask,,,,,xyz unmatched\n",
    );

    neo_ledger()
        .arg(file.path())
        .assert()
        .success()
        .stdout(pred::str::contains("Your total balance is ₹11,99,500.00."))
        .stdout(pred::str::contains("Prime Savings: ₹1,24,500.00"))
        .stdout(pred::str::contains(
            "Recent transactions:\n\
             - ₹1,850.00 debited (Payment for Electricity)\n\
             - ₹500.00 debited (Transfer to External)\n\
             - ₹5,000.00 credited (Salary Deposit)",
        ))
        .stdout(pred::str::contains("I can help with:\n1. Account balances"))
        .stdout(pred::str::contains("account,number,type,balance"))
        .stdout(pred::str::contains("Prime Savings,****7890,savings,122650.00"))
        .stdout(pred::str::contains("Global Advantage,****4567,current,325000.00"))
        .stdout(pred::str::contains("Future Investments,****2345,investment,750000.00"));
}

#[test]
fn currency_and_view_settings_shape_replies() {
    let file = script(
        "op,from,to,amount,bill,text\n\
         view,,,,,transactions=housing\n\
         ask,,,,,transactions please\n\
         setting,,,,,currency=USD\n\
         ask,,,,,balance\n\
         quick,,,,,cards\n",
    );

    neo_ledger()
        .arg(file.path())
        .args(["--locale", "en-US"])
        .assert()
        .success()
        .stdout(pred::str::contains(
            "Recent transactions:\n- ₹7,500.00 debited (Rent Payment)\n",
        ))
        .stdout(pred::str::contains("Your total balance is $1,200,000.00."))
        .stdout(pred::str::contains(
            "Your Platinum Card (•••• 4567) has $87,500.00 available credit.",
        ))
        .stdout(pred::str::contains("account,number,type,balance\n"));
}

#[test]
fn writes_html_statement() {
    let file = script(
        "op,from,to,amount,bill,text\n\
         pay_bill,,,,3,\n",
    );
    let out = NamedTempFile::new().expect("create temp file");

    neo_ledger()
        .arg(file.path())
        .arg("--statement")
        .arg(out.path())
        .args(["--user", "Asha"])
        .assert()
        .success();

    let html = std::fs::read_to_string(out.path()).unwrap();
    assert!(html.contains("<title>Payment History - Asha</title>"));
    assert!(html.contains("Payment for Credit Card"));
    assert!(html.contains("-₹7,500.00"));
}

#[test]
fn missing_script_fails() {
    neo_ledger()
        .arg("/definitely/not/here.csv")
        .assert()
        .failure()
        .stderr(pred::str::contains("No such file"));
}
