use chrono::NaiveDate;

use crate::domain::{
    Account, AccountKind, Bill, Card, CardNetwork, Category, Error, Money, PaymentHistoryEntry,
    Status, Transaction, Transfer, ValidationError,
};

/// In-memory state of accounts, cards, bills and the transaction log.
///
/// The transaction log is kept newest-first. Every mutating operation checks
/// all of its preconditions before touching any collection, so a failed call
/// leaves the ledger exactly as it was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    cards: Vec<Card>,
    bills: Vec<Bill>,
}

impl Ledger {
    pub fn new(
        accounts: Vec<Account>,
        transactions: Vec<Transaction>,
        cards: Vec<Card>,
        bills: Vec<Bill>,
    ) -> Self {
        Self {
            accounts,
            transactions,
            cards,
            bills,
        }
    }

    /// The fixture the dashboard starts with.
    pub fn demo() -> Self {
        let accounts = vec![
            Account::new(
                1,
                "Prime Savings",
                "****7890",
                Money::from_major(125_000),
                AccountKind::Savings,
            ),
            Account::new(
                2,
                "Global Advantage",
                "****4567",
                Money::from_major(325_000),
                AccountKind::Current,
            ),
            Account::new(
                3,
                "Future Investments",
                "****2345",
                Money::from_major(750_000),
                AccountKind::Investment,
            ),
        ];

        let cards = vec![
            Card::new(
                1,
                CardNetwork::Visa,
                "•••• •••• •••• 4567",
                "Platinum Card",
                "12/25",
                Money::from_major(150_000),
                Money::from_major(87_500),
                12,
            ),
            Card::new(
                2,
                CardNetwork::Mastercard,
                "•••• •••• •••• 7890",
                "Travel Card",
                "09/24",
                Money::from_major(200_000),
                Money::from_major(125_000),
                8,
            ),
        ];

        let seed = [
            (1, "Prime Savings", 5_000, 15, "Salary Deposit", Category::Income, Status::Completed),
            (2, "Prime Savings", -2_500, 14, "Grocery Store", Category::Shopping, Status::Completed),
            (3, "Global Advantage", 12_000, 12, "Freelance Payment", Category::Income, Status::Completed),
            (4, "Global Advantage", -7_500, 10, "Rent Payment", Category::Housing, Status::Completed),
            (5, "Prime Savings", -1_500, 8, "Electricity Bill", Category::Utilities, Status::Completed),
            (6, "Future Investments", -10_000, 5, "Mutual Fund Investment", Category::Investment, Status::Pending),
        ];
        let transactions = seed
            .into_iter()
            .map(|(id, account, amount, day, description, category, status)| {
                Transaction::new(
                    id,
                    account,
                    Money::from_major(amount),
                    june_2023(day),
                    description,
                    category,
                    status,
                )
            })
            .collect();

        let bills = vec![
            Bill::new(1, "Electricity", june_2023(25), Money::from_major(1_850), false, Category::Utilities),
            Bill::new(2, "Internet", june_2023(20), Money::from_major(1_200), true, Category::Utilities),
            Bill::new(3, "Credit Card", june_2023(18), Money::from_major(7_500), false, Category::Credit),
            Bill::new(4, "Mobile", june_2023(15), Money::from_major(599), true, Category::Communication),
        ];

        Self::new(accounts, transactions, cards, bills)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.name == name)
    }

    pub fn bill(&self, bill_id: u32) -> Option<&Bill> {
        self.bills.iter().find(|bill| bill.id == bill_id)
    }

    /// Bills are paid from the first account.
    pub fn primary_account(&self) -> Option<&Account> {
        self.accounts.first()
    }

    /// Payment history as a view over the transaction log, newest-first.
    pub fn payment_history(&self) -> Vec<PaymentHistoryEntry> {
        self.transactions
            .iter()
            .map(PaymentHistoryEntry::from)
            .collect()
    }

    fn next_transaction_id(&self) -> u32 {
        self.transactions
            .iter()
            .map(|tx| tx.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Checks that need ledger state: the source account exists and can cover
    /// the amount.
    pub fn check_transfer(&self, transfer: &Transfer) -> Result<(), Error> {
        let source = self
            .account(&transfer.from)
            .ok_or_else(|| Error::NotFound(format!("Account {}", transfer.from)))?;
        if !source.can_cover(transfer.amount) {
            return Err(ValidationError::InsufficientFunds {
                account: source.name.clone(),
                requested: transfer.amount,
                available: source.balance,
            }
            .into());
        }
        Ok(())
    }

    /// Debits the source, credits the destination when it is an internal
    /// account, and books one debit transaction dated `today`.
    pub fn apply_transfer(
        &mut self,
        transfer: &Transfer,
        today: NaiveDate,
    ) -> Result<Transaction, Error> {
        self.check_transfer(transfer)?;

        let tx = Transaction::new(
            self.next_transaction_id(),
            transfer.from.clone(),
            -transfer.amount,
            today,
            format!("Transfer to {}", transfer.to),
            Category::Transfer,
            Status::Completed,
        );

        for account in self.accounts.iter_mut() {
            if account.name == transfer.from {
                account.debit(transfer.amount);
            } else if account.name == transfer.to {
                account.credit(transfer.amount);
            }
        }
        self.transactions.insert(0, tx.clone());

        Ok(tx)
    }

    /// Marks the bill paid, debits the primary account and books one debit
    /// transaction in the bill's category. The primary balance may go negative.
    /// Returns the paid bill and the transaction.
    pub fn apply_bill_payment(
        &mut self,
        bill_id: u32,
        today: NaiveDate,
    ) -> Result<(Bill, Transaction), Error> {
        let bill_idx = self
            .bills
            .iter()
            .position(|bill| bill.id == bill_id)
            .ok_or_else(|| Error::NotFound(format!("Bill {}", bill_id)))?;
        self.bills[bill_idx].ensure_unpaid()?;

        let amount = self.bills[bill_idx].amount;
        let primary = self
            .accounts
            .first()
            .ok_or_else(|| Error::NotFound("Primary account".to_string()))?;

        let tx = Transaction::new(
            self.next_transaction_id(),
            primary.name.clone(),
            -amount,
            today,
            format!("Payment for {}", self.bills[bill_idx].name),
            self.bills[bill_idx].category,
            Status::Completed,
        );

        self.accounts[0].debit(amount);
        self.bills[bill_idx].paid = true;
        self.transactions.insert(0, tx.clone());

        Ok((self.bills[bill_idx].clone(), tx))
    }
}

fn june_2023(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, EXTERNAL_ACCOUNT, TransferRequest};
    use crate::query;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    fn transfer(from: &str, to: &str, amount: &str) -> Transfer {
        TransferRequest::new(from, to, amount).validate().unwrap()
    }

    fn single_account(balance: i64) -> Ledger {
        Ledger::new(
            vec![Account::new(1, "A", "****0001", Money::from_major(balance), AccountKind::Savings)],
            vec![],
            vec![],
            vec![],
        )
    }

    #[test]
    fn transfer_to_external_debits_only() {
        let mut ledger = single_account(1000);
        let tx = ledger
            .apply_transfer(&transfer("A", EXTERNAL_ACCOUNT, "500"), today())
            .unwrap();

        assert_eq!(ledger.accounts()[0].balance, Money::from_major(500));
        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(tx.amount, -Money::from_major(500));
        assert_eq!(tx.direction, Direction::Debit);
        assert_eq!(tx.category, Category::Transfer);
        assert_eq!(tx.date, today());
        assert_eq!(tx.description, "Transfer to External");
        assert_eq!(ledger.payment_history().len(), 1);
    }

    #[test]
    fn transfer_between_internal_accounts_moves_funds() {
        let mut ledger = Ledger::demo();
        let before_tx = ledger.transactions().len();
        let before_history = ledger.payment_history().len();

        let tx = ledger
            .apply_transfer(&transfer("Prime Savings", "Global Advantage", "1000"), today())
            .unwrap();

        assert_eq!(
            ledger.account("Prime Savings").unwrap().balance,
            Money::from_major(124_000)
        );
        assert_eq!(
            ledger.account("Global Advantage").unwrap().balance,
            Money::from_major(326_000)
        );
        assert_eq!(ledger.transactions().len(), before_tx + 1);
        assert_eq!(ledger.transactions()[0], tx);
        assert_eq!(tx.id, 7);

        let history = ledger.payment_history();
        assert_eq!(history.len(), before_history + 1);
        assert_eq!(history[0], PaymentHistoryEntry::from(&tx));
    }

    #[test]
    fn insufficient_funds_leaves_ledger_untouched() {
        let mut ledger = single_account(100);
        let before = ledger.clone();

        let err = ledger
            .apply_transfer(&transfer("A", EXTERNAL_ACCOUNT, "100.01"), today())
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::InsufficientFunds { .. })
        ));
        assert_eq!(ledger, before);
    }

    #[test]
    fn unknown_source_account_is_not_found() {
        let mut ledger = single_account(100);
        let err = ledger
            .apply_transfer(&transfer("Nope", "A", "1"), today())
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn bill_payment_marks_paid_and_debits_primary() {
        let mut ledger = Ledger::demo();
        let (bill, tx) = ledger.apply_bill_payment(1, today()).unwrap();

        assert!(bill.paid);
        assert!(ledger.bill(1).unwrap().paid);
        assert_eq!(
            ledger.primary_account().unwrap().balance,
            Money::from_major(125_000 - 1_850)
        );
        assert_eq!(tx.amount, -Money::from_major(1_850));
        assert_eq!(tx.account, "Prime Savings");
        assert_eq!(tx.category, Category::Utilities);
        assert_eq!(tx.description, "Payment for Electricity");
        assert_eq!(ledger.payment_history()[0].description, "Payment for Electricity");
    }

    #[test]
    fn paying_twice_is_a_conflict() {
        let mut ledger = Ledger::demo();
        ledger.apply_bill_payment(3, today()).unwrap();
        let before = ledger.clone();

        let err = ledger.apply_bill_payment(3, today()).unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        assert_eq!(ledger, before);
    }

    #[test]
    fn unknown_bill_is_not_found() {
        let mut ledger = Ledger::demo();
        let before = ledger.clone();
        let err = ledger.apply_bill_payment(42, today()).unwrap_err();
        assert_eq!(err.to_string(), "Bill 42 not found");
        assert_eq!(ledger, before);
    }

    #[test]
    fn bill_larger_than_primary_balance_overdraws() {
        let mut ledger = Ledger::new(
            vec![Account::new(1, "A", "****0001", Money::from_major(10), AccountKind::Savings)],
            vec![],
            vec![],
            vec![Bill::new(1, "Rent", today(), Money::from_major(11), false, Category::Housing)],
        );
        let (bill, tx) = ledger.apply_bill_payment(1, today()).unwrap();

        assert!(bill.paid);
        assert_eq!(tx.amount, -Money::from_major(11));
        assert_eq!(ledger.accounts()[0].balance, -Money::from_major(1));
        assert_eq!(ledger.accounts()[0].balance.to_string(), "-1.00");
    }

    #[test]
    fn transfer_to_unknown_destination_debits_only() {
        let mut ledger = Ledger::demo();
        let before = ledger.clone();

        let tx = ledger
            .apply_transfer(&transfer("Prime Savings", "Some Friend", "100"), today())
            .unwrap();

        assert_eq!(tx.description, "Transfer to Some Friend");
        assert_eq!(
            ledger.account("Prime Savings").unwrap().balance,
            Money::from_major(124_900)
        );
        for (after, before) in ledger.accounts().iter().zip(before.accounts()).skip(1) {
            assert_eq!(after.balance, before.balance);
        }
        assert_eq!(
            query::total_balance(ledger.accounts()),
            query::total_balance(before.accounts()) - Money::from_major(100)
        );
    }

    #[test]
    fn transfer_of_entire_balance_empties_account() {
        let mut ledger = single_account(100);
        ledger
            .apply_transfer(&transfer("A", EXTERNAL_ACCOUNT, "100"), today())
            .unwrap();
        assert_eq!(ledger.accounts()[0].balance, Money::ZERO);
        assert_eq!(ledger.accounts()[0].balance.to_string(), "0.00");
    }
}
