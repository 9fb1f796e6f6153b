//! Side-effect-free queries over the ledger collections.
//!
//! Filters keep the relative order of the input; sorting is stable and always
//! returns a fresh `Vec`.

use crate::domain::{
    Account, Bill, BillFilter, Card, CardFilter, Dated, Money, SortOrder, Transaction,
    TransactionFilter,
};

pub fn filter_transactions(records: &[Transaction], filter: TransactionFilter) -> Vec<Transaction> {
    match filter {
        TransactionFilter::All => records.to_vec(),
        TransactionFilter::Category(category) => records
            .iter()
            .filter(|tx| tx.category == category)
            .cloned()
            .collect(),
    }
}

pub fn filter_bills(records: &[Bill], filter: BillFilter) -> Vec<Bill> {
    records
        .iter()
        .filter(|bill| match filter {
            BillFilter::All => true,
            BillFilter::Paid => bill.paid,
            BillFilter::Unpaid => !bill.paid,
            BillFilter::Category(category) => bill.category == category,
        })
        .cloned()
        .collect()
}

pub fn filter_cards(records: &[Card], filter: CardFilter) -> Vec<Card> {
    match filter {
        CardFilter::All => records.to_vec(),
        CardFilter::Network(network) => records
            .iter()
            .filter(|card| card.network == network)
            .cloned()
            .collect(),
    }
}

pub fn sort_by_date<T: Dated + Clone>(records: &[T], order: SortOrder) -> Vec<T> {
    let mut sorted = records.to_vec();
    // sort_by is stable, so equal dates keep their input order
    match order {
        SortOrder::Newest => sorted.sort_by(|a, b| b.date().cmp(&a.date())),
        SortOrder::Oldest => sorted.sort_by_key(|r| r.date()),
    }
    sorted
}

pub fn total_balance(accounts: &[Account]) -> Money {
    accounts.iter().map(|acc| acc.balance).sum()
}

pub fn pending_bills_total(bills: &[Bill]) -> Money {
    bills
        .iter()
        .filter(|bill| !bill.paid)
        .map(|bill| bill.amount)
        .sum()
}
