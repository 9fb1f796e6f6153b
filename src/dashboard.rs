use crate::domain::{
    Bill, BillFilter, Card, CardFilter, Money, Settings, SortOrder, Transaction, TransactionFilter,
    ViewChange,
};
use crate::format::format_currency;
use crate::ledger::Ledger;
use crate::query;

/// Filter and sort choices currently selected on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub transaction_filter: TransactionFilter,
    pub sort_order: SortOrder,
    pub bill_filter: BillFilter,
    pub card_filter: CardFilter,
}

impl ViewState {
    pub fn apply(&mut self, change: ViewChange) {
        match change {
            ViewChange::TransactionFilter(filter) => self.transaction_filter = filter,
            ViewChange::SortOrder(order) => self.sort_order = order,
            ViewChange::BillFilter(filter) => self.bill_filter = filter,
            ViewChange::CardFilter(filter) => self.card_filter = filter,
        }
    }
}

/// Everything the presentation layer reads: the ledger plus user preferences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub ledger: Ledger,
    pub settings: Settings,
    pub view: ViewState,
}

impl Dashboard {
    pub fn new(ledger: Ledger, settings: Settings) -> Self {
        Self {
            ledger,
            settings,
            view: ViewState::default(),
        }
    }

    /// Formats an amount with the user's currency and locale.
    pub fn money(&self, amount: Money) -> String {
        format_currency(amount, self.settings.locale, self.settings.currency)
    }

    pub fn visible_transactions(&self) -> Vec<Transaction> {
        let filtered =
            query::filter_transactions(self.ledger.transactions(), self.view.transaction_filter);
        query::sort_by_date(&filtered, self.view.sort_order)
    }

    pub fn visible_bills(&self) -> Vec<Bill> {
        query::filter_bills(self.ledger.bills(), self.view.bill_filter)
    }

    pub fn visible_cards(&self) -> Vec<Card> {
        query::filter_cards(self.ledger.cards(), self.view.card_filter)
    }
}
