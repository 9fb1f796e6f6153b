use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use futures::StreamExt;
use tracing::{debug, info, warn};

use crate::assistant;
use crate::dashboard::Dashboard;
use crate::domain::{
    Clock, Error, Notification, Notifier, Operation, OperationStream, QuickAction, SettingChange,
    Transaction, TransferRequest, ViewChange,
};

/// Artificial latency of the simulated backend calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub transfer_delay: Duration,
    pub bill_delay: Duration,
}

impl EngineConfig {
    pub const TRANSFER_DELAY: Duration = Duration::from_millis(1500);
    pub const BILL_DELAY: Duration = Duration::from_millis(1000);

    /// No delay at all.
    pub fn immediate() -> Self {
        Self {
            transfer_delay: Duration::ZERO,
            bill_delay: Duration::ZERO,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            transfer_delay: Self::TRANSFER_DELAY,
            bill_delay: Self::BILL_DELAY,
        }
    }
}

/// Outcome of a successful transfer or bill payment.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub transaction: Transaction,
    pub message: String,
    pub note: Option<String>,
}

/// Runs dashboard operations against the shared [`Dashboard`].
///
/// At most one transfer or bill payment is in flight; a second one submitted
/// while the first is pending fails with [`Error::Busy`]. The dashboard lock is
/// never held across an `.await`.
#[derive(Debug)]
pub struct Engine<N, C>
where
    N: Notifier,
    C: Clock,
{
    dashboard: Mutex<Dashboard>,
    busy: AtomicBool,
    notifier: N,
    clock: C,
    config: EngineConfig,
}

struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<N, C> Engine<N, C>
where
    N: Notifier,
    C: Clock,
{
    pub fn new(dashboard: Dashboard, notifier: N, clock: C, config: EngineConfig) -> Self {
        Self {
            dashboard: Mutex::new(dashboard),
            busy: AtomicBool::new(false),
            notifier,
            clock,
            config,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// True while a transfer or bill payment is pending.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn snapshot(&self) -> Result<Dashboard, Error> {
        self.read(Dashboard::clone)
    }

    pub fn read<R>(&self, f: impl FnOnce(&Dashboard) -> R) -> Result<R, Error> {
        let dashboard = self
            .dashboard
            .lock()
            .map_err(|_| Error::Engine("dashboard lock poisoned".to_string()))?;
        Ok(f(&dashboard))
    }

    fn write<R>(&self, f: impl FnOnce(&mut Dashboard) -> R) -> Result<R, Error> {
        let mut dashboard = self
            .dashboard
            .lock()
            .map_err(|_| Error::Engine("dashboard lock poisoned".to_string()))?;
        Ok(f(&mut dashboard))
    }

    fn begin(&self) -> Result<BusyGuard<'_>, Error> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::Busy)?;
        Ok(BusyGuard(&self.busy))
    }

    pub async fn transfer(&self, request: TransferRequest) -> Result<Receipt, Error> {
        let result = self.run_transfer(request).await;
        self.report(&result);
        result
    }

    async fn run_transfer(&self, request: TransferRequest) -> Result<Receipt, Error> {
        let _busy = self.begin()?;
        let transfer = request.validate()?;
        self.read(|d| d.ledger.check_transfer(&transfer))??;

        tokio::time::sleep(self.config.transfer_delay).await;

        let today = self.clock.today();
        self.write(|d| -> Result<Receipt, Error> {
            let tx = d.ledger.apply_transfer(&transfer, today)?;
            info!(%tx, "transfer applied");
            Ok(Receipt {
                message: format!(
                    "Transfer of {} to {} successful!",
                    d.money(transfer.amount),
                    transfer.to
                ),
                transaction: tx,
                note: transfer.note.clone(),
            })
        })?
    }

    pub async fn pay_bill(&self, bill_id: u32) -> Result<Receipt, Error> {
        let result = self.run_pay_bill(bill_id).await;
        self.report(&result);
        result
    }

    async fn run_pay_bill(&self, bill_id: u32) -> Result<Receipt, Error> {
        let _busy = self.begin()?;
        self.read(|d| match d.ledger.bill(bill_id) {
            Some(bill) => bill.ensure_unpaid(),
            None => Err(Error::NotFound(format!("Bill {}", bill_id))),
        })??;

        tokio::time::sleep(self.config.bill_delay).await;

        let today = self.clock.today();
        self.write(|d| -> Result<Receipt, Error> {
            let (bill, tx) = d.ledger.apply_bill_payment(bill_id, today)?;
            info!(%tx, bill = %bill.name, "bill paid");
            Ok(Receipt {
                message: format!(
                    "Payment of {} for {} successful!",
                    d.money(bill.amount),
                    bill.name
                ),
                transaction: tx,
                note: None,
            })
        })?
    }

    pub fn update_setting(&self, change: SettingChange) -> Result<(), Error> {
        self.write(|d| d.settings.apply(change))?;
        info!(?change, "setting updated");
        self.notifier
            .notify(&Notification::success(format!("{} updated", change.label())));
        Ok(())
    }

    pub fn update_view(&self, change: ViewChange) -> Result<(), Error> {
        self.write(|d| d.view.apply(change))?;
        debug!(?change, "view updated");
        Ok(())
    }

    pub fn ask(&self, query: &str) -> Result<String, Error> {
        self.read(|d| assistant::respond(query, d))
    }

    pub fn quick_action(&self, action: QuickAction) -> Result<String, Error> {
        self.read(|d| assistant::quick_action(action, d))
    }

    /// Applies every operation from `source` in order. Failed operations are
    /// reported to the notifier and do not stop the run. Returns the assistant
    /// replies.
    pub async fn process<S: OperationStream>(&self, source: &mut S) -> Result<Vec<String>, Error> {
        let mut ops = source.stream();
        let mut replies = Vec::new();

        while let Some(op) = ops.next().await {
            match op {
                Ok(op) => {
                    debug!(?op, "processing operation");
                    if let Some(reply) = self.apply(op).await {
                        replies.push(reply);
                    }
                }
                Err(e) => {
                    warn!(error = %e, "skipping unreadable operation");
                    self.notifier.notify(&Notification::error(e.to_string()));
                }
            }
        }

        Ok(replies)
    }

    async fn apply(&self, op: Operation) -> Option<String> {
        let result = match op {
            // transfers and bill payments report their own outcome
            Operation::Transfer(request) => {
                let _ = self.transfer(request).await;
                return None;
            }
            Operation::PayBill { bill_id } => {
                let _ = self.pay_bill(bill_id).await;
                return None;
            }
            Operation::Ask { query } => self.ask(&query).map(Some),
            Operation::QuickAction(action) => self.quick_action(action).map(Some),
            Operation::Setting(change) => self.update_setting(change).map(|_| None),
            Operation::View(change) => self.update_view(change).map(|_| None),
        };

        result.unwrap_or_else(|e| {
            warn!(error = %e, "operation failed");
            self.notifier.notify(&Notification::error(e.user_message()));
            None
        })
    }

    fn report(&self, result: &Result<Receipt, Error>) {
        match result {
            Ok(receipt) => self
                .notifier
                .notify(&Notification::success(receipt.message.clone())),
            Err(e) => {
                warn!(error = %e, "operation rejected");
                self.notifier
                    .notify(&Notification::error(e.user_message()));
            }
        }
    }
}
