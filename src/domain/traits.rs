use chrono::NaiveDate;
use futures::Stream;

use crate::domain::{Error, Notification, Operation};

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Source of "today" for newly booked transactions.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Records that can be ordered by calendar date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}
