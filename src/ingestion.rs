use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::OperationStream;
use crate::domain::{Error, Operation, QuickAction, SettingChange, TransferRequest, ViewChange};

/// Reads a script of dashboard operations from CSV with the header
/// `op,from,to,amount,bill,text`.
pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Ok(Self { reader: Some(rdr) })
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    op: String,
    from: Option<String>,
    to: Option<String>,
    amount: Option<String>,
    bill: Option<u32>,
    text: Option<String>,
}

impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let op = match row.op.trim().to_ascii_lowercase().as_str() {
            "transfer" => Operation::Transfer(TransferRequest {
                from_account: row.from.unwrap_or_default(),
                to_account: row.to.unwrap_or_default(),
                amount: row.amount.unwrap_or_default(),
                note: row.text,
            }),
            "pay_bill" => Operation::PayBill {
                bill_id: row
                    .bill
                    .ok_or_else(|| Error::Ingestion("pay_bill requires a bill id".to_string()))?,
            },
            "ask" => Operation::Ask {
                query: row.text.unwrap_or_default(),
            },
            "quick" => Operation::QuickAction(
                row.text.as_deref().unwrap_or_default().parse::<QuickAction>()?,
            ),
            "setting" => {
                let (field, value) = key_value(row.text.as_deref())?;
                Operation::Setting(SettingChange::parse(field, value)?)
            }
            "view" => {
                let (field, value) = key_value(row.text.as_deref())?;
                Operation::View(ViewChange::parse(field, value)?)
            }
            other => {
                return Err(Error::Ingestion(format!(
                    "Invalid operation type: {}",
                    other
                )));
            }
        };

        Ok(op)
    }
}

fn key_value(text: Option<&str>) -> Result<(&str, &str), Error> {
    text.and_then(|t| t.split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
        .ok_or_else(|| Error::Ingestion(format!("expected field=value, got {:?}", text)))
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        // Take the reader so the iterator owns all data and is 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::iter(Vec::<Result<Operation, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Operation::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
