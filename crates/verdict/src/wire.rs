//! JSON shape of outcomes.
//!
//! Field names are camelCase. Blank strings, empty collections and absent
//! data are left out. Reading also accepts `value`, `traceCode` and
//! `metaData` for the corresponding fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::OutcomeError;
use crate::ext::OutcomeExt;
use crate::header::Header;
use crate::outcome::Outcome;
use crate::paged::PagedOutcome;
use crate::status::Status;

fn is_blank(value: &&str) -> bool {
    value.trim().is_empty()
}

fn no_errors(errors: &&[OutcomeError]) -> bool {
    errors.is_empty()
}

fn no_metadata(metadata: &&Map<String, Value>) -> bool {
    metadata.is_empty()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeRef<'a, T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    status: Status,
    #[serde(skip_serializing_if = "is_blank")]
    message: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    code: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    log_trace_code: &'a str,
    #[serde(skip_serializing_if = "no_errors")]
    errors: &'a [OutcomeError],
    #[serde(skip_serializing_if = "no_metadata")]
    metadata: &'a Map<String, Value>,
}

impl<'a, T> OutcomeRef<'a, T> {
    fn new(header: &'a Header, data: Option<&'a T>) -> Self {
        Self {
            data,
            status: header.status(),
            message: header.message(),
            code: header.code(),
            log_trace_code: header.trace_code(),
            errors: header.errors(),
            metadata: header.metadata(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PagedRef<'a, T> {
    #[serde(flatten)]
    outcome: OutcomeRef<'a, Vec<T>>,
    page_index: i64,
    page_size: i64,
    total_rows: i64,
    page_count: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeWire<T> {
    #[serde(alias = "value")]
    data: Option<T>,
    status: Status,
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: String,
    #[serde(default, alias = "traceCode")]
    log_trace_code: String,
    #[serde(default)]
    errors: Vec<OutcomeError>,
    #[serde(default, alias = "metaData")]
    metadata: Map<String, Value>,
}

impl<T> OutcomeWire<T> {
    fn into_outcome(self) -> Outcome<T> {
        let header = Header::from_parts(
            self.status,
            self.message,
            self.code,
            self.log_trace_code,
            self.errors,
            self.metadata,
        );
        Outcome::from_parts(header, self.data)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PagedWire<T> {
    #[serde(flatten)]
    outcome: OutcomeWire<Vec<T>>,
    #[serde(default)]
    page_index: i64,
    #[serde(default)]
    page_size: i64,
    #[serde(default)]
    total_rows: i64,
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OutcomeRef::new(self.header(), self.data()).serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        OutcomeWire::deserialize(deserializer).map(OutcomeWire::into_outcome)
    }
}

impl<T: Serialize> Serialize for PagedOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PagedRef {
            outcome: OutcomeRef::new(self.header(), self.data()),
            page_index: self.page_index(),
            page_size: self.page_size(),
            total_rows: self.total_rows(),
            page_count: self.page_count(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PagedOutcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = PagedWire::deserialize(deserializer)?;
        Ok(PagedOutcome::new(
            wire.outcome.into_outcome(),
            wire.page_index,
            wire.page_size,
            wire.total_rows,
        ))
    }
}
