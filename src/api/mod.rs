pub mod drivers;
pub mod packages;

use std::io::{BufRead, Write};

use rand::Rng;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::drivers::{CreateDriverRequest, create_driver};
use crate::api::packages::{CreatePackageRequest, create_package};
use crate::error::AppError;
use crate::models::Record;
use crate::observability::metrics::Metrics;

/// One creation request per intake line, selected by its `kind` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CreateRequest {
    Driver(CreateDriverRequest),
    Package(CreatePackageRequest),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IntakeSummary {
    pub processed: usize,
    pub rejected: usize,
}

/// Coerces any JSON value to a flag: `null`, `false`, `0`, `""` are false.
pub(crate) fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(match value {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

pub struct Intake<R = ThreadRng> {
    rng: R,
    metrics: Metrics,
}

impl Intake<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for Intake<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Intake<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            metrics: Metrics::new(),
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn handle(&mut self, request: CreateRequest) -> Record {
        let record = match request {
            CreateRequest::Driver(payload) => Record::Driver(create_driver(&mut self.rng, payload)),
            CreateRequest::Package(payload) => {
                Record::Package(create_package(&mut self.rng, payload))
            }
        };

        self.metrics
            .record_built(record.kind(), &record.invalid_fields());
        record
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Record, AppError> {
        let request: CreateRequest = serde_json::from_str(line)?;
        Ok(self.handle(request))
    }

    /// Streams requests from `input`, one JSON line out per non-blank line in.
    ///
    /// A line that cannot be decoded produces an `{"error": ..}` line and is
    /// counted as rejected; read and write failures abort the run.
    pub fn run<I, O>(&mut self, input: I, mut output: O) -> Result<IntakeSummary, AppError>
    where
        I: BufRead,
        O: Write,
    {
        let mut summary = IntakeSummary::default();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let body = match self.handle_line(line) {
                Ok(record) => {
                    summary.processed += 1;
                    debug!(line = index + 1, kind = record.kind(), "record emitted");
                    serde_json::to_string(&record).map_err(|err| {
                        AppError::Internal(format!("failed to serialize record: {err}"))
                    })?
                }
                Err(err) => {
                    summary.rejected += 1;
                    self.metrics.requests_rejected_total.inc();
                    warn!(line = index + 1, error = %err, "rejected intake line");
                    err.to_json().to_string()
                }
            };

            writeln!(output, "{body}")?;
        }

        output.flush()?;
        Ok(summary)
    }
}
