use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::AppError;

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub records_created_total: IntCounterVec,
    pub invalid_fields_total: IntCounterVec,
    pub requests_rejected_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let records_created_total = IntCounterVec::new(
            Opts::new("records_created_total", "Total records built by kind"),
            &["kind"],
        )
        .expect("valid records_created_total metric");

        let invalid_fields_total = IntCounterVec::new(
            Opts::new(
                "invalid_fields_total",
                "Fields stored as invalid, by record kind and field",
            ),
            &["kind", "field"],
        )
        .expect("valid invalid_fields_total metric");

        let requests_rejected_total = IntCounter::new(
            "requests_rejected_total",
            "Intake lines rejected before reaching a factory",
        )
        .expect("valid requests_rejected_total metric");

        registry
            .register(Box::new(records_created_total.clone()))
            .expect("register records_created_total");
        registry
            .register(Box::new(invalid_fields_total.clone()))
            .expect("register invalid_fields_total");
        registry
            .register(Box::new(requests_rejected_total.clone()))
            .expect("register requests_rejected_total");

        Self {
            registry,
            records_created_total,
            invalid_fields_total,
            requests_rejected_total,
        }
    }

    pub fn record_built(&self, kind: &str, invalid_fields: &[&str]) {
        self.records_created_total.with_label_values(&[kind]).inc();
        for &field in invalid_fields {
            self.invalid_fields_total
                .with_label_values(&[kind, field])
                .inc();
        }
    }

    /// Renders every registered family in the text exposition format.
    pub fn encode(&self) -> Result<String, AppError> {
        let mut body = Vec::new();

        TextEncoder::new()
            .encode(&self.registry.gather(), &mut body)
            .map_err(|err| AppError::Internal(format!("metrics encoding failed: {err}")))?;

        String::from_utf8(body)
            .map_err(|err| AppError::Internal(format!("metrics output is not utf8: {err}")))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
