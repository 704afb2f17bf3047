use rand::Rng;
use serde::Deserialize;
use serde_json::Value;

use crate::api::truthy;
use crate::models::package::Package;

#[derive(Debug, Deserialize)]
pub struct CreatePackageRequest {
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub weight: Value,
    #[serde(default)]
    pub destination: Value,
    /// Any JSON value; only strings can pass validation.
    #[serde(default)]
    pub description: Value,
    #[serde(default, deserialize_with = "truthy")]
    pub is_allocated: bool,
}

/// Numbers pass through and numeric strings are parsed; any other value
/// has no weight.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

pub fn create_package<R: Rng>(rng: &mut R, payload: CreatePackageRequest) -> Package {
    Package::from_raw(
        rng,
        payload.title.as_str(),
        numeric(&payload.weight),
        payload.destination.as_str(),
        payload.description.as_str(),
        payload.is_allocated,
    )
}
