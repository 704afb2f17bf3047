use rand::Rng;
use serde::Deserialize;
use serde_json::Value;

use crate::api::truthy;
use crate::models::driver::Driver;

/// Raw driver payload. Text fields accept any JSON value; anything other
/// than a string ends up as an invalid field on the record.
#[derive(Debug, Deserialize)]
pub struct CreateDriverRequest {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub department: Value,
    #[serde(default)]
    pub license: Value,
    #[serde(default, deserialize_with = "truthy")]
    pub is_active: bool,
}

pub fn create_driver<R: Rng>(rng: &mut R, payload: CreateDriverRequest) -> Driver {
    Driver::from_raw(
        rng,
        payload.name.as_str(),
        payload.department.as_str(),
        payload.license.as_str(),
        payload.is_active,
    )
}
