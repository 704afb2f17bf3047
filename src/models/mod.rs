pub mod driver;
pub mod package;

use serde::Serialize;

use crate::models::driver::Driver;
use crate::models::package::Package;

/// Any record the intake can build.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Record {
    Driver(Driver),
    Package(Package),
}

impl Record {
    pub fn kind(&self) -> &'static str {
        match self {
            Record::Driver(_) => "driver",
            Record::Package(_) => "package",
        }
    }

    pub fn invalid_fields(&self) -> Vec<&'static str> {
        match self {
            Record::Driver(driver) => driver.invalid_fields(),
            Record::Package(package) => package.invalid_fields(),
        }
    }
}
