use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::ids::DriverId;
use crate::validation::Validated;
use crate::validation::rules::{validate_department, validate_license, validate_name};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Department {
    Food,
    Furniture,
    Electronic,
}

impl Department {
    pub const ALL: [Department; 3] = [
        Department::Food,
        Department::Furniture,
        Department::Electronic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Food => "Food",
            Department::Furniture => "Furniture",
            Department::Electronic => "Electronic",
        }
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|department| department.as_str() == raw)
            .ok_or_else(|| format!("unknown department '{raw}'"))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Driver snapshot. Fields are fixed at construction.
#[derive(Debug, Clone, Serialize)]
pub struct Driver {
    id: DriverId,
    name: Validated<String>,
    department: Validated<Department>,
    license: Validated<String>,
    is_active: bool,
    created_at: DateTime<Local>,
}

impl Driver {
    pub fn new(name: &str, department: &str, license: &str, is_active: bool) -> Self {
        Self::with_rng(&mut rand::thread_rng(), name, department, license, is_active)
    }

    pub fn with_rng<R: Rng>(
        rng: &mut R,
        name: &str,
        department: &str,
        license: &str,
        is_active: bool,
    ) -> Self {
        Self::from_raw(rng, Some(name), Some(department), Some(license), is_active)
    }

    /// Builds from loosely typed input; `None` marks a value that was not a
    /// string and is stored as `Invalid`.
    pub fn from_raw<R: Rng>(
        rng: &mut R,
        name: Option<&str>,
        department: Option<&str>,
        license: Option<&str>,
        is_active: bool,
    ) -> Self {
        let driver = Self {
            id: DriverId::generate(rng),
            name: name.map_or(Validated::Invalid, validate_name),
            department: department.map_or(Validated::Invalid, validate_department),
            license: license.map_or(Validated::Invalid, validate_license),
            is_active,
            created_at: Local::now(),
        };

        debug!(
            driver_id = %driver.id,
            invalid_fields = ?driver.invalid_fields(),
            "driver record built"
        );

        driver
    }

    pub fn id(&self) -> &DriverId {
        &self.id
    }

    pub fn name(&self) -> &Validated<String> {
        &self.name
    }

    pub fn department(&self) -> &Validated<Department> {
        &self.department
    }

    pub fn license(&self) -> &Validated<String> {
        &self.license
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_invalid()),
            ("department", self.department.is_invalid()),
            ("license", self.license.is_invalid()),
        ]
        .into_iter()
        .filter_map(|(field, invalid)| invalid.then_some(field))
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.invalid_fields().is_empty()
    }
}

pub fn make_driver(name: &str, department: &str, license: &str, is_active: bool) -> Driver {
    Driver::new(name, department, license, is_active)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    use super::{Department, Driver, make_driver};
    use crate::ids::DriverId;
    use crate::validation::Validated;

    #[test]
    fn valid_inputs_pass_through() {
        let driver = make_driver("Alice", "Furniture", "XY9Z1", true);

        assert!(DriverId::is_well_formed(driver.id().as_str()));
        assert_eq!(driver.name(), &Validated::Valid("Alice".to_string()));
        assert_eq!(driver.department(), &Validated::Valid(Department::Furniture));
        assert_eq!(driver.license(), &Validated::Valid("XY9Z1".to_string()));
        assert!(driver.is_active());
        assert!(driver.is_complete());
    }

    #[test]
    fn short_name_is_marked_invalid_and_rest_kept() {
        let driver = make_driver("Al", "Food", "AB12C", true);

        assert!(driver.name().is_invalid());
        assert_eq!(driver.department(), &Validated::Valid(Department::Food));
        assert_eq!(driver.license(), &Validated::Valid("AB12C".to_string()));
        assert!(driver.is_active());
        assert_eq!(driver.invalid_fields(), vec!["name"]);
    }

    #[test]
    fn every_field_can_be_invalid_at_once() {
        let driver = make_driver("", "Toys", "1234", false);

        assert_eq!(driver.invalid_fields(), vec!["name", "department", "license"]);
        assert!(!driver.is_complete());
        assert!(!driver.is_active());
    }

    #[test]
    fn serializes_invalid_fields_as_false() {
        let mut rng = StdRng::seed_from_u64(11);
        let driver = Driver::with_rng(&mut rng, "Bob", "Garden", "AB12C", false);
        let value = serde_json::to_value(&driver).unwrap();

        assert_eq!(value["id"], json!(driver.id().as_str()));
        assert_eq!(value["name"], json!("Bob"));
        assert_eq!(value["department"], json!(false));
        assert_eq!(value["license"], json!("AB12C"));
        assert_eq!(value["is_active"], json!(false));
        assert!(value["created_at"].is_string());
    }

    #[test]
    fn non_string_inputs_are_marked_invalid() {
        let mut rng = StdRng::seed_from_u64(12);
        let driver = Driver::from_raw(&mut rng, None, Some("Food"), None, true);

        assert!(DriverId::is_well_formed(driver.id().as_str()));
        assert_eq!(driver.invalid_fields(), vec!["name", "license"]);
        assert_eq!(driver.department(), &Validated::Valid(Department::Food));
        assert!(driver.is_active());
    }

    #[test]
    fn department_round_trips_through_str() {
        for department in Department::ALL {
            assert_eq!(department.as_str().parse::<Department>(), Ok(department));
        }
        assert!("FOOD".parse::<Department>().is_err());
    }
}
