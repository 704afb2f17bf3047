use chrono::{DateTime, Local};
use rand::Rng;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::ids::PackageId;
use crate::validation::Validated;
use crate::validation::rules::{
    validate_description, validate_destination, validate_title, validate_weight,
};

/// Package snapshot. Fields are fixed at construction.
#[derive(Debug, Clone, Serialize)]
pub struct Package {
    id: PackageId,
    title: Validated<String>,
    #[serde(serialize_with = "serialize_weight")]
    weight: Validated<f64>,
    destination: Validated<String>,
    description: Validated<String>,
    created_at: DateTime<Local>,
    is_allocated: bool,
}

impl Package {
    pub fn new(
        title: &str,
        weight: f64,
        destination: &str,
        description: Option<&str>,
        is_allocated: bool,
    ) -> Self {
        Self::with_rng(
            &mut rand::thread_rng(),
            title,
            weight,
            destination,
            description,
            is_allocated,
        )
    }

    pub fn with_rng<R: Rng>(
        rng: &mut R,
        title: &str,
        weight: f64,
        destination: &str,
        description: Option<&str>,
        is_allocated: bool,
    ) -> Self {
        Self::from_raw(
            rng,
            Some(title),
            Some(weight),
            Some(destination),
            description,
            is_allocated,
        )
    }

    /// Builds from loosely typed input; `None` marks a value of the wrong
    /// type and is stored as `Invalid`.
    pub fn from_raw<R: Rng>(
        rng: &mut R,
        title: Option<&str>,
        weight: Option<f64>,
        destination: Option<&str>,
        description: Option<&str>,
        is_allocated: bool,
    ) -> Self {
        let package = Self {
            id: PackageId::generate(rng),
            title: title.map_or(Validated::Invalid, validate_title),
            weight: weight.map_or(Validated::Invalid, validate_weight),
            destination: destination.map_or(Validated::Invalid, validate_destination),
            description: validate_description(description),
            created_at: Local::now(),
            is_allocated,
        };

        debug!(
            package_id = %package.id,
            invalid_fields = ?package.invalid_fields(),
            "package record built"
        );

        package
    }

    pub fn id(&self) -> &PackageId {
        &self.id
    }

    pub fn title(&self) -> &Validated<String> {
        &self.title
    }

    pub fn weight(&self) -> &Validated<f64> {
        &self.weight
    }

    pub fn destination(&self) -> &Validated<String> {
        &self.destination
    }

    pub fn description(&self) -> &Validated<String> {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn is_allocated(&self) -> bool {
        self.is_allocated
    }

    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("title", self.title.is_invalid()),
            ("weight", self.weight.is_invalid()),
            ("destination", self.destination.is_invalid()),
            ("description", self.description.is_invalid()),
        ]
        .into_iter()
        .filter_map(|(field, invalid)| invalid.then_some(field))
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.invalid_fields().is_empty()
    }
}

// Whole weights are written as integers.
fn serialize_weight<S>(weight: &Validated<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    match weight {
        Validated::Valid(value) if value.fract() == 0.0 && *value <= MAX_EXACT => {
            serializer.serialize_u64(*value as u64)
        }
        other => other.serialize(serializer),
    }
}

pub fn make_package(
    title: &str,
    weight: f64,
    destination: &str,
    description: Option<&str>,
    is_allocated: bool,
) -> Package {
    Package::new(title, weight, destination, description, is_allocated)
}
