use std::fmt;
use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;
use serde::Serialize;

const DRIVER_ID_PREFIX: &str = "D";
const DRIVER_SERIAL: &str = "32";
const PACKAGE_ID_PREFIX: &str = "P";
const PACKAGE_INITIALS: &str = "GZ";

static DRIVER_ID_RE: OnceLock<Regex> = OnceLock::new();
static PACKAGE_ID_RE: OnceLock<Regex> = OnceLock::new();

/// `len` independent uniform draws from `A..=Z`.
pub fn random_letters<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.gen_range(b'A'..=b'Z'))).collect()
}

/// `D32-NN-LLL`. No uniqueness check is made against earlier ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DriverId(String);

impl DriverId {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let number: u8 = rng.gen_range(10..=99);
        let letters = random_letters(rng, 3);
        Self(format!("{DRIVER_ID_PREFIX}{DRIVER_SERIAL}-{number}-{letters}"))
    }

    pub fn is_well_formed(raw: &str) -> bool {
        DRIVER_ID_RE
            .get_or_init(|| Regex::new(r"^D32-\d{2}-[A-Z]{3}$").expect("valid driver id pattern"))
            .is_match(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `PLL-GZ-NNN`. No uniqueness check is made against earlier ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let letters = random_letters(rng, 2);
        let number: u16 = rng.gen_range(100..=999);
        Self(format!("{PACKAGE_ID_PREFIX}{letters}-{PACKAGE_INITIALS}-{number}"))
    }

    pub fn is_well_formed(raw: &str) -> bool {
        PACKAGE_ID_RE
            .get_or_init(|| Regex::new(r"^P[A-Z]{2}-GZ-\d{3}$").expect("valid package id pattern"))
            .is_match(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
