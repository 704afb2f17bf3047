use std::sync::OnceLock;

use regex::Regex;

use crate::models::driver::Department;
use crate::validation::Validated;

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 20;
pub const DESCRIPTION_MAX_LEN: usize = 30;
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

static LICENSE_RE: OnceLock<Regex> = OnceLock::new();
static TITLE_RE: OnceLock<Regex> = OnceLock::new();
static DESTINATION_RE: OnceLock<Regex> = OnceLock::new();

fn license_re() -> &'static Regex {
    LICENSE_RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9]{5}$").expect("valid license pattern"))
}

fn title_re() -> &'static Regex {
    TITLE_RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9]{3,15}$").expect("valid title pattern"))
}

fn destination_re() -> &'static Regex {
    DESTINATION_RE
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9]{5,15}$").expect("valid destination pattern"))
}

fn keep_if(value: &str, ok: bool) -> Validated<String> {
    if ok {
        Validated::Valid(value.to_string())
    } else {
        Validated::Invalid
    }
}

/// Length in UTF-16 code units.
fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

pub fn validate_name(name: &str) -> Validated<String> {
    let len = text_len(name);
    keep_if(name, (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len))
}

pub fn validate_department(department: &str) -> Validated<Department> {
    department.parse::<Department>().ok().into()
}

pub fn validate_license(license: &str) -> Validated<String> {
    keep_if(license, license_re().is_match(license))
}

pub fn validate_title(title: &str) -> Validated<String> {
    keep_if(title, title_re().is_match(title))
}

/// NaN fails the comparison and lands on `Invalid`.
pub fn validate_weight(weight: f64) -> Validated<f64> {
    if weight > 0.0 {
        Validated::Valid(weight)
    } else {
        Validated::Invalid
    }
}

pub fn validate_destination(destination: &str) -> Validated<String> {
    keep_if(destination, destination_re().is_match(destination))
}

/// `None` stands for a description that was not a string at all.
pub fn validate_description(description: Option<&str>) -> Validated<String> {
    match description {
        Some("") => Validated::Valid(DEFAULT_DESCRIPTION.to_string()),
        Some(text) => keep_if(text, text_len(text) <= DESCRIPTION_MAX_LEN),
        None => Validated::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_length_bounds_are_inclusive() {
        assert!(validate_name("Al").is_invalid());
        assert_eq!(validate_name("Ali"), Validated::Valid("Ali".to_string()));
        assert!(validate_name(&"x".repeat(20)).is_valid());
        assert!(validate_name(&"x".repeat(21)).is_invalid());
        assert!(validate_name("").is_invalid());
    }

    #[test]
    fn length_counts_utf16_units_not_bytes() {
        assert!(validate_name("Zoë").is_valid());
        assert!(validate_name(&"é".repeat(20)).is_valid());

        // Each emoji is a surrogate pair, two units.
        assert!(validate_name("😀😀").is_valid());
        assert!(validate_name("😀").is_invalid());
        assert!(validate_name(&"😀".repeat(10)).is_valid());
        assert!(validate_name(&"😀".repeat(11)).is_invalid());

        assert!(validate_description(Some(&"😀".repeat(15))).is_valid());
        assert!(validate_description(Some(&"😀".repeat(16))).is_invalid());
    }

    #[test]
    fn department_must_match_exactly() {
        assert_eq!(validate_department("Food"), Validated::Valid(Department::Food));
        assert_eq!(
            validate_department("Electronic"),
            Validated::Valid(Department::Electronic)
        );
        assert!(validate_department("food").is_invalid());
        assert!(validate_department("Electronics").is_invalid());
        assert!(validate_department("").is_invalid());
    }

    #[test]
    fn license_is_exactly_five_alphanumerics() {
        assert!(validate_license("AB12C").is_valid());
        assert!(validate_license("ab12c").is_valid());
        assert!(validate_license("AB12").is_invalid());
        assert!(validate_license("AB12CD").is_invalid());
        assert!(validate_license("AB-2C").is_invalid());
        assert!(validate_license("AB12C\n").is_invalid());
    }

    #[test]
    fn title_and_destination_ranges() {
        assert!(validate_title("Box").is_valid());
        assert!(validate_title("Bx").is_invalid());
        assert!(validate_title(&"a".repeat(15)).is_valid());
        assert!(validate_title(&"a".repeat(16)).is_invalid());
        assert!(validate_title("Box 1").is_invalid());

        assert!(validate_destination("Paris").is_valid());
        assert!(validate_destination("Rome").is_invalid());
        assert!(validate_destination("New York").is_invalid());
    }

    #[test]
    fn weight_must_be_strictly_positive() {
        assert_eq!(validate_weight(5.0), Validated::Valid(5.0));
        assert_eq!(validate_weight(0.01), Validated::Valid(0.01));
        assert!(validate_weight(0.0).is_invalid());
        assert!(validate_weight(-3.0).is_invalid());
        assert!(validate_weight(f64::NAN).is_invalid());
    }

    #[test]
    fn description_defaults_and_limits() {
        assert_eq!(
            validate_description(Some("")),
            Validated::Valid(DEFAULT_DESCRIPTION.to_string())
        );
        assert_eq!(
            validate_description(Some("Fragile")),
            Validated::Valid("Fragile".to_string())
        );
        assert!(validate_description(Some(&"d".repeat(30))).is_valid());
        assert!(validate_description(Some(&"d".repeat(31))).is_invalid());
        assert!(validate_description(None).is_invalid());
    }
}
