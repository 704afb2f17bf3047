pub mod rules;

use serde::{Serialize, Serializer};

/// Outcome of validating a single record field.
///
/// Records are always constructed; a field that fails its check is stored as
/// `Invalid` instead of aborting construction. On the wire `Invalid` is the
/// literal `false`, and `Valid(v)` is just `v`.
#[derive(Debug, Clone, PartialEq)]
pub enum Validated<T> {
    Valid(T),
    Invalid,
}

impl<T> Validated<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn as_valid(&self) -> Option<&T> {
        match self {
            Validated::Valid(value) => Some(value),
            Validated::Invalid => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Validated::Valid(value) => Some(value),
            Validated::Invalid => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Validated<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(f(value)),
            Validated::Invalid => Validated::Invalid,
        }
    }
}

impl<T> From<Option<T>> for Validated<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Validated::Valid(value),
            None => Validated::Invalid,
        }
    }
}

impl<T: Serialize> Serialize for Validated<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Validated::Valid(value) => value.serialize(serializer),
            Validated::Invalid => serializer.serialize_bool(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Validated;

    #[test]
    fn invalid_serializes_as_false() {
        let field: Validated<String> = Validated::Invalid;
        assert_eq!(serde_json::to_value(&field).unwrap(), json!(false));
    }

    #[test]
    fn valid_serializes_as_inner_value() {
        let field = Validated::Valid(12.5);
        assert_eq!(serde_json::to_value(&field).unwrap(), json!(12.5));
    }

    #[test]
    fn option_conversion_and_map() {
        let field: Validated<&str> = Some("abc").into();
        assert_eq!(field.clone().map(str::len), Validated::Valid(3));
        assert_eq!(field.as_valid(), Some(&"abc"));

        let missing: Validated<&str> = None.into();
        assert!(missing.is_invalid());
        assert_eq!(missing.into_option(), None);
    }
}
