//! Scalar field predicates

use crate::manifest::{Value, parse_timestamp};
use crate::vocabulary::{CAPABILITIES, CATEGORIES};
use log::debug;

/// `metadata.annotations.capabilities`: one known capability level
pub fn validate_capabilities(value: &Value) -> bool {
    let Some(label) = value.as_str() else {
        debug!("capabilities: expected str, found {}", value.kind());
        return false;
    };

    let known = CAPABILITIES.contains(label);
    if !known {
        debug!("capabilities: unknown capability {:?}", label);
    }
    known
}

/// `metadata.annotations.categories`: comma-separated known categories
pub fn validate_categories(value: &Value) -> bool {
    let Some(text) = value.as_str() else {
        debug!("categories: expected str, found {}", value.kind());
        return false;
    };

    match text
        .split(',')
        .map(str::trim)
        .find(|category| !CATEGORIES.contains(category))
    {
        Some(unknown) => {
            debug!("categories: unknown category {:?}", unknown);
            false
        }
        None => true,
    }
}

/// `metadata.annotations.createdAt`: a date/time or an ISO-8601 string
pub fn validate_timestamp(value: &Value) -> bool {
    match value {
        Value::DateTime(_) => true,
        Value::Str(text) => {
            let parsed = parse_timestamp(text).is_some();
            if !parsed {
                debug!("timestamp: {:?} is not ISO-8601", text);
            }
            parsed
        }
        other => {
            debug!("timestamp: expected str or datetime, found {}", other.kind());
            false
        }
    }
}

/// `spec.version`: a `MAJOR.MINOR.PATCH` semantic version
pub fn validate_semver(value: &Value) -> bool {
    let Some(text) = value.as_str() else {
        debug!("semver: expected str, found {}", value.kind());
        return false;
    };

    match semver::Version::parse(text) {
        Ok(_) => true,
        Err(e) => {
            debug!("semver: {:?}: {}", text, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    #[rstest]
    #[case::empty(Value::from(""), false)]
    #[case::invalid_type(Value::Int(1), false)]
    #[case::valid_value(Value::from("Full Lifecycle"), true)]
    #[case::wrong_case(Value::from("full lifecycle"), false)]
    #[case::list(Value::List(vec![Value::from("Basic Install")]), false)]
    fn capabilities(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(validate_capabilities(&value), expected);
    }

    #[rstest]
    #[case::empty(Value::from(""), false)]
    #[case::invalid_type(Value::Int(1), false)]
    #[case::single(Value::from("Networking"), true)]
    #[case::multiple(Value::from("Networking,Storage"), true)]
    #[case::padded(Value::from("Networking, Storage "), true)]
    #[case::mixed(Value::from("Networking,foo"), false)]
    #[case::trailing_comma(Value::from("Networking,"), false)]
    #[case::wrong_case(Value::from("networking"), false)]
    fn categories(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(validate_categories(&value), expected);
    }

    #[rstest]
    #[case::empty(Value::from(""), false)]
    #[case::invalid_type(Value::Int(1), false)]
    #[case::zulu_string(Value::from("2023-08-17T12:00:00Z"), true)]
    #[case::offset_string(Value::from("2023-08-17T12:00:00-05:00"), true)]
    #[case::garbage(Value::from("17/08/2023"), false)]
    #[case::native(Value::DateTime(Utc::now().fixed_offset()), true)]
    #[case::null(Value::Null, false)]
    fn timestamp(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(validate_timestamp(&value), expected);
    }

    #[rstest]
    #[case::empty(Value::from(""), false)]
    #[case::invalid_type(Value::Int(1), false)]
    #[case::valid(Value::from("1.0.0"), true)]
    #[case::prerelease(Value::from("0.9.4-rc.1+build.5"), true)]
    #[case::four_components(Value::from("1.2.3.4"), false)]
    #[case::two_components(Value::from("1.2"), false)]
    #[case::v_prefix(Value::from("v1.0.0"), false)]
    #[case::float(Value::Float(1.0), false)]
    fn semver(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(validate_semver(&value), expected);
    }

    #[test]
    fn repeated_calls_agree() {
        let value = Value::from("Networking,Storage");
        assert_eq!(validate_categories(&value), validate_categories(&value));
        assert_eq!(value, Value::from("Networking,Storage"));
    }
}
