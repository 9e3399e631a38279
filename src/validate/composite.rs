//! Field validators built on the structural checkers

use super::structural::validate_list_of_dicts;
use crate::manifest::{ICON_SCHEMA, LINK_SCHEMA, MAINTAINER_SCHEMA, RecordSchema, Value};
use crate::vocabulary::ICON_MEDIA_TYPES;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use log::debug;

/// Standard padded alphabet. Unlike `general_purpose::STANDARD` this accepts
/// non-zero trailing bits in the last symbol.
const ICON_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// `spec.icon`: non-empty list of `{base64data, mediatype}` with an image
/// media type and a decodable payload
pub fn validate_icon(value: &Value) -> bool {
    if !validate_non_empty_records(value, &ICON_SCHEMA, "icon") {
        return false;
    }

    value
        .as_list()
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_dict)
        .all(|icon| {
            let media_ok = icon
                .get("mediatype")
                .and_then(Value::as_str)
                .is_some_and(|media| {
                    let ok = ICON_MEDIA_TYPES.contains(media);
                    if !ok {
                        debug!("icon: unsupported media type {:?}", media);
                    }
                    ok
                });
            media_ok
                && icon
                    .get("base64data")
                    .and_then(Value::as_str)
                    .is_some_and(is_base64_payload)
        })
}

/// `spec.maintainers`: non-empty list of `{name, email}`
pub fn validate_maintainers(value: &Value) -> bool {
    validate_non_empty_records(value, &MAINTAINER_SCHEMA, "maintainers")
}

/// `spec.links`: non-empty list of `{name, url}`
pub fn validate_links(value: &Value) -> bool {
    validate_non_empty_records(value, &LINK_SCHEMA, "links")
}

fn validate_non_empty_records(value: &Value, schema: &RecordSchema<'_>, field: &str) -> bool {
    if value.as_list().is_some_and(<[Value]>::is_empty) {
        debug!("{}: list is empty", field);
        return false;
    }
    validate_list_of_dicts(value, schema)
}

/// Whitespace (including newlines from wrapped YAML scalars) is ignored
fn is_base64_payload(data: &str) -> bool {
    let compact: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        debug!("icon: empty base64data");
        return false;
    }

    match ICON_ENGINE.decode(compact.as_bytes()) {
        Ok(_) => true,
        Err(e) => {
            debug!("icon: base64data does not decode: {}", e);
            false
        }
    }
}
