//! Generic list checkers shared by the field validators

use crate::manifest::{RecordSchema, Value};
use log::debug;

/// A list whose elements are all strings. An empty list passes.
pub fn validate_list_of_strings(value: &Value) -> bool {
    let Some(items) = value.as_list() else {
        debug!("list of strings: expected list, found {}", value.kind());
        return false;
    };

    match items.iter().position(|item| item.as_str().is_none()) {
        Some(index) => {
            debug!(
                "list of strings: item {} is {}, expected str",
                index,
                items[index].kind()
            );
            false
        }
        None => true,
    }
}

/// A list of records, each with exactly the schema's fields and kinds.
///
/// An empty list passes without consulting the schema.
pub fn validate_list_of_dicts(value: &Value, schema: &RecordSchema<'_>) -> bool {
    let Some(items) = value.as_list() else {
        debug!("list of dicts: expected list, found {}", value.kind());
        return false;
    };

    for (index, item) in items.iter().enumerate() {
        let Some(record) = item.as_dict() else {
            debug!("list of dicts: item {} is {}, expected dict", index, item.kind());
            return false;
        };

        if !schema.matches(record) {
            debug!(
                "list of dicts: item {} has fields {:?}, expected {:?}",
                index,
                record
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value.kind()))
                    .collect::<Vec<_>>(),
                schema
                    .fields()
                    .iter()
                    .map(|field| format!("{}: {}", field.name, field.kind))
                    .collect::<Vec<_>>()
            );
            return false;
        }
    }

    true
}
