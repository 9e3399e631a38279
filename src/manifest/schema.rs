//! Record schema definitions

use super::value::{Value, ValueKind};
use std::collections::BTreeMap;

/// One expected field of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaField<'a> {
    pub name: &'a str,
    pub kind: ValueKind,
}

impl<'a> SchemaField<'a> {
    pub const fn new(name: &'a str, kind: ValueKind) -> Self {
        Self { name, kind }
    }
}

/// Exact shape of a dict-like record: the listed fields, nothing more.
///
/// Field names are expected to be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema<'a> {
    fields: &'a [SchemaField<'a>],
}

impl<'a> RecordSchema<'a> {
    pub const fn new(fields: &'a [SchemaField<'a>]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'a [SchemaField<'a>] {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check a record against the schema
    ///
    /// The record must carry every schema field with the declared kind and
    /// no other keys.
    pub fn matches(&self, record: &BTreeMap<String, Value>) -> bool {
        record.len() == self.fields.len()
            && self.fields.iter().all(|field| {
                record
                    .get(field.name)
                    .is_some_and(|value| value.kind() == field.kind)
            })
    }
}

/// `spec.icon` entries
pub const ICON_SCHEMA: RecordSchema<'static> = RecordSchema::new(&[
    SchemaField { name: "base64data", kind: ValueKind::Str },
    SchemaField { name: "mediatype", kind: ValueKind::Str },
]);

/// `spec.maintainers` entries
pub const MAINTAINER_SCHEMA: RecordSchema<'static> = RecordSchema::new(&[
    SchemaField { name: "name", kind: ValueKind::Str },
    SchemaField { name: "email", kind: ValueKind::Str },
]);

/// `spec.links` entries
pub const LINK_SCHEMA: RecordSchema<'static> = RecordSchema::new(&[
    SchemaField { name: "name", kind: ValueKind::Str },
    SchemaField { name: "url", kind: ValueKind::Str },
]);

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn exact_key_set_required() {
        let full = record(&[("name", "foo".into()), ("url", "https://foo.com/".into())]);
        assert!(LINK_SCHEMA.matches(&full));

        let missing = record(&[("name", "foo".into())]);
        assert!(!LINK_SCHEMA.matches(&missing));

        let extra = record(&[
            ("name", "foo".into()),
            ("url", "https://foo.com/".into()),
            ("icon", "x".into()),
        ]);
        assert!(!LINK_SCHEMA.matches(&extra));
    }

    #[test]
    fn renamed_key_does_not_match() {
        let renamed = record(&[("name", "foo".into()), ("mail", "foo@bar.com".into())]);
        assert!(!MAINTAINER_SCHEMA.matches(&renamed));
    }

    #[test]
    fn bool_does_not_satisfy_int() {
        let fields = [SchemaField::new("count", ValueKind::Int)];
        let count = RecordSchema::new(&fields);
        assert!(count.matches(&record(&[("count", Value::Int(3))])));
        assert!(!count.matches(&record(&[("count", Value::Bool(true))])));
    }

    #[test]
    fn empty_schema_matches_only_empty_record() {
        let schema = RecordSchema::new(&[]);
        assert!(schema.is_empty());
        assert!(schema.matches(&BTreeMap::new()));
        assert!(!schema.matches(&record(&[("foo", "bar".into())])));
    }
}
