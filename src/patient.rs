//! Data model for one synthetic patient record.
//!
//! A record is an ordered mapping from field name to value. Values carry one
//! of three payload types (string, integer, real) or are missing, which is how
//! real data fetched from backend sources arrives: some fields simply have no
//! reported value for a given patient.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// The value of one field in a patient record.
///
/// Downstream consumers must handle the `Missing` case explicitly; it is a
/// normal outcome of generation, not an error. When serialized (e.g. to the
/// JSON a backend would return), `Missing` becomes null and the other
/// variants become their plain payloads.
#[derive(PartialEq, Clone, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Real(f64),
    Missing,
}

impl FieldValue {
    /// Whether this field was reported absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(value: Option<i64>) -> Self {
        match value {
            Some(n) => FieldValue::Integer(n),
            None => FieldValue::Missing,
        }
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(x) => FieldValue::Real(x),
            None => FieldValue::Missing,
        }
    }
}

impl<'a> From<Option<&'a str>> for FieldValue {
    fn from(value: Option<&'a str>) -> Self {
        match value {
            Some(s) => FieldValue::String(String::from(s)),
            None => FieldValue::Missing,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{s}"),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Real(x) => write!(f, "{x}"),
            FieldValue::Missing => write!(f, "missing"),
        }
    }
}

/// One complete patient record: field names mapped to values, in the fixed
/// order the fields are generated.
///
/// The record always contains every field, including the missing ones, so
/// that a consumer can rely on the full set of keys being present.
#[derive(PartialEq, Clone, Debug)]
pub struct PatientRecord {
    fields: Vec<(&'static str, FieldValue)>,
}

impl PatientRecord {
    pub(crate) fn new(fields: Vec<(&'static str, FieldValue)>) -> Self {
        Self { fields }
    }

    /// Look up a field by name. Returns None only for names that are not
    /// part of the record; a generated-but-absent field is `Some(Missing)`.
    pub fn get(&self, field_name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field_name)
            .map(|(_, value)| value)
    }

    /// Iterate over (field name, value) pairs in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> + '_ {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    /// Field names in record order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Serialize as a map so the JSON form reads like the record itself:
/// {"name": "...", "age": 68, ..., "nsaid": null}. Key order follows
/// record order.
impl Serialize for PatientRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn short_record() -> PatientRecord {
        PatientRecord::new(vec![
            ("name", FieldValue::String(String::from("John Doe"))),
            ("age", FieldValue::Integer(68)),
            ("hb", FieldValue::Real(11.5)),
            ("oac", FieldValue::Missing),
        ])
    }

    #[test]
    fn missing_serializes_to_null() {
        let value = serde_json::to_value(FieldValue::Missing).unwrap();
        assert_eq!(value, serde_json::Value::Null);
    }

    #[test]
    fn payloads_serialize_without_tags() {
        let json = serde_json::to_string(&short_record()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"John Doe","age":68,"hb":11.5,"oac":null}"#
        );
    }

    #[test]
    fn null_deserializes_to_missing() {
        let value: FieldValue = serde_json::from_str("null").unwrap();
        assert_eq!(value, FieldValue::Missing);

        let value: FieldValue = serde_json::from_str("68").unwrap();
        assert_eq!(value, FieldValue::Integer(68));

        let value: FieldValue = serde_json::from_str("11.5").unwrap();
        assert_eq!(value, FieldValue::Real(11.5));
    }

    #[test]
    fn absent_options_become_missing() {
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Missing);
        assert_eq!(FieldValue::from(Some(70)), FieldValue::Integer(70));
        assert_eq!(FieldValue::from(Some(12.3)), FieldValue::Real(12.3));
        assert_eq!(
            FieldValue::from(Some("Yes")),
            FieldValue::String(String::from("Yes"))
        );
        assert!(FieldValue::from(None::<&str>).is_missing());
    }

    #[test]
    fn lookup_distinguishes_absent_fields_from_unknown_names() {
        let record = short_record();
        assert_eq!(record.get("age"), Some(&FieldValue::Integer(68)));
        assert_eq!(record.get("oac"), Some(&FieldValue::Missing));
        assert_eq!(record.get("no_such_field"), None);
    }

    #[test]
    fn display_renders_missing_as_text() {
        assert_eq!(format!("{}", FieldValue::Missing), "missing");
        assert_eq!(format!("{}", FieldValue::Integer(70)), "70");
        assert_eq!(format!("{}", FieldValue::Real(11.5)), "11.5");
    }

    #[test]
    fn iteration_preserves_record_order() {
        let names: Vec<_> = short_record().field_names().collect();
        assert_eq!(names, vec!["name", "age", "hb", "oac"]);
    }
}
