//! Extraction of record lists from the backend's inconsistent response envelopes.
//!
//! Depending on the endpoint the backend answers with a bare array, `{"items": [...]}`,
//! `{"data": [...]}`, or a collection-named key such as `{"seatrips": [...]}`. Anything
//! that does not match degrades to an empty list rather than an error.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Returns the record list carried by `payload`.
///
/// A bare array is returned as-is. Otherwise each key of `candidates` is tried in order
/// and the first one holding an array wins. Any other shape yields an empty list.
pub fn normalize_list(payload: Value, candidates: &[&str]) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => candidates
            .iter()
            .find(|key| map.get(**key).is_some_and(Value::is_array))
            .and_then(|key| map.remove(*key))
            .and_then(|value| match value {
                Value::Array(items) => Some(items),
                _ => None,
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Parses a raw response body, treating a body that is not JSON as `null`.
pub fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or(Value::Null)
}

/// Decodes normalized records into a typed shape, skipping entries that are not records.
pub fn decode_records<T: DeserializeOwned>(records: Vec<Value>) -> Vec<T> {
    records
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const KEYS: &[&str] = &["seatrips", "items", "data"];

    #[test]
    fn returns_bare_array() {
        let records = normalize_list(json!([{ "id": 1 }, { "id": 2 }]), KEYS);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn unwraps_items_envelope() {
        let records = normalize_list(json!({ "items": [{ "id": 1 }] }), KEYS);
        assert_eq!(records, vec![json!({ "id": 1 })]);
    }

    #[test]
    fn unwraps_data_envelope() {
        let records = normalize_list(json!({ "data": [{ "id": 1 }, { "id": 2 }] }), KEYS);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn unrelated_shape_is_empty() {
        assert!(normalize_list(json!({ "message": "ok" }), KEYS).is_empty());
        assert!(normalize_list(json!("text"), KEYS).is_empty());
        assert!(normalize_list(Value::Null, KEYS).is_empty());
    }

    #[test]
    fn prefers_earlier_candidate() {
        let payload = json!({
            "data": [{ "id": "from-data" }],
            "seatrips": [{ "id": "from-seatrips" }]
        });

        let records = normalize_list(payload, KEYS);
        assert_eq!(records, vec![json!({ "id": "from-seatrips" })]);
    }

    #[test]
    fn skips_candidate_that_is_not_an_array() {
        let payload = json!({
            "seatrips": { "count": 3 },
            "data": [{ "id": 1 }]
        });

        let records = normalize_list(payload, KEYS);
        assert_eq!(records, vec![json!({ "id": 1 })]);
    }

    #[test]
    fn non_json_body_parses_as_null() {
        assert_eq!(parse_body("<html>502 Bad Gateway</html>"), Value::Null);
        assert_eq!(parse_body("[1]"), json!([1]));
    }

    #[test]
    fn decode_skips_non_objects() {
        #[derive(serde::Deserialize)]
        struct Named {
            name: String,
        }

        let records = vec![json!({ "name": "a" }), json!(3), json!({ "name": "b" })];
        let decoded: Vec<Named> = decode_records(records);

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[1].name, "b");
    }
}
