//! Column inference for the dashboard's generic record tables.

use serde_json::Value;

/// Substrings that hide a key from generic tables, compared case-insensitively.
///
/// Media links, identifiers, and timestamps are noise in a summary table. Matching is by
/// substring, so `admin_id`, `image_url`, and `createdAt` are all hidden.
pub const HIDDEN_COLUMN_PATTERNS: &[&str] = &[
    "id",
    "created_at",
    "updated_at",
    "createdat",
    "updatedat",
    "image",
    "video",
    "photo",
    "thumbnail",
    "banner",
];

pub fn is_hidden_column(key: &str) -> bool {
    let key = key.to_lowercase();
    HIDDEN_COLUMN_PATTERNS
        .iter()
        .any(|pattern| key.contains(pattern))
}

/// Union of the keys of every record, in first-seen order, minus hidden columns.
pub fn infer_columns(records: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();

    for record in records {
        let Some(map) = record.as_object() else {
            continue;
        };

        for key in map.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    columns.retain(|key| !is_hidden_column(key));
    columns
}

/// Text shown in a generic table cell.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
