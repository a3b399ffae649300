//! Normalization of heterogeneous list responses.
//!
//! The backend is not consistent about how it wraps collections: newer
//! endpoints return a Laravel-style paginator, older ones a plain array, and
//! a few wrap the paginator in another `data` envelope. The rest of the
//! frontend never sees this: everything goes through [`parse_list_body`]
//! once and comes out as a flat row list plus optional [`PageMeta`].

use contracts::shared::pagination::PageMeta;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Where the rows array was found in the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// The body itself is the array.
    Bare,
    /// `{"data": [...]}`
    Nested,
    /// `{"data": {"data": [...]}}`
    DoublyNested,
    /// No array at any expected depth; treated as an empty result.
    Missing,
}

/// A normalized list response: flat rows plus server pagination metadata
/// when the endpoint sent any.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPayload<T> {
    pub rows: Vec<T>,
    pub meta: Option<PageMeta>,
}

impl<T> ListPayload<T> {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            meta: None,
        }
    }
}

fn locate_rows(body: &Value) -> (EnvelopeShape, Option<&Vec<Value>>) {
    if let Value::Array(rows) = body {
        return (EnvelopeShape::Bare, Some(rows));
    }
    match body.get("data") {
        Some(Value::Array(rows)) => (EnvelopeShape::Nested, Some(rows)),
        Some(inner) => match inner.get("data") {
            Some(Value::Array(rows)) => (EnvelopeShape::DoublyNested, Some(rows)),
            _ => (EnvelopeShape::Missing, None),
        },
        None => (EnvelopeShape::Missing, None),
    }
}

/// Resolve the envelope once and deserialize the rows.
///
/// Rows that fail to deserialize are skipped with a warning rather than
/// failing the whole page. A body with no array at any expected depth is an
/// empty result, not an error.
pub fn parse_list_body<T: DeserializeOwned>(body: Value) -> ListPayload<T> {
    let meta = PageMeta::from_value(&body);
    let (shape, raw_rows) = locate_rows(&body);
    let raw_rows = match raw_rows {
        Some(rows) => rows,
        None => {
            if body != Value::Null {
                log::warn!("list response has no rows array, treating as empty");
            }
            return ListPayload::empty();
        }
    };

    let mut rows = Vec::with_capacity(raw_rows.len());
    for raw in raw_rows {
        match serde_json::from_value::<T>(raw.clone()) {
            Ok(row) => rows.push(row),
            Err(err) => log::warn!("skipping malformed row ({:?} envelope): {}", shape, err),
        }
    }
    ListPayload { rows, meta }
}

/// Peel single-entity `data` envelopes, for create/update responses.
pub fn unwrap_entity(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            let inner = map.remove("data").unwrap_or(Value::Null);
            match inner {
                Value::Object(ref inner_map) if inner_map.contains_key("data") => {
                    unwrap_entity(inner)
                }
                other => other,
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: String,
    }

    fn ids(payload: &ListPayload<Row>) -> Vec<&str> {
        payload.rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn all_three_shapes_normalize_identically() {
        let rows = json!([{"id": "1"}, {"id": "2"}, {"id": "3"}]);
        let bare = parse_list_body::<Row>(rows.clone());
        let nested = parse_list_body::<Row>(json!({ "data": rows }));
        let doubly = parse_list_body::<Row>(json!({ "data": { "data": rows } }));

        assert_eq!(ids(&bare), vec!["1", "2", "3"]);
        assert_eq!(bare.rows, nested.rows);
        assert_eq!(bare.rows, doubly.rows);
    }

    #[test]
    fn non_array_shapes_are_empty_not_errors() {
        assert!(parse_list_body::<Row>(json!({"message": "ok"})).rows.is_empty());
        assert!(parse_list_body::<Row>(json!({"data": {"id": "1"}})).rows.is_empty());
        assert!(parse_list_body::<Row>(json!(null)).rows.is_empty());
        assert!(parse_list_body::<Row>(json!(42)).rows.is_empty());
    }

    #[test]
    fn paginator_meta_is_picked_up() {
        let body = json!({
            "data": [{"id": "7"}],
            "total": 31,
            "current_page": 4,
            "last_page": 4
        });
        let payload = parse_list_body::<Row>(body);
        assert_eq!(ids(&payload), vec!["7"]);
        let meta = payload.meta.unwrap();
        assert_eq!((meta.total, meta.current_page, meta.last_page), (31, 4, 4));
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let body = json!([{"id": "1"}, {"no_id": true}, {"id": "3"}]);
        let payload = parse_list_body::<Row>(body);
        assert_eq!(ids(&payload), vec!["1", "3"]);
    }

    #[test]
    fn unwrap_entity_peels_data_layers() {
        let entity = json!({"id": "9", "name": "x"});
        assert_eq!(unwrap_entity(entity.clone()), entity);
        assert_eq!(unwrap_entity(json!({ "data": entity })), entity);
        assert_eq!(unwrap_entity(json!({"data": {"data": entity}})), entity);
    }
}
