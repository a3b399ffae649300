use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-side pagination metadata.
///
/// Not every list endpoint sends it: older endpoints return the whole result
/// set and leave paging to the client. When present, the fields may sit at the
/// top level of the response body or inside the `data` wrapper, so both spots
/// are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: usize,
    pub current_page: usize,
    pub last_page: usize,
}

impl PageMeta {
    /// Extract pagination metadata from a response body.
    ///
    /// Returns `None` unless all three fields are present as numbers, either
    /// at the top level or nested under `data`.
    pub fn from_value(body: &Value) -> Option<Self> {
        if let Ok(meta) = serde_json::from_value::<PageMeta>(body.clone()) {
            return Some(meta);
        }
        body.get("data")
            .and_then(|data| serde_json::from_value::<PageMeta>(data.clone()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn meta_at_top_level() {
        let body = json!({
            "total": 42,
            "current_page": 2,
            "last_page": 5,
            "data": [{"id": "1"}]
        });
        assert_eq!(
            PageMeta::from_value(&body),
            Some(PageMeta {
                total: 42,
                current_page: 2,
                last_page: 5
            })
        );
    }

    #[test]
    fn meta_nested_under_data() {
        let body = json!({
            "data": {
                "total": 7,
                "current_page": 1,
                "last_page": 1,
                "data": []
            }
        });
        assert_eq!(
            PageMeta::from_value(&body),
            Some(PageMeta {
                total: 7,
                current_page: 1,
                last_page: 1
            })
        );
    }

    #[test]
    fn missing_fields_yield_none() {
        assert_eq!(PageMeta::from_value(&json!([1, 2, 3])), None);
        assert_eq!(PageMeta::from_value(&json!({"total": 3, "data": []})), None);
        assert_eq!(PageMeta::from_value(&json!({"data": [1, 2, 3]})), None);
    }
}
