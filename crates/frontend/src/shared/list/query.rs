use serde::{Deserialize, Serialize};

/// Parameters of one list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: usize,
    #[serde(rename = "limit")]
    pub page_size: usize,
    /// Only attached when the user typed something; the backend treats a
    /// missing `search` as "no filter".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListQuery {
    pub fn new(page: usize, page_size: usize, search_text: &str) -> Self {
        let trimmed = search_text.trim();
        Self {
            page,
            page_size,
            search: if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_is_omitted() {
        let q = ListQuery::new(1, 10, "   ");
        assert_eq!(q.search, None);
        assert_eq!(serde_qs::to_string(&q).unwrap(), "page=1&limit=10");
    }

    #[test]
    fn search_is_trimmed_and_survives_encoding() {
        let q = ListQuery::new(2, 25, "  coca cola ");
        assert_eq!(q.search.as_deref(), Some("coca cola"));
        let qs = serde_qs::to_string(&q).unwrap();
        let back: ListQuery = serde_qs::from_str(&qs).unwrap();
        assert_eq!(back, q);
    }
}
