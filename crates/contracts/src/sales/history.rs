use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed sale as shown in the history list.
///
/// Line items are fetched separately when a sale is opened; the list endpoint
/// sends only the summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    /// Receipt number, e.g. "MAIN-000421".
    pub number: String,
    pub branch_id: String,
    pub branch_name: Option<String>,
    pub cashier_name: Option<String>,
    pub customer_name: Option<String>,
    pub total: f64,
    pub payment_method: String,
    /// "completed" or "voided".
    pub status: String,
    pub sold_at: DateTime<Utc>,
}

impl Sale {
    pub fn is_voided(&self) -> bool {
        self.status == "voided"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_deserializes_with_utc_timestamp() {
        let raw = r#"{
            "id": "s-1",
            "number": "MAIN-000421",
            "branch_id": "b-1",
            "branch_name": "Центральный",
            "cashier_name": "Иванова А.",
            "customer_name": null,
            "total": 1530.50,
            "payment_method": "cash",
            "status": "completed",
            "sold_at": "2025-06-01T14:25:00Z"
        }"#;
        let sale: Sale = serde_json::from_str(raw).unwrap();
        assert_eq!(sale.number, "MAIN-000421");
        assert!(!sale.is_voided());
        assert_eq!(sale.sold_at.timezone(), Utc);
    }
}
