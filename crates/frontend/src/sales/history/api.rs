use contracts::sales::history::Sale;
use web_sys::AbortSignal;

use crate::shared::api_error::ApiError;
use crate::shared::http;
use crate::shared::list::{ListPayload, ListQuery};

const BASE: &str = "/api/sales/history";

pub async fn fetch_sales(
    query: ListQuery,
    signal: Option<AbortSignal>,
) -> Result<ListPayload<Sale>, ApiError> {
    http::fetch_list(BASE, &query, signal).await
}

/// Void a sale. The backend keeps the record but flips it to "voided" and
/// reverses its stock movements; in the history list the row is treated like
/// a delete and resynced.
pub async fn void_sale(id: String) -> Result<(), ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(&id));
    http::delete_entity(&path).await
}
