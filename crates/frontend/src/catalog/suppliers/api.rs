use contracts::catalog::suppliers::{CreateSupplierDto, Supplier, UpdateSupplierDto};
use web_sys::AbortSignal;

use crate::shared::api_error::ApiError;
use crate::shared::http;
use crate::shared::list::{ListPayload, ListQuery};

const BASE: &str = "/api/catalog/suppliers";

pub async fn fetch_suppliers(
    query: ListQuery,
    signal: Option<AbortSignal>,
) -> Result<ListPayload<Supplier>, ApiError> {
    http::fetch_list(BASE, &query, signal).await
}

pub async fn create_supplier(dto: CreateSupplierDto) -> Result<Supplier, ApiError> {
    http::post_entity(BASE, &dto).await
}

pub async fn update_supplier(dto: UpdateSupplierDto) -> Result<Supplier, ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(&dto.id));
    http::put_entity(&path, &dto).await
}

pub async fn delete_supplier(id: String) -> Result<(), ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(&id));
    http::delete_entity(&path).await
}
