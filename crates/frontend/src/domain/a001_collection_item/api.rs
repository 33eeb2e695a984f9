use crate::shared::api_utils::{api_url, read_json};
use crate::shared::error::ApiError;
use contracts::domain::a001_collection_item::aggregate::CollectionItem;
use gloo_net::http::Request;

/// Получить каталог категорий сбора
pub async fn fetch_items() -> Result<Vec<CollectionItem>, ApiError> {
    let response = Request::get(&api_url("items")).send().await?;
    read_json(response).await
}
