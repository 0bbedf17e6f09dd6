use crate::shared::api_utils::get_json;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::common::AggregateRoot;

/// Load the product catalog (order lines are re-priced from it).
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    get_json(&format!("/api/{}", Product::collection_name())).await
}
