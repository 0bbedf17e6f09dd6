use crate::shared::api_utils::get_json;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::common::AggregateRoot;

/// Load the customer catalog.
pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    get_json(&format!("/api/{}", Customer::collection_name())).await
}
