use crate::shared::api_utils::put_json;
use contracts::domain::a005_order::aggregate::{Order, OrderKey, OrderUpdate};
use contracts::domain::common::{AggregateId, AggregateRoot};

/// Submit the serialized draft. One request per save action; no retry.
pub async fn update_order(key: OrderKey, update: &OrderUpdate) -> Result<(), String> {
    put_json(
        &format!("/api/{}/{}", Order::collection_name(), key.as_string()),
        update,
    )
    .await
}
