use crate::shared::api_utils::get_json;
use contracts::domain::a003_supply_item::aggregate::SupplyItem;
use contracts::domain::common::AggregateRoot;

/// Load the supply item catalog (insumos).
pub async fn fetch_supply_items() -> Result<Vec<SupplyItem>, String> {
    get_json(&format!("/api/{}", SupplyItem::collection_name())).await
}
