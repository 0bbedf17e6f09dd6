use crate::shared::api_utils::api_url;
use contracts::projections::p900_purchase_report::dto::Purchase;
use gloo_net::http::Request;

const API_BASE: &str = "/api/compras";

/// Load every recorded purchase for the report.
pub async fn fetch_purchases() -> Result<Vec<Purchase>, String> {
    let resp = Request::get(&api_url(API_BASE))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<Vec<Purchase>>().await.map_err(|e| format!("{e}"))
}
