use reqwest::{Client, Response, Url};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::data::{Order, OrderStatus};

/// HTTP client for the order store REST API.
///
/// Cheap to clone; every async task gets its own copy.
#[derive(Debug, Clone)]
pub struct OrdersClient {
    http: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct StatusUpdate {
    status: OrderStatus,
}

impl OrdersClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = Client::builder()
            .user_agent(concat!("orders-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// `{base}/api/orders[/{segment}]`, each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(["api", "orders"]).extend(segments);
        }
        url
    }

    /// `GET /api/orders`
    pub async fn fetch_orders(&self) -> Result<Vec<Order>, ApiError> {
        let response = self.http.get(self.endpoint(&[])).send().await?;
        let orders = ensure_success(response).await?.json().await?;
        Ok(orders)
    }

    /// `PUT /api/orders/{id}` with `{"status": ...}`; returns the store's copy of the order
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let response = self
            .http
            .put(self.endpoint(&[order_id]))
            .json(&StatusUpdate { status })
            .send()
            .await?;
        let order = ensure_success(response).await?.json().await?;
        Ok(order)
    }

    /// Download an arbitrary resource, used for product pictures
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let url = Url::parse(url).map_err(|e| ApiError::Transport(format!("{url}: {e}")))?;
        let response = self.http.get(url).send().await?;
        let bytes = ensure_success(response).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Anything but 2xx is a failure
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status = %status, body = %body, "Order store rejected request");
    Err(ApiError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}
