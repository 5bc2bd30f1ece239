use thiserror::Error;

/// Failure talking to the order store.
///
/// Every variant is `Clone` because results travel inside iced messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("order store returned {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// The two failures the orders screen knows about.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrdersError {
    #[error("failed to load orders: {0}")]
    LoadFailure(#[source] ApiError),
    #[error("failed to update order {order_id}: {source}")]
    SaveFailure {
        order_id: String,
        #[source]
        source: ApiError,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThumbnailError {
    #[error("could not fetch image: {0}")]
    Fetch(#[from] ApiError),
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("thumbnail task failed: {0}")]
    Task(String),
}
