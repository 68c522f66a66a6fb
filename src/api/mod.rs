//! Backend API Bindings
//!
//! The `WishlistApi` trait is the seam between the UI flows and the REST
//! backend. `HttpApi` talks to the real server; tests use `MockApi`.

mod endpoint;
mod http;
#[cfg(test)]
mod mock;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{AuthResponse, EventInfo};

pub use endpoint::{Endpoint, ReservationAction};
pub use http::HttpApi;
#[cfg(test)]
pub use mock::{MockApi, RecordedCall};

/// Header carrying the access token on every request
pub const TOKEN_HEADER: &str = "X-ACCESS-TOKEN";

/// Multipart body for gift create/update
#[derive(Debug, Clone, Default)]
pub struct GiftPayload {
    /// Text fields in submission order
    pub fields: Vec<(&'static str, String)>,
    pub image: Option<web_sys::File>,
}

#[cfg(test)]
impl GiftPayload {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }
}

/// Backend operations, one per endpoint
#[async_trait(?Send)]
pub trait WishlistApi {
    /// Check a token; success carries the admin flag
    async fn authenticate(&self, token: &str) -> ApiResult<AuthResponse>;

    /// Gifts plus event logistics
    async fn get_info(&self, token: &str) -> ApiResult<EventInfo>;

    async fn set_reservation(&self, token: &str, gift_id: u32, action: ReservationAction) -> ApiResult<()>;

    /// Create (`gift_id == None`) or update a gift
    async fn save_gift(&self, token: &str, gift_id: Option<u32>, payload: &GiftPayload) -> ApiResult<()>;

    async fn delete_gift(&self, token: &str, gift_id: u32) -> ApiResult<()>;
}
