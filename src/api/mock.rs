//! In-memory `WishlistApi` for flow tests

use std::cell::RefCell;

use async_trait::async_trait;

use super::{Endpoint, GiftPayload, ReservationAction, WishlistApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{AuthResponse, EventInfo};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: Endpoint,
    pub token: String,
    /// Multipart text fields, empty for bodiless calls
    pub fields: Vec<(&'static str, String)>,
    pub has_image: bool,
}

/// Canned responses per operation; every call is recorded
pub struct MockApi {
    pub auth: ApiResult<AuthResponse>,
    pub info: ApiResult<EventInfo>,
    pub reservation: ApiResult<()>,
    pub save: ApiResult<()>,
    pub delete: ApiResult<()>,
    pub(crate) calls: RefCell<Vec<RecordedCall>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            auth: Ok(AuthResponse::default()),
            info: Ok(EventInfo::default()),
            reservation: Ok(()),
            save: Ok(()),
            delete: Ok(()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl MockApi {
    pub fn failing_auth(status: u16) -> Self {
        Self { auth: Err(ApiError::Status { status }), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.calls.borrow().iter().map(|c| c.endpoint).collect()
    }

    fn record(&self, endpoint: Endpoint, token: &str, payload: Option<&GiftPayload>) {
        self.calls.borrow_mut().push(RecordedCall {
            endpoint,
            token: token.to_string(),
            fields: payload.map(|p| p.fields.clone()).unwrap_or_default(),
            has_image: payload.is_some_and(|p| p.image.is_some()),
        });
    }
}

#[async_trait(?Send)]
impl WishlistApi for MockApi {
    async fn authenticate(&self, token: &str) -> ApiResult<AuthResponse> {
        self.record(Endpoint::Auth, token, None);
        self.auth.clone()
    }

    async fn get_info(&self, token: &str) -> ApiResult<EventInfo> {
        self.record(Endpoint::GetInfo, token, None);
        self.info.clone()
    }

    async fn set_reservation(&self, token: &str, gift_id: u32, action: ReservationAction) -> ApiResult<()> {
        self.record(Endpoint::Reservation { gift_id, action }, token, None);
        self.reservation.clone()
    }

    async fn save_gift(&self, token: &str, gift_id: Option<u32>, payload: &GiftPayload) -> ApiResult<()> {
        self.record(Endpoint::save_gift(gift_id), token, Some(payload));
        self.save.clone()
    }

    async fn delete_gift(&self, token: &str, gift_id: u32) -> ApiResult<()> {
        self.record(Endpoint::DeleteGift(gift_id), token, None);
        self.delete.clone()
    }
}
