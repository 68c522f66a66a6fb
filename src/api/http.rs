//! HTTP Backend
//!
//! `WishlistApi` over `fetch`. Every request carries an abort signal and is
//! raced against the configured timeout.

use async_trait::async_trait;
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;
use reqwasm::http::{Method, Request, Response};
use web_sys::{AbortController, FormData};

use super::{Endpoint, GiftPayload, ReservationAction, WishlistApi, TOKEN_HEADER};
use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{AuthResponse, EventInfo};

#[derive(Debug, Clone)]
pub struct HttpApi {
    config: AppConfig,
}

impl HttpApi {
    pub fn new(config: &AppConfig) -> Self {
        Self { config: config.clone() }
    }

    /// Send a request and map non-2xx statuses to errors
    async fn send(&self, endpoint: Endpoint, token: &str, body: Option<FormData>) -> ApiResult<Response> {
        let url = self.config.api_url(&endpoint.path());
        log::debug!(target: "api", "{} {}", endpoint.method(), url);

        let controller = AbortController::new().map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
        let signal = controller.signal();
        let request = Request::new(&url)
            .method(to_method(&endpoint))
            .header(TOKEN_HEADER, token)
            .abort_signal(Some(&signal));
        // multipart bodies set their own boundary content type
        let request = match body {
            Some(form) => request.body(form),
            None => request.header("Content-Type", "application/json"),
        };

        let timeout_ms = self.config.request_timeout_ms;
        let response = request.send();
        let timeout = TimeoutFuture::new(timeout_ms);
        pin_mut!(response, timeout);

        let response = match select(response, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
            Either::Right(_) => {
                controller.abort();
                log::warn!(target: "api", "{} {} aborted after {} ms", endpoint.method(), url, timeout_ms);
                return Err(ApiError::Timeout(timeout_ms));
            }
        };

        match ApiError::from_status(response.status()) {
            Some(err) => Err(err),
            None => Ok(response),
        }
    }
}

fn to_method(endpoint: &Endpoint) -> Method {
    match endpoint.method() {
        "PUT" => Method::PUT,
        "DELETE" => Method::DELETE,
        _ => Method::POST,
    }
}

fn to_form_data(payload: &GiftPayload) -> ApiResult<FormData> {
    let form = FormData::new().map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    for (name, value) in &payload.fields {
        form.append_with_str(name, value)
            .map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    }
    if let Some(file) = &payload.image {
        form.append_with_blob("image", file)
            .map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    }
    Ok(form)
}

#[async_trait(?Send)]
impl WishlistApi for HttpApi {
    async fn authenticate(&self, token: &str) -> ApiResult<AuthResponse> {
        let response = self.send(Endpoint::Auth, token, None).await?;
        response.json::<AuthResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_info(&self, token: &str) -> ApiResult<EventInfo> {
        let response = self.send(Endpoint::GetInfo, token, None).await?;
        response.json::<EventInfo>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn set_reservation(&self, token: &str, gift_id: u32, action: ReservationAction) -> ApiResult<()> {
        self.send(Endpoint::Reservation { gift_id, action }, token, None).await?;
        Ok(())
    }

    async fn save_gift(&self, token: &str, gift_id: Option<u32>, payload: &GiftPayload) -> ApiResult<()> {
        let form = to_form_data(payload)?;
        self.send(Endpoint::save_gift(gift_id), token, Some(form)).await?;
        Ok(())
    }

    async fn delete_gift(&self, token: &str, gift_id: u32) -> ApiResult<()> {
        self.send(Endpoint::DeleteGift(gift_id), token, None).await?;
        Ok(())
    }
}
