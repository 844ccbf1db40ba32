//! JSON extractor with standardized error handling.
//!
//! Deserializes request bodies and converts any parse failure into the
//! project's problem-details envelope (HTTP 400 with the canonical
//! bad-request code) instead of actix's default error shape.

use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;

#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        // Capture the content type before the async block to avoid borrowing
        // the request across an await.
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .map(|ct| ct.to_string());

        Box::pin(async move {
            if let Some(ct) = content_type {
                if !ct.starts_with("application/json") {
                    return Err(AppError::bad_request(
                        ErrorCode::BadRequest,
                        format!("Content-Type must be application/json, got {ct}"),
                    ));
                }
            }

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    AppError::bad_request(
                        ErrorCode::BadRequest,
                        format!("Failed to read request body: {e}"),
                    )
                })?;
                body.extend_from_slice(&chunk);
            }

            match serde_json::from_slice::<T>(&body) {
                Ok(value) => Ok(ValidatedJson(value)),
                Err(e) => {
                    debug!(error = %e, "Rejecting malformed JSON body");
                    Err(AppError::bad_request(
                        ErrorCode::BadRequest,
                        format!("Invalid JSON body: {e}"),
                    ))
                }
            }
        })
    }
}
