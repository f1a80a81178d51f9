//! Body extractor that never rejects.
//!
//! Create/upsert endpoints accept any body: anything that is not valid JSON
//! for the target type (including an empty body) becomes `T::default()`.

use std::convert::Infallible;

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::observability::LENIENT_DECODE_FALLBACKS_TOTAL;

pub struct LenientJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(Self(decode_or_default(&bytes))),
            Err(e) => {
                warn!(event = "body_read_failed", error = %e, "request body unreadable; using defaults");
                LENIENT_DECODE_FALLBACKS_TOTAL.inc();
                Ok(Self(T::default()))
            }
        }
    }
}

/// Decode `bytes` as JSON, falling back to the default value.
pub fn decode_or_default<T: DeserializeOwned + Default>(bytes: &[u8]) -> T {
    match serde_json::from_slice(bytes) {
        Ok(v) => v,
        Err(e) => {
            warn!(event = "body_decode_failed", error = %e, len = bytes.len(), "malformed body; using defaults");
            LENIENT_DECODE_FALLBACKS_TOTAL.inc();
            T::default()
        }
    }
}
