use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};
use tracing::error;

// Prometheus metrics (default registry)
pub static PEOPLE_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("people_api_people_created_total", "Total people created")
        .expect("register people_created_total")
});

pub static PEOPLE_CONFLICTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "people_api_people_conflicts_total",
        "Total creates rejected because the id already existed"
    )
    .expect("register people_conflicts_total")
});

pub static PEOPLE_DELETE_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "people_api_people_delete_requests_total",
        "Total delete requests, including ones for unknown ids"
    )
    .expect("register people_delete_requests_total")
});

pub static COLOR_UPSERTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("people_api_color_upserts_total", "Total color upserts")
        .expect("register color_upserts_total")
});

pub static LENIENT_DECODE_FALLBACKS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "people_api_lenient_decode_fallbacks_total",
        "Total request bodies replaced by default values after a decode failure"
    )
    .expect("register lenient_decode_fallbacks_total")
});

/// Touch every counter so `/metrics` lists them before their first increment.
pub fn register_all() {
    Lazy::force(&PEOPLE_CREATED_TOTAL);
    Lazy::force(&PEOPLE_CONFLICTS_TOTAL);
    Lazy::force(&PEOPLE_DELETE_REQUESTS_TOTAL);
    Lazy::force(&COLOR_UPSERTS_TOTAL);
    Lazy::force(&LENIENT_DECODE_FALLBACKS_TOTAL);
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        error!(error = %e, "metrics encode failed");
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

pub async fn metrics() -> (StatusCode, String) {
    encode_metrics()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_counters_are_exposed() {
        register_all();
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("people_api_people_created_total"));
        assert!(body.contains("people_api_lenient_decode_fallbacks_total"));
    }
}
