use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use service::colors::{ColorSetting, ColorSnapshot, NO_COLORS_REGISTERED};

use crate::extract::LenientJson;
use crate::observability::COLOR_UPSERTS_TOTAL;
use crate::state::AppState;

/// Every color endpoint answers with one of these shapes.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ColorReply {
    Message { message: String },
    Hue { hue: i64 },
    Snapshot(ColorSnapshot),
}

impl ColorReply {
    pub fn message(msg: impl Into<String>) -> Self {
        Self::Message { message: msg.into() }
    }
}

#[utoipa::path(
    post, path = "/color", tag = "colors",
    request_body = crate::openapi::ColorSettingDoc,
    responses((status = 200, description = "Full major -> hue mapping after the upsert"))
)]
pub async fn upsert_color(
    State(state): State<AppState>,
    LenientJson(setting): LenientJson<ColorSetting>,
) -> Json<ColorReply> {
    let snapshot = state.colors.upsert(setting.major, setting.hue).await;
    COLOR_UPSERTS_TOTAL.inc();
    Json(ColorReply::Snapshot(snapshot))
}

#[utoipa::path(
    get, path = "/color/{id}", tag = "colors",
    params(("id" = i64, Path, description = "Beacon major")),
    responses(
        (status = 200, description = "Hue for the major", body = crate::openapi::HueDoc),
        (status = 404, description = "No hue registered for the major", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_color(State(state): State<AppState>, Path(major): Path<i64>) -> Response {
    match state.colors.get(major).await {
        Ok(hue) => Json(ColorReply::Hue { hue }).into_response(),
        Err(e) => (state.not_found_status(), Json(ColorReply::message(e.to_string()))).into_response(),
    }
}

#[utoipa::path(
    get, path = "/colors", tag = "colors",
    responses((status = 200, description = "Full mapping, or a message when nothing was ever registered"))
)]
pub async fn get_colors(State(state): State<AppState>) -> Json<ColorReply> {
    match state.colors.get_all().await {
        Some(snapshot) => Json(ColorReply::Snapshot(snapshot)),
        None => Json(ColorReply::message(NO_COLORS_REGISTERED)),
    }
}
