//! Catalog REST routes — listings, uploads, and deletes.
//!
//! DESIGN
//! ======
//! Handlers translate HTTP into catalog service calls and map
//! `CatalogError` to `(status, {"error": message})` bodies carrying the
//! messages browser clients already display. A mutation that succeeds
//! notifies the owning room (`sounds-updated` / `gifs-updated`) so
//! every connection re-fetches; a failed mutation never broadcasts.
//! Storage failures keep their detail in the log and surface as the
//! endpoint's generic 500 message.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::event::ServerEvent;
use crate::media::{DEFAULT_GIF_DURATION_MS, GifAnimation, GifDisplay, GifPosition, MediaKind};
use crate::services::catalog::{self, CatalogError, NewUpload, NewUrlGif};
use crate::services::room;
use crate::state::AppState;

type ApiError = (StatusCode, Json<Value>);
type ApiResult = Result<Json<Value>, ApiError>;

// =============================================================================
// QUERY SHAPES
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomQuery {
    pub room_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteQuery {
    pub room_id: Option<String>,
    pub filename: Option<String>,
    pub id: Option<String>,
}

// =============================================================================
// LISTINGS
// =============================================================================

/// `GET /api/sounds?roomId` — presets grouped by category plus the
/// room's uploads. Without a room, only presets are returned.
pub async fn list_sounds(
    State(state): State<AppState>,
    Query(query): Query<RoomQuery>,
) -> ApiResult {
    let preset_categories = catalog::resolve_presets(&state.media, MediaKind::Sound).await;
    let custom_sounds = match &query.room_id {
        Some(room_id) => catalog::resolve_custom(&state.media, room_id, MediaKind::Sound)
            .await
            .map_err(|e| error_response(&e, "Failed to load sounds"))?,
        None => Vec::new(),
    };

    Ok(Json(json!({
        "presetCategories": preset_categories,
        "customSounds": custom_sounds,
    })))
}

/// `GET /api/gifs?roomId` — preset gifs plus the room's uploaded and
/// URL-registered entries.
pub async fn list_gifs(
    State(state): State<AppState>,
    Query(query): Query<RoomQuery>,
) -> ApiResult {
    let preset_categories = catalog::resolve_presets(&state.media, MediaKind::Gif).await;
    let custom_gifs = match &query.room_id {
        Some(room_id) => catalog::resolve_custom(&state.media, room_id, MediaKind::Gif)
            .await
            .map_err(|e| error_response(&e, "Failed to load GIFs"))?,
        None => Vec::new(),
    };

    Ok(Json(json!({
        "presetCategories": preset_categories,
        "customGifs": custom_gifs,
    })))
}

// =============================================================================
// UPLOADS
// =============================================================================

/// `POST /api/upload?roomId` — store one uploaded audio file and
/// notify the room.
pub async fn upload_sound(
    State(state): State<AppState>,
    Query(query): Query<RoomQuery>,
    multipart: Multipart,
) -> ApiResult {
    let room_id = require_room(query.room_id)?;
    let form = read_upload_form(multipart).await?;

    let upload = NewUpload {
        kind: MediaKind::Sound,
        file: form.file,
        supplied_name: form.name,
        display: None,
    };
    let sound = catalog::add_upload(&state, &room_id, upload)
        .await
        .map_err(|e| error_response(&e, "Upload failed"))?;

    let event = ServerEvent::SoundsUpdated { sound: Some(sound.clone()) };
    room::broadcast(&state, &room_id, &event, None).await;

    Ok(Json(json!({ "success": true, "sound": sound })))
}

/// `POST /api/gifs/upload?roomId` — store one uploaded image plus its
/// display sidecar and notify the room.
pub async fn upload_gif(
    State(state): State<AppState>,
    Query(query): Query<RoomQuery>,
    multipart: Multipart,
) -> ApiResult {
    let room_id = require_room(query.room_id)?;
    let form = read_upload_form(multipart).await?;

    let display = form.display();
    let upload = NewUpload {
        kind: MediaKind::Gif,
        file: form.file,
        supplied_name: form.name,
        display: Some(display),
    };
    let gif = catalog::add_upload(&state, &room_id, upload)
        .await
        .map_err(|e| error_response(&e, "Upload failed"))?;

    let event = ServerEvent::GifsUpdated { gif: Some(gif.clone()) };
    room::broadcast(&state, &room_id, &event, None).await;

    Ok(Json(json!({ "success": true, "gif": gif })))
}

/// `POST /api/gifs/url?roomId` — register a remote gif by URL. The
/// body is read loosely: unknown display values fall back to defaults.
pub async fn add_gif_url(
    State(state): State<AppState>,
    Query(query): Query<RoomQuery>,
    Json(body): Json<Value>,
) -> ApiResult {
    let room_id = require_room(query.room_id)?;

    let entry = NewUrlGif {
        url: body.get("url").and_then(Value::as_str).map(ToOwned::to_owned),
        name: body.get("name").and_then(Value::as_str).map(ToOwned::to_owned),
        display: Some(display_from_body(&body)),
    };
    let gif = catalog::add_url_gif(&state, &room_id, entry)
        .await
        .map_err(|e| error_response(&e, "Failed to add URL"))?;

    let event = ServerEvent::GifsUpdated { gif: Some(gif.clone()) };
    room::broadcast(&state, &room_id, &event, None).await;

    Ok(Json(json!({ "success": true, "gif": gif })))
}

// =============================================================================
// DELETES
// =============================================================================

/// `DELETE /api/delete?roomId&filename` — remove one uploaded sound.
pub async fn delete_sound(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> ApiResult {
    let (Some(room_id), Some(filename)) = (query.room_id, query.filename) else {
        return Err(validation("Room ID and filename are required"));
    };

    catalog::delete_upload(&state, &room_id, MediaKind::Sound, &filename)
        .await
        .map_err(|e| error_response(&e, "Failed to delete sound"))?;

    room::broadcast(&state, &room_id, &ServerEvent::SoundsUpdated { sound: None }, None).await;

    Ok(Json(json!({ "success": true })))
}

/// `DELETE /api/gifs/delete?roomId&(filename|id)` — remove an uploaded
/// gif by filename, or a URL entry by id.
pub async fn delete_gif(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> ApiResult {
    let room_id = require_room(query.room_id)?;

    let result = match (query.id, query.filename) {
        (Some(id), _) if id.starts_with("url-") => {
            catalog::delete_url_gif(&state, &room_id, &id).await
        }
        (_, Some(filename)) => {
            catalog::delete_upload(&state, &room_id, MediaKind::Gif, &filename).await
        }
        _ => return Err(validation("Filename or ID is required")),
    };
    result.map_err(|e| error_response(&e, "Failed to delete GIF"))?;

    room::broadcast(&state, &room_id, &ServerEvent::GifsUpdated { gif: None }, None).await;

    Ok(Json(json!({ "success": true })))
}

// =============================================================================
// FORM READING
// =============================================================================

/// Collected multipart fields: at most one file part plus optional
/// text fields.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<(String, bytes::Bytes)>,
    name: Option<String>,
    position: Option<GifPosition>,
    animation: Option<GifAnimation>,
    duration: Option<i64>,
}

impl UploadForm {
    fn display(&self) -> GifDisplay {
        GifDisplay {
            position: self.position.unwrap_or_default(),
            animation: self.animation.unwrap_or_default(),
            duration_ms: self.duration.unwrap_or(DEFAULT_GIF_DURATION_MS),
        }
    }
}

/// Walk the multipart stream. The file part is recognized by carrying
/// a filename, matching how browsers submit the form; unknown text
/// fields are skipped.
async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, ApiError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(unreadable_form)? {
        if let Some(filename) = field.file_name().map(ToOwned::to_owned) {
            let bytes = field.bytes().await.map_err(unreadable_form)?;
            form.file = Some((filename, bytes));
            continue;
        }
        let Some(name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };
        let value = field.text().await.map_err(unreadable_form)?;
        match name.as_str() {
            "name" => form.name = Some(value),
            "position" => form.position = GifPosition::parse(value.trim()),
            "animation" => form.animation = GifAnimation::parse(value.trim()),
            "duration" => form.duration = value.trim().parse().ok(),
            _ => {}
        }
    }

    Ok(form)
}

/// Display metadata from a loose JSON body. Unknown position or
/// animation strings fall back to defaults; duration accepts a number
/// or a numeric string.
fn display_from_body(body: &Value) -> GifDisplay {
    let duration_ms = match body.get("duration") {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(DEFAULT_GIF_DURATION_MS),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(DEFAULT_GIF_DURATION_MS),
        _ => DEFAULT_GIF_DURATION_MS,
    };
    GifDisplay {
        position: body
            .get("position")
            .and_then(Value::as_str)
            .and_then(GifPosition::parse)
            .unwrap_or_default(),
        animation: body
            .get("animation")
            .and_then(Value::as_str)
            .and_then(GifAnimation::parse)
            .unwrap_or_default(),
        duration_ms,
    }
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

const fn status_for(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::MissingFile
        | CatalogError::InvalidFileType(_)
        | CatalogError::MissingUrl
        | CatalogError::InvalidUrl
        | CatalogError::InvalidName
        | CatalogError::PathEscape => StatusCode::BAD_REQUEST,
        CatalogError::AlreadyExists(_) => StatusCode::CONFLICT,
        CatalogError::SoundNotFound | CatalogError::GifNotFound => StatusCode::NOT_FOUND,
        CatalogError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a catalog failure to its response. Storage detail never reaches
/// the client; `io_message` is the endpoint's generic 500 body.
fn error_response(err: &CatalogError, io_message: &str) -> ApiError {
    if let CatalogError::Io(source) = err {
        error!(error = %source, "catalog storage failure");
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": io_message })));
    }
    (status_for(err), Json(json!({ "error": err.to_string() })))
}

fn unreadable_form(err: MultipartError) -> ApiError {
    warn!(error = %err, "rejected unreadable upload form");
    validation("Upload failed")
}

fn validation(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn require_room(room_id: Option<String>) -> Result<String, ApiError> {
    room_id
        .filter(|room| !room.is_empty())
        .ok_or_else(|| validation("Room ID is required"))
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
