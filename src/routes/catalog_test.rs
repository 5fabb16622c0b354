use super::*;
use crate::event::Role;
use crate::state::test_helpers;
use bytes::Bytes;
use tempfile::TempDir;
use tokio::sync::mpsc;
use tokio::time::{Duration, timeout};
use uuid::Uuid;

fn room_query(room_id: &str) -> Query<RoomQuery> {
    Query(RoomQuery { room_id: Some(room_id.to_owned()) })
}

fn delete_query(
    room_id: Option<&str>,
    filename: Option<&str>,
    id: Option<&str>,
) -> Query<DeleteQuery> {
    Query(DeleteQuery {
        room_id: room_id.map(ToOwned::to_owned),
        filename: filename.map(ToOwned::to_owned),
        id: id.map(ToOwned::to_owned),
    })
}

async fn seed_sound_upload(state: &AppState, room_id: &str, filename: &str) {
    let upload = NewUpload {
        kind: MediaKind::Sound,
        file: Some((filename.to_owned(), Bytes::from_static(b"RIFF"))),
        supplied_name: None,
        display: None,
    };
    catalog::add_upload(state, room_id, upload).await.expect("seed upload should succeed");
}

async fn join_listener(state: &AppState, room_id: &str) -> mpsc::Receiver<ServerEvent> {
    let (tx, rx) = mpsc::channel(8);
    room::join_room(state, room_id, Uuid::new_v4(), Role::Display, tx).await;
    rx
}

async fn recv_event(rx: &mut mpsc::Receiver<ServerEvent>) -> ServerEvent {
    timeout(Duration::from_millis(200), rx.recv())
        .await
        .expect("event receive timed out")
        .expect("channel closed")
}

async fn assert_no_event(rx: &mut mpsc::Receiver<ServerEvent>) {
    assert!(
        timeout(Duration::from_millis(80), rx.recv()).await.is_err(),
        "expected no broadcast"
    );
}

#[tokio::test]
async fn list_sounds_merges_presets_and_room_uploads() {
    let dir = TempDir::new().expect("tempdir");
    let state = test_helpers::test_app_state_in(dir.path());
    std::fs::create_dir_all(dir.path().join("sounds")).expect("mkdir");
    std::fs::write(dir.path().join("sounds/airhorn.ogg"), b"OggS").expect("seed preset");
    seed_sound_upload(&state, "abcd12", "horn.mp3").await;

    let Json(body) = list_sounds(State(state), room_query("abcd12")).await.expect("200");

    assert_eq!(body["presetCategories"]["Sound Effects"][0]["id"], "airhorn");
    assert_eq!(body["customSounds"][0]["filename"], "horn.mp3");
    assert_eq!(body["customSounds"][0]["id"], "upload-abcd12-horn");
}

#[tokio::test]
async fn list_sounds_without_room_returns_presets_only() {
    let dir = TempDir::new().expect("tempdir");
    let state = test_helpers::test_app_state_in(dir.path());
    seed_sound_upload(&state, "abcd12", "horn.mp3").await;

    let Json(body) = list_sounds(State(state), Query(RoomQuery { room_id: None }))
        .await
        .expect("200");

    assert_eq!(body["customSounds"], serde_json::json!([]));
}

#[tokio::test]
async fn list_gifs_includes_presets_and_url_entries() {
    let dir = TempDir::new().expect("tempdir");
    let state = test_helpers::test_app_state_in(dir.path());

    let entry = NewUrlGif {
        url: Some("https://example.com/confetti.gif".to_owned()),
        name: Some("Confetti".to_owned()),
        display: None,
    };
    catalog::add_url_gif(&state, "abcd12", entry).await.expect("url add should succeed");

    let Json(body) = list_gifs(State(state), room_query("abcd12")).await.expect("200");

    // Remote preset gifs are listed without any local file present.
    assert!(body["presetCategories"]["Reactions"].as_array().is_some_and(|c| !c.is_empty()));
    assert_eq!(body["customGifs"][0]["name"], "Confetti");
    assert_eq!(body["customGifs"][0]["type"], "url");
}

#[tokio::test]
async fn delete_sound_requires_room_and_filename() {
    let state = test_helpers::test_app_state();

    let (status, Json(body)) = delete_sound(State(state), delete_query(None, None, None))
        .await
        .expect_err("should reject");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Room ID and filename are required");
}

#[tokio::test]
async fn delete_sound_rejects_traversal() {
    let dir = TempDir::new().expect("tempdir");
    let state = test_helpers::test_app_state_in(dir.path());

    let query = delete_query(Some("abcd12"), Some("../../etc/passwd"), None);
    let (status, Json(body)) = delete_sound(State(state), query).await.expect_err("should reject");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid filename");
}

#[tokio::test]
async fn delete_sound_missing_file_is_404_and_never_broadcasts() {
    let dir = TempDir::new().expect("tempdir");
    let state = test_helpers::test_app_state_in(dir.path());
    let mut rx = join_listener(&state, "abcd12").await;

    let query = delete_query(Some("abcd12"), Some("ghost.mp3"), None);
    let (status, Json(body)) =
        delete_sound(State(state.clone()), query).await.expect_err("should be missing");

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Sound not found");
    assert_no_event(&mut rx).await;
}

#[tokio::test]
async fn delete_sound_broadcasts_refetch_to_room() {
    let dir = TempDir::new().expect("tempdir");
    let state = test_helpers::test_app_state_in(dir.path());
    seed_sound_upload(&state, "abcd12", "horn.mp3").await;
    let mut rx = join_listener(&state, "abcd12").await;

    let query = delete_query(Some("abcd12"), Some("horn.mp3"), None);
    let Json(body) = delete_sound(State(state), query).await.expect("200");

    assert_eq!(body["success"], true);
    let ServerEvent::SoundsUpdated { sound } = recv_event(&mut rx).await else {
        panic!("expected sounds-updated");
    };
    assert_eq!(sound, None);
}

#[tokio::test]
async fn add_gif_url_rejects_missing_and_invalid_urls() {
    let dir = TempDir::new().expect("tempdir");
    let state = test_helpers::test_app_state_in(dir.path());

    let (status, Json(body)) =
        add_gif_url(State(state.clone()), room_query("abcd12"), Json(serde_json::json!({})))
            .await
            .expect_err("should reject");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "URL is required");

    let (status, Json(body)) = add_gif_url(
        State(state),
        room_query("abcd12"),
        Json(serde_json::json!({ "url": "not a url" })),
    )
    .await
    .expect_err("should reject");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid URL");
}

#[tokio::test]
async fn add_gif_url_applies_defaults_and_broadcasts() {
    let dir = TempDir::new().expect("tempdir");
    let state = test_helpers::test_app_state_in(dir.path());
    let mut rx = join_listener(&state, "abcd12").await;

    let payload = serde_json::json!({
        "url": "https://example.com/confetti.gif",
        "position": "diagonal",
        "duration": 0
    });
    let Json(body) = add_gif_url(State(state), room_query("abcd12"), Json(payload))
        .await
        .expect("200");

    assert_eq!(body["success"], true);
    assert_eq!(body["gif"]["name"], "Custom GIF");
    assert_eq!(body["gif"]["position"], "center");
    assert_eq!(body["gif"]["duration"], 3000);

    let ServerEvent::GifsUpdated { gif } = recv_event(&mut rx).await else {
        panic!("expected gifs-updated");
    };
    assert_eq!(gif.expect("hint").id, body["gif"]["id"].as_str().expect("id"));
}

#[tokio::test]
async fn delete_gif_dispatches_url_ids() {
    let dir = TempDir::new().expect("tempdir");
    let state = test_helpers::test_app_state_in(dir.path());

    let entry = NewUrlGif {
        url: Some("https://example.com/confetti.gif".to_owned()),
        name: None,
        display: None,
    };
    let gif = catalog::add_url_gif(&state, "abcd12", entry).await.expect("url add");

    let query = delete_query(Some("abcd12"), None, Some(&gif.id));
    let Json(body) = delete_gif(State(state.clone()), query).await.expect("200");
    assert_eq!(body["success"], true);

    // A second delete of the same id finds nothing.
    let query = delete_query(Some("abcd12"), None, Some(&gif.id));
    let (status, Json(body)) = delete_gif(State(state), query).await.expect_err("gone");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "File not found");
}

#[tokio::test]
async fn delete_gif_requires_filename_or_id() {
    let state = test_helpers::test_app_state();

    let (status, Json(body)) = delete_gif(State(state), delete_query(Some("abcd12"), None, None))
        .await
        .expect_err("should reject");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Filename or ID is required");
}

#[test]
fn require_room_rejects_missing_and_empty() {
    assert!(require_room(Some("abcd12".to_owned())).is_ok());
    let (status, Json(body)) = require_room(None).expect_err("missing");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Room ID is required");
    assert!(require_room(Some(String::new())).is_err());
}

#[test]
fn display_from_body_tolerates_junk_values() {
    let body = serde_json::json!({
        "position": "diagonal",
        "animation": 7,
        "duration": "2500"
    });
    let display = display_from_body(&body);
    assert_eq!(display.position, GifPosition::Center);
    assert_eq!(display.animation, GifAnimation::Fade);
    assert_eq!(display.duration_ms, 2500);

    let display = display_from_body(&serde_json::json!({ "duration": true }));
    assert_eq!(display.duration_ms, DEFAULT_GIF_DURATION_MS);
}

#[test]
fn upload_form_display_defaults_match_catalog_defaults() {
    assert_eq!(UploadForm::default().display(), GifDisplay::default());
}

#[test]
fn conflict_and_not_found_map_to_their_statuses() {
    assert_eq!(
        status_for(&CatalogError::AlreadyExists("test.mp3".to_owned())),
        StatusCode::CONFLICT
    );
    assert_eq!(status_for(&CatalogError::PathEscape), StatusCode::BAD_REQUEST);
    assert_eq!(status_for(&CatalogError::GifNotFound), StatusCode::NOT_FOUND);
    assert_eq!(
        status_for(&CatalogError::Io(std::io::Error::other("disk"))),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
