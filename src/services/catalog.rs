//! Catalog service — preset resolution and the room-scoped custom store.
//!
//! DESIGN
//! ======
//! The catalog has no cache: every resolve is a point-in-time scan of
//! the preset table and the room's directory, so listings always
//! reflect durable state. Custom sounds live directly under
//! `uploads/{room}`, custom gifs under `uploads/{room}/gifs` with one
//! JSON sidecar per image, and URL entries in `uploads/{room}/gif-urls.json`.
//!
//! CONCURRENCY
//! ===========
//! Mutations serialize per room through `AppState::catalog_locks`, so
//! two uploads or a delete racing an upload in the same room cannot
//! interleave their read-modify-write of the URL index. Different
//! rooms never contend. Reads take no lock at all. Lock entries live
//! only while a mutation is in flight: each acquisition sweeps the
//! entries no task currently holds.

use std::collections::BTreeMap;
use std::io;
use std::path::{Component, Path};
use std::sync::Arc;

use bytes::Bytes;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{info, warn};
use url::Url;

use crate::event::now_ms;
use crate::media::{EntrySource, GifDisplay, MediaEntry, MediaKind};
use crate::services::presets;
use crate::state::{AppState, MediaPaths};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("No file uploaded")]
    MissingFile,
    #[error("Invalid file type. Only {} are allowed.", .0.allowed_label())]
    InvalidFileType(MediaKind),
    #[error("URL is required")]
    MissingUrl,
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("Invalid filename")]
    InvalidName,
    #[error("Invalid filename")]
    PathEscape,
    #[error("{0} already exists")]
    AlreadyExists(String),
    #[error("Sound not found")]
    SoundNotFound,
    #[error("File not found")]
    GifNotFound,
    #[error("storage failure: {0}")]
    Io(#[from] io::Error),
}

impl CatalogError {
    #[must_use]
    pub const fn not_found(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Sound => Self::SoundNotFound,
            MediaKind::Gif => Self::GifNotFound,
        }
    }
}

/// A file upload as it arrives from the form, before validation.
#[derive(Debug)]
pub struct NewUpload {
    pub kind: MediaKind,
    /// Declared filename and raw payload, `None` when the form carried
    /// no file part.
    pub file: Option<(String, Bytes)>,
    /// Optional display name; falls back to the filename stem.
    pub supplied_name: Option<String>,
    /// Display metadata for gifs; ignored for sounds.
    pub display: Option<GifDisplay>,
}

/// A URL-provenance gif as it arrives from the request body.
#[derive(Debug)]
pub struct NewUrlGif {
    pub url: Option<String>,
    pub name: Option<String>,
    pub display: Option<GifDisplay>,
}

// =============================================================================
// RESOLVE
// =============================================================================

/// Resolve the built-in presets of one kind, grouped by category.
/// Local assets are listed only while present on disk; absolute URL
/// locators are always listed.
pub async fn resolve_presets(
    media: &MediaPaths,
    kind: MediaKind,
) -> BTreeMap<String, Vec<MediaEntry>> {
    let mut categories: BTreeMap<String, Vec<MediaEntry>> = BTreeMap::new();
    match kind {
        MediaKind::Sound => {
            for def in presets::SOUNDS {
                if !fs::try_exists(media.sounds_dir.join(def.file)).await.unwrap_or(false) {
                    continue;
                }
                categories.entry(def.category.to_owned()).or_default().push(
                    MediaEntry::new(def.id, def.name, format!("/sounds/{}", def.file))
                        .with_category(def.category),
                );
            }
        }
        MediaKind::Gif => {
            for def in presets::GIFS {
                let url = if def.locator.starts_with("http") {
                    def.locator.to_owned()
                } else if fs::try_exists(media.gifs_dir.join(def.locator)).await.unwrap_or(false) {
                    format!("/gifs/{}", def.locator)
                } else {
                    continue;
                };
                categories.entry(def.category.to_owned()).or_default().push(
                    MediaEntry::new(def.id, def.name, url)
                        .with_category(def.category)
                        .with_source(EntrySource::Preset),
                );
            }
        }
    }
    categories
}

/// Resolve a room's custom entries of one kind, sorted by filename.
/// A room that has never stored anything resolves to an empty list.
///
/// # Errors
///
/// Returns a storage error if the room's directory exists but cannot
/// be read.
pub async fn resolve_custom(
    media: &MediaPaths,
    room_id: &str,
    kind: MediaKind,
) -> Result<Vec<MediaEntry>, CatalogError> {
    match kind {
        MediaKind::Sound => {
            let dir = media.room_dir(room_id);
            let files = list_media_files(&dir, MediaKind::Sound).await?;
            let mut entries = Vec::with_capacity(files.len());
            for file in files {
                let stem = stem_of(&file);
                entries.push(
                    MediaEntry::new(
                        format!("upload-{room_id}-{stem}"),
                        stem.clone(),
                        format!("/uploads/{room_id}/{file}"),
                    )
                    .with_filename(file),
                );
            }
            Ok(entries)
        }
        MediaKind::Gif => {
            let dir = media.room_gifs_dir(room_id);
            let files = list_media_files(&dir, MediaKind::Gif).await?;
            let mut entries = Vec::with_capacity(files.len());
            for file in files {
                let stem = stem_of(&file);
                let display = read_sidecar(&dir.join(format!("{stem}.json"))).await;
                entries.push(
                    MediaEntry::new(
                        format!("upload-{room_id}-gif-{stem}"),
                        stem.clone(),
                        format!("/uploads/{room_id}/gifs/{file}"),
                    )
                    .with_filename(file)
                    .with_source(EntrySource::Custom)
                    .with_display(display),
                );
            }
            entries.extend(read_gif_urls(media, room_id).await);
            Ok(entries)
        }
    }
}

/// Read a room's URL-entry index. Missing or malformed reads as empty.
pub async fn read_gif_urls(media: &MediaPaths, room_id: &str) -> Vec<MediaEntry> {
    match fs::read(media.gif_urls_file(room_id)).await {
        Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
        Err(_) => Vec::new(),
    }
}

// =============================================================================
// MUTATE
// =============================================================================

/// Store an uploaded media file for a room and return its entry.
///
/// # Errors
///
/// Fails with a validation error when the form had no file part, the
/// extension is outside the kind's allow-list, the derived name
/// sanitizes to nothing, or a stored file already uses the name.
/// Storage failures abort the upload; a gif whose sidecar cannot be
/// written is removed again rather than left half-stored.
pub async fn add_upload(
    state: &AppState,
    room_id: &str,
    upload: NewUpload,
) -> Result<MediaEntry, CatalogError> {
    let Some((original_filename, bytes)) = upload.file else {
        return Err(CatalogError::MissingFile);
    };
    let ext = Path::new(&original_filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !upload.kind.allows_extension(&ext) {
        return Err(CatalogError::InvalidFileType(upload.kind));
    }

    let raw_name = upload
        .supplied_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(|| stem_of(&original_filename), ToOwned::to_owned);
    let name = sanitize_stem(&raw_name);
    if name.is_empty() {
        return Err(CatalogError::InvalidName);
    }
    let filename = format!("{name}.{ext}");

    let lock = mutation_lock(state, room_id).await;
    let _guard = lock.lock().await;

    let dir = match upload.kind {
        MediaKind::Sound => state.media.room_dir(room_id),
        MediaKind::Gif => state.media.room_gifs_dir(room_id),
    };
    fs::create_dir_all(&dir).await?;

    let blob_path = dir.join(&filename);
    if fs::try_exists(&blob_path).await? {
        return Err(CatalogError::AlreadyExists(filename));
    }
    fs::write(&blob_path, &bytes).await?;

    let entry = match upload.kind {
        MediaKind::Sound => {
            info!(%room_id, %filename, size = bytes.len(), "stored uploaded sound");
            MediaEntry::new(
                format!("upload-{room_id}-{name}"),
                name,
                format!("/uploads/{room_id}/{filename}"),
            )
            .with_upload_flag()
        }
        MediaKind::Gif => {
            let display = upload.display.unwrap_or_default().normalized();
            if let Err(e) = write_sidecar(&dir.join(format!("{name}.json")), display).await {
                let _ = fs::remove_file(&blob_path).await;
                return Err(e);
            }
            info!(%room_id, %filename, size = bytes.len(), "stored uploaded gif");
            MediaEntry::new(
                format!("upload-{room_id}-gif-{name}"),
                name,
                format!("/uploads/{room_id}/gifs/{filename}"),
            )
            .with_source(EntrySource::Custom)
            .with_display(display)
        }
    };
    Ok(entry)
}

/// Append a URL-provenance gif to a room's URL index and return its
/// entry. Non-positive durations are normalized to the default.
///
/// # Errors
///
/// Fails with a validation error when the URL is missing or not an
/// absolute URL, or with a storage error if the index cannot be
/// rewritten.
pub async fn add_url_gif(
    state: &AppState,
    room_id: &str,
    gif: NewUrlGif,
) -> Result<MediaEntry, CatalogError> {
    let Some(url) = gif.url.filter(|u| !u.trim().is_empty()) else {
        return Err(CatalogError::MissingUrl);
    };
    Url::parse(&url).map_err(|_| CatalogError::InvalidUrl)?;

    let name = gif
        .name
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Custom GIF".to_owned());
    let entry = MediaEntry::new(format!("url-{room_id}-{}", now_ms()), name, url)
        .with_source(EntrySource::Url)
        .with_display(gif.display.unwrap_or_default().normalized());

    let lock = mutation_lock(state, room_id).await;
    let _guard = lock.lock().await;

    let mut urls = read_gif_urls(&state.media, room_id).await;
    urls.push(entry.clone());
    write_gif_urls(&state.media, room_id, &urls).await?;

    info!(%room_id, id = %entry.id, "added url gif");
    Ok(entry)
}

/// Delete an uploaded file (and its sidecar, for gifs) by filename.
///
/// The filename must be a single path component that resolves inside
/// the room's directory; anything else is rejected before touching the
/// filesystem.
///
/// # Errors
///
/// Fails with `PathEscape` on traversal attempts, the kind's not-found
/// error when no such file is stored, or a storage error if removal
/// fails.
pub async fn delete_upload(
    state: &AppState,
    room_id: &str,
    kind: MediaKind,
    filename: &str,
) -> Result<(), CatalogError> {
    let mut comps = Path::new(filename).components();
    if !matches!((comps.next(), comps.next()), (Some(Component::Normal(_)), None)) {
        warn!(%room_id, %filename, "rejected delete outside room directory");
        return Err(CatalogError::PathEscape);
    }
    let ext = Path::new(filename).extension().and_then(|e| e.to_str()).unwrap_or_default();
    if !kind.allows_extension(ext) {
        // Index and sidecar files share the directory; only stored
        // media is deletable.
        return Err(CatalogError::not_found(kind));
    }

    let lock = mutation_lock(state, room_id).await;
    let _guard = lock.lock().await;

    let dir = match kind {
        MediaKind::Sound => state.media.room_dir(room_id),
        MediaKind::Gif => state.media.room_gifs_dir(room_id),
    };
    let dir = match fs::canonicalize(&dir).await {
        Ok(dir) => dir,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CatalogError::not_found(kind));
        }
        Err(e) => return Err(e.into()),
    };
    let blob_path = match fs::canonicalize(dir.join(filename)).await {
        Ok(path) => path,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CatalogError::not_found(kind));
        }
        Err(e) => return Err(e.into()),
    };
    if !blob_path.starts_with(&dir) {
        warn!(%room_id, %filename, "rejected delete outside room directory");
        return Err(CatalogError::PathEscape);
    }

    match fs::remove_file(&blob_path).await {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CatalogError::not_found(kind));
        }
        Err(e) => return Err(e.into()),
    }

    if kind == MediaKind::Gif {
        let sidecar = dir.join(format!("{}.json", stem_of(filename)));
        if let Err(e) = fs::remove_file(&sidecar).await {
            if e.kind() != io::ErrorKind::NotFound {
                return Err(e.into());
            }
        }
    }

    info!(%room_id, %filename, kind = ?kind, "deleted uploaded media");
    Ok(())
}

/// Remove a URL-provenance gif from a room's URL index by entry id.
///
/// # Errors
///
/// Fails with the gif not-found error when no entry carries the id, or
/// a storage error if the index cannot be rewritten.
pub async fn delete_url_gif(state: &AppState, room_id: &str, id: &str) -> Result<(), CatalogError> {
    let lock = mutation_lock(state, room_id).await;
    let _guard = lock.lock().await;

    let mut urls = read_gif_urls(&state.media, room_id).await;
    let before = urls.len();
    urls.retain(|g| g.id != id);
    if urls.len() == before {
        return Err(CatalogError::not_found(MediaKind::Gif));
    }
    write_gif_urls(&state.media, room_id, &urls).await?;

    info!(%room_id, %id, "deleted url gif");
    Ok(())
}

// =============================================================================
// HELPERS
// =============================================================================

/// Strip everything outside `[a-zA-Z0-9-_]`.
fn sanitize_stem(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_')).collect()
}

fn stem_of(filename: &str) -> String {
    Path::new(filename).file_stem().and_then(|s| s.to_str()).unwrap_or(filename).to_owned()
}

/// Per-room mutation lock. Acquisition sweeps every entry no task
/// holds a clone of, so the table tracks in-flight mutations rather
/// than every room key ever mutated.
async fn mutation_lock(state: &AppState, room_id: &str) -> Arc<Mutex<()>> {
    let mut locks = state.catalog_locks.lock().await;
    let lock = locks.entry(room_id.to_owned()).or_default().clone();
    locks.retain(|_, entry| Arc::strong_count(entry) > 1);
    lock
}

/// Filenames in `dir` with an extension the kind allows, sorted for
/// stable listings.
async fn list_media_files(dir: &Path, kind: MediaKind) -> Result<Vec<String>, CatalogError> {
    let mut rd = match fs::read_dir(dir).await {
        Ok(rd) => rd,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut files = Vec::new();
    while let Some(dirent) = rd.next_entry().await? {
        let Ok(name) = dirent.file_name().into_string() else {
            continue;
        };
        let Some(ext) = Path::new(&name).extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if kind.allows_extension(ext) {
            files.push(name);
        }
    }
    files.sort();
    Ok(files)
}

async fn read_sidecar(path: &Path) -> GifDisplay {
    match fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
        Err(_) => GifDisplay::default(),
    }
}

async fn write_sidecar(path: &Path, display: GifDisplay) -> Result<(), CatalogError> {
    let bytes = serde_json::to_vec(&display).map_err(io::Error::from)?;
    fs::write(path, bytes).await?;
    Ok(())
}

/// Rewrite the URL index atomically: write a scratch file, then rename
/// over the index so readers never observe a partial write.
async fn write_gif_urls(
    media: &MediaPaths,
    room_id: &str,
    urls: &[MediaEntry],
) -> Result<(), CatalogError> {
    fs::create_dir_all(media.room_dir(room_id)).await?;
    let path = media.gif_urls_file(room_id);
    let tmp = path.with_extension("json.tmp");
    let bytes = serde_json::to_vec_pretty(urls).map_err(io::Error::from)?;
    fs::write(&tmp, &bytes).await?;
    fs::rename(&tmp, &path).await?;
    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
