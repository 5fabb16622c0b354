//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the live room table (connections + roles keyed by the
//! caller-supplied room string), the media directory layout, and the
//! per-room catalog mutation locks. Rooms have no stored state of their
//! own: an entry appears when the first connection joins and is evicted
//! when the last one leaves.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock, mpsc};
use uuid::Uuid;

use crate::event::{Role, ServerEvent};

// =============================================================================
// ROOM STATE
// =============================================================================

/// Per-room live state: one outbound queue and one role per connection.
pub struct RoomState {
    /// Connected clients: `client_id` -> sender for outgoing events.
    pub clients: HashMap<Uuid, mpsc::Sender<ServerEvent>>,
    /// Role each connection declared at join.
    pub roles: HashMap<Uuid, Role>,
}

impl RoomState {
    #[must_use]
    pub fn new() -> Self {
        Self { clients: HashMap::new(), roles: HashMap::new() }
    }
}

impl Default for RoomState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// MEDIA PATHS
// =============================================================================

/// Directory layout for preset assets and the room-scoped custom store.
#[derive(Debug, Clone)]
pub struct MediaPaths {
    /// Root for room uploads: audio directly under `{root}/{room}`,
    /// images under `{root}/{room}/gifs`.
    pub uploads_dir: PathBuf,
    /// Preset audio assets, served at `/sounds`.
    pub sounds_dir: PathBuf,
    /// Preset image assets, served at `/gifs`.
    pub gifs_dir: PathBuf,
}

impl MediaPaths {
    /// Load the layout from environment variables, falling back to the
    /// standard deployment paths.
    #[must_use]
    pub fn from_env() -> Self {
        let dir = |var: &str, default: &str| {
            std::env::var(var).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(default))
        };
        Self {
            uploads_dir: dir("UPLOADS_DIR", "uploads"),
            sounds_dir: dir("SOUNDS_DIR", "public/sounds"),
            gifs_dir: dir("GIFS_DIR", "public/gifs"),
        }
    }

    /// A room's upload directory (audio files live here).
    #[must_use]
    pub fn room_dir(&self, room_id: &str) -> PathBuf {
        self.uploads_dir.join(room_id)
    }

    /// A room's gif upload directory (images + sidecars).
    #[must_use]
    pub fn room_gifs_dir(&self, room_id: &str) -> PathBuf {
        self.room_dir(room_id).join("gifs")
    }

    /// A room's URL-entry index file.
    #[must_use]
    pub fn gif_urls_file(&self, room_id: &str) -> PathBuf {
        self.room_dir(room_id).join("gif-urls.json")
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via the State
/// extractor. Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Live rooms keyed by the opaque room string.
    pub rooms: Arc<RwLock<HashMap<String, RoomState>>>,
    /// Media directory layout.
    pub media: MediaPaths,
    /// In-flight mutation lock per room key; guards catalog writes so
    /// concurrent uploads/deletes to the same room serialize. Idle
    /// entries are swept on the next acquisition.
    pub catalog_locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl AppState {
    #[must_use]
    pub fn new(media: MediaPaths) -> Self {
        Self {
            rooms: Arc::new(RwLock::new(HashMap::new())),
            media,
            catalog_locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_state_new_is_empty() {
        let room = RoomState::new();
        assert!(room.clients.is_empty());
        assert!(room.roles.is_empty());
    }

    #[test]
    fn media_paths_compose_room_layout() {
        let media = MediaPaths {
            uploads_dir: PathBuf::from("/srv/uploads"),
            sounds_dir: PathBuf::from("/srv/sounds"),
            gifs_dir: PathBuf::from("/srv/gifs"),
        };
        assert_eq!(media.room_dir("abcd12"), PathBuf::from("/srv/uploads/abcd12"));
        assert_eq!(media.room_gifs_dir("abcd12"), PathBuf::from("/srv/uploads/abcd12/gifs"));
        assert_eq!(
            media.gif_urls_file("abcd12"),
            PathBuf::from("/srv/uploads/abcd12/gif-urls.json")
        );
    }
}
