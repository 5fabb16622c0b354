//! Event — the wire vocabulary for room traffic.
//!
//! ARCHITECTURE
//! ============
//! Every websocket message is one JSON envelope `{"event": <name>,
//! "data": {...}}`. Inbound messages decode into `ClientEvent`, outbound
//! messages serialize from `ServerEvent`, and the WS handler dispatches
//! on the variant. Event names and payload field casing are part of the
//! client contract and must not change.
//!
//! DESIGN
//! ======
//! - Adjacent tagging (`event` + `data`) gives the envelope for free.
//! - Variant names map to kebab-case (`play-sound`), payload fields to
//!   camelCase (`soundUrl`), matching the browser clients.
//! - Trigger payloads are relayed verbatim; the server never resolves
//!   ids against the catalog.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::media::{GifAnimation, GifPosition, MediaEntry, MediaKind};

/// Current time as milliseconds since Unix epoch.
pub(crate) fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

// =============================================================================
// ROLE
// =============================================================================

/// What a connection does in a room: controllers trigger playback,
/// displays render it. The server relays to everyone either way; the
/// role is recorded for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Controller,
    Display,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Display => "display",
        }
    }
}

// =============================================================================
// CLIENT -> SERVER
// =============================================================================

/// Events a client may send. Anything that fails to decode into one of
/// these is dropped at the transport boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientEvent {
    /// Associate this connection with a room. Rooms are implicit; any
    /// key is valid.
    JoinRoom { room_id: String, role: Role },
    /// Trigger a sound on the room's other connections.
    PlaySound {
        room_id: String,
        sound_id: String,
        sound_url: String,
    },
    /// Trigger a gif overlay on the room's other connections.
    PlayGif {
        room_id: String,
        gif_id: String,
        gif_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<GifPosition>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        animation: Option<GifAnimation>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<i64>,
    },
    /// Tell the room's other connections to re-fetch the catalog. The
    /// optional entry is a hint, never authoritative.
    CatalogChanged {
        room_id: String,
        kind: MediaKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sound: Option<MediaEntry>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        gif: Option<MediaEntry>,
    },
}

impl ClientEvent {
    /// Wire name, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::JoinRoom { .. } => "join-room",
            Self::PlaySound { .. } => "play-sound",
            Self::PlayGif { .. } => "play-gif",
            Self::CatalogChanged { .. } => "catalog-changed",
        }
    }

    /// The room the payload claims to target.
    #[must_use]
    pub fn room_id(&self) -> &str {
        match self {
            Self::JoinRoom { room_id, .. }
            | Self::PlaySound { room_id, .. }
            | Self::PlayGif { room_id, .. }
            | Self::CatalogChanged { room_id, .. } => room_id,
        }
    }
}

// =============================================================================
// SERVER -> CLIENT
// =============================================================================

/// Events the server fans out to room members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerEvent {
    SoundTriggered {
        sound_id: String,
        sound_url: String,
    },
    GifTriggered {
        gif_id: String,
        gif_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<GifPosition>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        animation: Option<GifAnimation>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<i64>,
    },
    SoundsUpdated {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sound: Option<MediaEntry>,
    },
    GifsUpdated {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        gif: Option<MediaEntry>,
    },
}

impl ServerEvent {
    /// Wire name, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SoundTriggered { .. } => "sound-triggered",
            Self::GifTriggered { .. } => "gif-triggered",
            Self::SoundsUpdated { .. } => "sounds-updated",
            Self::GifsUpdated { .. } => "gifs-updated",
        }
    }
}
