//! Catalog data model — playable entries and gif display metadata.
//!
//! DESIGN
//! ======
//! One `MediaEntry` struct covers every provenance (preset, uploaded
//! file, remote URL). Fields that only apply to some provenances are
//! optional and omitted from JSON when unset, so the serialized shapes
//! match what clients already consume:
//! - presets carry `category` (and gifs `type: "preset"`);
//! - uploaded files carry `filename`, the delete identifier;
//! - gif entries carry flattened `position`/`animation`/`duration`.

use serde::{Deserialize, Serialize};

/// Milliseconds a gif stays on screen when the caller does not say.
pub const DEFAULT_GIF_DURATION_MS: i64 = 3000;

// =============================================================================
// KIND
// =============================================================================

/// The two media kinds the catalog manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Sound,
    Gif,
}

impl MediaKind {
    /// File extensions (lowercase, no dot) accepted for uploads of this kind.
    #[must_use]
    pub const fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Sound => &["mp3", "wav", "ogg"],
            Self::Gif => &["gif", "webp", "png", "apng"],
        }
    }

    /// Human-readable allow-list for error messages.
    #[must_use]
    pub const fn allowed_label(self) -> &'static str {
        match self {
            Self::Sound => "MP3, WAV, and OGG",
            Self::Gif => "GIF, WebP, PNG, and APNG",
        }
    }

    /// Case-insensitive extension check.
    #[must_use]
    pub fn allows_extension(self, ext: &str) -> bool {
        let ext = ext.to_ascii_lowercase();
        self.allowed_extensions().contains(&ext.as_str())
    }
}

// =============================================================================
// GIF DISPLAY METADATA
// =============================================================================

/// Where a gif is anchored on the display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GifPosition {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    #[default]
    Center,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl GifPosition {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::MiddleLeft => "middle-left",
            Self::Center => "center",
            Self::MiddleRight => "middle-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "top-left" => Some(Self::TopLeft),
            "top-center" => Some(Self::TopCenter),
            "top-right" => Some(Self::TopRight),
            "middle-left" => Some(Self::MiddleLeft),
            "center" => Some(Self::Center),
            "middle-right" => Some(Self::MiddleRight),
            "bottom-left" => Some(Self::BottomLeft),
            "bottom-center" => Some(Self::BottomCenter),
            "bottom-right" => Some(Self::BottomRight),
            _ => None,
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::TopLeft,
            Self::TopCenter,
            Self::TopRight,
            Self::MiddleLeft,
            Self::Center,
            Self::MiddleRight,
            Self::BottomLeft,
            Self::BottomCenter,
            Self::BottomRight,
        ]
    }
}

/// How a gif enters and idles on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GifAnimation {
    #[default]
    Fade,
    Slide,
    Bounce,
    Shake,
    Spin,
    Zoom,
    Wiggle,
    BounceAround,
}

impl GifAnimation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Bounce => "bounce",
            Self::Shake => "shake",
            Self::Spin => "spin",
            Self::Zoom => "zoom",
            Self::Wiggle => "wiggle",
            Self::BounceAround => "bounce-around",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fade" => Some(Self::Fade),
            "slide" => Some(Self::Slide),
            "bounce" => Some(Self::Bounce),
            "shake" => Some(Self::Shake),
            "spin" => Some(Self::Spin),
            "zoom" => Some(Self::Zoom),
            "wiggle" => Some(Self::Wiggle),
            "bounce-around" => Some(Self::BounceAround),
            _ => None,
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Fade,
            Self::Slide,
            Self::Bounce,
            Self::Shake,
            Self::Spin,
            Self::Zoom,
            Self::Wiggle,
            Self::BounceAround,
        ]
    }
}

/// Display metadata stored in a gif's sidecar file. A missing or
/// malformed sidecar reads back as the defaults; a partial sidecar
/// keeps its fields and defaults the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifDisplay {
    #[serde(default)]
    pub position: GifPosition,
    #[serde(default)]
    pub animation: GifAnimation,
    #[serde(rename = "duration", default = "default_duration_ms")]
    pub duration_ms: i64,
}

const fn default_duration_ms() -> i64 {
    DEFAULT_GIF_DURATION_MS
}

impl Default for GifDisplay {
    fn default() -> Self {
        Self {
            position: GifPosition::Center,
            animation: GifAnimation::Fade,
            duration_ms: DEFAULT_GIF_DURATION_MS,
        }
    }
}

impl GifDisplay {
    /// Clamp non-positive durations to the default.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.duration_ms <= 0 {
            self.duration_ms = DEFAULT_GIF_DURATION_MS;
        }
        self
    }
}

// =============================================================================
// ENTRY
// =============================================================================

/// Provenance marker serialized as `type` on gif entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    Preset,
    Custom,
    Url,
}

/// A playable catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntry {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<EntrySource>,
    #[serde(rename = "isUpload", default, skip_serializing_if = "Option::is_none")]
    pub is_upload: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<GifPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<GifAnimation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

impl MediaEntry {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            category: None,
            filename: None,
            source: None,
            is_upload: None,
            position: None,
            animation: None,
            duration: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: EntrySource) -> Self {
        self.source = Some(source);
        self
    }

    /// Mark the entry as a fresh upload (`isUpload: true` in responses).
    #[must_use]
    pub fn with_upload_flag(mut self) -> Self {
        self.is_upload = Some(true);
        self
    }

    /// Attach flattened gif display metadata.
    #[must_use]
    pub fn with_display(mut self, display: GifDisplay) -> Self {
        self.position = Some(display.position);
        self.animation = Some(display.animation);
        self.duration = Some(display.duration_ms);
        self
    }
}
