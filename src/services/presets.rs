//! Built-in preset definitions.
//!
//! DESIGN
//! ======
//! Preset tables are compiled in; only presence on disk (for local
//! files) decides whether an entry shows up in listings. Adding a
//! preset means adding a row here and, for local media, dropping the
//! asset into the preset directory.

/// A built-in sound. `file` names an asset in the preset sounds
/// directory; the entry is listed only while that file exists.
#[derive(Debug, Clone, Copy)]
pub struct SoundPresetDef {
    pub id: &'static str,
    pub name: &'static str,
    pub file: &'static str,
    pub category: &'static str,
}

/// A built-in gif. `locator` is either an absolute http(s) URL served
/// as-is, or a filename in the preset gifs directory that is listed
/// only while it exists.
#[derive(Debug, Clone, Copy)]
pub struct GifPresetDef {
    pub id: &'static str,
    pub name: &'static str,
    pub locator: &'static str,
    pub category: &'static str,
}

pub const SOUNDS: &[SoundPresetDef] = &[
    // Sound Effects
    SoundPresetDef { id: "airhorn", name: "Air Horn", file: "airhorn.ogg", category: "Sound Effects" },
    SoundPresetDef { id: "foghorn", name: "Fog Horn", file: "foghorn.mp3", category: "Sound Effects" },
    SoundPresetDef { id: "slap-bass", name: "Slap Bass", file: "slap-bass.mp3", category: "Sound Effects" },
    SoundPresetDef { id: "huh", name: "Huh?", file: "huh.mp3", category: "Sound Effects" },
    // Reactions
    SoundPresetDef { id: "sad-trombone", name: "Sad Trombone", file: "sad-trombone.wav", category: "Reactions" },
    SoundPresetDef { id: "victory", name: "Victory", file: "victory.mp3", category: "Reactions" },
    SoundPresetDef { id: "bruh", name: "Bruh", file: "bruh.mp3", category: "Reactions" },
    SoundPresetDef { id: "not-fine", name: "Not Fine", file: "not-fine.mp3", category: "Reactions" },
    // Memes & Clips
    SoundPresetDef {
        id: "curb-your-enthusiasm",
        name: "Curb Your Enthusiasm",
        file: "curb-your-enthusiasm.mp3",
        category: "Memes & Clips",
    },
    SoundPresetDef { id: "wombo-combo", name: "Wombo Combo", file: "wombo-combo.mp3", category: "Memes & Clips" },
    SoundPresetDef { id: "x-files", name: "X-Files", file: "x-files.mp3", category: "Memes & Clips" },
    SoundPresetDef {
        id: "you-need-to-leave",
        name: "You Need to Leave",
        file: "you-need-to-leave.mp3",
        category: "Memes & Clips",
    },
    // Transitions
    SoundPresetDef {
        id: "we-will-be-right-back",
        name: "We Will Be Right Back",
        file: "we-will-be-right-back.mp3",
        category: "Transitions",
    },
    SoundPresetDef {
        id: "2000-years-later",
        name: "2000 Years Later",
        file: "2000-years-later.mp3",
        category: "Transitions",
    },
    SoundPresetDef {
        id: "here-we-go-again",
        name: "Here We Go Again",
        file: "here-we-go-again.mp3",
        category: "Transitions",
    },
    SoundPresetDef {
        id: "to-be-continued",
        name: "To Be Continued",
        file: "to-be-continued.mp3",
        category: "Transitions",
    },
];

pub const GIFS: &[GifPresetDef] = &[
    // Reactions
    GifPresetDef {
        id: "deal-with-it",
        name: "Deal With It",
        locator: "https://media.giphy.com/media/ZhmPbrADKRMuA/giphy.gif",
        category: "Reactions",
    },
    GifPresetDef {
        id: "mind-blown",
        name: "Mind Blown",
        locator: "https://media.giphy.com/media/xT0xeJpnrWC4XWblEk/giphy.gif",
        category: "Reactions",
    },
    GifPresetDef {
        id: "thumbs-up",
        name: "Thumbs Up",
        locator: "https://media.giphy.com/media/111ebonMs90YLu/giphy.gif",
        category: "Reactions",
    },
    GifPresetDef {
        id: "thumbs-down",
        name: "Thumbs Down",
        locator: "https://media.giphy.com/media/iJxHzcuNcCJXi/giphy.gif",
        category: "Reactions",
    },
    GifPresetDef {
        id: "facepalm",
        name: "Facepalm",
        locator: "https://media.giphy.com/media/6yRVg0HWzgS88/giphy.gif",
        category: "Reactions",
    },
    GifPresetDef {
        id: "eye-roll",
        name: "Eye Roll",
        locator: "https://media.giphy.com/media/Rhhr8D5mKSX7O/giphy.gif",
        category: "Reactions",
    },
    GifPresetDef {
        id: "cringe",
        name: "Cringe",
        locator: "https://media.giphy.com/media/4WFirPVJhAhavWrcd3/giphy.gif",
        category: "Reactions",
    },
    GifPresetDef {
        id: "shocked",
        name: "Shocked",
        locator: "https://media.giphy.com/media/l3q2K5jinAlChoCLS/giphy.gif",
        category: "Reactions",
    },
    // Celebrations
    GifPresetDef {
        id: "confetti",
        name: "Confetti",
        locator: "https://media.giphy.com/media/26tOZ42Mg6pbTUPHW/giphy.gif",
        category: "Celebrations",
    },
    GifPresetDef {
        id: "party-parrot",
        name: "Party Parrot",
        locator: "https://media.giphy.com/media/l3q2zVr6cu95nF6O4/giphy.gif",
        category: "Celebrations",
    },
    GifPresetDef {
        id: "victory",
        name: "Victory",
        locator: "https://media.giphy.com/media/3o6fJ1BM7R2EBRDnxK/giphy.gif",
        category: "Celebrations",
    },
    GifPresetDef {
        id: "gg",
        name: "GG",
        locator: "https://media.giphy.com/media/Jev4iU72S9RYc/giphy.gif",
        category: "Celebrations",
    },
    GifPresetDef {
        id: "hype",
        name: "HYPE",
        locator: "https://media.giphy.com/media/b1o4elYH8Tqjm/giphy.gif",
        category: "Celebrations",
    },
    // Fails
    GifPresetDef {
        id: "explosion",
        name: "Explosion",
        locator: "https://media.giphy.com/media/oe33xf3B50fsc/giphy.gif",
        category: "Fails",
    },
    GifPresetDef {
        id: "this-is-fine",
        name: "This Is Fine",
        locator: "https://media.giphy.com/media/QMHoU66sBXqqLqYvGO/giphy.gif",
        category: "Fails",
    },
    GifPresetDef {
        id: "f",
        name: "F",
        locator: "https://media.giphy.com/media/hStvd5LiWCFzYNyxR4/giphy.gif",
        category: "Fails",
    },
    GifPresetDef {
        id: "disaster",
        name: "Disaster",
        locator: "https://media.giphy.com/media/HUkOv6BNWc1HO/giphy.gif",
        category: "Fails",
    },
    GifPresetDef {
        id: "rage-quit",
        name: "Rage Quit",
        locator: "https://media.giphy.com/media/11tTNkNy1SdXGg/giphy.gif",
        category: "Fails",
    },
    GifPresetDef {
        id: "grimace",
        name: "Grimace",
        locator: "https://media.giphy.com/media/3ohzdE2hl1Yuv7hIw8/giphy.gif",
        category: "Fails",
    },
    // Memes
    GifPresetDef {
        id: "rick-roll",
        name: "Rick Roll",
        locator: "https://media.giphy.com/media/Vuw9m5wXviFIQ/giphy.gif",
        category: "Memes",
    },
    GifPresetDef {
        id: "nyan-cat",
        name: "Nyan Cat",
        locator: "https://media.giphy.com/media/sIIhZliB2McAo/giphy.gif",
        category: "Memes",
    },
    GifPresetDef {
        id: "stonks",
        name: "Stonks",
        locator: "https://media.giphy.com/media/YnkMcHgNIMW4Yfmjxr/giphy.gif",
        category: "Memes",
    },
    GifPresetDef {
        id: "among-us",
        name: "Among Us",
        locator: "https://media.giphy.com/media/RtdRhc7TxBxB0YAsK6/giphy.gif",
        category: "Memes",
    },
    GifPresetDef {
        id: "surprised-pikachu",
        name: "Surprised Pikachu",
        locator: "https://media.giphy.com/media/6nWhy3ulBL7GSCvKw6/giphy.gif",
        category: "Memes",
    },
    GifPresetDef {
        id: "thinking",
        name: "Thinking",
        locator: "https://media.giphy.com/media/a5viI92PAF89q/giphy.gif",
        category: "Memes",
    },
    GifPresetDef {
        id: "money-printer",
        name: "Money Printer",
        locator: "https://media.giphy.com/media/Y2ZUWLrTy63j9T6qrK/giphy.gif",
        category: "Memes",
    },
    // Alerts
    GifPresetDef {
        id: "welcome",
        name: "Welcome",
        locator: "https://media.giphy.com/media/l0MYGb1LuZ3n7dRnO/giphy.gif",
        category: "Alerts",
    },
    GifPresetDef {
        id: "new-sub-gnome",
        name: "New Sub Gnome",
        locator: "https://media.giphy.com/media/l4pTfx2qLszoacZRS/giphy.gif",
        category: "Alerts",
    },
    GifPresetDef {
        id: "donation",
        name: "Donation",
        locator: "https://media.giphy.com/media/67ThRZlYBvibtdF9JH/giphy.gif",
        category: "Alerts",
    },
    GifPresetDef {
        id: "bits",
        name: "Bits",
        locator: "https://media.giphy.com/media/3oKIPa2TdahY8LAAxy/giphy.gif",
        category: "Alerts",
    },
    GifPresetDef {
        id: "new-chatter",
        name: "New Chatter",
        locator: "https://media.giphy.com/media/ASd0Ukj0y3qMM/giphy.gif",
        category: "Alerts",
    },
    // Emotions
    GifPresetDef {
        id: "laugh",
        name: "Laugh",
        locator: "https://media.giphy.com/media/10JhviFuU2gWD6/giphy.gif",
        category: "Emotions",
    },
    GifPresetDef {
        id: "cry",
        name: "Cry",
        locator: "https://media.giphy.com/media/d2lcHJTG5Tscg/giphy.gif",
        category: "Emotions",
    },
    GifPresetDef {
        id: "angry",
        name: "Angry",
        locator: "https://media.giphy.com/media/11tTNkNy1SdXGg/giphy.gif",
        category: "Emotions",
    },
    GifPresetDef {
        id: "scared",
        name: "Scared",
        locator: "https://media.giphy.com/media/bEVKYB487Lqxy/giphy.gif",
        category: "Emotions",
    },
    GifPresetDef {
        id: "love",
        name: "Love",
        locator: "https://media.giphy.com/media/26FLdmIp6wJr91JAI/giphy.gif",
        category: "Emotions",
    },
    GifPresetDef {
        id: "sad",
        name: "Sad",
        locator: "https://media.giphy.com/media/OPU6wzx8JrHna/giphy.gif",
        category: "Emotions",
    },
    GifPresetDef {
        id: "nervous",
        name: "Nervous",
        locator: "https://media.giphy.com/media/32mC2kXYWCsg0/giphy.gif",
        category: "Emotions",
    },
    // Actions
    GifPresetDef {
        id: "wave",
        name: "Wave",
        locator: "https://media.giphy.com/media/xT9IgG50Fb7Mi0prBC/giphy.gif",
        category: "Actions",
    },
    GifPresetDef {
        id: "salute",
        name: "Salute",
        locator: "https://media.giphy.com/media/rHR8qP1mC5V3G/giphy.gif",
        category: "Actions",
    },
    GifPresetDef {
        id: "strength-and-honor",
        name: "Strength & Honor",
        locator: "https://media.giphy.com/media/pHb82xtBPfqEg/giphy.gif",
        category: "Actions",
    },
    GifPresetDef {
        id: "mic-drop",
        name: "Mic Drop",
        locator: "https://media.giphy.com/media/3o7qDSOvfaCO9b3MlO/giphy.gif",
        category: "Actions",
    },
    GifPresetDef {
        id: "peace-out",
        name: "Peace Out",
        locator: "https://media.giphy.com/media/42D3CxaINsAFemFuId/giphy.gif",
        category: "Actions",
    },
    GifPresetDef {
        id: "finger-guns",
        name: "Finger Guns",
        locator: "https://media.giphy.com/media/ui1hpJSyBDWlG/giphy.gif",
        category: "Actions",
    },
];
