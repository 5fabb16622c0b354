//! cueboard — shared soundboard and gif overlay rooms.
//!
//! Controllers trigger sounds and gif overlays that play on every
//! display connected to the same room. Rooms are implicit and live in
//! memory; the media catalog lives on the filesystem and is re-read on
//! every request.

pub mod event;
pub mod media;
pub mod routes;
pub mod services;
pub mod state;
