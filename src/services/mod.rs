//! Domain services used by websocket and HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own room membership and catalog storage so route
//! handlers can stay focused on protocol translation. Nothing in here
//! imports Axum types.

pub mod catalog;
pub mod presets;
pub mod room;
