//! WebSocket handler — room event relay.
//!
//! DESIGN
//! ======
//! On upgrade, generates a client ID and enters a `select!` loop:
//! - Incoming client frames → decode + dispatch by event name
//! - Events fanned out by room peers → forward to client
//!
//! Handler logic validates, updates membership, and returns an
//! `Outcome`; the dispatch layer owns all fan-out. Inbound traffic that
//! fails to decode, or that names a room the sender never joined, is
//! dropped without a reply.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → connection starts with no room
//! 2. `join-room` registers the connection (a later join moves it)
//! 3. Triggers relay to room peers, never back to the sender
//! 4. Close → membership cleanup (room evicted when left empty)

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::event::{ClientEvent, Role, ServerEvent};
use crate::media::MediaKind;
use crate::services;
use crate::state::AppState;

// =============================================================================
// OUTCOME
// =============================================================================

/// Result returned by event handlers. The dispatch layer uses this to
/// decide who receives what — handlers never touch the socket.
enum Outcome {
    /// Fan out to the sender's room, excluding the sender.
    Relay(ServerEvent),
    /// Membership changed; nothing goes out.
    Joined,
    /// Ignored: out-of-room or unjoined traffic.
    Dropped,
}

// =============================================================================
// UPGRADE
// =============================================================================

pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();

    // Per-connection channel for events fanned out by room peers.
    let (client_tx, mut client_rx) = mpsc::channel::<ServerEvent>(256);

    info!(%client_id, "ws: client connected");

    // The room this connection has joined, if any.
    let mut current_room: Option<String> = None;

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(msg) = msg else { break };
                let Ok(msg) = msg else { break };
                match msg {
                    Message::Text(text) => {
                        process_text(&state, &mut current_room, client_id, &client_tx, &text).await;
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            Some(event) = client_rx.recv() => {
                if send_event(&mut socket, client_id, &event).await.is_err() {
                    break;
                }
            }
        }
    }

    if let Some(room_id) = current_room {
        services::room::leave_room(&state, &room_id, client_id).await;
    }
    info!(%client_id, "ws: client disconnected");
}

// =============================================================================
// EVENT DISPATCH
// =============================================================================

/// Decode and process one inbound text frame.
///
/// This keeps the websocket transport concerns separate from event
/// handling, so tests can exercise dispatch and fan-out end-to-end.
async fn process_text(
    state: &AppState,
    current_room: &mut Option<String>,
    client_id: Uuid,
    client_tx: &mpsc::Sender<ServerEvent>,
    text: &str,
) {
    let event: ClientEvent = match serde_json::from_str(text) {
        Ok(event) => event,
        Err(e) => {
            warn!(%client_id, error = %e, "ws: dropped undecodable event");
            return;
        }
    };

    info!(%client_id, event = event.name(), room_id = event.room_id(), "ws: recv event");

    let outcome = process_event(state, current_room, client_id, client_tx, event).await;

    match outcome {
        Outcome::Relay(event) => {
            if let Some(room_id) = current_room.as_deref() {
                services::room::broadcast(state, room_id, &event, Some(client_id)).await;
            }
        }
        Outcome::Joined | Outcome::Dropped => {}
    }
}

/// Dispatch a decoded event. Only `join-room` is accepted before the
/// connection has a room; everything else must name the joined room.
async fn process_event(
    state: &AppState,
    current_room: &mut Option<String>,
    client_id: Uuid,
    client_tx: &mpsc::Sender<ServerEvent>,
    event: ClientEvent,
) -> Outcome {
    match event {
        ClientEvent::JoinRoom { room_id, role } => {
            join(state, current_room, client_id, client_tx, room_id, role).await
        }
        ClientEvent::PlaySound { room_id, sound_id, sound_url } => {
            if !sender_is_in(current_room, client_id, &room_id, "play-sound") {
                return Outcome::Dropped;
            }
            Outcome::Relay(ServerEvent::SoundTriggered { sound_id, sound_url })
        }
        ClientEvent::PlayGif { room_id, gif_id, gif_url, position, animation, duration } => {
            if !sender_is_in(current_room, client_id, &room_id, "play-gif") {
                return Outcome::Dropped;
            }
            Outcome::Relay(ServerEvent::GifTriggered {
                gif_id,
                gif_url,
                position,
                animation,
                duration,
            })
        }
        ClientEvent::CatalogChanged { room_id, kind, sound, gif } => {
            if !sender_is_in(current_room, client_id, &room_id, "catalog-changed") {
                return Outcome::Dropped;
            }
            let event = match kind {
                MediaKind::Sound => ServerEvent::SoundsUpdated { sound },
                MediaKind::Gif => ServerEvent::GifsUpdated { gif },
            };
            Outcome::Relay(event)
        }
    }
}

// =============================================================================
// JOIN
// =============================================================================

/// Register the connection in a room. A join while already in another
/// room moves the connection; re-joining the same room just refreshes
/// the declared role.
async fn join(
    state: &AppState,
    current_room: &mut Option<String>,
    client_id: Uuid,
    client_tx: &mpsc::Sender<ServerEvent>,
    room_id: String,
    role: Role,
) -> Outcome {
    if let Some(old_room) = current_room.take() {
        if old_room != room_id {
            services::room::leave_room(state, &old_room, client_id).await;
        }
    }

    services::room::join_room(state, &room_id, client_id, role, client_tx.clone()).await;
    *current_room = Some(room_id);
    Outcome::Joined
}

// =============================================================================
// HELPERS
// =============================================================================

/// Triggers only relay inside the room the connection joined. Traffic
/// naming any other room is dropped.
fn sender_is_in(
    current_room: &Option<String>,
    client_id: Uuid,
    room_id: &str,
    event: &str,
) -> bool {
    match current_room.as_deref() {
        Some(joined) if joined == room_id => true,
        Some(joined) => {
            warn!(
                %client_id,
                event,
                claimed = room_id,
                joined,
                "ws: dropped event for a room the sender is not in"
            );
            false
        }
        None => {
            warn!(
                %client_id,
                event,
                claimed = room_id,
                "ws: dropped event from a connection that never joined"
            );
            false
        }
    }
}

async fn send_event(
    socket: &mut WebSocket,
    client_id: Uuid,
    event: &ServerEvent,
) -> Result<(), ()> {
    let json = match serde_json::to_string(event) {
        Ok(j) => j,
        Err(e) => {
            warn!(error = %e, "ws: failed to serialize event");
            return Err(());
        }
    };
    info!(%client_id, event = event.name(), "ws: send event");
    socket.send(Message::Text(json.into())).await.map_err(|_| ())
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
