//! Room service — membership and fan-out.
//!
//! DESIGN
//! ======
//! Rooms are implicit: any string is a valid key, and nothing is
//! persisted. An entry is created when the first connection joins and
//! evicted when the last one leaves, so the table always mirrors the
//! live connection set. All membership changes take the table's write
//! lock; broadcast takes the read lock and never blocks on a slow
//! client.

use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

use crate::event::{Role, ServerEvent};
use crate::state::{AppState, RoomState};

/// Join a room, creating it on first use.
pub async fn join_room(
    state: &AppState,
    room_id: &str,
    client_id: Uuid,
    role: Role,
    tx: mpsc::Sender<ServerEvent>,
) {
    let mut rooms = state.rooms.write().await;
    let room = rooms.entry(room_id.to_owned()).or_insert_with(RoomState::new);
    room.clients.insert(client_id, tx);
    room.roles.insert(client_id, role);

    info!(
        %room_id,
        %client_id,
        role = role.as_str(),
        clients = room.clients.len(),
        "client joined room"
    );
}

/// Leave a room. Evicts the room entry when the last client leaves.
pub async fn leave_room(state: &AppState, room_id: &str, client_id: Uuid) {
    let mut rooms = state.rooms.write().await;
    let Some(room) = rooms.get_mut(room_id) else {
        return;
    };

    room.clients.remove(&client_id);
    room.roles.remove(&client_id);
    info!(%room_id, %client_id, remaining = room.clients.len(), "client left room");

    if room.clients.is_empty() {
        rooms.remove(room_id);
        info!(%room_id, "evicted empty room");
    }
}

/// Broadcast an event to all clients in a room, optionally excluding one.
pub async fn broadcast(state: &AppState, room_id: &str, event: &ServerEvent, exclude: Option<Uuid>) {
    let rooms = state.rooms.read().await;
    let Some(room) = rooms.get(room_id) else {
        return;
    };

    for (client_id, tx) in &room.clients {
        if exclude == Some(*client_id) {
            continue;
        }
        // Best-effort fan-out: a full client queue is skipped, not awaited.
        let _ = tx.try_send(event.clone());
    }
}

/// Number of connections currently in a room.
pub async fn member_count(state: &AppState, room_id: &str) -> usize {
    let rooms = state.rooms.read().await;
    rooms.get(room_id).map_or(0, |room| room.clients.len())
}

#[cfg(test)]
#[path = "room_test.rs"]
mod tests;
