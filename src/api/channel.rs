//! The per-connection push channel.
//!
//! Once a request has been upgraded, this loop owns the socket and a
//! per-connection interval timer. It pushes one snapshot immediately,
//! then one per tick, and answers the two inbound signals the kiosk
//! dashboard sends: a `ping` keep-alive probe and a `refresh` request.
//! When the loop exits, the timer is dropped with it, so a closed channel
//! can never receive another push.

use axum::extract::ws::{Message, WebSocket};
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::handlers::AppState;
use crate::error::Result;
use crate::metrics;

/// Inbound keep-alive probe token.
pub const KEEPALIVE_PROBE: &str = "ping";
/// Fixed acknowledgement sent back for a keep-alive probe.
pub const KEEPALIVE_ACK: &str = "pong";
/// Inbound request for an immediate out-of-schedule snapshot.
pub const REFRESH_REQUEST: &str = "refresh";

/// Drive one open channel until either side closes it.
pub async fn run(socket: WebSocket, state: AppState) {
    metrics::inc_channels_opened();
    info!("health channel opened");

    let (mut sender, mut receiver) = socket.split();

    // Initial push, before the timer is even armed.
    if let Err(e) = push_snapshot(&mut sender, &state).await {
        warn!("initial push failed: {e}");
        metrics::inc_channels_closed();
        return;
    }

    let mut ticker = tokio::time::interval(state.push_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick of a tokio interval completes immediately; consume
    // it so the first periodic push lands one full period after open.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = push_snapshot(&mut sender, &state).await {
                    warn!("periodic push failed, closing channel: {e}");
                    break;
                }
                debug!("pushed periodic snapshot");
            }
            inbound = receiver.next() => {
                if !handle_inbound(inbound, &mut sender, &state).await {
                    break;
                }
            }
        }
    }

    metrics::inc_channels_closed();
    info!("health channel closed");
    // Dropping the loop drops the ticker with it; nothing outlives the
    // connection.
}

/// Process one inbound frame. Returns false when the channel should close.
async fn handle_inbound(
    inbound: Option<std::result::Result<Message, axum::Error>>,
    sender: &mut SplitSink<WebSocket, Message>,
    state: &AppState,
) -> bool {
    match inbound {
        Some(Ok(Message::Text(text))) => match text.as_str() {
            KEEPALIVE_PROBE => {
                metrics::inc_keepalives();
                if let Err(e) = sender.send(Message::Text(KEEPALIVE_ACK.to_string())).await {
                    warn!("keep-alive ack failed, closing channel: {e}");
                    return false;
                }
                true
            }
            REFRESH_REQUEST => {
                debug!("refresh requested");
                if let Err(e) = push_snapshot(sender, state).await {
                    warn!("refresh push failed, closing channel: {e}");
                    return false;
                }
                true
            }
            other => {
                debug!("ignoring unknown signal: {other:?}");
                true
            }
        },
        // Binary payloads and protocol-level ping/pong frames are ignored;
        // axum answers ping frames on its own.
        Some(Ok(Message::Binary(_) | Message::Ping(_) | Message::Pong(_))) => true,
        Some(Ok(Message::Close(_))) | None => false,
        Some(Err(e)) => {
            warn!("channel receive error: {e}");
            false
        }
    }
}

/// Serialize and send one fresh snapshot.
async fn push_snapshot(sender: &mut SplitSink<WebSocket, Message>, state: &AppState) -> Result<()> {
    let snapshot = state.snapshot();
    let payload = serde_json::to_string(&snapshot)?;
    sender.send(Message::Text(payload)).await?;
    metrics::inc_ws_snapshots();
    Ok(())
}
