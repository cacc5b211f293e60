use crate::{
    game::GameSession,
    models::{RejectionReason, Submission},
    websocket::messages::{ClientMessage, ServerMessage},
    words::WordSourceError,
    AppState,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// WebSocket upgrade handler
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection. Each connection plays its own game.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = Uuid::new_v4();
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    tracing::info!("WebSocket connection established: {}", connection_id);

    // Spawn a task to send messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // Handle incoming messages from the client
    let mut recv_task = tokio::spawn(async move {
        let mut session = GameSession::new(
            state.start_words.clone(),
            state.dictionary.clone(),
            state.config.game.max_turns,
        );

        // The first round starts as soon as the player arrives
        if let Err(e) = respond(ClientMessage::NextWord, &mut session, &tx).await {
            tracing::error!("Closing connection {}: {}", connection_id, e);
            return;
        }

        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => {
                        if let Err(e) = respond(client_msg, &mut session, &tx).await {
                            tracing::error!("Closing connection {}: {}", connection_id, e);
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse message: {}", e);
                        let error_msg = ServerMessage::Error {
                            message: format!("Invalid message format: {}", e),
                        };
                        let _ = tx.send(error_msg).await;
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Client disconnected: {}", connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
        }
        _ = (&mut recv_task) => {
            send_task.abort();
        }
    }

    tracing::info!("WebSocket connection closed: {}", connection_id);
}

/// Apply a client message to the session and queue the replies
async fn respond(
    msg: ClientMessage,
    session: &mut GameSession,
    tx: &mpsc::Sender<ServerMessage>,
) -> anyhow::Result<()> {
    for reply in handle_client_message(msg, session)? {
        tx.send(reply).await?;
    }
    Ok(())
}

/// Handle individual client messages.
///
/// Errors are only returned when the word source is unavailable, which ends
/// the connection.
fn handle_client_message(
    msg: ClientMessage,
    session: &mut GameSession,
) -> Result<Vec<ServerMessage>, WordSourceError> {
    let replies = match msg {
        ClientMessage::NextWord => {
            let start = session.start_round()?;
            vec![start.into(), session.snapshot().into()]
        }
        ClientMessage::Input { text } => {
            session.set_pending(text);
            Vec::new()
        }
        ClientMessage::Submit => submission_replies(session.submit_pending(), session),
        ClientMessage::SubmitWord { word } => {
            let result = session.submit(&word);
            submission_replies(result, session)
        }
    };

    Ok(replies)
}

fn submission_replies(
    result: Result<Submission, RejectionReason>,
    session: &GameSession,
) -> Vec<ServerMessage> {
    match result {
        Ok(Submission::Accepted { word, score }) => vec![
            ServerMessage::SubmissionAccepted { word, score },
            session.snapshot().into(),
        ],
        Ok(Submission::Ignored) => Vec::new(),
        Err(reason) => vec![reason.into()],
    }
}
