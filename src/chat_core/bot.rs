use std::any::Any;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use super::conversation::ConversationLog;
use super::engine::Responder;
use super::types::Message;

const TURN_QUEUE_DEPTH: usize = 32;

struct Turn {
    question: String,
    reply: oneshot::Sender<Message>,
}

/// A chat session. Turns are queued and handled one at a time by a worker
/// task, which is the only writer of the session's log.
#[derive(Clone)]
pub struct Bot {
    tx: mpsc::Sender<Turn>,
    log: ConversationLog,
}

impl Bot {
    /// Must be called from within a tokio runtime.
    pub fn spawn<R: Responder>(responder: Arc<R>) -> Bot {
        let (tx, rx) = mpsc::channel(TURN_QUEUE_DEPTH);
        let log = ConversationLog::new();
        tokio::spawn(run_turns(responder, log.clone(), rx));
        Bot { tx, log }
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Submits `draft` as one turn and waits for the agent's reply. The reply
    /// has already been appended to the log when this returns.
    pub async fn chat(&self, draft: &str) -> Result<Message> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Turn {
                question: draft.trim().to_owned(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| anyhow!("Chat session has shut down"))?;
        let reply = reply_rx.await.context("Chat session dropped the turn")?;
        Ok(reply)
    }
}

async fn run_turns<R: Responder>(
    responder: Arc<R>,
    log: ConversationLog,
    mut rx: mpsc::Receiver<Turn>,
) {
    while let Some(turn) = rx.recv().await {
        log.append(Message::user(turn.question.as_str()));

        let reply = match answer(&responder, &turn.question).await {
            Ok(text) => Message::agent(text),
            Err(err) => {
                warn!(error = %err, question = %turn.question, "turn failed");
                Message::agent(format!("Error: {}", err))
            }
        };
        debug!(question = %turn.question, "turn answered");
        log.append(reply.clone());

        // the caller may have stopped waiting; the turn still counts
        let _ = turn.reply.send(reply);
    }
    debug!("chat session closed");
}

async fn answer<R: Responder>(responder: &Arc<R>, question: &str) -> Result<String> {
    let responder = Arc::clone(responder);
    let question = question.to_owned();
    match tokio::task::spawn_blocking(move || responder.respond(&question)).await {
        Ok(text) => Ok(text),
        Err(err) if err.is_panic() => bail!(panic_message(err.into_panic())),
        Err(err) => Err(err.into()),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "responder panicked".to_owned()
    }
}
