//! Outbound chat: hand messages to the send tool and keep the session transcript.

use crate::domain::{ChatLine, DomainError};
use crate::ports::MessageSenderPort;
use chrono::Local;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub struct ChatService {
    sender: Arc<dyn MessageSenderPort>,
    /// Lines sent this session, oldest first. Not persisted.
    transcript: Mutex<Vec<ChatLine>>,
}

impl ChatService {
    pub fn new(sender: Arc<dyn MessageSenderPort>) -> Self {
        Self {
            sender,
            transcript: Mutex::new(Vec::new()),
        }
    }

    /// Send `text` (trimmed) to `recipient_id`.
    ///
    /// Returns `Ok(None)` without dispatching when the text is blank or no recipient
    /// is given. The transcript only grows when the send tool could be started.
    pub async fn send_message(
        &self,
        recipient_id: &str,
        text: &str,
    ) -> Result<Option<ChatLine>, DomainError> {
        let text = text.trim();
        if text.is_empty() || recipient_id.is_empty() {
            return Ok(None);
        }

        if let Err(e) = self.sender.send(recipient_id, text).await {
            warn!(recipient_id, error = %e, "message dispatch failed");
            return Err(e);
        }

        let line = ChatLine {
            at: Local::now(),
            recipient_id: recipient_id.to_string(),
            text: text.to_string(),
        };
        self.transcript.lock().await.push(line.clone());
        info!(recipient_id, len = text.len(), "message handed to send tool");
        Ok(Some(line))
    }

    pub async fn transcript(&self) -> Vec<ChatLine> {
        self.transcript.lock().await.clone()
    }
}
