//! Interfaces to the agent runtime and message store.
//!
//! Neither is implemented here; the executor only forwards work to them.

use super::attachment::Attachment;
use crate::error::CollaboratorError;
use async_trait::async_trait;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Result reported by the agent runtime after accepting a prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AgentRun {
    /// Runtime-specific identifier of the started run, if any
    pub id: Option<String>,
    pub summary: Option<String>,
}

/// Runs a resolved prompt with the language model.
#[async_trait]
pub trait AgentCoordinator: Send + Sync {
    async fn run(
        &self,
        cancel: &CancellationToken,
        session_id: &str,
        prompt: &str,
        attachments: Vec<Attachment>,
    ) -> std::result::Result<AgentRun, CollaboratorError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    Finish { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    pub role: MessageRole,
    pub parts: Vec<ContentPart>,
}

impl NewMessage {
    /// A complete assistant turn consisting of `text`.
    pub fn assistant_text(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            parts: vec![
                ContentPart::Text { text: text.into() },
                ContentPart::Finish {
                    reason: "end_turn".to_string(),
                },
            ],
        }
    }

    /// Concatenated text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                ContentPart::Text { text } => Some(text.as_str()),
                ContentPart::Finish { .. } => None,
            })
            .collect()
    }
}

/// Stores messages in a session.
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Returns the identifier of the stored message.
    async fn create(
        &self,
        cancel: &CancellationToken,
        session_id: &str,
        message: NewMessage,
    ) -> std::result::Result<String, CollaboratorError>;
}
