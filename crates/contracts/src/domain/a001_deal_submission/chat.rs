use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Роль реплики в чате по данным
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// Реплика чата
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    #[error("assistant reply without a pending user message")]
    NoPendingQuestion,
}

/// Append-only chat history.
///
/// Every user turn gets at most one assistant turn. A failed request leaves
/// the user turn unanswered; the next user turn starts a new exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatTranscript {
    turns: Vec<ChatTurn>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> &ChatTurn {
        self.turns.push(ChatTurn::user(content));
        &self.turns[self.turns.len() - 1]
    }

    /// Ответ допустим только сразу после вопроса пользователя
    pub fn push_assistant(&mut self, content: impl Into<String>) -> Result<&ChatTurn, TranscriptError> {
        if !self.awaiting_reply() {
            return Err(TranscriptError::NoPendingQuestion);
        }
        self.turns.push(ChatTurn::assistant(content));
        Ok(&self.turns[self.turns.len() - 1])
    }

    pub fn awaiting_reply(&self) -> bool {
        matches!(self.turns.last(), Some(turn) if turn.role == ChatRole::User)
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
