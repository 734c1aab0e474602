use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation. Never edited after it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    role: Role,
    text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { role: Role::Assistant, text: text.into() }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingReply,
}

/// Turns of one widget session plus the number of replies still in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationState {
    turns: Vec<ChatTurn>,
    pending_replies: usize,
}

impl ConversationState {
    pub fn seeded(greeting: &str) -> Self {
        Self {
            turns: vec![ChatTurn::assistant(greeting)],
            pending_replies: 0,
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn is_composing(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn phase(&self) -> Phase {
        if self.is_composing() {
            Phase::AwaitingReply
        } else {
            Phase::Idle
        }
    }

    pub(crate) fn push_user(&mut self, text: &str) {
        self.turns.push(ChatTurn::user(text));
        self.pending_replies += 1;
    }

    pub(crate) fn push_reply(&mut self, text: &str) {
        self.turns.push(ChatTurn::assistant(text));
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_state_holds_only_the_greeting() {
        let state = ConversationState::seeded("Hi there");
        assert_eq!(state.turns(), &[ChatTurn::assistant("Hi there")]);
        assert!(!state.is_composing());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn composing_tracks_outstanding_replies() {
        let mut state = ConversationState::seeded("Hi");
        state.push_user("one");
        state.push_user("two");
        assert_eq!(state.pending_replies, 2);
        assert_eq!(state.phase(), Phase::AwaitingReply);

        state.push_reply("first");
        assert!(state.is_composing());

        state.push_reply("second");
        assert!(!state.is_composing());
        assert_eq!(state.turns().len(), 5);
    }

    #[test]
    fn turns_serialize_with_lowercase_roles() {
        let json = serde_json::to_value(ChatTurn::user("Hello")).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "user", "text": "Hello" }));

        let turn: ChatTurn = serde_json::from_str(r#"{ "role": "assistant", "text": "Hi" }"#).unwrap();
        assert_eq!(turn.role(), Role::Assistant);
        assert_ne!(turn.role(), Role::User);
    }
}
