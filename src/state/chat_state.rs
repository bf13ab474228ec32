//! Chat transcript and draft state.

use logai::ChatMessage;

/// State for the analysis chat view.
pub struct ChatState {
    messages: Vec<ChatMessage>,
    draft: String,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            draft: String::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    /// Moves the draft into the transcript as a user message.
    /// Returns `None` when the draft is blank.
    pub fn take_draft(&mut self) -> Option<String> {
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.draft.clear();
        self.messages.push(ChatMessage::user(text.clone()));
        Some(text)
    }

    pub fn push_assistant(&mut self, content: String) {
        self.messages.push(ChatMessage::assistant(content));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logai::ChatRole;

    #[test]
    fn test_take_draft_appends_user_message() {
        let mut chat = ChatState::new();
        chat.draft_mut().push_str("  why did errors spike?  ");

        let text = chat.take_draft().unwrap();
        assert_eq!(text, "why did errors spike?");
        assert!(chat.draft().is_empty());
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, ChatRole::User);
    }

    #[test]
    fn test_blank_draft_is_not_submitted() {
        let mut chat = ChatState::new();
        chat.draft_mut().push_str("   ");
        assert!(chat.take_draft().is_none());
        assert!(chat.messages().is_empty());
    }
}
