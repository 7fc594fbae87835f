//! Conversation memory window.
//!
//! Renders the tail of the conversation history into a transcript block that
//! is prepended to every composed instruction. Rendering is a pure read over
//! the history and never mutates it.

use linkwise_core::ConversationHistory;

/// Messages carried by default.
pub const DEFAULT_WINDOW: usize = 20;

/// A bounded view over recent dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryWindow {
    size: usize,
}

impl Default for MemoryWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl MemoryWindow {
    /// A window over the last `size` messages (at least one).
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1) }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Render the transcript block, or `""` until there is more than one message.
    pub fn render(&self, history: &ConversationHistory) -> String {
        if history.len() <= 1 {
            return String::new();
        }

        let mut block = String::from("\n\nPREVIOUS CONVERSATION CONTEXT:\n");
        for message in history.recent(self.size) {
            block.push_str(&format!("{}: {}\n", message.role.label(), message.content));
        }
        block.push_str("\nEND OF PREVIOUS CONVERSATION CONTEXT\n");
        block.push_str(
            "Please use this context to provide more relevant and personalized responses. \
             Reference previous discussions when appropriate.\n\n",
        );
        block
    }
}
