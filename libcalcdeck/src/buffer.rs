//! Expression buffer
//!
//! Accumulates keypad and keyboard input into the arithmetic text that the
//! evaluator later parses. Nothing is validated here; malformed input is
//! only caught at evaluation time.

/// Live, editable arithmetic text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: String,
}

impl ExpressionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenate a token (digit, operator, literal) onto the buffer
    pub fn append(&mut self, token: &str) {
        self.text.push_str(token);
    }

    /// Remove the last character, if any
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replace the whole buffer, e.g. with a function result or a reused entry
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
