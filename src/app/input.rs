//! Single-line text buffer for the search and rename prompts.

/// Editable text with the cursor always at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    /// Replaces the contents, e.g. to seed the prompt with the current name.
    pub fn set(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    /// Removes the last character. Returns `false` if the buffer was empty.
    pub fn backspace(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
