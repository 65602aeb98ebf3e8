//! Terminal input parsing and output formatting.

/// What the user asked for with one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Send the line as a chat message
    Message(String),
    /// Leave the chat
    Quit,
    /// Nothing to send
    Empty,
}

impl Input {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Self::Empty,
            "/quit" | "/exit" => Self::Quit,
            _ => Self::Message(line.to_string()),
        }
    }
}

/// Prefix a received broadcast with the local time it arrived.
pub fn format_incoming(text: &str, clock: &str) -> String {
    format!("[{clock}] {text}")
}
