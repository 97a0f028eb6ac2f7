//! Command input sources
//!
//! There is no input device at this stage, so the shell reads from a
//! [`CommandSource`]: anything that can yield the next command token or
//! report that none are left. [`ScriptedSource`] replays a fixed list; a
//! keyboard-backed source can replace it later without touching dispatch.

/// Yields command tokens for the shell loop
pub trait CommandSource {
    /// The next token, or `None` once the source is exhausted
    fn next_command(&mut self) -> Option<String>;
}

/// The demo script, run in this exact order
pub const DEMO_SCRIPT: [&str; 6] = ["info", "help", "logo", "memory", "colors", "clear"];

/// An ordered, finite list of predetermined tokens
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    tokens: Vec<String>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedSource {
            tokens: tokens.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }

    /// The stock demo script
    pub fn demo() -> Self {
        Self::new(DEMO_SCRIPT)
    }

    /// Tokens not yet consumed
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }
}

impl CommandSource for ScriptedSource {
    fn next_command(&mut self) -> Option<String> {
        let token = self.tokens.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(token)
    }
}
