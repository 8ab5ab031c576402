//! Terminal input handling for the game loop.
//!
//! Wraps rustyline so the loop sees plain line/EOF/interrupt events
//! instead of editor errors.

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Outcome of reading a line at a prompt.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

pub struct InputManager {
    editor: DefaultEditor,
}

impl InputManager {
    /// # Errors
    /// - if the line editor cannot be initialized
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Blocking read of one line. EOF and Ctrl-C are reported as events
    /// rather than errors so the loop can decide what they mean.
    ///
    /// # Errors
    /// - on unrecoverable terminal errors from the editor
    pub fn read_line(&mut self, prompt: &str) -> Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(InputEvent::Line(line)),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(e) => Err(e.into()),
        }
    }
}
