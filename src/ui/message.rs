//! Status messages shown to the user after a jump.

use std::io::{self, Write};
use termion::{color, style};

/// Represents a message to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Warning,
        }
    }
}

/// Receives status notifications.
pub trait StatusSink {
    fn notify(&mut self, message: Message);
}

/// Collects messages in memory.
impl StatusSink for Vec<Message> {
    fn notify(&mut self, message: Message) {
        self.push(message);
    }
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn notify(&mut self, message: Message) {
        (**self).notify(message);
    }
}

/// Writes messages to stderr, colouring warnings.
#[derive(Debug, Default)]
pub struct StderrStatus;

impl StatusSink for StderrStatus {
    fn notify(&mut self, message: Message) {
        let mut stderr = io::stderr();
        // Nothing sensible to do if stderr is gone
        let _ = match message.level {
            MessageLevel::Info => writeln!(stderr, "{}", message.text),
            MessageLevel::Warning => writeln!(
                stderr,
                "{}Warning:{} {}",
                color::Fg(color::Yellow),
                style::Reset,
                message.text
            ),
        };
    }
}
