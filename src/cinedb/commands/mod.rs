//! # Command Layer
//!
//! One function per operation. Each mutating command runs the whole cycle on
//! its own: load the dataset, normalize and validate the input, add through
//! the [`Repository`](crate::repository::Repository), save. If any step fails
//! nothing is written.
//!
//! Commands never print. They return a [`CmdResult`] of leveled messages and
//! the shell decides how to render them.
//!
//! ## Command Modules
//!
//! - [`add`]: Add actors, directors, casting directors and projects
//! - [`sync`]: Pull from and push to the remote bucket

use serde::Serialize;

pub mod add;
pub mod sync;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}
