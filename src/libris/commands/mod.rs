use crate::config::LibrisConfig;
use crate::error::{LibrisError, Result};
use crate::model::{Book, Member};
use crate::store::catalog::LoanReceipt;

pub mod books;
pub mod config;
pub mod loans;
pub mod members;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub affected_members: Vec<Member>,
    pub listed_members: Vec<Member>,
    pub loan: Option<LoanReceipt>,
    pub config: Option<LibrisConfig>,
    pub messages: Vec<CmdMessage>,
    /// Set when the operation was abandoned because a lookup missed.
    pub not_found: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_listed_members(mut self, members: Vec<Member>) -> Self {
        self.listed_members = members;
        self
    }

    pub fn with_config(mut self, config: LibrisConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Turn a lookup miss into a warning result; pass every other error through.
pub(crate) fn not_found_as_warning(err: LibrisError) -> Result<CmdResult> {
    if err.is_not_found() {
        let mut result = CmdResult::default().with_message(CmdMessage::warning(err.to_string()));
        result.not_found = true;
        Ok(result)
    } else {
        Err(err)
    }
}
