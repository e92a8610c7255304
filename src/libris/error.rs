use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("No book found with ISBN {0}")]
    BookNotFound(String),

    #[error("No member found with member number {0}")]
    MemberNotFound(i32),

    #[error("A book with ISBN {0} is already in the catalog")]
    DuplicateIsbn(String),

    #[error("Member number {0} is already in use")]
    DuplicateMember(i32),

    #[error("Malformed {kind} record on line {line_number}: {reason}")]
    MalformedRecord {
        kind: &'static str,
        line_number: usize,
        reason: String,
    },

    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl LibrisError {
    /// True for lookup misses, which callers report without treating as fatal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BookNotFound(_) | Self::MemberNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, LibrisError>;
