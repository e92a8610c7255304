use crate::error::Result;
use std::fmt;
use std::path::PathBuf;

/// The two persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Books,
    Members,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Books => write!(f, "books"),
            Self::Members => write!(f, "members"),
        }
    }
}

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while CatalogStore handles the "what" (records, keys, lending).
pub trait StorageBackend {
    /// Read the full text of a collection.
    /// Returns Ok(None) if nothing has been stored yet.
    fn read(&self, collection: Collection) -> Result<Option<String>>;

    /// Replace the full text of a collection.
    /// MUST NOT leave a partially written file behind.
    fn write(&self, collection: Collection, content: &str) -> Result<()>;

    /// Where the collection lives. For MemBackend, a virtual path.
    fn location(&self, collection: Collection) -> PathBuf;
}
