pub mod error;
pub mod ids;
pub mod memory;
pub mod mongo;

pub use error::DatabaseError;
pub use memory::{Document, MemoryCollection};
pub use mongo::MongoDatabase;

/// Backing store selected at startup. Repositories are built from this.
#[derive(Clone)]
pub enum Storage {
    Mongo(MongoDatabase),
    Memory,
}

impl Storage {
    pub fn name(&self) -> &'static str {
        match self {
            Storage::Mongo(_) => "mongodb",
            Storage::Memory => "memory",
        }
    }
}

/// Case-insensitive literal match, as a MongoDB `$regex` pattern.
pub fn contains_pattern(text: &str) -> String {
    regex::escape(text.trim())
}

/// Case-insensitive literal match used by the in-memory repositories.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}
