mod journal;

pub use journal::JournalService;
