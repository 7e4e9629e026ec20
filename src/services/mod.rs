pub mod entry_store;
pub mod markdown_service;
pub mod search_service;

pub use entry_store::{EntryStore, FileStore, MemoryStore};
pub use markdown_service::MarkdownService;
pub use search_service::SearchService;
