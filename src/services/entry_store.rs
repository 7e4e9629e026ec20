use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use log::{debug, error, info, warn};

use crate::errors::WikiError;
use crate::types::Entry;

/// Storage abstraction for wiki entries.
///
/// Titles are case-preserving storage keys with case-insensitive lookup:
/// `get_entry("python")` finds an entry saved as "Python" and returns it
/// under its canonical stored title.
pub trait EntryStore: Send + Sync {
    /// Enumerate all stored entry titles. No sort order is guaranteed.
    fn list_entries(&self) -> Result<Vec<String>, WikiError>;

    /// Look up an entry by title, ignoring case. A missing entry is a normal
    /// outcome (`Ok(None)`), not an error.
    fn get_entry(&self, title: &str) -> Result<Option<Entry>, WikiError>;

    /// Write or overwrite the entry for `title`, keeping the title's casing
    /// as the storage key.
    fn save_entry(&self, title: &str, content: &str) -> Result<(), WikiError>;
}

/// Reject titles that would escape the entries directory or hide the file
fn ensure_safe_title(title: &str) -> Result<(), WikiError> {
    if title.trim().is_empty() || title.starts_with('.') {
        return Err(WikiError::InvalidTitle(title.to_string()));
    }
    let path = Path::new(title);
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(WikiError::InvalidTitle(title.to_string())),
    }
}

/// Flat-directory file store: one `<title>.md` file per entry
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: PathBuf) -> Self {
        debug!("Creating FileStore with base directory: {:?}", base_dir);
        Self { base_dir }
    }

    fn entry_path(&self, title: &str) -> PathBuf {
        self.base_dir.join(format!("{}.md", title))
    }

    /// Find the canonical stored title matching `title` case-insensitively
    fn canonical_title(&self, title: &str) -> Result<Option<String>, WikiError> {
        let wanted = title.to_lowercase();
        Ok(self
            .list_entries()?
            .into_iter()
            .find(|stored| stored.to_lowercase() == wanted))
    }
}

impl EntryStore for FileStore {
    fn list_entries(&self) -> Result<Vec<String>, WikiError> {
        let mut titles = Vec::new();
        for entry_result in fs::read_dir(&self.base_dir)? {
            let entry = entry_result?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name_os = entry.file_name();
            let name = name_os.to_string_lossy();
            if name.starts_with('.') {
                continue; // hide dotfiles
            }
            if let Some(title) = name.strip_suffix(".md") {
                if !title.is_empty() {
                    titles.push(title.to_string());
                }
            }
        }
        debug!("Listed entries directory, found {} entries", titles.len());
        Ok(titles)
    }

    fn get_entry(&self, title: &str) -> Result<Option<Entry>, WikiError> {
        let Some(canonical) = self.canonical_title(title)? else {
            debug!("Entry not found for title: '{}'", title);
            return Ok(None);
        };

        let path = self.entry_path(&canonical);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            // Entry removed between listing and read; treat as absent
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                error!("Failed to read entry file {:?}: {}", path, e);
                return Err(WikiError::Io(e));
            }
        };
        let modified = fs::metadata(&path).and_then(|m| m.modified()).ok();

        debug!("Read entry '{}', {} bytes", canonical, content.len());
        Ok(Some(Entry { title: canonical, content, modified }))
    }

    fn save_entry(&self, title: &str, content: &str) -> Result<(), WikiError> {
        ensure_safe_title(title)?;

        let path = self.entry_path(title);
        fs::write(&path, content).map_err(|e| {
            error!("Failed to write entry file {:?}: {}", path, e);
            WikiError::Io(e)
        })?;

        info!("Saved entry '{}', {} bytes", title, content.len());
        Ok(())
    }
}

/// In-memory store keyed by canonical title, for tests and embedding
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { entries: Mutex::new(HashMap::new()) }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore for MemoryStore {
    fn list_entries(&self) -> Result<Vec<String>, WikiError> {
        let entries = self.entries.lock().unwrap_or_else(|e| {
            warn!("Memory store mutex poisoned, recovering");
            e.into_inner()
        });
        Ok(entries.keys().cloned().collect())
    }

    fn get_entry(&self, title: &str) -> Result<Option<Entry>, WikiError> {
        let wanted = title.to_lowercase();
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries
            .iter()
            .find(|(stored, _)| stored.to_lowercase() == wanted)
            .map(|(stored, content)| Entry {
                title: stored.clone(),
                content: content.clone(),
                modified: None,
            }))
    }

    fn save_entry(&self, title: &str, content: &str) -> Result<(), WikiError> {
        ensure_safe_title(title)?;
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(title.to_string(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_store() -> (tempfile::TempDir, FileStore) {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(temp.path().to_path_buf());
        (temp, store)
    }

    #[test]
    fn get_unsaved_title_is_absent() {
        let (_temp, store) = file_store();
        assert!(store.get_entry("Nothing").expect("get").is_none());
    }

    #[test]
    fn save_then_get_round_trips_ignoring_case() {
        let (_temp, store) = file_store();
        store.save_entry("Python", "# Hello").expect("save");

        for lookup in ["Python", "python", "PYTHON", "pYtHoN"] {
            let entry = store.get_entry(lookup).expect("get").expect("present");
            assert_eq!(entry.title, "Python");
            assert_eq!(entry.content, "# Hello");
        }
    }

    #[test]
    fn save_preserves_title_casing_in_storage_key() {
        let (temp, store) = file_store();
        store.save_entry("CamelCase", "body").expect("save");
        assert!(temp.path().join("CamelCase.md").is_file());
    }

    #[test]
    fn save_overwrites_in_place() {
        let (_temp, store) = file_store();
        store.save_entry("Page", "old").expect("save");
        store.save_entry("Page", "new").expect("overwrite");
        let entry = store.get_entry("page").expect("get").expect("present");
        assert_eq!(entry.content, "new");
        assert_eq!(store.list_entries().expect("list").len(), 1);
    }

    #[test]
    fn list_skips_non_markdown_and_dotfiles() {
        let (temp, store) = file_store();
        store.save_entry("Visible", "x").expect("save");
        std::fs::write(temp.path().join("notes.txt"), "x").expect("txt");
        std::fs::write(temp.path().join(".hidden.md"), "x").expect("dotfile");
        std::fs::create_dir(temp.path().join("subdir")).expect("dir");

        assert_eq!(store.list_entries().expect("list"), vec!["Visible".to_string()]);
    }

    #[test]
    fn rejects_unsafe_titles() {
        let (_temp, store) = file_store();
        for bad in ["", "   ", "../escape", "a/b", ".hidden"] {
            assert!(
                matches!(store.save_entry(bad, "x"), Err(WikiError::InvalidTitle(_))),
                "title {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn listed_titles_always_have_content() {
        let (_temp, store) = file_store();
        store.save_entry("One", "1").expect("save");
        store.save_entry("Two", "2").expect("save");
        for title in store.list_entries().expect("list") {
            assert!(store.get_entry(&title).expect("get").is_some());
        }
    }

    #[test]
    fn memory_store_matches_file_store_semantics() {
        let store = MemoryStore::new();
        store.save_entry("Python", "# Hello").expect("save");
        let entry = store.get_entry("PYTHON").expect("get").expect("present");
        assert_eq!(entry.title, "Python");
        assert_eq!(entry.content, "# Hello");
        assert!(store.get_entry("absent").expect("get").is_none());
        assert!(matches!(
            store.save_entry("../nope", "x"),
            Err(WikiError::InvalidTitle(_))
        ));
    }
}
