//! Filesystem store for saved documents.
//!
//! A flat directory of `.md` files. Saves are atomic: the document is
//! written to a temporary sibling and renamed into place, so a concurrent
//! list never observes a partial file. Concurrent saves of the same
//! filename are last-writer-wins.

use crate::error::{Error, Result};
use crate::model::{SavedThread, ThreadMeta};
use crate::render::parse_frontmatter;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Store for saved thread documents.
pub struct ThreadStore {
    dir: PathBuf,
}

impl ThreadStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created on the first save, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The store's directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a document under the given filename, atomically.
    pub fn save(&self, filename: &str, content: &str) -> Result<()> {
        validate_filename(filename)?;
        fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(filename);
        let tmp = self.dir.join(format!("{}.tmp", filename));
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &path)?;

        info!("saved {}", path.display());
        Ok(())
    }

    /// List every saved document, newest first.
    ///
    /// Front-matter is parsed best-effort; files without a header still
    /// appear with empty fields. A store directory that does not exist
    /// yet lists as empty.
    pub fn list(&self) -> Result<Vec<SavedThread>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut threads = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            let filename = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            let raw = match fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("skipping unreadable {}: {}", path.display(), e);
                    continue;
                }
            };
            let (fields, body) = parse_frontmatter(&raw);
            threads.push(SavedThread {
                filename,
                meta: ThreadMeta::from_fields(&fields),
                content: body.to_string(),
            });
        }

        // RFC 3339 timestamps sort lexicographically.
        threads.sort_by(|a, b| b.meta.saved_at.cmp(&a.meta.saved_at));
        Ok(threads)
    }

    /// Delete a saved document by filename.
    pub fn delete(&self, filename: &str) -> Result<()> {
        validate_filename(filename)?;
        let path = self.dir.join(filename);
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("deleted {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(Error::ThreadNotFound(filename.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Reject filenames that could escape the store directory.
fn validate_filename(filename: &str) -> Result<()> {
    let ok = filename.ends_with(".md")
        && !filename.contains("..")
        && !filename.contains('/')
        && !filename.contains('\\');
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidFilename(filename.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_filename() {
        assert!(validate_filename("2018-Oct-10_alice_123.md").is_ok());
        assert!(validate_filename("notes.txt").is_err());
        assert!(validate_filename("../escape.md").is_err());
        assert!(validate_filename("dir/file.md").is_err());
        assert!(validate_filename("dir\\file.md").is_err());
    }

    #[test]
    fn test_save_and_list() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ThreadStore::new(tmp.path());

        let doc = "---\nauthor: \"@alice\"\nsaved_at: \"2024-01-02T00:00:00Z\"\n---\n\nnewer\n";
        store.save("b.md", doc).unwrap();
        let doc = "---\nauthor: \"@bob\"\nsaved_at: \"2024-01-01T00:00:00Z\"\n---\n\nolder\n";
        store.save("a.md", doc).unwrap();

        let threads = store.list().unwrap();
        assert_eq!(threads.len(), 2);
        // Newest first.
        assert_eq!(threads[0].meta.author, "@alice");
        assert_eq!(threads[0].content, "newer\n");
        assert_eq!(threads[1].meta.author, "@bob");
    }

    #[test]
    fn test_list_missing_dir_is_empty() {
        let store = ThreadStore::new("/nonexistent/threadpocket-test");
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_ignores_non_markdown() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ThreadStore::new(tmp.path());
        fs::write(tmp.path().join("stray.txt"), "not markdown").unwrap();
        store.save("real.md", "body only, no frontmatter").unwrap();

        let threads = store.list().unwrap();
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].filename, "real.md");
        assert_eq!(threads[0].content, "body only, no frontmatter");
    }

    #[test]
    fn test_delete() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ThreadStore::new(tmp.path());
        store.save("doomed.md", "bye").unwrap();

        store.delete("doomed.md").unwrap();
        assert!(store.list().unwrap().is_empty());

        let err = store.delete("doomed.md").unwrap_err();
        assert!(matches!(err, Error::ThreadNotFound(_)));
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ThreadStore::new(tmp.path());
        store.save("x.md", "content").unwrap();

        let names: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["x.md"]);
    }
}
