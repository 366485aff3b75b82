use crate::content::Category;
use crate::storage::StorageError;
use std::path::{Path, PathBuf};
use url::Url;

/// Writes classified content to deterministic paths under a root directory
///
/// The three category subdirectories are created once at construction and
/// idempotently thereafter. Storing the same address twice overwrites the
/// file: re-crawling an unchanged URL is a no-op in effect. No manifest or
/// index file is produced.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a new FileStore rooted at `root`, creating the root and the
    /// category subdirectories if needed
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();

        for category in Category::all() {
            let dir = root.join(category.subdir());
            std::fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(Self { root })
    }

    /// Root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `bytes` for `address` under the category's subdirectory,
    /// truncating any existing file, and returns the destination path
    pub fn store(
        &self,
        category: Category,
        address: &Url,
        bytes: &[u8],
    ) -> Result<PathBuf, StorageError> {
        let filename = derive_filename(address.path(), category);
        let path = self.root.join(category.subdir()).join(filename);

        std::fs::write(&path, bytes).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

/// Derives a flat filename from an address path
///
/// Every path separator becomes an underscore, anything from the first '?'
/// onward is dropped, an empty or bare-underscore result becomes "index",
/// and the category extension is appended if not already present.
///
/// `Url::path()` never carries a query string, but the '?' cut is kept so
/// the derivation holds for any raw path handed to it.
pub fn derive_filename(path: &str, category: Category) -> String {
    let mut filename = path
        .split('?')
        .next()
        .unwrap_or("")
        .replace('/', "_");

    if filename.is_empty() || filename == "_" {
        filename = "index".to_string();
    }

    if !filename.ends_with(category.extension()) {
        filename.push_str(category.extension());
    }

    filename
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn address(path: &str) -> Url {
        Url::parse(&format!("http://example.com{}", path)).unwrap()
    }

    #[test]
    fn test_root_path_becomes_index() {
        assert_eq!(derive_filename("/", Category::Generic), "index.html");
    }

    #[test]
    fn test_empty_path_becomes_index() {
        assert_eq!(derive_filename("", Category::Generic), "index.html");
    }

    #[test]
    fn test_separators_replaced_extension_kept() {
        assert_eq!(derive_filename("/a/b.js", Category::Script), "_a_b.js");
    }

    #[test]
    fn test_extension_appended_when_missing() {
        assert_eq!(derive_filename("/about", Category::Generic), "_about.html");
        assert_eq!(derive_filename("/x.php", Category::ServerMarkup), "_x.php");
    }

    #[test]
    fn test_query_string_dropped() {
        assert_eq!(
            derive_filename("/page?id=3", Category::Generic),
            "_page.html"
        );
    }

    #[test]
    fn test_new_creates_category_subdirs() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        for category in Category::all() {
            assert!(store.root().join(category.subdir()).is_dir());
        }
    }

    #[test]
    fn test_new_is_idempotent() {
        let dir = TempDir::new().unwrap();
        FileStore::new(dir.path()).unwrap();
        // Second construction over the same tree must not fail
        assert!(FileStore::new(dir.path()).is_ok());
    }

    #[test]
    fn test_store_writes_bytes() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        let path = store
            .store(Category::Generic, &address("/"), b"<html></html>")
            .unwrap();

        assert_eq!(path, dir.path().join("other").join("index.html"));
        assert_eq!(std::fs::read(&path).unwrap(), b"<html></html>");
    }

    #[test]
    fn test_store_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        let url = address("/page");

        let first = store.store(Category::Generic, &url, b"old").unwrap();
        let second = store.store(Category::Generic, &url, b"new").unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second).unwrap(), b"new");
    }

    #[test]
    fn test_store_error_is_reported() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        // Remove the subdirectory so the write fails
        std::fs::remove_dir_all(dir.path().join("javascript")).unwrap();

        let result = store.store(Category::Script, &address("/a.js"), b"x");
        assert!(matches!(result, Err(StorageError::Write { .. })));
    }
}
