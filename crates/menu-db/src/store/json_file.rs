//! # JSON File Store
//!
//! The products file: one JSON array, rewritten wholesale on every mutation.
//!
//! ## Write Path
//! ```text
//! write_all(products)
//!      │
//!      ▼
//! serialize (pretty, 2-space indent) ──► products.json.tmp
//!      │
//!      ▼
//! rename(products.json.tmp → products.json)
//!      │
//!      ▼
//! readers see either the old or the new array, never half of one
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use menu_core::Product;
use tokio::fs;
use tracing::debug;

use super::ProductStore;
use crate::error::{DbError, DbResult};

/// Product store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the file at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Path of the products file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the products file exists.
    ///
    /// Errors other than "not found" (permissions, symlink loops) are returned,
    /// not reported as a missing file.
    pub async fn exists(&self) -> DbResult<bool> {
        fs::try_exists(&self.path)
            .await
            .map_err(|e| DbError::io(&self.path, e))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "products.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ProductStore for JsonFileStore {
    /// Parses the whole file.
    ///
    /// A missing or blank file reads as an empty collection.
    async fn read_all(&self) -> DbResult<Vec<Product>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Products file missing, reading as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(DbError::io(&self.path, e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let products: Vec<Product> =
            serde_json::from_slice(&bytes).map_err(|e| DbError::malformed(&self.path, e))?;

        debug!(path = %self.path.display(), count = products.len(), "Read products file");
        Ok(products)
    }

    async fn write_all(&self, products: &[Product]) -> DbResult<()> {
        let mut bytes =
            serde_json::to_vec_pretty(products).map_err(|e| DbError::Serialize(e.to_string()))?;
        bytes.push(b'\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| DbError::io(parent, e))?;
            }
        }

        let temp = self.temp_path();
        fs::write(&temp, &bytes)
            .await
            .map_err(|e| DbError::io(&temp, e))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| DbError::io(&self.path, e))?;

        debug!(path = %self.path.display(), count = products.len(), "Wrote products file");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_file() -> PathBuf {
        std::env::temp_dir()
            .join(format!("menu-db-{}", Uuid::new_v4()))
            .join("products.json")
    }

    fn product(id: u64, name: &str, sku: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: 9.9,
            sku: sku.to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let store = JsonFileStore::new(temp_file());
        assert!(!store.exists().await.unwrap());
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let path = temp_file();
        let store = JsonFileStore::new(&path);
        let products = vec![product(1, "Pastel", "pastel"), product(2, "Coxinha", "coxinha")];

        store.write_all(&products).await.unwrap();

        assert!(store.exists().await.unwrap());
        assert!(!store.temp_path().exists());
        assert_eq!(store.read_all().await.unwrap(), products);
    }

    #[tokio::test]
    async fn test_rewrite_of_read_is_noop() {
        let path = temp_file();
        let store = JsonFileStore::new(&path);
        store
            .write_all(&[product(3, "Esfiha", "esfiha"), product(5, "Kibe", "kibe")])
            .await
            .unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let products = store.read_all().await.unwrap();
        store.write_all(&products).await.unwrap();

        let after = std::fs::read_to_string(&path).unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_reads_hand_written_file() {
        let path = temp_file();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            r#"[{"id":1,"name":"Pão de Queijo","price":4,"sku":"PQ-01"}]"#,
        )
        .unwrap();

        let products = JsonFileStore::new(&path).read_all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].description, "");
    }

    #[tokio::test]
    async fn test_malformed_file_is_storage_error() {
        let path = temp_file();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).read_all().await.unwrap_err();
        assert!(matches!(err, DbError::Malformed { .. }));
        assert!(err.is_storage());
    }

    #[tokio::test]
    async fn test_blank_file_reads_empty() {
        let path = temp_file();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "\n").unwrap();

        assert!(JsonFileStore::new(&path).read_all().await.unwrap().is_empty());
    }
}
