use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tally_core::Order;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Order file not found: {0}")]
    NotFound(PathBuf),

    #[error("Malformed order record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read and deserialize a JSON record from disk.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StoreError::NotFound(path.to_path_buf())
        } else {
            StoreError::Io(e)
        }
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize a record and overwrite the file at `path`.
///
/// Output is pretty-printed with 2-space indentation.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let contents = serde_json::to_string_pretty(value)?;
    fs::write(path, contents)?;
    Ok(())
}

/// File-backed repository for the orders record.
///
/// One JSON document per file. Load and save are all-or-nothing; a failed
/// load never touches the file.
pub struct OrderStore {
    path: PathBuf,
}

impl OrderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Order, StoreError> {
        read_json(&self.path)
    }

    pub fn save(&self, order: &Order) -> Result<(), StoreError> {
        write_json(&self.path, order)?;
        info!(path = %self.path.display(), "order record written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::OrderEnricher;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = OrderStore::new(dir.path().join("absent.json"));
        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_load_malformed_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "orders.json", "{ not json");
        let err = OrderStore::new(path).load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "orders.json",
            r#"{
              "Order_ID": "ORD-1001",
              "Price_Tax_Percentise": 10,
              "Shipping_Cost": 5,
              "Discount_Amount": 2
            }"#,
        );

        let store = OrderStore::new(&path);
        let mut order = store.load().unwrap();
        OrderEnricher::new().enrich(&mut order).unwrap();
        store.save(&order).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.products.as_ref().unwrap().len(), 100);
        assert_eq!(reloaded.subtotal, Some(18050));
        assert_eq!(reloaded.total, Some(19858.0));
        assert_eq!(reloaded.extra.get("Order_ID").unwrap(), "ORD-1001");
    }

    #[test]
    fn test_seed_run_is_byte_stable() {
        let seed = r#"{"Price_Tax_Percentise": 10, "Shipping_Cost": 5, "Discount_Amount": 2}"#;
        let dir = tempfile::tempdir().unwrap();
        let path_a = write_fixture(&dir, "a.json", seed);
        let path_b = write_fixture(&dir, "b.json", seed);

        for path in [&path_a, &path_b] {
            let store = OrderStore::new(path);
            let mut order = store.load().unwrap();
            OrderEnricher::new().enrich(&mut order).unwrap();
            store.save(&order).unwrap();
        }

        assert_eq!(
            fs::read_to_string(&path_a).unwrap(),
            fs::read_to_string(&path_b).unwrap()
        );
    }
}
