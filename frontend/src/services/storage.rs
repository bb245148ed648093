use anyhow::{Context, Result};
use gloo::storage::{errors::StorageError, LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

/// Read a JSON value from localStorage; a missing key is `Ok(None)`
pub fn load<T: DeserializeOwned>(key: &str) -> Result<Option<T>> {
    match LocalStorage::get::<T>(key) {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read '{}' from localStorage", key)),
    }
}

/// Write a value to localStorage as JSON
pub fn save<T: Serialize>(key: &str, value: &T) -> Result<()> {
    LocalStorage::set(key, value).with_context(|| format!("Failed to write '{}' to localStorage", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_save_then_load() {
        save("storage-test-budget", &250.5f64).unwrap();
        assert_eq!(load::<f64>("storage-test-budget").unwrap(), Some(250.5));
        LocalStorage::delete("storage-test-budget");
    }

    #[wasm_bindgen_test]
    fn test_missing_key() {
        assert_eq!(load::<f64>("storage-test-missing").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_corrupt_value_is_an_error() {
        LocalStorage::raw().set_item("storage-test-corrupt", "not json").unwrap();
        assert!(load::<Vec<shared::Expense>>("storage-test-corrupt").is_err());
        LocalStorage::delete("storage-test-corrupt");
    }
}
