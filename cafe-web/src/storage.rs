//! Cart snapshot persistence over the browser's `localStorage`.
use cafe_cart::SnapshotStorage;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage rejected {key}: {message}")]
    Rejected { key: String, message: String },
}

/// [`SnapshotStorage`] backed by `window.localStorage`.
///
/// Outside the browser there is no medium: reads find nothing and writes fail
/// with [`BrowserStorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// Delete the entry under `key`.
    ///
    /// # Errors
    /// Returns an error if `localStorage` is unavailable or refuses the removal.
    pub fn remove(&self, key: &str) -> Result<(), BrowserStorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            handle()?
                .remove_item(key)
                .map_err(|err| rejected(key, &err))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Err(not_in_browser())
        }
    }
}

impl SnapshotStorage for BrowserStorage {
    type Error = BrowserStorageError;

    fn read_snapshot(&self, key: &str) -> Result<Option<String>, Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            handle()?.get_item(key).map_err(|err| rejected(key, &err))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write_snapshot(&self, key: &str, snapshot: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            let result = handle()?
                .set_item(key, snapshot)
                .map_err(|err| rejected(key, &err));
            if let Err(err) = &result {
                crate::dom::console_error(&err.to_string());
            }
            result
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, snapshot);
            Err(not_in_browser())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn handle() -> Result<web_sys::Storage, BrowserStorageError> {
    crate::dom::local_storage()
        .map_err(|err| BrowserStorageError::Unavailable(crate::dom::js_error_message(&err)))
}

#[cfg(target_arch = "wasm32")]
fn rejected(key: &str, err: &wasm_bindgen::JsValue) -> BrowserStorageError {
    BrowserStorageError::Rejected {
        key: key.to_string(),
        message: crate::dom::js_error_message(err),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn not_in_browser() -> BrowserStorageError {
    BrowserStorageError::Unavailable("not running in a browser".to_string())
}
