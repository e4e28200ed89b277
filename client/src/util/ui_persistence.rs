//! Browser localStorage helpers for persisted UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so preference
//! adapters can persist JSON records without repeating web-sys glue. Outside
//! the browser every read misses and every write reports `Unavailable`.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::theme::StorageError;

/// Load a JSON value from `localStorage` for `key`.
///
/// Missing storage, a missing key, and an unparseable record all read as `None`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if `value` cannot be serialized,
/// [`StorageError::Unavailable`] if there is no `localStorage`, and
/// [`StorageError::Write`] if the browser rejects the write.
pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode(e.to_string()))?;
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, &raw)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, raw);
        Err(StorageError::Unavailable)
    }
}
