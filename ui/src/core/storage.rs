//! Local persistence of the language preference.
//!
//! The browser build keeps the preference in `localStorage`; native builds
//! write a small JSON map into the platform config directory. When neither is
//! reachable an in-memory store keeps the page usable for the session.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use dioxus::logger::tracing::warn;
use thiserror::Error;

use super::language::{Language, PREFERENCE_KEY};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed preference file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// String key/value store holding user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Store handle shared through the Dioxus context.
#[derive(Clone)]
pub struct PreferenceHandle(pub Rc<dyn PreferenceStore>);

impl PreferenceHandle {
    pub fn platform_default() -> Self {
        Self(platform_store())
    }
}

/// Read the saved language, falling back to English when absent or unreadable.
pub fn load_language(store: &dyn PreferenceStore) -> Language {
    match store.get(PREFERENCE_KEY) {
        Ok(Some(code)) => Language::parse(&code).unwrap_or_else(|| {
            warn!("ignoring unrecognised stored language {code:?}");
            Language::default()
        }),
        Ok(None) => Language::default(),
        Err(err) => {
            warn!("could not read language preference: {err}");
            Language::default()
        }
    }
}

pub fn save_language(store: &dyn PreferenceStore, lang: Language) -> Result<(), StorageError> {
    store.set(PREFERENCE_KEY, lang.code())
}

/// In-memory store; used in tests and as the last-resort fallback.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsValue;

    use super::{PreferenceStore, StorageError};

    /// Browser `localStorage`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorage;

    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)
    }

    fn js_error(value: JsValue) -> StorageError {
        StorageError::Backend(format!("{value:?}"))
    }

    impl PreferenceStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            storage()?.get_item(key).map_err(js_error)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            storage()?.set_item(key, value).map_err(js_error)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    use super::{PreferenceStore, StorageError};

    const FILE_NAME: &str = "preferences.json";

    /// JSON map persisted at `<dir>/preferences.json`.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
            Self {
                path: dir.into().join(FILE_NAME),
            }
        }

        /// Store inside the per-user config directory, if the platform exposes one.
        pub fn for_user() -> Option<Self> {
            directories::ProjectDirs::from("be", "ItzMe", "portfolio")
                .map(|dirs| Self::in_dir(dirs.config_dir()))
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(raw) => Ok(serde_json::from_str(&raw)?),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(err) => Err(err.into()),
            }
        }
    }

    impl PreferenceStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.read_all()?.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = self.read_all().unwrap_or_default();
            entries.insert(key.to_string(), value.to_string());
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn platform_store() -> Rc<dyn PreferenceStore> {
    Rc::new(LocalStorage)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store() -> Rc<dyn PreferenceStore> {
    match FileStore::for_user() {
        Some(store) => Rc::new(store),
        None => {
            warn!("no config directory available; language preference will not persist");
            Rc::new(MemoryStore::default())
        }
    }
}
