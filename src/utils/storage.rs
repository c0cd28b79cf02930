use gloo_storage::{LocalStorage, Storage};
use thiserror::Error;

use crate::utils::constants::TOKEN_STORAGE_KEY;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// localStorage lleno, bloqueado o ausente
    #[error("No se pudo guardar '{key}' en localStorage")]
    Write { key: &'static str },
}

/// Almacén de la credencial bearer persistida
pub trait CredentialStore {
    fn get(&self) -> Option<String>;
    fn set(&self, credential: &str) -> Result<(), StorageError>;
    fn clear(&self);
}

/// localStorage del navegador; el token se guarda como texto plano bajo una clave fija
#[derive(Clone, Debug)]
pub struct LocalStorageCredentials {
    key: &'static str,
}

impl LocalStorageCredentials {
    pub fn new() -> Self {
        Self {
            key: TOKEN_STORAGE_KEY,
        }
    }
}

impl Default for LocalStorageCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for LocalStorageCredentials {
    fn get(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(self.key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, credential: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(self.key, credential)
            .map_err(|_| StorageError::Write { key: self.key })
    }

    fn clear(&self) {
        LocalStorage::delete(self.key);
    }
}

/// Almacén en memoria para tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryCredentials {
    value: std::cell::RefCell<Option<String>>,
    read_only: bool,
}

#[cfg(test)]
impl MemoryCredentials {
    pub fn with(token: &str) -> Self {
        Self {
            value: std::cell::RefCell::new(Some(token.to_string())),
            read_only: false,
        }
    }

    /// Rechaza toda escritura, como un localStorage bloqueado
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl CredentialStore for MemoryCredentials {
    fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn set(&self, credential: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write {
                key: TOKEN_STORAGE_KEY,
            });
        }
        *self.value.borrow_mut() = Some(credential.to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.value.borrow_mut() = None;
    }
}
