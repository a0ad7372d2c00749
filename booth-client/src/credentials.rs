//! Admin credential store
//!
//! Persists the administrator's username/password pair and the UI language
//! flag in a client-local settings file. The pair is the sole admin
//! authentication mechanism: it is sent verbatim as a Basic header on every
//! admin call, with no session token, expiry, or refresh.
//!
//! Store operations are total over the storage medium's availability:
//! a missing, unreadable, or unwritable settings file degrades to the
//! empty pair rather than an error.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Admin username/password pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields present
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// `Authorization` header value: `Basic base64(username:password)`
    pub fn basic_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

/// UI language preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

/// Client-local persistent storage for the admin identity
///
/// Single source of truth for the admin pair: readable anywhere, written
/// only by login/logout. View-models receive a store rather than reaching
/// into ambient storage, so tests can substitute [`MemoryCredentialStore`].
pub trait CredentialStore: Send + Sync {
    /// Stored pair, or the empty pair when unset or the medium is unavailable
    fn read(&self) -> AdminCredentials;

    /// Overwrite any stored pair. No validation happens here; the session
    /// guard validates at login time.
    fn save(&self, creds: &AdminCredentials);

    /// Remove both fields. Idempotent.
    fn clear(&self);

    fn language(&self) -> Language;

    fn set_language(&self, language: Language);
}

/// Settings file shape: two credential fields plus the language flag,
/// no schema versioning
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    admin_user: String,
    #[serde(default)]
    admin_pass: String,
    #[serde(default)]
    language: Language,
}

/// File-backed credential store
///
/// Keeps a single `settings.json` under the supplied base directory.
pub struct FileCredentialStore {
    file_path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            file_path: base_dir.join("settings.json"),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn load_file(&self) -> SettingsFile {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Unreadable settings file, using defaults: {}", e);
                SettingsFile::default()
            }),
            Err(_) => SettingsFile::default(),
        }
    }

    fn write_file(&self, data: &SettingsFile) {
        if let Some(parent) = self.file_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create settings directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(data) {
            Ok(content) => {
                if let Err(e) = std::fs::write(&self.file_path, content) {
                    tracing::warn!("Failed to persist settings: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize settings: {}", e),
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn read(&self) -> AdminCredentials {
        let data = self.load_file();
        AdminCredentials {
            username: data.admin_user,
            password: data.admin_pass,
        }
    }

    fn save(&self, creds: &AdminCredentials) {
        let mut data = self.load_file();
        data.admin_user = creds.username.clone();
        data.admin_pass = creds.password.clone();
        self.write_file(&data);
        tracing::debug!(username = %creds.username, "Admin credentials saved");
    }

    fn clear(&self) {
        let mut data = self.load_file();
        data.admin_user.clear();
        data.admin_pass.clear();
        self.write_file(&data);
        tracing::debug!("Admin credentials cleared");
    }

    fn language(&self) -> Language {
        self.load_file().language
    }

    fn set_language(&self, language: Language) {
        let mut data = self.load_file();
        data.language = language;
        self.write_file(&data);
    }
}

/// In-memory credential store for tests and short-lived embeddings
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: RwLock<SettingsFile>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a credential pair
    pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        let store = Self::new();
        store.save(&AdminCredentials::new(username, password));
        store
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn read(&self) -> AdminCredentials {
        let data = self.inner.read().unwrap_or_else(|p| p.into_inner());
        AdminCredentials {
            username: data.admin_user.clone(),
            password: data.admin_pass.clone(),
        }
    }

    fn save(&self, creds: &AdminCredentials) {
        let mut data = self.inner.write().unwrap_or_else(|p| p.into_inner());
        data.admin_user = creds.username.clone();
        data.admin_pass = creds.password.clone();
    }

    fn clear(&self) {
        let mut data = self.inner.write().unwrap_or_else(|p| p.into_inner());
        data.admin_user.clear();
        data.admin_pass.clear();
    }

    fn language(&self) -> Language {
        self.inner.read().unwrap_or_else(|p| p.into_inner()).language
    }

    fn set_language(&self, language: Language) {
        self.inner.write().unwrap_or_else(|p| p.into_inner()).language = language;
    }
}
