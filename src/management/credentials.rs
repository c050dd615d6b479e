use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{Error, Res, types::CredentialRecord};

const APP_DIR: &str = "inoreader-cli";
const FILE_NAME: &str = "credentials.json";

/// Owner of the credential file.
///
/// Holds the path only; every `load` reads the file fresh and every `save`
/// replaces it in full.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CredentialStore { path: path.into() }
    }

    /// Store at the per-platform default location, see [`resolve_path`].
    pub fn default_location() -> Res<Self> {
        resolve_path().map(Self::new).ok_or(Error::NoHomeDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and validates the credential file.
    ///
    /// Token fields may be empty on first run, the application credentials
    /// may not.
    pub async fn load(&self) -> Res<CredentialRecord> {
        if let Err(e) = async_fs::metadata(&self.path).await {
            if e.kind() == io::ErrorKind::NotFound {
                return Err(Error::ConfigMissing(self.path.clone()));
            }
        }

        let content =
            async_fs::read_to_string(&self.path)
                .await
                .map_err(|source| Error::ConfigUnreadable {
                    path: self.path.clone(),
                    source,
                })?;

        let record: CredentialRecord =
            serde_json::from_str(&content).map_err(|source| Error::ConfigMalformed {
                path: self.path.clone(),
                source,
            })?;

        let fields = record.missing_fields();
        if !fields.is_empty() {
            return Err(Error::ConfigIncomplete {
                path: self.path.clone(),
                fields,
            });
        }

        Ok(record)
    }

    /// Writes the full record with owner-only permissions.
    ///
    /// Content goes to a sibling temp file that is created owner-only, then
    /// renamed over the target, so readers see either the old file or the
    /// new one.
    pub async fn save(&self, record: &CredentialRecord) -> Res<()> {
        let json = serde_json::to_string_pretty(record).map_err(|e| self.write_error(e.into()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(e))?;
        }

        let tmp = self.temp_path();
        let written = write_private(&tmp, json.as_bytes()).await;
        let renamed = match written {
            Ok(()) => async_fs::rename(&tmp, &self.path).await,
            Err(e) => Err(e),
        };

        if let Err(e) = renamed {
            let _ = async_fs::remove_file(&tmp).await;
            return Err(self.write_error(e));
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: io::Error) -> Error {
        Error::ConfigWriteError {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(unix)]
async fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    use tokio::io::AsyncWriteExt;

    // A leftover temp file would keep its old mode, so start from scratch.
    match async_fs::remove_file(path).await {
        Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
        _ => {}
    }

    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)
        .await?;
    file.write_all(contents).await?;
    file.sync_all().await
}

#[cfg(not(unix))]
async fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    async_fs::write(path, contents).await
}

/// Default credential file location for the running platform.
pub fn resolve_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| credential_path_for(std::env::consts::OS, &home))
}

/// Credential file location for `os` (as in [`std::env::consts::OS`]) and a
/// home directory.
pub fn credential_path_for(os: &str, home: &Path) -> PathBuf {
    let base = match os {
        "windows" => home.join("AppData").join("Roaming"),
        "macos" => home.join("Library").join("Application Support"),
        _ => home.join(".local").join("share"),
    };
    base.join(APP_DIR).join(FILE_NAME)
}
