// Live settings store
// Readers take an Arc snapshot; reloads build a new config and swap it in whole

use std::collections::hash_map::DefaultHasher;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info};

use crate::error::ConfigError;
use crate::models::achievement::ImmersionConfig;
use crate::utils::loader;

/// Identity of a settings file revision.
/// Content is compared too, since mtimes can repeat across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    modified: Option<SystemTime>,
    len: usize,
    hash: u64,
}

struct SettingsSource {
    content: String,
    fingerprint: Fingerprint,
}

struct StoreState {
    config: Arc<ImmersionConfig>,
    loaded_at: DateTime<Utc>,
    fingerprint: Fingerprint,
}

/// Holds the active settings snapshot for a settings file
pub struct ConfigStore {
    path: PathBuf,
    state: RwLock<StoreState>,
    /// Serializes reloads so an older read never replaces a newer one
    reload_lock: Mutex<()>,
}

impl ConfigStore {
    /// Load the settings file. Fails if the document is invalid.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let source = read_source(&path).await?;
        let config = loader::from_yaml_str(&source.content)?;

        info!("Loaded immersion settings from {}", path.display());

        Ok(Self {
            path,
            state: RwLock::new(StoreState {
                config: Arc::new(config),
                loaded_at: Utc::now(),
                fingerprint: source.fingerprint,
            }),
            reload_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current snapshot. Stays valid across later reloads.
    pub async fn current(&self) -> Arc<ImmersionConfig> {
        self.state.read().await.config.clone()
    }

    pub async fn loaded_at(&self) -> DateTime<Utc> {
        self.state.read().await.loaded_at
    }

    /// Re-read the settings file and swap it in.
    /// On failure the previous snapshot stays active.
    pub async fn reload(&self) -> Result<Arc<ImmersionConfig>, ConfigError> {
        let _guard = self.reload_lock.lock().await;
        let source = self.read_logged().await?;
        self.install(source).await
    }

    /// Reload only if the file's mtime or content moved.
    /// Returns whether a new snapshot was installed.
    pub async fn reload_if_changed(&self) -> Result<bool, ConfigError> {
        let _guard = self.reload_lock.lock().await;
        let source = self.read_logged().await?;

        if source.fingerprint == self.state.read().await.fingerprint {
            return Ok(false);
        }

        self.install(source).await?;
        Ok(true)
    }

    /// Poll the settings file until `shutdown` resolves.
    /// Invalid edits are logged and skipped; the last good snapshot is kept.
    pub async fn watch(&self, interval: Duration, shutdown: impl Future<Output = ()>) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    debug!("Stopped watching {}", self.path.display());
                    break;
                }
                _ = ticker.tick() => {
                    // Failures are already logged
                    let _ = self.reload_if_changed().await;
                }
            }
        }
    }

    async fn read_logged(&self) -> Result<SettingsSource, ConfigError> {
        read_source(&self.path).await.map_err(|e| {
            error!("Failed to reload {}: {}", self.path.display(), e);
            e
        })
    }

    /// Parse and swap in a source. Caller holds `reload_lock`.
    async fn install(&self, source: SettingsSource) -> Result<Arc<ImmersionConfig>, ConfigError> {
        let config = match loader::from_yaml_str(&source.content) {
            Ok(config) => Arc::new(config),
            Err(e) => {
                error!("Failed to reload {}: {}", self.path.display(), e);
                return Err(e);
            }
        };

        {
            let mut state = self.state.write().await;
            state.config = config.clone();
            state.loaded_at = Utc::now();
            state.fingerprint = source.fingerprint;
        }

        info!("Reloaded immersion settings from {}", self.path.display());
        Ok(config)
    }
}

/// Read a settings file. The mtime is taken before the content so an edit
/// landing in between is seen again on the next poll.
async fn read_source(path: &Path) -> Result<SettingsSource, ConfigError> {
    let modified = tokio::fs::metadata(path)
        .await
        .and_then(|meta| meta.modified())
        .ok();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);

    Ok(SettingsSource {
        fingerprint: Fingerprint {
            modified,
            len: content.len(),
            hash: hasher.finish(),
        },
        content,
    })
}
