//! # nightlamp-adapter-storage-json
//!
//! Durable schedule store backed by a single JSON record on disk:
//! `{"time_on": "HH:MM"|null, "time_off": "HH:MM"|null}`.
//!
//! ## Behaviour
//! - `load` treats a **missing file or malformed record** as the unset
//!   schedule — a recoverable, silent-default condition, never an error
//!   surfaced to callers. Genuine IO failures (permissions, device errors)
//!   do surface.
//! - `save` serializes to a sibling `.tmp` file and atomically renames it
//!   over the record, so a concurrent `load` sees either the old or the new
//!   record, never a torn one. An internal async mutex keeps concurrent
//!   saves from interleaving (last-write-wins).
//!
//! ## Dependency rule
//! Depends on `nightlamp-app` (port trait) and `nightlamp-domain` only.

use std::future::Future;
use std::path::{Path, PathBuf};

use nightlamp_app::ports::ScheduleRepository;
use nightlamp_domain::error::{NightlampError, StorageError};
use nightlamp_domain::schedule::Schedule;

/// File-backed [`ScheduleRepository`] holding the single latest schedule.
pub struct JsonScheduleRepository {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

impl JsonScheduleRepository {
    /// Create a repository persisting to `path`.
    ///
    /// The file is created on the first `save`; until then `load` returns
    /// the unset schedule.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// The path of the durable record.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl ScheduleRepository for JsonScheduleRepository {
    fn load(&self) -> impl Future<Output = Result<Schedule, NightlampError>> + Send {
        async move {
            let bytes = match tokio::fs::read(&self.path).await {
                Ok(bytes) => bytes,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    return Ok(Schedule::default());
                }
                Err(err) => return Err(StorageError::Io(err).into()),
            };

            match serde_json::from_slice(&bytes) {
                Ok(schedule) => Ok(schedule),
                Err(err) => {
                    tracing::debug!(
                        path = %self.path.display(),
                        error = %err,
                        "malformed schedule record, defaulting to unset"
                    );
                    Ok(Schedule::default())
                }
            }
        }
    }

    fn save(
        &self,
        schedule: Schedule,
    ) -> impl Future<Output = Result<(), NightlampError>> + Send {
        async move {
            let bytes = serde_json::to_vec(&schedule).map_err(StorageError::Encode)?;

            let _guard = self.write_lock.lock().await;
            let tmp = self.temp_path();
            tokio::fs::write(&tmp, &bytes)
                .await
                .map_err(StorageError::Io)?;
            tokio::fs::rename(&tmp, &self.path)
                .await
                .map_err(StorageError::Io)?;
            Ok(())
        }
    }
}
