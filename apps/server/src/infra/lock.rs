// Standard library imports
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

// External crate imports
use fs4::fs_std::FileExt;
use tracing::debug;

// Internal crate imports
use crate::error::AppError;

const RETRY_INTERVAL_MS: u64 = 25;
const DEFAULT_ACQUIRE_MS: u64 = 5000;

/// Deadline for acquiring the schema lock, overridable for operators whose
/// databases sit behind slower storage.
pub fn lock_timeout() -> Duration {
    let ms = std::env::var("EGON_MIGRATE_LOCK_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_ACQUIRE_MS);
    Duration::from_millis(ms)
}

/// Exclusive lock held for the duration of a schema upgrade.
///
/// The lock is scoped: it is acquired before the upgrade starts and released
/// when the guard is dropped, on every exit path including errors. File-backed
/// databases use an OS-level exclusive lock on `<db>.migrate.lock`; in-memory
/// databases are single-process and skip locking entirely.
pub struct SchemaLock {
    inner: Option<HeldLock>,
}

struct HeldLock {
    file: File,
    path: PathBuf,
}

impl SchemaLock {
    /// Acquire the lock for the given database URL, retrying until `deadline`
    /// elapses. Acquisition is non-blocking per attempt so a crashed holder
    /// cannot wedge us forever inside the OS call.
    pub async fn acquire(database_url: &str, deadline: Duration) -> Result<Self, AppError> {
        let Some(lock_path) = lock_path_for(database_url) else {
            return Ok(Self { inner: None });
        };

        let start = Instant::now();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;

            if let Some(held) = try_acquire_at(&lock_path)? {
                debug!(
                    lock_path = %held.path.display(),
                    attempts = attempts,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "schema lock acquired"
                );
                return Ok(Self { inner: Some(held) });
            }

            if start.elapsed() >= deadline {
                return Err(AppError::config(format!(
                    "schema lock acquisition timeout after {:?} ({} attempts); \
                     is another migration running?",
                    start.elapsed(),
                    attempts
                )));
            }

            tokio::time::sleep(Duration::from_millis(RETRY_INTERVAL_MS)).await;
        }
    }

    /// Whether a lock file is actually held (false for in-memory databases).
    pub fn is_held(&self) -> bool {
        self.inner.is_some()
    }
}

impl Drop for HeldLock {
    fn drop(&mut self) {
        match FileExt::unlock(&self.file) {
            Ok(()) => {
                debug!(lock_path = %self.path.display(), "schema lock released");
            }
            Err(e) => {
                // Unlock errors are usually benign (e.g., already unlocked);
                // the file handle is dropped right after anyway.
                debug!(
                    error = %e,
                    lock_path = %self.path.display(),
                    "schema lock unlock returned error (may be benign)"
                );
            }
        }
    }
}

fn try_acquire_at(lock_path: &Path) -> Result<Option<HeldLock>, AppError> {
    if let Some(parent) = lock_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config(format!("failed to create lock file parent directory: {e}"))
            })?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .read(true)
        .write(true)
        .open(lock_path)
        .map_err(|e| AppError::config(format!("failed to open lock file: {e}")))?;

    match file.try_lock_exclusive() {
        Ok(true) => Ok(Some(HeldLock {
            file,
            path: lock_path.to_path_buf(),
        })),
        Ok(false) => Ok(None),
        Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => Ok(None),
        Err(e) => Err(AppError::config(format!(
            "failed to acquire schema lock: {e}"
        ))),
    }
}

/// Derive the lock file path from the database URL.
///
/// Only file-backed SQLite databases need a lock file; in-memory databases
/// and server databases (which serialize DDL themselves) return None.
fn lock_path_for(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;

    if rest.is_empty() || rest.starts_with(":memory:") {
        return None;
    }

    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() {
        return None;
    }

    Some(PathBuf::from(format!("{path}.migrate.lock")))
}
