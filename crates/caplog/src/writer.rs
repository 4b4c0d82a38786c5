//! Size-capped append-only log files.
//!
//! [`LogFile`] is the write path of the crate: it appends one formatted
//! line per call and keeps the file's size bounded by rotating it in place
//! when it outgrows its cap. Rotation truncates the file and writes back
//! only the most recent tail of its content plus a marker line; there is
//! never a second file to clean up.

use crate::error::{LogError, LogResult};
use crate::line;
use crate::severity::Severity;
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Message of the marker line written after each rotation.
pub const ROTATION_MESSAGE: &str = "Log rotate.";

/// A log file with a size cap.
///
/// Holds only the path and the cap, no file handle and no cached size.
/// Every [`append`](Self::append) stats the file fresh, so concurrent
/// writers in other threads or other processes are always observed.
///
/// # Locking
///
/// Appends take an exclusive advisory lock for the duration of the write,
/// so every line lands whole, never interleaved with another writer's
/// bytes. Rotation holds the same lock across its whole
/// read-truncate-rewrite pass. Lock acquisition blocks without timeout.
///
/// # Example
///
/// ```no_run
/// use caplog::LogFile;
///
/// let log = LogFile::new("users/alice/log.txt", 1_048_576);
/// log.append("[Thu, 21 Dec 2023 16:01:07 +0200] [error] --- boom\n")?;
/// # Ok::<(), caplog::LogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
    max_size: u64,
}

impl LogFile {
    /// Creates a handle for the log file at `path` with the given size cap.
    ///
    /// A `max_size` of `0` disables rotation entirely. No I/O happens here;
    /// the file is created on first append if its directory exists.
    pub fn new(path: impl Into<PathBuf>, max_size: u64) -> Self {
        Self {
            path: path.into(),
            max_size,
        }
    }

    /// Returns the path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the size cap in bytes, `0` meaning rotation is disabled.
    #[must_use]
    pub const fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Returns the current size of the log file in bytes.
    ///
    /// A missing or unreadable file counts as empty; no log yet is the
    /// normal first-run state. The result is never cached between calls.
    #[must_use]
    pub fn current_size(&self) -> u64 {
        fs::metadata(&self.path).map(|meta| meta.len()).unwrap_or(0)
    }

    /// Appends one line, rotating the file first if it exceeds the cap.
    ///
    /// The size check runs before the append, so a single call can leave
    /// the file slightly over the cap; the next call rotates it back down.
    /// Immediately after this returns, the file is no larger than
    /// `max_size` plus the appended line (plus the rotation marker when a
    /// rotation happened in the same call).
    ///
    /// # Errors
    ///
    /// Returns [`LogError::PermissionDenied`] with this file's path if the
    /// file cannot be opened, locked, truncated, or written, including a
    /// missing parent directory and disk exhaustion. Failures are not
    /// retried.
    pub fn append(&self, line: &str) -> LogResult<()> {
        if self.max_size > 0 && self.current_size() > self.max_size {
            self.rotate()?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.denied(e))?;

        let _lock = ExclusiveLock::acquire(&file).map_err(|e| self.denied(e))?;
        (&file)
            .write_all(line.as_bytes())
            .map_err(|e| self.denied(e))
    }

    /// Shrinks the file to the most recent tail of its content.
    ///
    /// The retained window starts `max_size / 2` bytes before the end and
    /// reads up to `max_size` bytes, keeping about half the budget's worth
    /// of the newest lines. The window is a byte offset, so the oldest
    /// retained line may be cut mid-line.
    fn rotate(&self) -> LogResult<()> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| self.denied(e))?;

        let _lock = ExclusiveLock::acquire(&file).map_err(|e| self.denied(e))?;

        // Re-check under the lock: another writer may have rotated while we
        // waited, and seeking from a now-short end would rotate twice.
        let size = file.metadata().map_err(|e| self.denied(e))?.len();
        if size <= self.max_size {
            tracing::trace!(
                path = %self.path.display(),
                "log file already rotated by a concurrent writer"
            );
            return Ok(());
        }

        let keep_from_end = i64::try_from(self.max_size / 2).unwrap_or(i64::MAX);
        (&file)
            .seek(SeekFrom::End(-keep_from_end))
            .map_err(|e| self.denied(e))?;

        let mut tail = Vec::new();
        (&file)
            .take(self.max_size)
            .read_to_end(&mut tail)
            .map_err(|e| self.denied(e))?;

        (&file)
            .seek(SeekFrom::Start(0))
            .map_err(|e| self.denied(e))?;
        file.set_len(0).map_err(|e| self.denied(e))?;

        let marker = line::format_line(Severity::Notice.label(), ROTATION_MESSAGE);
        (&file).write_all(&tail).map_err(|e| self.denied(e))?;
        (&file)
            .write_all(marker.as_bytes())
            .map_err(|e| self.denied(e))?;
        (&file).flush().map_err(|e| self.denied(e))?;

        tracing::debug!(
            path = %self.path.display(),
            size,
            retained = tail.len(),
            "rotated oversized log file"
        );
        Ok(())
    }

    fn denied(&self, source: io::Error) -> LogError {
        LogError::permission_denied(&self.path, source)
    }
}

/// Exclusive advisory lock on an open file, released on drop.
struct ExclusiveLock<'a> {
    file: &'a File,
}

impl<'a> ExclusiveLock<'a> {
    /// Blocks until the exclusive lock is acquired.
    fn acquire(file: &'a File) -> io::Result<Self> {
        file.lock_exclusive()?;
        Ok(Self { file })
    }
}

impl Drop for ExclusiveLock<'_> {
    fn drop(&mut self) {
        // The lock also dies with the file handle itself.
        let _ = fs2::FileExt::unlock(self.file);
    }
}
