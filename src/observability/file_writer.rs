//! Size-rotated append-only file for trace batches.
//!
//! Each exported batch is one JSON line. Once the active file grows past
//! [`RotationPolicy::max_bytes`] it is shifted to `<name>.1`, older backups
//! move up by one, and anything past [`RotationPolicy::max_backups`] is
//! deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many rotated files to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MiB per file, 3 backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe rotating line writer.
///
/// The file is opened lazily on the first write so construction never fails.
pub struct FileWriter {
    file_path: PathBuf,
    policy: RotationPolicy,
    handle: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            file_path,
            policy,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Fails when rotating, opening, writing or flushing fails, or when the
    /// lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if self.is_full() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *handle = Some(file);
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() >= self.policy.max_bytes)
    }

    /// Shifts `<name>.N` to `<name>.N+1`, dropping the oldest, then moves the
    /// active file to `<name>.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = backup_path(&self.file_path, self.policy.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for n in (1..self.policy.max_backups).rev() {
            let from = backup_path(&self.file_path, n);
            if from.exists() {
                fs::rename(&from, backup_path(&self.file_path, n + 1))?;
            }
        }

        fs::rename(&self.file_path, backup_path(&self.file_path, 1))
    }
}

/// Path of the `n`th backup: `weatherdash-otlp.json` → `weatherdash-otlp.json.n`.
pub fn backup_path(path: &Path, n: usize) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{n}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_policy() -> RotationPolicy {
        RotationPolicy {
            max_bytes: 16,
            max_backups: 2,
        }
    }

    #[test]
    fn appends_one_line_per_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone(), RotationPolicy::default());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_when_full_and_keeps_limited_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone(), small_policy());

        for i in 0..4 {
            writer.write_line(&format!("batch-{i}-0123456789")).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "batch-3-0123456789\n");
        assert_eq!(
            fs::read_to_string(backup_path(&path, 1)).unwrap(),
            "batch-2-0123456789\n"
        );
        assert_eq!(
            fs::read_to_string(backup_path(&path, 2)).unwrap(),
            "batch-1-0123456789\n"
        );
        assert!(!backup_path(&path, 3).exists());
    }

    #[test]
    fn backup_names_append_a_counter() {
        assert_eq!(
            backup_path(Path::new("/data/weatherdash-otlp.json"), 2),
            PathBuf::from("/data/weatherdash-otlp.json.2")
        );
    }
}
