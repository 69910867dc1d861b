//! Capture entries and the metadata snapshot they carry.

use std::fs::Metadata;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a captured entry.
///
/// This is a binary split: anything that is not a regular file (directories,
/// sockets, devices, fifos) is reported as `Directory`. Use
/// [`EntryStats::is_dir`] to tell a real directory apart.
///
/// Serialized as the integer codes `1` (file) and `2` (directory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum FileType {
    File = 1,
    Directory = 2,
}

impl FileType {
    /// Classify an entry from its metadata snapshot.
    pub const fn classify(stats: &EntryStats) -> Self {
        if stats.is_file {
            Self::File
        } else {
            Self::Directory
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<FileType> for u8 {
    fn from(file_type: FileType) -> Self {
        file_type.code()
    }
}

/// An integer that is not a known [`FileType`] code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown file type code {0}")]
pub struct UnknownFileType(pub u8);

impl TryFrom<u8> for FileType {
    type Error = UnknownFileType;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::File),
            2 => Ok(Self::Directory),
            other => Err(UnknownFileType(other)),
        }
    }
}

/// Snapshot of the platform metadata for an entry, taken at probe time.
///
/// Timestamps are `None` where the platform does not report them. The
/// Unix-only identity fields are `None` elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryStats {
    /// Size in bytes.
    pub len: u64,
    pub is_file: bool,
    pub is_dir: bool,
    pub readonly: bool,
    pub modified: Option<DateTime<Utc>>,
    pub accessed: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
    pub mode: Option<u32>,
    pub uid: Option<u32>,
    pub gid: Option<u32>,
    pub ino: Option<u64>,
    pub dev: Option<u64>,
    pub nlink: Option<u64>,
}

impl EntryStats {
    /// Copy the fields callers care about out of `std::fs::Metadata`.
    pub fn from_metadata(meta: &Metadata) -> Self {
        #[allow(unused_mut)]
        let mut stats = Self {
            len: meta.len(),
            is_file: meta.is_file(),
            is_dir: meta.is_dir(),
            readonly: meta.permissions().readonly(),
            modified: meta.modified().ok().map(DateTime::<Utc>::from),
            accessed: meta.accessed().ok().map(DateTime::<Utc>::from),
            created: meta.created().ok().map(DateTime::<Utc>::from),
            ..Self::default()
        };

        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;

            stats.mode = Some(meta.mode());
            stats.uid = Some(meta.uid());
            stats.gid = Some(meta.gid());
            stats.ino = Some(meta.ino());
            stats.dev = Some(meta.dev());
            stats.nlink = Some(meta.nlink());
        }

        stats
    }
}

/// A candidate path that existed at probe time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureEntry {
    pub path: PathBuf,
    pub stats: EntryStats,
    #[serde(rename = "type")]
    pub file_type: FileType,
}

impl CaptureEntry {
    /// Build an entry, deriving its type from the snapshot.
    pub fn new(path: impl Into<PathBuf>, stats: EntryStats) -> Self {
        let file_type = FileType::classify(&stats);
        Self {
            path: path.into(),
            stats,
            file_type,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn is_file(&self) -> bool {
        matches!(self.file_type, FileType::File)
    }

    pub const fn is_dir(&self) -> bool {
        matches!(self.file_type, FileType::Directory)
    }
}
