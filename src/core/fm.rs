//! Directory listing logic for dirnav.
//!
//! Provides the [FileEntry] and [Listing] structs used throughout dirnav, the
//! [FileSystem] seam every filesystem read goes through, and [load_dir], which turns a
//! directory path into a sorted listing.

use crate::core::error::FmError;
use crate::core::formatter::sort_entries;

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Point-in-time metadata of a single path, queried without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    pub is_dir: bool,
    pub is_symlink: bool,
    pub size: u64,
    pub modified: SystemTime,
}

impl EntryMeta {
    /// Stand-in for an entry whose metadata query failed.
    pub fn placeholder() -> Self {
        EntryMeta {
            is_dir: false,
            is_symlink: false,
            size: 0,
            modified: SystemTime::UNIX_EPOCH,
        }
    }
}

/// Every filesystem read dirnav performs.
///
/// [RealFs] is the production implementation; tests substitute in-memory fakes.
pub trait FileSystem {
    /// Names of the immediate children of `path`, in directory order.
    /// Includes the `.` and `..` self/parent references when the platform reports them.
    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Metadata of `path` without dereferencing a trailing symlink.
    fn symlink_metadata(&self, path: &Path) -> io::Result<EntryMeta>;

    /// Absolute, normalized form of `path` (`..` components resolved).
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Up to `limit` bytes from the start of the file at `path`.
    fn read_prefix(&self, path: &Path, limit: usize) -> io::Result<Vec<u8>>;
}

/// [FileSystem] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<OsString>> {
        // std::fs::read_dir hides the dot entries, readdir(3) does not
        let mut names = vec![OsString::from("."), OsString::from("..")];
        for entry in fs::read_dir(path)? {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => continue,
            };
            names.push(entry.file_name());
        }
        Ok(names)
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<EntryMeta> {
        let md = fs::symlink_metadata(path)?;
        Ok(EntryMeta {
            is_dir: md.is_dir(),
            is_symlink: md.file_type().is_symlink(),
            size: md.len(),
            modified: md.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        })
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn read_prefix(&self, path: &Path, limit: usize) -> io::Result<Vec<u8>> {
        // opening a FIFO blocks until a writer shows up
        if !fs::metadata(path)?.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            ));
        }
        let file = fs::File::open(path)?;
        let mut buf = Vec::with_capacity(limit.min(64 * 1024));
        file.take(limit as u64).read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// A single child of the listed directory.
///
/// Rebuilt on every load; nothing about an entry survives a reload.
#[derive(Debug, Clone)]
pub struct FileEntry {
    name: Box<OsStr>,
    lowercase_name: Box<str>,
    flags: u8,
    size: u64,
    modified: SystemTime,
}

impl FileEntry {
    pub(crate) const IS_DIR: u8 = 1 << 0;
    pub(crate) const IS_SYMLINK: u8 = 1 << 1;

    pub fn new(name: OsString, meta: EntryMeta) -> Self {
        let mut flags = 0u8;
        if meta.is_dir {
            flags |= Self::IS_DIR;
        }
        if meta.is_symlink {
            flags |= Self::IS_SYMLINK;
        }
        let lowercase_name = name.to_string_lossy().to_lowercase().into_boxed_str();
        FileEntry {
            name: name.into_boxed_os_str(),
            lowercase_name,
            flags,
            size: if meta.is_dir { 0 } else { meta.size },
            modified: meta.modified,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn lowercase_name(&self) -> &str {
        &self.lowercase_name
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.flags & Self::IS_SYMLINK != 0
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn modified(&self) -> SystemTime {
        self.modified
    }
}

/// Sorted, materialized set of entries for one directory at one point in time.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    path: PathBuf,
    entries: Vec<FileEntry>,
}

impl Listing {
    /// An empty listing for `path`, used before the first successful load.
    pub fn empty(path: PathBuf) -> Self {
        Listing {
            path,
            entries: Vec::new(),
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&FileEntry> {
        self.entries.get(idx)
    }
}

/// Reads the immediate children of `path` and returns them as a sorted [Listing].
///
/// Only the `.` self-reference is dropped; `..` stays as a normal entry. A child whose
/// metadata cannot be read is kept as a plain zero-sized file dated at the epoch.
pub fn load_dir<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<Listing, FmError> {
    let names = fs
        .read_dir_names(path)
        .map_err(|e| FmError::from_io(path, e))?;

    let mut entries = Vec::with_capacity(names.len());
    for name in names {
        if name == "." {
            continue;
        }
        let meta = match fs.symlink_metadata(&path.join(&name)) {
            Ok(meta) => meta,
            Err(e) => {
                tracing::debug!(name = %name.to_string_lossy(), error = %e, "metadata query failed");
                EntryMeta::placeholder()
            }
        };
        entries.push(FileEntry::new(name, meta));
    }

    sort_entries(&mut entries);
    tracing::debug!(path = %path.display(), count = entries.len(), "directory loaded");

    Ok(Listing {
        path: path.to_path_buf(),
        entries,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs::File;
    use std::io::Write;
    use std::path::Component;
    use std::time::Duration;
    use tempfile::TempDir;

    /// In-memory filesystem used by the unit tests.
    #[derive(Default)]
    pub(crate) struct MemFs {
        dirs: HashMap<PathBuf, Vec<OsString>>,
        meta: HashMap<PathBuf, EntryMeta>,
        files: HashMap<PathBuf, Vec<u8>>,
    }

    impl MemFs {
        pub(crate) fn dir(&mut self, path: &str) -> &mut Self {
            self.dir_with(path, vec![".".into(), "..".into()])
        }

        /// A directory whose stream reports no dot entries at all.
        pub(crate) fn bare_dir(&mut self, path: &str) -> &mut Self {
            self.dir_with(path, Vec::new())
        }

        fn dir_with(&mut self, path: &str, initial: Vec<OsString>) -> &mut Self {
            let path = PathBuf::from(path);
            self.dirs.entry(path.clone()).or_insert(initial);
            self.meta.insert(
                path.clone(),
                EntryMeta {
                    is_dir: true,
                    size: 4096,
                    ..EntryMeta::placeholder()
                },
            );
            self.link_into_parent(&path);
            self
        }

        pub(crate) fn file(&mut self, path: &str, content: &[u8]) -> &mut Self {
            let path = PathBuf::from(path);
            self.meta.insert(
                path.clone(),
                EntryMeta {
                    size: content.len() as u64,
                    modified: SystemTime::UNIX_EPOCH + Duration::from_secs(1_000),
                    ..EntryMeta::placeholder()
                },
            );
            self.files.insert(path.clone(), content.to_vec());
            self.link_into_parent(&path);
            self
        }

        /// A name that shows up in the directory stream but has no metadata.
        pub(crate) fn ghost(&mut self, path: &str) -> &mut Self {
            self.link_into_parent(Path::new(path));
            self
        }

        fn link_into_parent(&mut self, path: &Path) {
            if let (Some(parent), Some(name)) = (path.parent(), path.file_name())
                && let Some(children) = self.dirs.get_mut(parent)
                && !children.iter().any(|c| c == name)
            {
                children.push(name.to_os_string());
            }
        }

        fn normalize(path: &Path) -> PathBuf {
            let mut out = PathBuf::from("/");
            for comp in path.components() {
                match comp {
                    Component::ParentDir => {
                        out.pop();
                    }
                    Component::Normal(n) => out.push(n),
                    _ => {}
                }
            }
            out
        }
    }

    impl FileSystem for MemFs {
        fn read_dir_names(&self, path: &Path) -> io::Result<Vec<OsString>> {
            let path = Self::normalize(path);
            if let Some(children) = self.dirs.get(&path) {
                return Ok(children.clone());
            }
            if self.files.contains_key(&path) {
                return Err(io::Error::from(io::ErrorKind::NotADirectory));
            }
            Err(io::Error::from(io::ErrorKind::NotFound))
        }

        fn symlink_metadata(&self, path: &Path) -> io::Result<EntryMeta> {
            self.meta
                .get(&Self::normalize(path))
                .copied()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
            let norm = Self::normalize(path);
            if self.meta.contains_key(&norm) || norm == Path::new("/") {
                Ok(norm)
            } else {
                Err(io::Error::from(io::ErrorKind::NotFound))
            }
        }

        fn read_prefix(&self, path: &Path, limit: usize) -> io::Result<Vec<u8>> {
            let bytes = self
                .files
                .get(&Self::normalize(path))
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
            Ok(bytes[..bytes.len().min(limit)].to_vec())
        }
    }

    fn names(listing: &Listing) -> Vec<String> {
        listing
            .entries()
            .iter()
            .map(|e| e.name_str().into_owned())
            .collect()
    }

    #[test]
    fn load_keeps_parent_and_drops_self() -> Result<(), Box<dyn std::error::Error>> {
        let mut fs = MemFs::default();
        fs.dir("/").dir("/a").file("/a/b.txt", b"0123456789").dir("/a/A");

        let listing = load_dir(&fs, Path::new("/a"))?;
        assert_eq!(names(&listing), vec!["..", "A", "b.txt"]);
        assert!(listing.entries()[0].is_dir());
        assert!(listing.entries()[1].is_dir());
        assert_eq!(listing.entries()[2].size(), 10);
        Ok(())
    }

    #[test]
    fn directory_size_is_zero() -> Result<(), Box<dyn std::error::Error>> {
        let mut fs = MemFs::default();
        fs.dir("/").dir("/d").dir("/d/sub");

        let listing = load_dir(&fs, Path::new("/d"))?;
        let sub = listing
            .entries()
            .iter()
            .find(|e| e.name() == "sub")
            .ok_or("sub missing")?;
        assert_eq!(sub.size(), 0);
        Ok(())
    }

    #[test]
    fn metadata_failure_degrades_to_placeholder() -> Result<(), Box<dyn std::error::Error>> {
        let mut fs = MemFs::default();
        fs.dir("/").dir("/x").ghost("/x/vanished").file("/x/ok", b"hi");

        let listing = load_dir(&fs, Path::new("/x"))?;
        let ghost = listing
            .entries()
            .iter()
            .find(|e| e.name() == "vanished")
            .ok_or("placeholder entry missing")?;
        assert!(!ghost.is_dir());
        assert_eq!(ghost.size(), 0);
        assert_eq!(ghost.modified(), SystemTime::UNIX_EPOCH);
        assert_eq!(listing.len(), 3);
        Ok(())
    }

    #[test]
    fn load_errors_are_classified() {
        let mut fs = MemFs::default();
        fs.dir("/").file("/plain", b"x");

        assert!(matches!(
            load_dir(&fs, Path::new("/missing")),
            Err(FmError::NotFound(_))
        ));
        assert!(matches!(
            load_dir(&fs, Path::new("/plain")),
            Err(FmError::NotADirectory(_))
        ));
    }

    #[test]
    fn real_fs_lists_parent_reference() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let mut file = File::create(tmp.path().join("hello.txt"))?;
        writeln!(file, "abc123")?;
        fs::create_dir(tmp.path().join("sub"))?;

        let listing = load_dir(&RealFs, tmp.path())?;
        assert_eq!(names(&listing), vec!["..", "sub", "hello.txt"]);
        assert_eq!(listing.entries()[2].size(), 7);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn real_fs_does_not_follow_symlinks() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("target"))?;
        std::os::unix::fs::symlink(tmp.path().join("target"), tmp.path().join("link"))?;

        let listing = load_dir(&RealFs, tmp.path())?;
        let link = listing
            .entries()
            .iter()
            .find(|e| e.name() == "link")
            .ok_or("link missing")?;
        assert!(link.is_symlink());
        assert!(!link.is_dir());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn real_fs_refuses_to_open_fifo() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let fifo = tmp.path().join("pipe");
        let status = std::process::Command::new("mkfifo").arg(&fifo).status()?;
        assert!(status.success(), "mkfifo failed");

        let err = RealFs
            .read_prefix(&fifo, 512)
            .err()
            .ok_or("reading a fifo should fail")?;
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        // directories are not regular files either
        assert!(RealFs.read_prefix(tmp.path(), 512).is_err());
        Ok(())
    }

    #[test]
    fn browse_nonexistent() {
        let result = load_dir(&RealFs, Path::new("/path/does/not/exist"));
        assert!(matches!(result, Err(FmError::NotFound(_))));
    }
}
