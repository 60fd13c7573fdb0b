//! Asset discovery: recursive walk of the asset root.

use crate::result::{OptimizeError, OptimizeResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Supported raster image formats, keyed by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageKind {
    /// `.png`
    Png,
    /// `.jpg` / `.jpeg`
    Jpeg,
    /// `.gif`
    Gif,
}

impl ImageKind {
    /// Classify a path by its extension, case-insensitively
    ///
    /// Returns `None` for anything outside the allowlist. Dispatch is by
    /// extension only; mislabeled contents surface later as a per-file
    /// decode failure.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }
}

/// A candidate image discovered by the scanner
///
/// Discovered fresh on every run; nothing is cached across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetFile {
    /// Filesystem path of the image
    pub path: PathBuf,
    /// Format inferred from the extension
    pub kind: ImageKind,
    /// Size on disk at discovery time
    pub size_bytes: u64,
}

impl AssetFile {
    /// Build an `AssetFile` from a path, statting it for its size
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedExtension` for paths outside the allowlist and
    /// an I/O error if the file cannot be statted.
    pub fn from_path(path: impl AsRef<Path>) -> OptimizeResult<Self> {
        let path = path.as_ref();
        let kind =
            ImageKind::from_path(path).ok_or_else(|| OptimizeError::UnsupportedExtension {
                path: path.to_path_buf(),
            })?;
        let size_bytes = fs::metadata(path)?.len();
        Ok(Self {
            path: path.to_path_buf(),
            kind,
            size_bytes,
        })
    }
}

/// Recursively collect every supported image file under `root`
///
/// A missing root is a valid "nothing to do" state and yields an empty
/// list. Entries that cannot be statted or listed mid-walk are skipped
/// with a warning rather than aborting the scan. Sibling ordering is
/// whatever the filesystem returns; callers must not rely on it.
///
/// # Errors
///
/// Returns `UnreadableRoot` only when the root exists but its directory
/// listing fails outright.
pub fn scan_images(root: impl AsRef<Path>) -> OptimizeResult<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let entries = fs::read_dir(root).map_err(|e| OptimizeError::UnreadableRoot {
        root: root.to_path_buf(),
        message: e.to_string(),
    })?;
    collect_entries(entries, &mut files);
    Ok(files)
}

fn collect_entries(entries: fs::ReadDir, files: &mut Vec<PathBuf>) {
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        // Follows symlinks; a broken link fails the stat and is skipped.
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping entry that cannot be statted");
                continue;
            }
        };
        if metadata.is_dir() {
            match fs::read_dir(&path) {
                Ok(children) => collect_entries(children, files),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable subdirectory");
                }
            }
        } else if ImageKind::from_path(&path).is_some() {
            files.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod image_kind_tests {
        use super::*;

        #[test]
        fn test_supported_extensions() {
            assert_eq!(ImageKind::from_path(Path::new("a.png")), Some(ImageKind::Png));
            assert_eq!(ImageKind::from_path(Path::new("a.jpg")), Some(ImageKind::Jpeg));
            assert_eq!(ImageKind::from_path(Path::new("a.jpeg")), Some(ImageKind::Jpeg));
            assert_eq!(ImageKind::from_path(Path::new("a.gif")), Some(ImageKind::Gif));
        }

        #[test]
        fn test_case_insensitive() {
            assert_eq!(ImageKind::from_path(Path::new("a.PNG")), Some(ImageKind::Png));
            assert_eq!(ImageKind::from_path(Path::new("a.JpEg")), Some(ImageKind::Jpeg));
        }

        #[test]
        fn test_unsupported_extensions() {
            assert_eq!(ImageKind::from_path(Path::new("a.txt")), None);
            assert_eq!(ImageKind::from_path(Path::new("a.svg")), None);
            assert_eq!(ImageKind::from_path(Path::new("a.webp")), None);
            assert_eq!(ImageKind::from_path(Path::new("noext")), None);
        }
    }

    mod scan_tests {
        use super::*;
        use std::fs;

        #[test]
        fn test_missing_root_returns_empty() {
            let result = scan_images("/definitely/not/a/real/root");
            assert!(result.unwrap().is_empty());
        }

        #[test]
        fn test_recursive_discovery_filters_extensions() {
            let dir = tempfile::tempdir().unwrap();
            let nested = dir.path().join("images/deep");
            fs::create_dir_all(&nested).unwrap();
            fs::write(nested.join("photo.png"), b"not a real png").unwrap();
            fs::write(nested.join("notes.txt"), b"text").unwrap();

            let found = scan_images(dir.path()).unwrap();
            assert_eq!(found, vec![nested.join("photo.png")]);
        }

        #[test]
        fn test_finds_files_at_multiple_depths() {
            let dir = tempfile::tempdir().unwrap();
            fs::create_dir_all(dir.path().join("sub")).unwrap();
            fs::write(dir.path().join("top.jpg"), b"x").unwrap();
            fs::write(dir.path().join("sub/inner.gif"), b"x").unwrap();

            let mut found = scan_images(dir.path()).unwrap();
            found.sort();
            assert_eq!(found.len(), 2);
            assert!(found.iter().any(|p| p.ends_with("top.jpg")));
            assert!(found.iter().any(|p| p.ends_with("sub/inner.gif")));
        }

        #[test]
        fn test_empty_root() {
            let dir = tempfile::tempdir().unwrap();
            assert!(scan_images(dir.path()).unwrap().is_empty());
        }
    }

    mod asset_file_tests {
        use super::*;
        use std::fs;

        #[test]
        fn test_from_path_records_size() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("img.png");
            fs::write(&path, [0u8; 42]).unwrap();

            let asset = AssetFile::from_path(&path).unwrap();
            assert_eq!(asset.kind, ImageKind::Png);
            assert_eq!(asset.size_bytes, 42);
        }

        #[test]
        fn test_from_path_rejects_unsupported() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("doc.pdf");
            fs::write(&path, b"x").unwrap();

            let err = AssetFile::from_path(&path).unwrap_err();
            assert!(matches!(err, OptimizeError::UnsupportedExtension { .. }));
        }
    }
}
