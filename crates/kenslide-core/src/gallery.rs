//! Discovery of the image files a carousel shows.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// File extensions the carousel will try to decode.
const SUPPORTED_EXTENSIONS: &[&str] = &["bmp", "gif", "jpeg", "jpg", "png", "webp"];

/// One carousel entry: a stable 0-based position and the file it shows.
///
/// The path is resolved once at scan time and never re-resolved; whether the
/// file still decodes later is a presentation concern, not a gallery error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub index: usize,
    pub path: PathBuf,
}

/// Check whether a path carries a supported image extension.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Build the ordered item list from candidate paths.
///
/// Unsupported files are skipped; the rest are sorted by file name so item
/// indices are stable across runs regardless of directory enumeration order.
pub fn from_paths(paths: Vec<PathBuf>) -> Vec<GalleryItem> {
    let mut paths: Vec<PathBuf> = paths.into_iter().filter(|p| is_supported(p)).collect();
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| GalleryItem { index, path })
        .collect()
}

/// Scan a directory (non-recursively) for images.
///
/// An empty result is not an error; the carousel degrades to an empty strip
/// with zero indicator dots.
pub fn scan(dir: &Path) -> Result<Vec<GalleryItem>> {
    if !dir.is_dir() {
        return Err(Error::Gallery(format!(
            "not a directory: {}",
            dir.display()
        )));
    }

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            candidates.push(path);
        }
    }

    let items = from_paths(candidates);
    debug!("gallery scan: {} images under {}", items.len(), dir.display());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported() {
        assert!(is_supported(Path::new("a.png")));
        assert!(is_supported(Path::new("b.JPG")));
        assert!(is_supported(Path::new("c.webp")));
        assert!(!is_supported(Path::new("notes.txt")));
        assert!(!is_supported(Path::new("no_extension")));
        assert!(!is_supported(Path::new(".hidden")));
    }

    #[test]
    fn test_from_paths_filters_and_orders() {
        let items = from_paths(vec![
            PathBuf::from("pics/canada.png"),
            PathBuf::from("pics/readme.md"),
            PathBuf::from("pics/india.jpg"),
            PathBuf::from("pics/germany.jpeg"),
        ]);

        let names: Vec<_> = items
            .iter()
            .map(|i| i.path.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["canada.png", "germany.jpeg", "india.jpg"]);

        for (position, item) in items.iter().enumerate() {
            assert_eq!(item.index, position);
        }
    }

    #[test]
    fn test_from_paths_empty() {
        assert!(from_paths(Vec::new()).is_empty());
        assert!(from_paths(vec![PathBuf::from("a.txt")]).is_empty());
    }
}
