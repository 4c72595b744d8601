//! Filename derivation and collision-safe path selection.

use std::path::{Path, PathBuf};
use url::Url;

/// Name used when the URL path has no usable final segment.
pub const FALLBACK_FILENAME: &str = "downloaded_image.jpg";

/// Derives a filename from the last segment of the URL path.
///
/// The segment is used verbatim (still percent-encoded, no sanitising).
/// An empty segment or a root path yields [`FALLBACK_FILENAME`].
pub fn filename_from_url(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_FILENAME)
        .to_string()
}

/// Splits `name` into stem and extension (extension keeps its leading dot).
///
/// Leading dots belong to the stem, so `.hidden` has no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if name[..i].chars().any(|c| c != '.') => name.split_at(i),
        _ => (name, ""),
    }
}

/// Returns a path inside `dir` that does not exist yet.
///
/// Starts with `filename` and falls back to `{stem}_{n}{ext}` for
/// n = 1, 2, ... Returns the chosen filename alongside the full path.
pub async fn unique_path(dir: &Path, filename: &str) -> std::io::Result<(String, PathBuf)> {
    let (stem, ext) = split_extension(filename);
    let mut candidate = filename.to_string();
    let mut counter = 1u32;

    loop {
        let path = dir.join(&candidate);
        if !tokio::fs::try_exists(&path).await? {
            return Ok((candidate, path));
        }
        candidate = format!("{}_{}{}", stem, counter, ext);
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn name_for(url: &str) -> String {
        filename_from_url(&Url::parse(url).unwrap())
    }

    #[test]
    fn uses_last_path_segment() {
        assert_eq!(name_for("https://example.com/images/photo.jpg"), "photo.jpg");
        assert_eq!(name_for("https://example.com/a/b/cat.png?size=large#top"), "cat.png");
        assert_eq!(name_for("http://example.com/raw"), "raw");
    }

    #[test]
    fn keeps_segment_verbatim() {
        assert_eq!(name_for("https://example.com/my%20pic.gif"), "my%20pic.gif");
    }

    #[test]
    fn falls_back_on_empty_segment() {
        assert_eq!(name_for("https://example.com"), FALLBACK_FILENAME);
        assert_eq!(name_for("https://example.com/"), FALLBACK_FILENAME);
        assert_eq!(name_for("https://example.com/gallery/"), FALLBACK_FILENAME);
        assert_eq!(name_for("mailto:someone@example.com"), FALLBACK_FILENAME);
    }

    #[test]
    fn split_extension_cases() {
        assert_eq!(split_extension("photo.jpg"), ("photo", ".jpg"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension("noext"), ("noext", ""));
        assert_eq!(split_extension(".hidden"), (".hidden", ""));
        assert_eq!(split_extension("..."), ("...", ""));
        assert_eq!(split_extension("trailing."), ("trailing", "."));
    }

    #[tokio::test]
    async fn unique_path_returns_candidate_when_free() {
        let dir = tempdir().unwrap();
        let (name, path) = unique_path(dir.path(), "photo.jpg").await.unwrap();
        assert_eq!(name, "photo.jpg");
        assert_eq!(path, dir.path().join("photo.jpg"));
    }

    #[tokio::test]
    async fn unique_path_appends_counter_before_extension() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("photo.jpg"), b"a").unwrap();
        std::fs::write(dir.path().join("photo_1.jpg"), b"b").unwrap();

        let (name, path) = unique_path(dir.path(), "photo.jpg").await.unwrap();
        assert_eq!(name, "photo_2.jpg");
        assert_eq!(path, dir.path().join("photo_2.jpg"));

        std::fs::write(dir.path().join("raw"), b"c").unwrap();
        let (name, _) = unique_path(dir.path(), "raw").await.unwrap();
        assert_eq!(name, "raw_1");
    }
}
