//! Candidate list construction.

use std::path::{Path, PathBuf};

use super::options::SortOrder;

/// Build the ordered list of paths to probe for `base`.
///
/// The extension is appended as a raw suffix, so `archive.tar` with `.gz`
/// becomes `archive.tar.gz`. An empty extension yields the base path alone
/// under either order.
pub fn build_candidates(base: &Path, extension: &str, sort: SortOrder) -> Vec<PathBuf> {
    let (first, second) = match sort {
        SortOrder::PreferBaseFirst => (base.to_path_buf(), append_suffix(base, extension)),
        SortOrder::PreferExtensionFirst => (append_suffix(base, extension), base.to_path_buf()),
    };

    if extension.is_empty() {
        vec![first]
    } else {
        vec![first, second]
    }
}

fn append_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut raw = base.as_os_str().to_os_string();
    raw.push(suffix);
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(candidates: &[PathBuf]) -> Vec<&str> {
        candidates.iter().filter_map(|p| p.to_str()).collect()
    }

    #[test]
    fn test_base_first_without_extension() {
        let candidates = build_candidates(Path::new("tmp/folder"), "", SortOrder::PreferBaseFirst);
        assert_eq!(paths(&candidates), ["tmp/folder"]);
    }

    #[test]
    fn test_base_first_with_extension() {
        let candidates =
            build_candidates(Path::new("tmp/folder"), ".txt", SortOrder::PreferBaseFirst);
        assert_eq!(paths(&candidates), ["tmp/folder", "tmp/folder.txt"]);
    }

    #[test]
    fn test_extension_first_with_extension() {
        let candidates =
            build_candidates(Path::new("tmp/folder"), ".txt", SortOrder::PreferExtensionFirst);
        assert_eq!(paths(&candidates), ["tmp/folder.txt", "tmp/folder"]);
    }

    #[test]
    fn test_extension_first_without_extension_matches_base_first() {
        let base = Path::new("tmp/folder");
        assert_eq!(
            build_candidates(base, "", SortOrder::PreferExtensionFirst),
            build_candidates(base, "", SortOrder::PreferBaseFirst)
        );
    }

    #[test]
    fn test_suffix_does_not_replace_existing_extension() {
        let candidates =
            build_candidates(Path::new("backup.tar"), ".gz", SortOrder::PreferBaseFirst);
        assert_eq!(paths(&candidates), ["backup.tar", "backup.tar.gz"]);
    }

    #[test]
    fn test_suffix_without_leading_dot() {
        let candidates = build_candidates(Path::new("notes"), "-old", SortOrder::PreferBaseFirst);
        assert_eq!(paths(&candidates), ["notes", "notes-old"]);
    }
}
