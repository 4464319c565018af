//! String-based path algebra shared by every [`crate::FileSystem`].
//!
//! All functions are pure and lexical: they never touch the disk, so the
//! mock and native filesystems resolve paths identically.

/// Replaces every `\` with `/`.
///
/// Applied to every path used as a map key before comparison or storage, so
/// Windows- and Unix-style spellings of the same file collide correctly.
pub fn normalize_separator(path: &str) -> String {
    path.replace('\\', "/")
}

/// Returns true for rooted paths: `/...`, `//server/...` or `X:/...`.
pub fn is_absolute(path: &str) -> bool {
    let path = normalize_separator(path);
    if path.starts_with('/') {
        return true;
    }
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(drive), Some(':')) if drive.is_ascii_alphabetic()
    )
}

/// Basename of `path`, extension included. Empty for directory-like inputs
/// ending with a separator.
pub fn file_name_from(path: &str) -> String {
    let path = normalize_separator(path);
    match path.rfind('/') {
        Some(idx) => path[idx + 1..].to_owned(),
        None => path,
    }
}

/// Containing directory of `path`, without trailing separator (except the
/// filesystem root itself).
pub fn dir_name_from(path: &str) -> String {
    let path = normalize_separator(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.starts_with('/') { "/".to_owned() } else { String::new() };
    }
    match trimmed.rfind('/') {
        Some(0) => "/".to_owned(),
        Some(idx) => trimmed[..idx].to_owned(),
        None => String::new(),
    }
}

/// Splits a normalized path into its root prefix (`/`, `//`, `C:/`, or empty
/// for relative paths) and the rest.
fn split_root(path: &str) -> (&str, &str) {
    if let Some(rest) = path.strip_prefix("//") {
        return ("//", rest);
    }
    if let Some(rest) = path.strip_prefix('/') {
        return ("/", rest);
    }
    let mut chars = path.chars();
    if let (Some(drive), Some(':')) = (chars.next(), chars.next()) {
        if drive.is_ascii_alphabetic() {
            let root_len = if path[2..].starts_with('/') { 3 } else { 2 };
            return (&path[..root_len], &path[root_len..]);
        }
    }
    ("", path)
}

/// Lexically resolves `.` and `..` segments and collapses repeated
/// separators. `..` never escapes an absolute root.
pub fn lexically_clean(path: &str) -> String {
    let path = normalize_separator(path);
    let (root, rest) = split_root(&path);
    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else if root.is_empty() {
                    // Relative paths keep leading `..` segments.
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }
    let mut clean = String::from(root);
    if !root.is_empty() && !root.ends_with('/') {
        clean.push('/');
    }
    clean.push_str(&segments.join("/"));
    clean
}

/// Resolves `path` against `base_dir` and cleans the result. `None` when the
/// result cannot be rooted (relative path against a relative base).
pub fn make_absolute(path: &str, base_dir: &str) -> Option<String> {
    let path = normalize_separator(path);
    if is_absolute(&path) {
        return Some(lexically_clean(&path));
    }
    let base = normalize_separator(base_dir);
    if !is_absolute(&base) {
        return None;
    }
    let mut joined = base.trim_end_matches('/').to_owned();
    joined.push('/');
    joined.push_str(&path);
    Some(lexically_clean(&joined))
}

/// Expresses `path` relative to `base_dir`.
///
/// Succeeds exactly when the cleaned path sits under the cleaned base
/// directory; paths on another root or in a sibling tree return `None` and
/// callers fall back to flattening or keeping the absolute spelling.
pub fn make_relative(path: &str, base_dir: &str) -> Option<String> {
    let path = lexically_clean(&normalize_separator(path));
    let base = lexically_clean(&normalize_separator(base_dir));
    if !is_absolute(&path) || !is_absolute(&base) {
        return None;
    }
    let mut base_prefix = base.trim_end_matches('/').to_owned();
    base_prefix.push('/');
    if path == base_prefix.trim_end_matches('/') {
        return Some(String::new());
    }
    path.strip_prefix(&base_prefix).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_normalize_to_forward_slash() {
        assert_eq!(normalize_separator("C:\\a\\b.png"), "C:/a/b.png");
        assert_eq!(normalize_separator("already/fine.png"), "already/fine.png");
    }

    #[test]
    fn absolute_detection_covers_unix_and_windows_roots() {
        assert!(is_absolute("/image1.png"));
        assert!(is_absolute("C:/a/b.png"));
        assert!(is_absolute("c:\\a\\b.png"));
        assert!(is_absolute("//server/share/file.png"));
        assert!(!is_absolute("subfolder/image3.png"));
        assert!(!is_absolute("image2.png"));
        assert!(!is_absolute(""));
    }

    #[test]
    fn basename_and_dirname() {
        assert_eq!(file_name_from("/game/base/folder/image.png"), "image.png");
        assert_eq!(file_name_from("C:\\a\\b.png"), "b.png");
        assert_eq!(file_name_from("image.png"), "image.png");
        assert_eq!(dir_name_from("/game/base/folder/image.png"), "/game/base/folder");
        assert_eq!(dir_name_from("/image.png"), "/");
        assert_eq!(dir_name_from("image.png"), "");
        assert_eq!(dir_name_from("C:/a/b.png"), "C:/a");
    }

    #[test]
    fn cleaning_resolves_dots_without_escaping_the_root() {
        assert_eq!(lexically_clean("/a/./b/../c.png"), "/a/c.png");
        assert_eq!(lexically_clean("/../a.png"), "/a.png");
        assert_eq!(lexically_clean("a//b/c.png"), "a/b/c.png");
        assert_eq!(lexically_clean("../a/b.png"), "../a/b.png");
        assert_eq!(lexically_clean("C:\\a\\..\\b.png"), "C:/b.png");
    }

    #[test]
    fn make_absolute_joins_against_the_base() {
        assert_eq!(
            make_absolute("image2.png", "/game/base/folder"),
            Some("/game/base/folder/image2.png".to_owned())
        );
        assert_eq!(
            make_absolute("subfolder/image3.png", "/game/base/folder/"),
            Some("/game/base/folder/subfolder/image3.png".to_owned())
        );
        assert_eq!(
            make_absolute("/image1.png", "/game/base/folder"),
            Some("/image1.png".to_owned())
        );
        assert_eq!(make_absolute("image.png", "relative/base"), None);
    }

    #[test]
    fn make_relative_requires_the_base_prefix() {
        assert_eq!(
            make_relative("/game/base/folder/subfolder/image3.png", "/game/base/folder"),
            Some("subfolder/image3.png".to_owned())
        );
        assert_eq!(make_relative("/image1.png", "/game/base/folder"), None);
        assert_eq!(make_relative("C:/other/image.png", "D:/base"), None);
        assert_eq!(make_relative("relative.png", "/game/base/folder"), None);
    }

    #[test]
    fn windows_and_unix_spellings_resolve_to_the_same_key() {
        let a = make_absolute("C:\\a\\b.png", "C:/base").unwrap();
        let b = make_absolute("C:/a/b.png", "C:/base").unwrap();
        assert_eq!(a, b);
    }
}
