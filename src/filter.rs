/*!
 * Classification of candidate paths: ignore rules, binary detection and
 * user-supplied glob patterns
 */

use glob_match::glob_match;
use once_cell::sync::Lazy;

/// Directory names excluded from every snapshot
pub static IGNORED_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version control
        ".git",
        // Dependencies
        "node_modules",
        // Build output
        "dist",
        "build",
        ".next",
        // Tooling artifacts
        "coverage",
        "__pycache__",
    ]
});

/// File names excluded from every snapshot
pub static IGNORED_FILES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        ".DS_Store",
        "package-lock.json",
        "yarn.lock",
        "pnpm-lock.yaml",
    ]
});

/// Extensions treated as binary, compared case-insensitively
pub static BINARY_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "png", "jpg", "jpeg", "gif", "ico", "pdf", "exe", "bin", "zip", "tar", "gz",
    ]
});

/// Check whether a slash-separated path refers to binary content.
///
/// Only the extension is consulted, never the bytes: a path with no `.` in
/// its final segment is always considered text.
pub fn is_binary(path: &str) -> bool {
    let name = file_name(path);
    match name.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_lowercase();
            BINARY_EXTENSIONS.iter().any(|&b| b == ext)
        }
        None => false,
    }
}

/// Check whether a slash-separated path is excluded by the built-in rules.
///
/// A path is ignored when any segment names an ignored directory or when
/// its final segment names an ignored file.
pub fn should_ignore(path: &str) -> bool {
    if path
        .split('/')
        .any(|segment| IGNORED_DIRS.iter().any(|&d| d == segment))
    {
        return true;
    }
    let name = file_name(path);
    IGNORED_FILES.iter().any(|&f| f == name)
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// User-supplied glob patterns applied on top of the built-in rules.
///
/// Patterns are matched against both the full relative path and the bare
/// file name, so `*.log` works without a leading `**/`.
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    ignore: Vec<String>,
    include: Vec<String>,
}

impl PatternFilter {
    pub fn new(ignore: Vec<String>, include: Vec<String>) -> Self {
        Self { ignore, include }
    }

    /// Filter that lets every path through
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn allows(&self, path: &str) -> bool {
        let name = file_name(path);
        if self
            .ignore
            .iter()
            .any(|p| glob_match(p, path) || glob_match(p, name))
        {
            return false;
        }
        if self.include.is_empty() {
            return true;
        }
        self.include
            .iter()
            .any(|p| glob_match(p, path) || glob_match(p, name))
    }
}
