/*!
 * Core types and data structures for the Monofile pipeline
 */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One successfully ingested text file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Normalized slash-separated relative path
    pub path: String,
    /// Final path segment
    pub name: String,
    /// Text after the last `.` of the name, verbatim case, empty if none
    pub extension: String,
    /// Decoded UTF-8 content
    pub content: String,
    /// Size in bytes as reported by the source
    pub size: u64,
}

impl FileRecord {
    /// Build a record from a relative path and decoded content.
    ///
    /// Name and extension are derived from the path, so callers only supply
    /// what the source actually knows.
    pub fn new(path: impl Into<String>, content: impl Into<String>, size: u64) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or_default().to_string();
        let extension = match name.rsplit_once('.') {
            Some((_, ext)) => ext.to_string(),
            None => String::new(),
        };
        Self {
            path,
            name,
            extension,
            content: content.into(),
            size,
        }
    }
}

/// An ordered collection of ingested records.
///
/// Records are sorted by path on construction and never mutated afterwards,
/// so every consumer sees the same deterministic order. Duplicate paths are
/// allowed and stay adjacent in their original relative order.
#[derive(Debug, Clone, Default)]
pub struct CodebaseSnapshot {
    records: Vec<FileRecord>,
}

impl CodebaseSnapshot {
    /// Sort records by path and freeze them into a snapshot.
    ///
    /// The sort is stable and compares paths byte-wise.
    pub fn from_records(mut records: Vec<FileRecord>) -> Self {
        records.sort_by(|a, b| a.path.cmp(&b.path));
        Self { records }
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.records.iter()
    }

    /// Paths of all records in snapshot order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.path.as_str())
    }
}

impl<'a> IntoIterator for &'a CodebaseSnapshot {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Aggregate statistics over a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingStats {
    /// Number of records in the snapshot
    pub total_files: usize,
    /// Sum of per-file line counts
    pub total_lines: usize,
    /// Sum of record sizes in bytes
    pub total_size: u64,
    /// Histogram keyed by upper-cased extension, `UNKNOWN` for none
    pub file_types: BTreeMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_derives_name_and_extension() {
        let record = FileRecord::new("src/app/Main.TSX", "x", 1);
        assert_eq!(record.name, "Main.TSX");
        assert_eq!(record.extension, "TSX");
    }

    #[test]
    fn test_record_without_extension() {
        let record = FileRecord::new("docker/Makefile", "x", 1);
        assert_eq!(record.name, "Makefile");
        assert_eq!(record.extension, "");
    }

    #[test]
    fn test_dotfile_name_is_its_own_extension_source() {
        let record = FileRecord::new(".gitignore", "x", 1);
        assert_eq!(record.name, ".gitignore");
        assert_eq!(record.extension, "gitignore");
    }

    #[test]
    fn test_snapshot_sorts_by_path() {
        let snapshot = CodebaseSnapshot::from_records(vec![
            FileRecord::new("src/b.rs", "", 0),
            FileRecord::new("README.md", "", 0),
            FileRecord::new("src/a.rs", "", 0),
        ]);
        let paths: Vec<&str> = snapshot.paths().collect();
        assert_eq!(paths, vec!["README.md", "src/a.rs", "src/b.rs"]);
    }

    #[test]
    fn test_snapshot_keeps_duplicate_paths_in_reader_order() {
        let snapshot = CodebaseSnapshot::from_records(vec![
            FileRecord::new("a.txt", "first", 5),
            FileRecord::new("a.txt", "second", 6),
        ]);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.records()[0].content, "first");
        assert_eq!(snapshot.records()[1].content, "second");
    }
}
