/*!
 * Source readers: decode classified handles and archive entries into
 * file records
 */

use std::io::{Cursor, Read};

use indicatif::ProgressBar;
use rayon::prelude::*;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::filter::{is_binary, should_ignore, PatternFilter};
use crate::input::InputHandle;
use crate::types::FileRecord;
use crate::utils::truncate_display_name;

/// Decode non-archive handles in parallel.
///
/// Handles rejected by the classifier or the pattern filter are dropped
/// silently. Read and decode failures are reported on stderr and skipped,
/// so one bad file never aborts the run.
pub fn read_loose(
    handles: &[&InputHandle],
    filter: &PatternFilter,
    progress: &ProgressBar,
) -> Vec<FileRecord> {
    handles
        .par_iter()
        .filter_map(|handle| {
            progress.inc(1);
            let path = handle.effective_path();
            if should_ignore(path) || is_binary(path) || !filter.allows(path) {
                return None;
            }
            progress.set_message(format!(
                "Current file: {}",
                truncate_display_name(handle.name(), 40)
            ));
            let bytes = match handle.read_bytes() {
                Ok(bytes) => bytes,
                Err(e) => {
                    eprintln!("Error processing {}: {}", path, e);
                    return None;
                }
            };
            match String::from_utf8(bytes) {
                Ok(content) => Some(FileRecord::new(path, content, handle.size())),
                Err(_) => {
                    eprintln!("Skipping non-UTF-8 file: {}", path);
                    None
                }
            }
        })
        .collect()
}

/// Expand archive handles into records for their text entries.
///
/// Entry paths are taken verbatim from the archive and run through the
/// same classifier as loose paths. A corrupt archive fails the whole
/// ingest; a single non-UTF-8 entry is skipped with a warning.
pub fn read_archives(
    handles: &[&InputHandle],
    filter: &PatternFilter,
    progress: &ProgressBar,
) -> Result<Vec<FileRecord>> {
    let mut records = Vec::new();
    for handle in handles {
        progress.inc(1);
        progress.set_message(format!(
            "Current archive: {}",
            truncate_display_name(handle.name(), 40)
        ));
        let bytes = handle
            .read_bytes()
            .map_err(|e| Error::Archive(ZipError::Io(e)))?;
        let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(Error::Archive)?;
        for index in 0..archive.len() {
            let mut entry = archive.by_index(index).map_err(Error::Archive)?;
            if entry.is_dir() {
                continue;
            }
            let path = entry.name().to_string();
            if should_ignore(&path) || is_binary(&path) || !filter.allows(&path) {
                continue;
            }
            let mut raw = Vec::new();
            entry
                .read_to_end(&mut raw)
                .map_err(|e| Error::Archive(ZipError::Io(e)))?;
            match String::from_utf8(raw) {
                Ok(content) => {
                    let size = content.len() as u64;
                    records.push(FileRecord::new(path, content, size));
                }
                Err(_) => eprintln!("Skipping non-UTF-8 archive entry: {}", path),
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn archive_handle(name: &str, entries: &[(&str, &[u8])]) -> InputHandle {
        let mut buf = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buf));
            for (path, bytes) in entries {
                writer.start_file(*path, SimpleFileOptions::default()).unwrap();
                writer.write_all(bytes).unwrap();
            }
            writer.finish().unwrap();
        }
        InputHandle::memory(name, buf)
    }

    #[test]
    fn test_read_loose_skips_classified_paths() {
        let handles = vec![
            InputHandle::memory("keep.txt", b"text".to_vec()),
            InputHandle::memory("logo.png", vec![0x89, 0x50, 0x4e, 0x47]),
            InputHandle::memory_in_tree("node_modules/x.js", b"dep".to_vec()),
        ];
        let refs: Vec<&InputHandle> = handles.iter().collect();
        let records = read_loose(&refs, &PatternFilter::empty(), &ProgressBar::hidden());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "keep.txt");
        assert_eq!(records[0].content, "text");
    }

    #[test]
    fn test_read_loose_skips_invalid_utf8() {
        let handles = vec![
            InputHandle::memory("bad.txt", vec![0xff, 0xfe, 0x00]),
            InputHandle::memory("good.txt", b"ok".to_vec()),
        ];
        let refs: Vec<&InputHandle> = handles.iter().collect();
        let records = read_loose(&refs, &PatternFilter::empty(), &ProgressBar::hidden());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "good.txt");
    }

    #[test]
    fn test_read_archives_expands_entries_verbatim() {
        let handle = archive_handle(
            "bundle.zip",
            &[
                ("src/main.rs", b"fn main() {}".as_slice()),
                ("assets/logo.png", &[0x89, 0x50]),
                ("node_modules/dep.js", b"x"),
            ],
        );
        let refs = vec![&handle];
        let records =
            read_archives(&refs, &PatternFilter::empty(), &ProgressBar::hidden()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "src/main.rs");
        assert_eq!(records[0].name, "main.rs");
        assert_eq!(records[0].size, 12);
    }

    #[test]
    fn test_read_archives_rejects_corrupt_input() {
        let handle = InputHandle::memory("broken.zip", b"not a zip at all".to_vec());
        let refs = vec![&handle];
        let err =
            read_archives(&refs, &PatternFilter::empty(), &ProgressBar::hidden()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to process ZIP file");
    }

    #[test]
    fn test_archive_directory_entries_are_skipped() {
        let mut buf = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buf));
            writer
                .add_directory("src/", SimpleFileOptions::default())
                .unwrap();
            writer
                .start_file("src/lib.rs", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"pub fn x() {}").unwrap();
            writer.finish().unwrap();
        }
        let handle = InputHandle::memory("code.zip", buf);
        let refs = vec![&handle];
        let records =
            read_archives(&refs, &PatternFilter::empty(), &ProgressBar::hidden()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "src/lib.rs");
    }
}
