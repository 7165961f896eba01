/*!
 * Input handles: a uniform view over loose files, directory trees and
 * in-memory buffers, before any classification happens
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::filter::IGNORED_DIRS;

/// Where a handle's bytes come from
#[derive(Debug, Clone)]
enum HandleSource {
    Disk(PathBuf),
    Memory(Vec<u8>),
}

/// One candidate input, not yet classified or decoded.
///
/// A handle carries its own file name and, when it came from a directory
/// tree, a slash-separated path hint relative to the selected root.
#[derive(Debug, Clone)]
pub struct InputHandle {
    name: String,
    relative_path: Option<String>,
    size: u64,
    source: HandleSource,
}

impl InputHandle {
    /// Handle for a loose file on disk
    pub fn loose(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(Self {
            name: path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
            relative_path: None,
            size: metadata.len(),
            source: HandleSource::Disk(path.to_path_buf()),
        })
    }

    /// Handle for a file found while walking a directory tree.
    ///
    /// `relative_path` must be slash-separated and include the selected
    /// root's own name as its first segment.
    pub fn in_tree(path: &Path, relative_path: String) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(Self {
            name: path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
            relative_path: Some(relative_path),
            size: metadata.len(),
            source: HandleSource::Disk(path.to_path_buf()),
        })
    }

    /// Loose handle backed by an in-memory buffer
    pub fn memory(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            relative_path: None,
            size: bytes.len() as u64,
            source: HandleSource::Memory(bytes),
        }
    }

    /// In-memory handle carrying a directory-relative path
    pub fn memory_in_tree(relative_path: impl Into<String>, bytes: Vec<u8>) -> Self {
        let relative_path = relative_path.into();
        let name = relative_path
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            name,
            relative_path: Some(relative_path),
            size: bytes.len() as u64,
            source: HandleSource::Memory(bytes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Archives are distinguished by name alone, never by content
    pub fn is_archive(&self) -> bool {
        self.name.ends_with(".zip")
    }

    /// Path used for classification and for the resulting record:
    /// the tree-relative path when present, the bare name otherwise.
    pub fn effective_path(&self) -> &str {
        self.relative_path.as_deref().unwrap_or(&self.name)
    }

    pub fn read_bytes(&self) -> io::Result<Vec<u8>> {
        match &self.source {
            HandleSource::Disk(path) => fs::read(path),
            HandleSource::Memory(bytes) => Ok(bytes.clone()),
        }
    }
}

/// Expand the configured inputs into handles.
///
/// Plain files become loose handles. Directories are walked recursively and
/// every contained file becomes a tree handle whose path hint starts with
/// the directory's own name, mirroring how a picked folder is presented.
/// The configured output file is never collected.
pub fn collect_handles(config: &Config) -> Result<Vec<InputHandle>> {
    let mut handles = Vec::new();
    for input in &config.inputs {
        if input.is_dir() {
            collect_tree(input, config, &mut handles)?;
        } else if !input.ends_with(&config.output_file) {
            handles.push(InputHandle::loose(input)?);
        }
    }
    Ok(handles)
}

fn collect_tree(dir: &Path, config: &Config, handles: &mut Vec<InputHandle>) -> Result<()> {
    let root = fs::canonicalize(dir)?;
    let root_name = root
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let output_name = config.output_file.file_name().unwrap_or_default();

    let walker = WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            // Skipping ignored directories here only avoids IO; the
            // classifier re-checks every effective path later.
            if !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !IGNORED_DIRS.iter().any(|&d| d == name)
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Warning: skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().ends_with(&config.output_file) || entry.file_name() == output_name {
            continue;
        }
        let relative = match entry.path().strip_prefix(&root) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let mut segments: Vec<String> = Vec::with_capacity(relative.components().count() + 1);
        if !root_name.is_empty() {
            segments.push(root_name.clone());
        }
        segments.extend(
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string()),
        );
        match InputHandle::in_tree(entry.path(), segments.join("/")) {
            Ok(handle) => handles.push(handle),
            Err(e) => {
                eprintln!("Warning: skipping {}: {}", entry.path().display(), e);
            }
        }
    }
    Ok(())
}
