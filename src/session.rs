/*!
 * Session persistence: the artifacts of a completed run, stored as an
 * explicit versioned bundle
 */

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ProcessingStats;

/// Bundle format version; bumped on any breaking change
pub const SESSION_VERSION: u32 = 1;

/// Stem of the bundle file name
pub const SESSION_KEY: &str = "monofile_session";

/// Everything needed to re-present a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionBundle {
    pub version: u32,
    pub stats: ProcessingStats,
    pub flattened: String,
    /// Milliseconds since the Unix epoch at save time
    pub timestamp: i64,
}

impl SessionBundle {
    pub fn new(stats: ProcessingStats, flattened: String) -> Self {
        Self {
            version: SESSION_VERSION,
            stats,
            flattened,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Save instant as a date, when the stored timestamp is representable
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }
}

/// File-backed store holding at most one bundle
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Store rooted at an explicit directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the user's cache directory
    pub fn default_location() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| Error::Session("Could not determine home directory".to_string()))?;
        Ok(Self::new(home_dir.join(".cache").join("monofile")))
    }

    /// Path of the bundle file inside this store
    pub fn bundle_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", SESSION_KEY))
    }

    /// Persist a bundle, replacing any previous one
    pub fn save(&self, bundle: &SessionBundle) -> Result<()> {
        let content = serde_json::to_string(bundle)?;
        let path = self.bundle_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;

        Ok(())
    }

    /// Load the saved bundle.
    ///
    /// A corrupt or version-mismatched bundle is removed with a warning so
    /// the next run starts clean, and the load reports a session error.
    pub fn load(&self) -> Result<SessionBundle> {
        let path = self.bundle_path();
        if !path.exists() {
            return Err(Error::Session("No saved session found".to_string()));
        }

        let content = fs::read_to_string(&path)?;
        let bundle: SessionBundle = match serde_json::from_str(&content) {
            Ok(bundle) => bundle,
            Err(e) => {
                eprintln!("Warning: discarding corrupt session bundle: {}", e);
                self.clear()?;
                return Err(Error::Session("Saved session was corrupt".to_string()));
            }
        };
        if bundle.version != SESSION_VERSION {
            eprintln!(
                "Warning: discarding session bundle with unsupported version {}",
                bundle.version
            );
            self.clear()?;
            return Err(Error::Session(format!(
                "Unsupported session version: {}",
                bundle.version
            )));
        }
        Ok(bundle)
    }

    /// Remove the saved bundle if present
    pub fn clear(&self) -> Result<()> {
        let path = self.bundle_path();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
