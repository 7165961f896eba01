/*!
 * Monofile - Flatten codebases into a single document for LLM context
 *
 * This library ingests loose files, directory trees and ZIP archives,
 * normalizes their text files into one ordered snapshot, and renders that
 * snapshot as a deterministic flattened document with aggregate statistics.
 */

pub mod config;
pub mod context;
pub mod error;
pub mod filter;
pub mod flatten;
pub mod ingest;
pub mod input;
pub mod reader;
pub mod report;
pub mod session;
pub mod stats;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use context::{build_context_input, DEFAULT_CONTEXT_BUDGET};
pub use error::{Error, Result};
pub use filter::{is_binary, should_ignore, PatternFilter};
pub use flatten::{flatten, flatten_at};
pub use ingest::{ingest, Ingestor};
pub use input::{collect_handles, InputHandle};
pub use report::{IngestReport, ReportFormat, Reporter};
pub use session::{SessionBundle, SessionStore, SESSION_VERSION};
pub use stats::compute_stats;
pub use types::{CodebaseSnapshot, FileRecord, ProcessingStats};
pub use utils::format_file_size;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
