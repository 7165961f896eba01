/*!
 * Aggregate statistics over a snapshot
 */

use crate::types::{CodebaseSnapshot, ProcessingStats};

/// Compute totals and the per-type histogram for a snapshot.
///
/// Line counts split on `\n` only, so content ending in a newline counts
/// one more line than its visible rows, matching how editors show a final
/// empty line. Safe on an empty snapshot: every total is zero.
pub fn compute_stats(snapshot: &CodebaseSnapshot) -> ProcessingStats {
    let mut stats = ProcessingStats {
        total_files: snapshot.len(),
        ..Default::default()
    };
    for record in snapshot {
        stats.total_lines += record.content.split('\n').count();
        stats.total_size += record.size;
        let key = if record.extension.is_empty() {
            "UNKNOWN".to_string()
        } else {
            record.extension.to_uppercase()
        };
        *stats.file_types.entry(key).or_insert(0) += 1;
    }
    stats
}
