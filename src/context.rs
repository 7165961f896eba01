/*!
 * Context payload assembly for downstream AI tooling
 */

use crate::types::CodebaseSnapshot;

/// Character budget applied to the flattened document by default
pub const DEFAULT_CONTEXT_BUDGET: usize = 500_000;

/// Assemble the prompt payload: the snapshot's path listing followed by
/// the flattened document, truncated to `max_chars` characters.
///
/// Truncation counts characters, not bytes, so the cut never lands inside
/// a multi-byte sequence. The structure listing is never truncated.
pub fn build_context_input(snapshot: &CodebaseSnapshot, flattened: &str, max_chars: usize) -> String {
    let structure: Vec<&str> = snapshot.paths().collect();
    format!(
        "Structure:\n{}\n\nContent:\n{}",
        structure.join("\n"),
        truncate_chars(flattened, max_chars)
    )
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileRecord;

    #[test]
    fn test_payload_lists_structure_then_content() {
        let snapshot = CodebaseSnapshot::from_records(vec![
            FileRecord::new("src/a.ts", "aa", 2),
            FileRecord::new("README.md", "bb", 2),
        ]);
        let payload = build_context_input(&snapshot, "FLATTENED", 1000);
        assert_eq!(payload, "Structure:\nREADME.md\nsrc/a.ts\n\nContent:\nFLATTENED");
    }

    #[test]
    fn test_content_is_truncated_to_budget() {
        let snapshot = CodebaseSnapshot::from_records(vec![FileRecord::new("a.txt", "x", 1)]);
        let payload = build_context_input(&snapshot, "abcdefgh", 3);
        assert!(payload.ends_with("Content:\nabc"));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let text = "héllo wörld";
        assert_eq!(truncate_chars(text, 2), "hé");
        assert_eq!(truncate_chars(text, 100), text);
    }
}
