/*!
 * Flattened document rendering
 */

use chrono::{DateTime, SecondsFormat, Utc};

use crate::types::CodebaseSnapshot;

/// Render a snapshot into the flattened document, stamped with the
/// current time.
pub fn flatten(snapshot: &CodebaseSnapshot) -> String {
    flatten_at(snapshot, Utc::now())
}

/// Render a snapshot with an explicit generation timestamp.
///
/// Everything except the timestamp is a pure function of the snapshot, so
/// two calls with the same snapshot and instant produce identical bytes.
pub fn flatten_at(snapshot: &CodebaseSnapshot, generated_at: DateTime<Utc>) -> String {
    let rule_heavy = "=".repeat(80);
    let rule_light = "-".repeat(80);

    let mut output = String::from("# MONOFILE GENERATED CODEBASE\n");
    output.push_str(&format!(
        "# Generated at: {}\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    output.push_str(&format!("# File Count: {}\n", snapshot.len()));
    output.push_str(&rule_heavy);
    output.push_str("\n\n");

    for record in snapshot {
        output.push('\n');
        let breadcrumb = breadcrumb(&record.path);
        if !breadcrumb.is_empty() {
            output.push_str(&format!("### PATH: {}\n", breadcrumb));
        }
        output.push_str(&format!("## FILE: {}\n", record.name));
        output.push_str(&format!("```{}\n", record.extension));
        output.push_str(&record.content);
        output.push_str("\n```\n");
        output.push('\n');
        output.push_str(&rule_light);
        output.push('\n');
    }

    output
}

/// Directory part of a path rendered as a ` > ` breadcrumb, empty for
/// top-level files
pub fn breadcrumb(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((dirs, _)) => dirs.replace('/', " > "),
        None => String::new(),
    }
}
