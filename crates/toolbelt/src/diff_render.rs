//! Three-column text rendering of a diff result.

use cdc_diff::{DiffEntry, DiffKind};
use serde_json::Value;

/// Renders entries as a `key | before | after` table. With `changes_only`
/// the unchanged rows are dropped; that filter lives here, never in the
/// engine, so callers always hold the full result.
pub fn render_table(entries: &[DiffEntry], changes_only: bool) -> String {
    let rows: Vec<[String; 3]> = entries
        .iter()
        .filter(|entry| !changes_only || entry.kind != DiffKind::Unchanged)
        .map(|entry| {
            [
                format!("{} {}", marker(entry.kind), entry.key),
                cell(&entry.before),
                cell(&entry.after),
            ]
        })
        .collect();

    if rows.is_empty() {
        return "no differences found".to_string();
    }

    let header = ["key", "before", "after"];
    let mut widths = [header[0].len(), header[1].len(), header[2].len()];
    for row in &rows {
        for (width, text) in widths.iter_mut().zip(row) {
            *width = (*width).max(text.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header.map(String::from), &widths);
    out.push_str(&format!(
        "{}-+-{}-+-{}\n",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2]),
    ));
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.pop();
    out
}

fn push_row(out: &mut String, row: &[String; 3], widths: &[usize; 3]) {
    for (i, (text, width)) in row.iter().zip(widths).enumerate() {
        let pad = " ".repeat(width - text.chars().count());
        if i > 0 {
            out.push_str(" | ");
        }
        out.push_str(text);
        if i < 2 {
            out.push_str(&pad);
        }
    }
    out.push('\n');
}

fn marker(kind: DiffKind) -> char {
    match kind {
        DiffKind::Changed => '~',
        DiffKind::Added => '+',
        DiffKind::Removed => '-',
        DiffKind::Unchanged => ' ',
    }
}

fn cell(value: &Option<Value>) -> String {
    match value {
        Some(value) => serde_json::to_string(value).unwrap_or_default(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdc_diff::compare;
    use serde_json::json;

    fn sample() -> Vec<DiffEntry> {
        compare(
            &json!({"a": 1, "b": 2, "c": 3}),
            &json!({"a": 1, "b": 5, "d": 4}),
        )
        .unwrap()
    }

    #[test]
    fn test_all_rows_rendered() {
        let table = render_table(&sample(), false);
        let lines: Vec<&str> = table.lines().collect();
        // Header, separator, four entries.
        assert_eq!(lines.len(), 6);
        assert!(lines[2].starts_with("~ b"));
        assert!(lines[3].starts_with("+ d"));
        assert!(lines[4].starts_with("- c"));
        assert!(lines[5].starts_with("  a"));
    }

    #[test]
    fn test_changes_only_filter() {
        let table = render_table(&sample(), true);
        assert!(!table.contains("  a"));
        assert!(table.contains("~ b"));
        assert_eq!(table.lines().count(), 5);
    }

    #[test]
    fn test_absent_side_placeholder() {
        let table = render_table(&sample(), false);
        let added_row = table.lines().find(|l| l.starts_with("+ d")).unwrap();
        let mut cells = added_row.split(" | ");
        cells.next();
        assert_eq!(cells.next().unwrap().trim(), "-");
        assert_eq!(cells.next().unwrap().trim(), "4");
    }

    #[test]
    fn test_empty_after_filter() {
        let entries = compare(&json!({"a": 1}), &json!({"a": 1})).unwrap();
        assert_eq!(render_table(&entries, true), "no differences found");
    }

    #[test]
    fn test_string_values_keep_json_quoting() {
        let entries = compare(&json!({"name": "ada"}), &json!({"name": "eva"})).unwrap();
        let table = render_table(&entries, false);
        assert!(table.contains("\"ada\""));
        assert!(table.contains("\"eva\""));
    }
}
