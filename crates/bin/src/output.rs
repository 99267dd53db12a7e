//! Output formatting helpers for human-readable and JSON output.

use cfgtree::{Config, Value};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  ").trim_end());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(col_count)
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}

/// Flattens a tree into `[path, value]` rows, sorted by path.
///
/// Leaves and empty containers get a row each; values are rendered as JSON
/// so strings and numbers stay distinguishable.
pub fn flatten(config: &Config) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut entries: Vec<_> = config.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in entries {
        flatten_value(key.clone(), value, &mut rows);
    }
    rows
}

fn flatten_value(prefix: String, value: &Value, rows: &mut Vec<Vec<String>>) {
    match value {
        Value::Object(object) if !object.is_empty() => {
            let mut entries: Vec<_> = object.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (key, child) in entries {
                flatten_value(format!("{prefix}.{key}"), child, rows);
            }
        }
        Value::Array(array) if !array.is_empty() => {
            for (i, child) in array.iter().enumerate() {
                flatten_value(format!("{prefix}.{i}"), child, rows);
            }
        }
        leaf => rows.push(vec![prefix, leaf.to_json_string()]),
    }
}

/// Prints a whole tree in the selected format
pub fn print_config(config: &Config, format: OutputFormat) {
    match format {
        OutputFormat::Human => print_table(&["PATH", "VALUE"], &flatten(config)),
        OutputFormat::Json => println!("{}", config.to_json_string()),
    }
}

/// Prints a single value; text is printed raw in human mode
pub fn print_value(value: &Value, format: OutputFormat) {
    match format {
        OutputFormat::Human => println!("{value}"),
        OutputFormat::Json => println!("{}", value.to_json_string()),
    }
}
