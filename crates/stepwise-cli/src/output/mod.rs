//! Output formatting for CLI commands.

use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use stepwise_common::step::Step;
use stepwise_common::types::{NodeId, Weight};

/// Output format selection.
#[derive(Clone, Copy)]
pub enum Format {
    Table,
    Json,
}

impl From<crate::OutputFormat> for Format {
    fn from(f: crate::OutputFormat) -> Self {
        match f {
            crate::OutputFormat::Table => Format::Table,
            crate::OutputFormat::Json => Format::Json,
        }
    }
}

/// Print data as pretty JSON.
pub fn print_json<T: Serialize>(data: &T, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("{}", serde_json::to_string_pretty(data)?);
    }
    Ok(())
}

/// Create a styled table with consistent formatting.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    table
}

/// Add a header row to a table.
pub fn add_header(table: &mut Table, headers: &[&str]) {
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
}

/// Print a key-value table.
pub fn print_key_value_table(items: &[(&str, String)], quiet: bool) {
    if quiet {
        return;
    }

    let mut table = create_table();
    add_header(&mut table, &["Property", "Value"]);
    for (key, value) in items {
        table.add_row(vec![Cell::new(key).fg(Color::Green), Cell::new(value)]);
    }
    println!("{table}");
}

/// Print a prepared table.
pub fn print_table(table: &Table, quiet: bool) {
    if !quiet {
        println!("{table}");
    }
}

/// Print the recorded steps, one row each.
pub fn print_steps(steps: &[Step], quiet: bool) {
    if quiet || steps.is_empty() {
        return;
    }

    let mut table = create_table();
    add_header(&mut table, &["#", "Step", "Details"]);
    for (i, step) in steps.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(step.kind()).fg(Color::Yellow),
            Cell::new(step_details(step)),
        ]);
    }
    println!("{table}");
}

/// Renders a step's fields as `key=value` pairs, without its kind tag.
fn step_details(step: &Step) -> String {
    match serde_json::to_value(step) {
        Ok(serde_json::Value::Object(fields)) => fields
            .iter()
            .filter(|(key, _)| key.as_str() != "kind")
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(" "),
        _ => String::new(),
    }
}

/// Formats a node list as `0 → 1 → 2`.
pub fn node_path(nodes: &[NodeId]) -> String {
    join_nodes(nodes, " → ")
}

/// Formats a node list as `0, 1, 2`.
pub fn node_list(nodes: &[NodeId]) -> String {
    join_nodes(nodes, ", ")
}

fn join_nodes(nodes: &[NodeId], separator: &str) -> String {
    nodes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Formats a distance, `∞` when unreachable.
pub fn distance(distance: Option<Weight>) -> String {
    distance.map_or_else(|| "∞".to_string(), |d| d.to_string())
}

/// Print a warning message.
pub fn warning(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("! {msg}");
    }
}
