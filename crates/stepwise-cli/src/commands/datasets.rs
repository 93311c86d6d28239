//! Bundled sample graphs command.

use anyhow::Result;
use comfy_table::{Cell, Color};
use stepwise_engine::DATASETS;

use crate::OutputFormat;
use crate::output::{self, Format};

fn optional(node: Option<u32>) -> String {
    node.map(|n| n.to_string()).unwrap_or_default()
}

/// Run the datasets command.
pub fn run(format: OutputFormat, quiet: bool) -> Result<()> {
    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&DATASETS, quiet)?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(
                &mut table,
                &["Name", "Kind", "Nodes", "Edges", "Source", "Goal"],
            );
            for dataset in &DATASETS {
                let kind = if dataset.directed {
                    "directed"
                } else {
                    "undirected"
                };
                table.add_row(vec![
                    Cell::new(dataset.name).fg(Color::Green),
                    Cell::new(kind),
                    Cell::new(dataset.node_count),
                    Cell::new(dataset.edges.len()),
                    Cell::new(optional(dataset.source)),
                    Cell::new(optional(dataset.goal)),
                ]);
            }
            output::print_table(&table, quiet);
        }
    }

    Ok(())
}
