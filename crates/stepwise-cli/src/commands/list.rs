//! Algorithm catalog command.

use anyhow::Result;
use comfy_table::{Cell, Color};
use stepwise_adapters::plugins::catalog;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Run the list command.
pub fn run(format: OutputFormat, quiet: bool) -> Result<()> {
    let catalog = catalog();

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            let entries: Vec<_> = catalog.values().collect();
            output::print_json(&entries, quiet)?;
        }
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Family", "Name", "Stable", "Description"]);
            for info in catalog.values() {
                let stable = match info.stable {
                    Some(true) => "yes",
                    Some(false) => "no",
                    None => "",
                };
                table.add_row(vec![
                    Cell::new(info.family).fg(Color::Green),
                    Cell::new(info.name),
                    Cell::new(stable),
                    Cell::new(info.description),
                ]);
            }
            output::print_table(&table, quiet);
        }
    }

    Ok(())
}
