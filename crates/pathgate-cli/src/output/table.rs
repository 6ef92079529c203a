use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn print_table(table: Table) -> Result<()> {
    println!("{table}");
    Ok(())
}

pub fn flag_cell(value: bool) -> Cell {
    Cell::new(if value { "yes" } else { "no" })
}
