use std::io::Write;

use crate::dynamics::history::{StateTable, COLUMNS};
use crate::error::Result;

/// Write a body's history table to CSV format.
///
/// Header: the labeled [`COLUMNS`], time index first.
pub fn write_table<W: Write>(writer: &mut W, table: &StateTable) -> Result<()> {
    writeln!(writer, "{}", COLUMNS.join(","))?;

    for row in table.rows() {
        let fields: Vec<String> = row.values().iter().map(|v| format!("{:.6}", v)).collect();
        writeln!(writer, "{}", fields.join(","))?;
    }

    Ok(())
}

/// Write a history table to a CSV file at the given path.
pub fn write_table_file(path: &str, table: &StateTable) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_table(&mut file, table)
}
