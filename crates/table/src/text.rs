//! Fixed-width text rendering of tables, for terminals and logs.

use crate::error::Result;
use crate::table::Table;
use slate_types::{DataType, Value};
use std::io::Write;

/// Rows shown by default before output is truncated with an ellipsis row.
const DEFAULT_MAX_ROWS: usize = 20;

impl Table {
    /// Render the table as an aligned text grid.
    ///
    /// Text columns are left-aligned, everything else right-aligned. At
    /// most `max_rows` data rows are printed; a trailing `...` row marks
    /// truncation.
    pub fn write_text<W: Write>(&self, mut writer: W, max_rows: usize) -> Result<()> {
        let names = self.column_names();
        if names.is_empty() {
            return Ok(());
        }

        let shown = max_rows.min(self.rows().len());
        let truncated = shown < self.rows().len();

        // Column width scan over the header and the shown rows.
        let mut widths: Vec<usize> = names.iter().map(String::len).collect();
        for row in self.rows().iter().take(shown) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.as_str().len());
            }
        }

        let right_aligned: Vec<bool> = self
            .column_types()
            .iter()
            .map(|t| !matches!(t, DataType::Text))
            .collect();

        write_line(&mut writer, names.iter().map(String::as_str), &widths, &|_| false)?;

        let rule: String = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-");
        writeln!(writer, "{rule}")?;

        for row in self.rows().iter().take(shown) {
            let cells: Vec<String> = row.iter().map(Value::as_str).collect();
            write_line(
                &mut writer,
                cells.iter().map(String::as_str),
                &widths,
                &|i| right_aligned[i],
            )?;
        }

        if truncated {
            write_line(&mut writer, widths.iter().map(|_| "..."), &widths, &|_| false)?;
        }

        Ok(())
    }

    /// Render the table as a text string with the default row cap.
    pub fn to_text_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_text(&mut buffer, DEFAULT_MAX_ROWS)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

fn write_line<'a, W: Write>(
    writer: &mut W,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    right_aligned: &dyn Fn(usize) -> bool,
) -> Result<()> {
    let formatted: Vec<String> = cells
        .enumerate()
        .map(|(i, cell)| {
            let width = widths[i];
            if right_aligned(i) {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect();
    writeln!(writer, "{}", formatted.join(" | "))?;
    Ok(())
}
