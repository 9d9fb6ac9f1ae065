use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::app::{GlobalOptions, LabelScheme};
use crate::labels::label;

/// Left margin of every printed table.
const MARGIN: &str = "  ";

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data);
    }
    Ok(())
}

/// Column alignment for tabular output.
#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Right,
}

/// Borderless step table backed by `comfy-table`, printed with a margin.
pub struct TabWriter {
    table: Table,
}

impl TabWriter {
    /// Create a writer from `(header, alignment)` column definitions.
    pub fn new(columns: Vec<(&str, Align)>) -> Self {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(columns.iter().map(|(name, _)| *name));

        for (i, (_, align)) in columns.iter().enumerate() {
            if let Some(col) = table.column_mut(i) {
                col.set_cell_alignment(match align {
                    Align::Left => CellAlignment::Left,
                    Align::Right => CellAlignment::Right,
                });
                col.set_padding((u16::from(i > 0), 0));
            }
        }

        Self { table }
    }

    /// Square matrix layout: a blank corner, then one right-aligned column
    /// per vertex label and per `extra` header.
    pub fn matrix(scheme: LabelScheme, order: usize, extra: &[&str]) -> Self {
        let labels: Vec<String> = (0..order).map(|i| label(scheme, i)).collect();
        let mut columns = vec![("", Align::Left)];
        columns.extend(labels.iter().map(|l| (l.as_str(), Align::Right)));
        columns.extend(extra.iter().map(|&h| (h, Align::Right)));
        Self::new(columns)
    }

    /// Add a row. Values are given in column order.
    pub fn row(&mut self, values: Vec<String>) {
        self.table.add_row(values);
    }

    /// Add a matrix row headed by `name`.
    pub fn labelled_row(&mut self, name: String, cells: impl IntoIterator<Item = String>) {
        let mut values = vec![name];
        values.extend(cells);
        self.row(values);
    }

    fn lines(&self) -> Vec<String> {
        self.table
            .to_string()
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|line| format!("{MARGIN}{line}"))
            .collect()
    }

    /// Print the table to stdout.
    pub fn print(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }
}

/// Distance or weight for display: `∞` for unreachable, no `.0` on whole numbers.
pub fn weight(value: f64) -> String {
    if value.is_infinite() {
        "∞".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Print a labelled numeric matrix.
pub fn print_matrix(scheme: LabelScheme, rows: &[Vec<f64>]) {
    let mut table = TabWriter::matrix(scheme, rows.len(), &[]);
    for (i, row) in rows.iter().enumerate() {
        table.labelled_row(label(scheme, i), row.iter().map(|&w| weight(w)));
    }
    table.print();
}
