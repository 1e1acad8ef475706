//! Terminal rendering of tables with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bact_model::{CellValue, StaticTable, TidyTable, WideTable};

/// Uploaded or generated data, with a leading row index column.
pub fn wide_table(table: &WideTable) -> Table {
    let mut out = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(table.columns.iter().map(|name| header_cell(name)));
    out.set_header(header);
    apply_table_style(&mut out);
    for (idx, row) in table.rows.iter().enumerate() {
        let mut cells = vec![dim_cell(idx)];
        cells.extend(row.iter().map(value_cell));
        out.add_row(cells);
    }
    align_numeric_columns(&mut out, table.rows.first().map(Vec::as_slice), 1);
    out
}

/// Reference data, shown verbatim without an index.
pub fn static_table(table: &StaticTable) -> Table {
    let mut out = Table::new();
    out.set_header(table.columns.iter().map(|name| header_cell(name)));
    apply_table_style(&mut out);
    for row in &table.rows {
        out.add_row(row.iter().map(value_cell));
    }
    align_numeric_columns(&mut out, table.rows.first().map(Vec::as_slice), 0);
    out
}

pub fn tidy_table(tidy: &TidyTable) -> Table {
    let mut out = Table::new();
    out.set_header(vec![
        header_cell(&tidy.identity_column),
        header_cell(&tidy.bucket_column),
        header_cell(&tidy.value_column),
    ]);
    apply_table_style(&mut out);
    for row in tidy {
        out.add_row(vec![
            Cell::new(&row.category),
            Cell::new(&row.bucket),
            Cell::new(bact_model::format_number(row.value)),
        ]);
    }
    align_column(&mut out, 2, CellAlignment::Right);
    out
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_numeric_columns(table: &mut Table, first_row: Option<&[CellValue]>, offset: usize) {
    let Some(row) = first_row else {
        return;
    };
    for (idx, cell) in row.iter().enumerate() {
        if cell.as_number().is_some() {
            align_column(table, idx + offset, CellAlignment::Right);
        }
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(value: &CellValue) -> Cell {
    match value {
        CellValue::Missing => dim_cell("-"),
        other => Cell::new(other.display_text()),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
