// LoadSleuth - core/report.rs
//
// Fixed-width three-column table rendering of extracted records.
// Core layer: writes to any Write trait object.

use crate::core::model::ModelLoadRecord;
use crate::util::constants::{
    HEADER_GPU_OFFLOAD, HEADER_MODEL_NAME, HEADER_SIZE_LABEL, NO_RECORDS_MESSAGE,
};
use std::io::{self, Write};

/// Column widths for one rendering, each the max of header and cell lengths
/// (in chars).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub name: usize,
    pub size_label: usize,
    pub gpu_offload: usize,
}

impl ColumnWidths {
    pub fn measure(records: &[ModelLoadRecord]) -> Self {
        Self {
            name: column_width(HEADER_MODEL_NAME, records.iter().map(|r| r.name.as_str())),
            size_label: column_width(
                HEADER_SIZE_LABEL,
                records.iter().map(|r| r.size_label.as_str()),
            ),
            gpu_offload: column_width(
                HEADER_GPU_OFFLOAD,
                records.iter().map(|r| r.gpu_offload.as_str()),
            ),
        }
    }
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .fold(header.chars().count(), usize::max)
}

/// Render the records as a table, or the informational line when empty.
///
/// ```text
/// | Model Name | Size Label | GPU Offload |
/// |------------+------------+-------------|
/// | Foo        | N/A        | 5/57        |
/// ```
pub fn write_table<W: Write>(records: &[ModelLoadRecord], mut out: W) -> io::Result<()> {
    if records.is_empty() {
        writeln!(out, "{NO_RECORDS_MESSAGE}")?;
        return out.flush();
    }

    let w = ColumnWidths::measure(records);

    write_row(
        &mut out,
        &w,
        HEADER_MODEL_NAME,
        HEADER_SIZE_LABEL,
        HEADER_GPU_OFFLOAD,
    )?;
    writeln!(
        out,
        "|{}+{}+{}|",
        "-".repeat(w.name + 2),
        "-".repeat(w.size_label + 2),
        "-".repeat(w.gpu_offload + 2)
    )?;
    for record in records {
        write_row(
            &mut out,
            &w,
            &record.name,
            &record.size_label,
            &record.gpu_offload,
        )?;
    }
    out.flush()
}

/// Render the table into a `String` (convenience for tests and callers that
/// need the text).
pub fn render_table(records: &[ModelLoadRecord]) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_table(records, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_row<W: Write>(
    out: &mut W,
    w: &ColumnWidths,
    name: &str,
    size_label: &str,
    gpu_offload: &str,
) -> io::Result<()> {
    // `{:<width$}` pads by char count, matching ColumnWidths::measure.
    writeln!(
        out,
        "| {name:<nw$} | {size_label:<sw$} | {gpu_offload:<gw$} |",
        nw = w.name,
        sw = w.size_label,
        gw = w.gpu_offload
    )
}
