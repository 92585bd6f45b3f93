// LoadSleuth - core/export.rs
//
// Record output in every supported format: table, CSV, JSON, JSON Lines.
// Core layer: writes to any Write trait object.
//
// CSV and JSON Lines are streaming sinks: each record is written and flushed
// as soon as it is resolved. Table and JSON need the full set (column widths,
// enclosing array) and buffer until `finish`.

use crate::core::model::{ModelLoadRecord, OutputFormat};
use crate::core::report;
use crate::util::constants::CSV_HEADER;
use crate::util::error::ExportError;
use std::io::Write;

/// Destination for extracted records.
pub trait RecordSink {
    /// Accept one record, in emission order.
    fn write_record(&mut self, record: &ModelLoadRecord) -> Result<(), ExportError>;

    /// Complete the output. Must be called exactly once after the last record.
    /// Returns the number of records written.
    fn finish(&mut self) -> Result<usize, ExportError>;
}

/// Build the sink for `format` on top of `writer`. `target` names the
/// destination in error messages.
pub fn open_sink<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    target: &str,
) -> Box<dyn RecordSink + 'w> {
    match format {
        OutputFormat::Table => Box::new(TableSink::new(writer, target)),
        OutputFormat::Csv => Box::new(CsvSink::new(writer, target)),
        OutputFormat::Json => Box::new(JsonSink::new(writer, target)),
        OutputFormat::Jsonl => Box::new(JsonLinesSink::new(writer, target)),
    }
}

// =============================================================================
// CSV
// =============================================================================

/// Streaming CSV writer: header row, then one row per record.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    target: String,
    header_written: bool,
    count: usize,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W, target: &str) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            target: target.to_string(),
            header_written: false,
            count: 0,
        }
    }

    fn csv_err(&self, source: csv::Error) -> ExportError {
        ExportError::Csv {
            target: self.target.clone(),
            source,
        }
    }

    fn io_err(&self, source: std::io::Error) -> ExportError {
        ExportError::Io {
            target: self.target.clone(),
            source,
        }
    }

    fn ensure_header(&mut self) -> Result<(), ExportError> {
        if !self.header_written {
            self.writer
                .write_record(CSV_HEADER)
                .map_err(|e| self.csv_err(e))?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, record: &ModelLoadRecord) -> Result<(), ExportError> {
        self.ensure_header()?;
        self.writer
            .write_record([&record.name, &record.size_label, &record.gpu_offload])
            .map_err(|e| self.csv_err(e))?;
        self.writer.flush().map_err(|e| self.io_err(e))?;
        self.count += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<usize, ExportError> {
        // Header is written even for zero records so consumers always see
        // the column names.
        self.ensure_header()?;
        self.writer.flush().map_err(|e| self.io_err(e))?;
        Ok(self.count)
    }
}

// =============================================================================
// JSON Lines
// =============================================================================

/// Streaming JSON Lines writer: one compact object per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    target: String,
    count: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W, target: &str) -> Self {
        Self {
            writer,
            target: target.to_string(),
            count: 0,
        }
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn write_record(&mut self, record: &ModelLoadRecord) -> Result<(), ExportError> {
        serde_json::to_writer(&mut self.writer, record).map_err(|e| ExportError::Json {
            target: self.target.clone(),
            source: e,
        })?;
        self.writer
            .write_all(b"\n")
            .and_then(|_| self.writer.flush())
            .map_err(|e| ExportError::Io {
                target: self.target.clone(),
                source: e,
            })?;
        self.count += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<usize, ExportError> {
        self.writer.flush().map_err(|e| ExportError::Io {
            target: self.target.clone(),
            source: e,
        })?;
        Ok(self.count)
    }
}

// =============================================================================
// Buffered formats
// =============================================================================

/// Pretty JSON array; written in full on `finish`.
pub struct JsonSink<W: Write> {
    writer: W,
    target: String,
    records: Vec<ModelLoadRecord>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W, target: &str) -> Self {
        Self {
            writer,
            target: target.to_string(),
            records: Vec::new(),
        }
    }
}

impl<W: Write> RecordSink for JsonSink<W> {
    fn write_record(&mut self, record: &ModelLoadRecord) -> Result<(), ExportError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<usize, ExportError> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records).map_err(|e| {
            ExportError::Json {
                target: self.target.clone(),
                source: e,
            }
        })?;
        self.writer
            .write_all(b"\n")
            .and_then(|_| self.writer.flush())
            .map_err(|e| ExportError::Io {
                target: self.target.clone(),
                source: e,
            })?;
        Ok(self.records.len())
    }
}

/// Fixed-width table; rendered in full on `finish`.
pub struct TableSink<W: Write> {
    writer: W,
    target: String,
    records: Vec<ModelLoadRecord>,
}

impl<W: Write> TableSink<W> {
    pub fn new(writer: W, target: &str) -> Self {
        Self {
            writer,
            target: target.to_string(),
            records: Vec::new(),
        }
    }
}

impl<W: Write> RecordSink for TableSink<W> {
    fn write_record(&mut self, record: &ModelLoadRecord) -> Result<(), ExportError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<usize, ExportError> {
        report::write_table(&self.records, &mut self.writer).map_err(|e| ExportError::Io {
            target: self.target.clone(),
            source: e,
        })?;
        Ok(self.records.len())
    }
}

// =============================================================================
// Slice helpers
// =============================================================================

/// Write every record through the sink for `format`. Returns the count.
pub fn export_all<W: Write>(
    records: &[ModelLoadRecord],
    format: OutputFormat,
    writer: W,
    target: &str,
) -> Result<usize, ExportError> {
    let mut sink = open_sink(format, Box::new(writer), target);
    for record in records {
        sink.write_record(record)?;
    }
    sink.finish()
}
