// LoadSleuth - app/run.rs
//
// Run lifecycle: open each input in turn, drive the extractor over it, and
// push records into the output sink as they are resolved.
//
// Architecture:
//   - A single EventExtractor is threaded through every input so that
//     consecutive files (e.g. a rotated server.log split) behave as one
//     stream; pending state is never reset at a file boundary.
//   - Streaming formats (csv, jsonl) see each record immediately; buffered
//     formats (table, json) render on `finish`.
//
// Rule 11 compliance:
//   - Memory is bounded by MAX_LINE_BYTES per line plus, for buffered
//     formats only, the records themselves.
//   - The first unreadable input aborts the run with a typed error; records
//     already streamed stay written.

use crate::core::export::open_sink;
use crate::core::extractor::{EventExtractor, RecordStream};
use crate::core::model::{ExtractionSummary, OutputFormat};
use crate::platform::fs::{open_input, resolve_inputs};
use crate::util::error::Result;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Everything a run needs, resolved from CLI + config.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Input paths; empty or `-` means stdin.
    pub inputs: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Log dropped triggers at WARN.
    pub warn_on_dropped_triggers: bool,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Extraction counters across all inputs.
    pub summary: ExtractionSummary,
    /// Records handed to the sink.
    pub records_written: usize,
    /// Number of inputs processed.
    pub inputs_processed: usize,
    /// Wall-clock duration.
    pub duration: Duration,
}

/// Execute one extraction run, writing records to `out`.
pub fn run<W: Write>(options: &RunOptions, out: W) -> Result<RunReport> {
    let started = Instant::now();
    let inputs = resolve_inputs(&options.inputs);
    let mut sink = open_sink(options.format, Box::new(out), "<stdout>");
    let mut extractor =
        EventExtractor::new().with_dropped_trigger_warnings(options.warn_on_dropped_triggers);

    tracing::info!(
        inputs = inputs.len(),
        format = %options.format,
        "Extraction started"
    );

    for path in &inputs {
        let input = open_input(path)?;
        let before = extractor.summary().records_emitted;

        let mut stream = RecordStream::with_extractor(input.reader, input.name.as_str(), extractor);
        for record in stream.by_ref() {
            sink.write_record(&record?)?;
        }
        extractor = stream.into_extractor();

        tracing::info!(
            input = %input.name,
            records = extractor.summary().records_emitted - before,
            "Input processed"
        );
    }

    let summary = extractor.finish().clone();
    let records_written = sink.finish()?;
    let duration = started.elapsed();

    tracing::info!(
        records = records_written,
        lines = summary.lines_read,
        dropped_triggers = summary.triggers_dropped,
        duration_ms = duration.as_millis() as u64,
        "Extraction complete"
    );

    Ok(RunReport {
        summary,
        records_written,
        inputs_processed: inputs.len(),
        duration,
    })
}

/// Human-readable run summary (printed to stderr with --summary).
pub fn write_summary<W: Write>(report: &RunReport, mut out: W) -> std::io::Result<()> {
    let s = &report.summary;
    writeln!(out, "Inputs processed:   {}", report.inputs_processed)?;
    writeln!(out, "Lines read:         {}", s.lines_read)?;
    writeln!(out, "Lines matched:      {}", s.lines_matched)?;
    writeln!(out, "Records emitted:    {}", s.records_emitted)?;
    writeln!(out, "Triggers dropped:   {}", s.triggers_dropped)?;
    writeln!(
        out,
        "Pending at EOF:     {}",
        if s.incomplete_at_eof { "yes (discarded)" } else { "no" }
    )?;
    writeln!(out, "Elapsed:            {:.1?}", report.duration)
}
