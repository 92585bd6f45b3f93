// LoadSleuth - core/extractor.rs
//
// Stateful model-load event extraction.
// Core layer: accepts BufRead / line iterators, never touches the filesystem.
//
// Each line is classified against an ordered pattern table. Name and size
// lines update the in-progress ExtractionState; a GPU-offload line closes the
// event, resolves the size label by priority, emits a ModelLoadRecord, and
// resets the state for the next generation.

use crate::core::lines::BoundedLines;
use crate::core::model::{
    Extraction, ExtractionState, ExtractionSummary, LineKind, ModelLoadRecord,
};
use crate::util::constants::{MAX_LINE_BYTES, PLACEHOLDER_SIZE_LABEL, SIZE_LABEL_SENTINEL};
use crate::util::error::ParseError;
use crate::util::logging::preview;
use regex::Regex;
use std::io::BufRead;
use std::sync::OnceLock;

// =============================================================================
// Pattern table
// =============================================================================

/// A classifier entry: the line category and the regex that recognises it.
///
/// Value categories capture the raw value in group 1; the trigger captures
/// the offloaded and total layer counts in groups 1 and 2.
struct Classifier {
    kind: LineKind,
    re: Regex,
}

/// Ordered pattern table. Order is part of the contract: the first matching
/// entry decides a line's category.
fn classifiers() -> &'static [Classifier] {
    static CLASSIFIERS: OnceLock<Vec<Classifier>> = OnceLock::new();

    CLASSIFIERS.get_or_init(|| {
        fn re(pat: &str) -> Regex {
            Regex::new(pat).expect("extractor: invalid regex")
        }

        vec![
            // llama_model_loader: - kv   2:  general.name str = Mixtral-8x22B-Instruct-v0.1
            Classifier {
                kind: LineKind::NamePrimary,
                re: re(r"llama_model_loader:\s*-\s*kv\s+\d+:\s*general\.name\s+str\s*=(.*)"),
            },
            // print_info: general.name     = Mixtral-8x22B-Instruct-v0.1
            Classifier {
                kind: LineKind::NameFallback,
                re: re(r"print_info:\s*general\.name\s*=(.*)"),
            },
            // llama_model_loader: - kv   6:  general.size_label str = 70B
            Classifier {
                kind: LineKind::SizePrimary,
                re: re(r"llama_model_loader:\s*-\s*kv\s+\d+:\s*general\.size_label\s+str\s*=(.*)"),
            },
            // print_info: model type       = 8x22B
            Classifier {
                kind: LineKind::SizeFallback,
                re: re(r"print_info:\s*model type\s*=(.*)"),
            },
            // load_tensors: offloaded 5/57 layers to GPU
            Classifier {
                kind: LineKind::Trigger,
                re: re(r"load_tensors:\s*offloaded\s+(\d+)/(\d+)\s+layers\s+to\s+GPU"),
            },
        ]
    })
}

/// Size token embedded in a model name: digits, optional `x` + digits, one
/// of B/K/M/G, then any word characters (`70B`, `8x22B`, `7b_q4`).
fn size_token_re() -> &'static Regex {
    static SIZE_TOKEN: OnceLock<Regex> = OnceLock::new();
    SIZE_TOKEN.get_or_init(|| {
        Regex::new(r"(?i)\b(\d+(?:x\d+)?[bkmg]\w*)\b").expect("extractor: invalid size regex")
    })
}

// =============================================================================
// Classification
// =============================================================================

/// A recognised line, borrowing its captured text from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch<'a> {
    /// A name or size line. `value` is already trimmed and may be empty.
    Field { kind: LineKind, value: &'a str },
    /// A GPU-offload line with both counts exactly as written.
    Trigger { offloaded: &'a str, total: &'a str },
}

impl LineMatch<'_> {
    pub fn kind(&self) -> LineKind {
        match self {
            LineMatch::Field { kind, .. } => *kind,
            LineMatch::Trigger { .. } => LineKind::Trigger,
        }
    }
}

/// Classify one line. Returns `None` for lines matching no category.
pub fn classify_line(line: &str) -> Option<LineMatch<'_>> {
    for classifier in classifiers() {
        let Some(caps) = classifier.re.captures(line) else {
            continue;
        };
        return match classifier.kind {
            LineKind::Trigger => {
                let offloaded = caps.get(1)?.as_str();
                let total = caps.get(2)?.as_str();
                Some(LineMatch::Trigger { offloaded, total })
            }
            kind => {
                let value = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
                Some(LineMatch::Field { kind, value })
            }
        };
    }
    None
}

// =============================================================================
// Priority resolution
// =============================================================================

/// Find the first size-shaped token in a model name (`8x22B` in
/// `Mixtral-8x22B-Instruct-v0.1`).
pub fn infer_size_label(name: &str) -> Option<&str> {
    size_token_re()
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Resolve the final size label for the current generation.
///
/// Priority: explicit loader label > print_info model type > inference from
/// the model name > `N/A`.
pub fn resolve_size_label(state: &ExtractionState) -> String {
    if let Some(explicit) = &state.explicit_size_label {
        return explicit.clone();
    }
    if let Some(inferred) = &state.inferred_size_label {
        return inferred.clone();
    }
    state
        .model_name
        .as_deref()
        .and_then(infer_size_label)
        .unwrap_or(SIZE_LABEL_SENTINEL)
        .to_string()
}

// =============================================================================
// EventExtractor
// =============================================================================

/// Line-at-a-time extractor owning the per-generation state.
#[derive(Debug, Default)]
pub struct EventExtractor {
    state: ExtractionState,
    summary: ExtractionSummary,
    warn_on_dropped_triggers: bool,
}

impl EventExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log dropped triggers at WARN instead of DEBUG. Emission is unaffected.
    pub fn with_dropped_trigger_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_dropped_triggers = enabled;
        self
    }

    /// Current in-progress state.
    pub fn state(&self) -> &ExtractionState {
        &self.state
    }

    /// Counters accumulated so far.
    pub fn summary(&self) -> &ExtractionSummary {
        &self.summary
    }

    /// Feed one raw input line. Returns a record if this line completed an
    /// event.
    pub fn feed_line(&mut self, line: &str) -> Option<ModelLoadRecord> {
        self.summary.lines_read += 1;

        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let matched = classify_line(line)?;
        self.summary.lines_matched += 1;
        tracing::trace!(
            line = self.summary.lines_read,
            kind = %matched.kind(),
            text = preview(line),
            "Line classified"
        );

        self.apply(matched)
    }

    fn apply(&mut self, matched: LineMatch<'_>) -> Option<ModelLoadRecord> {
        match matched {
            LineMatch::Field { value, .. } if value.is_empty() => None,
            LineMatch::Field {
                kind: LineKind::NamePrimary,
                value,
            } => {
                self.state.model_name = Some(value.to_string());
                None
            }
            LineMatch::Field {
                kind: LineKind::NameFallback,
                value,
            } => {
                if self.state.model_name.is_none() {
                    self.state.model_name = Some(value.to_string());
                }
                None
            }
            LineMatch::Field {
                kind: LineKind::SizePrimary,
                value,
            } => {
                self.state.explicit_size_label = Some(value.to_string());
                None
            }
            LineMatch::Field {
                kind: LineKind::SizeFallback,
                value,
            } => {
                if value != PLACEHOLDER_SIZE_LABEL {
                    self.state.inferred_size_label = Some(value.to_string());
                }
                None
            }
            // classify_line never builds a Field with the trigger kind.
            LineMatch::Field {
                kind: LineKind::Trigger,
                ..
            } => None,
            LineMatch::Trigger { offloaded, total } => self.emit(offloaded, total),
        }
    }

    /// Resolve, emit, and reset. A trigger with no established name is
    /// dropped without touching the state.
    fn emit(&mut self, offloaded: &str, total: &str) -> Option<ModelLoadRecord> {
        let Some(name) = self.state.model_name.clone() else {
            self.summary.triggers_dropped += 1;
            if self.warn_on_dropped_triggers {
                tracing::warn!(
                    line = self.summary.lines_read,
                    offloaded,
                    total,
                    "GPU offload line with no model name; ignored"
                );
            } else {
                tracing::debug!(
                    line = self.summary.lines_read,
                    offloaded,
                    total,
                    "GPU offload line with no model name; ignored"
                );
            }
            return None;
        };

        let record = ModelLoadRecord {
            name,
            size_label: resolve_size_label(&self.state),
            gpu_offload: format!("{offloaded}/{total}"),
        };
        self.state.reset();
        self.summary.records_emitted += 1;

        tracing::debug!(
            line = self.summary.lines_read,
            name = %record.name,
            size_label = %record.size_label,
            gpu_offload = %record.gpu_offload,
            "Model load event extracted"
        );

        Some(record)
    }

    /// Mark end of stream. Pending state is discarded (never emitted); the
    /// summary records whether a name was left dangling.
    ///
    /// Safe to call more than once: the flag reflects the state at the most
    /// recent call.
    pub fn finish(&mut self) -> &ExtractionSummary {
        self.summary.incomplete_at_eof = self.state.model_name.is_some();
        if let Some(name) = &self.state.model_name {
            tracing::debug!(
                name = %name,
                "End of input with no GPU offload line; pending event discarded"
            );
        }
        &self.summary
    }
}

// =============================================================================
// Stream drivers
// =============================================================================

/// Eagerly extract every record from a finite sequence of lines.
pub fn extract_records<I, S>(lines: I) -> Extraction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extractor = EventExtractor::new();
    let records = lines
        .into_iter()
        .filter_map(|line| extractor.feed_line(line.as_ref()))
        .collect();
    let summary = extractor.finish().clone();
    Extraction { records, summary }
}

/// Lazily produced, non-restartable record sequence over a reader.
///
/// Each call to `next` reads only as many lines as needed to complete the
/// next event, so records can be consumed while input is still arriving.
pub struct RecordStream<R> {
    lines: BoundedLines<R>,
    extractor: EventExtractor,
    input: String,
    line_number: u64,
    exhausted: bool,
}

impl<R: BufRead> RecordStream<R> {
    /// Start a fresh extraction over `reader`. `input` names the source in
    /// errors and logs.
    pub fn new(reader: R, input: impl Into<String>) -> Self {
        Self::with_extractor(reader, input, EventExtractor::new())
    }

    /// Continue an existing extraction over another reader. The extractor's
    /// pending state carries across, so consecutive inputs behave as one
    /// stream.
    pub fn with_extractor(reader: R, input: impl Into<String>, extractor: EventExtractor) -> Self {
        Self {
            lines: BoundedLines::new(reader, MAX_LINE_BYTES),
            extractor,
            input: input.into(),
            line_number: 0,
            exhausted: false,
        }
    }

    /// Counters so far (final once the iterator returned `None`).
    pub fn summary(&self) -> &ExtractionSummary {
        self.extractor.summary()
    }

    /// Hand the extractor back, e.g. to continue with the next input.
    pub fn into_extractor(self) -> EventExtractor {
        self.extractor
    }
}

impl<R: BufRead> Iterator for RecordStream<R> {
    type Item = Result<ModelLoadRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        loop {
            match self.lines.next() {
                None => {
                    self.exhausted = true;
                    self.extractor.finish();
                    tracing::debug!(
                        input = %self.input,
                        lines = self.line_number,
                        "Input exhausted"
                    );
                    return None;
                }
                Some(Err(source)) => {
                    self.exhausted = true;
                    return Some(Err(ParseError::Io {
                        input: self.input.clone(),
                        line_number: self.line_number + 1,
                        source,
                    }));
                }
                Some(Ok(line)) => {
                    self.line_number += 1;
                    if let Some(record) = self.extractor.feed_line(&line) {
                        return Some(Ok(record));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const NAME_KV: &str = "llama_model_loader: - kv   2:                               general.name str              = Mixtral-8x22B-Instruct-v0.1";
    const SIZE_KV: &str = "llama_model_loader: - kv   6:                         general.size_label str              = 141B";
    const NAME_PI: &str = "print_info: general.name     = Other-Name";
    const TYPE_PI: &str = "print_info: model type       = 8x22B";
    const TRIGGER: &str = "load_tensors: offloaded 5/57 layers to GPU";

    fn feed_all(extractor: &mut EventExtractor, lines: &[&str]) -> Vec<ModelLoadRecord> {
        lines.iter().filter_map(|l| extractor.feed_line(l)).collect()
    }

    // -------------------------------------------------------------------------
    // Classification
    // -------------------------------------------------------------------------

    #[test]
    fn test_classify_each_category() {
        assert_eq!(
            classify_line(NAME_KV),
            Some(LineMatch::Field {
                kind: LineKind::NamePrimary,
                value: "Mixtral-8x22B-Instruct-v0.1"
            })
        );
        assert_eq!(classify_line(NAME_PI).map(|m| m.kind()), Some(LineKind::NameFallback));
        assert_eq!(
            classify_line(SIZE_KV),
            Some(LineMatch::Field {
                kind: LineKind::SizePrimary,
                value: "141B"
            })
        );
        assert_eq!(
            classify_line(TYPE_PI),
            Some(LineMatch::Field {
                kind: LineKind::SizeFallback,
                value: "8x22B"
            })
        );
        assert_eq!(
            classify_line(TRIGGER),
            Some(LineMatch::Trigger {
                offloaded: "5",
                total: "57"
            })
        );
    }

    #[test]
    fn test_classify_tolerates_prefix_and_compact_spacing() {
        let line = "time=2025-01-01T10:00:00Z level=INFO source=server.go msg=x llama_model_loader: - kv 2: general.name str = Foo";
        assert_eq!(
            classify_line(line),
            Some(LineMatch::Field {
                kind: LineKind::NamePrimary,
                value: "Foo"
            })
        );
        assert_eq!(
            classify_line("load_tensors:   offloaded  33/33  layers to GPU"),
            Some(LineMatch::Trigger {
                offloaded: "33",
                total: "33"
            })
        );
    }

    #[test]
    fn test_classify_is_case_sensitive_and_ignores_noise() {
        assert_eq!(classify_line("LOAD_TENSORS: offloaded 5/57 layers to GPU"), None);
        assert_eq!(classify_line("llama_model_loader: - kv   0: general.architecture str = llama"), None);
        assert_eq!(classify_line("print_info: model params     = 140.62 B"), None);
        assert_eq!(classify_line("load_tensors: offloading 56 repeating layers to GPU"), None);
        assert_eq!(classify_line("random unrelated text"), None);
    }

    #[test]
    fn test_classify_basename_is_not_name() {
        assert_eq!(
            classify_line("llama_model_loader: - kv   3: general.basename str = Mixtral"),
            None
        );
    }

    // -------------------------------------------------------------------------
    // Size inference
    // -------------------------------------------------------------------------

    #[test]
    fn test_infer_size_label_from_names() {
        assert_eq!(infer_size_label("Mixtral-8x22B-Instruct-v0.1"), Some("8x22B"));
        assert_eq!(infer_size_label("Meta-Llama-3.1-70B-Instruct"), Some("70B"));
        assert_eq!(infer_size_label("gemma-2b"), Some("2b"));
        assert_eq!(infer_size_label("qwen 7B_Q4_K_M"), Some("7B_Q4_K_M"));
        assert_eq!(infer_size_label("Foo"), None);
        assert_eq!(infer_size_label("phi3"), None);
    }

    #[test]
    fn test_resolve_size_label_priority() {
        let mut state = ExtractionState {
            model_name: Some("Llama-3-8B".to_string()),
            explicit_size_label: Some("8.0B".to_string()),
            inferred_size_label: Some("8B-pi".to_string()),
        };
        assert_eq!(resolve_size_label(&state), "8.0B");
        state.explicit_size_label = None;
        assert_eq!(resolve_size_label(&state), "8B-pi");
        state.inferred_size_label = None;
        assert_eq!(resolve_size_label(&state), "8B");
        state.model_name = Some("Foo".to_string());
        assert_eq!(resolve_size_label(&state), SIZE_LABEL_SENTINEL);
    }

    // -------------------------------------------------------------------------
    // State transitions
    // -------------------------------------------------------------------------

    #[test]
    fn test_unmatched_lines_leave_state_unchanged() {
        let mut ex = EventExtractor::new();
        ex.feed_line("llama_model_loader: - kv 2: general.name str = Foo");
        let before = ex.state().clone();
        for line in ["", "   ", "ggml_cuda_init: found 1 CUDA devices", "garbage = value"] {
            assert_eq!(ex.feed_line(line), None);
        }
        assert_eq!(ex.state(), &before);
        assert_eq!(ex.summary().lines_read, 5);
        assert_eq!(ex.summary().lines_matched, 1);
    }

    #[test]
    fn test_primary_name_not_overwritten_by_fallback() {
        let mut ex = EventExtractor::new();
        let records = feed_all(&mut ex, &[NAME_KV, NAME_PI, TRIGGER]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Mixtral-8x22B-Instruct-v0.1");
    }

    #[test]
    fn test_primary_name_overwrites_fallback() {
        let mut ex = EventExtractor::new();
        let records = feed_all(&mut ex, &[NAME_PI, NAME_KV, TRIGGER]);
        assert_eq!(records[0].name, "Mixtral-8x22B-Instruct-v0.1");
    }

    #[test]
    fn test_fallback_name_used_alone() {
        let mut ex = EventExtractor::new();
        let records = feed_all(&mut ex, &[NAME_PI, TRIGGER]);
        assert_eq!(records[0].name, "Other-Name");
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let mut ex = EventExtractor::new();
        ex.feed_line("llama_model_loader: - kv 2: general.name str =   ");
        ex.feed_line("print_info: general.name =");
        ex.feed_line("print_info: model type = ");
        assert!(ex.state().is_empty());
    }

    #[test]
    fn test_explicit_size_beats_model_type() {
        let mut ex = EventExtractor::new();
        let records = feed_all(&mut ex, &[NAME_KV, TYPE_PI, SIZE_KV, TRIGGER]);
        assert_eq!(records[0].size_label, "141B");
    }

    #[test]
    fn test_model_type_used_when_no_explicit_size() {
        let mut ex = EventExtractor::new();
        let records = feed_all(
            &mut ex,
            &["print_info: general.name = Foo", "print_info: model type = 13B", TRIGGER],
        );
        assert_eq!(records[0].size_label, "13B");
    }

    #[test]
    fn test_size_inferred_from_name_as_last_resort() {
        let mut ex = EventExtractor::new();
        let records = feed_all(&mut ex, &[NAME_KV, TRIGGER]);
        assert_eq!(records[0].size_label, "8x22B");
    }

    #[test]
    fn test_placeholder_model_type_is_ignored() {
        let mut ex = EventExtractor::new();
        ex.feed_line("print_info: model type       = ?B");
        assert_eq!(ex.state().inferred_size_label, None);

        let records = feed_all(
            &mut ex,
            &["llama_model_loader: - kv 2: general.name str = Foo", TRIGGER],
        );
        assert_eq!(records[0].size_label, SIZE_LABEL_SENTINEL);
    }

    #[test]
    fn test_trigger_emits_record_with_literal_offload() {
        let mut ex = EventExtractor::new();
        let records = feed_all(
            &mut ex,
            &["llama_model_loader: - kv 2: general.name str = Foo", TRIGGER],
        );
        assert_eq!(
            records,
            vec![ModelLoadRecord {
                name: "Foo".to_string(),
                size_label: SIZE_LABEL_SENTINEL.to_string(),
                gpu_offload: "5/57".to_string(),
            }]
        );
        assert!(ex.state().is_empty());
    }

    #[test]
    fn test_offload_counts_not_renormalised() {
        let mut ex = EventExtractor::new();
        let records = feed_all(
            &mut ex,
            &["print_info: general.name = Foo", "load_tensors: offloaded 007/0057 layers to GPU"],
        );
        assert_eq!(records[0].gpu_offload, "007/0057");
    }

    #[test]
    fn test_trigger_without_name_is_dropped_and_state_kept() {
        let mut ex = EventExtractor::new();
        ex.feed_line(SIZE_KV);
        let before = ex.state().clone();

        assert_eq!(ex.feed_line(TRIGGER), None);
        assert_eq!(ex.state(), &before);
        assert_eq!(ex.summary().triggers_dropped, 1);

        // The size survives into the generation that eventually gets a name.
        let records = feed_all(&mut ex, &["print_info: general.name = Foo", TRIGGER]);
        assert_eq!(records[0].size_label, "141B");
    }

    #[test]
    fn test_second_trigger_after_emission_is_dropped() {
        let mut ex = EventExtractor::new();
        let records = feed_all(&mut ex, &[NAME_KV, SIZE_KV, TRIGGER, TRIGGER]);
        assert_eq!(records.len(), 1);
        assert_eq!(ex.summary().records_emitted, 1);
        assert_eq!(ex.summary().triggers_dropped, 1);
    }

    #[test]
    fn test_warning_mode_does_not_change_emission() {
        let mut ex = EventExtractor::new().with_dropped_trigger_warnings(true);
        let records = feed_all(&mut ex, &[TRIGGER, NAME_PI, TRIGGER]);
        assert_eq!(records.len(), 1);
        assert_eq!(ex.summary().triggers_dropped, 1);
    }

    #[test]
    fn test_finish_flags_pending_name() {
        let mut ex = EventExtractor::new();
        ex.feed_line(NAME_KV);
        assert!(ex.finish().incomplete_at_eof);

        let mut ex = EventExtractor::new();
        feed_all(&mut ex, &[NAME_KV, TRIGGER]);
        assert!(!ex.finish().incomplete_at_eof);
    }

    // -------------------------------------------------------------------------
    // Drivers
    // -------------------------------------------------------------------------

    #[test]
    fn test_extract_records_two_events_no_cross_contamination() {
        let lines = [
            NAME_KV,
            SIZE_KV,
            TYPE_PI,
            TRIGGER,
            "llama_model_loader: loaded meta data with 30 key-value pairs",
            "print_info: general.name     = Qwen2.5-Coder-7B-Instruct",
            "load_tensors: offloaded 29/29 layers to GPU",
        ];
        let extraction = extract_records(lines);

        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.records[0].name, "Mixtral-8x22B-Instruct-v0.1");
        assert_eq!(extraction.records[0].size_label, "141B");
        assert_eq!(extraction.records[0].gpu_offload, "5/57");
        assert_eq!(extraction.records[1].name, "Qwen2.5-Coder-7B-Instruct");
        assert_eq!(extraction.records[1].size_label, "7B");
        assert_eq!(extraction.records[1].gpu_offload, "29/29");
        assert_eq!(extraction.summary.records_emitted, 2);
        assert!(!extraction.summary.incomplete_at_eof);
    }

    #[test]
    fn test_dangling_name_at_eof_is_discarded() {
        let extraction = extract_records([NAME_KV, TRIGGER, "print_info: general.name = Late"]);
        assert_eq!(extraction.records.len(), 1);
        assert!(extraction.summary.incomplete_at_eof);
    }

    #[test]
    fn test_record_stream_matches_eager_driver() {
        let text = [NAME_KV, "noise", TRIGGER, NAME_PI, TYPE_PI, TRIGGER, TRIGGER].join("\n");

        let eager = extract_records(text.lines());
        let mut stream = RecordStream::new(Cursor::new(text.as_bytes()), "test");
        let lazy: Vec<_> = stream.by_ref().collect::<Result<_, _>>().unwrap();

        assert_eq!(lazy, eager.records);
        assert_eq!(stream.summary(), &eager.summary);
    }

    #[test]
    fn test_record_stream_yields_before_input_ends() {
        let text = format!("{NAME_KV}\n{TRIGGER}\nprint_info: general.name = Next\n");
        let mut stream = RecordStream::new(Cursor::new(text.into_bytes()), "test");

        let first = stream.next().unwrap().unwrap();
        assert_eq!(first.name, "Mixtral-8x22B-Instruct-v0.1");
        // Only the lines up to the trigger have been consumed.
        assert_eq!(stream.summary().lines_read, 2);

        assert!(stream.next().is_none());
        assert!(stream.summary().incomplete_at_eof);
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_record_stream_carries_state_across_inputs() {
        let mut first = RecordStream::new(Cursor::new(NAME_KV.as_bytes()), "a.log");
        assert!(first.next().is_none());
        let extractor = first.into_extractor();

        let mut second =
            RecordStream::with_extractor(Cursor::new(TRIGGER.as_bytes()), "b.log", extractor);
        let record = second.next().unwrap().unwrap();
        assert_eq!(record.name, "Mixtral-8x22B-Instruct-v0.1");
        assert!(second.next().is_none());
        assert!(!second.summary().incomplete_at_eof);
    }
}
