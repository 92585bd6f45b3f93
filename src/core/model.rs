// LoadSleuth - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies (Atlas Layer Rule: Core depends on std only).
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Model Load Record (output of extraction)
// =============================================================================

/// One completed model-load event.
///
/// Built only when a GPU-offload trigger line is seen while a model name is
/// established; immutable afterwards. Every field is plain text exactly as
/// resolved from the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelLoadRecord {
    /// Model name (`general.name`).
    pub name: String,

    /// Resolved size label, e.g. `70B`, `8x22B`, or `N/A` when no source
    /// contributed one.
    pub size_label: String,

    /// `"<offloaded>/<total>"` layer counts, preserved as literal text.
    pub gpu_offload: String,
}

// =============================================================================
// Extraction State (per-generation working set)
// =============================================================================

/// Partial facts gathered for the model-load event currently in progress.
///
/// One instance lives for the whole run; it is cleared after every emission,
/// which splits the run into generations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionState {
    /// Set by the loader-dump name line (always) or the print_info name line
    /// (only while unset).
    pub model_name: Option<String>,

    /// Set only by the loader-dump `general.size_label` line.
    pub explicit_size_label: Option<String>,

    /// Set only by the print_info `model type` line (never to `?B`).
    pub inferred_size_label: Option<String>,
}

impl ExtractionState {
    /// Clears every field, starting a new generation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true if no field has been set in this generation.
    pub fn is_empty(&self) -> bool {
        self.model_name.is_none()
            && self.explicit_size_label.is_none()
            && self.inferred_size_label.is_none()
    }
}

// =============================================================================
// Line classification
// =============================================================================

/// Recognised categories of input line, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `llama_model_loader: - kv N: general.name str = ...`
    NamePrimary,
    /// `print_info: general.name = ...`
    NameFallback,
    /// `llama_model_loader: - kv N: general.size_label str = ...`
    SizePrimary,
    /// `print_info: model type = ...`
    SizeFallback,
    /// `load_tensors: offloaded X/Y layers to GPU`
    Trigger,
}

impl LineKind {
    /// Returns all variants in classification order.
    pub fn all() -> &'static [LineKind] {
        &[
            LineKind::NamePrimary,
            LineKind::NameFallback,
            LineKind::SizePrimary,
            LineKind::SizeFallback,
            LineKind::Trigger,
        ]
    }

    /// Short label for debug output.
    pub fn label(&self) -> &'static str {
        match self {
            LineKind::NamePrimary => "name/loader",
            LineKind::NameFallback => "name/print_info",
            LineKind::SizePrimary => "size/loader",
            LineKind::SizeFallback => "size/print_info",
            LineKind::Trigger => "gpu-offload",
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Extraction Summary
// =============================================================================

/// Counters describing one extraction run. Purely observational: they never
/// influence which records are emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    /// Total lines read, blank lines included.
    pub lines_read: u64,

    /// Lines that matched any recognised category.
    pub lines_matched: u64,

    /// Records emitted.
    pub records_emitted: u64,

    /// Trigger lines ignored because no model name was established.
    pub triggers_dropped: u64,

    /// True if a name was still pending (no trailing trigger) at end of stream.
    pub incomplete_at_eof: bool,
}

/// Eagerly collected output of a full extraction.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Records in emission order.
    pub records: Vec<ModelLoadRecord>,
    /// Run counters.
    pub summary: ExtractionSummary,
}

// =============================================================================
// Output format
// =============================================================================

/// How extracted records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width three-column table (needs every record before rendering).
    #[default]
    Table,
    /// CSV with a header row, streamed.
    Csv,
    /// Pretty-printed JSON array (needs every record before rendering).
    Json,
    /// One JSON object per line, streamed.
    Jsonl,
}

impl OutputFormat {
    /// Returns all variants.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Table,
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::Jsonl,
        ]
    }

    /// Lowercase name as used in config.toml and on the CLI.
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Parses a format name (case-insensitive).
    pub fn from_label(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Self::all().iter().copied().find(|f| f.label() == lower)
    }

    /// Whether records can be written one at a time as they are resolved.
    pub fn is_streaming(&self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Jsonl)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
