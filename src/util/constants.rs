// LoadSleuth - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Referenced by DevWorkflow Part A Rule 11 (explicit named-constant limits).

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LoadSleuth";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LoadSleuth";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Input limits
// =============================================================================

/// Maximum size of a single input line in bytes. Longer lines are truncated
/// before classification so a file with no newlines cannot grow the read
/// buffer without bound. llama.cpp metadata lines are well under 1 KB; the
/// largest real-world lines (tokenizer arrays) stay below this.
pub const MAX_LINE_BYTES: usize = 64 * 1024; // 64 KB

/// Pseudo-path meaning "read standard input".
pub const STDIN_PATH: &str = "-";

/// Display name used for standard input in logs and errors.
pub const STDIN_DISPLAY_NAME: &str = "<stdin>";

// =============================================================================
// Extraction vocabulary
// =============================================================================

/// Size label emitted when no source (explicit, print_info, or name
/// inference) yields one.
pub const SIZE_LABEL_SENTINEL: &str = "N/A";

/// Placeholder llama.cpp prints for `model type` when it cannot classify the
/// architecture. Never used as a size label.
pub const PLACEHOLDER_SIZE_LABEL: &str = "?B";

// =============================================================================
// Report
// =============================================================================

/// Table column headers, in display order.
pub const HEADER_MODEL_NAME: &str = "Model Name";
pub const HEADER_SIZE_LABEL: &str = "Size Label";
pub const HEADER_GPU_OFFLOAD: &str = "GPU Offload";

/// Line printed instead of a table when no records were extracted.
pub const NO_RECORDS_MESSAGE: &str = "No model loading events found matching the criteria.";

/// CSV header row for the `csv` output format.
pub const CSV_HEADER: [&str; 3] = ["name", "size_label", "gpu_offload"];

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Kept at `warn` because the report shares the terminal
/// with the log output (stderr) and must stay readable.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Maximum length of a log line included in debug output.
/// Prevents accidental exposure of sensitive data in long lines.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
