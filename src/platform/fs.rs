// LoadSleuth - platform/fs.rs
//
// Input opening. Turns CLI input arguments (file paths or "-") into
// buffered readers for the core extractor.

use crate::util::constants::{STDIN_DISPLAY_NAME, STDIN_PATH};
use crate::util::error::LoadSleuthError;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// An opened input: its reader plus a display name for logs and errors.
pub struct InputSource {
    pub name: String,
    pub reader: Box<dyn BufRead>,
}

impl std::fmt::Debug for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputSource").field("name", &self.name).finish()
    }
}

/// Returns true if `path` is the stdin pseudo-path `-`.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Open one input. `-` means standard input; anything else is a file path.
pub fn open_input(path: &Path) -> Result<InputSource, LoadSleuthError> {
    if is_stdin(path) {
        return Ok(InputSource {
            name: STDIN_DISPLAY_NAME.to_string(),
            reader: Box::new(io::stdin().lock()),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| LoadSleuthError::Io {
        path: path.to_path_buf(),
        operation: "open input",
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "Opened input file");

    Ok(InputSource {
        name: path.display().to_string(),
        reader: Box::new(BufReader::new(file)),
    })
}

/// Normalise the CLI input list: no arguments means stdin.
pub fn resolve_inputs(paths: &[PathBuf]) -> Vec<PathBuf> {
    if paths.is_empty() {
        vec![PathBuf::from(STDIN_PATH)]
    } else {
        paths.to_vec()
    }
}
