use serde::{Deserialize, Serialize};

/// Default size of the scanner's read window
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Default upper bound for a single lexeme
pub const DEFAULT_MAX_LEXEME_SIZE: usize = 64 * 1024;

/// Buffering limits for a [`Scanner`](super::Scanner)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Bytes allocated for the read window up front
    pub initial_buffer_size: usize,
    /// Largest lexeme the scanner will buffer before failing
    pub max_lexeme_size: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            initial_buffer_size: DEFAULT_BUFFER_SIZE,
            max_lexeme_size: DEFAULT_MAX_LEXEME_SIZE,
        }
    }
}

impl ScannerConfig {
    /// Sets the initial read window size
    pub fn with_initial_buffer_size(mut self, size: usize) -> Self {
        self.initial_buffer_size = size;
        self
    }

    /// Sets the largest allowed lexeme
    pub fn with_max_lexeme_size(mut self, size: usize) -> Self {
        self.max_lexeme_size = size;
        self
    }

    /// Returns the config with zero or inconsistent sizes clamped
    pub(crate) fn normalized(self) -> Self {
        let max_lexeme_size = self.max_lexeme_size.max(1);
        ScannerConfig {
            initial_buffer_size: self.initial_buffer_size.clamp(1, max_lexeme_size),
            max_lexeme_size,
        }
    }
}
