/// No search engine processes more than this many bytes per URL.
pub const DEFAULT_VALUE_MAX_LENGTH_BYTES: usize = 2083;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    value_max_length_bytes: usize,
}

impl ParserConfig {
    pub fn new(value_max_length_bytes: usize) -> Self {
        Self {
            value_max_length_bytes,
        }
    }

    pub fn value_max_length_bytes(&self) -> usize {
        self.value_max_length_bytes
    }

    /// Longest value kept after truncation. Two bytes are held back so a
    /// character cut in half still has room to decode as U+FFFD.
    pub fn value_limit_bytes(&self) -> usize {
        self.value_max_length_bytes.saturating_sub(2)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new(DEFAULT_VALUE_MAX_LENGTH_BYTES)
    }
}
