//! Engine configuration.

/// Configuration for [`partition_and_chunk`](crate::partition_and_chunk).
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// Approximate token budget per prose chunk.
    pub max_tokens: usize,
    /// Trailing words carried from one prose chunk into the next.
    pub overlap_tokens: usize,
    /// Characters assumed per token.
    ///
    /// A fixed approximation, kept as an explicit policy so a real tokenizer
    /// can replace it without touching the windowing logic.
    pub chars_per_token: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            overlap_tokens: 50,
            chars_per_token: 4,
        }
    }
}

impl SegmenterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for custom configuration.
    #[must_use]
    pub fn builder() -> SegmenterConfigBuilder {
        SegmenterConfigBuilder::new()
    }

    /// Character budget derived from the token budget.
    #[must_use]
    pub const fn max_chars(&self) -> usize {
        self.max_tokens * self.chars_per_token
    }
}

/// Builder for segmenter configuration.
#[derive(Debug, Default)]
pub struct SegmenterConfigBuilder {
    config: SegmenterConfig,
}

impl SegmenterConfigBuilder {
    /// Creates a new configuration builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SegmenterConfig::default(),
        }
    }

    /// Sets the approximate token budget per prose chunk.
    #[must_use]
    pub const fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.config.max_tokens = max_tokens;
        self
    }

    /// Sets the number of trailing words carried across a chunk split.
    #[must_use]
    pub const fn overlap_tokens(mut self, overlap_tokens: usize) -> Self {
        self.config.overlap_tokens = overlap_tokens;
        self
    }

    /// Sets the character-per-token approximation ratio.
    #[must_use]
    pub const fn chars_per_token(mut self, chars_per_token: usize) -> Self {
        self.config.chars_per_token = chars_per_token;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> SegmenterConfig {
        self.config
    }
}
