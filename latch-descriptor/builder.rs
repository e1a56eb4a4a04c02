use latch_core::LatchConfig;
use crate::config::DescriptorConfig;
use crate::error::LatchResult;
use crate::extractor::LatchExtractor;

/// Builder for creating a `LatchExtractor`
#[derive(Debug, Clone)]
pub struct LatchBuilder {
    config: LatchConfig,
}

impl LatchBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: LatchConfig::default(),
        }
    }

    /// Set the maximum number of worker threads
    pub fn threads(mut self, n_threads: usize) -> Self {
        self.config.n_threads = n_threads;
        self
    }

    /// Enable or disable multithreaded extraction
    pub fn multithread(mut self, enable: bool) -> Self {
        self.config.multithread = enable;
        self
    }

    /// Apply the sequential preset
    pub fn preset_sequential(mut self) -> Self {
        self.config = DescriptorConfig::sequential_preset().core;
        self
    }

    /// Apply the parallel preset
    pub fn preset_parallel(mut self) -> Self {
        self.config = DescriptorConfig::parallel_preset().core;
        self
    }

    /// Build the `LatchExtractor`
    pub fn build(self) -> LatchResult<LatchExtractor> {
        LatchExtractor::new(self.config)
    }

    /// Generate a summary of the builder's configuration
    pub fn summary(&self) -> String {
        self.clone().to_config().summary()
    }

    /// Create a builder from an existing `DescriptorConfig`
    pub fn from_config(config: DescriptorConfig) -> Self {
        Self { config: config.core }
    }

    /// Convert the builder into a `DescriptorConfig`
    pub fn to_config(self) -> DescriptorConfig {
        DescriptorConfig {
            core: self.config,
            name: None,
            description: None,
            version: None,
        }
    }
}

impl Default for LatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
