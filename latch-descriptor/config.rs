use latch_core::LatchConfig;
use crate::builder::LatchBuilder;
use crate::error::{LatchError, LatchResult};

#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

/// Complete extractor configuration with metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DescriptorConfig {
    /// Threading configuration
    pub core: LatchConfig,
    /// Metadata
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub version: Option<String>,
}

impl DescriptorConfig {
    /// Create new configuration with default settings
    pub fn new() -> Self {
        Self {
            core: LatchConfig::default(),
            name: None,
            description: None,
            version: None,
        }
    }

    /// Everything on the calling thread
    pub fn sequential_preset() -> Self {
        Self {
            core: LatchConfig::sequential(),
            name: Some("Sequential".to_string()),
            description: Some("Single-threaded extraction on the calling thread".to_string()),
            version: Some("1.0".to_string()),
        }
    }

    /// One worker per logical CPU once there are enough keypoints
    pub fn parallel_preset() -> Self {
        Self {
            core: LatchConfig {
                multithread: true,
                n_threads: num_threads(),
            },
            name: Some("Parallel".to_string()),
            description: Some("Fan keypoints out over all available cores".to_string()),
            version: Some("1.0".to_string()),
        }
    }

    /// Add metadata to configuration
    pub fn with_metadata(mut self, name: &str, description: &str) -> Self {
        self.name = Some(name.to_string());
        self.description = Some(description.to_string());
        self.version = Some("1.0".to_string());
        self
    }

    /// Convert to LatchBuilder for further customization
    pub fn to_builder(self) -> LatchBuilder {
        LatchBuilder::from_config(self)
    }

    /// Generate human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "DescriptorConfig: {}, multithread={}, threads={}",
            self.name.as_deref().unwrap_or("custom"),
            self.core.multithread,
            self.core.n_threads
        )
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> LatchResult<()> {
        if self.core.n_threads == 0 {
            return Err(LatchError::InvalidThreadCount(self.core.n_threads));
        }
        Ok(())
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub fn save_json<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub fn load_json<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save configuration to TOML file
    #[cfg(feature = "serde")]
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Load configuration from TOML file
    #[cfg(feature = "serde")]
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Serialize to JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string
    #[cfg(feature = "serde")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserialize from TOML string
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn num_threads() -> usize {
    LatchConfig::default().n_threads
}
