//! Configuration for the draw

use crate::error::{DrawError, Result};
use crate::generator::AssignmentGenerator;
use crate::{DEFAULT_NAME_SEPARATOR, DEFAULT_PARTICIPANTS_FILE};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How raw names become participants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Mail domain appended to derived addresses (e.g. "example.org")
    pub domain: String,

    /// Replaces whitespace runs in a name when deriving the address
    pub separator: String,

    /// Lowercase the name before deriving the address
    pub lowercase: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            separator: DEFAULT_NAME_SEPARATOR.to_string(),
            lowercase: true,
        }
    }
}

impl LoaderConfig {
    /// Default loader settings for the given mail domain
    pub fn with_domain(domain: impl Into<String>) -> Self {
        Self { domain: domain.into(), ..Default::default() }
    }

    /// Domain without a leading '@' or surrounding whitespace
    pub fn normalized_domain(&self) -> &str {
        let domain = self.domain.trim();
        domain.strip_prefix('@').unwrap_or(domain)
    }

    /// Validate the loader settings
    pub fn validate(&self) -> Result<()> {
        let domain = self.normalized_domain();
        if domain.is_empty() {
            return Err(DrawError::config("mail domain is not set"));
        }
        if domain.contains('@') || domain.chars().any(char::is_whitespace) {
            return Err(DrawError::config(format!("invalid mail domain: {}", self.domain)));
        }
        if self.separator.chars().any(|c| c.is_whitespace() || c == '@') {
            return Err(DrawError::config(format!(
                "invalid name separator: {:?}",
                self.separator
            )));
        }
        Ok(())
    }
}

/// Configuration for a complete draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Plain-text participant list, one name per line
    pub participants_file: PathBuf,

    /// Fixed seed for a reproducible draw; drawn from the OS when absent
    pub seed: Option<u64>,

    /// Participant loader settings
    pub loader: LoaderConfig,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            participants_file: PathBuf::from(DEFAULT_PARTICIPANTS_FILE),
            seed: None,
            loader: LoaderConfig::default(),
        }
    }
}

impl DrawConfig {
    /// Generator seeded according to this configuration
    pub fn generator(&self) -> AssignmentGenerator<StdRng> {
        match self.seed {
            Some(seed) => AssignmentGenerator::seeded(seed),
            None => AssignmentGenerator::from_entropy(),
        }
    }

    /// Validate the draw settings
    pub fn validate(&self) -> Result<()> {
        if self.participants_file.as_os_str().is_empty() {
            return Err(DrawError::config("participant list path is empty"));
        }
        self.loader.validate()
    }
}
