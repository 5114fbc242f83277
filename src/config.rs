//! Configuration for the generator and verifier tools
//!
//! This module provides configuration structures and validation logic
//! for both tools. Neither tool reads configuration files or environment
//! variables; configuration is constructed in code and passed in.

use crate::error::{ConfigError, ConfigResult};

/// Default width of a generated line, excluding the newline terminator
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Default size of a comparison block in bytes
pub const DEFAULT_BLOCK_SIZE: usize = 1000;

/// Configuration for random test file generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Maximum number of characters per line, excluding the terminator
    pub line_width: usize,
}

/// Configuration for the randomized block verification scan
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Size of each comparison block in bytes
    pub block_size: usize,
    /// Hint to bypass the OS read cache when opening the input files.
    /// A no-op where the platform offers no such control.
    pub disable_read_cache: bool,
}

impl GeneratorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.line_width == 0 {
            return Err(ConfigError::ZeroLineWidth);
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl VerifierConfig {
    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        Ok(())
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            disable_read_cache: false,
        }
    }
}
