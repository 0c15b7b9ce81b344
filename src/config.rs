//! Configuration file schema for javadoc-gaps.
//!
//! The file is optional. Every field can also be given on the command line,
//! and command-line values take precedence.

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file names to search for in the working directory.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["javadoc-gaps.yaml", ".javadoc-gaps.yaml"];

/// Default report file name.
pub const DEFAULT_OUTPUT: &str = "javadoc_report.txt";

/// Supported report formats.
pub const FORMATS: &[&str] = &["text", "json"];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Glob patterns for paths to leave out of the scan (e.g., "**/generated/**").
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    /// Report file path (default: javadoc_report.txt).
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Report format: "text" (default) or "json".
    #[serde(default)]
    pub format: Option<String>,
    /// Exit with a failure code when the finding count exceeds this value.
    #[serde(default)]
    pub max_findings: Option<usize>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Returns the report path (defaults to `javadoc_report.txt`).
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Returns the report format (defaults to "text").
    pub fn get_format(&self) -> &str {
        self.format.as_deref().unwrap_or("text")
    }

    /// Compile `excluded_paths` into a matcher.
    /// Uses globset, which supports `**` for recursive directory matching.
    pub fn excluded_globset(&self) -> anyhow::Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.excluded_paths {
            let glob = Glob::new(pattern).map_err(|e| {
                anyhow::anyhow!("invalid excluded_paths pattern {:?}: {}", pattern, e)
            })?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }
}

/// Discover a config file in the current directory.
pub fn discover() -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// Validate a config.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    if let Some(format) = &config.format {
        if !FORMATS.contains(&format.as_str()) {
            anyhow::bail!("invalid format {:?}, must be 'text' or 'json'", format);
        }
    }

    // Validate excluded_paths glob patterns compile
    config.excluded_globset()?;

    Ok(())
}
