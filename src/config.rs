use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{NinePatchError, NinePatchResult};

/// Border scanning options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Rewrite stray border pixels to transparent when scanning mutably.
    pub normalize_stray_pixels: bool,
    /// Treat non-marker, non-transparent edge pixels as invalid (corners always are).
    pub strict_edges: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            normalize_stray_pixels: true,
            strict_edges: true,
        }
    }
}

/// What to do when a target size cannot hold the fixed segments of an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Scale fixed segments down proportionally; stretch segments collapse to 0.
    #[default]
    ShrinkFixed,
    /// Fail with [`NinePatchError::TargetTooSmall`].
    Reject,
}

/// Projection options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProjectOptions {
    /// Handling of targets smaller than the fixed segments.
    pub degenerate: DegeneratePolicy,
}

/// Top-level configuration, typically loaded from JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NinePatchConfig {
    /// Options for border scanning.
    pub scan: ScanOptions,
    /// Options for projection.
    pub project: ProjectOptions,
}

impl NinePatchConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> NinePatchResult<Self> {
        serde_json::from_str(s).map_err(|e| NinePatchError::config(e.to_string()))
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: &Path) -> NinePatchResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
