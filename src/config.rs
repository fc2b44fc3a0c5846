//! JSON runtime configuration for the `fit_quad` tool.
//!
//! ```json
//! {
//!   "target": {
//!     "topLeft": [1.94, 1.82],
//!     "topRight": [6.62, 0.4],
//!     "bottomRight": [7.54, 3.85],
//!     "bottomLeft": [2.95, 5.45]
//!   },
//!   "rectangle": { "width": 1440, "height": 900 },
//!   "search": { "initialRotationStep": 30, "reduction": "deterministic" },
//!   "output": { "format": "both", "jsonOut": "out/report.json" }
//! }
//! ```
//!
//! `search` and `output` are optional.

use crate::search::SearchParams;
use crate::types::Quad;
use nalgebra::Point2;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetConfig {
    pub top_left: [f64; 2],
    pub top_right: [f64; 2],
    pub bottom_right: [f64; 2],
    pub bottom_left: [f64; 2],
}

impl TargetConfig {
    pub fn to_quad(&self) -> Quad {
        let p = |v: [f64; 2]| Point2::new(v[0], v[1]);
        Quad::new(
            p(self.top_left),
            p(self.top_right),
            p(self.bottom_right),
            p(self.bottom_left),
        )
    }
}

/// Source rectangle; only its aspect ratio is used.
#[derive(Debug, Deserialize)]
pub struct RectangleConfig {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub json_out: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct FitConfig {
    pub target: TargetConfig,
    pub rectangle: RectangleConfig,
    #[serde(default)]
    pub search: SearchParams,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn parse_config(json: &str) -> Result<FitConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<FitConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
