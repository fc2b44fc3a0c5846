//! Per-round trace of a search run.
//!
//! The finder records one [`RoundReport`] per grid scan. The trace is purely
//! informational: it is produced after each round completes and has no
//! influence on the search itself.

use crate::search::SearchRegion;
use crate::types::ShapeSettings;
use serde::Serialize;

/// Summary of one grid scan.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundReport {
    /// Zero-based round index.
    pub round: usize,
    pub rotation_step: f64,
    pub width_step: f64,
    pub region: SearchRegion,
    pub evaluations: usize,
    pub best: ShapeSettings,
    pub elapsed_ms: f64,
}

/// All rounds of one search, in execution order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTrace {
    pub rounds: Vec<RoundReport>,
    pub total_ms: f64,
}

impl SearchTrace {
    pub fn push(&mut self, report: RoundReport) {
        self.rounds.push(report);
    }

    /// Total objective evaluations across all rounds.
    pub fn evaluations(&self) -> usize {
        self.rounds.iter().map(|r| r.evaluations).sum()
    }

    /// Best score after each round.
    pub fn scores(&self) -> Vec<f64> {
        self.rounds.iter().map(|r| r.best.score).collect()
    }
}

/// Final settings together with the trace that produced them.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    pub result: ShapeSettings,
    pub trace: SearchTrace,
}
