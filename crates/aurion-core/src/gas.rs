use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GasComplexity {
    #[default]
    Low,
    Medium,
    High,
}

impl fmt::Display for GasComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Construct counts behind an estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasBreakdown {
    pub functions: usize,
    pub mappings: usize,
    pub loops: usize,
    pub external_calls: usize,
}

impl GasBreakdown {
    /// Loops, external calls and mappings taken together.
    pub fn complex_constructs(&self) -> usize {
        self.loops + self.external_calls + self.mappings
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasAnalysis {
    /// Rendered as `<min>-<max> gas`.
    pub estimated_cost: String,
    pub min_gas: u64,
    pub max_gas: u64,
    pub optimization_tips: Vec<String>,
    pub comparison: Option<String>,
    pub efficiency: u8,
    pub complexity: GasComplexity,
    pub breakdown: GasBreakdown,
}

impl GasAnalysis {
    pub fn format_range(min_gas: u64, max_gas: u64) -> String {
        format!("{}-{} gas", min_gas, max_gas)
    }
}
