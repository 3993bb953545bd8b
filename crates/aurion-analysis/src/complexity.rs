use aurion_core::patterns::{self, count};
use aurion_core::{ComplexityAnalysis, ComplexityLevel, Result};
use regex::Regex;

pub struct ComplexityAnalyzer {
    function: Regex,
    loops: Regex,
    branches: Regex,
}

impl ComplexityAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            function: patterns::compile(r"\bfunction\s+\w+")?,
            loops: patterns::compile(r"\b(?:for|while)\s*\(")?,
            branches: patterns::compile(r"\bif\s*\(|\belse\b|\?")?,
        })
    }

    /// One point per function and branch, two per loop.
    pub fn points(&self, code: &str) -> usize {
        count(code, &self.function) + 2 * count(code, &self.loops) + count(code, &self.branches)
    }

    pub fn analyze(&self, code: &str) -> ComplexityAnalysis {
        let points = self.points(code);

        let level = match points {
            0..=10 => ComplexityLevel::Low,
            11..=25 => ComplexityLevel::Medium,
            _ => ComplexityLevel::High,
        };
        let maintainability = match level {
            ComplexityLevel::Low => "high",
            ComplexityLevel::Medium => "medium",
            ComplexityLevel::High => "low",
        };

        ComplexityAnalysis {
            score: 100usize.saturating_sub(points * 3) as u8,
            level,
            maintainability: maintainability.to_string(),
        }
    }
}
