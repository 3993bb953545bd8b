//! Syntactic gas cost model.
//!
//! The estimate counts declarations and loops and multiplies them by fixed weights from
//! [`GasConfig`]. It is not a measurement: the numbers are only comparable between two
//! estimates made with the same configuration.

use aurion_core::config::GasConfig;
use aurion_core::patterns::{self, count};
use aurion_core::{GasAnalysis, GasBreakdown, GasComplexity, Result};
use regex::Regex;
use tracing::debug;

pub struct GasEstimator {
    config: GasConfig,
    function: Regex,
    mapping: Regex,
    loops: Regex,
    external_call: Regex,
}

impl GasEstimator {
    pub fn new(config: GasConfig) -> Result<Self> {
        Ok(Self {
            config,
            function: patterns::compile(r"function\s+\w+")?,
            mapping: patterns::compile(r"mapping<")?,
            loops: patterns::compile(r"\b(?:for|while)\s*\(")?,
            external_call: patterns::compile(
                r"\.(?:call|delegatecall|staticcall)\b|\.transfer\(|\.send\(",
            )?,
        })
    }

    pub fn breakdown(&self, code: &str) -> GasBreakdown {
        GasBreakdown {
            functions: count(code, &self.function),
            mappings: count(code, &self.mapping),
            loops: count(code, &self.loops),
            external_calls: count(code, &self.external_call),
        }
    }

    /// `(min, max)` for a breakdown. Saturates at `u64::MAX` so `min <= max` holds for any
    /// configured weights.
    pub fn range(&self, breakdown: &GasBreakdown) -> (u64, u64) {
        let c = &self.config;
        let min = c
            .base_cost
            .saturating_add(c.function_cost.saturating_mul(breakdown.functions as u64))
            .saturating_add(c.mapping_cost.saturating_mul(breakdown.mappings as u64));
        let loop_gas = c.loop_cost.saturating_mul(breakdown.loops as u64);
        (min, min.saturating_add(loop_gas).saturating_add(c.range_headroom))
    }

    pub fn efficiency(&self, min: u64, max: u64) -> u8 {
        let avg = ((u128::from(min) + u128::from(max)) / 2) as u64;
        if avg == 0 {
            return 0;
        }
        let ratio = self.config.efficiency_baseline as f64 / avg as f64 * 100.0;
        ratio.clamp(0.0, 100.0).round() as u8
    }

    pub fn complexity(&self, breakdown: &GasBreakdown) -> GasComplexity {
        if breakdown.complex_constructs() > 3 {
            GasComplexity::High
        } else if breakdown.loops > 0 {
            GasComplexity::Medium
        } else {
            GasComplexity::Low
        }
    }

    pub fn analyze(&self, code: &str) -> GasAnalysis {
        let mut analysis = self.quick_estimate(code);
        if code.trim().is_empty() {
            return analysis;
        }

        analysis.optimization_tips = self.optimization_tips(code, &analysis.breakdown);
        analysis.comparison = Some(self.comparison(analysis.min_gas));
        analysis
    }

    /// Same range and efficiency as [`analyze`](Self::analyze) without tips or comparison.
    pub fn quick_estimate(&self, code: &str) -> GasAnalysis {
        if code.trim().is_empty() {
            return GasAnalysis {
                estimated_cost: GasAnalysis::format_range(0, 0),
                min_gas: 0,
                max_gas: 0,
                optimization_tips: Vec::new(),
                comparison: None,
                efficiency: 0,
                complexity: GasComplexity::Low,
                breakdown: GasBreakdown::default(),
            };
        }

        let breakdown = self.breakdown(code);
        let (min_gas, max_gas) = self.range(&breakdown);
        debug!(min_gas, max_gas, ?breakdown, "gas estimate");

        GasAnalysis {
            estimated_cost: GasAnalysis::format_range(min_gas, max_gas),
            min_gas,
            max_gas,
            optimization_tips: Vec::new(),
            comparison: None,
            efficiency: self.efficiency(min_gas, max_gas),
            complexity: self.complexity(&breakdown),
            breakdown,
        }
    }

    fn optimization_tips(&self, code: &str, breakdown: &GasBreakdown) -> Vec<String> {
        let mut tips = Vec::new();

        if breakdown.loops > 0 && code.contains(".length") {
            tips.push(
                "Loops over .length grow with the array: consider a mapping for lookups".to_string(),
            );
        }
        if code.contains("string memory") && code.contains("public") {
            tips.push("Use bytes32 instead of string memory for short fixed-size values".to_string());
        }
        if code.contains("public") && !code.contains("external") {
            tips.push(
                "Declare functions that are only called externally as external instead of public"
                    .to_string(),
            );
        }
        if !code.contains("@gas-optimized") {
            tips.push("Add the @gas-optimized decorator to enable Aurion gas optimizations".to_string());
        }
        if code.contains("indexed") {
            tips.push("Indexed event parameters allow efficient log filtering".to_string());
        }

        tips
    }

    fn comparison(&self, min_gas: u64) -> String {
        let solidity = (min_gas as f64 * self.config.solidity_multiplier).round();
        let saving = if solidity > 0.0 {
            ((solidity - min_gas as f64) / solidity * 100.0).round()
        } else {
            0.0
        };
        format!(
            "~{}% less gas than equivalent Solidity (~{} gas)",
            saving as i64, solidity as u64
        )
    }
}
