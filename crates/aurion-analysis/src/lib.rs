/*! Heuristic security scoring and gas estimation over raw Aurion source.
 *
 * Nothing here understands the program. Checks are substring and regex matches, the gas model
 * counts constructs, and the score is a deduction table. Results are useful as a first-pass
 * signal for a chat assistant or playground, not as an audit: expect false positives and misses.
 *
 * Every entry point is a pure function of its input. The free functions build their analyzers
 * with the default configuration; use [`Analyzer`] to supply your own.
 */

pub mod analyzer;
pub mod complexity;
pub mod gas;
pub mod scanner;

pub use analyzer::Analyzer;
pub use complexity::ComplexityAnalyzer;
pub use gas::GasEstimator;
pub use scanner::{CheckRegistry, Scanner, SecurityCheck};

use aurion_core::ast::Ast;
use aurion_core::config::{AurionConfig, GasConfig};
use aurion_core::{
    AnalysisStatus, ComplexityAnalysis, ComplexityLevel, ContractAnalysis, GasAnalysis,
    GasBreakdown, GasComplexity, SecurityAnalysis, SecurityIssue,
};
use tracing::warn;

pub fn run(code: &str) -> SecurityAnalysis {
    match Scanner::new() {
        Ok(scanner) => scanner.run(code),
        Err(e) => {
            warn!(error = %e, "security scanner unavailable");
            SecurityAnalysis::new(0, Vec::new(), vec![format!("Analysis unavailable: {}", e)], Vec::new())
        }
    }
}

pub fn verify(code: &str, ast: Option<&Ast>) -> Vec<SecurityIssue> {
    match Scanner::new() {
        Ok(scanner) => scanner.verify(code, ast),
        Err(e) => {
            warn!(error = %e, "security scanner unavailable");
            Vec::new()
        }
    }
}

pub fn analyze(code: &str) -> GasAnalysis {
    analyze_with_config(code, &GasConfig::default())
}

pub fn analyze_with_config(code: &str, config: &GasConfig) -> GasAnalysis {
    match GasEstimator::new(config.clone()) {
        Ok(estimator) => estimator.analyze(code),
        Err(e) => {
            warn!(error = %e, "gas estimator unavailable");
            unavailable_gas()
        }
    }
}

pub fn quick_estimate(code: &str) -> GasAnalysis {
    match GasEstimator::new(GasConfig::default()) {
        Ok(estimator) => estimator.quick_estimate(code),
        Err(e) => {
            warn!(error = %e, "gas estimator unavailable");
            unavailable_gas()
        }
    }
}

pub fn full_analysis(code: &str) -> ContractAnalysis {
    full_analysis_with_config(code, &AurionConfig::default())
}

pub fn full_analysis_with_config(code: &str, config: &AurionConfig) -> ContractAnalysis {
    match Analyzer::new(config) {
        Ok(analyzer) => analyzer.full_analysis(code),
        Err(e) => unavailable_analysis(e, AnalysisStatus::Fail),
    }
}

pub fn quick_analysis(code: &str) -> ContractAnalysis {
    match Analyzer::new(&AurionConfig::default()) {
        Ok(analyzer) => analyzer.quick_analysis(code),
        Err(e) => unavailable_analysis(e, AnalysisStatus::Quick),
    }
}

fn unavailable_gas() -> GasAnalysis {
    GasAnalysis {
        estimated_cost: GasAnalysis::format_range(0, 0),
        min_gas: 0,
        max_gas: 0,
        optimization_tips: Vec::new(),
        comparison: None,
        efficiency: 0,
        complexity: GasComplexity::Low,
        breakdown: GasBreakdown::default(),
    }
}

fn unavailable_analysis(error: aurion_core::AurionError, status: AnalysisStatus) -> ContractAnalysis {
    warn!(error = %error, "analyzer unavailable");
    ContractAnalysis {
        overall_score: 0,
        status,
        security: SecurityAnalysis::new(0, Vec::new(), Vec::new(), Vec::new()),
        gas: unavailable_gas(),
        complexity: ComplexityAnalysis {
            score: 0,
            level: ComplexityLevel::Low,
            maintainability: "unknown".to_string(),
        },
        recommendations: vec![format!("Analysis unavailable: {}", error)],
    }
}
