use crate::complexity::ComplexityAnalyzer;
use crate::gas::GasEstimator;
use crate::scanner::Scanner;
use aurion_core::config::AurionConfig;
use aurion_core::{
    AnalysisStatus, ComplexityLevel, ContractAnalysis, GasAnalysis, Result, SecurityAnalysis,
};

const SECURITY_WEIGHT: f64 = 0.7;
const GAS_WEIGHT: f64 = 0.3;
const PASS_THRESHOLD: u8 = 70;

/// Scanner and estimator behind one entry point.
pub struct Analyzer {
    scanner: Scanner,
    estimator: GasEstimator,
    complexity: ComplexityAnalyzer,
}

impl Analyzer {
    pub fn new(config: &AurionConfig) -> Result<Self> {
        Ok(Self {
            scanner: Scanner::new()?,
            estimator: GasEstimator::new(config.gas.clone())?,
            complexity: ComplexityAnalyzer::new()?,
        })
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn estimator(&self) -> &GasEstimator {
        &self.estimator
    }

    pub fn full_analysis(&self, code: &str) -> ContractAnalysis {
        let security = self.scanner.run(code);
        let gas = self.estimator.analyze(code);
        let status = if security.score >= PASS_THRESHOLD {
            AnalysisStatus::Pass
        } else {
            AnalysisStatus::Fail
        };
        self.assemble(code, security, gas, status)
    }

    pub fn quick_analysis(&self, code: &str) -> ContractAnalysis {
        let security = self.scanner.run(code);
        let gas = self.estimator.quick_estimate(code);
        self.assemble(code, security, gas, AnalysisStatus::Quick)
    }

    fn assemble(
        &self,
        code: &str,
        security: SecurityAnalysis,
        gas: GasAnalysis,
        status: AnalysisStatus,
    ) -> ContractAnalysis {
        let complexity = self.complexity.analyze(code);
        let overall = (SECURITY_WEIGHT * security.score as f64 + GAS_WEIGHT * gas.efficiency as f64)
            .round()
            .clamp(0.0, 100.0) as u8;

        let mut recommendations = Vec::new();
        if security.score < 80 {
            recommendations
                .push("Address the reported security issues before deployment".to_string());
        }
        if security.has_severe_issues() {
            recommendations.push("Fix critical and high severity issues immediately".to_string());
        }
        if gas.efficiency < 70 {
            recommendations.push(
                "Optimize gas usage: review loops, storage layout and function visibility"
                    .to_string(),
            );
        }
        if complexity.level == ComplexityLevel::High {
            recommendations
                .push("Split the contract into smaller modules to keep it maintainable".to_string());
        }
        if recommendations.is_empty() {
            recommendations.push(
                "Contract looks solid. Consider a professional audit before mainnet deployment"
                    .to_string(),
            );
        }

        ContractAnalysis {
            overall_score: overall,
            status,
            security,
            gas,
            complexity,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> Analyzer {
        Analyzer::new(&AurionConfig::default()).unwrap()
    }

    #[test]
    fn test_overall_is_weighted_blend() {
        let analysis = analyzer().full_analysis("contract Foo { function mint(address to) public { } }");
        // security 80, efficiency 100
        assert_eq!(analysis.security.score, 80);
        assert_eq!(analysis.gas.efficiency, 100);
        assert_eq!(analysis.overall_score, 86);
        assert_eq!(analysis.status, AnalysisStatus::Pass);
        assert!(analysis
            .recommendations
            .contains(&"Fix critical and high severity issues immediately".to_string()));
    }

    #[test]
    fn test_fail_below_threshold() {
        let code = "contract Foo {\n  function pay() public { total = total + 1; msg.sender.call.value(1)(); }\n}";
        let analysis = analyzer().full_analysis(code);
        assert!(analysis.security.score < 70);
        assert_eq!(analysis.status, AnalysisStatus::Fail);
    }

    #[test]
    fn test_quick_status() {
        let analysis = analyzer().quick_analysis("contract Foo { init() {} }");
        assert_eq!(analysis.status, AnalysisStatus::Quick);
        assert!(analysis.gas.optimization_tips.is_empty());
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let analysis = analyzer().full_analysis("");
        assert_eq!(analysis.overall_score, 0);
        assert_eq!(analysis.status, AnalysisStatus::Fail);
    }

    #[test]
    fn test_clean_contract_gets_positive_note() {
        let code = "@secure @safe @gas-optimized\ncontract Foo {\n  init() external onlyOwner { require(ok); }\n}";
        let analysis = analyzer().full_analysis(code);
        assert_eq!(analysis.security.score, 100);
        assert_eq!(analysis.recommendations.len(), 1);
        assert!(analysis.recommendations[0].starts_with("Contract looks solid"));
    }
}
