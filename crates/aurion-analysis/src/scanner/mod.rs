//! Textual vulnerability checks and the deduction-based security score.
//!
//! Each check is a pure function of the raw source string, so the set is order-independent and
//! can be extended by registering another [`SecurityCheck`]. The score is a demo heuristic:
//! substring matches produce false positives and miss real bugs.

pub mod checks;

use aurion_core::ast::Ast;
use aurion_core::{Result, SecurityAnalysis, SecurityIssue, Severity};
use checks::{
    AccessControlCheck, GasLimitLoopCheck, IntegerOverflowCheck, ReentrancyCheck,
    UncheckedCallCheck, UnprotectedInitCheck,
};
use tracing::debug;

const BASE_SCORE: i32 = 100;
const SECURE_DECORATOR_BONUS: i32 = 10;
const ACCESS_CONTROL_BONUS: i32 = 15;
const ASSERTION_BONUS: i32 = 10;

pub trait SecurityCheck: Send + Sync {
    fn id(&self) -> &'static str;

    fn title(&self) -> &'static str;

    fn severity(&self) -> Severity;

    fn recommendation(&self) -> &'static str;

    fn detect(&self, code: &str) -> Vec<SecurityIssue>;
}

pub struct CheckRegistry {
    checks: Vec<Box<dyn SecurityCheck>>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(ReentrancyCheck);
        registry.register(AccessControlCheck::new()?);
        registry.register(IntegerOverflowCheck::new()?);
        registry.register(UncheckedCallCheck);
        registry.register(GasLimitLoopCheck);
        registry.register(UnprotectedInitCheck);
        Ok(registry)
    }

    pub fn register<C: SecurityCheck + 'static>(&mut self, check: C) {
        self.checks.push(Box::new(check));
    }

    pub fn get(&self, id: &str) -> Option<&dyn SecurityCheck> {
        self.checks
            .iter()
            .find(|c| c.id() == id)
            .map(|c| c.as_ref())
    }

    pub fn list_ids(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.id()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn SecurityCheck> {
        self.checks.iter().map(|c| c.as_ref())
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Scanner {
    registry: CheckRegistry,
}

impl Scanner {
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(CheckRegistry::with_defaults()?))
    }

    pub fn with_registry(registry: CheckRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    pub fn run(&self, code: &str) -> SecurityAnalysis {
        if code.trim().is_empty() {
            return SecurityAnalysis::new(
                0,
                Vec::new(),
                vec!["Provide contract source code to analyze".to_string()],
                Vec::new(),
            );
        }

        let mut issues = Vec::new();
        let mut recommendations = Vec::new();
        let mut passed = Vec::new();

        for check in self.registry.iter() {
            let found = check.detect(code);
            if found.is_empty() {
                passed.push(check.title().to_string());
            } else {
                recommendations.push(check.recommendation().to_string());
                issues.extend(found);
            }
        }

        if !code.contains("@secure") {
            recommendations.push("Add the @secure decorator once the contract has been reviewed".to_string());
        }
        if issues.is_empty() {
            recommendations.push(
                "No known vulnerability patterns detected; keep testing before deployment"
                    .to_string(),
            );
        }

        let score = score(code, &issues);
        debug!(score, issues = issues.len(), "security scan complete");

        SecurityAnalysis::new(score, issues, recommendations, passed)
    }

    /// Issues only, for the compile pipeline. With an AST, access-control findings point at the
    /// declaring line of the parsed function.
    pub fn verify(&self, code: &str, ast: Option<&Ast>) -> Vec<SecurityIssue> {
        let mut issues: Vec<SecurityIssue> = self
            .registry
            .iter()
            .flat_map(|check| check.detect(code))
            .collect();

        if let Some(ast) = ast {
            for issue in issues.iter_mut().filter(|i| i.title == "Missing Access Control") {
                let declared = ast
                    .body
                    .iter()
                    .find(|f| issue.description.contains(&format!("'{}'", f.name)));
                if let Some(function) = declared {
                    issue.line = Some(function.line);
                }
            }
        }

        issues
    }
}

/// 100 plus bonuses, minus per-issue penalties, clamped to `[0, 100]`.
pub fn score(code: &str, issues: &[SecurityIssue]) -> u8 {
    let mut score = BASE_SCORE;

    if code.contains("@secure") {
        score += SECURE_DECORATOR_BONUS;
    }
    if code.contains("onlyOwner") || code.contains("modifier") {
        score += ACCESS_CONTROL_BONUS;
    }
    if code.contains("require(") || code.contains("assert(") {
        score += ASSERTION_BONUS;
    }

    score -= issues.iter().map(|i| i.severity.penalty()).sum::<i32>();
    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_ids() {
        let registry = CheckRegistry::with_defaults().unwrap();
        assert_eq!(
            registry.list_ids(),
            vec![
                "reentrancy",
                "access-control",
                "integer-overflow",
                "unchecked-call",
                "gas-limit-loop",
                "unprotected-init",
            ]
        );
        assert_eq!(
            registry.get("reentrancy").map(|c| c.severity()),
            Some(Severity::Critical)
        );
    }

    #[test]
    fn test_score_clamps_low() {
        let issues: Vec<SecurityIssue> = (0..5)
            .map(|_| SecurityIssue::new(Severity::Critical, "t", "d", "f"))
            .collect();
        assert_eq!(score("contract A {}", &issues), 0);
    }

    #[test]
    fn test_score_bonuses_offset_penalties() {
        let issues = vec![SecurityIssue::new(Severity::High, "t", "d", "f")];
        // 100 + 10 (require) - 20
        assert_eq!(score("require(x);", &issues), 90);
    }

    #[test]
    fn test_empty_registry_scores_clean_code_full() {
        let scanner = Scanner::with_registry(CheckRegistry::new());
        let analysis = scanner.run("contract A { x = a.call.value(1)(); }");
        assert!(analysis.issues.is_empty());
        assert_eq!(analysis.score, 100);
    }
}
