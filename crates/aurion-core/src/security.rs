use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Points deducted from the security score for one issue of this severity.
    pub fn penalty(&self) -> i32 {
        match self {
            Self::Critical => 30,
            Self::High => 20,
            Self::Medium => 10,
            Self::Low => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Critical => "🔴",
            Self::High => "🟠",
            Self::Medium => "🟡",
            Self::Low => "🟢",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Function names that move funds or ownership and are expected to carry an access guard.
pub const SENSITIVE_FUNCTIONS: &[&str] = &["mint", "burn", "withdraw", "transferOwnership"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityIssue {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub line: Option<usize>,
    pub code_snippet: Option<String>,
    pub fix: String,
}

impl SecurityIssue {
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
            line: None,
            code_snippet: None,
            fix: fix.into(),
        }
    }

    pub fn at(mut self, location: Option<(usize, String)>) -> Self {
        if let Some((line, snippet)) = location {
            self.line = Some(line);
            self.code_snippet = Some(snippet);
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityLevel {
    Excellent,
    Good,
    Moderate,
    Poor,
    Critical,
}

impl SecurityLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            75..=89 => Self::Good,
            60..=74 => Self::Moderate,
            40..=59 => Self::Poor,
            _ => Self::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic result of the textual pattern scan. Not a verification result: false positives
/// and false negatives are expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAnalysis {
    pub score: u8,
    pub level: SecurityLevel,
    pub issues: Vec<SecurityIssue>,
    pub recommendations: Vec<String>,
    pub passed_checks: Vec<String>,
}

impl SecurityAnalysis {
    pub fn new(
        score: u8,
        issues: Vec<SecurityIssue>,
        recommendations: Vec<String>,
        passed_checks: Vec<String>,
    ) -> Self {
        let score = score.min(100);
        Self {
            score,
            level: SecurityLevel::from_score(score),
            issues,
            recommendations,
            passed_checks,
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn has_severe_issues(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity, Severity::Critical | Severity::High))
    }
}
