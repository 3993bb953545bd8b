use crate::output::{MarkdownFormatter, OutputFormatter};
use aurion_core::{ContractAnalysis, SecurityIssue};

fn describe_issue(issue: &SecurityIssue) -> String {
    let location = issue
        .line
        .map(|line| format!(" (line {})", line))
        .unwrap_or_default();
    format!(
        "{} [{}] {}{}: {} Fix: {}",
        issue.severity.emoji(),
        issue.severity,
        issue.title,
        location,
        issue.description,
        issue.fix
    )
}

/// Renders an analysis as a report with the given formatter. `code` only contributes its size
/// and the snippet of the most severe finding.
pub fn format_analysis<F: OutputFormatter + ?Sized>(
    analysis: &ContractAnalysis,
    code: &str,
    formatter: &F,
) -> String {
    let mut out = Vec::new();

    out.push(formatter.format_title("Aurion Contract Analysis"));
    out.push(formatter.format_pair(
        "Overall Score",
        &format!("{}/100 ({})", analysis.overall_score, analysis.status),
    ));
    out.push(formatter.format_pair("Lines of Code", &code.lines().count().to_string()));

    let security = &analysis.security;
    out.push(formatter.format_section("Security"));
    out.push(formatter.format_pair(
        "Score",
        &format!("{}/100 ({})", security.score, security.level),
    ));
    if security.issues.is_empty() {
        out.push("No issues detected by the pattern scan.".to_string());
    } else {
        out.push(formatter.format_pair("Issues", &security.issues.len().to_string()));
        let issues: Vec<String> = security.issues.iter().map(describe_issue).collect();
        out.push(formatter.format_list(&issues));

        let worst = security.issues.iter().max_by_key(|i| i.severity);
        if let Some(snippet) = worst.and_then(|i| i.code_snippet.as_deref()) {
            out.push(formatter.format_code(snippet, Some("solidity")));
        }
    }
    if !security.passed_checks.is_empty() {
        out.push(formatter.format_pair("Passed Checks", &security.passed_checks.join(", ")));
    }

    let gas = &analysis.gas;
    out.push(formatter.format_section("Gas"));
    out.push(formatter.format_pair("Estimated Cost", &gas.estimated_cost));
    out.push(formatter.format_pair("Efficiency", &format!("{}/100", gas.efficiency)));
    out.push(formatter.format_pair("Complexity", &gas.complexity.to_string()));
    if let Some(comparison) = &gas.comparison {
        out.push(formatter.format_pair("Comparison", comparison));
    }
    if !gas.optimization_tips.is_empty() {
        out.push(formatter.format_list(&gas.optimization_tips));
    }

    let complexity = &analysis.complexity;
    out.push(formatter.format_section("Complexity"));
    out.push(formatter.format_pair(
        "Score",
        &format!("{}/100 ({})", complexity.score, complexity.level),
    ));
    out.push(formatter.format_pair("Maintainability", &complexity.maintainability));

    out.push(formatter.format_section("Recommendations"));
    out.push(formatter.format_list(&analysis.recommendations));

    out.join("\n")
}

/// Markdown report consumed by the chat assistant.
pub fn format_analysis_for_ai(analysis: &ContractAnalysis, code: &str) -> String {
    format_analysis(analysis, code, &MarkdownFormatter)
}
