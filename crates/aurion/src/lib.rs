/*! Everything Aurion in one import.
 *
 * The toolkit reads a Solidity-like contract language and answers three questions about it:
 * how risky it looks, roughly what it costs to run, and what it would look like as Solidity or
 * AVM text. All of it is heuristic. The scanner matches patterns, the gas model counts
 * constructs, and the compiler emits skeletons with placeholder bytecode.
 *
 * Each function below is a pure function of its input and safe to call from any thread.
 *
 * ```
 * let report = aurion::full_analysis("contract Foo { function mint(address to) public { } }");
 * assert_eq!(report.security.issues[0].title, "Missing Access Control");
 * ```
 */

pub mod compiler;
pub mod templates;

pub use aurion_analysis as analysis;
pub use aurion_core as core;
pub use aurion_emit as emit;
pub use aurion_parser as parser;
pub use aurion_transform as transform;

pub use aurion_core::{
    AnalysisStatus, Ast, AurionConfig, AurionError, CompilationResult, ContractAnalysis,
    GasAnalysis, OptimizationLevel, ParseResult, SecurityAnalysis, SecurityIssue, Severity,
    Target,
};

pub use aurion_analysis::{
    analyze, full_analysis, quick_analysis, quick_estimate, run, verify, Analyzer,
};
pub use aurion_emit::{format_analysis_for_ai, transpile};
pub use aurion_parser::parse;
pub use aurion_transform::{analyze_optimizations, optimize};

pub use compiler::{source_hash, AurionCompiler};
pub use templates::{generate_premium_template, TemplateKind};

pub fn compile(code: &str, target: Target, level: OptimizationLevel) -> CompilationResult {
    AurionCompiler::default().compile(code, target, level)
}
