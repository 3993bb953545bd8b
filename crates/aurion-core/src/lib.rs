/*! Core data model for Aurion contract analysis.
 *
 * Every stage of the toolkit (parser, scanner, gas estimator, optimizer, transpiler) speaks in
 * the records defined here. They are plain values: created per request, never shared, and
 * serializable so a UI can render them directly.
 */

pub mod analysis;
pub mod ast;
pub mod compilation;
pub mod config;
pub mod gas;
pub mod patterns;
pub mod security;
pub mod types;

pub use analysis::{AnalysisStatus, ComplexityAnalysis, ComplexityLevel, ContractAnalysis};
pub use ast::{
    Ast, Contract, Event, Function, Param, ParseResult, Token, TokenKind, Variable, Visibility,
};
pub use compilation::{
    AbiEntry, AbiEntryKind, AbiParam, Bytecode, CompilationResult, OptimizationLevel,
    StateMutability, Target,
};
pub use config::{AurionConfig, EmitterConfig, GasConfig, ParserConfig};
pub use gas::{GasAnalysis, GasBreakdown, GasComplexity};
pub use security::{
    SecurityAnalysis, SecurityIssue, SecurityLevel, Severity, SENSITIVE_FUNCTIONS,
};
pub use types::DataType;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AurionError {
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Emit error: {0}")]
    Emit(#[from] std::fmt::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Unknown compilation target: {0}")]
    UnknownTarget(String),
    #[error("Unknown optimization level: {0}")]
    UnknownLevel(String),
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AurionError>;
