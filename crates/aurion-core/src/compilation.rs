use crate::ast::Ast;
use crate::AurionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Evm,
    Avm,
}

impl FromStr for Target {
    type Err = AurionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "evm" => Ok(Self::Evm),
            "avm" => Ok(Self::Avm),
            other => Err(AurionError::UnknownTarget(other.to_string())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evm => write!(f, "evm"),
            Self::Avm => write!(f, "avm"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for OptimizationLevel {
    type Err = AurionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AurionError::UnknownLevel(other.to_string())),
        }
    }
}

impl fmt::Display for OptimizationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbiEntryKind {
    Function,
    Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    View,
    Nonpayable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParam {
    pub name: String,
    #[serde(rename = "type")]
    pub abi_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
    #[serde(rename = "type")]
    pub kind: AbiEntryKind,
    pub name: String,
    pub inputs: Vec<AbiParam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<StateMutability>,
    /// `0x`-prefixed first four bytes of keccak256 over the canonical signature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// Diagnostic hex string standing in for bytecode. It is a truncated hex encoding of text and
/// cannot be deployed or executed on any VM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bytecode {
    pub kind: String,
    pub hex: String,
}

impl Bytecode {
    pub const PLACEHOLDER: &'static str = "placeholder";

    pub fn placeholder(hex: String) -> Self {
        Self {
            kind: Self::PLACEHOLDER.to_string(),
            hex,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == Self::PLACEHOLDER
    }

    /// Bytes represented by the hex string, excluding the `0x` prefix.
    pub fn byte_len(&self) -> usize {
        self.hex.trim_start_matches("0x").len() / 2
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationResult {
    pub success: bool,
    pub target: Target,
    pub optimized_code: String,
    pub abi: Vec<AbiEntry>,
    pub bytecode: Option<Bytecode>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub gas_estimate: u64,
    pub size: usize,
    pub source_hash: Option<String>,
    pub ast: Option<Ast>,
}

impl CompilationResult {
    pub fn failure(target: Target, errors: Vec<String>) -> Self {
        Self {
            success: false,
            target,
            errors,
            ..Self::default()
        }
    }
}
