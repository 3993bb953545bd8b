use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AurionConfig {
    pub parser: ParserConfig,
    pub gas: GasConfig,
    pub emitter: EmitterConfig,
}

impl AurionConfig {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Restrict each contract's function and variable lists to its own brace-delimited body.
    /// Off by default: every contract sees every declaration in the source.
    pub scope_functions_to_contract: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasConfig {
    pub base_cost: u64,
    pub function_cost: u64,
    pub mapping_cost: u64,
    pub loop_cost: u64,
    pub range_headroom: u64,
    pub efficiency_baseline: u64,
    pub solidity_multiplier: f64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            base_cost: 21_000,
            function_cost: 5_000,
            mapping_cost: 20_000,
            loop_cost: 10_000,
            range_headroom: 50_000,
            efficiency_baseline: 1_000_000,
            solidity_multiplier: 1.35,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub solidity_pragma: String,
    pub license: String,
    pub bytecode_hex_limit: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            solidity_pragma: "^0.8.19".to_string(),
            license: "MIT".to_string(),
            bytecode_hex_limit: 128,
        }
    }
}
