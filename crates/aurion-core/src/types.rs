use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed Aurion to Solidity type table. Anything not in the table is treated as `uint256`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Uint256,
    Address,
    String,
    Bool,
    Bytes32,
    Mapping(Box<DataType>, Box<DataType>),
}

impl DataType {
    pub fn from_source(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(inner) = raw.strip_prefix("mapping") {
            return Self::parse_mapping(inner);
        }

        match raw {
            "uint256" => Self::Uint256,
            "address" => Self::Address,
            "string" => Self::String,
            "bool" => Self::Bool,
            "bytes32" => Self::Bytes32,
            _ => Self::Uint256,
        }
    }

    fn parse_mapping(inner: &str) -> Self {
        let inner = inner
            .trim()
            .trim_start_matches(|c| c == '<' || c == '(')
            .trim_end_matches(|c| c == '>' || c == ')');

        let (key, value) = match inner.split_once("=>").or_else(|| inner.split_once(',')) {
            Some((k, v)) => (k, v),
            None => ("", ""),
        };

        Self::Mapping(
            Box::new(Self::from_source(key)),
            Box::new(Self::from_source(value)),
        )
    }

    pub fn solidity_name(&self) -> String {
        match self {
            Self::Uint256 => "uint256".to_string(),
            Self::Address => "address".to_string(),
            Self::String => "string".to_string(),
            Self::Bool => "bool".to_string(),
            Self::Bytes32 => "bytes32".to_string(),
            Self::Mapping(key, value) => format!(
                "mapping({} => {})",
                key.solidity_name(),
                value.solidity_name()
            ),
        }
    }

    /// Name used in ABI inputs and selectors.
    pub fn abi_name(&self) -> &'static str {
        match self {
            Self::Uint256 => "uint256",
            Self::Address => "address",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Bytes32 => "bytes32",
            Self::Mapping(_, _) => "mapping",
        }
    }

    /// Parameters of reference type need a data location in Solidity.
    pub fn needs_memory_location(&self) -> bool {
        matches!(self, Self::String)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.solidity_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_table() {
        assert_eq!(DataType::from_source("uint256"), DataType::Uint256);
        assert_eq!(DataType::from_source("address"), DataType::Address);
        assert_eq!(DataType::from_source("string"), DataType::String);
        assert_eq!(DataType::from_source("bool"), DataType::Bool);
        assert_eq!(DataType::from_source("bytes32"), DataType::Bytes32);
    }

    #[test]
    fn test_unknown_defaults_to_uint256() {
        assert_eq!(DataType::from_source("u64"), DataType::Uint256);
        assert_eq!(DataType::from_source(""), DataType::Uint256);
        assert_eq!(DataType::from_source("Token").abi_name(), "uint256");
    }

    #[test]
    fn test_mapping_forms() {
        let angle = DataType::from_source("mapping<address, uint256>");
        assert_eq!(angle.solidity_name(), "mapping(address => uint256)");
        assert_eq!(angle.abi_name(), "mapping");

        let paren = DataType::from_source("mapping(address => bool)");
        assert_eq!(paren.solidity_name(), "mapping(address => bool)");
    }
}
