use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    Decorator,
    Keyword,
    Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    External,
    Internal,
    Private,
}

impl Visibility {
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "public" => Some(Self::Public),
            "external" => Some(Self::External),
            "internal" => Some(Self::Internal),
            "private" => Some(Self::Private),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::External => "external",
            Self::Internal => "internal",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    pub name: String,
    pub data_type: String,
}

impl Param {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<Param>,
    pub visibility: Visibility,
    /// Trailing words after the parameter list plus any `@decorator` on the lines directly above.
    pub modifiers: Vec<String>,
    pub line: usize,
}

impl Function {
    /// Matches both plain modifiers (`onlyOwner`) and decorators (`@onlyOwner`).
    pub fn has_modifier(&self, name: &str) -> bool {
        self.modifiers
            .iter()
            .any(|m| m == name || m.strip_prefix('@') == Some(name))
    }

    /// Canonical signature such as `mint(address,uint256)`.
    pub fn signature(&self, map_type: impl Fn(&str) -> String) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| map_type(&p.data_type))
            .collect::<Vec<_>>()
            .join(",");
        format!("{}({})", self.name, params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub name: String,
    pub visibility: Visibility,
    pub data_type: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub parameters: Vec<Param>,
    pub line: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub name: String,
    pub functions: Vec<Function>,
    pub variables: Vec<Variable>,
    pub decorators: Vec<String>,
}

impl Contract {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn get_function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }
}

/// Shallow extraction record. `body` is the parser's own whole-source function list and is
/// computed independently from each contract's `functions`, so the two may disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ast {
    pub contracts: Vec<Contract>,
    pub body: Vec<Function>,
    pub decorators: Vec<String>,
    pub imports: Vec<String>,
    pub events: Vec<Event>,
}

impl Ast {
    pub fn has_decorator(&self, name: &str) -> bool {
        self.decorators.iter().any(|d| d == name)
    }

    pub fn all_functions(&self) -> impl Iterator<Item = &Function> {
        self.contracts.iter().flat_map(|c| c.functions.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub success: bool,
    pub ast: Option<Ast>,
    pub errors: Vec<String>,
    pub tokens: Vec<Token>,
}

impl ParseResult {
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            ast: None,
            errors,
            tokens: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_signature_uses_mapped_types() {
        let function = Function {
            name: "transfer".to_string(),
            parameters: vec![Param::new("to", "address"), Param::new("amount", "uint")],
            visibility: Visibility::Public,
            modifiers: vec![],
            line: 1,
        };

        let sig = function.signature(|t| match t {
            "uint" => "uint256".to_string(),
            other => other.to_string(),
        });
        assert_eq!(sig, "transfer(address,uint256)");
    }

    #[test]
    fn test_has_modifier_accepts_decorator_form() {
        let function = Function {
            name: "burn".to_string(),
            parameters: vec![],
            visibility: Visibility::External,
            modifiers: vec!["@onlyOwner".to_string(), "view".to_string()],
            line: 4,
        };
        assert!(function.has_modifier("onlyOwner"));
        assert!(function.has_modifier("view"));
        assert!(!function.has_modifier("nonReentrant"));
    }

    #[test]
    fn test_visibility_keywords() {
        assert_eq!(Visibility::from_keyword("external"), Some(Visibility::External));
        assert_eq!(Visibility::from_keyword("view"), None);
        assert_eq!(Visibility::Private.to_string(), "private");
    }
}
