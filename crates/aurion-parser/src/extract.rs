use aurion_core::ast::{Ast, Contract, Event, Function, Param, Variable, Visibility};
use aurion_core::config::ParserConfig;
use aurion_core::patterns::{self, line_at};
use aurion_core::Result;
use regex::Regex;
use std::ops::Range;

const LOCATION_WORDS: &[&str] = &["memory", "storage", "calldata", "indexed", "payable"];

/// Regex passes that pull contracts, functions and variables out of raw source. Each pass runs
/// over the full text independently.
pub struct Extractor {
    contract: Regex,
    function: Regex,
    variable: Regex,
    event: Regex,
    decorator: Regex,
    import: Regex,
    init: Regex,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            contract: patterns::compile(r"\bcontract\s+(\w+)")?,
            function: patterns::compile(r"\bfunction\s+(\w+)\s*\(([^)]*)\)([^{;]*)")?,
            variable: patterns::compile(
                r"(?m)^[ \t]*(mapping\s*[<(][^;]*?[>)]|uint256|uint|int256|int|address|string|bool|bytes32)\s+(?:(public|private|internal|external)\s+)?(\w+)\s*(?:=[^;]*)?;",
            )?,
            event: patterns::compile(r"\bevent\s+(\w+)\s*\(([^)]*)\)")?,
            decorator: patterns::compile(r"@[\w-]+")?,
            import: patterns::compile(r#"(?m)^\s*import\s+["']?([^"';\s]+)"#)?,
            init: patterns::compile(r"\b(?:init|constructor)\s*\(")?,
        })
    }

    pub fn extract(&self, code: &str, config: &ParserConfig) -> Ast {
        let body = self.functions_in(code, None);

        let contracts = self
            .contract
            .captures_iter(code)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?.as_str();
                let scope = if config.scope_functions_to_contract {
                    Some(contract_body(code, whole.end()))
                } else {
                    None
                };

                Some(Contract {
                    name: name.to_string(),
                    functions: self.functions_in(code, scope.clone()),
                    variables: self.variables_in(code, scope),
                    decorators: self.decorators_above(code, whole.start()),
                })
            })
            .collect();

        Ast {
            contracts,
            body,
            decorators: self.decorators(code),
            imports: self.imports(code),
            events: self.events(code),
        }
    }

    /// Each contract name with the byte range of its body.
    pub fn contract_scopes(&self, code: &str) -> Vec<(String, Range<usize>)> {
        self.contract
            .captures_iter(code)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?.as_str().to_string();
                Some((name, contract_body(code, whole.end())))
            })
            .collect()
    }

    pub fn has_init(&self, code: &str) -> bool {
        self.init.is_match(code)
    }

    /// Whether an init/constructor call site falls inside `scope`.
    pub fn has_init_in(&self, code: &str, scope: &Range<usize>) -> bool {
        self.init
            .find_iter(code)
            .any(|m| scope.contains(&m.start()))
    }

    fn functions_in(&self, code: &str, scope: Option<Range<usize>>) -> Vec<Function> {
        self.function
            .captures_iter(code)
            .filter(|caps| in_scope(&scope, caps.get(0).map(|m| m.start())))
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?.as_str().to_string();
                let parameters = parse_params(caps.get(2).map_or("", |m| m.as_str()));

                let mut visibility = Visibility::default();
                let mut modifiers = self.decorators_above(code, whole.start());
                for word in caps.get(3).map_or("", |m| m.as_str()).split_whitespace() {
                    if word == "returns" || word.starts_with('(') {
                        break;
                    }
                    match Visibility::from_keyword(word) {
                        Some(v) => visibility = v,
                        None => {
                            let modifier = word.split('(').next().unwrap_or(word);
                            if !modifier.is_empty() {
                                modifiers.push(modifier.to_string());
                            }
                        }
                    }
                }

                Some(Function {
                    name,
                    parameters,
                    visibility,
                    modifiers,
                    line: line_at(code, whole.start()),
                })
            })
            .collect()
    }

    fn variables_in(&self, code: &str, scope: Option<Range<usize>>) -> Vec<Variable> {
        self.variable
            .captures_iter(code)
            .filter(|caps| in_scope(&scope, caps.get(0).map(|m| m.start())))
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let visibility = caps
                    .get(2)
                    .and_then(|m| Visibility::from_keyword(m.as_str()))
                    .unwrap_or(Visibility::Internal);

                Some(Variable {
                    name: caps.get(3)?.as_str().to_string(),
                    visibility,
                    data_type: caps.get(1)?.as_str().to_string(),
                    line: line_at(code, whole.start()),
                })
            })
            .collect()
    }

    fn events(&self, code: &str) -> Vec<Event> {
        self.event
            .captures_iter(code)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(Event {
                    name: caps.get(1)?.as_str().to_string(),
                    parameters: parse_params(caps.get(2).map_or("", |m| m.as_str())),
                    line: line_at(code, whole.start()),
                })
            })
            .collect()
    }

    fn decorators(&self, code: &str) -> Vec<String> {
        let mut seen = Vec::new();
        for m in self.decorator.find_iter(code) {
            let name = m.as_str().to_string();
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    /// Decorators on the run of `@`-lines immediately preceding the line at `offset`, plus any
    /// written on that line after the last `{`, `}` or `;` before the declaration.
    fn decorators_above(&self, code: &str, offset: usize) -> Vec<String> {
        let line_start = code[..offset].rfind('\n').map_or(0, |i| i + 1);
        let boundary = code[line_start..offset]
            .rfind(['{', '}', ';'])
            .map(|i| line_start + i + 1);
        let mut found = Vec::new();

        // A declaration preceded by other code on its line does not own the lines above.
        let above = if boundary.is_some() { "" } else { &code[..line_start] };
        for line in above.lines().rev() {
            let trimmed = line.trim();
            if !trimmed.starts_with('@') {
                break;
            }
            let mut on_line: Vec<String> = self
                .decorator
                .find_iter(trimmed)
                .map(|m| m.as_str().to_string())
                .collect();
            on_line.extend(found);
            found = on_line;
        }

        // Decorators written on the declaration line itself, before the keyword.
        let prefix = &code[boundary.unwrap_or(line_start)..offset];
        found.extend(
            self.decorator
                .find_iter(prefix)
                .map(|m| m.as_str().to_string()),
        );
        found
    }

    fn imports(&self, code: &str) -> Vec<String> {
        self.import
            .captures_iter(code)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

fn in_scope(scope: &Option<Range<usize>>, start: Option<usize>) -> bool {
    match (scope, start) {
        (None, _) => true,
        (Some(range), Some(start)) => range.contains(&start),
        (Some(_), None) => false,
    }
}

/// Byte range of the brace-delimited body that follows `from`. Unterminated bodies run to the
/// end of the source.
pub fn contract_body(code: &str, from: usize) -> Range<usize> {
    let Some(open) = code[from..].find('{').map(|i| from + i) else {
        return from..from;
    };

    let mut depth = 0usize;
    for (idx, ch) in code[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return open..open + idx + 1;
                }
            }
            _ => {}
        }
    }
    open..code.len()
}

fn parse_params(raw: &str) -> Vec<Param> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let words: Vec<&str> = p
                .split_whitespace()
                .filter(|w| !LOCATION_WORDS.contains(w))
                .collect();
            match words.as_slice() {
                [] => Param::new("", ""),
                [ty] => Param::new("", *ty),
                [ty, .., name] => Param::new(*name, *ty),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_params_drops_locations() {
        let params = parse_params("address to, string memory label, uint256");
        assert_eq!(
            params,
            vec![
                Param::new("to", "address"),
                Param::new("label", "string"),
                Param::new("", "uint256"),
            ]
        );
    }

    #[test]
    fn test_contract_body_range() {
        let code = "contract A { x { } } contract B { }";
        let range = contract_body(code, 10);
        assert_eq!(&code[range], "{ x { } }");
    }

    #[test]
    fn test_contract_body_unterminated() {
        let code = "contract A { function f() {";
        let range = contract_body(code, 10);
        assert_eq!(range.end, code.len());
    }

    #[test]
    fn test_contract_decorators_stay_on_contract() {
        let extractor = Extractor::new().unwrap();
        let code = "@secure contract Vault { function withdraw() public onlyOwner { } }";
        let ast = extractor.extract(code, &ParserConfig::default());
        assert_eq!(ast.contracts[0].decorators, vec!["@secure"]);
        assert_eq!(ast.body[0].modifiers, vec!["onlyOwner"]);

        let code = "@onlyOwner\ncontract X { function mint() public {} @safe function burn() public {} }";
        let ast = extractor.extract(code, &ParserConfig::default());
        assert!(ast.body[0].modifiers.is_empty());
        assert_eq!(ast.body[1].modifiers, vec!["@safe"]);
    }

    #[test]
    fn test_function_modifiers_and_visibility() {
        let extractor = Extractor::new().unwrap();
        let code = "contract T {\n  @nonReentrant\n  function withdraw(uint256 amount) external onlyOwner() returns (bool) {}\n}";
        let ast = extractor.extract(code, &ParserConfig::default());

        let withdraw = &ast.body[0];
        assert_eq!(withdraw.name, "withdraw");
        assert_eq!(withdraw.visibility, Visibility::External);
        assert_eq!(withdraw.modifiers, vec!["@nonReentrant", "onlyOwner"]);
        assert_eq!(withdraw.line, 3);
    }

    #[test]
    fn test_variables_with_mapping_types() {
        let extractor = Extractor::new().unwrap();
        let code = "contract T {\n    mapping<address, uint256> public balances;\n    uint256 total = 0;\n    string memory name = \"x\";\n}";
        let ast = extractor.extract(code, &ParserConfig::default());

        let vars = &ast.contracts[0].variables;
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].name, "balances");
        assert_eq!(vars[0].data_type, "mapping<address, uint256>");
        assert_eq!(vars[0].visibility, Visibility::Public);
        assert_eq!(vars[1].name, "total");
        assert_eq!(vars[1].visibility, Visibility::Internal);
        assert_eq!(vars[1].line, 3);
    }
}
