use crate::extract::Extractor;
use aurion_core::ast::Ast;
use aurion_core::config::ParserConfig;

/// The three structural checks. Everything else the parser tolerates.
pub fn validate(code: &str, ast: &Ast, extractor: &Extractor, config: &ParserConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if ast.contracts.is_empty() {
        errors.push("No contract definition found".to_string());
    }

    let opening = code.matches('{').count();
    let closing = code.matches('}').count();
    if opening != closing {
        errors.push(format!(
            "Unbalanced braces: {} opening, {} closing",
            opening, closing
        ));
    }

    for contract in &ast.contracts {
        if contract.variables.is_empty() {
            continue;
        }

        let has_init = if config.scope_functions_to_contract {
            extractor
                .contract_scopes(code)
                .iter()
                .find(|(name, _)| name == &contract.name)
                .is_some_and(|(_, body)| extractor.has_init_in(code, body))
        } else {
            extractor.has_init(code)
        };

        if !has_init {
            errors.push(format!(
                "Contract {} has state variables but no init() or constructor() function",
                contract.name
            ));
        }
    }

    errors
}
