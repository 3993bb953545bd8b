/*! Parse Aurion source into a shallow pseudo-AST.
 *
 * There is no grammar for contract bodies here. A pest grammar splits the source into classified
 * words, regex passes pull out contracts, functions, variables, events and decorators, and three
 * structural checks decide whether the result is usable for transpilation.
 */

use aurion_core::ast::{ParseResult, Token, TokenKind};
use aurion_core::config::ParserConfig;
use pest::Parser;
use pest_derive::Parser;
use tracing::debug;

pub mod extract;
pub mod validate;

pub use extract::Extractor;

#[derive(Parser)]
#[grammar = "aurion.pest"]
pub struct AurionLexer;

pub type TokenizeResult<T> = Result<T, Box<pest::error::Error<Rule>>>;

pub fn tokenize(input: &str) -> TokenizeResult<Vec<Token>> {
    let mut pairs = AurionLexer::parse(Rule::source, input).map_err(Box::new)?;

    let Some(source) = pairs.next() else {
        return Ok(Vec::new());
    };

    let tokens = source
        .into_inner()
        .filter_map(|pair| {
            let kind = match pair.as_rule() {
                Rule::decorator => TokenKind::Decorator,
                Rule::keyword => TokenKind::Keyword,
                Rule::identifier => TokenKind::Identifier,
                _ => return None,
            };
            Some(Token {
                kind,
                value: pair.as_str().to_string(),
                line: pair.as_span().start_pos().line_col().0,
            })
        })
        .collect();

    Ok(tokens)
}

pub fn parse(code: &str) -> ParseResult {
    parse_with_config(code, &ParserConfig::default())
}

pub fn parse_with_config(code: &str, config: &ParserConfig) -> ParseResult {
    let tokens = match tokenize(code) {
        Ok(tokens) => tokens,
        Err(e) => return ParseResult::failure(vec![format!("Tokenization failed: {}", e)]),
    };

    let extractor = match Extractor::new() {
        Ok(extractor) => extractor,
        Err(e) => return ParseResult::failure(vec![format!("Parse failed: {}", e)]),
    };

    let ast = extractor.extract(code, config);
    let errors = validate::validate(code, &ast, &extractor, config);

    debug!(
        contracts = ast.contracts.len(),
        functions = ast.body.len(),
        tokens = tokens.len(),
        errors = errors.len(),
        "parsed aurion source"
    );

    let success = errors.is_empty();
    ParseResult {
        success,
        ast: success.then_some(ast),
        errors,
        tokens,
    }
}

pub fn check(code: &str) -> bool {
    parse(code).success
}
