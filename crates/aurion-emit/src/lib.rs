/*! Turn a parsed Aurion AST into target text, and analyses into readable reports.
 *
 * Neither target is compiled for real. The EVM emitter writes a Solidity-shaped skeleton with
 * placeholder bodies, the AVM emitter writes directives for a VM that does not exist, and the
 * "bytecode" is hex-encoded contract names. What is real is the ABI: input types follow the
 * type table and function selectors are genuine keccak256 prefixes.
 */

pub mod abi;
pub mod avm;
pub mod emitter;
pub mod evm;
pub mod output;
pub mod report;
pub mod transpiler;

pub use abi::{compute_function_selector, generate_abi};
pub use avm::AvmEmitter;
pub use emitter::{EmitContext, EmitHelper, EmitResult, Emitter};
pub use evm::EvmEmitter;
pub use output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
pub use report::{format_analysis, format_analysis_for_ai};
pub use transpiler::{generate_warnings, Transpiler};

use aurion_core::{Ast, CompilationResult, Target};

pub fn transpile(ast: &Ast, target: Target) -> CompilationResult {
    Transpiler::default().transpile(ast, target)
}
