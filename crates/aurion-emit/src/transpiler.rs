use crate::abi::generate_abi;
use crate::avm::AvmEmitter;
use crate::emitter::Emitter;
use crate::evm::EvmEmitter;
use aurion_core::config::EmitterConfig;
use aurion_core::{Ast, Bytecode, CompilationResult, Result, Target, SENSITIVE_FUNCTIONS};
use tracing::{debug, warn};

pub struct Transpiler {
    config: EmitterConfig,
}

impl Transpiler {
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Never fails: emitter errors and trees without a contract come back as `success: false`.
    pub fn transpile(&self, ast: &Ast, target: Target) -> CompilationResult {
        if ast.contracts.is_empty() {
            return CompilationResult::failure(
                target,
                vec!["No contract definition found".to_string()],
            );
        }
        match self.try_transpile(ast, target) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, %target, "transpilation failed");
                CompilationResult::failure(target, vec![format!("Transpilation failed: {}", e)])
            }
        }
    }

    fn try_transpile(&self, ast: &Ast, target: Target) -> Result<CompilationResult> {
        let code = self.emit(ast, target)?;
        let abi = generate_abi(ast);
        debug!(%target, bytes = code.len(), abi_entries = abi.len(), "emitted contract text");

        Ok(CompilationResult {
            success: true,
            target,
            size: code.len(),
            optimized_code: code,
            abi,
            bytecode: Some(self.placeholder_bytecode(ast)),
            warnings: generate_warnings(ast),
            ast: Some(ast.clone()),
            ..CompilationResult::default()
        })
    }

    pub fn emit(&self, ast: &Ast, target: Target) -> Result<String> {
        match target {
            Target::Evm => EvmEmitter::new(self.config.clone()).emit_to_string(ast),
            Target::Avm => AvmEmitter::new().emit_to_string(ast),
        }
    }

    /// Hex of the concatenated contract names, cut to the configured length. Labeled as a
    /// placeholder so nobody mistakes it for deployable code.
    pub fn placeholder_bytecode(&self, ast: &Ast) -> Bytecode {
        let names: String = ast.contracts.iter().map(|c| c.name.as_str()).collect();
        let mut encoded = hex::encode(names.as_bytes());
        encoded.truncate(self.config.bytecode_hex_limit & !1);
        Bytecode::placeholder(format!("0x{}", encoded))
    }
}

impl Default for Transpiler {
    fn default() -> Self {
        Self::new(EmitterConfig::default())
    }
}

/// Sensitive functions whose declaration carries no `onlyOwner` guard.
pub fn generate_warnings(ast: &Ast) -> Vec<String> {
    ast.body
        .iter()
        .filter(|f| SENSITIVE_FUNCTIONS.contains(&f.name.as_str()) && !f.has_modifier("onlyOwner"))
        .map(|f| {
            format!(
                "Function '{}' (line {}) should be restricted with onlyOwner",
                f.name, f.line
            )
        })
        .collect()
}
