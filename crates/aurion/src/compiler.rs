use aurion_analysis::{GasEstimator, Scanner};
use aurion_core::config::AurionConfig;
use aurion_core::{CompilationResult, OptimizationLevel, Result, Target};
use aurion_emit::{generate_warnings, Transpiler};
use aurion_transform::PassManager;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

/// Parse, optimize, transpile and verify in one call.
pub struct AurionCompiler {
    config: AurionConfig,
}

impl AurionCompiler {
    pub fn new(config: AurionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AurionConfig {
        &self.config
    }

    /// Parse errors stop the pipeline and come back as `errors`. Anything else that goes wrong
    /// is folded into a single `Compilation failed` message.
    pub fn compile(
        &self,
        code: &str,
        target: Target,
        level: OptimizationLevel,
    ) -> CompilationResult {
        match self.try_compile(code, target, level) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, %target, "compilation failed");
                CompilationResult::failure(target, vec![format!("Compilation failed: {}", e)])
            }
        }
    }

    fn try_compile(
        &self,
        code: &str,
        target: Target,
        level: OptimizationLevel,
    ) -> Result<CompilationResult> {
        let parsed = aurion_parser::parse_with_config(code, &self.config.parser);
        let ast = match parsed.ast {
            Some(ast) if parsed.success => ast,
            _ => return Ok(CompilationResult::failure(target, parsed.errors)),
        };

        let optimized = PassManager::with_defaults().run(code, level);
        // Optimized text only gains decorators and comments, so it still parses. Fall back to the
        // original tree if it somehow does not.
        let optimized_ast = aurion_parser::parse_with_config(&optimized, &self.config.parser)
            .ast
            .unwrap_or_else(|| ast.clone());

        let mut result =
            Transpiler::new(self.config.emitter.clone()).transpile(&optimized_ast, target);
        if !result.success {
            return Ok(result);
        }

        // Line numbers refer to the caller's source, not the optimized text.
        result.warnings = generate_warnings(&ast);
        for issue in Scanner::new()?.verify(code, Some(&ast)) {
            result
                .warnings
                .push(format!("[{}] {}", issue.severity, issue.title));
        }

        result.gas_estimate = GasEstimator::new(self.config.gas.clone())?
            .analyze(code)
            .min_gas;
        result.source_hash = Some(source_hash(code));
        result.ast = Some(ast);

        debug!(
            %target,
            %level,
            size = result.size,
            warnings = result.warnings.len(),
            "compiled contract"
        );
        Ok(result)
    }
}

impl Default for AurionCompiler {
    fn default() -> Self {
        Self::new(AurionConfig::default())
    }
}

/// Hex SHA-256 of the source text.
pub fn source_hash(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    hex::encode(hasher.finalize())
}
