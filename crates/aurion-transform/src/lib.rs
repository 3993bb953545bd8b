/*! Advisory optimization passes over Aurion source text.
 *
 * Passes never restructure code. They prepend decorators and append trailing comments that point
 * at likely savings, so the output still parses and still reads like the input. Every pass checks
 * for its own marker first, which makes a second run over optimized output a no-op.
 */

pub mod passes;

pub use passes::OptimizationPass;

use aurion_core::OptimizationLevel;
use passes::{
    Bytes32Hint, ExternalVisibilityHint, GasOptimizedDecorator, LoopWarning, SecureDecorator,
    StoragePackingHint,
};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PassStatistics {
    pub name: String,
    pub applied: bool,
    pub duration: Duration,
}

pub struct PassManager {
    passes: Vec<Box<dyn OptimizationPass>>,
    statistics: Vec<PassStatistics>,
    collect_stats: bool,
}

impl PassManager {
    pub fn new() -> Self {
        Self {
            passes: Vec::new(),
            statistics: Vec::new(),
            collect_stats: false,
        }
    }

    /// Decorator passes first, then the trailing hints in the order they are appended.
    pub fn with_defaults() -> Self {
        let mut manager = Self::new();
        manager.register_pass(GasOptimizedDecorator);
        manager.register_pass(StoragePackingHint);
        manager.register_pass(ExternalVisibilityHint);
        manager.register_pass(Bytes32Hint);
        manager.register_pass(LoopWarning);
        manager.register_pass(SecureDecorator);
        manager
    }

    pub fn enable_statistics(&mut self) {
        self.collect_stats = true;
    }

    pub fn register_pass<P: OptimizationPass + 'static>(&mut self, pass: P) {
        self.passes.push(Box::new(pass));
    }

    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    pub fn run(&mut self, code: &str, level: OptimizationLevel) -> String {
        if code.trim().is_empty() {
            return code.to_string();
        }

        let mut current = code.to_string();
        for pass in self.passes.iter().filter(|p| p.min_level() <= level) {
            let start = self.collect_stats.then(Instant::now);

            let mut applied = false;
            if pass.suggestion(&current).is_some() {
                let next = pass.apply(&current);
                applied = next != current;
                if applied {
                    debug!(pass = pass.name(), "applied optimization pass");
                }
                current = next;
            }

            if let Some(start) = start {
                self.statistics.push(PassStatistics {
                    name: pass.name().to_string(),
                    applied,
                    duration: start.elapsed(),
                });
            }
        }
        current
    }

    /// Suggestions every registered pass would make, regardless of level.
    pub fn suggestions(&self, code: &str) -> Vec<String> {
        if code.trim().is_empty() {
            return Vec::new();
        }
        self.passes
            .iter()
            .filter_map(|p| p.suggestion(code))
            .collect()
    }

    pub fn statistics(&self) -> &[PassStatistics] {
        &self.statistics
    }
}

impl Default for PassManager {
    fn default() -> Self {
        Self::with_defaults()
    }
}

pub fn optimize(code: &str, level: OptimizationLevel) -> String {
    PassManager::with_defaults().run(code, level)
}

pub fn analyze_optimizations(code: &str) -> Vec<String> {
    PassManager::with_defaults().suggestions(code)
}
