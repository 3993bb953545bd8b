use aurion_core::OptimizationLevel;

pub trait OptimizationPass: Send + Sync {
    fn name(&self) -> &'static str;

    /// Lowest level at which the pass runs.
    fn min_level(&self) -> OptimizationLevel;

    /// Human-readable suggestion when the pass would change `code`.
    fn suggestion(&self, code: &str) -> Option<String>;

    fn apply(&self, code: &str) -> String;
}

fn prepend_decorator(code: &str, decorator: &str) -> String {
    if code.contains(decorator) {
        code.to_string()
    } else {
        format!("{}\n{}", decorator, code)
    }
}

fn append_comment(code: &str, comment: &str) -> String {
    if code.contains(comment) {
        return code.to_string();
    }
    let mut out = code.trim_end().to_string();
    out.push('\n');
    out.push_str(comment);
    out.push('\n');
    out
}

pub struct GasOptimizedDecorator;

impl OptimizationPass for GasOptimizedDecorator {
    fn name(&self) -> &'static str {
        "gas-optimized-decorator"
    }

    fn min_level(&self) -> OptimizationLevel {
        OptimizationLevel::Medium
    }

    fn suggestion(&self, code: &str) -> Option<String> {
        (!code.contains("@gas-optimized"))
            .then(|| "Add @gas-optimized decorator for automatic gas optimization".to_string())
    }

    fn apply(&self, code: &str) -> String {
        prepend_decorator(code, "@gas-optimized")
    }
}

pub struct StoragePackingHint;

impl StoragePackingHint {
    const COMMENT: &'static str =
        "// Optimization: pack uint/bool/address state variables into shared storage slots";
}

impl OptimizationPass for StoragePackingHint {
    fn name(&self) -> &'static str {
        "storage-packing"
    }

    fn min_level(&self) -> OptimizationLevel {
        OptimizationLevel::Medium
    }

    fn suggestion(&self, code: &str) -> Option<String> {
        (code.contains("uint") || code.contains("bool"))
            .then(|| "Pack small state variables together to use fewer storage slots".to_string())
    }

    fn apply(&self, code: &str) -> String {
        append_comment(code, Self::COMMENT)
    }
}

pub struct ExternalVisibilityHint;

impl ExternalVisibilityHint {
    const COMMENT: &'static str =
        "// Optimization: use external instead of public for functions not called internally";
}

impl OptimizationPass for ExternalVisibilityHint {
    fn name(&self) -> &'static str {
        "external-visibility"
    }

    fn min_level(&self) -> OptimizationLevel {
        OptimizationLevel::Medium
    }

    fn suggestion(&self, code: &str) -> Option<String> {
        code.contains("public").then(|| {
            "Use external instead of public for functions only called from outside".to_string()
        })
    }

    fn apply(&self, code: &str) -> String {
        append_comment(code, Self::COMMENT)
    }
}

pub struct Bytes32Hint;

impl Bytes32Hint {
    const COMMENT: &'static str =
        "// Optimization: prefer bytes32 over string memory for fixed-size values";
}

impl OptimizationPass for Bytes32Hint {
    fn name(&self) -> &'static str {
        "bytes32-strings"
    }

    fn min_level(&self) -> OptimizationLevel {
        OptimizationLevel::High
    }

    fn suggestion(&self, code: &str) -> Option<String> {
        code.contains("string memory")
            .then(|| "Use bytes32 instead of string memory for short strings".to_string())
    }

    fn apply(&self, code: &str) -> String {
        append_comment(code, Self::COMMENT)
    }
}

pub struct LoopWarning;

impl LoopWarning {
    const COMMENT: &'static str =
        "// Warning: loops over dynamic data can exceed the block gas limit";
}

impl OptimizationPass for LoopWarning {
    fn name(&self) -> &'static str {
        "loop-warning"
    }

    fn min_level(&self) -> OptimizationLevel {
        OptimizationLevel::High
    }

    fn suggestion(&self, code: &str) -> Option<String> {
        (code.contains("for (") || code.contains("while ("))
            .then(|| "Bound loop iterations or paginate work over large collections".to_string())
    }

    fn apply(&self, code: &str) -> String {
        append_comment(code, Self::COMMENT)
    }
}

pub struct SecureDecorator;

impl OptimizationPass for SecureDecorator {
    fn name(&self) -> &'static str {
        "secure-decorator"
    }

    fn min_level(&self) -> OptimizationLevel {
        OptimizationLevel::High
    }

    fn suggestion(&self, code: &str) -> Option<String> {
        (!code.contains("@secure"))
            .then(|| "Add @secure decorator to enable built-in security checks".to_string())
    }

    fn apply(&self, code: &str) -> String {
        prepend_decorator(code, "@secure")
    }
}
