use super::SecurityCheck;
use aurion_core::patterns::{self, locate, locate_match};
use aurion_core::{Result, SecurityIssue, Severity, SENSITIVE_FUNCTIONS};
use regex::Regex;

pub struct ReentrancyCheck;

impl SecurityCheck for ReentrancyCheck {
    fn id(&self) -> &'static str {
        "reentrancy"
    }

    fn title(&self) -> &'static str {
        "Potential Reentrancy Vulnerability"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn recommendation(&self) -> &'static str {
        "Add @nonReentrant to functions that transfer value and follow checks-effects-interactions"
    }

    fn detect(&self, code: &str) -> Vec<SecurityIssue> {
        if !code.contains("call.value") || code.contains("@nonReentrant") {
            return Vec::new();
        }

        vec![SecurityIssue::new(
            self.severity(),
            self.title(),
            "External call with value transfer (call.value) without a reentrancy guard. \
             A malicious callee can re-enter the contract before state is updated.",
            "Add the @nonReentrant decorator and update state before making external calls \
             (checks-effects-interactions).",
        )
        .at(locate(code, "call.value"))]
    }
}

pub struct AccessControlCheck {
    sensitive: Regex,
}

impl AccessControlCheck {
    pub fn new() -> Result<Self> {
        let names = SENSITIVE_FUNCTIONS.join("|");
        Ok(Self {
            sensitive: patterns::compile(&format!(r"\bfunction\s+({})\s*\(", names))?,
        })
    }

    fn sensitive_functions<'a>(&self, code: &'a str) -> Vec<(&'a str, usize)> {
        let mut found: Vec<(&str, usize)> = Vec::new();
        for caps in self.sensitive.captures_iter(code) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if !found.iter().any(|(n, _)| *n == name.as_str()) {
                found.push((name.as_str(), patterns::line_at(code, whole.start())));
            }
        }
        found
    }
}

impl SecurityCheck for AccessControlCheck {
    fn id(&self) -> &'static str {
        "access-control"
    }

    fn title(&self) -> &'static str {
        "Missing Access Control"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn recommendation(&self) -> &'static str {
        "Restrict privileged functions with onlyOwner or a custom access-control modifier"
    }

    fn detect(&self, code: &str) -> Vec<SecurityIssue> {
        if code.contains("onlyOwner") || code.contains("modifier") {
            return Vec::new();
        }

        self.sensitive_functions(code)
            .into_iter()
            .map(|(name, line)| {
                let snippet = code
                    .lines()
                    .nth(line - 1)
                    .map(|l| l.trim().to_string())
                    .unwrap_or_default();
                SecurityIssue::new(
                    self.severity(),
                    self.title(),
                    format!(
                        "Function '{}' performs a privileged operation but anyone can call it.",
                        name
                    ),
                    format!(
                        "Add an access-control modifier such as onlyOwner to '{}'.",
                        name
                    ),
                )
                .at(Some((line, snippet)))
            })
            .collect()
    }
}

pub struct IntegerOverflowCheck {
    arithmetic: Regex,
}

impl IntegerOverflowCheck {
    pub fn new() -> Result<Self> {
        Ok(Self {
            arithmetic: patterns::compile(r"[+\-*]")?,
        })
    }
}

impl SecurityCheck for IntegerOverflowCheck {
    fn id(&self) -> &'static str {
        "integer-overflow"
    }

    fn title(&self) -> &'static str {
        "Integer Overflow/Underflow Risk"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn recommendation(&self) -> &'static str {
        "Use SafeMath or the @safe decorator for arithmetic on balances and supplies"
    }

    fn detect(&self, code: &str) -> Vec<SecurityIssue> {
        if code.contains("SafeMath") || code.contains("@safe") {
            return Vec::new();
        }
        let Some(location) = locate_match(code, &self.arithmetic) else {
            return Vec::new();
        };

        vec![SecurityIssue::new(
            self.severity(),
            self.title(),
            "Arithmetic operations found without SafeMath or @safe overflow protection.",
            "Use SafeMath, add explicit overflow checks, or mark the contract @safe.",
        )
        .at(Some(location))]
    }
}

pub struct UncheckedCallCheck;

impl SecurityCheck for UncheckedCallCheck {
    fn id(&self) -> &'static str {
        "unchecked-call"
    }

    fn title(&self) -> &'static str {
        "Unchecked Low-Level Call"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn recommendation(&self) -> &'static str {
        "Check the return value of every low-level call with require()"
    }

    fn detect(&self, code: &str) -> Vec<SecurityIssue> {
        if !code.contains("call(") || code.contains("require(") {
            return Vec::new();
        }

        vec![SecurityIssue::new(
            self.severity(),
            self.title(),
            "Low-level call made without checking whether it succeeded.",
            "Wrap the call result in require(success, \"Call failed\").",
        )
        .at(locate(code, "call("))]
    }
}

pub struct GasLimitLoopCheck;

impl SecurityCheck for GasLimitLoopCheck {
    fn id(&self) -> &'static str {
        "gas-limit-loop"
    }

    fn title(&self) -> &'static str {
        "Potential Gas Limit Issue"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn recommendation(&self) -> &'static str {
        "Avoid unbounded loops over dynamic arrays; paginate or use mappings"
    }

    fn detect(&self, code: &str) -> Vec<SecurityIssue> {
        if !code.contains("for (") || !code.contains(".length") {
            return Vec::new();
        }

        vec![SecurityIssue::new(
            self.severity(),
            self.title(),
            "Loop bounded by a dynamic array length can exceed the block gas limit as the array grows.",
            "Paginate the loop or replace the array with a mapping-based structure.",
        )
        .at(locate(code, "for ("))]
    }
}

pub struct UnprotectedInitCheck;

impl SecurityCheck for UnprotectedInitCheck {
    fn id(&self) -> &'static str {
        "unprotected-init"
    }

    fn title(&self) -> &'static str {
        "Unprotected Initializer"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn recommendation(&self) -> &'static str {
        "Guard init() with an initializer modifier so it can only run once"
    }

    fn detect(&self, code: &str) -> Vec<SecurityIssue> {
        if !code.contains("init(") || !code.contains("public") || code.contains("initializer") {
            return Vec::new();
        }

        vec![SecurityIssue::new(
            self.severity(),
            self.title(),
            "Public init() can be called again by anyone to reset contract state.",
            "Add an initializer guard that prevents init() from running twice.",
        )
        .at(locate(code, "init("))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reentrancy_guard_suppresses() {
        let code = "function pay() { msg.sender.call.value(1)(); }";
        assert_eq!(ReentrancyCheck.detect(code).len(), 1);
        assert!(ReentrancyCheck
            .detect(&format!("@nonReentrant\n{}", code))
            .is_empty());
    }

    #[test]
    fn test_access_control_one_issue_per_function() {
        let check = AccessControlCheck::new().unwrap();
        let code = "contract T {\n  function mint(address a) public {}\n  function burn() public {}\n  function mint(uint256 b) public {}\n}";
        let issues = check.detect(code);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].description.contains("'mint'"));
        assert_eq!(issues[0].line, Some(2));
        assert!(issues[1].description.contains("'burn'"));
        assert_eq!(issues[1].line, Some(3));
    }

    #[test]
    fn test_access_control_modifier_keyword_suppresses() {
        let check = AccessControlCheck::new().unwrap();
        let code = "modifier auth() { _; }\nfunction withdraw() public auth {}";
        assert!(check.detect(code).is_empty());
    }

    #[test]
    fn test_access_control_ignores_similar_names() {
        let check = AccessControlCheck::new().unwrap();
        assert!(check.detect("function minter() public {}").is_empty());
    }

    #[test]
    fn test_overflow_location() {
        let check = IntegerOverflowCheck::new().unwrap();
        let issues = check.detect("contract A {\n  x = x + 1;\n}");
        assert_eq!(issues[0].line, Some(2));
        assert!(check.detect("@safe\ncontract A { x = x + 1; }").is_empty());
    }

    #[test]
    fn test_unchecked_call_requires_any_require() {
        assert_eq!(UncheckedCallCheck.detect("a.call(data);").len(), 1);
        assert!(UncheckedCallCheck
            .detect("a.call(data); require(ok);")
            .is_empty());
    }

    #[test]
    fn test_gas_loop_and_init() {
        assert_eq!(
            GasLimitLoopCheck
                .detect("for (uint i = 0; i < users.length; i++) {}")
                .len(),
            1
        );
        assert!(GasLimitLoopCheck.detect("for (uint i = 0; i < 10; i++) {}").is_empty());

        assert_eq!(UnprotectedInitCheck.detect("function init() public {}").len(), 1);
        assert!(UnprotectedInitCheck
            .detect("function init() public initializer {}")
            .is_empty());
    }
}
