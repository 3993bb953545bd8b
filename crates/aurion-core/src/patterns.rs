//! Small text helpers shared by the regex-driven stages.

use crate::Result;
use regex::Regex;

pub fn compile(pattern: &str) -> Result<Regex> {
    Ok(Regex::new(pattern)?)
}

/// 1-based line number of a byte offset.
pub fn line_at(code: &str, offset: usize) -> usize {
    let offset = offset.min(code.len());
    code.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

/// First line containing `needle`, as `(line, trimmed text)`.
pub fn locate(code: &str, needle: &str) -> Option<(usize, String)> {
    code.lines()
        .enumerate()
        .find(|(_, line)| line.contains(needle))
        .map(|(idx, line)| (idx + 1, line.trim().to_string()))
}

/// Like [`locate`] but matches a regex.
pub fn locate_match(code: &str, re: &Regex) -> Option<(usize, String)> {
    code.lines()
        .enumerate()
        .find(|(_, line)| re.is_match(line))
        .map(|(idx, line)| (idx + 1, line.trim().to_string()))
}

pub fn count(code: &str, re: &Regex) -> usize {
    re.find_iter(code).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_at() {
        let code = "a\nb\nc";
        assert_eq!(line_at(code, 0), 1);
        assert_eq!(line_at(code, 2), 2);
        assert_eq!(line_at(code, 4), 3);
        assert_eq!(line_at(code, 100), 3);
    }

    #[test]
    fn test_locate_returns_trimmed_line() {
        let code = "contract A {\n    x = y.call.value(1)();\n}";
        assert_eq!(
            locate(code, "call.value"),
            Some((2, "x = y.call.value(1)();".to_string()))
        );
        assert_eq!(locate(code, "delegatecall"), None);
    }

    #[test]
    fn test_count() {
        let re = compile(r"function\s+\w+").unwrap();
        assert_eq!(count("function a() {} function b() {}", &re), 2);
    }

    #[test]
    fn test_bad_pattern_is_error() {
        assert!(compile("(unclosed").is_err());
    }
}
