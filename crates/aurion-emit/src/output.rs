use aurion_core::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

pub trait OutputFormatter {
    fn format_title(&self, title: &str) -> String;

    fn format_pair(&self, key: &str, value: &str) -> String;

    fn format_list(&self, items: &[String]) -> String;

    fn format_section(&self, title: &str) -> String;

    fn format_code(&self, code: &str, language: Option<&str>) -> String;
}

/// Plain terminal text, optionally colored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter {
    pub use_colors: bool,
}

impl TextFormatter {
    pub fn colored() -> Self {
        Self { use_colors: true }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_title(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    fn format_pair(&self, key: &str, value: &str) -> String {
        format!("{}: {}", key, value)
    }

    fn format_list(&self, items: &[String]) -> String {
        items
            .iter()
            .map(|item| format!("  - {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_section(&self, title: &str) -> String {
        let header = format!("=== {} ===", title);
        if self.use_colors {
            format!("\n{}\n", header.cyan())
        } else {
            format!("\n{}\n", header)
        }
    }

    fn format_code(&self, code: &str, _language: Option<&str>) -> String {
        code.lines()
            .map(|line| format!("    {}", line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub struct MarkdownFormatter;

impl OutputFormatter for MarkdownFormatter {
    fn format_title(&self, title: &str) -> String {
        format!("# {}", title)
    }

    fn format_pair(&self, key: &str, value: &str) -> String {
        format!("**{}**: {}", key, value)
    }

    fn format_list(&self, items: &[String]) -> String {
        items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_section(&self, title: &str) -> String {
        format!("\n## {}\n", title)
    }

    fn format_code(&self, code: &str, language: Option<&str>) -> String {
        let lang = language.unwrap_or("solidity");
        format!("```{}\n{}\n```", lang, code)
    }
}

pub struct JsonFormatter;

impl JsonFormatter {
    pub fn write<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, value)?;
        writeln!(writer)?;
        Ok(())
    }

    pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}
