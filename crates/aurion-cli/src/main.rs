use anyhow::{Context, Result};
use aurion::analysis::{Analyzer, GasEstimator, Scanner};
use aurion::emit::{format_analysis, JsonFormatter, MarkdownFormatter, TextFormatter};
use aurion::{AurionCompiler, AurionConfig, SecurityAnalysis, TemplateKind};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "aurion")]
#[command(about = "Aurion - heuristic security scanning, gas estimation and transpilation")]
#[command(version = "0.1.0")]
#[command(author = "Gianluca Brigandi <gbrigand@gmail.com>")]
struct Cli {
    /// JSON file overriding parser, gas and emitter settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Parse {
        input: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Scan a file, or every .aur file under a directory
    Scan {
        path: PathBuf,

        #[arg(long)]
        json: bool,
    },

    Gas {
        input: PathBuf,

        #[arg(long)]
        quick: bool,

        #[arg(long)]
        json: bool,
    },

    Analyze {
        input: PathBuf,

        #[arg(long)]
        quick: bool,

        #[arg(long, conflicts_with = "markdown")]
        json: bool,

        #[arg(long)]
        markdown: bool,
    },

    Optimize {
        input: PathBuf,

        #[arg(short, long, value_enum, default_value = "medium")]
        level: Level,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only list suggestions, do not rewrite
        #[arg(long)]
        suggest: bool,
    },

    Compile {
        input: PathBuf,

        #[arg(short, long, value_enum, default_value = "evm")]
        target: TargetArg,

        #[arg(short, long, value_enum, default_value = "medium")]
        level: Level,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    Template {
        /// token, erc20, nft, vault, staking, dao or governance
        kind: String,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    Low,
    Medium,
    High,
}

impl From<Level> for aurion::OptimizationLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => aurion::OptimizationLevel::Low,
            Level::Medium => aurion::OptimizationLevel::Medium,
            Level::High => aurion::OptimizationLevel::High,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TargetArg {
    Evm,
    Avm,
}

impl From<TargetArg> for aurion::Target {
    fn from(target: TargetArg) -> Self {
        match target {
            TargetArg::Evm => aurion::Target::Evm,
            TargetArg::Avm => aurion::Target::Avm,
        }
    }
}

#[derive(Serialize)]
struct ScanEntry<'a> {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    security: Option<&'a SecurityAnalysis>,
    /// Why the file was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Parse { input, json } => cmd_parse(&config, input, json),
        Commands::Scan { path, json } => cmd_scan(path, json),
        Commands::Gas { input, quick, json } => cmd_gas(&config, input, quick, json),
        Commands::Analyze {
            input,
            quick,
            json,
            markdown,
        } => cmd_analyze(&config, input, quick, json, markdown),
        Commands::Optimize {
            input,
            level,
            output,
            suggest,
        } => cmd_optimize(input, level, output, suggest),
        Commands::Compile {
            input,
            target,
            level,
            output,
            json,
        } => cmd_compile(config, input, target, level, output, json, cli.verbose),
        Commands::Template { kind, output } => cmd_template(kind, output),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<AurionConfig> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let config = AurionConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?;
            debug!(path = %path.display(), "loaded configuration");
            Ok(config)
        }
        None => Ok(AurionConfig::default()),
    }
}

fn read_source(input: &Path) -> Result<String> {
    fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    JsonFormatter::write(&mut std::io::stdout().lock(), value)?;
    Ok(())
}

fn write_or_print(output: Option<PathBuf>, content: &str) -> Result<()> {
    use colored::*;

    match output {
        Some(path) => {
            fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
            println!(
                " {} Written to: {}",
                "SUCCESS:".bright_green().bold(),
                path.display()
            );
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn cmd_parse(config: &AurionConfig, input: PathBuf, json: bool) -> Result<()> {
    use colored::*;

    let code = read_source(&input)?;
    let result = aurion::parser::parse_with_config(&code, &config.parser);

    if json {
        print_json(&result)?;
    } else if let Some(ast) = result.ast.as_ref().filter(|_| result.success) {
        println!("{}", " VALID".bright_green().bold());
        println!(" Tokens: {}", result.tokens.len());
        for contract in &ast.contracts {
            println!(
                "{}",
                format!(" Contract: {}", contract.name).bright_green().bold()
            );
            println!("   Variables: {}", contract.variables.len());
            println!("   Functions: {}", contract.functions.len());
            for function in &contract.functions {
                println!(
                    "     {} {} (line {})",
                    function.visibility,
                    function.name.bright_yellow(),
                    function.line
                );
            }
        }
        if !ast.events.is_empty() {
            println!(" Events: {}", ast.events.len());
        }
    } else {
        println!("{}", " INVALID".bright_red().bold());
        for error in &result.errors {
            println!("   {}", error);
        }
    }

    if result.success {
        Ok(())
    } else {
        Err(anyhow::anyhow!("Parse failed"))
    }
}

fn collect_sources(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }
    WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "aur"))
        .collect()
}

fn cmd_scan(path: PathBuf, json: bool) -> Result<()> {
    use colored::*;

    let files = collect_sources(&path);
    if files.is_empty() {
        println!("{}", "  No .aur files found".yellow());
        return Ok(());
    }

    let scanner = Scanner::new()?;
    let mut results = Vec::with_capacity(files.len());
    for file in &files {
        let outcome = match read_source(file) {
            Ok(code) => Ok(scanner.run(&code)),
            Err(e) => {
                let reason = format!("{:#}", e);
                warn!(file = %file.display(), error = %reason, "skipping file");
                Err(reason)
            }
        };
        results.push((file.display().to_string(), outcome));
    }

    if json {
        let entries: Vec<ScanEntry> = results
            .iter()
            .map(|(file, outcome)| ScanEntry {
                file: file.clone(),
                security: outcome.as_ref().ok(),
                error: outcome.as_ref().err().cloned(),
            })
            .collect();
        return print_json(&entries);
    }

    for (file, outcome) in &results {
        let security = match outcome {
            Ok(security) => security,
            Err(reason) => {
                println!("{}", format!(" SKIPPED {}: {}", file, reason).yellow());
                continue;
            }
        };
        let header = format!(" {}: {}/100 ({})", file, security.score, security.level);
        if security.issues.is_empty() {
            println!("{}", header.bright_green().bold());
        } else {
            println!("{}", header.bright_red().bold());
        }
        for issue in &security.issues {
            let location = issue
                .line
                .map(|line| format!(" line {}", line))
                .unwrap_or_default();
            println!(
                "   {} [{}] {}{}",
                issue.severity.emoji(),
                issue.severity,
                issue.title,
                location
            );
        }
    }
    println!("\n Scanned {} file(s)", results.len());
    Ok(())
}

fn cmd_gas(config: &AurionConfig, input: PathBuf, quick: bool, json: bool) -> Result<()> {
    use colored::*;

    let code = read_source(&input)?;
    let estimator = GasEstimator::new(config.gas.clone())?;
    let gas = if quick {
        estimator.quick_estimate(&code)
    } else {
        estimator.analyze(&code)
    };

    if json {
        return print_json(&gas);
    }

    println!("{}", format!(" Estimated: {}", gas.estimated_cost).bright_cyan().bold());
    println!("   Efficiency: {}/100", gas.efficiency);
    println!("   Complexity: {}", gas.complexity);
    if let Some(comparison) = &gas.comparison {
        println!("   {}", comparison);
    }
    for tip in &gas.optimization_tips {
        println!("   - {}", tip);
    }
    Ok(())
}

fn cmd_analyze(
    config: &AurionConfig,
    input: PathBuf,
    quick: bool,
    json: bool,
    markdown: bool,
) -> Result<()> {
    let code = read_source(&input)?;
    let analyzer = Analyzer::new(config)?;
    let analysis = if quick {
        analyzer.quick_analysis(&code)
    } else {
        analyzer.full_analysis(&code)
    };

    if json {
        print_json(&analysis)
    } else if markdown {
        println!("{}", format_analysis(&analysis, &code, &MarkdownFormatter));
        Ok(())
    } else {
        println!("{}", format_analysis(&analysis, &code, &TextFormatter::colored()));
        Ok(())
    }
}

fn cmd_optimize(
    input: PathBuf,
    level: Level,
    output: Option<PathBuf>,
    suggest: bool,
) -> Result<()> {
    let code = read_source(&input)?;

    if suggest {
        let suggestions = aurion::analyze_optimizations(&code);
        if suggestions.is_empty() {
            println!(" No optimization suggestions");
        }
        for suggestion in suggestions {
            println!("   - {}", suggestion);
        }
        return Ok(());
    }

    let optimized = aurion::optimize(&code, level.into());
    write_or_print(output, &optimized)
}

fn cmd_compile(
    config: AurionConfig,
    input: PathBuf,
    target: TargetArg,
    level: Level,
    output: Option<PathBuf>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    use colored::*;
    use std::time::Instant;

    if verbose {
        println!("{}", " Aurion Compiler".bright_blue().bold());
        println!("{}", "=".repeat(50).bright_blue());
        println!(" Input: {}", input.display());
        println!(" Target: {:?}", target);
        println!(" Level: {:?}", level);
        println!();
    }

    let start = Instant::now();
    let code = read_source(&input)?;
    let result = AurionCompiler::new(config).compile(&code, target.into(), level.into());

    if json {
        print_json(&result)?;
    } else if result.success {
        write_or_print(output, &result.optimized_code)?;
        for warning in &result.warnings {
            eprintln!(" {} {}", "WARNING:".yellow().bold(), warning);
        }
        if verbose {
            println!(
                "\n {} Compilation successful!",
                "SUCCESS:".bright_green().bold()
            );
            println!("   Time: {:.3}s", start.elapsed().as_secs_f64());
            println!("   ABI entries: {}", result.abi.len());
            println!("   Estimated gas: {}", result.gas_estimate);
            if let Some(bytecode) = &result.bytecode {
                println!("   Bytecode ({}, not executable): {}", bytecode.kind, bytecode.hex);
            }
        }
    } else {
        eprintln!("{}", " Compilation failed".bright_red().bold());
        for error in &result.errors {
            eprintln!("   {}", error);
        }
    }

    if result.success {
        Ok(())
    } else {
        Err(anyhow::anyhow!("Compilation failed"))
    }
}

fn cmd_template(kind: String, output: Option<PathBuf>) -> Result<()> {
    let kind: TemplateKind = kind.parse()?;
    write_or_print(output, kind.source())
}
