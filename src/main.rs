use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use regex::Regex;
use sigparse::cli::output::{self, OutputFormat};
use sigparse::{Config, ParseFailure, ParseSummary};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sigparse")]
#[command(version, about = "A fast method signature parser", long_about = None)]
struct Cli {
    /// Signatures to parse, one per argument
    #[arg(value_name = "SIGNATURES")]
    signatures: Vec<String>,

    /// Parse signatures from files, one per line
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some signatures fail to parse
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<String>,

    /// Pattern for file lines to skip (regex)
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "sigparse", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.format.clone(), cli.ignore_pattern.clone())?;
    let format: OutputFormat = config.format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let colored = !cli.no_color && matches!(format, OutputFormat::Text);
    let text_mode = matches!(format, OutputFormat::Text);

    // Validate input
    if cli.signatures.is_empty() && cli.files.is_empty() {
        anyhow::bail!("No signatures or files specified. Use --help for usage information.");
    }

    // Compile ignore patterns
    let mut ignore_patterns = Vec::new();
    for pattern in &config.ignore_patterns {
        match Regex::new(pattern) {
            Ok(re) => ignore_patterns.push(re),
            Err(e) => eprintln!("Warning: Invalid regex pattern '{}': {}", pattern, e),
        }
    }

    let mut summary = ParseSummary::default();

    // Signatures given directly on the command line
    for (idx, source) in cli.signatures.iter().enumerate() {
        parse_line(idx + 1, source, &mut summary, colored, text_mode);
    }

    // Signature files, one signature per line
    for file_path in &cli.files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            continue;
        }

        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        if text_mode {
            let file_name = file_path.display().to_string();
            if colored {
                use colored::Colorize;
                println!("\n{}", file_name.bold().underline());
            } else {
                println!("\n{}", file_name);
            }
        }

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || ignore_patterns.iter().any(|re| re.is_match(line)) {
                continue;
            }
            parse_line(line_num + 1, line, &mut summary, colored, text_mode);
        }
    }

    match format {
        OutputFormat::Text => output::print_parse_summary(&summary, colored),
        OutputFormat::Json => output::print_json_output(&summary),
    }

    // Exit with appropriate code
    if summary.error_count > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn parse_line(
    line: usize,
    source: &str,
    summary: &mut ParseSummary,
    colored: bool,
    text_mode: bool,
) {
    match sigparse::parse(source) {
        Ok(sig) => {
            if text_mode {
                output::print_signature(&sig, colored);
            }
            summary.parsed_count += 1;
            summary.signatures.push(sig);
        }
        Err(err) => {
            let failure = ParseFailure {
                line,
                source: source.to_string(),
                message: err.to_string(),
            };
            if text_mode {
                output::print_failure(&failure, colored);
            }
            summary.error_count += 1;
            summary.failures.push(failure);
        }
    }
}
