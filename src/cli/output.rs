use crate::{Argument, MethodSignature, ParseFailure, ParseSummary};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonArgument {
    #[serde(rename = "type")]
    ty: String,
    name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonSignature {
    name: String,
    return_type: Option<String>,
    access_modifier: Option<String>,
    arguments: Vec<JsonArgument>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonFailure {
    line: usize,
    source: String,
    error: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    parsed: usize,
    errors: usize,
    signatures: Vec<JsonSignature>,
    failures: Vec<JsonFailure>,
}

/// Re-render a parsed signature in normalized form, single spaces throughout.
pub fn render_signature(sig: &MethodSignature) -> String {
    let args = sig
        .arguments
        .iter()
        .map(|a| format!("{} {}", a.ty, a.name))
        .collect::<Vec<_>>()
        .join(", ");

    match (&sig.access_modifier, &sig.return_type) {
        (Some(modifier), Some(ret)) => format!("{} {} {}({})", modifier, ret, sig.name, args),
        (None, Some(ret)) => format!("{} {}({})", ret, sig.name, args),
        _ => format!("{}({})", sig.name, args),
    }
}

pub fn print_signature(sig: &MethodSignature, colored_output: bool) {
    if colored_output {
        let mut parts = Vec::new();
        if let Some(modifier) = &sig.access_modifier {
            parts.push(modifier.cyan().to_string());
        }
        if let Some(ret) = &sig.return_type {
            parts.push(ret.green().to_string());
        }
        let args = sig
            .arguments
            .iter()
            .map(|a| format!("{} {}", a.ty.green(), a.name))
            .collect::<Vec<_>>()
            .join(", ");
        parts.push(format!("{}({})", sig.name.bold(), args));

        println!("  {} {}", "✓".green(), parts.join(" "));
    } else {
        println!("  ✓ {}", render_signature(sig));
    }
}

pub fn print_failure(failure: &ParseFailure, colored_output: bool) {
    let line_info = format!("line {}", failure.line);

    if colored_output {
        println!(
            "  {} {} {}",
            "✗".red().bold(),
            line_info.blue().bold(),
            failure.source
        );
        println!("    {} {}", "→".dimmed(), failure.message.red());
    } else {
        println!("  ✗ {} {}", line_info, failure.source);
        println!("    → {}", failure.message);
    }
}

pub fn print_json_output(summary: &ParseSummary) {
    let signatures = summary
        .signatures
        .iter()
        .map(|s| JsonSignature {
            name: s.name.clone(),
            return_type: s.return_type.clone(),
            access_modifier: s.access_modifier.clone(),
            arguments: s
                .arguments
                .iter()
                .map(|a: &Argument| JsonArgument {
                    ty: a.ty.clone(),
                    name: a.name.clone(),
                })
                .collect(),
        })
        .collect();

    let failures = summary
        .failures
        .iter()
        .map(|f| JsonFailure {
            line: f.line,
            source: f.source.clone(),
            error: f.message.clone(),
        })
        .collect();

    let output = JsonOutput {
        parsed: summary.parsed_count,
        errors: summary.error_count,
        signatures,
        failures,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_parse_summary(summary: &ParseSummary, colored: bool) {
    println!();
    if summary.error_count == 0 {
        let sig_word = if summary.parsed_count == 1 {
            "signature"
        } else {
            "signatures"
        };
        if colored {
            println!(
                "{}",
                format!("✓ {} {} parsed", summary.parsed_count, sig_word)
                    .green()
                    .bold()
            );
        } else {
            println!("✓ {} {} parsed", summary.parsed_count, sig_word);
        }
    } else {
        let error_word = if summary.error_count == 1 {
            "error"
        } else {
            "errors"
        };
        if colored {
            println!(
                "{} {} {} ({} parsed)",
                "✗".red().bold(),
                summary.error_count.to_string().red().bold(),
                error_word,
                summary.parsed_count
            );
        } else {
            println!(
                "✗ {} {} ({} parsed)",
                summary.error_count, error_word, summary.parsed_count
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_signature() {
        let sig = crate::parse("public void log(String value)").unwrap();
        assert_eq!(render_signature(&sig), "public void log(String value)");

        let sig = crate::parse("int max( int a ,  int b )").unwrap();
        assert_eq!(render_signature(&sig), "int max(int a, int b)");
    }
}
