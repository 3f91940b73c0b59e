pub mod cli;
pub mod config;
pub mod parser;

pub use config::Config;
pub use parser::{parse, ParseError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub return_type: Option<String>,
    pub access_modifier: Option<String>,
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub ty: String,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct ParseSummary {
    pub parsed_count: usize,
    pub error_count: usize,
    pub signatures: Vec<MethodSignature>,
    pub failures: Vec<ParseFailure>,
}

#[derive(Debug, Clone)]
pub struct ParseFailure {
    pub line: usize,
    pub source: String,
    pub message: String,
}
