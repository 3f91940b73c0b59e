pub mod arguments;
pub mod header;
pub mod splitter;

use crate::MethodSignature;
use header::Header;
use thiserror::Error;

pub use splitter::split_by_delimiters;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("signature has no (...) argument section")]
    MissingArgumentList,

    #[error("header has {token_count} space-separated tokens, expected 2 or 3")]
    MalformedHeader { token_count: usize },

    #[error("argument span `{span}` does not form a `type name` pair")]
    MalformedArgument { span: String },
}

/// Parse a single-line method signature into its structured parts.
///
/// The accepted shape is `[accessModifier] returnType name(type name, ...)`.
/// The access modifier is optional and detected purely by header token count;
/// the parenthesized section may be empty. Malformed input fails with a
/// [`ParseError`] rather than producing a partial signature.
pub fn parse(signature: &str) -> Result<MethodSignature, ParseError> {
    let open = signature.find('(').ok_or(ParseError::MissingArgumentList)?;
    let (head, args_section) = signature.split_at(open);
    if !args_section.contains(')') {
        return Err(ParseError::MissingArgumentList);
    }

    let parsed_header = header::parse_header(head)?;
    let arguments = arguments::parse_arguments(args_section)?;

    let (access_modifier, return_type, name) = match parsed_header {
        Header::Plain { return_type, name } => (None, return_type, name),
        Header::WithModifier {
            modifier,
            return_type,
            name,
        } => (Some(modifier), return_type, name),
    };

    Ok(MethodSignature {
        name,
        return_type: Some(return_type),
        access_modifier,
        arguments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_with_modifier() {
        let sig = parse("public void log(String value)").unwrap();
        assert_eq!(sig.access_modifier.as_deref(), Some("public"));
        assert_eq!(sig.return_type.as_deref(), Some("void"));
        assert_eq!(sig.name, "log");
        assert_eq!(sig.arguments.len(), 1);
        assert_eq!(sig.arguments[0].ty, "String");
        assert_eq!(sig.arguments[0].name, "value");
    }

    #[test]
    fn test_signature_without_modifier() {
        let sig = parse("Vector3 distort(int x, int y, int z, float magnitude)").unwrap();
        assert_eq!(sig.access_modifier, None);
        assert_eq!(sig.return_type.as_deref(), Some("Vector3"));
        assert_eq!(sig.name, "distort");
        assert_eq!(sig.arguments.len(), 4);
        assert_eq!(sig.arguments[3].ty, "float");
        assert_eq!(sig.arguments[3].name, "magnitude");
    }

    #[test]
    fn test_signature_with_empty_parentheses() {
        let sig = parse("public DateTime getCurrentDateTime()").unwrap();
        assert_eq!(sig.access_modifier.as_deref(), Some("public"));
        assert_eq!(sig.return_type.as_deref(), Some("DateTime"));
        assert_eq!(sig.name, "getCurrentDateTime");
        assert!(sig.arguments.is_empty());
    }

    #[test]
    fn test_argument_round_trip() {
        let source = "int x, int y, float magnitude";
        let sig = parse(&format!("void move({})", source)).unwrap();
        let rebuilt = sig
            .arguments
            .iter()
            .map(|a| format!("{} {}", a.ty, a.name))
            .collect::<Vec<_>>()
            .join(", ");
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_missing_argument_list() {
        assert_eq!(parse("public void log"), Err(ParseError::MissingArgumentList));
        assert_eq!(parse("public void log("), Err(ParseError::MissingArgumentList));
    }

    #[test]
    fn test_malformed_header() {
        assert!(matches!(
            parse("log(int x)"),
            Err(ParseError::MalformedHeader { token_count: 1 })
        ));
    }

    #[test]
    fn test_malformed_argument() {
        assert!(matches!(
            parse("void log(int)"),
            Err(ParseError::MalformedArgument { .. })
        ));
    }
}
