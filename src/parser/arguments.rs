use crate::parser::{splitter, ParseError};
use crate::Argument;

/// Recover the ordered `type name` pairs from the parenthesized section of a
/// signature, parentheses included.
///
/// The section is cut on `,`, `(` and `)`, each span is trimmed, and a span
/// must then split into exactly two whitespace-separated tokens. Empty
/// parentheses yield an empty vector.
pub fn parse_arguments(args_section: &str) -> Result<Vec<Argument>, ParseError> {
    let spans = splitter::split_by_delimiters(args_section, &[",", "(", ")"]);

    let mut arguments = Vec::with_capacity(spans.len());
    for span in spans {
        let trimmed = span.trim();
        if trimmed.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        match tokens.as_slice() {
            [ty, name] => arguments.push(Argument {
                ty: ty.to_string(),
                name: name.to_string(),
            }),
            _ => {
                return Err(ParseError::MalformedArgument {
                    span: trimmed.to_string(),
                })
            }
        }
    }

    Ok(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_argument() {
        let args = parse_arguments("(String value)").unwrap();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].ty, "String");
        assert_eq!(args[0].name, "value");
    }

    #[test]
    fn test_order_preserved() {
        let args = parse_arguments("(int x, int y, int z, float magnitude)").unwrap();
        let names: Vec<&str> = args.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "z", "magnitude"]);
    }

    #[test]
    fn test_empty_parentheses() {
        assert!(parse_arguments("()").unwrap().is_empty());
    }

    #[test]
    fn test_extra_whitespace_around_commas() {
        let args = parse_arguments("( int x ,  int y )").unwrap();
        assert_eq!(args.len(), 2);
        assert_eq!(args[1].ty, "int");
        assert_eq!(args[1].name, "y");
    }

    #[test]
    fn test_missing_argument_name() {
        let err = parse_arguments("(int)").unwrap_err();
        assert!(matches!(err, ParseError::MalformedArgument { ref span } if span == "int"));
    }

    #[test]
    fn test_too_many_argument_tokens() {
        // Strict: extra words are rejected, not silently dropped
        let err = parse_arguments("(final int x)").unwrap_err();
        assert!(matches!(err, ParseError::MalformedArgument { .. }));
    }
}
