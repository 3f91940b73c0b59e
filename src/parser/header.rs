use crate::parser::ParseError;

/// Classified pre-parenthesis portion of a signature.
///
/// The only signal for an access modifier is token count: a three-token
/// header carries one, a two-token header does not. There is no keyword
/// whitelist, so `static void run` classifies `static` as the modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    Plain {
        return_type: String,
        name: String,
    },
    WithModifier {
        modifier: String,
        return_type: String,
        name: String,
    },
}

pub fn parse_header(header: &str) -> Result<Header, ParseError> {
    let tokens: Vec<&str> = header.split(' ').filter(|t| !t.is_empty()).collect();

    match tokens.as_slice() {
        [return_type, name] => Ok(Header::Plain {
            return_type: return_type.to_string(),
            name: name.to_string(),
        }),
        [modifier, return_type, name] => Ok(Header::WithModifier {
            modifier: modifier.to_string(),
            return_type: return_type.to_string(),
            name: name.to_string(),
        }),
        other => Err(ParseError::MalformedHeader {
            token_count: other.len(),
        }),
    }
}
