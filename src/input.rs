//! Parsing of the user's number list.

use crate::errors::ParseError;

/// Parse a list of integers separated by commas and/or whitespace.
///
/// `"3 9 2, 8,5 1"` parses to `[3, 9, 2, 8, 5, 1]`. Blank input and any
/// token that is not an integer are rejected.
pub fn parse_integer_list(text: &str) -> Result<Vec<i64>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| ParseError::InvalidToken {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Only separators, e.g. ",,,"
    if values.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spaces_and_commas() {
        assert_eq!(
            parse_integer_list("3 9 2, 8,5 1").unwrap(),
            vec![3, 9, 2, 8, 5, 1]
        );
    }

    #[test]
    fn test_parse_negative_numbers() {
        assert_eq!(parse_integer_list("-4, 0 ,7").unwrap(), vec![-4, 0, 7]);
    }

    #[test]
    fn test_parse_single_value() {
        assert_eq!(parse_integer_list("  42 ").unwrap(), vec![42]);
    }

    #[test]
    fn test_parse_blank_is_empty_error() {
        assert_eq!(parse_integer_list(""), Err(ParseError::Empty));
        assert_eq!(parse_integer_list("   \t\n"), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_only_separators_is_empty_error() {
        assert_eq!(parse_integer_list(", ,,"), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_non_integer_token() {
        assert_eq!(
            parse_integer_list("1 2 three"),
            Err(ParseError::InvalidToken {
                token: "three".to_string()
            })
        );
        assert!(matches!(
            parse_integer_list("1.5"),
            Err(ParseError::InvalidToken { .. })
        ));
    }
}
