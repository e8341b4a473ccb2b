//! Quote-aware command line tokenizer
//!
//! Splits a typed line on whitespace, treating a double-quoted substring
//! as part of a single token so that `add TXT foo "a b c"` yields the
//! argument `a b c`. Consecutive separators collapse; an unterminated
//! quote is a malformed-input condition, not a token.

use crate::error::{Error, Result};

/// Split `line` into tokens, honoring double quotes
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    // Tracks whether `current` represents a token at all, so that a
    // quoted empty string ("") still produces one empty token.
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(Error::UnterminatedQuote);
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_split() {
        let tokens = tokenize("delete A host").unwrap();
        assert_eq!(tokens, vec!["delete", "A", "host"]);
    }

    #[test]
    fn test_quoted_substring_is_one_token() {
        let tokens = tokenize("add TXT foo \"a b c\"").unwrap();
        assert_eq!(tokens, vec!["add", "TXT", "foo", "a b c"]);
    }

    #[test]
    fn test_quotes_join_adjacent_text() {
        let tokens = tokenize("txt foo he\"llo wo\"rld").unwrap();
        assert_eq!(tokens, vec!["txt", "foo", "hello world"]);
    }

    #[test]
    fn test_consecutive_separators_collapse() {
        let tokens = tokenize("  list \t  A  ").unwrap();
        assert_eq!(tokens, vec!["list", "A"]);
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   \t ").unwrap().is_empty());
    }

    #[test]
    fn test_quoted_empty_token() {
        let tokens = tokenize("add TXT foo \"\"").unwrap();
        assert_eq!(tokens, vec!["add", "TXT", "foo", ""]);
    }

    #[test]
    fn test_unterminated_quote() {
        assert!(matches!(
            tokenize("add TXT foo \"a b"),
            Err(Error::UnterminatedQuote)
        ));
    }
}
