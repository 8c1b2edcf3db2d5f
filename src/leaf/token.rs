//! String tokenizer
//!
//! Item-tuple: `String`, one token per advance.
//!
//! Separators and trim characters are both skipped before each token, so
//! runs of separators collapse and no token is ever empty.

use crate::{Enumerator, EnumeratorError, TokenConfig};

/// Enumerator over the tokens of a string
#[derive(Debug, Clone)]
pub struct Tokens {
    input: String,
    pos: usize,
    config: TokenConfig,
}

/// Tokenize `input` with `config`
pub fn tokens(input: impl Into<String>, config: &TokenConfig) -> Result<Tokens, EnumeratorError> {
    config.validate()?;
    Ok(Tokens {
        input: input.into(),
        pos: 0,
        config: config.clone(),
    })
}

impl Enumerator for Tokens {
    type Item = String;

    fn enumerate(&mut self) -> Option<String> {
        let config = &self.config;
        let rest = self.input[self.pos..]
            .trim_start_matches(|c| config.is_trim(c) || config.is_separator(c));
        if rest.is_empty() {
            self.pos = self.input.len();
            return None;
        }
        let start = self.input.len() - rest.len();

        let (field, consumed) = match rest.char_indices().find(|&(_, c)| config.is_separator(c)) {
            Some((idx, sep)) => (&rest[..idx], idx + sep.len_utf8()),
            None => (rest, rest.len()),
        };
        let token = field.trim_end_matches(|c| config.is_trim(c)).to_string();

        self.pos = start + consumed;
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn split(input: &str, sep: &str, trim: &str) -> Vec<String> {
        let config = TokenConfig::new(sep).with_trim(trim);
        tokens(input, &config)
            .expect("valid config")
            .into_iter()
            .collect()
    }

    #[test_case("a, b, c", ",", " ", &["a", "b", "c"] ; "trimmed commas")]
    #[test_case("a,,b", ",", "", &["a", "b"] ; "empty interior field")]
    #[test_case(",a", ",", "", &["a"] ; "leading separator")]
    #[test_case("a,,", ",", "", &["a"] ; "trailing separators")]
    #[test_case(",,a,,", ",", "", &["a"] ; "separators around token")]
    #[test_case(" , ,a", ",", " ", &["a"] ; "blank fields")]
    #[test_case("a,b,", ",", "", &["a", "b"] ; "trailing separator")]
    #[test_case("", ",", " ", &[] ; "empty input")]
    #[test_case("   ", ",", " ", &[] ; "only trim characters")]
    #[test_case(" x ; y ;z", ";", " ", &["x", "y", "z"] ; "semicolons")]
    #[test_case("k=v;a,b", ",;", "", &["k=v", "a", "b"] ; "several separators")]
    #[test_case("\tone\t|two|", "|", "\t", &["one", "two"] ; "tab trimming")]
    #[test_case("α→β→γ", "→", "", &["α", "β", "γ"] ; "multibyte separator")]
    fn test_tokenize(input: &str, sep: &str, trim: &str, expected: &[&str]) {
        assert_eq!(split(input, sep, trim), expected);
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let mut e = tokens("a", &TokenConfig::default()).expect("valid config");
        assert_eq!(e.enumerate().as_deref(), Some("a"));
        assert_eq!(e.enumerate(), None);
        assert_eq!(e.enumerate(), None);
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        assert!(tokens("a b", &TokenConfig::new("")).is_err());
    }
}
