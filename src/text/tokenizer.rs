// Word tokenizer.
//
// Alphanumeric runs become `Word` tokens. Every other non-whitespace
// character is emitted on its own as a `Punct` token, so callers can decide
// what to do with symbols. Whitespace only separates.

/// What kind of text a token covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of alphanumeric characters.
    Word,
    /// A single non-alphanumeric, non-whitespace character.
    Punct,
}

/// A slice of the input text plus its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Split `text` into word and punctuation tokens, in input order.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_alphanumeric() {
            word_start.get_or_insert(i);
            continue;
        }

        if let Some(start) = word_start.take() {
            tokens.push(Token {
                text: &text[start..i],
                kind: TokenKind::Word,
            });
        }

        if !c.is_whitespace() {
            tokens.push(Token {
                text: &text[i..i + c.len_utf8()],
                kind: TokenKind::Punct,
            });
        }
    }

    if let Some(start) = word_start {
        tokens.push(Token {
            text: &text[start..],
            kind: TokenKind::Word,
        });
    }

    tokens
}

/// True when `token` is non-empty and every character is alphanumeric.
pub fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

/// True when `token` is exactly one ASCII punctuation character
/// (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`).
pub fn is_punctuation(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_punctuation())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_words_and_punctuation_are_separate_tokens() {
        let tokens = tokenize("winner!! claim, now");
        assert_eq!(texts(&tokens), vec!["winner", "!", "!", "claim", ",", "now"]);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Punct);
    }

    #[test]
    fn test_whitespace_is_dropped() {
        let tokens = tokenize("  a \t b\n");
        assert_eq!(texts(&tokens), vec!["a", "b"]);
    }

    #[test]
    fn test_contractions_split_at_apostrophe() {
        let tokens = tokenize("don't");
        assert_eq!(texts(&tokens), vec!["don", "'", "t"]);
    }

    #[test]
    fn test_digits_are_word_characters() {
        let tokens = tokenize("call 08002986030 now");
        assert_eq!(texts(&tokens), vec!["call", "08002986030", "now"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Word));
    }

    #[test]
    fn test_non_ascii_letters_stay_in_words() {
        let tokens = tokenize("café £100");
        assert_eq!(texts(&tokens), vec!["café", "£", "100"]);
        assert_eq!(tokens[1].kind, TokenKind::Punct);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(is_alphanumeric("abc123"));
        assert!(!is_alphanumeric(""));
        assert!(!is_alphanumeric("e-mail"));
        assert!(!is_alphanumeric("!"));
    }

    #[test]
    fn test_is_punctuation() {
        assert!(is_punctuation("!"));
        assert!(is_punctuation("~"));
        assert!(!is_punctuation("!!"));
        assert!(!is_punctuation("a"));
        assert!(!is_punctuation("£"));
    }
}
