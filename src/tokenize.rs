//! Splitting document text into normalized words.

/// One word of a document, with its 1-based ordinal among the document's words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The lowercased word.
    pub word: String,
    /// 1-based position of the word in the token stream (not a byte offset).
    pub position: u32,
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Iterator over the tokens of a piece of text, left to right.
///
/// A token is a maximal run of ASCII letters, digits and underscores. Every
/// other character, including non-ASCII ones, is a separator.
pub struct Tokens<'a> {
    text: &'a str,
    offset: usize,
    position: u32,
}

impl<'a> Tokens<'a> {
    /// Start tokenizing `text`.
    pub fn new(text: &'a str) -> Tokens<'a> {
        Tokens {
            text,
            offset: 0,
            position: 0,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let bytes = self.text.as_bytes();
        let start = self.offset + bytes[self.offset..].iter().position(|&b| is_word_byte(b))?;
        let end = bytes[start..]
            .iter()
            .position(|&b| !is_word_byte(b))
            .map_or(bytes.len(), |n| start + n);
        self.offset = end;
        self.position += 1;

        // Word bytes are all ASCII, so `start..end` falls on char boundaries.
        Some(Token {
            word: self.text[start..end].to_ascii_lowercase(),
            position: self.position,
        })
    }
}

/// Tokenize `text` into its normalized words and their positions.
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokens::new(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<(String, u32)> {
        tokenize(text)
            .into_iter()
            .map(|t| (t.word, t.position))
            .collect()
    }

    #[test]
    fn lowercases_and_counts_tokens() {
        assert_eq!(
            words("The quick  brown,fox"),
            vec![
                ("the".to_string(), 1),
                ("quick".to_string(), 2),
                ("brown".to_string(), 3),
                ("fox".to_string(), 4),
            ]
        );
    }

    #[test]
    fn underscores_and_digits_are_word_characters() {
        assert_eq!(
            words("snake_case x86-64"),
            vec![
                ("snake_case".to_string(), 1),
                ("x86".to_string(), 2),
                ("64".to_string(), 3),
            ]
        );
    }

    #[test]
    fn non_ascii_characters_separate_words() {
        assert_eq!(
            words("café—Olé"),
            vec![
                ("caf".to_string(), 1),
                ("ol".to_string(), 2),
            ]
        );
    }

    #[test]
    fn empty_and_separator_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ,.;!? ").is_empty());
    }

    #[test]
    fn repeated_calls_agree() {
        let text = "a b a, c: A";
        assert_eq!(tokenize(text), tokenize(text));
    }
}
