//! Line and token splitting
//!
//! Raw tab text is split on '\n' into lines, and each line on runs of
//! whitespace into tokens. Lines keep their order, empty ones included, so
//! converted output can be rebuilt with the same line breaks.

use serde::{Deserialize, Serialize};

/// A whitespace-delimited token and where it sits in the source
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// 0-based line index
    pub line: usize,
    /// 0-based column, in characters
    pub column: usize,
    /// Length in characters
    pub length: usize,
}

impl Token {
    pub fn new(text: String, line: usize, column: usize) -> Self {
        let length = text.chars().count();
        Self {
            text,
            line,
            column,
            length,
        }
    }
}

/// One source line and its tokens
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    pub index: usize,
    pub tokens: Vec<Token>,
}

impl SourceLine {
    /// Empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Split text into lines of tokens
pub fn tokenize(text: &str) -> Vec<SourceLine> {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| SourceLine {
            index,
            tokens: tokenize_line(line, index),
        })
        .collect()
}

fn tokenize_line(line: &str, index: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for (column, ch) in line.chars().enumerate() {
        if ch.is_whitespace() {
            if !current.is_empty() {
                tokens.push(Token::new(std::mem::take(&mut current), index, start));
            }
        } else {
            if current.is_empty() {
                start = column;
            }
            current.push(ch);
        }
    }

    if !current.is_empty() {
        tokens.push(Token::new(current, index, start));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &SourceLine) -> Vec<&str> {
        line.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_single_line() {
        let lines = tokenize("+4 -4 +5");
        assert_eq!(lines.len(), 1);
        assert_eq!(texts(&lines[0]), vec!["+4", "-4", "+5"]);
    }

    #[test]
    fn test_mixed_whitespace() {
        let lines = tokenize("  +4\t\t-4   +5 \r");
        assert_eq!(texts(&lines[0]), vec!["+4", "-4", "+5"]);
        assert_eq!(lines[0].tokens[0].column, 2);
        assert_eq!(lines[0].tokens[1].column, 6);
        assert_eq!(lines[0].tokens[2].column, 11);
    }

    #[test]
    fn test_empty_lines_are_kept() {
        let lines = tokenize("+4\n\n   \n-5");
        assert_eq!(lines.len(), 4);
        assert!(!lines[0].is_blank());
        assert!(lines[1].is_blank());
        assert!(lines[2].is_blank());
        assert_eq!(lines[3].tokens[0].line, 3);
    }

    #[test]
    fn test_empty_input_is_one_blank_line() {
        let lines = tokenize("");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_blank());
    }

    #[test]
    fn test_length_counts_characters() {
        let lines = tokenize("é+4 10");
        assert_eq!(lines[0].tokens[0].length, 3);
        assert_eq!(lines[0].tokens[1].column, 4);
    }
}
