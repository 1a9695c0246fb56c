//! Output line reconstruction
//!
//! Converted tokens are collected per source line and joined with single
//! spaces. A blank source line becomes an empty output line. A non-blank
//! source line that emits nothing (every token skipped or dropped) is left
//! out of the output entirely.

use crate::parse::SourceLine;

pub struct LineAssembler<'a> {
    lines: &'a [SourceLine],
    emitted: Vec<Vec<String>>,
}

impl<'a> LineAssembler<'a> {
    pub fn new(lines: &'a [SourceLine]) -> Self {
        Self {
            lines,
            emitted: vec![Vec::new(); lines.len()],
        }
    }

    /// Append an output token to source line `line`
    pub fn emit(&mut self, line: usize, token: String) {
        if let Some(tokens) = self.emitted.get_mut(line) {
            tokens.push(token);
        }
    }

    pub fn finish(self) -> String {
        let mut output: Vec<String> = Vec::with_capacity(self.lines.len());

        for (line, tokens) in self.lines.iter().zip(self.emitted) {
            if line.is_blank() {
                output.push(String::new());
            } else if !tokens.is_empty() {
                output.push(tokens.join(" "));
            }
        }

        output.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::tokenize;

    #[test]
    fn test_joins_tokens_with_single_space() {
        let lines = tokenize("+4   -5\t+6");
        let mut assembler = LineAssembler::new(&lines);
        for token in ["9", "12", "13"] {
            assembler.emit(0, token.to_string());
        }
        assert_eq!(assembler.finish(), "9 12 13");
    }

    #[test]
    fn test_blank_lines_kept_and_silent_lines_dropped() {
        let lines = tokenize("+4\n\nfoo bar\n-5");
        let mut assembler = LineAssembler::new(&lines);
        assembler.emit(0, "9".to_string());
        assembler.emit(3, "12".to_string());
        assert_eq!(assembler.finish(), "9\n\n12");
    }

    #[test]
    fn test_out_of_range_line_is_ignored() {
        let lines = tokenize("+4");
        let mut assembler = LineAssembler::new(&lines);
        assembler.emit(5, "9".to_string());
        assert_eq!(assembler.finish(), "");
    }
}
