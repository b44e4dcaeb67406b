//! Rebuilds a [`Document`] from the analyzer's CONLL output.
//!
//! One token per line, a blank line closes the current sentence. Closing a
//! sentence resolves its heads and builds its dependency tree before it is
//! attached to the document.

pub mod record;

use log::debug;
use syntagma_doc::{Document, Sentence};
use syntagma_protocol::{Result, SyntagmaError};

pub use record::{parse_features, parse_record, FIELD_COUNT};

/// Line-by-line document builder.
pub struct DocumentParser {
    document: Document,
    current: Sentence,
    line: usize,
}

impl DocumentParser {
    pub fn new() -> Self {
        let document = Document::new();
        let current = document.new_sentence();
        Self {
            document,
            current,
            line: 0,
        }
    }

    /// Feeds the next line, without its terminator (a trailing `\r` is tolerated).
    pub fn feed(&mut self, line: &str) -> Result<()> {
        self.line += 1;
        let line = line.trim_end_matches(['\n', '\r']);

        if line.trim().is_empty() {
            return self.close_sentence();
        }

        let token = record::parse_record(line, self.line)?;
        let expected = self.current.len() + 1;
        if token.id.get() as usize != expected {
            return Err(SyntagmaError::MalformedRecord {
                line: self.line,
                reason: format!("token id {} out of sequence, expected {}", token.id, expected),
            });
        }
        self.current.push_token(token);
        Ok(())
    }

    /// Closes a trailing unterminated sentence and returns the document.
    pub fn finish(mut self) -> Result<Document> {
        self.close_sentence()?;
        self.document.resolve_all()?;
        debug!(
            "parsed {} sentences from {} lines",
            self.document.len(),
            self.line
        );
        Ok(self.document)
    }

    /// Lines read so far.
    pub fn line(&self) -> usize {
        self.line
    }

    fn close_sentence(&mut self) -> Result<()> {
        if self.current.is_empty() {
            return Ok(());
        }
        let finished = std::mem::replace(&mut self.current, self.document.new_sentence());
        self.document.attach(finished)?;
        // The placeholder still holds the slot just filled.
        self.current = self.document.new_sentence();
        Ok(())
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a sequence of lines.
pub fn parse_lines<I, S>(lines: I) -> Result<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = DocumentParser::new();
    for line in lines {
        parser.feed(line.as_ref())?;
    }
    parser.finish()
}

/// Parses a whole CONLL text.
pub fn parse_str(input: &str) -> Result<Document> {
    parse_lines(input.lines())
}
