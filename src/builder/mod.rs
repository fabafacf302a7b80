//! Tools for building sentences and knowledge bases from text.
//!
//! - [parse_sentence] reads a single sentence, and is also available through [FromStr](std::str::FromStr) on [Sentence](crate::structures::sentence::Sentence).
//! - [read_sentences](KnowledgeBase::read_sentences) asserts each sentence of some text, one sentence per line.

mod parse;
pub use parse::parse_sentence;

use std::io::BufRead;

use crate::{
    knowledge_base::{KnowledgeBase, SentenceOk},
    misc::log::targets::{self},
    types::err::{self},
};

/// Methods for building a knowledge base.
impl KnowledgeBase {
    /// Asserts each sentence read, with one sentence per line.
    ///
    /// Blank lines, and any text following a `#`, are ignored.
    /// Returns a count of the sentences added (excluding duplicates).
    ///
    /// ```rust
    /// # use otter_entail::knowledge_base::KnowledgeBase;
    /// let mut kb = KnowledgeBase::default();
    ///
    /// let text = "
    /// ## Breeze at the start.
    /// L11 <=> (F21 | F12)
    /// ~F11
    /// L11
    /// ~F11 # Repeated.
    /// ";
    ///
    /// assert_eq!(kb.read_sentences(text.as_bytes()), Ok(3));
    /// assert_eq!(kb.len(), 3);
    /// ```
    pub fn read_sentences(&mut self, reader: impl BufRead) -> Result<usize, err::ParseError> {
        let mut added = 0;

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::error!(target: targets::KNOWLEDGE_BASE, "Failed to read line {line_number}: {e}");
                    return Err(err::ParseError::Read(line_number));
                }
            };

            let content = match line.split_once('#') {
                Some((content, _comment)) => content,
                None => line.as_str(),
            };
            if content.trim().is_empty() {
                continue;
            }

            let sentence = parse_sentence(content)
                .map_err(|e| err::ParseError::Line(line_number, Box::new(e)))?;

            if self.add(sentence) == SentenceOk::Added {
                added += 1;
            }
        }

        Ok(added)
    }
}
