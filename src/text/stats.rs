use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    /// A run of sentence terminators counts as one sentence end: "Wait..." or "Really?!"
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]+").unwrap();

    /// Whitespace containing a blank line separates paragraphs
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n[\s\x{FEFF}&&[^\x{85}]]*\n").unwrap();
}

/// Whitespace as browser scripts see it: the byte order mark counts, NEL does not
pub fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}

/// Counts shown by the word counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub lines: usize,
}

impl TextStats {
    /// Stats for a blank document: nothing but a single empty line
    pub fn empty() -> Self {
        Self {
            lines: 1,
            ..Self::default()
        }
    }
}

/// Compute every statistic for `text` in a few linear passes.
///
/// Character counts are in UTF-16 code units, the unit browser text fields report lengths in.
/// Sentences are punctuation runs, so abbreviations like "Mr." count as sentence ends.
pub fn count_stats(text: &str) -> TextStats {
    if text.trim_matches(is_js_whitespace).is_empty() {
        return TextStats::empty();
    }

    let characters = text.encode_utf16().count();
    let characters_no_spaces: usize = text
        .chars()
        .filter(|&c| !is_js_whitespace(c))
        .map(char::len_utf16)
        .sum();

    let words = text
        .split(is_js_whitespace)
        .filter(|w| !w.is_empty())
        .count();

    let sentences = match SENTENCE_END.find_iter(text).count() {
        0 if words > 0 => 1,
        n => n,
    };

    let paragraphs = PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !p.trim_matches(is_js_whitespace).is_empty())
        .count()
        .max(1);

    let lines = text.bytes().filter(|&b| b == b'\n').count() + 1;

    TextStats {
        characters,
        characters_no_spaces,
        words,
        sentences,
        paragraphs,
        lines,
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Characters:              {}", self.characters)?;
        writeln!(f, "Characters (no spaces):  {}", self.characters_no_spaces)?;
        writeln!(f, "Words:                   {}", self.words)?;
        writeln!(f, "Sentences:               {}", self.sentences)?;
        writeln!(f, "Paragraphs:              {}", self.paragraphs)?;
        write!(f, "Lines:                   {}", self.lines)
    }
}
