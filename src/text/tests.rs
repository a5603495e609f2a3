#[cfg(test)]
mod tests {
    use super::super::samples::{find_sample, sample_texts};
    use super::super::stats::{count_stats, is_js_whitespace, TextStats};

    fn stats(
        characters: usize,
        characters_no_spaces: usize,
        words: usize,
        sentences: usize,
        paragraphs: usize,
        lines: usize,
    ) -> TextStats {
        TextStats {
            characters,
            characters_no_spaces,
            words,
            sentences,
            paragraphs,
            lines,
        }
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(count_stats(""), stats(0, 0, 0, 0, 0, 1));
    }

    #[test]
    fn test_whitespace_only_text() {
        assert_eq!(count_stats("   \n\t \n"), stats(0, 0, 0, 0, 0, 1));
    }

    #[test]
    fn test_single_sentence() {
        assert_eq!(count_stats("Hello world."), stats(12, 11, 2, 1, 1, 1));
    }

    #[test]
    fn test_blank_line_separates_paragraphs() {
        let result = count_stats("Line one\n\nLine two");
        assert_eq!(result.words, 4);
        assert_eq!(result.lines, 3);
        assert_eq!(result.paragraphs, 2);
        // No terminator, but there are words
        assert_eq!(result.sentences, 1);
    }

    #[test]
    fn test_whitespace_between_newlines_still_breaks() {
        let result = count_stats("First.\n  \t\nSecond.\n\n\n\nThird.");
        assert_eq!(result.paragraphs, 3);
        assert_eq!(result.sentences, 3);
        assert_eq!(result.lines, 7);
    }

    #[test]
    fn test_single_newlines_do_not_break_paragraphs() {
        let result = count_stats("one\ntwo\nthree");
        assert_eq!(result.paragraphs, 1);
        assert_eq!(result.lines, 3);
        assert_eq!(result.words, 3);
    }

    #[test]
    fn test_punctuation_runs_count_once() {
        assert_eq!(count_stats("Wait... What?! Yes.").sentences, 3);
        // Known heuristic limitation: abbreviations end sentences
        assert_eq!(count_stats("Mr. Smith.").sentences, 2);
    }

    #[test]
    fn test_words_split_on_any_whitespace() {
        let result = count_stats("  alpha\tbeta \n gamma   ");
        assert_eq!(result.words, 3);
        assert_eq!(result.characters, 23);
        assert_eq!(result.characters_no_spaces, 14);
    }

    #[test]
    fn test_characters_are_utf16_units() {
        // 'é' is one unit, the emoji is a surrogate pair
        let result = count_stats("café 😀");
        assert_eq!(result.characters, 7);
        assert_eq!(result.characters_no_spaces, 6);
        assert_eq!(result.words, 2);
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        let result = count_stats("a\u{FEFF}b");
        assert_eq!(result.words, 2);
        assert_eq!(result.characters, 3);
        assert_eq!(result.characters_no_spaces, 2);

        assert_eq!(count_stats("\u{FEFF}"), TextStats::empty());
        assert_eq!(count_stats("one\n\u{FEFF}\ntwo").paragraphs, 2);
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        let result = count_stats("a\u{85}b");
        assert_eq!(result.words, 1);
        assert_eq!(result.characters_no_spaces, 3);
        assert_eq!(count_stats("one\n\u{85}\ntwo").paragraphs, 1);
    }

    #[test]
    fn test_is_js_whitespace() {
        for c in [' ', '\t', '\n', '\r', '\u{A0}', '\u{2028}', '\u{3000}', '\u{FEFF}'] {
            assert!(is_js_whitespace(c), "{:?}", c);
        }
        for c in ['a', '\u{85}', '\u{200B}'] {
            assert!(!is_js_whitespace(c), "{:?}", c);
        }
    }

    #[test]
    fn test_trailing_newline_adds_a_line() {
        assert_eq!(count_stats("done.\n").lines, 2);
    }

    #[test]
    fn test_sample_texts() {
        assert_eq!(sample_texts().len(), 3);
        for sample in sample_texts() {
            let result = count_stats(sample.content);
            assert_eq!(result.paragraphs, 1);
            assert_eq!(result.lines, 1);
            assert!(result.sentences >= 3);
        }

        let lorem = find_sample("lorem ipsum").unwrap();
        assert_eq!(count_stats(lorem.content).sentences, 3);
        assert!(find_sample("Haiku").is_none());
    }
}
