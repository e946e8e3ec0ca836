use indexmap::IndexMap;
use log::{debug, trace};

use crate::base::{Token, Tokenizer};

pub const DEFAULT_MAX_VOCAB_SIZE: usize = 200;

/// Lowercasing whitespace tokenizer with a frequency-ranked, bounded vocabulary.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    max_vocab_size: usize,
    word_to_id: IndexMap<String, Token>,
    id_to_word: IndexMap<Token, String>,
}

impl WordTokenizer {
    pub fn new(max_vocab_size: usize) -> Self {
        assert!(max_vocab_size > 0, "Vocab size must be at least 1");
        WordTokenizer {
            max_vocab_size,
            word_to_id: IndexMap::new(),
            id_to_word: IndexMap::new(),
        }
    }

    fn get_stats<S: AsRef<str>>(&self, corpus: &[S]) -> IndexMap<String, usize> {
        // insertion order of the map is the first-seen order of each word
        let mut counts = IndexMap::new();
        for sentence in corpus {
            for word in self.tokenize(sentence.as_ref()) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }
        counts
    }

    fn sorted_stats(&self, stats: IndexMap<String, usize>) -> Vec<(String, usize)> {
        let mut sorted_words: Vec<_> = stats.into_iter().collect();
        // stable sort: equal counts keep first-seen order
        sorted_words.sort_by(|a, b| b.1.cmp(&a.1));
        sorted_words
    }

    /// Build a vocabulary of at most `max_vocab_size` words from `corpus`.
    ///
    /// The most frequent words get the lowest ids. Words with the same count are
    /// ranked by where they first appear in the corpus. Any previous vocabulary is
    /// discarded.
    pub fn build_vocabulary<S: AsRef<str>>(&mut self, corpus: &[S]) {
        self.word_to_id.clear();
        self.id_to_word.clear();

        let stats = self.get_stats(corpus);
        let distinct = stats.len();
        let sorted = self.sorted_stats(stats);

        for (id, (word, count)) in sorted.into_iter().take(self.max_vocab_size).enumerate() {
            trace!("vocab[{id}] = {word:?} ({count} occurrences)");
            self.id_to_word.insert(id, word.clone());
            self.word_to_id.insert(word, id);
        }
        debug!(
            "built vocabulary of {} words from {} sentences ({} distinct, bound {})",
            self.word_to_id.len(),
            corpus.len(),
            distinct,
            self.max_vocab_size
        );
    }

    pub fn max_vocab_size(&self) -> usize {
        self.max_vocab_size
    }

    pub fn vocab_size(&self) -> usize {
        self.word_to_id.len()
    }

    pub fn word_to_id(&self) -> &IndexMap<String, Token> {
        &self.word_to_id
    }

    pub fn id_to_word(&self) -> &IndexMap<Token, String> {
        &self.id_to_word
    }

    pub fn id_of(&self, word: &str) -> Option<Token> {
        self.word_to_id.get(word).copied()
    }

    pub fn word_of(&self, id: Token) -> Option<&str> {
        self.id_to_word.get(&id).map(String::as_str)
    }
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VOCAB_SIZE)
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(is_separator)
            .filter(|word| !word.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Words outside the vocabulary are dropped.
    fn encode(&self, text: &str) -> Vec<Token> {
        self.tokenize(text)
            .iter()
            .filter_map(|word| self.id_of(word))
            .collect()
    }

    /// Unknown ids are dropped; the remaining words are joined by single spaces.
    fn decode(&self, ids: &[Token]) -> String {
        let words: Vec<&str> = ids.iter().filter_map(|&id| self.word_of(id)).collect();
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_splits_on_any_whitespace() {
        let t = WordTokenizer::default();
        assert_eq!(t.tokenize("Hello World"), vec!["hello", "world"]);
        assert_eq!(t.tokenize("  The\tQUICK\n fox  "), vec!["the", "quick", "fox"]);
    }

    #[test]
    fn tokenize_splits_on_ascii_separator_controls() {
        let t = WordTokenizer::default();
        assert_eq!(t.tokenize("a\x1cB\x1dc\x1e\x1fd"), vec!["a", "b", "c", "d"]);
        assert_eq!(t.tokenize("x\u{a0}y\u{2003}z"), vec!["x", "y", "z"]);
    }

    #[test]
    fn tokenize_empty_and_blank_input() {
        let t = WordTokenizer::default();
        assert!(t.tokenize("").is_empty());
        assert!(t.tokenize(" \t\n\x1f ").is_empty());
    }

    #[test]
    fn new_tokenizer_has_empty_vocabulary() {
        let t = WordTokenizer::new(5);
        assert_eq!(t.max_vocab_size(), 5);
        assert_eq!(t.vocab_size(), 0);
        assert!(t.id_to_word().is_empty());
    }

    #[test]
    #[should_panic(expected = "Vocab size must be at least 1")]
    fn zero_vocab_size_is_rejected() {
        WordTokenizer::new(0);
    }

    #[test]
    fn build_keeps_most_frequent_words() {
        let mut t = WordTokenizer::new(2);
        t.build_vocabulary(&["a a b", "b c"]);
        assert_eq!(t.vocab_size(), 2);
        assert_eq!(t.id_of("a"), Some(0));
        assert_eq!(t.id_of("b"), Some(1));
        assert_eq!(t.id_of("c"), None);
    }

    #[test]
    fn ties_are_broken_by_first_occurrence() {
        let mut t = WordTokenizer::new(10);
        t.build_vocabulary(&["zeta alpha", "mid zeta alpha mid"]);
        // all three words occur twice; zeta appears first
        assert_eq!(t.word_of(0), Some("zeta"));
        assert_eq!(t.word_of(1), Some("alpha"));
        assert_eq!(t.word_of(2), Some("mid"));
    }

    #[test]
    fn counting_is_case_insensitive() {
        let mut t = WordTokenizer::new(1);
        t.build_vocabulary(&["rare Cat", "CAT cat"]);
        assert_eq!(t.word_of(0), Some("cat"));
    }

    #[test]
    fn empty_corpus_gives_empty_vocabulary() {
        let mut t = WordTokenizer::new(3);
        t.build_vocabulary::<&str>(&[]);
        assert_eq!(t.vocab_size(), 0);
    }

    #[test]
    fn rebuild_replaces_previous_vocabulary() {
        let mut t = WordTokenizer::new(3);
        t.build_vocabulary(&["old words here"]);
        t.build_vocabulary(&["new"]);
        assert_eq!(t.vocab_size(), 1);
        assert_eq!(t.id_of("old"), None);
        assert_eq!(t.id_of("new"), Some(0));
        assert_eq!(t.word_of(1), None);
    }

    #[test]
    fn encode_and_decode_skip_unknowns() {
        let mut t = WordTokenizer::new(2);
        t.build_vocabulary(&["the cat the dog the cat"]);
        assert_eq!(t.encode("The bird saw the CAT"), vec![0, 0, 1]);
        assert_eq!(t.decode(&[1, 42, 0]), "cat the");
        assert_eq!(t.decode(&[]), "");
    }
}
