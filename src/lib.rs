//! Two small standalone utilities: a word-level tokenizer that builds a bounded,
//! frequency-ranked vocabulary, and a calculator that keeps an undoable history.

pub mod base;
pub mod calculator;
pub mod logging;
pub mod word;

pub use base::{Token, Tokenizer};
pub use calculator::{Calculator, CalculatorError, Operation};
pub use word::{DEFAULT_MAX_VOCAB_SIZE, WordTokenizer};
