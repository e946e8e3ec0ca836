pub type Token = usize;

pub trait Tokenizer {
    /// Split raw text into the tokens this tokenizer counts and encodes.
    fn tokenize(&self, text: &str) -> Vec<String>;
    fn encode(&self, text: &str) -> Vec<Token>;
    fn decode(&self, ids: &[Token]) -> String;
}
