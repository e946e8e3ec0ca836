use std::env;
use std::error::Error;
use std::fs::read_to_string;

use sandbox::{Calculator, DEFAULT_MAX_VOCAB_SIZE, Tokenizer, WordTokenizer, logging};

const SAMPLE_CORPUS: [&str; 4] = [
    "the quick brown fox jumps over the lazy dog",
    "the dog sleeps",
    "a fox is quick",
    "The Lazy Dog Wakes Up",
];

fn main() -> Result<(), Box<dyn Error>> {
    logging::initialize(logging::default_level());

    let mut args = env::args().skip(1);
    let corpus: Vec<String> = match args.next() {
        Some(path) => read_to_string(path)?.lines().map(ToOwned::to_owned).collect(),
        None => SAMPLE_CORPUS.iter().map(|s| s.to_string()).collect(),
    };
    let max_vocab_size = match args.next() {
        Some(raw) => raw.parse()?,
        None => DEFAULT_MAX_VOCAB_SIZE,
    };
    if max_vocab_size == 0 {
        return Err("vocabulary size must be at least 1".into());
    }

    let mut tokenizer = WordTokenizer::new(max_vocab_size);
    tokenizer.build_vocabulary(corpus.as_slice());

    let sample_text = "The lazy fox and the quick dog";
    let enc = tokenizer.encode(sample_text);
    let dec = tokenizer.decode(&enc);

    println!("vocabulary ({} words): {:?}", tokenizer.vocab_size(), tokenizer.id_to_word());
    println!("{:?}", enc);
    println!("{:?}", dec);

    let mut calculator = Calculator::new();
    calculator.add(10.0)?;
    calculator.multiply(2.0)?;
    calculator.subtract(50.0)?;
    println!("{} after {:?}", calculator.current_number(), calculator.previous_operations());

    let undone = calculator.undo_last_operation()?;
    println!("undid {} {}: {}", undone.1, undone.0, calculator.current_number());

    if let Err(err) = calculator.divide(-1.0) {
        println!("divide -1 rejected: {err}");
    }
    Ok(())
}
