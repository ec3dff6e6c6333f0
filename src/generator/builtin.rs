//! Built-in word-pick and integer-range generators

use std::borrow::Cow;

use rand::Rng;
use thiserror::Error;

use crate::words::{self, WordList};

use super::{GenerateContext, Generator, GeneratorError};

/// Failure cases of the built-in generators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuiltinError {
    /// The word list behind a word generator holds no entries
    #[error("word list is empty")]
    EmptyWordList,

    /// An integer generator was built with reversed bounds
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
}

/// Picks one uniformly random word from a word list.
#[derive(Debug, Clone)]
pub struct WordGenerator {
    words: Cow<'static, WordList>,
}

impl WordGenerator {
    /// Generator over a caller-supplied list.
    pub fn new(words: WordList) -> Self {
        Self {
            words: Cow::Owned(words),
        }
    }

    /// Generator over the embedded adjective list.
    pub fn adjectives() -> Self {
        Self {
            words: Cow::Borrowed(words::adjectives()),
        }
    }

    /// Generator over the embedded noun list.
    pub fn nouns() -> Self {
        Self {
            words: Cow::Borrowed(words::nouns()),
        }
    }

    /// Generator over the embedded verb list.
    pub fn verbs() -> Self {
        Self {
            words: Cow::Borrowed(words::verbs()),
        }
    }
}

impl Generator for WordGenerator {
    fn generate(&self, ctx: &mut GenerateContext<'_>) -> Result<String, GeneratorError> {
        self.words
            .choose(ctx.rng())
            .map(str::to_owned)
            .ok_or_else(|| BuiltinError::EmptyWordList.into())
    }
}

/// Draws one uniformly random integer from an inclusive range and renders
/// it in plain decimal.
#[derive(Debug, Clone)]
pub struct IntGenerator {
    min: i64,
    max: i64,
}

impl IntGenerator {
    /// Generator over `[min, max]`, both ends included.
    ///
    /// Bounds are not validated here; a range with `min > max` fails on
    /// its first draw.
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

impl Generator for IntGenerator {
    fn generate(&self, ctx: &mut GenerateContext<'_>) -> Result<String, GeneratorError> {
        if self.min > self.max {
            return Err(BuiltinError::InvalidRange {
                min: self.min,
                max: self.max,
            }
            .into());
        }
        let value: i64 = ctx.rng().random_range(self.min..=self.max);
        Ok(value.to_string())
    }
}

/// The stock bindings: three word lists and three digit ranges.
pub(crate) fn defaults() -> Vec<(&'static str, Box<dyn Generator>)> {
    vec![
        ("adj", Box::new(WordGenerator::adjectives())),
        ("noun", Box::new(WordGenerator::nouns())),
        ("verb", Box::new(WordGenerator::verbs())),
        ("digit", Box::new(IntGenerator::new(0, 9))),
        ("2-digit", Box::new(IntGenerator::new(10, 99))),
        ("3-digit", Box::new(IntGenerator::new(100, 999))),
    ]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tokio_util::sync::CancellationToken;

    use super::*;

    fn generate_with(generator: &dyn Generator, seed: u64) -> Result<String, GeneratorError> {
        let cancel = CancellationToken::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut ctx = GenerateContext::new(&cancel, &mut rng);
        generator.generate(&mut ctx)
    }

    #[test]
    fn test_word_generator_draws_from_its_list() {
        let list = WordList::from_words(["alpha", "beta", "gamma"]);
        let generator = WordGenerator::new(list.clone());
        for seed in 0..32 {
            let word = generate_with(&generator, seed).expect("Should generate");
            assert!(list.contains(&word), "'{word}' is not in the source list");
        }
    }

    #[test]
    fn test_word_generator_empty_list_fails() {
        let generator = WordGenerator::new(WordList::from_words(Vec::<String>::new()));
        let err = generate_with(&generator, 0).expect_err("Should fail on an empty list");
        assert_eq!(err.to_string(), "word list is empty");
    }

    #[test]
    fn test_embedded_list_generators_produce_words() {
        for generator in [
            WordGenerator::adjectives(),
            WordGenerator::nouns(),
            WordGenerator::verbs(),
        ] {
            let word = generate_with(&generator, 1).expect("Should generate");
            assert!(!word.is_empty());
        }
    }

    #[test]
    fn test_int_generator_stays_in_bounds() {
        let generator = IntGenerator::new(10, 99);
        for seed in 0..64 {
            let text = generate_with(&generator, seed).expect("Should generate");
            let value: i64 = text.parse().expect("Should be plain decimal");
            assert!((10..=99).contains(&value), "{value} is out of range");
        }
    }

    #[test]
    fn test_int_generator_single_value_range() {
        let generator = IntGenerator::new(7, 7);
        assert_eq!(generate_with(&generator, 0).expect("Should generate"), "7");
    }

    #[test]
    fn test_int_generator_negative_bounds() {
        let generator = IntGenerator::new(-5, -1);
        let text = generate_with(&generator, 3).expect("Should generate");
        let value: i64 = text.parse().expect("Should be plain decimal");
        assert!((-5..=-1).contains(&value));
        assert!(text.starts_with('-'));
    }

    #[test]
    fn test_int_generator_reversed_bounds_fail() {
        let generator = IntGenerator::new(9, 3);
        let err = generate_with(&generator, 0).expect_err("Should fail on reversed bounds");
        assert_eq!(err.to_string(), "invalid range: min 9 is greater than max 3");
    }

    #[test]
    fn test_defaults_cover_expected_keys() {
        let keys: Vec<&str> = defaults().iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, ["adj", "noun", "verb", "digit", "2-digit", "3-digit"]);
    }
}
