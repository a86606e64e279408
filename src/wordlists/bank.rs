//! Word bank: acceptable guesses plus secret candidates
//!
//! The two sets stay distinct for the host (guess validation, secret
//! choice) and are unioned into the solver's dictionary.

use super::loader::{load_from_file, words_from_slice};
use super::{ALLOWED, ANSWERS, FALLBACK_WORDS};
use crate::core::Word;
use crate::solver::CandidatePool;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Where the word bank comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordBankSource {
    /// Embedded answers as secrets, embedded allowed list as guesses
    Embedded,
    /// Embedded answers for both roles
    AnswersOnly,
    /// One word per line, used for both roles
    File(PathBuf),
}

impl FromStr for WordBankSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => Self::Embedded,
            "answers" => Self::AnswersOnly,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

#[derive(Debug, Clone)]
pub struct WordBank {
    acceptable: FxHashSet<Word>,
    secrets: Vec<Word>,
}

impl WordBank {
    /// Build a bank; every secret is also an acceptable guess
    #[must_use]
    pub fn new(acceptable: Vec<Word>, secrets: Vec<Word>) -> Self {
        let mut secrets = secrets;
        secrets.sort_unstable();
        secrets.dedup();

        let acceptable = acceptable
            .into_iter()
            .chain(secrets.iter().copied())
            .collect();

        Self {
            acceptable,
            secrets,
        }
    }

    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ALLOWED), words_from_slice(ANSWERS))
    }

    #[must_use]
    pub fn answers_only() -> Self {
        let answers = words_from_slice(ANSWERS);
        Self::new(answers.clone(), answers)
    }

    /// Small built-in bank for degraded operation
    #[must_use]
    pub fn fallback() -> Self {
        let words = words_from_slice(FALLBACK_WORDS);
        Self::new(words.clone(), words)
    }

    /// Load a bank from a word-per-line file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or holds no valid words.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let words = load_from_file(path)?;
        if words.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "word list contains no valid 5-letter words",
            ));
        }
        Ok(Self::new(words.clone(), words))
    }

    /// Load from `source`, substituting the fallback bank if it is unavailable
    #[must_use]
    pub fn load(source: &WordBankSource) -> Self {
        let bank = match source {
            WordBankSource::Embedded => Self::embedded(),
            WordBankSource::AnswersOnly => Self::answers_only(),
            WordBankSource::File(path) => Self::from_file(path).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "word bank unavailable, using built-in fallback");
                Self::fallback()
            }),
        };
        info!(
            acceptable = bank.acceptable.len(),
            secrets = bank.secrets.len(),
            "word bank loaded"
        );
        bank
    }

    /// Union of both sets, as the solver's starting pool
    #[must_use]
    pub fn dictionary(&self) -> CandidatePool {
        self.acceptable.iter().copied().collect()
    }

    #[must_use]
    pub fn is_acceptable(&self, word: &Word) -> bool {
        self.acceptable.contains(word)
    }

    #[must_use]
    pub fn is_secret(&self, word: &Word) -> bool {
        self.secrets.binary_search(word).is_ok()
    }

    /// Secret candidates in lexicographic order
    #[must_use]
    pub fn secrets(&self) -> &[Word] {
        &self.secrets
    }

    #[must_use]
    pub fn acceptable_count(&self) -> usize {
        self.acceptable.len()
    }

    /// Pick a secret uniformly at random
    pub fn random_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word> {
        self.secrets.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn source_from_str() {
        assert_eq!(
            "all".parse::<WordBankSource>(),
            Ok(WordBankSource::Embedded)
        );
        assert_eq!(
            "answers".parse::<WordBankSource>(),
            Ok(WordBankSource::AnswersOnly)
        );
        assert_eq!(
            "words.txt".parse::<WordBankSource>(),
            Ok(WordBankSource::File(PathBuf::from("words.txt")))
        );
    }

    #[test]
    fn embedded_bank_unions_into_dictionary() {
        let bank = WordBank::embedded();
        let dictionary = bank.dictionary();

        assert_eq!(bank.secrets().len(), ANSWERS.len());
        assert_eq!(dictionary.len(), bank.acceptable_count());
        assert!(bank.secrets().iter().all(|s| dictionary.contains(s)));
        assert!(dictionary.contains(&Word::new("salet").unwrap()));
    }

    #[test]
    fn acceptable_but_not_secret() {
        let bank = WordBank::embedded();
        let salet = Word::new("salet").unwrap();
        assert!(bank.is_acceptable(&salet));
        assert!(!bank.is_secret(&salet));
        assert!(bank.is_secret(&Word::new("crane").unwrap()));
    }

    #[test]
    fn secrets_are_always_acceptable() {
        let crane = Word::new("crane").unwrap();
        let bank = WordBank::new(Vec::new(), vec![crane]);
        assert!(bank.is_acceptable(&crane));
    }

    #[test]
    fn missing_file_falls_back() {
        let bank = WordBank::load(&WordBankSource::File(PathBuf::from("no/such/list.txt")));
        assert_eq!(bank.secrets().len(), FALLBACK_WORDS.len());
        assert!(!bank.dictionary().is_empty());
    }

    #[test]
    fn random_secret_is_seedable() {
        let bank = WordBank::embedded();
        let first = bank.random_secret(&mut StdRng::seed_from_u64(7));
        let second = bank.random_secret(&mut StdRng::seed_from_u64(7));

        assert!(first.is_some());
        assert_eq!(first, second);
        assert!(bank.is_secret(&first.unwrap()));
    }
}
