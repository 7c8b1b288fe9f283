//! Question bank: loading, the autocomplete pool, and the draw policy.
//!
//! ## Loading
//!
//! A `QuestionSource` supplies raw records per category. A category that
//! fails to load (or contains only invalid records) becomes an empty
//! list; that is non-fatal and simply means no questions are asked on
//! its tiles.
//!
//! ## Draw policy
//!
//! Draws are uniform among the questions not yet served this game. When
//! a category is exhausted its used-set is cleared and one question is
//! drawn uniformly from the full list; that reset draw is not marked
//! used, so the same question may be served again, including the one
//! that exhausted the cycle.

use std::fs;
use std::path::PathBuf;

use im::HashSet as ImHashSet;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::{Category, CategoryMap, GameRng};

use super::record::{Question, RawQuestion};

/// Why a category's records could not be fetched.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The record file could not be read.
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),

    /// The record file was not a valid JSON record array.
    #[error("failed to parse question file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Supplier of raw question records, one list per category.
///
/// Implemented over JSON files by `JsonFileSource`; tests implement it
/// over in-memory fixtures.
pub trait QuestionSource {
    /// Fetch the raw records for one category.
    fn fetch(&self, category: Category) -> Result<Vec<RawQuestion>, SourceError>;
}

/// Reads each category's records from `<dir>/<category file>`.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    /// Create a source rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl QuestionSource for JsonFileSource {
    fn fetch(&self, category: Category) -> Result<Vec<RawQuestion>, SourceError> {
        let text = fs::read_to_string(self.dir.join(category.file_name()))?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Loaded questions for all categories plus the global autocomplete pool.
///
/// Immutable after load; per-game used-question tracking lives in
/// `GameState` so the bank can be shared across restarts.
#[derive(Clone, Debug)]
pub struct QuestionBank {
    questions: CategoryMap<Vec<Question>>,
    answer_pool: Vec<String>,
}

impl QuestionBank {
    /// Load every category from `source`.
    ///
    /// Fetch failures and invalid records reduce to empty/shorter lists;
    /// loading never fails outright.
    #[must_use]
    pub fn load(source: &dyn QuestionSource) -> Self {
        let questions = CategoryMap::new(|category| {
            source
                .fetch(category)
                .unwrap_or_default()
                .into_iter()
                .filter_map(|raw| Question::from_record(category, raw).ok())
                .collect::<Vec<_>>()
        });

        let mut pool_set = FxHashSet::default();
        for list in questions.values() {
            for question in list {
                if let super::record::QuestionKind::FreeText { accepted } = &question.kind {
                    for variant in accepted {
                        pool_set.insert(variant.clone());
                    }
                }
            }
        }
        let mut answer_pool: Vec<String> = pool_set.into_iter().collect();
        answer_pool.sort();

        Self {
            questions,
            answer_pool,
        }
    }

    /// Create an empty bank (no questions in any category).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            questions: CategoryMap::new(|_| Vec::new()),
            answer_pool: Vec::new(),
        }
    }

    /// The loaded questions for one category.
    #[must_use]
    pub fn questions(&self, category: Category) -> &[Question] {
        &self.questions[category]
    }

    /// All derived free-text answers, sorted, for autocomplete UIs.
    /// Suggestion data only; correctness never consults this.
    #[must_use]
    pub fn answer_pool(&self) -> &[String] {
        &self.answer_pool
    }

    /// Case-insensitive contains filter over the answer pool, capped at
    /// `limit` entries. Inputs shorter than two characters match nothing.
    #[must_use]
    pub fn suggest(&self, input: &str, limit: usize) -> Vec<&str> {
        let input = input.trim().to_lowercase();
        if input.len() < 2 {
            return Vec::new();
        }
        self.answer_pool
            .iter()
            .filter(|a| a.to_lowercase().contains(&input))
            .take(limit)
            .map(String::as_str)
            .collect()
    }

    /// Draw a question for `category` under the cycle-with-reset policy.
    ///
    /// Returns `None` only when the category has no questions at all.
    pub fn draw(
        &self,
        category: Category,
        used: &mut ImHashSet<usize>,
        rng: &mut GameRng,
    ) -> Option<Question> {
        let all = &self.questions[category];
        if all.is_empty() {
            return None;
        }

        let unused: Vec<usize> = (0..all.len()).filter(|i| !used.contains(i)).collect();

        if unused.is_empty() {
            used.clear();
            let idx = rng.gen_range_usize(0..all.len());
            return Some(all[idx].clone());
        }

        let idx = unused[rng.gen_range_usize(0..unused.len())];
        used.insert(idx);
        Some(all[idx].clone())
    }
}
