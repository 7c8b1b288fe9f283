//! Question records: raw JSON shape and the validated in-memory form.
//!
//! The bank files are JSON arrays of loosely-shaped records. On load,
//! each record is converted into a `Question` with an explicit
//! multiple-choice / free-text discriminant; a record claiming to be
//! multiple choice must actually carry four choices and an answer label
//! in A..=D, otherwise conversion fails and the record is dropped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Category;

use super::parse::derive_accepted_answers;

/// Raw question record as it appears in the JSON bank files.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawQuestion {
    /// Question text.
    pub question: String,

    /// Canonical answer. For multiple choice this is the correct label
    /// (one of "A".."D"); for free text it is the answer string.
    pub answer: String,

    /// Whether this record provides its own four choices.
    #[serde(default)]
    pub multiple_choice: bool,

    /// The four choices, present when `multiple_choice` is set.
    #[serde(default)]
    pub choices: Option<RawChoices>,

    /// Optional flavor text revealed with the answer.
    #[serde(default)]
    pub answer_bonus: Option<String>,
}

/// The four labeled choices of a multiple-choice record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawChoices {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

impl RawChoices {
    /// The choice text for a label.
    #[must_use]
    pub fn get(&self, label: ChoiceLabel) -> &str {
        match label {
            ChoiceLabel::A => &self.a,
            ChoiceLabel::B => &self.b,
            ChoiceLabel::C => &self.c,
            ChoiceLabel::D => &self.d,
        }
    }
}

/// Choice label for multiple-choice questions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoiceLabel {
    A,
    B,
    C,
    D,
}

impl ChoiceLabel {
    /// All labels in display order.
    pub const ALL: [ChoiceLabel; 4] = [
        ChoiceLabel::A,
        ChoiceLabel::B,
        ChoiceLabel::C,
        ChoiceLabel::D,
    ];

    /// The label as submitted by the UI ("A".."D").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ChoiceLabel::A => "A",
            ChoiceLabel::B => "B",
            ChoiceLabel::C => "C",
            ChoiceLabel::D => "D",
        }
    }

    /// Parse a label from record data.
    #[must_use]
    pub fn parse(text: &str) -> Option<ChoiceLabel> {
        match text.trim() {
            "A" => Some(ChoiceLabel::A),
            "B" => Some(ChoiceLabel::B),
            "C" => Some(ChoiceLabel::C),
            "D" => Some(ChoiceLabel::D),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChoiceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a raw record could not be converted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Multiple-choice record without a choices block.
    #[error("multiple-choice record is missing its choices")]
    MissingChoices,

    /// Multiple-choice record whose answer is not a label A..D.
    #[error("multiple-choice answer {0:?} is not a choice label")]
    BadChoiceLabel(String),
}

/// The kind-specific part of a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Record supplied its own four choices.
    MultipleChoice {
        choices: RawChoices,
        correct: ChoiceLabel,
    },
    /// Free-text answer, checked against derived variants.
    FreeText {
        /// Accepted answer variants (trimmed original plus conjunct,
        /// disjunct, and comma-list fragments), deduplicated.
        accepted: Vec<String>,
    },
}

/// A validated, loaded question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Category this question was loaded under.
    pub category: Category,

    /// Question text.
    pub text: String,

    /// Canonical answer string (label for multiple choice).
    pub answer: String,

    /// Optional flavor text revealed with the answer.
    pub bonus: Option<String>,

    /// Multiple-choice / free-text discriminant and payload.
    pub kind: QuestionKind,
}

impl Question {
    /// Validate and convert a raw record.
    pub fn from_record(category: Category, raw: RawQuestion) -> Result<Self, RecordError> {
        let kind = if raw.multiple_choice {
            let choices = raw.choices.ok_or(RecordError::MissingChoices)?;
            let correct = ChoiceLabel::parse(&raw.answer)
                .ok_or_else(|| RecordError::BadChoiceLabel(raw.answer.clone()))?;
            QuestionKind::MultipleChoice { choices, correct }
        } else {
            QuestionKind::FreeText {
                accepted: derive_accepted_answers(&raw.answer),
            }
        };

        Ok(Self {
            category,
            text: raw.question,
            answer: raw.answer,
            bonus: raw.answer_bonus,
            kind,
        })
    }

    /// Whether this question carries its own choices.
    #[must_use]
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::MultipleChoice { .. })
    }

    /// Check a submitted value.
    ///
    /// Multiple choice: exact match against the correct label. Free
    /// text: trimmed, case-insensitive exact equality against any
    /// accepted variant; never a substring match.
    #[must_use]
    pub fn check_answer(&self, submitted: &str) -> bool {
        match &self.kind {
            QuestionKind::MultipleChoice { correct, .. } => submitted == correct.as_str(),
            QuestionKind::FreeText { accepted } => {
                let submitted = submitted.trim().to_lowercase();
                accepted.iter().any(|a| a.to_lowercase() == submitted)
            }
        }
    }

    /// Text revealed after the answer resolves: the bonus if present,
    /// otherwise the canonical answer.
    #[must_use]
    pub fn reveal_text(&self) -> String {
        match &self.bonus {
            Some(bonus) => bonus.clone(),
            None => format!("The correct answer is: {}", self.answer),
        }
    }
}
