//! Question bank: records, answer parsing, option synthesis, draws.

pub mod bank;
pub mod options;
pub mod parse;
pub mod record;

pub use bank::{JsonFileSource, QuestionBank, QuestionSource, SourceError};
pub use options::{build_options, AnswerOption};
pub use parse::derive_accepted_answers;
pub use record::{ChoiceLabel, Question, QuestionKind, RawChoices, RawQuestion, RecordError};
