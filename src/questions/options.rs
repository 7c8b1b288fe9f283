//! Four-way answer option synthesis.
//!
//! Multiple-choice questions surface their own choices, labeled A..D in
//! order. Free-text questions are converted to multiple choice by
//! synthesizing three distractors and shuffling the four options; the
//! submit value of each synthesized option is its text, so correctness
//! still runs through `Question::check_answer`.

use serde::Serialize;

use crate::core::GameRng;

use super::record::{ChoiceLabel, Question, QuestionKind};

/// Fallback distractors for free-text answers that are neither numbers
/// nor years.
const GENERIC_POOL: [&str; 19] = [
    "Walt Disney",
    "Mickey Mouse",
    "Roy Disney",
    "Snow White",
    "Cinderella",
    "Sleeping Beauty",
    "Disneyland",
    "Magic Kingdom",
    "Epcot",
    "The Lion King",
    "Beauty and the Beast",
    "Aladdin",
    "Frozen",
    "Toy Story",
    "Finding Nemo",
    "1955",
    "1971",
    "1998",
    "2001",
];

/// One selectable answer option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    /// Text shown on the button.
    pub text: String,

    /// Value submitted when chosen: the label for native multiple
    /// choice, the option text for synthesized options.
    pub value: String,

    /// Whether choosing this option is correct (UI highlight hint).
    pub is_correct: bool,
}

/// Build the four options for a question.
#[must_use]
pub fn build_options(question: &Question, rng: &mut GameRng) -> Vec<AnswerOption> {
    match &question.kind {
        QuestionKind::MultipleChoice { choices, correct } => ChoiceLabel::ALL
            .iter()
            .map(|&label| AnswerOption {
                text: choices.get(label).to_string(),
                value: label.as_str().to_string(),
                is_correct: label == *correct,
            })
            .collect(),
        QuestionKind::FreeText { .. } => {
            let mut options = vec![AnswerOption {
                text: question.answer.clone(),
                value: question.answer.clone(),
                is_correct: true,
            }];
            for wrong in generate_distractors(&question.answer, rng) {
                options.push(AnswerOption {
                    value: wrong.clone(),
                    text: wrong,
                    is_correct: false,
                });
            }
            rng.shuffle(&mut options);
            options
        }
    }
}

/// Synthesize three plausible wrong answers for a free-text answer.
fn generate_distractors(answer: &str, rng: &mut GameRng) -> Vec<String> {
    let answer = answer.trim();

    if let Ok(n) = answer.parse::<i64>() {
        return vec![
            (n + 1).to_string(),
            (n - 1).to_string(),
            (n + 5).to_string(),
        ];
    }

    if is_year(answer) {
        // Unreachable for plain digits (those parse above); kept for
        // year-shaped answers that are not plain integers.
        let year: i64 = answer.parse().unwrap_or(2000);
        return vec![
            (year - 1).to_string(),
            (year + 1).to_string(),
            (year - 3).to_string(),
        ];
    }

    let lower = answer.to_lowercase();
    let mut pool: Vec<&str> = GENERIC_POOL
        .iter()
        .copied()
        .filter(|w| {
            let w_lower = w.to_lowercase();
            w_lower != lower && !lower.contains(&w_lower)
        })
        .collect();

    let mut wrongs = Vec::with_capacity(3);
    while wrongs.len() < 3 && !pool.is_empty() {
        let idx = rng.gen_range_usize(0..pool.len());
        wrongs.push(pool.swap_remove(idx).to_string());
    }
    while wrongs.len() < 3 {
        wrongs.push(format!("Option {}", wrongs.len() + 1));
    }

    wrongs
}

fn is_year(text: &str) -> bool {
    text.len() == 4 && text.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use crate::questions::record::{RawChoices, RawQuestion};

    fn free_text_question(answer: &str) -> Question {
        Question::from_record(
            Category::Misc,
            RawQuestion {
                question: "Q?".to_string(),
                answer: answer.to_string(),
                multiple_choice: false,
                choices: None,
                answer_bonus: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_multiple_choice_options_in_label_order() {
        let question = Question::from_record(
            Category::Parks,
            RawQuestion {
                question: "Pick one".to_string(),
                answer: "B".to_string(),
                multiple_choice: true,
                choices: Some(RawChoices {
                    a: "one".into(),
                    b: "two".into(),
                    c: "three".into(),
                    d: "four".into(),
                }),
                answer_bonus: None,
            },
        )
        .unwrap();

        let mut rng = GameRng::new(42);
        let options = build_options(&question, &mut rng);

        assert_eq!(options.len(), 4);
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["A", "B", "C", "D"]);
        assert!(options[1].is_correct);
        assert_eq!(options.iter().filter(|o| o.is_correct).count(), 1);
    }

    #[test]
    fn test_numeric_distractors() {
        let mut rng = GameRng::new(42);
        let wrongs = generate_distractors("7", &mut rng);
        assert_eq!(wrongs, vec!["8", "6", "12"]);
    }

    #[test]
    fn test_year_answers_use_numeric_rule() {
        let mut rng = GameRng::new(42);
        let wrongs = generate_distractors("1955", &mut rng);
        assert_eq!(wrongs, vec!["1956", "1954", "1960"]);
    }

    #[test]
    fn test_generic_distractors_exclude_answer() {
        let mut rng = GameRng::new(42);
        for _ in 0..50 {
            let wrongs = generate_distractors("Walt Disney World", &mut rng);
            assert_eq!(wrongs.len(), 3);
            for w in &wrongs {
                // "Walt Disney" is a substring of the answer, so it must
                // never appear; neither may the answer itself.
                assert_ne!(w.to_lowercase(), "walt disney world");
                assert_ne!(w, "Walt Disney");
            }
        }
    }

    #[test]
    fn test_distractors_are_distinct() {
        let mut rng = GameRng::new(9);
        let wrongs = generate_distractors("Moana", &mut rng);
        assert_eq!(wrongs.len(), 3);
        assert_ne!(wrongs[0], wrongs[1]);
        assert_ne!(wrongs[1], wrongs[2]);
        assert_ne!(wrongs[0], wrongs[2]);
    }

    #[test]
    fn test_free_text_options_contain_one_correct() {
        let question = free_text_question("Moana");
        let mut rng = GameRng::new(42);
        let options = build_options(&question, &mut rng);

        assert_eq!(options.len(), 4);
        assert_eq!(options.iter().filter(|o| o.is_correct).count(), 1);

        // The correct option's submit value passes the answer check;
        // distractor values do not.
        for option in &options {
            assert_eq!(question.check_answer(&option.value), option.is_correct);
        }
    }

    #[test]
    fn test_free_text_options_are_shuffled() {
        let question = free_text_question("Moana");

        // Across seeds the correct option lands in different slots.
        let mut positions = std::collections::HashSet::new();
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let options = build_options(&question, &mut rng);
            positions.insert(options.iter().position(|o| o.is_correct));
        }
        assert!(positions.len() > 1);
    }
}
