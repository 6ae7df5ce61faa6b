//! Quiz generation and scoring
//!
//! A quiz for level N draws up to [`MAX_QUESTIONS`] distinct words from the
//! cumulative study set and turns each into a multiple-choice question: the
//! word's english term plus up to [`DISTRACTOR_COUNT`] other english terms,
//! in random order.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::levels::words_for_level;
use crate::types::{Level, Word};

/// Upper bound on questions per quiz
pub const MAX_QUESTIONS: usize = 10;

/// Wrong options offered next to the correct one
pub const DISTRACTOR_COUNT: usize = 3;

/// Minimum percentage needed to pass
pub const DEFAULT_PASS_SCORE: u32 = 70;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    /// Word being asked about (its emoji and hebrew are the prompt)
    pub word: Word,
    /// Answer choices, correct one included exactly once
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    /// Rounded percentage, 0-100
    pub score: u32,
    pub passed: bool,
}

/// Uniformly random permutation of `items`, leaving the input untouched
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Build a quiz for `level` with the default question cap
pub fn generate_quiz(words: &[Word], level: Level) -> Vec<QuizQuestion> {
    generate_quiz_with(words, level, MAX_QUESTIONS, &mut rand::thread_rng())
}

/// Build a quiz for `level` from the word inventory
///
/// Questions come from the cumulative set for `level`; distractors come from
/// the whole inventory, skipping the question's own word and any word that
/// shares its english term. With too few distinct terms a question simply
/// carries fewer than four options. An empty study set yields no questions.
pub fn generate_quiz_with<R: Rng + ?Sized>(
    words: &[Word],
    level: Level,
    max_questions: usize,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let level_words = words_for_level(words, level);
    let question_count = max_questions.min(level_words.len());

    shuffle(&level_words, rng)
        .into_iter()
        .take(question_count)
        .map(|word| build_question(words, word, rng))
        .collect()
}

fn build_question<R: Rng + ?Sized>(inventory: &[Word], word: Word, rng: &mut R) -> QuizQuestion {
    let candidates: Vec<&Word> = inventory
        .iter()
        .filter(|w| w.id != word.id && w.english != word.english)
        .collect();

    let mut seen = HashSet::new();
    let distractors = shuffle(&candidates, rng)
        .into_iter()
        .map(|w| w.english.clone())
        .filter(|english| seen.insert(english.clone()))
        .take(DISTRACTOR_COUNT);

    let correct_answer = word.english.clone();
    let options: Vec<String> = std::iter::once(correct_answer.clone())
        .chain(distractors)
        .collect();

    QuizQuestion {
        options: shuffle(&options, rng),
        correct_answer,
        word,
    }
}

/// Score answers with the default pass mark
pub fn score_quiz<S: AsRef<str>>(questions: &[QuizQuestion], answers: &[S]) -> QuizScore {
    score_quiz_with(questions, answers, DEFAULT_PASS_SCORE)
}

/// Score answers given in question order
///
/// An answer counts only when it matches the stored correct answer exactly
/// (case-sensitive). Missing answers count as wrong.
pub fn score_quiz_with<S: AsRef<str>>(
    questions: &[QuizQuestion],
    answers: &[S],
    pass_score: u32,
) -> QuizScore {
    let total = questions.len();
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| AsRef::<str>::as_ref(*answer) == question.correct_answer)
        .count();

    let score = if total == 0 {
        0
    } else {
        ((correct as f64 / total as f64) * 100.0).round() as u32
    };

    QuizScore {
        correct,
        total,
        score,
        passed: total > 0 && score >= pass_score,
    }
}
