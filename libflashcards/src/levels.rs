//! Level policy
//!
//! Pure functions deciding which levels exist, which are unlocked, and which
//! a user has completed. Levels are cumulative: studying level N covers every
//! word with `level <= N`.
//!
//! Unlocking depends only on content volume, never on mastery: level N opens
//! once every level below it holds at least [`UNLOCK_THRESHOLD`] words.

use std::collections::BTreeSet;

use crate::types::{Level, Progress, Word};

/// Words a level needs before the next one unlocks
pub const UNLOCK_THRESHOLD: usize = 10;

/// Smallest cumulative word set that can fill a four-option question
pub const MIN_QUIZ_WORDS: usize = 4;

/// Word counts shown for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelInfo {
    /// Words assigned exactly to this level
    pub new_words: usize,
    /// Words at this level or below
    pub total_words: usize,
}

/// Cumulative study set for `level`
pub fn words_for_level(words: &[Word], level: Level) -> Vec<Word> {
    words.iter().filter(|w| w.level <= level).cloned().collect()
}

/// Words assigned exactly to `level`
pub fn words_in_level(words: &[Word], level: Level) -> Vec<Word> {
    words.iter().filter(|w| w.level == level).cloned().collect()
}

fn count_in_level(words: &[Word], level: Level) -> usize {
    words.iter().filter(|w| w.level == level).count()
}

fn count_up_to_level(words: &[Word], level: Level) -> usize {
    words.iter().filter(|w| w.level <= level).count()
}

pub fn is_unlocked(words: &[Word], level: Level) -> bool {
    if level <= 1 {
        return true;
    }
    (1..level).all(|i| count_in_level(words, i) >= UNLOCK_THRESHOLD)
}

pub fn is_completed(progress: &Progress, level: Level) -> bool {
    progress.completed_levels.contains(&level)
}

pub fn can_take_quiz(words: &[Word], level: Level) -> bool {
    is_unlocked(words, level) && count_up_to_level(words, level) >= MIN_QUIZ_WORDS
}

/// Distinct levels that have at least one word, ascending
///
/// Empty when the inventory is empty; callers hide level-gated features then.
pub fn available_levels(words: &[Word]) -> Vec<Level> {
    words
        .iter()
        .map(|w| w.level)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn level_info(words: &[Word], level: Level) -> LevelInfo {
    LevelInfo {
        new_words: count_in_level(words, level),
        total_words: count_up_to_level(words, level),
    }
}

/// Highest available level that is unlocked, or 1
pub fn max_unlocked_level(words: &[Word]) -> Level {
    available_levels(words)
        .into_iter()
        .filter(|&level| is_unlocked(words, level))
        .max()
        .unwrap_or(1)
}
