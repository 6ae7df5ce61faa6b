//! Pure reducer function for state transitions
//!
//! The reducer is a pure function: `(State, Action) -> State`.
//!
//! It has NO side effects - it only computes new state values. Persistence
//! happens outside, in the service layer, by comparing snapshots.

use super::actions::Action;
use super::state::AppState;
use crate::types::{Level, Progress, QuizResult, QuizResults, User};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
///
/// # Purity Guarantees
///
/// - No file I/O
/// - No storage calls
/// - No mutations of shared data (returns new state)
/// - Deterministic (same inputs -> same output)
///
/// Actions referencing an unknown user or word id leave the state unchanged.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === Profiles ===
        Action::SetCurrentUser(user) => {
            // Point at the stored entry when one exists, so the two never diverge
            let current_user = user.map(|u| state.user(&u.id).cloned().unwrap_or(u));
            AppState {
                current_user,
                ..state
            }
        }

        Action::AddUser(user) => {
            let mut users = state.users;
            users.push(user);
            AppState { users, ..state }
        }

        Action::DeleteUser(user_id) => {
            let current_user = state.current_user.filter(|u| u.id != user_id);
            let users = state
                .users
                .into_iter()
                .filter(|u| u.id != user_id)
                .collect();
            AppState {
                current_user,
                users,
                ..state
            }
        }

        Action::UpdateUserProgress { user_id, progress } => {
            update_user(state, &user_id, |user| User {
                progress: progress.clone(),
                ..user
            })
        }

        Action::UpdateQuizResult {
            user_id,
            level,
            score,
            passed,
        } => update_user(state, &user_id, |user| {
            record_quiz_result(user, level, score, passed)
        }),

        Action::ResetUserProgress(user_id) => update_user(state, &user_id, |user| User {
            progress: Progress::default(),
            quiz_results: QuizResults::new(),
            ..user
        }),

        // === Vocabulary ===
        Action::SetWords(words) => AppState { words, ..state },

        Action::AddWord(word) => {
            let mut words = state.words;
            words.push(word);
            AppState { words, ..state }
        }

        Action::UpdateWord(word) => {
            let words = state
                .words
                .into_iter()
                .map(|w| if w.id == word.id { word.clone() } else { w })
                .collect();
            AppState { words, ..state }
        }

        Action::DeleteWord(word_id) => {
            let words = state
                .words
                .into_iter()
                .filter(|w| w.id != word_id)
                .collect();
            AppState { words, ..state }
        }

        // === Bulk ===
        Action::LoadData { users, words } => {
            // Re-point the selection at the freshly loaded entry; drop it if gone
            let current_user = state
                .current_user
                .and_then(|current| users.iter().find(|u| u.id == current.id).cloned());
            AppState {
                current_user,
                users,
                words,
            }
        }
    }
}

/// Apply `update` to the user with `user_id` and mirror the result into
/// `current_user` when it is the same user
fn update_user<F>(state: AppState, user_id: &str, mut update: F) -> AppState
where
    F: FnMut(User) -> User,
{
    let users: Vec<User> = state
        .users
        .into_iter()
        .map(|u| if u.id == user_id { update(u) } else { u })
        .collect();

    let current_user = match state.current_user {
        Some(current) if current.id == user_id => {
            match users.iter().find(|u| u.id == user_id) {
                Some(updated) => Some(updated.clone()),
                None => Some(update(current)),
            }
        }
        other => other,
    };

    AppState {
        current_user,
        users,
        words: state.words,
    }
}

/// Bump attempts and, on a pass, complete the level and raise the current level
fn record_quiz_result(user: User, level: Level, score: u32, passed: bool) -> User {
    let attempts = user.quiz_results.get(&level).map_or(0, |r| r.attempts) + 1;

    let mut quiz_results = user.quiz_results;
    quiz_results.insert(
        level,
        QuizResult {
            score: score.min(100),
            passed,
            attempts,
        },
    );

    let progress = if passed {
        let mut completed_levels = user.progress.completed_levels;
        completed_levels.insert(level);
        Progress {
            completed_levels,
            current_level: user.progress.current_level.max(level.saturating_add(1)),
        }
    } else {
        user.progress
    };

    User {
        progress,
        quiz_results,
        ..user
    }
}
