//! Service layer for Flashcards
//!
//! `FlashcardService` is the state holder handed to every consumer. It owns
//! the persistence gateway and the current [`AppState`] snapshot, routes all
//! mutations through [`reduce`], and writes changed slices back to storage
//! after each dispatch.
//!
//! # Example
//!
//! ```no_run
//! use libflashcards::service::FlashcardService;
//! use libflashcards::Config;
//!
//! let config = Config::load()?;
//! let mut service = FlashcardService::open(&config);
//! service.bootstrap();
//!
//! let user = service.create_profile("Maya")?;
//! let quiz = service.generate_quiz(1);
//! let answers: Vec<String> = quiz.iter().map(|q| q.correct_answer.clone()).collect();
//! let result = service.submit_quiz(1, &quiz, &answers)?;
//! println!("{} scored {}%", user.username, result.score);
//! # Ok::<(), libflashcards::FlashcardsError>(())
//! ```

pub mod profiles;
pub mod vocabulary;

use serde_json::Value;
use tracing::{debug, info, warn};

use self::vocabulary::WordForm;
use crate::config::{Config, QuizConfig};
use crate::defaults::default_words;
use crate::engine::{reduce, Action, AppState};
use crate::error::{FieldError, FlashcardsError, ImportError, ProfileError, Result};
use crate::levels;
use crate::quiz::{self, QuizQuestion, QuizScore};
use crate::storage::{FileStore, KeyValueStore, Persistence};
use crate::transfer::{self, ExportData, ImportOptions, ImportSummary};
use crate::types::{Level, User, Word};

pub struct FlashcardService<S: KeyValueStore> {
    persistence: Persistence<S>,
    state: AppState,
    quiz: QuizConfig,
}

impl FlashcardService<FileStore> {
    /// Service backed by the configured data directory
    ///
    /// Starts with empty state; call [`FlashcardService::bootstrap`] to load.
    pub fn open(config: &Config) -> Self {
        let store = FileStore::new(config.storage.resolved_path());
        Self::with_store(store, config.quiz)
    }
}

impl<S: KeyValueStore> FlashcardService<S> {
    pub fn with_store(store: S, quiz: QuizConfig) -> Self {
        Self {
            persistence: Persistence::new(store),
            state: AppState::new(),
            quiz,
        }
    }

    /// Load users, words and the selected user from storage
    ///
    /// An empty word inventory is seeded with the bundled vocabulary. A stored
    /// selection that no longer matches any user is dropped.
    pub fn bootstrap(&mut self) -> &AppState {
        let users = self.persistence.load_users();
        let mut words = self.persistence.load_words();
        let stored_current = self.persistence.load_current_user();

        if words.is_empty() {
            words = default_words();
            info!("Word inventory empty, seeded {} default words", words.len());
        }

        self.dispatch(Action::LoadData { users, words });

        let current = stored_current
            .as_ref()
            .and_then(|stored| self.state.user(&stored.id).cloned());
        if stored_current.is_some() && current.is_none() {
            warn!("Stored current user no longer exists, clearing selection");
            self.persistence.save_current_user(None);
        }
        self.dispatch(Action::SetCurrentUser(current));

        debug!(
            "Loaded {} users and {} words",
            self.state.users.len(),
            self.state.words.len()
        );
        &self.state
    }

    /// Current snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn quiz_config(&self) -> QuizConfig {
        self.quiz
    }

    /// Apply `action` and persist whatever changed
    pub fn dispatch(&mut self, action: Action) -> &AppState {
        debug!(action = action.kind(), "Dispatching action");

        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous.clone(), action);
        self.persist_changes(&previous);

        &self.state
    }

    /// Write every slice that changed, empty lists included, so deleting the
    /// last profile sticks. A `None` selection removes its record.
    fn persist_changes(&mut self, previous: &AppState) {
        if self.state.users != previous.users {
            self.persistence.save_users(&self.state.users);
        }
        if self.state.current_user != previous.current_user {
            self.persistence
                .save_current_user(self.state.current_user.as_ref());
        }
        if self.state.words != previous.words {
            self.persistence.save_words(&self.state.words);
        }
    }

    // === Profiles ===

    /// Validate `username`, add the profile and select it
    pub fn create_profile(&mut self, username: &str) -> std::result::Result<User, ProfileError> {
        let user = profiles::create_profile(&self.state.users, username)?;
        self.dispatch(Action::AddUser(user.clone()));
        self.dispatch(Action::SetCurrentUser(Some(user.clone())));
        info!("Created profile '{}'", user.username);
        Ok(user)
    }

    /// Select an existing user; unknown ids leave the selection unchanged
    pub fn select_user(&mut self, user_id: &str) -> Option<&User> {
        if let Some(user) = self.state.user(user_id).cloned() {
            self.dispatch(Action::SetCurrentUser(Some(user)));
        }
        self.state.current_user.as_ref()
    }

    // === Vocabulary ===

    /// Validate `form` and add it as a new word
    pub fn add_word(&mut self, form: &WordForm) -> std::result::Result<Word, Vec<FieldError>> {
        let word = vocabulary::build_word(form, None)?;
        self.dispatch(Action::AddWord(word.clone()));
        Ok(word)
    }

    /// Validate `form` and replace the word `word_id`; unknown ids change nothing
    pub fn edit_word(
        &mut self,
        word_id: &str,
        form: &WordForm,
    ) -> std::result::Result<Word, Vec<FieldError>> {
        let word = vocabulary::build_word(form, Some(word_id))?;
        self.dispatch(Action::UpdateWord(word.clone()));
        Ok(word)
    }

    // === Levels ===

    pub fn words_for_level(&self, level: Level) -> Vec<Word> {
        levels::words_for_level(&self.state.words, level)
    }

    pub fn is_unlocked(&self, level: Level) -> bool {
        levels::is_unlocked(&self.state.words, level)
    }

    /// Has the selected user passed `level`? False with no selection.
    pub fn is_completed(&self, level: Level) -> bool {
        self.state
            .current_user
            .as_ref()
            .is_some_and(|user| levels::is_completed(&user.progress, level))
    }

    pub fn can_take_quiz(&self, level: Level) -> bool {
        levels::can_take_quiz(&self.state.words, level)
    }

    pub fn available_levels(&self) -> Vec<Level> {
        levels::available_levels(&self.state.words)
    }

    // === Quizzes ===

    pub fn generate_quiz(&self, level: Level) -> Vec<QuizQuestion> {
        quiz::generate_quiz_with(
            &self.state.words,
            level,
            self.quiz.question_count,
            &mut rand::thread_rng(),
        )
    }

    pub fn score_quiz<A: AsRef<str>>(&self, questions: &[QuizQuestion], answers: &[A]) -> QuizScore {
        quiz::score_quiz_with(questions, answers, self.quiz.pass_score)
    }

    /// Score a finished quiz and record it for the selected user
    pub fn submit_quiz<A: AsRef<str>>(
        &mut self,
        level: Level,
        questions: &[QuizQuestion],
        answers: &[A],
    ) -> Result<QuizScore> {
        let user_id = self
            .state
            .current_user
            .as_ref()
            .map(|u| u.id.clone())
            .ok_or_else(|| FlashcardsError::InvalidInput("No user selected".to_string()))?;

        let result = self.score_quiz(questions, answers);
        self.dispatch(Action::UpdateQuizResult {
            user_id,
            level,
            score: result.score,
            passed: result.passed,
        });
        info!(
            "Level {} quiz: {}/{} correct ({}%, passed: {})",
            level, result.correct, result.total, result.score, result.passed
        );
        Ok(result)
    }

    // === Backup ===

    pub fn export_all_data(&self) -> ExportData {
        transfer::export_all_data(&self.persistence)
    }

    /// Import into storage, then reload state from it
    pub fn import_data(
        &mut self,
        data: &Value,
        options: ImportOptions,
    ) -> std::result::Result<ImportSummary, ImportError> {
        let summary = transfer::import_data(&mut self.persistence, data, options)?;
        self.bootstrap();
        Ok(summary)
    }

    /// Forget everything, in memory and in storage
    pub fn clear_all(&mut self) {
        self.dispatch(Action::SetCurrentUser(None));
        self.dispatch(Action::LoadData {
            users: Vec::new(),
            words: Vec::new(),
        });
        self.persistence.clear_all();
        info!("Cleared all flashcards data");
    }
}
