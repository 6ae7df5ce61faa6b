//! Profile creation rules

use crate::error::ProfileError;
use crate::types::User;

/// Shortest accepted username, in characters
pub const MIN_USERNAME_LEN: usize = 2;

/// Trim `raw` and check it can become a new username
///
/// Usernames are unique case-insensitively.
pub fn validate_username(users: &[User], raw: &str) -> Result<String, ProfileError> {
    let username = raw.trim();

    if username.is_empty() {
        return Err(ProfileError::Empty);
    }
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(ProfileError::TooShort);
    }

    let wanted = username.to_lowercase();
    if users.iter().any(|u| u.username.to_lowercase() == wanted) {
        return Err(ProfileError::AlreadyExists);
    }

    Ok(username.to_string())
}

/// Build a fresh profile for `raw`, or say why the name is rejected
pub fn create_profile(users: &[User], raw: &str) -> Result<User, ProfileError> {
    validate_username(users, raw).map(User::new)
}
