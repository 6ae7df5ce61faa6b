//! Bundled starter vocabulary
//!
//! Seeded into an empty word inventory on first start: five themed levels
//! of ten words each, so every level from 2 through 5 is unlocked.

use crate::types::{Level, Word};

const DEFAULT_WORDS: &[(&str, &str, &str, &str, Level)] = &[
    ("default-1", "🍎", "Apple", "תפוח", 1),
    ("default-2", "🍌", "Banana", "בננה", 1),
    ("default-3", "🐱", "Cat", "חתול", 1),
    ("default-4", "🐶", "Dog", "כלב", 1),
    ("default-5", "🏠", "House", "בית", 1),
    ("default-6", "🚗", "Car", "מכונית", 1),
    ("default-7", "📚", "Book", "ספר", 1),
    ("default-8", "💧", "Water", "מים", 1),
    ("default-9", "🌞", "Sun", "שמש", 1),
    ("default-10", "🌙", "Moon", "ירח", 1),
    ("default-11", "👁️", "Eye", "עין", 2),
    ("default-12", "👂", "Ear", "אוזן", 2),
    ("default-13", "👃", "Nose", "אף", 2),
    ("default-14", "👄", "Mouth", "פה", 2),
    ("default-15", "✋", "Hand", "יד", 2),
    ("default-16", "👨", "Father", "אבא", 2),
    ("default-17", "👩", "Mother", "אמא", 2),
    ("default-18", "👦", "Boy", "ילד", 2),
    ("default-19", "👧", "Girl", "ילדה", 2),
    ("default-20", "👴", "Grandfather", "סבא", 2),
    ("default-21", "🍞", "Bread", "לחם", 3),
    ("default-22", "🧀", "Cheese", "גבינה", 3),
    ("default-23", "🥛", "Milk", "חלב", 3),
    ("default-24", "🍖", "Meat", "בשר", 3),
    ("default-25", "🐟", "Fish", "דג", 3),
    ("default-26", "🥕", "Carrot", "גזר", 3),
    ("default-27", "🍅", "Tomato", "עגבנייה", 3),
    ("default-28", "☕", "Coffee", "קפה", 3),
    ("default-29", "🍵", "Tea", "תה", 3),
    ("default-30", "🍰", "Cake", "עוגה", 3),
    ("default-31", "✏️", "Pencil", "עיפרון", 4),
    ("default-32", "📝", "Paper", "נייר", 4),
    ("default-33", "🏫", "School", "בית ספר", 4),
    ("default-34", "👨‍🏫", "Teacher", "מורה", 4),
    ("default-35", "🎒", "Backpack", "תיק", 4),
    ("default-36", "💼", "Briefcase", "מזוודה", 4),
    ("default-37", "🖥️", "Computer", "מחשב", 4),
    ("default-38", "📱", "Phone", "טלפון", 4),
    ("default-39", "⏰", "Clock", "שעון", 4),
    ("default-40", "📅", "Calendar", "לוח שנה", 4),
    ("default-41", "🌳", "Tree", "עץ", 5),
    ("default-42", "🌸", "Flower", "פרח", 5),
    ("default-43", "🌱", "Plant", "צמח", 5),
    ("default-44", "🌊", "Ocean", "אוקיינוס", 5),
    ("default-45", "⛰️", "Mountain", "הר", 5),
    ("default-46", "🌧️", "Rain", "גשם", 5),
    ("default-47", "❄️", "Snow", "שלג", 5),
    ("default-48", "🌪️", "Wind", "רוח", 5),
    ("default-49", "⚡", "Lightning", "ברק", 5),
    ("default-50", "🌈", "Rainbow", "קשת בענן", 5),
];

/// Fresh copy of the bundled vocabulary
pub fn default_words() -> Vec<Word> {
    DEFAULT_WORDS
        .iter()
        .map(|&(id, emoji, english, hebrew, level)| Word {
            id: id.to_string(),
            emoji: emoji.to_string(),
            english: english.to_string(),
            hebrew: hebrew.to_string(),
            level,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_words_ten_per_level() {
        let words = default_words();
        assert_eq!(words.len(), 50);
        for level in 1..=5 {
            assert_eq!(words.iter().filter(|w| w.level == level).count(), 10);
        }
    }

    #[test]
    fn test_default_words_unique_ids_and_terms() {
        let words = default_words();
        let ids: HashSet<_> = words.iter().map(|w| w.id.as_str()).collect();
        let english: HashSet<_> = words.iter().map(|w| w.english.as_str()).collect();
        assert_eq!(ids.len(), words.len());
        assert_eq!(english.len(), words.len());
    }
}
