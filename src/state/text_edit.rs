//! Search box text editing.
//!
//! Pure functions over `(text, cursor)`. The cursor is a char index, never a
//! byte offset. The caller writes the new text back through
//! `RestaurantBrowser::set_search_term`.

use super::keyboard::KeyboardEvent;

/// One editing action on the search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Clear,
}

impl Edit {
    /// Map a key event to an edit. Ctrl/Alt chords map to nothing.
    pub fn from_key(event: &KeyboardEvent) -> Option<Edit> {
        if let Some(ch) = event.printable_char() {
            return Some(Edit::Insert(ch));
        }
        if event.modifiers.is_command() {
            return None;
        }
        match event.key.as_str() {
            "Backspace" => Some(Edit::Backspace),
            "Delete" => Some(Edit::Delete),
            "ArrowLeft" => Some(Edit::Left),
            "ArrowRight" => Some(Edit::Right),
            "Home" => Some(Edit::Home),
            "End" => Some(Edit::End),
            "Escape" => Some(Edit::Clear),
            _ => None,
        }
    }
}

/// Result of applying an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// New text, only when the text changed.
    pub text: Option<String>,
    pub cursor: usize,
}

/// Apply `edit` to `text` with the cursor at `cursor` (clamped to length).
pub fn apply_edit(text: &str, cursor: usize, edit: Edit) -> EditOutcome {
    let mut chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    let unchanged = |cursor| EditOutcome { text: None, cursor };
    let changed = |chars: Vec<char>, cursor| EditOutcome {
        text: Some(chars.into_iter().collect()),
        cursor,
    };

    match edit {
        Edit::Insert(ch) => {
            chars.insert(cursor, ch);
            changed(chars, cursor + 1)
        }
        Edit::Backspace => {
            if cursor == 0 {
                return unchanged(0);
            }
            chars.remove(cursor - 1);
            changed(chars, cursor - 1)
        }
        Edit::Delete => {
            if cursor >= chars.len() {
                return unchanged(cursor);
            }
            chars.remove(cursor);
            changed(chars, cursor)
        }
        Edit::Left => unchanged(cursor.saturating_sub(1)),
        Edit::Right => unchanged((cursor + 1).min(chars.len())),
        Edit::Home => unchanged(0),
        Edit::End => unchanged(chars.len()),
        Edit::Clear => {
            if chars.is_empty() {
                return unchanged(0);
            }
            changed(Vec::new(), 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::keyboard::Modifiers;

    #[test]
    fn test_insert_at_cursor() {
        let out = apply_edit("piza", 2, Edit::Insert('z'));
        assert_eq!(out.text.as_deref(), Some("pizza"));
        assert_eq!(out.cursor, 3);
    }

    #[test]
    fn test_backspace_and_delete() {
        let out = apply_edit("sushi", 5, Edit::Backspace);
        assert_eq!(out.text.as_deref(), Some("sush"));
        assert_eq!(out.cursor, 4);

        let out = apply_edit("sushi", 0, Edit::Delete);
        assert_eq!(out.text.as_deref(), Some("ushi"));
        assert_eq!(out.cursor, 0);

        assert_eq!(apply_edit("abc", 0, Edit::Backspace).text, None);
        assert_eq!(apply_edit("abc", 3, Edit::Delete).text, None);
    }

    #[test]
    fn test_cursor_moves_without_changing_text() {
        assert_eq!(apply_edit("abc", 1, Edit::Left), EditOutcome { text: None, cursor: 0 });
        assert_eq!(apply_edit("abc", 0, Edit::Left).cursor, 0);
        assert_eq!(apply_edit("abc", 3, Edit::Right).cursor, 3);
        assert_eq!(apply_edit("abc", 2, Edit::Home).cursor, 0);
        assert_eq!(apply_edit("abc", 0, Edit::End).cursor, 3);
    }

    #[test]
    fn test_multibyte_chars() {
        let out = apply_edit("₹60", 1, Edit::Insert('5'));
        assert_eq!(out.text.as_deref(), Some("₹560"));
        let out = apply_edit("₹60", 1, Edit::Backspace);
        assert_eq!(out.text.as_deref(), Some("60"));
    }

    #[test]
    fn test_cursor_clamped() {
        let out = apply_edit("ab", 99, Edit::Insert('c'));
        assert_eq!(out.text.as_deref(), Some("abc"));
        assert_eq!(out.cursor, 3);
    }

    #[test]
    fn test_clear() {
        assert_eq!(
            apply_edit("spice", 3, Edit::Clear),
            EditOutcome { text: Some(String::new()), cursor: 0 }
        );
        assert_eq!(apply_edit("", 0, Edit::Clear).text, None);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Edit::from_key(&KeyboardEvent::new("x")), Some(Edit::Insert('x')));
        assert_eq!(Edit::from_key(&KeyboardEvent::new(" ")), Some(Edit::Insert(' ')));
        assert_eq!(Edit::from_key(&KeyboardEvent::new("Backspace")), Some(Edit::Backspace));
        assert_eq!(Edit::from_key(&KeyboardEvent::new("Escape")), Some(Edit::Clear));
        assert_eq!(Edit::from_key(&KeyboardEvent::new("Tab")), None);
        assert_eq!(
            Edit::from_key(&KeyboardEvent::with_modifiers("q", Modifiers::ctrl())),
            None
        );
    }
}
