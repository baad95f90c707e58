use super::state::DecodeState;

use crossterm::event::KeyModifiers;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal layout: token input on top, result view below, hint bar last.
pub(crate) fn compute_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area)
}

/// Visual (row, col) of the cursor in a wrapped single-line input.
pub(crate) fn cursor_to_row_col(cursor_pos: usize, width: usize) -> (usize, usize) {
    let width = width.max(1);
    (cursor_pos / width, cursor_pos % width)
}

/// Insert a character at cursor position.
pub(crate) fn insert_char(state: &mut DecodeState, ch: char) {
    let chars: Vec<char> = state.input.chars().collect();
    let pos = state.cursor_pos.min(chars.len());
    let before: String = chars[..pos].iter().collect();
    let after: String = chars[pos..].iter().collect();
    state.input = format!("{}{}{}", before, ch, after);
    state.cursor_pos = pos + 1;
}

/// Delete character before cursor.
pub(crate) fn backspace(state: &mut DecodeState, modifiers: KeyModifiers) {
    if modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL | KeyModifiers::META) {
        delete_prev_chunk(&mut state.input, &mut state.cursor_pos);
    } else if state.cursor_pos > 0 {
        let chars: Vec<char> = state.input.chars().collect();
        let pos = state.cursor_pos.min(chars.len());
        let before: String = chars[..pos - 1].iter().collect();
        let after: String = chars[pos..].iter().collect();
        state.input = format!("{}{}", before, after);
        state.cursor_pos = pos - 1;
    }
}

/// Delete character at cursor.
pub(crate) fn delete(state: &mut DecodeState) {
    let chars: Vec<char> = state.input.chars().collect();
    let pos = state.cursor_pos.min(chars.len());
    if pos < chars.len() {
        let before: String = chars[..pos].iter().collect();
        let after: String = chars[pos + 1..].iter().collect();
        state.input = format!("{}{}", before, after);
    }
}

/// Delete back to the previous `.` separator (or the start).
///
/// Tokens have no words in the whitespace sense; the dot is the natural
/// chunk boundary, so Ctrl+W removes one segment at a time.
pub(crate) fn delete_prev_chunk(input: &mut String, cursor_pos: &mut usize) {
    if *cursor_pos == 0 {
        return;
    }
    let chars: Vec<char> = input.chars().collect();
    let pos = (*cursor_pos).min(chars.len());
    let mut start = pos;

    while start > 0 && chars[start - 1] == '.' {
        start -= 1;
    }
    while start > 0 && chars[start - 1] != '.' {
        start -= 1;
    }

    let before: String = chars[..start].iter().collect();
    let after: String = chars[pos..].iter().collect();
    *input = format!("{}{}", before, after);
    *cursor_pos = start;
}

/// Move cursor left, jumping to the previous `.` with Alt.
pub(crate) fn move_left(state: &mut DecodeState, modifiers: KeyModifiers) {
    if modifiers.contains(KeyModifiers::ALT) {
        let chars: Vec<char> = state.input.chars().collect();
        let mut pos = state.cursor_pos.min(chars.len());
        while pos > 0 && chars[pos - 1] == '.' {
            pos -= 1;
        }
        while pos > 0 && chars[pos - 1] != '.' {
            pos -= 1;
        }
        state.cursor_pos = pos;
    } else {
        state.cursor_pos = state.cursor_pos.saturating_sub(1);
    }
}

/// Move cursor right, jumping to the next `.` with Alt.
pub(crate) fn move_right(state: &mut DecodeState, modifiers: KeyModifiers) {
    let len = state.input.chars().count();
    if modifiers.contains(KeyModifiers::ALT) {
        let chars: Vec<char> = state.input.chars().collect();
        let mut pos = state.cursor_pos.min(chars.len());
        while pos < chars.len() && chars[pos] != '.' {
            pos += 1;
        }
        while pos < chars.len() && chars[pos] == '.' {
            pos += 1;
        }
        state.cursor_pos = pos;
    } else {
        state.cursor_pos = (state.cursor_pos + 1).min(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(input: &str, cursor: usize) -> DecodeState {
        let mut state = DecodeState::new();
        state.input = input.to_string();
        state.cursor_pos = cursor;
        state
    }

    #[test]
    fn cursor_wraps_by_width() {
        assert_eq!(cursor_to_row_col(0, 10), (0, 0));
        assert_eq!(cursor_to_row_col(9, 10), (0, 9));
        assert_eq!(cursor_to_row_col(10, 10), (1, 0));
        assert_eq!(cursor_to_row_col(25, 10), (2, 5));
        // Zero width must not divide by zero
        assert_eq!(cursor_to_row_col(5, 0), (5, 0));
    }

    #[test]
    fn insert_and_backspace() {
        let mut state = state_with("ac", 1);
        insert_char(&mut state, 'b');
        assert_eq!(state.input, "abc");
        assert_eq!(state.cursor_pos, 2);

        backspace(&mut state, KeyModifiers::NONE);
        assert_eq!(state.input, "ac");
        assert_eq!(state.cursor_pos, 1);
    }

    #[test]
    fn delete_at_cursor() {
        let mut state = state_with("abc", 1);
        delete(&mut state);
        assert_eq!(state.input, "ac");
        assert_eq!(state.cursor_pos, 1);

        let mut state = state_with("abc", 3);
        delete(&mut state);
        assert_eq!(state.input, "abc");
    }

    #[test]
    fn chunk_delete_removes_one_segment() {
        let mut input = "aaa.bbb.ccc".to_string();
        let mut cursor = input.len();
        delete_prev_chunk(&mut input, &mut cursor);
        assert_eq!(input, "aaa.bbb.");
        assert_eq!(cursor, 8);

        delete_prev_chunk(&mut input, &mut cursor);
        assert_eq!(input, "aaa.");
        assert_eq!(cursor, 4);
    }

    #[test]
    fn alt_arrows_jump_between_segments() {
        let mut state = state_with("aaa.bbb.ccc", 11);
        move_left(&mut state, KeyModifiers::ALT);
        assert_eq!(state.cursor_pos, 8);
        move_left(&mut state, KeyModifiers::ALT);
        assert_eq!(state.cursor_pos, 4);

        move_right(&mut state, KeyModifiers::ALT);
        assert_eq!(state.cursor_pos, 8);
        move_right(&mut state, KeyModifiers::ALT);
        assert_eq!(state.cursor_pos, 11);
    }
}
