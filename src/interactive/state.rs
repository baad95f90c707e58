use crate::jwt::{self, DecodedToken};

/// Result of the last decode, kept until the next one replaces it.
pub(crate) enum Outcome {
    Decoded(DecodedToken),
    Failed(String),
}

pub(crate) struct DecodeState {
    /// Token being edited. One logical line; tokens contain no whitespace.
    pub input: String,
    pub cursor_pos: usize,
    pub outcome: Option<Outcome>,
    /// Scroll offset into the result view.
    pub scroll: usize,
    /// Transient message for the hint bar, cleared on the next key press.
    pub notice: Option<String>,
}

impl DecodeState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor_pos: 0,
            outcome: None,
            scroll: 0,
            notice: None,
        }
    }

    /// Decode the current input and replace any previous result.
    pub fn decode_current(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        self.outcome = Some(match jwt::decode(self.input.trim()) {
            Ok(decoded) => Outcome::Decoded(decoded),
            Err(err) => Outcome::Failed(err.to_string()),
        });
        self.scroll = 0;
    }

    /// Insert pasted text at the cursor, stripping whitespace and newlines.
    pub fn insert_paste(&mut self, text: &str) {
        let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let chars: Vec<char> = self.input.chars().collect();
        let pos = self.cursor_pos.min(chars.len());
        let before: String = chars[..pos].iter().collect();
        let after: String = chars[pos..].iter().collect();
        self.input = format!("{}{}{}", before, cleaned, after);
        self.cursor_pos = pos + cleaned.chars().count();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
        self.outcome = None;
        self.scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paste_strips_whitespace_and_newlines() {
        let mut state = DecodeState::new();
        state.insert_paste("eyJh\nbGci  \tOiJI\r\n");
        assert_eq!(state.input, "eyJhbGciOiJI");
        assert_eq!(state.cursor_pos, 12);
    }

    #[test]
    fn paste_inserts_at_cursor() {
        let mut state = DecodeState::new();
        state.input = "ac".to_string();
        state.cursor_pos = 1;
        state.insert_paste("b");
        assert_eq!(state.input, "abc");
        assert_eq!(state.cursor_pos, 2);
    }

    #[test]
    fn decode_keeps_one_result() {
        let mut state = DecodeState::new();
        state.input = "abc".to_string();
        state.decode_current();
        assert!(matches!(state.outcome, Some(Outcome::Failed(_))));

        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        let header = URL_SAFE_NO_PAD.encode(json!({"alg": "HS256"}).to_string());
        let payload = URL_SAFE_NO_PAD.encode(json!({"sub": "s"}).to_string());
        state.input = format!("{}.{}.sig", header, payload);
        state.decode_current();
        assert!(matches!(state.outcome, Some(Outcome::Decoded(_))));
    }

    #[test]
    fn decode_ignores_empty_input() {
        let mut state = DecodeState::new();
        state.input = "   ".to_string();
        state.decode_current();
        assert!(state.outcome.is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = DecodeState::new();
        state.input = "a.b.c.d".to_string();
        state.decode_current();
        state.scroll = 3;
        state.clear();
        assert!(state.input.is_empty());
        assert_eq!(state.cursor_pos, 0);
        assert!(state.outcome.is_none());
        assert_eq!(state.scroll, 0);
    }
}
