mod input;
mod render;
mod state;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::clipboard::copy_to_clipboard;

use input::{backspace, delete, delete_prev_chunk, insert_char, move_left, move_right};
use render::{draw_ui, result_max_scroll};
use state::{DecodeState, Outcome};

// ── Public entry point ────────────────────────────────────────────────

pub fn run_interactive() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

/// Check if a key event is Ctrl+C (any terminal encoding variant).
fn is_ctrl_c(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(
        (
            code,
            modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::META | KeyModifiers::SUPER)
        ),
        (KeyCode::Char('c'), true) | (KeyCode::Char('\x03'), _)
    )
}

/// Copy the pretty payload JSON of the current result, if there is one.
fn copy_payload(state: &mut DecodeState) {
    let Some(Outcome::Decoded(decoded)) = &state.outcome else {
        state.notice = Some("Nothing decoded yet".to_string());
        return;
    };
    let payload = serde_json::to_string_pretty(&decoded.payload)
        .unwrap_or_else(|_| decoded.payload.to_string());
    state.notice = Some(match copy_to_clipboard(&payload) {
        Ok(()) => "Payload copied to clipboard".to_string(),
        Err(err) => format!("Clipboard error: {}", err),
    });
}

// ── Main event loop ───────────────────────────────────────────────────

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let mut state = DecodeState::new();

    loop {
        draw_ui(terminal, &state)?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Paste(text) => {
                state.insert_paste(&text);
            }

            Event::Key(key) if key.kind == KeyEventKind::Press => {
                state.notice = None;

                // Ctrl+C: clear input first, then exit
                if is_ctrl_c(key.code, key.modifiers) {
                    if state.input.is_empty() {
                        return Ok(());
                    }
                    state.input.clear();
                    state.cursor_pos = 0;
                    continue;
                }

                let area = terminal.size()?;
                let chunks = input::compute_layout(area.into());
                let result_area = chunks[1];

                match key.code {
                    KeyCode::Esc => return Ok(()),
                    KeyCode::Enter => state.decode_current(),
                    KeyCode::PageUp => {
                        state.scroll = state.scroll.saturating_sub(4);
                    }
                    KeyCode::PageDown => {
                        let max_scroll = result_max_scroll(&state, result_area);
                        state.scroll = (state.scroll + 4).min(max_scroll);
                    }
                    KeyCode::Left => move_left(&mut state, key.modifiers),
                    KeyCode::Right => move_right(&mut state, key.modifiers),
                    KeyCode::Home => state.cursor_pos = 0,
                    KeyCode::End => state.cursor_pos = state.input.chars().count(),
                    KeyCode::Backspace => backspace(&mut state, key.modifiers),
                    KeyCode::Delete => delete(&mut state),
                    KeyCode::Char(ch) => {
                        if key.modifiers.intersects(
                            KeyModifiers::CONTROL | KeyModifiers::META | KeyModifiers::SUPER,
                        ) {
                            match ch {
                                'y' => copy_payload(&mut state),
                                'l' => state.clear(),
                                'w' => delete_prev_chunk(&mut state.input, &mut state.cursor_pos),
                                _ => {}
                            }
                        } else if !ch.is_control() && !ch.is_whitespace() {
                            insert_char(&mut state, ch);
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}
