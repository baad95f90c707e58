use std::io;

use anyhow::Result;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Terminal;

use crate::jwt::DecodedToken;
use crate::output::time_summary;

use super::input::{compute_layout, cursor_to_row_col};
use super::state::{DecodeState, Outcome};

// ── Styles ────────────────────────────────────────────────────────────

const fn s_header() -> Style { Style::new().fg(Color::Magenta) }
const fn s_payload() -> Style { Style::new().fg(Color::Blue) }
const fn s_signature() -> Style { Style::new().fg(Color::Green) }
const fn s_error() -> Style { Style::new().fg(Color::Red) }
const fn s_dim() -> Style { Style::new().fg(Color::DarkGray) }

fn s_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

// ── Text wrapping ─────────────────────────────────────────────────────

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    if text.is_empty() {
        return vec![String::new()];
    }
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            out.push(String::new());
            continue;
        }
        let mut start = 0;
        let chars: Vec<char> = paragraph.chars().collect();
        while start < chars.len() {
            let end = (start + width).min(chars.len());
            out.push(chars[start..end].iter().collect());
            start = end;
        }
    }
    out
}

// ── Result view ───────────────────────────────────────────────────────

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, color: Color, body: &str, width: usize, style: Style) {
    lines.push(Line::from(Span::styled(title.to_string(), s_title(color))));
    for raw in body.lines() {
        for wrapped in wrap_text(raw, width.saturating_sub(2)) {
            lines.push(Line::from(Span::styled(format!("  {}", wrapped), style)));
        }
    }
    lines.push(Line::from(""));
}

fn decoded_lines(decoded: &DecodedToken, width: usize) -> Vec<Line<'static>> {
    let header = serde_json::to_string_pretty(&decoded.header)
        .unwrap_or_else(|_| decoded.header.to_string());
    let payload = serde_json::to_string_pretty(&decoded.payload)
        .unwrap_or_else(|_| decoded.payload.to_string());

    let mut lines = Vec::new();
    push_section(&mut lines, "Header", Color::Magenta, &header, width, s_header());
    push_section(&mut lines, "Payload (Claims)", Color::Blue, &payload, width, s_payload());
    push_section(&mut lines, "Signature", Color::Green, &decoded.signature, width, s_signature());

    if let Some(summary) = time_summary(&decoded.payload) {
        for wrapped in wrap_text(&summary, width) {
            lines.push(Line::from(Span::styled(wrapped, s_dim())));
        }
    }
    lines
}

/// Styled lines for the result view: the three decoded sections, an error
/// line, or a placeholder before the first decode.
pub(crate) fn result_lines(state: &DecodeState, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    match &state.outcome {
        Some(Outcome::Decoded(decoded)) => decoded_lines(decoded, width),
        Some(Outcome::Failed(message)) => vec![Line::from(Span::styled(message.clone(), s_error()))],
        None => vec![Line::from(Span::styled(
            "Paste a JWT above and press Enter.".to_string(),
            s_dim(),
        ))],
    }
}

pub(crate) fn result_max_scroll(state: &DecodeState, result_area: Rect) -> usize {
    let lines = result_lines(state, result_area.width.saturating_sub(3) as usize);
    let visible = result_area.height.saturating_sub(2) as usize;
    lines.len().saturating_sub(visible.max(1))
}

// ── draw_ui ───────────────────────────────────────────────────────────

pub(crate) fn draw_ui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &DecodeState,
) -> Result<()> {
    let term_size = terminal.size()?;
    let chunks = compute_layout(term_size.into());

    let result_width = chunks[1].width.saturating_sub(3) as usize;
    let lines = result_lines(state, result_width);

    terminal.draw(|frame| {
        // ── Token input ───────────────────────────────────────────
        let input_width = chunks[0].width.saturating_sub(2).max(1) as usize;
        let input_visible = chunks[0].height.saturating_sub(2).max(1) as usize;
        let rows = wrap_text(&state.input, input_width);
        let (cursor_row, cursor_col) = cursor_to_row_col(state.cursor_pos, input_width);

        let input_start = cursor_row.saturating_sub(input_visible - 1);
        let input_end = (input_start + input_visible).min(rows.len());
        let input_text = rows[input_start.min(rows.len())..input_end].join("\n");

        let input = Paragraph::new(input_text).block(
            Block::default()
                .title(" Token ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        // ── Result view ───────────────────────────────────────────
        let visible = chunks[1].height.saturating_sub(2) as usize;
        let max_scroll = lines.len().saturating_sub(visible.max(1));
        let scroll = state.scroll.min(max_scroll);

        let result = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Decoded ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((scroll as u16, 0));

        let mut scrollbar_state = ScrollbarState::new(max_scroll)
            .viewport_content_length(visible)
            .position(scroll);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_style(Style::default().fg(Color::Gray))
            .track_style(Style::default().fg(Color::DarkGray));

        // ── Hint bar ──────────────────────────────────────────────
        let hint = match &state.notice {
            Some(notice) => Paragraph::new(Line::from(Span::raw(notice.clone())))
                .style(Style::default().fg(Color::Green)),
            None => Paragraph::new(Line::from(vec![
                Span::styled("Enter", s_title(Color::Gray)),
                Span::raw("=decode  "),
                Span::styled("Ctrl+Y", s_title(Color::Gray)),
                Span::raw("=copy payload  "),
                Span::styled("Ctrl+L", s_title(Color::Gray)),
                Span::raw("=clear  "),
                Span::styled("PgUp/PgDn", s_title(Color::Gray)),
                Span::raw("=scroll  "),
                Span::styled("Esc", s_title(Color::Gray)),
                Span::raw("=exit"),
            ]))
            .style(Style::default().fg(Color::DarkGray)),
        };

        frame.render_widget(input, chunks[0]);
        frame.render_widget(result, chunks[1]);
        frame.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
        frame.render_widget(hint, chunks[2]);

        let visible_row = cursor_row - input_start;
        let x = chunks[0].x + 1 + cursor_col as u16;
        let y = chunks[0].y + 1 + visible_row as u16;
        frame.set_cursor_position((x, y));
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decoded_state() -> DecodeState {
        let mut state = DecodeState::new();
        state.outcome = Some(Outcome::Decoded(DecodedToken {
            header: json!({"alg": "HS256", "typ": "JWT"}),
            payload: json!({"sub": "1234567890"}),
            signature: "signature123".to_string(),
        }));
        state
    }

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn wraps_long_lines_by_chars() {
        assert_eq!(wrap_text("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_text("", 4), vec![""]);
        assert_eq!(wrap_text("a\nb", 4), vec!["a", "b"]);
        assert_eq!(wrap_text("abc", 0), vec!["abc"]);
    }

    #[test]
    fn result_has_three_titled_sections() {
        let lines = plain(&result_lines(&decoded_state(), 80));
        assert!(lines.contains(&"Header".to_string()));
        assert!(lines.contains(&"Payload (Claims)".to_string()));
        assert!(lines.contains(&"Signature".to_string()));
        assert!(lines.contains(&"  signature123".to_string()));
    }

    #[test]
    fn error_renders_as_single_line() {
        let mut state = DecodeState::new();
        state.input = "a.b.c.d".to_string();
        state.decode_current();
        let lines = plain(&result_lines(&state, 80));
        assert_eq!(lines, vec!["JWT must have 3 parts (header.payload.signature)"]);
    }

    #[test]
    fn placeholder_before_first_decode() {
        let lines = plain(&result_lines(&DecodeState::new(), 80));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Paste a JWT"));
    }
}
