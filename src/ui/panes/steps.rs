//! Steps pane: the recorded statements of the current drill
//!
//! Each snapshot label is a C-like statement. The pane lists them with a
//! step number, highlights the current one, and keeps it in view.

use super::utils::pane_block;
use crate::snapshot::SnapshotManager;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Simple syntax highlighting for C-like step labels
fn highlight_step(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Handle comments
        if c == '/' && chars.get(i + 1) == Some(&'*') {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            spans.push(Span::styled(
                chars[i..].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }

        // Handle strings
        if c == '"' {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                if chars[end] == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            end = (end + 1).min(chars.len());
            spans.push(Span::styled(
                chars[i..end].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let style = keyword_style(&current_word, c == '(');
                spans.push(Span::styled(std::mem::take(&mut current_word), style));
            }

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = keyword_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn keyword_style(word: &str, is_function: bool) -> Style {
    match word {
        "int" => Style::default().fg(DEFAULT_THEME.type_name),
        "struct" | "return" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "NULL" => Style::default().fg(DEFAULT_THEME.number),
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the steps pane
pub fn render_steps_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    history: &SnapshotManager,
    current_step: usize,
    is_error: bool,
    is_focused: bool,
) {
    let block = pane_block(format!(" {} ", title), is_focused);

    // Keep the current step in the middle of the pane when possible
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let total = history.len();
    let mut offset = current_step.saturating_sub(visible_height / 2);
    if total > visible_height {
        offset = offset.min(total - visible_height);
    } else {
        offset = 0;
    }

    let last_step = total.saturating_sub(1);
    let lines: Vec<Line> = history
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_height)
        .map(|(idx, snapshot)| {
            let is_current = idx == current_step;
            let number = format!("{:4} ", idx + 1);

            let (num_style, base_style) = if is_current && is_error && idx == last_step {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                    Style::default()
                        .bg(DEFAULT_THEME.error)
                        .fg(ratatui::style::Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else if is_current {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                    Style::default().bg(DEFAULT_THEME.current_line_bg),
                )
            } else {
                (Style::default().fg(DEFAULT_THEME.comment), Style::default())
            };

            let mut content = highlight_step(&snapshot.label);
            if is_current {
                for span in &mut content.spans {
                    span.style = span.style.patch(base_style);
                }
            }

            let mut spans = vec![Span::styled(number, num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
