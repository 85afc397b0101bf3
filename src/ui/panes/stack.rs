//! Stack pane rendering with call frames and their locals
//!
//! Frames are listed innermost first. Each local shows its address, a type
//! annotation, its name and its value; pointers into the stack are followed
//! one level so `rotate3`'s parameters show which caller cell they name.

use super::utils::{clamp_scroll, format_address, format_type_annotation, format_value_styled};
use crate::memory::{stack::Stack, value::Value};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Name of the stack cell at `addr`, if any
fn cell_name(stack: &Stack, addr: u64) -> Option<String> {
    stack.frames().iter().find_map(|frame| {
        frame
            .locals
            .iter()
            .find(|var| var.address == addr)
            .map(|var| format!("{}::{}", frame.function_name, var.name))
    })
}

/// Build the display lines for the stack (exposed for tests)
pub fn stack_lines(stack: &Stack) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if stack.depth() == 0 {
        lines.push(Line::styled(
            "(no frames)",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        return lines;
    }

    for (depth, frame) in stack.frames().iter().enumerate().rev() {
        let is_top = depth + 1 == stack.depth();
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}()", frame.function_name),
                Style::default()
                    .fg(DEFAULT_THEME.function)
                    .add_modifier(if is_top { Modifier::BOLD } else { Modifier::DIM }),
            ),
            Span::styled(
                format!("  #{}", depth),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]));

        let name_width = frame.locals.iter().map(|v| v.name.len()).max().unwrap_or(0);
        for var in &frame.locals {
            let mut spans = vec![
                Span::styled(
                    format!("  {} ", format_address(var.address)),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:<6}", format_type_annotation(&var.value)),
                    Style::default().fg(DEFAULT_THEME.type_name),
                ),
                Span::styled(
                    format!("{:<width$} = ", var.name, width = name_width),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                format_value_styled(&var.value),
            ];
            if let Value::Pointer(addr) = var.value {
                if let Some(target) = cell_name(stack, addr) {
                    spans.push(Span::styled(
                        format!("  → &{}", target),
                        Style::default().fg(DEFAULT_THEME.comment),
                    ));
                }
            }
            lines.push(Line::from(spans));
        }
    }
    lines
}

/// Render the stack pane
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    stack: &Stack,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = super::utils::pane_block(" Stack ".to_string(), is_focused);
    let lines = stack_lines(stack);

    let visible_height = clamp_scroll(lines.len(), area.height, scroll_offset);
    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(ListItem::new)
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_pointer_params_name_their_target() {
        let mut stack = Stack::new();
        stack.push_frame("main");
        let a = stack.declare("a", Value::Int(10)).unwrap();
        stack.push_frame("rotate3");
        stack.declare("a", Value::Pointer(a)).unwrap();

        let lines: Vec<String> = stack_lines(&stack).iter().map(plain).collect();
        assert!(lines[0].starts_with("rotate3()"));
        assert!(lines[1].ends_with("→ &main::a"));
        assert!(lines[2].starts_with("main()"));
        assert!(lines[3].contains("a = 10"));
    }

    #[test]
    fn test_empty_stack() {
        let lines = stack_lines(&Stack::new());
        assert_eq!(plain(&lines[0]), "(no frames)");
    }
}
