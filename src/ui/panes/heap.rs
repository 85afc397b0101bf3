//! Heap pane rendering with node blocks
//!
//! Every block ever allocated is listed by address. Live blocks show the
//! node's fields; freed blocks stay visible as tombstones so a stale head
//! or cursor can be matched to what it used to point at.

use super::utils::{clamp_scroll, format_address, pane_block};
use crate::constants::NODE_SIZE;
use crate::memory::{
    heap::{BlockState, Heap},
    value::Address,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Build the display lines for the heap (exposed for tests)
pub fn heap_lines(heap: &Heap, error_address: Option<Address>) -> Vec<Line<'static>> {
    let blocks = heap.blocks();
    if blocks.is_empty() {
        return vec![Line::styled(
            "(no allocations)",
            Style::default().fg(DEFAULT_THEME.comment),
        )];
    }

    let mut lines = Vec::new();
    for (addr, block) in blocks {
        let addr_style = if Some(addr) == error_address {
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };

        let mut header = vec![
            Span::styled(format_address(addr), addr_style),
            Span::raw(" | "),
            Span::styled(
                format!("{} bytes", NODE_SIZE),
                Style::default().fg(DEFAULT_THEME.primary),
            ),
            Span::raw(" | "),
            Span::styled("struct Node", Style::default().fg(DEFAULT_THEME.type_name)),
        ];

        if block.state == BlockState::Tombstone {
            header.push(Span::styled(
                "  (freed)",
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::DIM),
            ));
            lines.push(Line::from(header));
            continue;
        }
        lines.push(Line::from(header));

        let next = match block.node.next {
            Some(next) => Span::styled(
                format_address(next),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
            None => Span::styled("NULL", Style::default().fg(DEFAULT_THEME.error)),
        };
        lines.push(Line::from(vec![
            Span::styled("  => .x    : ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                block.node.value.to_string(),
                Style::default().fg(DEFAULT_THEME.number),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  => .next : ", Style::default().fg(DEFAULT_THEME.comment)),
            next,
        ]));
    }
    lines
}

/// Render the heap pane
pub fn render_heap_pane(
    frame: &mut Frame,
    area: Rect,
    heap: &Heap,
    error_address: Option<Address>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(
        " Heap Memory ({}/{} live, {} bytes) ",
        heap.live_blocks(),
        heap.max_blocks(),
        heap.total_allocated()
    );
    let block = pane_block(title, is_focused);
    let lines = heap_lines(heap, error_address);

    let visible_height = clamp_scroll(lines.len(), area.height, scroll_offset);
    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(ListItem::new)
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
