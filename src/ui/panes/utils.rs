use crate::memory::value::{Address, Value};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};

/// Bordered block whose border reflects focus
pub(crate) fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `offset` so the visible window stays inside `total` items; returns the window height
pub(crate) fn clamp_scroll(total: usize, area_height: u16, offset: &mut usize) -> usize {
    let visible_height = area_height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total > visible_height {
        *offset = (*offset).min(total - visible_height);
    } else {
        *offset = 0;
    }
    visible_height
}

pub(crate) fn format_address(addr: Address) -> String {
    format!("0x{:08x}", addr)
}

/// Plain-text rendering of a cell value
pub(crate) fn format_value_string(value: &Value) -> String {
    match value {
        Value::Int(n) => n.to_string(),
        Value::Pointer(addr) => format_address(*addr),
        Value::Null => "NULL".to_string(),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(|n| n.to_string()).collect();
            format!("{{{}}}", items.join(", "))
        }
        Value::Struct(fields) => {
            let fields: Vec<String> = fields
                .iter()
                .map(|(name, v)| format!(".{} = {}", name, format_value_string(v)))
                .collect();
            format!("{{ {} }}", fields.join(", "))
        }
        Value::Uninitialized => "[uninit]".to_string(),
    }
}

/// Format a value with styled spans
pub(crate) fn format_value_styled(value: &Value) -> Span<'static> {
    let style = match value {
        Value::Int(_) | Value::Array(_) => Style::default().fg(DEFAULT_THEME.number),
        Value::Pointer(_) => Style::default().fg(DEFAULT_THEME.secondary),
        Value::Null => Style::default().fg(DEFAULT_THEME.error),
        Value::Struct(_) => Style::default().fg(DEFAULT_THEME.fg),
        Value::Uninitialized => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::DIM),
    };
    Span::styled(format_value_string(value), style)
}

/// C-style type annotation for a cell value
pub(crate) fn format_type_annotation(value: &Value) -> String {
    match value {
        Value::Int(_) | Value::Uninitialized => "int".to_string(),
        Value::Pointer(_) | Value::Null => "ptr".to_string(),
        Value::Array(items) => format!("int[{}]", items.len()),
        Value::Struct(_) => "struct".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_values() {
        assert_eq!(format_value_string(&Value::Int(-4)), "-4");
        assert_eq!(format_value_string(&Value::Null), "NULL");
        assert_eq!(format_value_string(&Value::Pointer(0x10)), "0x00000010");
        assert_eq!(
            format_value_string(&Value::Array(vec![1, 2, 17])),
            "{1, 2, 17}"
        );
        let view = Value::Struct(vec![
            ("begin".to_string(), Value::Pointer(0x4)),
            ("end".to_string(), Value::Null),
        ]);
        assert_eq!(
            format_value_string(&view),
            "{ .begin = 0x00000004, .end = NULL }"
        );
        assert_eq!(format_type_annotation(&view), "struct");
    }

    #[test]
    fn test_clamp_scroll() {
        let mut offset = 50;
        assert_eq!(clamp_scroll(10, 6, &mut offset), 4);
        assert_eq!(offset, 6);

        let mut offset = 3;
        clamp_scroll(2, 10, &mut offset);
        assert_eq!(offset, 0);
    }
}
