//! Labeled field and button primitives
//!
//! The terminal analogue of the host's mobile form primitives: a field
//! label, a tappable value field that opens a picker, and a primary action
//! button row.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// A field label line
pub fn field_label(title: &str) -> Line<'_> {
    Line::from(Span::styled(title, Style::default().fg(Color::Cyan)))
}

/// A tappable value field.
///
/// Shows the current value, or a dimmed placeholder when unset. The focused
/// field is highlighted to show that Enter activates it.
pub fn tap_field<'a>(value: Option<&'a str>, placeholder: &'a str, focused: bool) -> Line<'a> {
    let (text, mut style) = match value {
        Some(v) => (v, Style::default().fg(Color::White)),
        None => (placeholder, Style::default().fg(Color::DarkGray)),
    };
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Line::from(vec![Span::raw("  "), Span::styled(format!(" {text} "), style)])
}

/// A primary action button row
pub fn button_row(label: &str, focused: bool) -> Line<'_> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    Line::from(Span::styled(format!("[ {label} ]"), style)).centered()
}
