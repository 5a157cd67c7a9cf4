//! Dialog components for the TUI interface
//!
//! This module contains dialog boxes like the help and session info
//! dialogs.

use super::layout::centered_rect;
use crate::tui::app::AppState;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Draws the help dialog
pub fn draw_help_dialog(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());

    f.render_widget(Clear, area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("Run Clock:"),
        Line::from("  SPACE / P    - Start, pause or resume the clock"),
        Line::from("  R            - Reset the clock to zero"),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("  ↑ / K        - Previous item"),
        Line::from("  ↓ / J        - Next item"),
        Line::from("  ENTER        - Jump the clock to the selected item"),
        Line::from(""),
        Line::from("Interface:"),
        Line::from("  H / F1       - Toggle this help"),
        Line::from("  I            - Show session info"),
        Line::from("  Q / ESC      - Quit application"),
        Line::from(""),
        Line::from("Press ENTER or SPACE to close this help..."),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White))
        .alignment(ratatui::layout::Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, area);
}

/// Draws the session info dialog
pub fn draw_session_info_dialog(f: &mut Frame, state: &AppState) {
    let area = centered_rect(70, 40, f.area());

    f.render_widget(Clear, area);

    let session_info = vec![
        Line::from(vec![Span::styled(
            "Session Information",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("ID: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(state.session.id.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Share URL: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(state.session.share_url.as_str()),
        ]),
        Line::from(""),
        Line::from("The identifier is derived from the start time of this"),
        Line::from("viewer process; it is not persisted anywhere."),
        Line::from(""),
        Line::from("Press ENTER or SPACE to close this dialog..."),
    ];

    let session_paragraph = Paragraph::new(session_info)
        .block(
            Block::default()
                .title("Session")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .style(Style::default().fg(Color::White))
        .alignment(ratatui::layout::Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(session_paragraph, area);
}
